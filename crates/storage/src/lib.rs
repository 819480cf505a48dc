#![forbid(unsafe_code)]

pub mod completion;
pub mod repository;
pub mod sqlite;

pub use completion::{COMPLETION_KEY, CompletionMap};
pub use repository::{InMemoryStore, KeyValueStore, Storage, StorageError};
