mod loader;
mod source;

pub use loader::{DatasetLoader, parse_dataset};
pub use source::{DatasetSource, FileSource, HttpSource, StaticSource, source_for};
