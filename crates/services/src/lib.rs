#![forbid(unsafe_code)]

pub mod app_services;
pub mod completion_service;
pub mod dataset;
pub mod error;
pub mod question_board;

pub use app_services::AppServices;
pub use completion_service::CompletionService;
pub use dataset::{DatasetLoader, DatasetSource, FileSource, HttpSource, StaticSource};
pub use error::{AppServicesError, CompletionError, DatasetError};
pub use question_board::{Progress, QuestionBoard};
