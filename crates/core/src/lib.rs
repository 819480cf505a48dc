#![forbid(unsafe_code)]

pub mod filter;
pub mod model;
pub mod sort;
pub mod table;

pub use filter::{FilterValues, QuestionFilter, distinct_tags, project};
pub use sort::{compare_questions, sort_questions};
pub use table::{QuestionRow, SolutionCell, TablePort};
