mod difficulty;
mod ids;
mod question;

pub use difficulty::Difficulty;
pub use ids::QuestionId;
pub use question::{Question, QuestionError, QuestionRecord};
