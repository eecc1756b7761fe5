pub mod book;
pub mod quiz;
pub mod user;
pub mod user_answer;

pub use book::Book;
pub use quiz::{Quiz, QuizAnswerKey, QuizKind};
pub use user::User;
pub use user_answer::{AnswerValue, UserAnswer};
