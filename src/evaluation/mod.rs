pub mod multiple_choice;
pub mod registry;
pub mod strategy;
pub mod subjective;
pub mod true_false;

pub use multiple_choice::MultipleChoiceStrategy;
pub use registry::StrategyRegistry;
pub use strategy::{AnswerStrategy, Evaluation};
pub use subjective::SubjectiveStrategy;
pub use true_false::TrueFalseStrategy;
