pub mod book_repository;
pub mod quiz_repository;
pub mod user_answer_repository;
pub mod user_repository;

pub use book_repository::{BookRepository, MongoBookRepository};
pub use quiz_repository::{MongoQuizRepository, QuizRepository};
pub use user_answer_repository::{MongoUserAnswerRepository, UserAnswerRepository};
pub use user_repository::{MongoUserRepository, UserRepository};

/// Mongo signals a unique-index violation with write error code 11000.
/// Repositories surface it distinguishably so the service layer can
/// translate it into a typed conflict instead of a generic database fault.
pub(crate) fn is_duplicate_key_error(err: &mongodb::error::Error) -> bool {
    matches!(
        err.kind.as_ref(),
        mongodb::error::ErrorKind::Write(mongodb::error::WriteFailure::WriteError(write_error))
            if write_error.code == 11000
    )
}
