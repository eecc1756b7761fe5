pub mod answer_handler;
pub mod auth_handler;
pub mod quiz_handler;
pub mod user_handler;

pub use answer_handler::{
    correct_answer, get_user_answer_stats, get_user_answers, get_user_quiz_summary, submit_answer,
};
pub use auth_handler::{login, register};
pub use quiz_handler::{
    create_quiz, delete_quiz, evaluate_answer, get_quiz, get_quizzes_by_book, search_quizzes,
    update_quiz,
};
pub use user_handler::{get_user, health_check, health_check_live, health_check_ready};
