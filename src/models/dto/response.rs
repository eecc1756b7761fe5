use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::evaluation::Evaluation;
use crate::models::domain::{AnswerValue, Quiz, QuizAnswerKey, User, UserAnswer};

#[derive(Debug, Clone, Serialize)]
pub struct QuizDto {
    pub id: String,
    pub book_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(flatten)]
    pub answer: QuizAnswerKey,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<Quiz> for QuizDto {
    fn from(quiz: Quiz) -> Self {
        QuizDto {
            id: quiz.id,
            book_id: quiz.book_id,
            title: quiz.title,
            explanation: quiz.explanation,
            hint: quiz.hint,
            answer: quiz.answer,
            created_at: quiz.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EvaluationDto {
    pub valid: bool,
    pub is_correct: bool,
    pub score: f64,
    pub feedback: String,
}

impl From<Evaluation> for EvaluationDto {
    fn from(evaluation: Evaluation) -> Self {
        EvaluationDto {
            valid: evaluation.valid,
            is_correct: evaluation.is_correct,
            score: evaluation.score,
            feedback: evaluation.feedback,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UserAnswerDto {
    pub id: String,
    pub user_id: String,
    pub quiz_id: String,
    #[serde(flatten)]
    pub submitted: AnswerValue,
    pub attempt_number: u32,
    pub is_correct: bool,
    pub submitted_at: DateTime<Utc>,
}

impl From<UserAnswer> for UserAnswerDto {
    fn from(answer: UserAnswer) -> Self {
        UserAnswerDto {
            id: answer.id,
            user_id: answer.user_id,
            quiz_id: answer.quiz_id,
            submitted: answer.submitted,
            attempt_number: answer.attempt_number,
            is_correct: answer.is_correct,
            submitted_at: answer.submitted_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmitAnswerResponse {
    pub answer: UserAnswerDto,
    pub evaluation: EvaluationDto,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserQuizSummaryDto {
    pub user_id: String,
    pub quiz_id: String,
    pub total_attempts: u32,
    pub has_correct_answer: bool,
    /// Lowest attempt number among correct attempts, or the total attempt
    /// count when none are correct.
    pub best_attempt: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserAnswerStatsDto {
    pub user_id: String,
    pub total_attempts: u64,
    pub correct_answers: u64,
    pub accuracy: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserDto {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        UserDto {
            id: user.id,
            username: user.username,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserDto,
}
