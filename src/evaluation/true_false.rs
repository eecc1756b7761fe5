use crate::errors::{AppError, AppResult};
use crate::evaluation::strategy::AnswerStrategy;
use crate::models::domain::{AnswerValue, QuizAnswerKey, QuizKind};

pub struct TrueFalseStrategy;

fn expect_key(key: &QuizAnswerKey) -> AppResult<bool> {
    match key {
        QuizAnswerKey::TrueFalse { correct_answer } => Ok(*correct_answer),
        other => Err(AppError::InvalidAnswerType(format!(
            "True/false strategy received a {} answer key",
            other.kind()
        ))),
    }
}

fn expect_boolean(submitted: &AnswerValue) -> AppResult<bool> {
    match submitted {
        AnswerValue::Boolean { value } => Ok(*value),
        other => Err(AppError::InvalidAnswerType(format!(
            "Expected a boolean answer, got a {} answer",
            other.kind()
        ))),
    }
}

impl AnswerStrategy for TrueFalseStrategy {
    fn kind(&self) -> QuizKind {
        QuizKind::TrueFalse
    }

    /// No structural invariant to check for a boolean submission.
    fn validate(&self, key: &QuizAnswerKey, submitted: &AnswerValue) -> AppResult<bool> {
        expect_key(key)?;
        expect_boolean(submitted)?;
        Ok(true)
    }

    fn is_correct(&self, key: &QuizAnswerKey, submitted: &AnswerValue) -> AppResult<bool> {
        let correct = expect_key(key)?;
        let value = expect_boolean(submitted)?;

        Ok(value == correct)
    }

    fn feedback(
        &self,
        key: &QuizAnswerKey,
        _submitted: &AnswerValue,
        is_correct: bool,
    ) -> AppResult<String> {
        if is_correct {
            return Ok("Correct!".to_string());
        }

        let correct = expect_key(key)?;
        Ok(format!("Incorrect. The correct answer is {}.", correct))
    }
}
