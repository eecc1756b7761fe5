use crate::errors::{AppError, AppResult};
use crate::evaluation::strategy::AnswerStrategy;
use crate::models::domain::{AnswerValue, QuizAnswerKey, QuizKind};

pub struct MultipleChoiceStrategy;

fn expect_key(key: &QuizAnswerKey) -> AppResult<(&[String], u32)> {
    match key {
        QuizAnswerKey::MultipleChoice {
            options,
            correct_index,
        } => Ok((options, *correct_index)),
        other => Err(AppError::InvalidAnswerType(format!(
            "Multiple-choice strategy received a {} answer key",
            other.kind()
        ))),
    }
}

fn expect_selection(submitted: &AnswerValue) -> AppResult<u32> {
    match submitted {
        AnswerValue::Selection { selected_index } => Ok(*selected_index),
        other => Err(AppError::InvalidAnswerType(format!(
            "Expected a selected option index, got a {} answer",
            other.kind()
        ))),
    }
}

impl AnswerStrategy for MultipleChoiceStrategy {
    fn kind(&self) -> QuizKind {
        QuizKind::MultipleChoice
    }

    fn validate(&self, key: &QuizAnswerKey, submitted: &AnswerValue) -> AppResult<bool> {
        let (options, _) = expect_key(key)?;
        let selected = expect_selection(submitted)?;

        Ok((selected as usize) < options.len())
    }

    fn is_correct(&self, key: &QuizAnswerKey, submitted: &AnswerValue) -> AppResult<bool> {
        let (_, correct_index) = expect_key(key)?;
        let selected = expect_selection(submitted)?;

        // Exact integer equality, no tolerance.
        Ok(selected == correct_index)
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

        let (options, correct_index) = expect_key(key)?;
        // User-facing option numbering is 1-based.
        Ok(format!(
            "Incorrect. The correct answer is option {} ({}).",
            correct_index + 1,
            options[correct_index as usize]
        ))
    }
}
