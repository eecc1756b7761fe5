use crate::errors::AppResult;
use crate::models::domain::{AnswerValue, QuizAnswerKey, QuizKind};

/// Outcome of evaluating one submission against one answer key. `valid` and
/// `is_correct` are separate dimensions: a submission can fail the
/// structural check (e.g. word-count limit) and still be compared against
/// the key. The caller decides how to surface both.
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub valid: bool,
    pub is_correct: bool,
    pub score: f64,
    pub feedback: String,
}

/// Evaluation algorithm bundle for one quiz kind. Implementations are
/// stateless; a shape mismatch between key and submission is an
/// `InvalidAnswerType` error, never a panic.
pub trait AnswerStrategy: Send + Sync {
    fn kind(&self) -> QuizKind;

    /// Structural acceptability of the submission, independent of
    /// correctness.
    fn validate(&self, key: &QuizAnswerKey, submitted: &AnswerValue) -> AppResult<bool>;

    fn is_correct(&self, key: &QuizAnswerKey, submitted: &AnswerValue) -> AppResult<bool>;

    /// Binary scoring: exactly 1.0 or 0.0, never interpolated.
    fn score(&self, key: &QuizAnswerKey, submitted: &AnswerValue) -> AppResult<f64> {
        Ok(if self.is_correct(key, submitted)? {
            1.0
        } else {
            0.0
        })
    }

    /// Human-readable explanation. Reveals the correct answer only on
    /// incorrect submissions.
    fn feedback(
        &self,
        key: &QuizAnswerKey,
        submitted: &AnswerValue,
        is_correct: bool,
    ) -> AppResult<String>;

    fn evaluate(&self, key: &QuizAnswerKey, submitted: &AnswerValue) -> AppResult<Evaluation> {
        let valid = self.validate(key, submitted)?;
        let is_correct = self.is_correct(key, submitted)?;
        let score = if is_correct { 1.0 } else { 0.0 };
        let feedback = self.feedback(key, submitted, is_correct)?;

        Ok(Evaluation {
            valid,
            is_correct,
            score,
            feedback,
        })
    }
}
