use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{AnswerValue, UserAnswer},
        dto::response::{
            SubmitAnswerResponse, UserAnswerDto, UserAnswerStatsDto, UserQuizSummaryDto,
        },
    },
    repositories::{UserAnswerRepository, UserRepository},
    services::quiz_service::QuizService,
};

/// Records one immutable attempt per submission. Attempt numbers are
/// computed optimistically; the storage-level unique constraint on
/// (user_id, quiz_id, attempt_number) is the authoritative serialization
/// point and its violation surfaces as `DuplicateAttempt`.
pub struct UserAnswerService {
    user_answer_repository: Arc<dyn UserAnswerRepository>,
    user_repository: Arc<dyn UserRepository>,
    quiz_service: Arc<QuizService>,
}

impl UserAnswerService {
    pub fn new(
        user_answer_repository: Arc<dyn UserAnswerRepository>,
        user_repository: Arc<dyn UserRepository>,
        quiz_service: Arc<QuizService>,
    ) -> Self {
        Self {
            user_answer_repository,
            user_repository,
            quiz_service,
        }
    }

    pub async fn create_user_answer(
        &self,
        user_id: &str,
        quiz_id: &str,
        submitted: AnswerValue,
        explicit_attempt_number: Option<u32>,
    ) -> AppResult<SubmitAnswerResponse> {
        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id '{}' not found", user_id)))?;
        let quiz = self.quiz_service.get_quiz(quiz_id).await?;

        if submitted.kind() != quiz.kind() {
            return Err(AppError::TypeMismatch(format!(
                "Quiz '{}' is {} but the submitted answer is tagged {}",
                quiz.id,
                quiz.kind(),
                submitted.kind()
            )));
        }

        if let Some(number) = explicit_attempt_number {
            if number == 0 {
                return Err(AppError::ValidationError(
                    "Attempt number must be positive".to_string(),
                ));
            }
        }

        let evaluation = self.quiz_service.evaluate_against(&quiz, &submitted)?;

        // Optimistic read-then-decide: concurrent submissions may compute
        // the same next number; the unique index picks exactly one winner.
        let attempt_number = match explicit_attempt_number {
            Some(number) => number,
            None => {
                let count = self
                    .user_answer_repository
                    .count_by_user_and_quiz(user_id, quiz_id)
                    .await?;
                count as u32 + 1
            }
        };

        let answer = UserAnswer::new(
            &user.id,
            &quiz.id,
            submitted,
            attempt_number,
            evaluation.is_correct,
        );

        let stored = match self.user_answer_repository.insert(answer).await {
            Ok(stored) => stored,
            Err(AppError::AlreadyExists(_)) => {
                return Err(AppError::DuplicateAttempt { attempt_number });
            }
            Err(err) => return Err(err),
        };

        log::info!(
            "Recorded attempt {} for user '{}' on quiz '{}' (correct: {})",
            stored.attempt_number,
            stored.user_id,
            stored.quiz_id,
            stored.is_correct
        );

        Ok(SubmitAnswerResponse {
            answer: stored.into(),
            evaluation: evaluation.into(),
        })
    }

    /// Narrow correction path: replaces the submitted value of an existing
    /// attempt and re-evaluates correctness. Attempt number, user, quiz and
    /// id are immutable; this is not a re-attempt.
    pub async fn update_user_answer(
        &self,
        id: &str,
        user_id: &str,
        submitted: AnswerValue,
    ) -> AppResult<SubmitAnswerResponse> {
        let existing = self
            .user_answer_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("User answer with id '{}' not found", id))
            })?;

        if existing.user_id != user_id {
            return Err(AppError::Unauthorized(
                "Cannot modify another user's answer".to_string(),
            ));
        }

        let quiz = self.quiz_service.get_quiz(&existing.quiz_id).await?;

        if submitted.kind() != quiz.kind() {
            return Err(AppError::TypeMismatch(format!(
                "Quiz '{}' is {} but the corrected answer is tagged {}",
                quiz.id,
                quiz.kind(),
                submitted.kind()
            )));
        }

        let evaluation = self.quiz_service.evaluate_against(&quiz, &submitted)?;

        let corrected = UserAnswer {
            submitted,
            is_correct: evaluation.is_correct,
            ..existing
        };
        let stored = self.user_answer_repository.replace(corrected).await?;

        Ok(SubmitAnswerResponse {
            answer: stored.into(),
            evaluation: evaluation.into(),
        })
    }

    /// Stored attempts for one user on one quiz, newest attempt first.
    pub async fn get_user_answers_by_quiz(
        &self,
        user_id: &str,
        quiz_id: &str,
    ) -> AppResult<Vec<UserAnswerDto>> {
        let answers = self
            .user_answer_repository
            .find_by_user_and_quiz(user_id, quiz_id)
            .await?;
        Ok(answers.into_iter().map(Into::into).collect())
    }

    pub async fn get_attempt_count(&self, user_id: &str, quiz_id: &str) -> AppResult<u64> {
        self.user_answer_repository
            .count_by_user_and_quiz(user_id, quiz_id)
            .await
    }

    pub async fn has_correct_answer(&self, user_id: &str, quiz_id: &str) -> AppResult<bool> {
        let answers = self
            .user_answer_repository
            .find_by_user_and_quiz(user_id, quiz_id)
            .await?;
        Ok(answers.iter().any(|answer| answer.is_correct))
    }

    /// "How many tries until success, or did they ever succeed": best
    /// attempt is the lowest attempt number among correct attempts, or the
    /// total attempt count when none are correct.
    pub async fn get_user_quiz_summary(
        &self,
        user_id: &str,
        quiz_id: &str,
    ) -> AppResult<UserQuizSummaryDto> {
        let answers = self
            .user_answer_repository
            .find_by_user_and_quiz(user_id, quiz_id)
            .await?;

        let total_attempts = answers.len() as u32;
        let best_attempt = answers
            .iter()
            .filter(|answer| answer.is_correct)
            .map(|answer| answer.attempt_number)
            .min()
            .unwrap_or(total_attempts);

        Ok(UserQuizSummaryDto {
            user_id: user_id.to_string(),
            quiz_id: quiz_id.to_string(),
            total_attempts,
            has_correct_answer: answers.iter().any(|answer| answer.is_correct),
            best_attempt,
        })
    }

    pub async fn get_user_answer_stats(&self, user_id: &str) -> AppResult<UserAnswerStatsDto> {
        let answers = self.user_answer_repository.find_by_user(user_id).await?;

        let total_attempts = answers.len() as u64;
        let correct_answers = answers.iter().filter(|answer| answer.is_correct).count() as u64;
        let accuracy = if total_attempts == 0 {
            0.0
        } else {
            correct_answers as f64 / total_attempts as f64
        };

        Ok(UserAnswerStatsDto {
            user_id: user_id.to_string(),
            total_attempts,
            correct_answers,
            accuracy,
        })
    }
}
