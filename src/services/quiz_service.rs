use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    evaluation::{Evaluation, StrategyRegistry},
    models::{
        domain::{AnswerValue, Quiz, QuizKind},
        dto::{
            request::{CreateQuizRequest, UpdateQuizRequest},
            response::QuizDto,
        },
    },
    repositories::{BookRepository, QuizRepository},
};

/// Ties quiz persistence to evaluation: the single entry point for both the
/// read-only evaluation path and type-preserving quiz CRUD.
pub struct QuizService {
    quiz_repository: Arc<dyn QuizRepository>,
    book_repository: Arc<dyn BookRepository>,
    registry: Arc<StrategyRegistry>,
}

impl QuizService {
    pub fn new(
        quiz_repository: Arc<dyn QuizRepository>,
        book_repository: Arc<dyn BookRepository>,
        registry: Arc<StrategyRegistry>,
    ) -> Self {
        Self {
            quiz_repository,
            book_repository,
            registry,
        }
    }

    pub async fn get_quiz(&self, id: &str) -> AppResult<Quiz> {
        self.quiz_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", id)))
    }

    /// Evaluate a submission against a stored quiz. Persists nothing.
    pub async fn evaluate_answer(
        &self,
        quiz_id: &str,
        submitted: &AnswerValue,
    ) -> AppResult<Evaluation> {
        let quiz = self.get_quiz(quiz_id).await?;
        self.evaluate_against(&quiz, submitted)
    }

    /// Dispatches on the quiz's runtime kind after checking the submitted
    /// value's shape against it. Shared by the evaluate-only path and by
    /// answer recording.
    pub fn evaluate_against(&self, quiz: &Quiz, submitted: &AnswerValue) -> AppResult<Evaluation> {
        if submitted.kind() != quiz.kind() {
            return Err(AppError::InvalidAnswerType(format!(
                "Quiz '{}' is {} but the submitted answer is {}",
                quiz.id,
                quiz.kind(),
                submitted.kind()
            )));
        }

        self.registry
            .get(quiz.kind())
            .evaluate(&quiz.answer, submitted)
    }

    pub async fn create_quiz(&self, request: CreateQuizRequest) -> AppResult<QuizDto> {
        request.validate()?;
        request.answer.validate()?;

        if !self.book_repository.exists_by_id(&request.book_id).await? {
            return Err(AppError::NotFound(format!(
                "Book with id '{}' not found",
                request.book_id
            )));
        }

        let quiz = Quiz::new(
            &request.book_id,
            &request.title,
            request.explanation,
            request.hint,
            request.answer,
        );
        let created = self.quiz_repository.insert(quiz).await?;

        log::info!(
            "Created {} quiz '{}' for book '{}'",
            created.kind(),
            created.id,
            created.book_id
        );
        Ok(created.into())
    }

    /// Type-preserving update: the payload's kind must match the stored
    /// kind; the owning book and creation timestamp carry over.
    pub async fn update_quiz(&self, id: &str, request: UpdateQuizRequest) -> AppResult<QuizDto> {
        request.validate()?;

        let existing = self.get_quiz(id).await?;

        if request.answer.kind() != existing.kind() {
            return Err(AppError::TypeMismatch(format!(
                "Quiz '{}' is {} and cannot be updated with a {} payload",
                id,
                existing.kind(),
                request.answer.kind()
            )));
        }

        request.answer.validate()?;

        let updated = Quiz {
            id: existing.id,
            book_id: existing.book_id,
            title: request.title,
            explanation: request.explanation,
            hint: request.hint,
            answer: request.answer,
            created_at: existing.created_at,
        };
        let updated = self.quiz_repository.replace(updated).await?;
        Ok(updated.into())
    }

    pub async fn delete_quiz(&self, id: &str) -> AppResult<()> {
        self.quiz_repository.delete_by_id(id).await?;
        log::info!("Deleted quiz '{}'", id);
        Ok(())
    }

    pub async fn get_quizzes_by_book(&self, book_id: &str) -> AppResult<Vec<QuizDto>> {
        if !self.book_repository.exists_by_id(book_id).await? {
            return Err(AppError::NotFound(format!(
                "Book with id '{}' not found",
                book_id
            )));
        }

        let quizzes = self.quiz_repository.find_by_book_id(book_id).await?;
        Ok(quizzes.into_iter().map(Into::into).collect())
    }

    pub async fn search_quizzes(
        &self,
        kind: Option<String>,
        title: Option<String>,
    ) -> AppResult<Vec<QuizDto>> {
        let kind = kind.map(|tag| tag.parse::<QuizKind>()).transpose()?;

        let quizzes = self.quiz_repository.search(kind, title).await?;
        Ok(quizzes.into_iter().map(Into::into).collect())
    }
}
