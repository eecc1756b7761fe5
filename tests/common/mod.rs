#![allow(dead_code)]

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use bookquiz_server::{
    errors::{AppError, AppResult},
    evaluation::StrategyRegistry,
    models::domain::{Book, Quiz, QuizKind, User, UserAnswer},
    repositories::{BookRepository, QuizRepository, UserAnswerRepository, UserRepository},
    services::{QuizService, UserAnswerService, UserService},
};

pub struct InMemoryQuizRepository {
    quizzes: Arc<RwLock<HashMap<String, Quiz>>>,
}

impl InMemoryQuizRepository {
    pub fn new() -> Self {
        Self {
            quizzes: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl QuizRepository for InMemoryQuizRepository {
    async fn insert(&self, quiz: Quiz) -> AppResult<Quiz> {
        let mut quizzes = self.quizzes.write().await;
        if quizzes.contains_key(&quiz.id) {
            return Err(AppError::AlreadyExists(format!(
                "Quiz with id '{}' already exists",
                quiz.id
            )));
        }
        quizzes.insert(quiz.id.clone(), quiz.clone());
        Ok(quiz)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>> {
        let quizzes = self.quizzes.read().await;
        Ok(quizzes.get(id).cloned())
    }

    async fn replace(&self, quiz: Quiz) -> AppResult<Quiz> {
        let mut quizzes = self.quizzes.write().await;
        if !quizzes.contains_key(&quiz.id) {
            return Err(AppError::NotFound(format!(
                "Quiz with id '{}' not found",
                quiz.id
            )));
        }
        quizzes.insert(quiz.id.clone(), quiz.clone());
        Ok(quiz)
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<()> {
        let mut quizzes = self.quizzes.write().await;
        if quizzes.remove(id).is_none() {
            return Err(AppError::NotFound(format!(
                "Quiz with id '{}' not found",
                id
            )));
        }
        Ok(())
    }

    async fn exists_by_id(&self, id: &str) -> AppResult<bool> {
        let quizzes = self.quizzes.read().await;
        Ok(quizzes.contains_key(id))
    }

    async fn find_by_book_id(&self, book_id: &str) -> AppResult<Vec<Quiz>> {
        let quizzes = self.quizzes.read().await;
        let mut items: Vec<_> = quizzes
            .values()
            .filter(|q| q.book_id == book_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(items)
    }

    async fn search(
        &self,
        kind: Option<QuizKind>,
        title: Option<String>,
    ) -> AppResult<Vec<Quiz>> {
        let quizzes = self.quizzes.read().await;
        let title = title.map(|t| t.to_lowercase());
        let mut items: Vec<_> = quizzes
            .values()
            .filter(|q| kind.map(|k| q.kind() == k).unwrap_or(true))
            .filter(|q| {
                title
                    .as_ref()
                    .map(|t| q.title.to_lowercase().contains(t))
                    .unwrap_or(true)
            })
            .cloned()
            .collect();
        items.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(items)
    }
}

pub struct InMemoryUserAnswerRepository {
    answers: Arc<RwLock<HashMap<String, UserAnswer>>>,
}

impl InMemoryUserAnswerRepository {
    pub fn new() -> Self {
        Self {
            answers: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl UserAnswerRepository for InMemoryUserAnswerRepository {
    async fn insert(&self, answer: UserAnswer) -> AppResult<UserAnswer> {
        // The write lock makes the uniqueness check and the insert one
        // atomic step, mirroring the database unique index.
        let mut answers = self.answers.write().await;

        let duplicate = answers.values().any(|existing| {
            existing.user_id == answer.user_id
                && existing.quiz_id == answer.quiz_id
                && existing.attempt_number == answer.attempt_number
        });
        if duplicate {
            return Err(AppError::AlreadyExists(format!(
                "Attempt {} already recorded for user '{}' on quiz '{}'",
                answer.attempt_number, answer.user_id, answer.quiz_id
            )));
        }

        if answers.contains_key(&answer.id) {
            return Err(AppError::AlreadyExists(format!(
                "User answer with id '{}' already exists",
                answer.id
            )));
        }

        answers.insert(answer.id.clone(), answer.clone());
        Ok(answer)
    }

    async fn replace(&self, answer: UserAnswer) -> AppResult<UserAnswer> {
        let mut answers = self.answers.write().await;
        if !answers.contains_key(&answer.id) {
            return Err(AppError::NotFound(format!(
                "User answer with id '{}' not found",
                answer.id
            )));
        }
        answers.insert(answer.id.clone(), answer.clone());
        Ok(answer)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<UserAnswer>> {
        let answers = self.answers.read().await;
        Ok(answers.get(id).cloned())
    }

    async fn find_by_user_and_quiz(
        &self,
        user_id: &str,
        quiz_id: &str,
    ) -> AppResult<Vec<UserAnswer>> {
        let answers = self.answers.read().await;
        let mut items: Vec<_> = answers
            .values()
            .filter(|a| a.user_id == user_id && a.quiz_id == quiz_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.attempt_number.cmp(&a.attempt_number));
        Ok(items)
    }

    async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<UserAnswer>> {
        let answers = self.answers.read().await;
        let mut items: Vec<_> = answers
            .values()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        Ok(items)
    }

    async fn count_by_user_and_quiz(&self, user_id: &str, quiz_id: &str) -> AppResult<u64> {
        let answers = self.answers.read().await;
        Ok(answers
            .values()
            .filter(|a| a.user_id == user_id && a.quiz_id == quiz_id)
            .count() as u64)
    }
}

pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: User) -> AppResult<User> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.username == user.username) {
            return Err(AppError::AlreadyExists(format!(
                "User with username '{}' already exists",
                user.username
            )));
        }
        users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.username == username).cloned())
    }
}

pub struct InMemoryBookRepository {
    books: Arc<RwLock<HashMap<String, Book>>>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self {
            books: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn add(&self, book: Book) {
        self.books.write().await.insert(book.id.clone(), book);
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Book>> {
        let books = self.books.read().await;
        Ok(books.get(id).cloned())
    }

    async fn exists_by_id(&self, id: &str) -> AppResult<bool> {
        let books = self.books.read().await;
        Ok(books.contains_key(id))
    }
}

/// Fully wired services over in-memory repositories.
pub struct TestContext {
    pub quiz_repository: Arc<InMemoryQuizRepository>,
    pub user_answer_repository: Arc<InMemoryUserAnswerRepository>,
    pub user_repository: Arc<InMemoryUserRepository>,
    pub book_repository: Arc<InMemoryBookRepository>,
    pub quiz_service: Arc<QuizService>,
    pub user_answer_service: Arc<UserAnswerService>,
    pub user_service: Arc<UserService>,
}

pub fn setup() -> TestContext {
    let quiz_repository = Arc::new(InMemoryQuizRepository::new());
    let user_answer_repository = Arc::new(InMemoryUserAnswerRepository::new());
    let user_repository = Arc::new(InMemoryUserRepository::new());
    let book_repository = Arc::new(InMemoryBookRepository::new());

    let quiz_service = Arc::new(QuizService::new(
        quiz_repository.clone(),
        book_repository.clone(),
        Arc::new(StrategyRegistry::new()),
    ));
    let user_answer_service = Arc::new(UserAnswerService::new(
        user_answer_repository.clone(),
        user_repository.clone(),
        quiz_service.clone(),
    ));
    let user_service = Arc::new(UserService::new(user_repository.clone()));

    TestContext {
        quiz_repository,
        user_answer_repository,
        user_repository,
        book_repository,
        quiz_service,
        user_answer_service,
        user_service,
    }
}

pub fn make_book(id: &str) -> Book {
    Book {
        id: id.to_string(),
        title: "The Little Prince".to_string(),
        author: "Antoine de Saint-Exupéry".to_string(),
        created_at: None,
    }
}
