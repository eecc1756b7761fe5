use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    evaluation::StrategyRegistry,
    repositories::{
        MongoBookRepository, MongoQuizRepository, MongoUserAnswerRepository, MongoUserRepository,
    },
    services::{QuizService, UserAnswerService, UserService},
};

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub user_service: Arc<UserService>,
    pub quiz_service: Arc<QuizService>,
    pub user_answer_service: Arc<UserAnswerService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let user_repository = Arc::new(MongoUserRepository::new(&db));
        user_repository.ensure_indexes().await?;

        let quiz_repository = Arc::new(MongoQuizRepository::new(&db));
        quiz_repository.ensure_indexes().await?;

        let user_answer_repository = Arc::new(MongoUserAnswerRepository::new(&db));
        user_answer_repository.ensure_indexes().await?;

        let book_repository = Arc::new(MongoBookRepository::new(&db));

        let registry = Arc::new(StrategyRegistry::new());

        let user_service = Arc::new(UserService::new(user_repository.clone()));
        let quiz_service = Arc::new(QuizService::new(
            quiz_repository,
            book_repository,
            registry,
        ));
        let user_answer_service = Arc::new(UserAnswerService::new(
            user_answer_repository,
            user_repository,
            quiz_service.clone(),
        ));

        Ok(Self {
            db,
            user_service,
            quiz_service,
            user_answer_service,
            config: Arc::new(config),
        })
    }
}
