use async_trait::async_trait;
use futures::TryStreamExt;
#[cfg(test)]
use mockall::automock;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::UserAnswer,
    repositories::is_duplicate_key_error,
};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserAnswerRepository: Send + Sync {
    /// Inserts one attempt. A uniqueness violation on
    /// (user_id, quiz_id, attempt_number) surfaces as `AlreadyExists`,
    /// distinguishable from any other persistence fault.
    async fn insert(&self, answer: UserAnswer) -> AppResult<UserAnswer>;
    async fn replace(&self, answer: UserAnswer) -> AppResult<UserAnswer>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<UserAnswer>>;
    /// Ordered by attempt number descending.
    async fn find_by_user_and_quiz(
        &self,
        user_id: &str,
        quiz_id: &str,
    ) -> AppResult<Vec<UserAnswer>>;
    async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<UserAnswer>>;
    async fn count_by_user_and_quiz(&self, user_id: &str, quiz_id: &str) -> AppResult<u64>;
}

pub struct MongoUserAnswerRepository {
    collection: Collection<UserAnswer>,
}

impl MongoUserAnswerRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("user_answers");
        Self { collection }
    }

    /// The compound unique index is the authoritative serialization point
    /// for attempt numbering; it must exist before the server takes traffic.
    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for user_answers collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let attempt_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "quiz_id": 1, "attempt_number": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("user_quiz_attempt_unique".to_string())
                    .build(),
            )
            .build();

        let user_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(IndexOptions::builder().name("user_id".to_string()).build())
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(attempt_index).await?;
        self.collection.create_index(user_index).await?;

        Ok(())
    }
}

#[async_trait]
impl UserAnswerRepository for MongoUserAnswerRepository {
    async fn insert(&self, answer: UserAnswer) -> AppResult<UserAnswer> {
        match self.collection.insert_one(&answer).await {
            Ok(_) => Ok(answer),
            Err(err) if is_duplicate_key_error(&err) => Err(AppError::AlreadyExists(format!(
                "Attempt {} already recorded for user '{}' on quiz '{}'",
                answer.attempt_number, answer.user_id, answer.quiz_id
            ))),
            Err(err) => Err(err.into()),
        }
    }

    async fn replace(&self, answer: UserAnswer) -> AppResult<UserAnswer> {
        let result = self
            .collection
            .replace_one(doc! { "id": &answer.id }, &answer)
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "User answer with id '{}' not found",
                answer.id
            )));
        }

        Ok(answer)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<UserAnswer>> {
        let answer = self.collection.find_one(doc! { "id": id }).await?;
        Ok(answer)
    }

    async fn find_by_user_and_quiz(
        &self,
        user_id: &str,
        quiz_id: &str,
    ) -> AppResult<Vec<UserAnswer>> {
        let answers = self
            .collection
            .find(doc! { "user_id": user_id, "quiz_id": quiz_id })
            .sort(doc! { "attempt_number": -1 })
            .await?
            .try_collect()
            .await?;
        Ok(answers)
    }

    async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<UserAnswer>> {
        let answers = self
            .collection
            .find(doc! { "user_id": user_id })
            .sort(doc! { "submitted_at": -1 })
            .await?
            .try_collect()
            .await?;
        Ok(answers)
    }

    async fn count_by_user_and_quiz(&self, user_id: &str, quiz_id: &str) -> AppResult<u64> {
        let count = self
            .collection
            .count_documents(doc! { "user_id": user_id, "quiz_id": quiz_id })
            .await?;
        Ok(count)
    }
}
