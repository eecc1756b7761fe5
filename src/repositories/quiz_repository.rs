use async_trait::async_trait;
use futures::TryStreamExt;
#[cfg(test)]
use mockall::automock;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::{Quiz, QuizKind},
};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait QuizRepository: Send + Sync {
    async fn insert(&self, quiz: Quiz) -> AppResult<Quiz>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>>;
    async fn replace(&self, quiz: Quiz) -> AppResult<Quiz>;
    async fn delete_by_id(&self, id: &str) -> AppResult<()>;
    async fn exists_by_id(&self, id: &str) -> AppResult<bool>;
    async fn find_by_book_id(&self, book_id: &str) -> AppResult<Vec<Quiz>>;
    async fn search(&self, kind: Option<QuizKind>, title: Option<String>)
        -> AppResult<Vec<Quiz>>;
}

pub struct MongoQuizRepository {
    collection: Collection<Quiz>,
}

impl MongoQuizRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("quizzes");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for quizzes collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let book_index = IndexModel::builder()
            .keys(doc! { "book_id": 1 })
            .options(IndexOptions::builder().name("book_id".to_string()).build())
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(book_index).await?;

        Ok(())
    }
}

#[async_trait]
impl QuizRepository for MongoQuizRepository {
    async fn insert(&self, quiz: Quiz) -> AppResult<Quiz> {
        self.collection.insert_one(&quiz).await?;
        Ok(quiz)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>> {
        let quiz = self.collection.find_one(doc! { "id": id }).await?;
        Ok(quiz)
    }

    async fn replace(&self, quiz: Quiz) -> AppResult<Quiz> {
        let result = self
            .collection
            .replace_one(doc! { "id": &quiz.id }, &quiz)
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "Quiz with id '{}' not found",
                quiz.id
            )));
        }

        Ok(quiz)
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<()> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!(
                "Quiz with id '{}' not found",
                id
            )));
        }

        Ok(())
    }

    async fn exists_by_id(&self, id: &str) -> AppResult<bool> {
        let quiz = self.collection.find_one(doc! { "id": id }).await?;
        Ok(quiz.is_some())
    }

    async fn find_by_book_id(&self, book_id: &str) -> AppResult<Vec<Quiz>> {
        let quizzes = self
            .collection
            .find(doc! { "book_id": book_id })
            .sort(doc! { "created_at": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(quizzes)
    }

    async fn search(
        &self,
        kind: Option<QuizKind>,
        title: Option<String>,
    ) -> AppResult<Vec<Quiz>> {
        let mut filter = doc! {};

        if let Some(kind) = kind {
            filter.insert("type", kind.as_str());
        }

        if let Some(title) = title {
            // Case-insensitive substring match on the title.
            filter.insert(
                "title",
                doc! { "$regex": regex::escape(&title), "$options": "i" },
            );
        }

        let quizzes = self
            .collection
            .find(filter)
            .sort(doc! { "created_at": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(quizzes)
    }
}
