use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use mongodb::{bson::doc, Collection};

use crate::{db::Database, errors::AppResult, models::domain::Book};

/// Narrow read-only surface over the book catalog, consumed by the quiz
/// create path to attach a quiz to its owning book.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Book>>;
    async fn exists_by_id(&self, id: &str) -> AppResult<bool>;
}

pub struct MongoBookRepository {
    collection: Collection<Book>,
}

impl MongoBookRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("books");
        Self { collection }
    }
}

#[async_trait]
impl BookRepository for MongoBookRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Book>> {
        let book = self.collection.find_one(doc! { "id": id }).await?;
        Ok(book)
    }

    async fn exists_by_id(&self, id: &str) -> AppResult<bool> {
        let book = self.collection.find_one(doc! { "id": id }).await?;
        Ok(book.is_some())
    }
}
