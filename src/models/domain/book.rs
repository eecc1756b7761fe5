use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Read-only view of the book catalog. Catalog management lives elsewhere;
/// this server only resolves a book id when attaching a quiz to it.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}
