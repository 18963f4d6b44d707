use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::{any::AnyRow, FromRow, Row as _};

pub mod manager;

/// Trait for managing questions.
#[async_trait]
pub trait Manager {
    /// Find all questions, in store order.
    async fn find_all_questions(&self) -> anyhow::Result<Vec<Question>>;
    /// Find the names of all questions, in store order.
    async fn find_all_question_names(&self) -> anyhow::Result<Vec<String>>;
    /// Insert a new question and return the stored row.
    async fn create_question(&self, question: &NewQuestion) -> anyhow::Result<Question>;
    /// Find a single question by its row id.
    async fn find_question_by_id(&self, id: i64) -> anyhow::Result<Option<Question>>;
}

/// Model for a submitted question.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Row id assigned by the store.
    pub id: i64,
    /// Name of the submitter.
    pub name: String,
    /// Free-text body of the question.
    pub text: String,
    /// Link to the repository the question is about.
    pub repo: String,
    /// Link to a live demo.
    pub live: String,
    /// Server-assigned creation timestamp, RFC 3339.
    pub created_at: String,
}

impl FromRow<'_, AnyRow> for Question {
    fn from_row(row: &AnyRow) -> anyhow::Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            text: row.try_get("text")?,
            repo: row.try_get("repo")?,
            live: row.try_get("live")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

/// A question as accepted at the API boundary, before the store
/// assigns an id and timestamp.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    /// Name of the submitter.
    pub name: String,
    /// Free-text body of the question.
    pub text: String,
    /// Link to the repository the question is about.
    pub repo: String,
    /// Link to a live demo.
    pub live: String,
}
