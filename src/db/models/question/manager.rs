//! Manager for the question model.
use super::{NewQuestion, Question};
use crate::db::{DatabaseConnection, DatabaseKind};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::Row as _;

#[async_trait]
impl super::Manager for DatabaseConnection {
    /// Find all questions, in store order.
    ///
    /// # Errors
    /// Errors if the query cannot be executed.
    async fn find_all_questions(&self) -> anyhow::Result<Vec<Question>> {
        let statement = "
        SELECT *
        FROM question
        ORDER BY id ASC
    ";
        let rows = match self.kind {
            DatabaseKind::Sqlite => {
                let mut connection = self.pool.acquire().await?;
                sqlx::query_as::<_, Question>(statement)
                    .fetch_all(&mut *connection)
                    .await?
            }
        };
        Ok(rows)
    }

    /// Find the names of all questions, in store order.
    ///
    /// # Errors
    /// Errors if the query cannot be executed.
    async fn find_all_question_names(&self) -> anyhow::Result<Vec<String>> {
        let statement = "
        SELECT name
        FROM question
        ORDER BY id ASC
    ";
        let names = match self.kind {
            DatabaseKind::Sqlite => {
                let mut connection = self.pool.acquire().await?;
                sqlx::query(statement)
                    .fetch_all(&mut *connection)
                    .await?
                    .into_iter()
                    .map(|row| row.try_get("name"))
                    .collect::<Result<Vec<String>, sqlx::Error>>()?
            }
        };
        Ok(names)
    }

    /// Insert a new question and return the stored row.
    ///
    /// The insert uses `RETURNING` so the assigned row id comes back on
    /// the same connection; the `Any` driver reports no last insert id
    /// for sqlite.
    ///
    /// # Errors
    /// Errors if the question cannot be inserted into the database.
    async fn create_question(&self, question: &NewQuestion) -> anyhow::Result<Question> {
        let statement = "
        INSERT INTO question ( name, text, repo, live, created_at )
        VALUES ( $1, $2, $3, $4, $5 )
        RETURNING *
    ";
        let created_at = Utc::now().to_rfc3339();
        let row = match self.kind {
            DatabaseKind::Sqlite => {
                let mut connection = self.pool.acquire().await?;
                sqlx::query_as::<_, Question>(statement)
                    .bind(&question.name)
                    .bind(&question.text)
                    .bind(&question.repo)
                    .bind(&question.live)
                    .bind(&created_at)
                    .fetch_one(&mut *connection)
                    .await?
            }
        };
        Ok(row)
    }

    /// Find a single question by its row id.
    ///
    /// # Errors
    /// Errors if the query cannot be executed.
    async fn find_question_by_id(&self, id: i64) -> anyhow::Result<Option<Question>> {
        let statement = "
        SELECT *
        FROM question
        WHERE id = $1
    ";
        let row = match self.kind {
            DatabaseKind::Sqlite => {
                let mut connection = self.pool.acquire().await?;
                sqlx::query_as::<_, Question>(statement)
                    .bind(id)
                    .fetch_optional(&mut *connection)
                    .await?
            }
        };
        Ok(row)
    }
}
