//! The action layer behind the submission form.
use async_trait::async_trait;

use crate::db::models::question::{NewQuestion, Question};

/// A state-change intent sent from the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Submit one collected question.
    SubmitQuestion(NewQuestion),
}

/// Seam between the form and whatever carries its actions.
#[async_trait]
pub trait Dispatch {
    /// Deliver one action.
    ///
    /// # Errors
    /// Errors if the action cannot be delivered.
    async fn dispatch(&self, action: Action) -> anyhow::Result<()>;
}

/// Dispatcher that posts submitted questions to a running question service.
#[derive(Debug, Clone)]
pub struct HttpDispatcher {
    /// Base URL of the service, e.g. `http://127.0.0.1:5000`.
    base_url: String,
    /// Shared client, connection reuse across dispatches.
    client: reqwest::Client,
}

impl HttpDispatcher {
    /// Create a dispatcher against the service at `base_url`.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            client: reqwest::Client::new(),
        }
    }

    /// Post one question to the service and return the stored record.
    ///
    /// # Errors
    /// Errors if the request cannot be sent or the service responds with a
    /// non-success status.
    pub async fn submit_question(&self, question: &NewQuestion) -> anyhow::Result<Question> {
        let url = format!("{}/api/questions", self.base_url);
        let response = self.client.post(&url).json(question).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Service rejected question ({status}): {body}");
        }
        let stored = response.json::<Question>().await?;
        Ok(stored)
    }
}

#[async_trait]
impl Dispatch for HttpDispatcher {
    async fn dispatch(&self, action: Action) -> anyhow::Result<()> {
        match action {
            Action::SubmitQuestion(ref question) => {
                let stored = self.submit_question(question).await?;
                tracing::debug!(id = stored.id, "Question submitted");
            }
        }
        Ok(())
    }
}
