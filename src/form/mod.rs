//! The submission form.
//!
//! A `QuestionForm` owns the four transient field values while the user is
//! editing. Nothing is persisted on this side; submitting dispatches a
//! single action carrying the collected question to the action layer.
use crate::db::models::question::NewQuestion;

use self::dispatch::{Action, Dispatch};

pub mod dispatch;

/// Transient, unsaved field values for one question being edited.
#[derive(Debug, Default, Clone)]
pub struct QuestionForm {
    /// Name of the submitter.
    name: String,
    /// Free-text body of the question.
    text: String,
    /// Link to the repository the question is about.
    repo: String,
    /// Link to a live demo.
    live: String,
}

impl QuestionForm {
    /// Create an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new value for the name field.
    pub fn set_name(&mut self, value: &str) {
        value.clone_into(&mut self.name);
    }

    /// Store a new value for the text field.
    pub fn set_text(&mut self, value: &str) {
        value.clone_into(&mut self.text);
    }

    /// Store a new value for the repo field.
    pub fn set_repo(&mut self, value: &str) {
        value.clone_into(&mut self.repo);
    }

    /// Store a new value for the live field.
    pub fn set_live(&mut self, value: &str) {
        value.clone_into(&mut self.live);
    }

    /// Current value of the name field.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current value of the text field.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Current value of the repo field.
    #[must_use]
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Current value of the live field.
    #[must_use]
    pub fn live(&self) -> &str {
        &self.live
    }

    /// Collect the current field values into one question.
    #[must_use]
    pub fn question(&self) -> NewQuestion {
        NewQuestion {
            name: self.name.clone(),
            text: self.text.clone(),
            repo: self.repo.clone(),
            live: self.live.clone(),
        }
    }

    /// Submit the form: dispatch exactly one action carrying all four
    /// current field values. The form itself performs no validation, the
    /// service is authoritative.
    ///
    /// # Errors
    /// Errors if the dispatcher rejects the action.
    pub async fn submit(&self, dispatcher: &impl Dispatch) -> anyhow::Result<()> {
        dispatcher
            .dispatch(Action::SubmitQuestion(self.question()))
            .await
    }
}
