use async_trait::async_trait;
use quiz_core::model::QuestionSequence;
use thiserror::Error;

/// Errors surfaced while loading a question sequence.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LoadError {
    #[error("question resource not found: {resource}")]
    Missing { resource: String },

    #[error("failed to read {resource}: {reason}")]
    Io { resource: String, reason: String },

    #[error("malformed question resource {resource}: {reason}")]
    Malformed { resource: String, reason: String },
}

impl LoadError {
    /// Name of the resource that failed to load.
    #[must_use]
    pub fn resource(&self) -> &str {
        match self {
            LoadError::Missing { resource }
            | LoadError::Io { resource, .. }
            | LoadError::Malformed { resource, .. } => resource,
        }
    }
}

/// Source of the question deck shown by the app.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// Load the full, ordered question sequence.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Missing` if the resource does not exist, or
    /// `LoadError::Malformed` if it cannot be parsed.
    async fn load(&self) -> Result<QuestionSequence, LoadError>;
}

/// Fixed in-memory store for tests and previews.
#[derive(Debug, Clone)]
pub struct InMemoryQuestionStore {
    outcome: Result<QuestionSequence, LoadError>,
}

impl InMemoryQuestionStore {
    #[must_use]
    pub fn new(questions: QuestionSequence) -> Self {
        Self {
            outcome: Ok(questions),
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::new(QuestionSequence::empty())
    }

    /// A store whose every load fails with `error`.
    #[must_use]
    pub fn failing(error: LoadError) -> Self {
        Self {
            outcome: Err(error),
        }
    }
}

#[async_trait]
impl QuestionStore for InMemoryQuestionStore {
    async fn load(&self) -> Result<QuestionSequence, LoadError> {
        self.outcome.clone()
    }
}
