use std::sync::Arc;

use quiz_core::model::QuestionSequence;
use storage::{BundledQuestionStore, LoadError, QuestionStore};
use tracing::{error, info, warn};

/// Loads the question deck once for the screen and reports the outcome.
#[derive(Clone)]
pub struct QuestionLoader {
    store: Arc<dyn QuestionStore>,
}

impl QuestionLoader {
    #[must_use]
    pub fn new(store: Arc<dyn QuestionStore>) -> Self {
        Self { store }
    }

    /// Loader over the question file bundled with the app.
    #[must_use]
    pub fn bundled() -> Self {
        Self::new(Arc::new(BundledQuestionStore::new()))
    }

    /// Load the question sequence.
    ///
    /// # Errors
    ///
    /// Returns the store's `LoadError` when the resource is missing or malformed.
    pub async fn load(&self) -> Result<Arc<QuestionSequence>, LoadError> {
        match self.store.load().await {
            Ok(questions) if questions.is_empty() => {
                warn!("question resource loaded but contains no cards");
                Ok(Arc::new(questions))
            }
            Ok(questions) => {
                info!(count = questions.len(), "loaded questions");
                Ok(Arc::new(questions))
            }
            Err(err) => {
                error!(resource = err.resource(), %err, "failed to load questions");
                Err(err)
            }
        }
    }
}
