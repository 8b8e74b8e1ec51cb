use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use quiz_core::model::QuestionSequence;

use super::mapping::parse_questions;
use crate::repository::{LoadError, QuestionStore};

/// Reads a question file from disk on every load.
#[derive(Debug, Clone)]
pub struct FileQuestionStore {
    path: PathBuf,
}

impl FileQuestionStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl QuestionStore for FileQuestionStore {
    async fn load(&self) -> Result<QuestionSequence, LoadError> {
        let resource = self.path.display().to_string();
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(LoadError::Missing { resource });
            }
            Err(err) if err.kind() == ErrorKind::InvalidData => {
                return Err(LoadError::Malformed {
                    resource,
                    reason: err.to_string(),
                });
            }
            Err(err) => {
                return Err(LoadError::Io {
                    resource,
                    reason: err.to_string(),
                });
            }
        };
        parse_questions(&resource, &raw)
    }
}
