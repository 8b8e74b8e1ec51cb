use async_trait::async_trait;
use quiz_core::model::QuestionSequence;

use super::mapping::parse_questions;
use crate::repository::{LoadError, QuestionStore};

/// Name of the question file shipped with the app.
pub const BUNDLED_RESOURCE: &str = "q_And_A.json";

const BUNDLED_QUESTIONS: &str = include_str!("../../assets/q_And_A.json");

/// Reads the question file compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledQuestionStore;

impl BundledQuestionStore {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl QuestionStore for BundledQuestionStore {
    async fn load(&self) -> Result<QuestionSequence, LoadError> {
        parse_questions(BUNDLED_RESOURCE, BUNDLED_QUESTIONS)
    }
}
