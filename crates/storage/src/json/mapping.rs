use quiz_core::model::{Question, QuestionId, QuestionSequence};
use serde::Deserialize;

use crate::repository::LoadError;

/// Wire shape of one entry in the question file.
///
/// Field names are fixed by the existing data files and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuestionRecord {
    #[serde(rename = "cardId")]
    pub card_id: QuestionId,
    pub questions: String,
    pub answers: String,
}

impl QuestionRecord {
    #[must_use]
    pub fn into_question(self) -> Question {
        Question::new(self.card_id, self.questions, self.answers)
    }
}

/// Parse a JSON array of question records, keeping file order.
///
/// # Errors
///
/// Returns `LoadError::Malformed` when `raw` is not an array of complete records.
pub fn parse_questions(resource: &str, raw: &str) -> Result<QuestionSequence, LoadError> {
    let records: Vec<QuestionRecord> =
        serde_json::from_str(raw).map_err(|err| LoadError::Malformed {
            resource: resource.to_owned(),
            reason: err.to_string(),
        })?;

    Ok(records
        .into_iter()
        .map(QuestionRecord::into_question)
        .collect())
}
