mod bundled;
mod file;
mod mapping;

pub use bundled::{BUNDLED_RESOURCE, BundledQuestionStore};
pub use file::FileQuestionStore;
pub use mapping::{QuestionRecord, parse_questions};
