#![forbid(unsafe_code)]

pub mod json;
pub mod repository;

pub use json::{BUNDLED_RESOURCE, BundledQuestionStore, FileQuestionStore, QuestionRecord};
pub use repository::{InMemoryQuestionStore, LoadError, QuestionStore};
