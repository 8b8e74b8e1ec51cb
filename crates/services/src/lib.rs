#![forbid(unsafe_code)]

pub mod loader;
pub mod session;

pub use quiz_core::{RandomIndex, RandomSource};
pub use storage::LoadError;

pub use loader::QuestionLoader;
pub use session::CardSession;
