mod ids;
mod question;
mod session;

pub use ids::QuestionId;
pub use question::{Question, QuestionSequence};
pub use session::{CardFace, SessionState};
