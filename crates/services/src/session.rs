use std::sync::Arc;

use quiz_core::RandomIndex;
use quiz_core::model::{CardFace, Question, QuestionSequence, SessionState};

/// Flip and navigation state over a loaded question sequence.
///
/// Every transition is total. On an empty sequence they are all no-ops and
/// `current()` is `None`. Moving to another card always shows its prompt first.
#[derive(Debug, Clone)]
pub struct CardSession {
    questions: Arc<QuestionSequence>,
    state: SessionState,
}

impl CardSession {
    #[must_use]
    pub fn new(questions: Arc<QuestionSequence>) -> Self {
        Self {
            questions,
            state: SessionState::default(),
        }
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    #[must_use]
    pub fn is_flipped(&self) -> bool {
        self.state.flipped
    }

    #[must_use]
    pub fn face(&self) -> CardFace {
        self.state.face()
    }

    #[must_use]
    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.state.current_index)
    }

    /// Text on the side of the current card that is facing up.
    #[must_use]
    pub fn visible_text(&self) -> Option<&str> {
        let question = self.current()?;
        Some(match self.face() {
            CardFace::Prompt => question.prompt(),
            CardFace::Answer => question.answer(),
        })
    }

    pub fn flip(&mut self) {
        if self.is_empty() {
            return;
        }
        self.state.flipped = !self.state.flipped;
    }

    pub fn next(&mut self) {
        if self.is_empty() {
            return;
        }
        if self.state.current_index + 1 < self.len() {
            self.state.current_index += 1;
        }
        self.state.flipped = false;
    }

    pub fn previous(&mut self) {
        if self.is_empty() {
            return;
        }
        self.state.current_index = self.state.current_index.saturating_sub(1);
        self.state.flipped = false;
    }

    /// Jump to a uniformly drawn card. The draw may land on the current card.
    pub fn random_jump(&mut self, random: &mut dyn RandomIndex) {
        let len = self.len();
        if len == 0 {
            return;
        }
        // Providers are not trusted to stay in range.
        self.state.current_index = random.next_index(len) % len;
        self.state.flipped = false;
    }
}
