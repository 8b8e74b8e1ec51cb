/// Which side of the current card is facing the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardFace {
    #[default]
    Prompt,
    Answer,
}

/// Position and flip state of a card session.
///
/// A fresh state points at the first card with its prompt showing. The
/// session owning this value keeps `current_index` inside the sequence bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionState {
    pub current_index: usize,
    pub flipped: bool,
}

impl SessionState {
    #[must_use]
    pub fn new(current_index: usize, flipped: bool) -> Self {
        Self {
            current_index,
            flipped,
        }
    }

    #[must_use]
    pub fn face(&self) -> CardFace {
        if self.flipped {
            CardFace::Answer
        } else {
            CardFace::Prompt
        }
    }
}
