use quiz_core::model::CardFace;
use services::CardSession;

/// UI-ready snapshot of the card currently on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardVm {
    pub text: String,
    pub face: CardFace,
    pub position_label: String,
}

impl CardVm {
    #[must_use]
    pub fn is_flipped(&self) -> bool {
        self.face == CardFace::Answer
    }

    #[must_use]
    pub fn face_label(&self) -> &'static str {
        match self.face {
            CardFace::Prompt => "Question",
            CardFace::Answer => "Answer",
        }
    }
}

/// Map the session's current card, or `None` when there is nothing to show.
#[must_use]
pub fn map_card_vm(session: &CardSession) -> Option<CardVm> {
    let question = session.current()?;
    let face = session.face();
    let text = match face {
        CardFace::Prompt => question.prompt(),
        CardFace::Answer => question.answer(),
    };

    Some(CardVm {
        text: text.to_owned(),
        face,
        position_label: format!("{} / {}", session.current_index() + 1, session.len()),
    })
}
