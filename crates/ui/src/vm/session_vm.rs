use std::fmt;

use quiz_core::RandomIndex;
use quiz_core::model::SessionState;
use services::CardSession;
use tracing::debug;

use crate::vm::card_vm::{CardVm, map_card_vm};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionIntent {
    Flip,
    Next,
    Previous,
    Random,
}

/// Screen-owned session plus the random provider used for jumps.
pub struct SessionVm {
    session: CardSession,
    random: Box<dyn RandomIndex + Send>,
}

impl SessionVm {
    #[must_use]
    pub fn new(session: CardSession, random: Box<dyn RandomIndex + Send>) -> Self {
        Self { session, random }
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    #[must_use]
    pub fn card(&self) -> Option<CardVm> {
        map_card_vm(&self.session)
    }

    pub fn apply(&mut self, intent: SessionIntent) {
        match intent {
            SessionIntent::Flip => self.session.flip(),
            SessionIntent::Next => self.session.next(),
            SessionIntent::Previous => self.session.previous(),
            SessionIntent::Random => self.session.random_jump(self.random.as_mut()),
        }
        let state = self.session.state();
        debug!(
            ?intent,
            index = state.current_index,
            flipped = state.flipped,
            "session transition"
        );
    }
}

impl fmt::Debug for SessionVm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionVm")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}
