mod card;
mod flashcards;
mod state;

pub use card::{NavigationBar, QuestionCard};
pub use flashcards::FlashcardsView;
pub use state::{ViewError, ViewState, view_state_from_resource};

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
