use std::sync::Arc;

use quiz_core::RandomSource;
use services::QuestionLoader;

pub trait UiApp: Send + Sync {
    fn question_loader(&self) -> QuestionLoader;
    fn random_source(&self) -> RandomSource;
}

#[derive(Clone)]
pub struct AppContext {
    question_loader: QuestionLoader,
    random_source: RandomSource,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            question_loader: app.question_loader(),
            random_source: app.random_source(),
        }
    }

    #[must_use]
    pub fn question_loader(&self) -> QuestionLoader {
        self.question_loader.clone()
    }

    #[must_use]
    pub fn random_source(&self) -> RandomSource {
        self.random_source.clone()
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
