use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::RandomSource;
use quiz_core::model::{Question, QuestionId, QuestionSequence};
use services::QuestionLoader;
use storage::QuestionStore;

use crate::context::{UiApp, build_app_context};
use crate::views::FlashcardsView;
use crate::views::flashcards::FlashcardsTestHandles;

struct TestApp {
    loader: QuestionLoader,
    random: RandomSource,
}

impl UiApp for TestApp {
    fn question_loader(&self) -> QuestionLoader {
        self.loader.clone()
    }

    fn random_source(&self) -> RandomSource {
        self.random.clone()
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: FlashcardsTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { FlashcardsView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: FlashcardsTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Rebuild and let the initial load finish.
    pub async fn settle(&mut self) {
        self.rebuild();
        self.drive_async().await;
        self.drive_async().await;
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn numbered_questions(n: usize) -> QuestionSequence {
    (1..=n)
        .map(|i| Question::new(QuestionId::new(i.to_string()), format!("Q{i}"), format!("A{i}")))
        .collect()
}

pub fn setup_view_harness(store: impl QuestionStore + 'static, random: RandomSource) -> ViewHarness {
    let app = Arc::new(TestApp {
        loader: QuestionLoader::new(Arc::new(store)),
        random,
    });
    let handles = FlashcardsTestHandles::default();

    let dom = VirtualDom::new_with_props(
        ViewHarnessRoot,
        ViewHarnessProps {
            app,
            handles: handles.clone(),
        },
    );

    ViewHarness { dom, handles }
}
