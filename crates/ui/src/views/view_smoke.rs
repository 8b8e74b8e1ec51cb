use dioxus::prelude::ReadableExt;
use quiz_core::RandomSource;
use quiz_core::model::{QuestionSequence, SessionState};
use storage::{InMemoryQuestionStore, LoadError, QuestionStore};

use super::test_harness::{ViewHarness, drive_dom, numbered_questions, setup_view_harness};
use crate::vm::SessionIntent;

struct PendingStore;

fn send(harness: &mut ViewHarness, intents: &[SessionIntent]) {
    let dispatch = harness.handles.dispatch();
    harness.dom.in_runtime(|| {
        for intent in intents {
            dispatch.call(*intent);
        }
    });
    drive_dom(&mut harness.dom);
}

#[async_trait::async_trait]
impl QuestionStore for PendingStore {
    async fn load(&self) -> Result<QuestionSequence, LoadError> {
        std::future::pending().await
    }
}

#[tokio::test(flavor = "current_thread")]
async fn flashcards_view_renders_first_prompt() {
    let store = InMemoryQuestionStore::new(numbered_questions(3));
    let mut harness = setup_view_harness(store, RandomSource::Scripted(vec![0]));
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Q1"), "missing prompt in {html}");
    assert!(!html.contains("A1"), "answer shown too early in {html}");
    assert!(html.contains("1 / 3"), "missing position in {html}");
    assert!(html.contains("Random Question"), "missing random button in {html}");
    assert!(html.contains("Previous"), "missing previous button in {html}");
    assert!(html.contains("Next"), "missing next button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn flashcards_view_lays_out_buttons_in_order() {
    let store = InMemoryQuestionStore::new(numbered_questions(2));
    let mut harness = setup_view_harness(store, RandomSource::Thread);
    harness.settle().await;

    let html = harness.render();
    let position = |needle: &str| {
        html.find(needle)
            .unwrap_or_else(|| panic!("missing {needle} in {html}"))
    };
    assert!(position("random-question") < position("previous-question"));
    assert!(position("previous-question") < position(">Previous<"));
    assert!(position(">Previous<") < position("next-question"));
    assert!(position("next-question") < position(">Next<"));
}

#[tokio::test(flavor = "current_thread")]
async fn flashcards_view_shows_loading_until_questions_arrive() {
    let mut harness = setup_view_harness(PendingStore, RandomSource::Thread);
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("loading"), "missing loading state in {html}");
    assert!(!html.contains("Random Question"), "controls shown before load in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn flashcards_view_renders_empty_state() {
    let mut harness = setup_view_harness(InMemoryQuestionStore::empty(), RandomSource::Thread);
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("No questions available."), "missing empty state in {html}");
    assert!(!html.contains("Random Question"), "controls shown for empty deck in {html}");
    assert!(!html.contains("question-card"), "card shown for empty deck in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn flashcards_view_renders_error_state() {
    let store = InMemoryQuestionStore::failing(LoadError::Malformed {
        resource: "q_And_A.json".to_string(),
        reason: "expected value at line 1 column 1".to_string(),
    });
    let mut harness = setup_view_harness(store, RandomSource::Thread);
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Could not load questions."), "missing error in {html}");
    assert!(!html.contains("question-card"), "card shown after failure in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn flashcards_view_follows_intents() {
    let store = InMemoryQuestionStore::new(numbered_questions(4));
    let mut harness = setup_view_harness(store, RandomSource::Scripted(vec![3]));
    harness.settle().await;

    let vm = harness.handles.vm();

    send(&mut harness, &[SessionIntent::Next, SessionIntent::Flip]);
    let html = harness.render();
    assert!(html.contains("A2"), "missing flipped answer in {html}");
    assert!(html.contains("flipped"), "missing flipped class in {html}");
    assert!(html.contains("2 / 4"), "missing position in {html}");

    send(&mut harness, &[SessionIntent::Random]);
    let html = harness.render();
    assert!(html.contains("Q4"), "missing random target in {html}");
    let state = harness
        .dom
        .in_runtime(|| vm.read().as_ref().map(|session| session.state()));
    assert_eq!(state, Some(SessionState::new(3, false)));

    send(&mut harness, &[SessionIntent::Next, SessionIntent::Previous]);
    let html = harness.render();
    assert!(html.contains("Q3"), "missing previous card in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn flashcards_view_ignores_previous_on_first_card() {
    let store = InMemoryQuestionStore::new(numbered_questions(2));
    let mut harness = setup_view_harness(store, RandomSource::Thread);
    harness.settle().await;

    send(&mut harness, &[SessionIntent::Flip, SessionIntent::Previous]);
    let html = harness.render();
    assert!(html.contains("Q1"), "expected first prompt in {html}");
    assert!(html.contains("1 / 2"), "missing position in {html}");
}
