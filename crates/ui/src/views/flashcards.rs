use dioxus::prelude::*;
use services::CardSession;

use crate::context::AppContext;
use crate::views::{NavigationBar, QuestionCard, ViewError, ViewState, view_state_from_resource};
use crate::vm::{SessionIntent, SessionVm};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn FlashcardsView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut vm = use_signal(|| None::<SessionVm>);

    // Single load per screen; the session is seeded from inside the task.
    let resource = use_resource(move || {
        let loader = ctx.question_loader();
        let random = ctx.random_source();
        async move {
            let questions = loader.load().await.map_err(|_| ViewError::LoadFailed)?;
            let count = questions.len();
            vm.set(Some(SessionVm::new(
                CardSession::new(questions),
                random.provider(),
            )));
            Ok::<_, ViewError>(count)
        }
    });

    let dispatch = use_callback(move |intent: SessionIntent| {
        if let Some(session) = vm.write().as_mut() {
            session.apply(intent);
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<FlashcardsTestHandles>() {
                handles.register(dispatch, vm);
            }
        }
    }

    let state = view_state_from_resource(resource);
    let card = vm.read().as_ref().and_then(SessionVm::card);

    rsx! {
        div { class: "page flashcards",
            match state {
                ViewState::Loading => rsx! {
                    div { class: "loading", "aria-busy": "true" }
                },
                ViewState::Error(err) => {
                    let message = err.message();
                    rsx! {
                        div { class: "load-error",
                            p { "{message}" }
                        }
                    }
                }
                ViewState::Ready(_) => match card {
                    Some(card) => rsx! {
                        QuestionCard {
                            card,
                            on_flip: move |()| dispatch.call(SessionIntent::Flip),
                        }
                        NavigationBar { on_intent: dispatch }
                    },
                    None => rsx! {
                        div { class: "empty",
                            p { "No questions available." }
                        }
                    },
                },
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct FlashcardsTestHandles {
    dispatch: Rc<RefCell<Option<Callback<SessionIntent>>>>,
    vm: Rc<RefCell<Option<Signal<Option<SessionVm>>>>>,
}

#[cfg(test)]
impl FlashcardsTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<SessionIntent>, vm: Signal<Option<SessionVm>>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<SessionIntent> {
        (*self.dispatch.borrow()).expect("flashcards dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<Option<SessionVm>> {
        (*self.vm.borrow()).expect("flashcards vm registered")
    }
}
