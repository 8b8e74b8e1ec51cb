use dioxus::prelude::*;
use quiz_core::model::CardFace;

use crate::vm::{CardVm, NavControl, RANDOM_CONTROL, STEP_CONTROLS, SessionIntent, SwipeTracker};

#[component]
pub fn QuestionCard(card: CardVm, on_flip: EventHandler<()>) -> Element {
    let mut swipe = use_signal(SwipeTracker::default);

    let card_class = if card.is_flipped() { "card flipped" } else { "card" };
    let face_class = match card.face {
        CardFace::Prompt => "card-face prompt",
        CardFace::Answer => "card-face answer",
    };
    let face_label = card.face_label();

    rsx! {
        div {
            id: "question-card",
            class: "{card_class}",
            role: "button",
            tabindex: "0",
            "aria-label": "{face_label}",
            onpointerdown: move |evt: PointerEvent| {
                swipe.write().begin(evt.client_coordinates().x);
            },
            onpointermove: move |evt: PointerEvent| {
                if swipe.write().update(evt.client_coordinates().x) {
                    on_flip.call(());
                }
            },
            onpointerup: move |_| swipe.write().end(),
            onpointercancel: move |_| swipe.write().end(),
            onpointerleave: move |_| swipe.write().end(),
            onclick: move |_| {
                if swipe.write().take_click() {
                    on_flip.call(());
                }
            },
            div { class: "card-inner",
                p { class: "{face_class}", "{card.text}" }
            }
        }
        p { class: "card-position", "{card.position_label}" }
    }
}

#[component]
pub fn NavigationBar(on_intent: EventHandler<SessionIntent>) -> Element {
    rsx! {
        div { class: "controls",
            NavButton { control: RANDOM_CONTROL, on_intent }
            div { class: "nav-row",
                for control in STEP_CONTROLS {
                    NavButton { key: "{control.id}", control, on_intent }
                }
            }
        }
    }
}

#[component]
fn NavButton(control: NavControl, on_intent: EventHandler<SessionIntent>) -> Element {
    rsx! {
        button {
            id: "{control.id}",
            class: "{control.class}",
            onclick: move |_| on_intent.call(control.intent),
            "{control.label}"
        }
    }
}
