use crate::vm::session_vm::SessionIntent;

/// One button of the navigation bar and the intent it sends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavControl {
    pub id: &'static str,
    pub label: &'static str,
    pub class: &'static str,
    pub intent: SessionIntent,
}

pub const RANDOM_CONTROL: NavControl = NavControl {
    id: "random-question",
    label: "Random Question",
    class: "btn primary wide",
    intent: SessionIntent::Random,
};

/// Bottom row, left to right.
pub const STEP_CONTROLS: [NavControl; 2] = [
    NavControl {
        id: "previous-question",
        label: "Previous",
        class: "btn primary",
        intent: SessionIntent::Previous,
    },
    NavControl {
        id: "next-question",
        label: "Next",
        class: "btn primary",
        intent: SessionIntent::Next,
    },
];
