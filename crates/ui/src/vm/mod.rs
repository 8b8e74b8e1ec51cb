mod card_vm;
mod controls;
mod session_vm;
mod swipe;

pub use card_vm::{CardVm, map_card_vm};
pub use controls::{NavControl, RANDOM_CONTROL, STEP_CONTROLS};
pub use session_vm::{SessionIntent, SessionVm};
pub use swipe::{SWIPE_FLIP_THRESHOLD_PX, SwipeTracker};
