/// Horizontal distance a rightward drag must cover before it flips the card.
pub const SWIPE_FLIP_THRESHOLD_PX: f64 = 40.0;

/// Tracks one pointer gesture on the card and decides when it counts as a swipe.
///
/// A gesture flips at most once. The click that ends a swiping gesture is
/// swallowed so the card is not flipped back.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SwipeTracker {
    origin_x: Option<f64>,
    fired: bool,
    suppress_click: bool,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f64) {
        self.origin_x = Some(x);
        self.fired = false;
        self.suppress_click = false;
    }

    /// Feed a pointer position. Returns `true` exactly once per rightward swipe.
    pub fn update(&mut self, x: f64) -> bool {
        let Some(origin) = self.origin_x else {
            return false;
        };
        if self.fired || x - origin < SWIPE_FLIP_THRESHOLD_PX {
            return false;
        }
        self.fired = true;
        self.suppress_click = true;
        true
    }

    pub fn end(&mut self) {
        self.origin_x = None;
        self.fired = false;
    }

    /// Whether a click should flip. Clears the suppression left by a swipe.
    pub fn take_click(&mut self) -> bool {
        !std::mem::take(&mut self.suppress_click)
    }
}
