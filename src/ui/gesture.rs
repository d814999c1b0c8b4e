//! Input normalizer.
//!
//! Turns modality-specific input into [`NavigationIntent`]s. The only state
//! is the press position of the current pointer gesture, owned by
//! [`SwipeTracker`]; everything else is a stateless function.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::config::InputConfig;
use crate::ui::pager::NavigationIntent;

pub const DEFAULT_SWIPE_THRESHOLD: f64 = 50.0;

/// Result of normalizing one raw event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalized {
    pub intent: Option<NavigationIntent>,
    /// The event is consumed; the host's default handling must not run.
    pub suppress_default: bool,
}

impl Normalized {
    pub const IGNORED: Normalized = Normalized {
        intent: None,
        suppress_default: false,
    };

    fn consumed(intent: NavigationIntent) -> Self {
        Self {
            intent: Some(intent),
            suppress_default: true,
        }
    }
}

/// Every wheel event navigates and is consumed.
pub fn wheel_intent(delta_y: f64) -> Normalized {
    if delta_y > 0.0 {
        Normalized::consumed(NavigationIntent::Next)
    } else {
        Normalized::consumed(NavigationIntent::Previous)
    }
}

/// `Down` and space go forward, `Up` goes back. Anything else passes through.
pub fn key_intent(key: &KeyEvent) -> Normalized {
    if key.kind == KeyEventKind::Release {
        return Normalized::IGNORED;
    }
    match key.code {
        KeyCode::Down | KeyCode::Char(' ') => Normalized::consumed(NavigationIntent::Next),
        KeyCode::Up => Normalized::consumed(NavigationIntent::Previous),
        _ => Normalized::IGNORED,
    }
}

/// Swipe direction for a vertical displacement `diff = start_y - end_y`.
///
/// Dragging up (positive diff) moves forward. `|diff| <= threshold` is not a
/// swipe.
pub fn swipe_intent(diff: f64, threshold: f64) -> Option<NavigationIntent> {
    if diff > threshold {
        Some(NavigationIntent::Next)
    } else if diff < -threshold {
        Some(NavigationIntent::Previous)
    } else {
        None
    }
}

/// What a pointer release amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerRelease {
    Swipe(NavigationIntent),
    /// Released (nearly) where it was pressed.
    Tap,
    /// Too short for a swipe, too long for a tap, or no press on record.
    Nothing,
}

/// Tracks the start of the current press/release gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct SwipeTracker {
    threshold: f64,
    tap_slop: f64,
    start_y: Option<f64>,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD, 0.0)
    }
}

impl SwipeTracker {
    pub fn new(threshold: f64, tap_slop: f64) -> Self {
        Self {
            threshold,
            tap_slop,
            start_y: None,
        }
    }

    pub fn from_config(config: &InputConfig) -> Self {
        Self::new(config.swipe_threshold, config.tap_slop)
    }

    pub fn is_tracking(&self) -> bool {
        self.start_y.is_some()
    }

    /// Records the press position. A later press replaces an earlier one.
    pub fn press(&mut self, y: f64) {
        self.start_y = Some(y);
    }

    /// Finishes the gesture and classifies it.
    pub fn release(&mut self, end_y: f64) -> PointerRelease {
        let Some(start_y) = self.start_y.take() else {
            return PointerRelease::Nothing;
        };
        let diff = start_y - end_y;
        if let Some(intent) = swipe_intent(diff, self.threshold) {
            PointerRelease::Swipe(intent)
        } else if diff.abs() <= self.tap_slop {
            PointerRelease::Tap
        } else {
            PointerRelease::Nothing
        }
    }

    /// Drops a half-finished gesture, e.g. after a resize.
    pub fn cancel(&mut self) {
        self.start_y = None;
    }
}
