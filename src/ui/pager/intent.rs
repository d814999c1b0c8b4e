use crate::ui::mvi::Intent;

/// Modality-independent navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationIntent {
    Next,
    Previous,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PagerIntent {
    /// The store reached `Ready` with this many slides.
    Activate { slide_count: usize },
    /// The sequence is being reloaded; drop back to inert.
    Reset,
    Navigate(NavigationIntent),
    /// Direct jump, e.g. from an indicator dot.
    JumpTo(usize),
}

impl Intent for PagerIntent {}

impl From<NavigationIntent> for PagerIntent {
    fn from(intent: NavigationIntent) -> Self {
        PagerIntent::Navigate(intent)
    }
}
