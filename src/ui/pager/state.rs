use crate::ui::mvi::UiState;

/// Authoritative pager position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PagerState {
    /// No sequence loaded yet; every navigation intent is a no-op.
    #[default]
    Inert,
    Active {
        slide_count: usize,
        /// Always within `0..slide_count`.
        current_index: usize,
        /// True until the first move past index 0, never re-armed.
        hint_visible: bool,
    },
}

impl UiState for PagerState {}

impl PagerState {
    /// Initial state for a freshly loaded sequence. Empty sequences stay inert.
    pub fn start(slide_count: usize) -> Self {
        if slide_count == 0 {
            return PagerState::Inert;
        }
        PagerState::Active {
            slide_count,
            current_index: 0,
            hint_visible: true,
        }
    }

    pub fn current_index(&self) -> Option<usize> {
        match self {
            PagerState::Active { current_index, .. } => Some(*current_index),
            PagerState::Inert => None,
        }
    }

    pub fn slide_count(&self) -> usize {
        match self {
            PagerState::Active { slide_count, .. } => *slide_count,
            PagerState::Inert => 0,
        }
    }

    pub fn hint_visible(&self) -> bool {
        matches!(self, PagerState::Active { hint_visible: true, .. })
    }

    pub fn is_last(&self) -> bool {
        match self {
            PagerState::Active {
                slide_count,
                current_index,
                ..
            } => current_index + 1 == *slide_count,
            PagerState::Inert => false,
        }
    }
}
