use std::sync::Arc;

use crate::slides::Slide;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SlideStoreState {
    #[default]
    Idle,
    Loading,
    /// Non-empty, fixed for the rest of the session.
    Ready { slides: Arc<[Slide]> },
    Failed { reason: String },
}

impl UiState for SlideStoreState {}

impl SlideStoreState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn slides(&self) -> &[Slide] {
        match self {
            Self::Ready { slides } => slides,
            Self::Idle | Self::Loading | Self::Failed { .. } => &[],
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failed { reason } => Some(reason),
            _ => None,
        }
    }

    /// Whether a load may start from here (first load or retry).
    pub fn can_load(&self) -> bool {
        matches!(self, Self::Idle | Self::Failed { .. })
    }
}
