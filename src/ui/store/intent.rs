use crate::slides::Slide;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum StoreIntent {
    /// Start (or retry) the one-shot fetch.
    BeginLoad,
    Loaded { slides: Vec<Slide> },
    LoadFailed { reason: String },
}

impl Intent for StoreIntent {}
