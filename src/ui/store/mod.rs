//! Slide store: `Idle -> Loading -> Ready | Failed`, decoupled from the pager.

mod intent;
mod reducer;
mod state;

pub use intent::StoreIntent;
pub use reducer::{StoreReducer, EMPTY_SEQUENCE_REASON};
pub use state::SlideStoreState;
