//! Navigation engine: the single owner of the current slide index.

mod intent;
mod reducer;
mod state;

pub use intent::{NavigationIntent, PagerIntent};
pub use reducer::PagerReducer;
pub use state::PagerState;
