//! Model-View-Intent primitives shared by the pager and the slide store.
//!
//! ```text
//! raw event ──→ normalizer ──→ Intent ──→ Reducer ──→ State ──→ view
//! ```
//!
//! - **State**: replaced wholesale on every transition
//! - **Intent**: modality-independent request
//! - **Reducer**: pure transition function

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
