use crate::ui::mvi::Reducer;
use crate::ui::store::intent::StoreIntent;
use crate::ui::store::state::SlideStoreState;

pub const EMPTY_SEQUENCE_REASON: &str = "Content provider returned no stories";

pub struct StoreReducer;

impl Reducer for StoreReducer {
    type State = SlideStoreState;
    type Intent = StoreIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            StoreIntent::BeginLoad => {
                if state.can_load() {
                    SlideStoreState::Loading
                } else {
                    state
                }
            }
            StoreIntent::Loaded { slides } => match state {
                SlideStoreState::Loading if slides.is_empty() => SlideStoreState::Failed {
                    reason: EMPTY_SEQUENCE_REASON.to_string(),
                },
                SlideStoreState::Loading => SlideStoreState::Ready {
                    slides: slides.into(),
                },
                // Result of a load nobody is waiting for.
                other => other,
            },
            StoreIntent::LoadFailed { reason } => match state {
                SlideStoreState::Loading => SlideStoreState::Failed { reason },
                other => other,
            },
        }
    }
}
