use crate::ui::mvi::Reducer;
use crate::ui::pager::intent::{NavigationIntent, PagerIntent};
use crate::ui::pager::state::PagerState;

pub struct PagerReducer;

impl Reducer for PagerReducer {
    type State = PagerState;
    type Intent = PagerIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PagerIntent::Activate { slide_count } => match state {
                // The sequence is immutable once loaded.
                PagerState::Inert => PagerState::start(slide_count),
                active => active,
            },
            PagerIntent::Reset => PagerState::Inert,
            PagerIntent::Navigate(direction) => {
                let target = state.current_index().and_then(|current| match direction {
                    NavigationIntent::Next => current.checked_add(1),
                    NavigationIntent::Previous => current.checked_sub(1),
                });
                go_to(state, target)
            }
            PagerIntent::JumpTo(index) => go_to(state, Some(index)),
        }
    }
}

/// Moves to `target` if it names a slide, otherwise leaves `state` untouched.
fn go_to(state: PagerState, target: Option<usize>) -> PagerState {
    match (state, target) {
        (
            PagerState::Active {
                slide_count,
                hint_visible,
                ..
            },
            Some(index),
        ) if index < slide_count => PagerState::Active {
            slide_count,
            current_index: index,
            hint_visible: hint_visible && index == 0,
        },
        (other, _) => other,
    }
}
