use crate::ui::mvi::Reducer;
use crate::ui::navigator::intent::NavigatorIntent;
use crate::ui::navigator::state::NavigatorState;

pub struct NavigatorReducer;

impl Reducer for NavigatorReducer {
    type State = NavigatorState;
    type Intent = NavigatorIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NavigatorIntent::Load { rows } => {
                let current = if rows.is_empty() { None } else { Some(0) };
                NavigatorState { rows, current }
            }
            NavigatorIntent::Select { row } => {
                if row < state.rows.len() {
                    NavigatorState {
                        current: Some(row),
                        ..state
                    }
                } else {
                    state
                }
            }
            NavigatorIntent::MoveUp => match state.current {
                Some(current) => {
                    let previous = if current == 0 {
                        state.rows.len().saturating_sub(1)
                    } else {
                        current - 1
                    };
                    NavigatorState {
                        current: Some(previous),
                        ..state
                    }
                }
                None => state,
            },
            NavigatorIntent::MoveDown => match state.current {
                Some(current) => {
                    let next = if current + 1 >= state.rows.len() {
                        0
                    } else {
                        current + 1
                    };
                    NavigatorState {
                        current: Some(next),
                        ..state
                    }
                }
                None => state,
            },
        }
    }
}
