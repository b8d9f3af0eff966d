use crate::ui::history::intent::HistoryIntent;
use crate::ui::history::state::HistoryState;
use crate::ui::mvi::Reducer;

pub struct HistoryReducer;

impl Reducer for HistoryReducer {
    type State = HistoryState;
    type Intent = HistoryIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            HistoryIntent::Push(key) => state.pushed(key),
            HistoryIntent::Pop => state.popped(),
            // Going home always reads as an outward transition.
            HistoryIntent::ResetToRoot => HistoryState::reset(),
        }
    }
}
