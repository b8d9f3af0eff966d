use crate::cart::intent::CartIntent;
use crate::cart::state::CartState;
use crate::ui::mvi::Reducer;

pub struct CartReducer;

impl Reducer for CartReducer {
    type State = CartState;
    type Intent = CartIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CartIntent::Adjust { id, delta } => state.adjusted(&id, delta),
            CartIntent::Toggle { id } => state.toggled(&id),
            CartIntent::Remove { id } => state.without(&id),
            CartIntent::Clear => CartState::default(),
        }
    }
}
