//! Navigation history stack.

mod intent;
mod reducer;
mod state;

pub use intent::HistoryIntent;
pub use reducer::HistoryReducer;
pub use state::HistoryState;
