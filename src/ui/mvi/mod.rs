//! Model-View-Intent (MVI) primitives for session state.
//!
//! Every piece of mutable session state (the history stack, the sample cart)
//! changes only by feeding an intent through its reducer.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Screen
//!    ↑                               │
//!    └───────────────────────────────┘
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
