//! Session state machines: MVI primitives, the history stack and the
//! navigation controller.

pub mod history;
pub mod mvi;
pub mod navigator;
