//! Client-side navigation and persistent session state for the dealer app.

pub mod cart;
pub mod config;
pub mod logging;
pub mod nav;
pub mod persist;
pub mod routes;
pub mod session;
pub mod ui;
