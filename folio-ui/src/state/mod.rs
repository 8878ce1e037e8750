//! State Management
//!
//! Global application state and browser console logging.

pub mod global;
pub mod log;

pub use global::{provide_global_state, GlobalState};
