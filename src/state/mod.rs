//! State Management
//!
//! Global application state and natal chart domain types.

pub mod global;

pub use global::{provide_app_state, AppState, BirthInput, Chart, Interpretations, Placement, View};
