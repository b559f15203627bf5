// src/form/mod.rs
//! Profile form: state, pure transitions, and the controller that drives a
//! submission through them

pub mod controller;
pub mod reducer;
pub mod state;

pub use controller::{ProfileFormController, SubmitOutcome, TeardownHandle};
pub use reducer::{reduce, FormEvent};
pub use state::{FormState, UiState};
