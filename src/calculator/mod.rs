//! Keypad calculator core.
//!
//! This module provides:
//! - The input state machine (`Entering`, `AwaitingRhs`, `Finalized`)
//! - Evaluation of a single binary operation over display text
//! - A controller that feeds display updates to a sink

mod controller;
mod error;
mod evaluation;
mod state;

pub use controller::Calculator;
pub use error::CalcError;
pub use evaluation::{evaluate, format_number, is_error_text, Outcome, DIVISION_BY_ZERO};
pub use state::{apply, Phase, State};
