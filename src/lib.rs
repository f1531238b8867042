//! Keypad calculator.
//!
//! The library holds the input state machine and its controller; any UI
//! shell delivers [`model::InputEvent`]s and renders what the
//! [`display::DisplaySink`] receives. The `keypad-calc` binary provides a
//! terminal UI and scriptable text/JSON modes on top of it.

pub mod calculator;
pub mod display;
pub mod keymap;
pub mod model;

pub use calculator::{CalcError, Calculator};
