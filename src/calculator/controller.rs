//! Event-driven controller.
//!
//! Owns the calculator [`State`] and pushes display text to a [`DisplaySink`]
//! whenever an event changes it.

use super::state::{apply, Phase, State};
use super::CalcError;
use crate::display::DisplaySink;
use crate::model::{InputEvent, Operator, Snapshot};

pub struct Calculator<S> {
    state: State,
    sink: S,
}

impl<S: DisplaySink> Calculator<S> {
    pub fn new(mut sink: S) -> Self {
        let state = State::default();
        sink.set_display(state.display());
        Self { state, sink }
    }

    /// Apply one input event and return the text now on display.
    ///
    /// On a parse fault the event is aborted and the state is left as it was.
    pub fn on_event(&mut self, event: InputEvent) -> Result<&str, CalcError> {
        let next = match apply(&self.state, event) {
            Ok(next) => next,
            Err(e) => {
                tracing::error!(?event, display = self.state.display(), "input aborted: {e}");
                return Err(e);
            }
        };

        let changed = next.display() != self.state.display();
        if next == self.state {
            tracing::trace!(?event, "input ignored");
        } else {
            tracing::debug!(
                ?event,
                display = next.display(),
                phase = phase_name(next.phase()),
                "input applied"
            );
        }

        self.state = next;
        if changed || event == InputEvent::Clear {
            self.sink.set_display(self.state.display());
        }
        Ok(self.state.display())
    }

    /// Return to the initial state.
    pub fn reset(&mut self) {
        self.state = State::default();
        self.sink.set_display(self.state.display());
        tracing::debug!("calculator reset");
    }

    pub fn display(&self) -> &str {
        self.state.display()
    }

    pub fn pending_operand(&self) -> &str {
        self.state.pending_operand()
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.state.pending_operator()
    }

    pub fn is_finalized(&self) -> bool {
        self.state.is_finalized()
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

fn phase_name(phase: &Phase) -> &'static str {
    match phase {
        Phase::Entering => "entering",
        Phase::AwaitingRhs { .. } => "awaiting_rhs",
        Phase::Finalized { .. } => "finalized",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(calc: &mut Calculator<Vec<String>>, events: &[InputEvent]) {
        for ev in events {
            calc.on_event(*ev).unwrap();
        }
    }

    #[test]
    fn test_construction_shows_zero() {
        let calc = Calculator::new(Vec::new());
        assert_eq!(calc.sink(), &vec!["0".to_string()]);
        assert_eq!(calc.display(), "0");
    }

    #[test]
    fn test_sink_receives_each_change() {
        let mut calc = Calculator::new(Vec::new());
        press(
            &mut calc,
            &[
                InputEvent::Digit(2),
                InputEvent::Operator(Operator::Add),
                InputEvent::Digit(3),
                InputEvent::Equals,
            ],
        );
        assert_eq!(calc.into_sink(), vec!["0", "2", "0", "3", "5.0"]);
    }

    #[test]
    fn test_ignored_events_do_not_touch_sink() {
        let mut calc = Calculator::new(Vec::new());
        press(
            &mut calc,
            &[
                InputEvent::Digit(1),
                InputEvent::Decimal,
                InputEvent::Decimal,
                InputEvent::Equals,
            ],
        );
        assert_eq!(calc.into_sink(), vec!["0", "1", "1."]);
    }

    #[test]
    fn test_finalized_scenario() {
        let mut calc = Calculator::new(String::new());
        for ev in [
            InputEvent::Digit(2),
            InputEvent::Operator(Operator::Add),
            InputEvent::Digit(3),
            InputEvent::Equals,
        ] {
            calc.on_event(ev).unwrap();
        }
        assert_eq!(calc.display(), "5.0");
        assert_eq!(calc.pending_operand(), "2");
        assert_eq!(calc.pending_operator(), Some(Operator::Add));
        assert!(calc.is_finalized());

        assert_eq!(calc.on_event(InputEvent::Equals).unwrap(), "5.0");
        assert_eq!(calc.sink(), "5.0");
    }

    #[test]
    fn test_sign_toggle_scenario() {
        let mut calc = Calculator::new(String::new());
        calc.on_event(InputEvent::Digit(5)).unwrap();
        assert_eq!(calc.on_event(InputEvent::ToggleSign).unwrap(), "-5");
        assert_eq!(calc.on_event(InputEvent::ToggleSign).unwrap(), "5");
    }

    #[test]
    fn test_delete_scenario() {
        let mut calc = Calculator::new(String::new());
        for ev in [
            InputEvent::Digit(1),
            InputEvent::Digit(2),
            InputEvent::Delete,
            InputEvent::Delete,
        ] {
            calc.on_event(ev).unwrap();
        }
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.sink(), "0");
    }

    #[test]
    fn test_clear_always_notifies_sink() {
        let mut calc = Calculator::new(Vec::new());
        calc.on_event(InputEvent::Clear).unwrap();
        calc.on_event(InputEvent::Clear).unwrap();
        assert_eq!(calc.into_sink(), vec!["0", "0", "0"]);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut calc = Calculator::new(String::new());
        for ev in [
            InputEvent::Digit(9),
            InputEvent::Operator(Operator::Divide),
            InputEvent::Digit(0),
            InputEvent::Equals,
        ] {
            calc.on_event(ev).unwrap();
        }
        assert_eq!(calc.display(), "Error: Division by zero");
        calc.reset();
        assert_eq!(calc.state(), &State::default());
        assert_eq!(calc.sink(), "0");
    }

    #[test]
    fn test_invalid_digit_leaves_state() {
        let mut calc = Calculator::new(String::new());
        calc.on_event(InputEvent::Digit(4)).unwrap();
        assert!(calc.on_event(InputEvent::Digit(42)).is_err());
        assert_eq!(calc.display(), "4");
    }

    #[test]
    fn test_works_with_borrowed_sink() {
        let mut shown = String::new();
        {
            let mut calc = Calculator::new(&mut shown);
            calc.on_event(InputEvent::Digit(7)).unwrap();
        }
        assert_eq!(shown, "7");
    }
}
