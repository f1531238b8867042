//! Calculator state and its transition function.
//!
//! `apply` is pure: it takes the current [`State`] and one [`InputEvent`] and
//! returns the next state. The controller owns the value and forwards the
//! resulting display text to its sink.

use super::evaluation::{evaluate, is_error_text};
use super::CalcError;
use crate::model::{InputEvent, Operator, PhaseKind, Snapshot};

const ZERO: &str = "0";

/// Where the machine stands with respect to the pending binary operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Typing the first operand; no operator chosen.
    Entering,
    /// An operator was chosen; the display holds the right-hand operand.
    AwaitingRhs { operand: String, operator: Operator },
    /// Equals produced a result or error text. The operation that
    /// produced it stays recorded.
    Finalized { operand: String, operator: Operator },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    display: String,
    phase: Phase,
}

impl Default for State {
    fn default() -> Self {
        Self {
            display: ZERO.to_string(),
            phase: Phase::Entering,
        }
    }
}

impl State {
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Left-hand operand captured by the last operator press, or `""`.
    pub fn pending_operand(&self) -> &str {
        match &self.phase {
            Phase::Entering => "",
            Phase::AwaitingRhs { operand, .. } | Phase::Finalized { operand, .. } => operand,
        }
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        match &self.phase {
            Phase::Entering => None,
            Phase::AwaitingRhs { operator, .. } | Phase::Finalized { operator, .. } => {
                Some(*operator)
            }
        }
    }

    pub fn is_finalized(&self) -> bool {
        matches!(self.phase, Phase::Finalized { .. })
    }

    /// The display holds the division error or a non-finite result.
    pub fn shows_error(&self) -> bool {
        is_error_text(&self.display)
    }

    pub fn snapshot(&self) -> Snapshot {
        let phase = match self.phase {
            Phase::Entering => PhaseKind::Entering,
            Phase::AwaitingRhs { .. } => PhaseKind::AwaitingRhs,
            Phase::Finalized { .. } => PhaseKind::Finalized,
        };
        Snapshot {
            display: self.display.clone(),
            pending_operand: self.pending_operand().to_string(),
            pending_operator: self.pending_operator(),
            result_finalized: self.is_finalized(),
            phase,
        }
    }

    fn with_display(&self, display: String) -> State {
        State {
            display,
            phase: self.phase.clone(),
        }
    }
}

/// Compute the state that follows `event`.
///
/// Events that are invalid in the current state return an unchanged copy.
/// An error is returned only when an operand fails to parse during equals;
/// the caller keeps its previous state in that case.
pub fn apply(state: &State, event: InputEvent) -> Result<State, CalcError> {
    match event {
        InputEvent::Digit(d) => {
            if d > 9 {
                return Err(CalcError::InvalidDigit(d));
            }
            Ok(push_symbol(state, char::from(b'0' + d)))
        }
        InputEvent::Decimal => Ok(push_symbol(state, '.')),
        InputEvent::Clear => Ok(State::default()),
        InputEvent::Delete => Ok(delete_last(state)),
        InputEvent::ToggleSign => Ok(toggle_sign(state)),
        InputEvent::Operator(op) => Ok(choose_operator(state, op)),
        InputEvent::Equals => equals(state),
    }
}

fn push_symbol(state: &State, symbol: char) -> State {
    if state.is_finalized() {
        return state.clone();
    }
    if symbol == '.' && state.display.contains('.') {
        return state.clone();
    }
    if state.display == ZERO && symbol != '.' {
        return state.with_display(symbol.to_string());
    }
    let mut display = state.display.clone();
    display.push(symbol);
    state.with_display(display)
}

fn delete_last(state: &State) -> State {
    if state.display.is_empty() {
        return state.clone();
    }
    // Error text is never partially erased.
    if state.shows_error() {
        return State::default();
    }

    let mut remainder = state.display.clone();
    remainder.pop();
    if remainder.is_empty() || remainder == "-" {
        if state.is_finalized() {
            State::default()
        } else {
            state.with_display(ZERO.to_string())
        }
    } else {
        state.with_display(remainder)
    }
}

fn toggle_sign(state: &State) -> State {
    if state.display == ZERO || state.display.is_empty() || state.shows_error() {
        return state.clone();
    }
    let display = match state.display.strip_prefix('-') {
        Some(rest) => rest.to_string(),
        None => format!("-{}", state.display),
    };
    state.with_display(display)
}

fn choose_operator(state: &State, operator: Operator) -> State {
    match &state.phase {
        Phase::AwaitingRhs { .. } => state.clone(),
        Phase::Finalized { .. } if state.shows_error() => state.clone(),
        Phase::Entering | Phase::Finalized { .. } => State {
            display: ZERO.to_string(),
            phase: Phase::AwaitingRhs {
                operand: state.display.clone(),
                operator,
            },
        },
    }
}

fn equals(state: &State) -> Result<State, CalcError> {
    let Phase::AwaitingRhs { operand, operator } = &state.phase else {
        return Ok(state.clone());
    };
    if operand == ZERO {
        return Ok(state.clone());
    }

    let outcome = evaluate(operand, &state.display, *operator)?;
    Ok(State {
        display: outcome.to_string(),
        phase: Phase::Finalized {
            operand: operand.clone(),
            operator: *operator,
        },
    })
}
