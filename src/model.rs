use crate::calculator::CalcError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary operators available on the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Percent,
}

impl Operator {
    pub const ALL: [Operator; 5] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
        Operator::Percent,
    ];

    /// Button tag used by the keypad and key scripts.
    pub fn as_tag(self) -> &'static str {
        match self {
            Operator::Add => "add",
            Operator::Subtract => "subtract",
            Operator::Multiply => "multiply",
            Operator::Divide => "divide",
            Operator::Percent => "percent",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "−",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
            Operator::Percent => "%",
        }
    }

    pub fn from_tag(tag: &str) -> Result<Self, CalcError> {
        Operator::ALL
            .into_iter()
            .find(|op| op.as_tag() == tag)
            .ok_or_else(|| CalcError::UnknownInput(tag.to_string()))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A single button press delivered to the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputEvent {
    Digit(u8),
    Decimal,
    Operator(Operator),
    Equals,
    Clear,
    Delete,
    ToggleSign,
}

impl InputEvent {
    /// Parse a button tag such as `"7"`, `"."`, `"add"` or `"plus_minus"`.
    pub fn from_tag(tag: &str) -> Result<Self, CalcError> {
        match tag {
            "." => Ok(InputEvent::Decimal),
            "equals" => Ok(InputEvent::Equals),
            "clear" => Ok(InputEvent::Clear),
            "delete" => Ok(InputEvent::Delete),
            "plus_minus" => Ok(InputEvent::ToggleSign),
            _ => {
                let mut chars = tag.chars();
                if let (Some(c), None) = (chars.next(), chars.next()) {
                    if let Some(d) = c.to_digit(10) {
                        return Ok(InputEvent::Digit(d as u8));
                    }
                }
                Operator::from_tag(tag).map(InputEvent::Operator)
            }
        }
    }

    /// Short label for transcripts and the keypad highlight.
    pub fn label(&self) -> String {
        match self {
            InputEvent::Digit(d) => d.to_string(),
            InputEvent::Decimal => ".".into(),
            InputEvent::Operator(op) => op.symbol().into(),
            InputEvent::Equals => "=".into(),
            InputEvent::Clear => "C".into(),
            InputEvent::Delete => "⌫".into(),
            InputEvent::ToggleSign => "±".into(),
        }
    }
}

/// Which of the three machine states the calculator is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseKind {
    Entering,
    AwaitingRhs,
    Finalized,
}

/// Serializable view of the calculator, emitted by `--json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub display: String,
    #[serde(default)]
    pub pending_operand: String,
    #[serde(default)]
    pub pending_operator: Option<Operator>,
    pub result_finalized: bool,
    pub phase: PhaseKind,
}
