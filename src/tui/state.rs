use keypad_calc::Calculator;
use keypad_calc::model::{InputEvent, Operator};

pub const TAB_CALCULATOR: usize = 0;
pub const TAB_HELP: usize = 1;

/// Keypad layout, top row first.
pub const KEYPAD: [[InputEvent; 4]; 5] = [
    [
        InputEvent::Clear,
        InputEvent::Delete,
        InputEvent::Operator(Operator::Percent),
        InputEvent::Operator(Operator::Divide),
    ],
    [
        InputEvent::Digit(7),
        InputEvent::Digit(8),
        InputEvent::Digit(9),
        InputEvent::Operator(Operator::Multiply),
    ],
    [
        InputEvent::Digit(4),
        InputEvent::Digit(5),
        InputEvent::Digit(6),
        InputEvent::Operator(Operator::Subtract),
    ],
    [
        InputEvent::Digit(1),
        InputEvent::Digit(2),
        InputEvent::Digit(3),
        InputEvent::Operator(Operator::Add),
    ],
    [
        InputEvent::ToggleSign,
        InputEvent::Digit(0),
        InputEvent::Decimal,
        InputEvent::Equals,
    ],
];

pub struct UiState {
    pub tab: usize,
    pub info: String,
    pub last_pressed: Option<InputEvent>,
    pub calc: Calculator<String>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            tab: TAB_CALCULATOR,
            info: String::new(),
            last_pressed: None,
            calc: Calculator::new(String::new()),
        }
    }
}

impl UiState {
    /// Forward a keypad press to the calculator.
    pub fn press(&mut self, ev: InputEvent) {
        self.last_pressed = Some(ev);
        match self.calc.on_event(ev) {
            Ok(_) => self.info.clear(),
            Err(e) => self.info = format!("Input failed: {e}"),
        }
    }

    /// Text for the line above the display, e.g. `12 ×`.
    pub fn pending_line(&self) -> String {
        match self.calc.pending_operator() {
            Some(op) if self.calc.is_finalized() => {
                format!("{} {} … =", self.calc.pending_operand(), op)
            }
            Some(op) => format!("{} {}", self.calc.pending_operand(), op),
            None => String::new(),
        }
    }
}
