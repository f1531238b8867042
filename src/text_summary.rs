//! Transcript builder for text mode.
//!
//! Runs a key script through a calculator and formats one line per key.

use keypad_calc::calculator::Calculator;
use keypad_calc::display::DisplaySink;
use keypad_calc::model::InputEvent;
use anyhow::{Context, Result};

/// Pre-formatted lines for text output.
pub(crate) struct TextSummary {
    pub lines: Vec<String>,
}

/// Apply `events` in order, recording `key -> display` after each.
pub(crate) fn build_text_summary<S: DisplaySink>(
    calc: &mut Calculator<S>,
    events: &[InputEvent],
) -> Result<TextSummary> {
    let mut lines = Vec::with_capacity(events.len() + 1);

    for (i, ev) in events.iter().enumerate() {
        let shown = calc
            .on_event(*ev)
            .with_context(|| format!("key #{} ({}) failed", i + 1, ev.label()))?;
        lines.push(format!("{:>2}  ->  {}", ev.label(), shown));
    }

    let pending = match calc.pending_operator() {
        Some(op) if !calc.is_finalized() => format!(" (pending: {} {})", calc.pending_operand(), op),
        _ => String::new(),
    };
    lines.push(format!("Display: {}{}", calc.display(), pending));

    Ok(TextSummary { lines })
}

#[cfg(test)]
mod tests {
    use super::*;
    use keypad_calc::keymap::parse_script;

    #[test]
    fn test_transcript_lines() {
        let mut calc = Calculator::new(String::new());
        let events = parse_script("2+3=").unwrap();
        let summary = build_text_summary(&mut calc, &events).unwrap();
        assert_eq!(
            summary.lines,
            vec![
                " 2  ->  2",
                " +  ->  0",
                " 3  ->  3",
                " =  ->  5.0",
                "Display: 5.0",
            ]
        );
    }

    #[test]
    fn test_pending_operation_shown() {
        let mut calc = Calculator::new(String::new());
        let events = parse_script("9/").unwrap();
        let summary = build_text_summary(&mut calc, &events).unwrap();
        assert_eq!(summary.lines.last().unwrap(), "Display: 0 (pending: 9 ÷)");
    }

    #[test]
    fn test_invalid_digit_reports_position() {
        let mut calc = Calculator::new(String::new());
        let err = build_text_summary(&mut calc, &[InputEvent::Digit(1), InputEvent::Digit(11)])
            .err()
            .unwrap();
        assert!(format!("{err:#}").starts_with("key #2"));
    }
}
