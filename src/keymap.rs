//! Key and script parsing shared by the TUI and the scripted modes.

use crate::calculator::CalcError;
use crate::model::{InputEvent, Operator};

/// Map a single key character to an input event.
pub fn event_for_char(c: char) -> Option<InputEvent> {
    let ev = match c {
        '0'..='9' => InputEvent::Digit(c as u8 - b'0'),
        '.' | ',' => InputEvent::Decimal,
        '+' => InputEvent::Operator(Operator::Add),
        '-' => InputEvent::Operator(Operator::Subtract),
        '*' | 'x' | 'X' => InputEvent::Operator(Operator::Multiply),
        '/' => InputEvent::Operator(Operator::Divide),
        '%' => InputEvent::Operator(Operator::Percent),
        '=' => InputEvent::Equals,
        'c' | 'C' => InputEvent::Clear,
        '<' => InputEvent::Delete,
        'n' | 'N' | '~' => InputEvent::ToggleSign,
        _ => return None,
    };
    Some(ev)
}

/// Parse a key script into events.
///
/// Tokens are separated by whitespace. A token that is a button tag word
/// (`add`, `equals`, `plus_minus`, ...) maps to that button; anything else is
/// read one key character at a time, so `"12+3="` and `"1 2 add 3 equals"`
/// are equivalent.
pub fn parse_script(script: &str) -> Result<Vec<InputEvent>, CalcError> {
    let mut events = Vec::new();
    for token in script.split_whitespace() {
        if token.chars().count() > 1 {
            if let Ok(ev) = InputEvent::from_tag(token) {
                events.push(ev);
                continue;
            }
        }
        for c in token.chars() {
            let ev = event_for_char(c).ok_or_else(|| CalcError::UnknownInput(c.to_string()))?;
            events.push(ev);
        }
    }
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_script() {
        let events = parse_script("12+3=").unwrap();
        assert_eq!(
            events,
            vec![
                InputEvent::Digit(1),
                InputEvent::Digit(2),
                InputEvent::Operator(Operator::Add),
                InputEvent::Digit(3),
                InputEvent::Equals,
            ]
        );
    }

    #[test]
    fn test_tag_words_match_compact_form() {
        assert_eq!(
            parse_script("1 2 add 3 equals").unwrap(),
            parse_script("12+3=").unwrap()
        );
        assert_eq!(
            parse_script("5 plus_minus delete clear").unwrap(),
            parse_script("5n<c").unwrap()
        );
    }

    #[test]
    fn test_mixed_tokens() {
        let events = parse_script("50 percent 10=").unwrap();
        assert_eq!(events[2], InputEvent::Operator(Operator::Percent));
        assert_eq!(events.len(), 6);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = parse_script("2 ^ 3").unwrap_err();
        assert!(matches!(err, CalcError::UnknownInput(ref k) if k == "^"));
    }

    #[test]
    fn test_empty_script() {
        assert!(parse_script("   ").unwrap().is_empty());
    }
}
