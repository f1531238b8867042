use ratatui::{
    layout::Rect,
    style::Color,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn keybind(keys: &str, pad: usize, action: &str) -> Line<'static> {
    Line::from(vec![
        Span::raw("  "),
        Span::styled(keys.to_string(), Style::default().fg(Color::Magenta)),
        Span::raw(format!("{:pad$}{action}", "")),
    ])
}

pub fn draw_help(area: Rect, f: &mut Frame) {
    let p = Paragraph::new(vec![
        Line::from("Keypad:"),
        keybind("0-9 .", 7, "Enter digits"),
        keybind("+ - * x / %", 1, "Choose operator"),
        keybind("= / Enter", 3, "Evaluate"),
        keybind("n / ~", 7, "Toggle sign"),
        keybind("Backspace / <", 0, " Delete last digit"),
        keybind("c / Esc", 5, "Clear"),
        Line::from(""),
        Line::from("General:"),
        keybind("y", 11, "Copy display to clipboard"),
        keybind("tab", 9, "Switch tabs"),
        keybind("?", 11, "Show this help"),
        keybind("q / Ctrl-C", 2, "Quit"),
        Line::from(""),
        Line::from("Notes:"),
        Line::from("  One operation at a time: a second operator before = is ignored."),
        Line::from("  After =, digits are locked; pick an operator to keep going or clear."),
    ])
    .block(Block::default().borders(Borders::ALL).title("Help"));
    f.render_widget(p, area);
}
