mod clipboard;
mod help;
mod state;

use keypad_calc::calculator::is_error_text;
use keypad_calc::keymap;
use keypad_calc::model::InputEvent;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Tabs},
    Terminal,
};
use state::{UiState, KEYPAD, TAB_CALCULATOR, TAB_HELP};
use std::{io, time::Duration};

/// Run the TUI loop until the user quits.
pub fn run() -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).ok();

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    terminal.clear().ok();

    let mut state = UiState::default();
    tracing::info!("tui started");

    let res = event_loop(&mut terminal, &mut state);

    disable_raw_mode().ok();
    let mut stdout = io::stdout();
    execute!(stdout, LeaveAlternateScreen).ok();
    tracing::info!(display = state.calc.display(), "tui stopped");
    res
}

fn event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    state: &mut UiState,
) -> Result<()> {
    loop {
        terminal
            .draw(|f| draw(f.area(), f, state))
            .context("draw frame")?;

        // Nothing changes without input; redraw only after a key or poll timeout.
        if !event::poll(Duration::from_millis(250)).unwrap_or(false) {
            continue;
        }
        let Ok(Event::Key(k)) = event::read() else {
            continue;
        };
        if k.kind != KeyEventKind::Press {
            continue;
        }

        match (k.modifiers, k.code) {
            (_, KeyCode::Char('q')) | (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
                return Ok(());
            }
            (_, KeyCode::Tab) => {
                state.tab = if state.tab == TAB_CALCULATOR {
                    TAB_HELP
                } else {
                    TAB_CALCULATOR
                };
            }
            (_, KeyCode::Char('?')) => {
                state.tab = TAB_HELP;
            }
            (_, KeyCode::Char('y')) => {
                let text = state.calc.display().to_string();
                state.info = match clipboard::copy_to_clipboard(&text) {
                    Ok(()) => format!("✓ Copied to clipboard: {text}"),
                    Err(e) => format!("Clipboard copy failed: {e:#}"),
                };
            }
            _ if state.tab != TAB_CALCULATOR => {}
            (_, KeyCode::Enter) => state.press(InputEvent::Equals),
            (_, KeyCode::Esc) => state.press(InputEvent::Clear),
            (_, KeyCode::Backspace) | (_, KeyCode::Delete) => state.press(InputEvent::Delete),
            (_, KeyCode::Char(c)) => {
                if let Some(ev) = keymap::event_for_char(c) {
                    state.press(ev);
                }
            }
            _ => {}
        }
    }
}

fn draw(area: Rect, f: &mut ratatui::Frame, state: &UiState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)].as_ref())
        .split(area);

    let tabs = Tabs::new(vec![Line::from("Calculator"), Line::from("Help")])
        .select(state.tab)
        .block(Block::default().borders(Borders::ALL).title("keypad-calc"))
        .highlight_style(Style::default().fg(Color::Yellow));
    f.render_widget(tabs, chunks[0]);

    match state.tab {
        TAB_CALCULATOR => draw_calculator(chunks[1], f, state),
        _ => help::draw_help(chunks[1], f),
    }
}

fn draw_calculator(area: Rect, f: &mut ratatui::Frame, state: &UiState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(4),
                Constraint::Min(10),
                Constraint::Length(3),
            ]
            .as_ref(),
        )
        .split(area);

    let display = state.calc.display();
    let display_style = if is_error_text(display) {
        Style::default().fg(Color::Red)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let screen = Paragraph::new(vec![
        Line::styled(state.pending_line(), Style::default().fg(Color::Gray)),
        Line::styled(display.to_string(), display_style),
    ])
    .alignment(Alignment::Right)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(screen, chunks[0]);

    draw_keypad(chunks[1], f, state);

    let status = Paragraph::new(Line::from(if state.info.is_empty() {
        "? for help, q to quit".to_string()
    } else {
        state.info.clone()
    }))
    .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[2]);
}

fn draw_keypad(area: Rect, f: &mut ratatui::Frame, state: &UiState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 5); 5])
        .split(area);

    for (row_area, keys) in rows.iter().zip(KEYPAD.iter()) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(*row_area);

        for (cell, key) in cells.iter().zip(keys.iter()) {
            let mut style = Style::default().fg(key_color(key));
            if state.last_pressed == Some(*key) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            let button = Paragraph::new(Line::styled(key.label(), style))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            f.render_widget(button, *cell);
        }
    }
}

fn key_color(key: &InputEvent) -> Color {
    match key {
        InputEvent::Digit(_) | InputEvent::Decimal => Color::White,
        InputEvent::Operator(_) => Color::Magenta,
        InputEvent::Equals => Color::Cyan,
        InputEvent::Clear | InputEvent::Delete | InputEvent::ToggleSign => Color::Yellow,
    }
}
