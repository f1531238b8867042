use crate::logging::{self, LogTarget};
use anyhow::{Context, Result};
use clap::Parser;
use keypad_calc::keymap::parse_script;
use keypad_calc::model::InputEvent;
use keypad_calc::Calculator;
use std::io::BufRead;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "keypad-calc",
    version,
    about = "Keypad calculator with an interactive TUI and scriptable text/JSON modes"
)]
pub struct Cli {
    /// Key script to run instead of the TUI (e.g. "12+3=" or "1 2 add 3 equals")
    #[arg(long)]
    pub keys: Option<String>,

    /// Print a key-by-key transcript and exit (no TUI)
    #[arg(long, conflicts_with = "json")]
    pub text: bool,

    /// Print the final calculator state as JSON and exit (no TUI)
    #[arg(long)]
    pub json: bool,

    /// Run silently: suppress all output except errors
    #[arg(long)]
    pub silent: bool,

    /// Log filter when RUST_LOG is unset (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Append logs to this file (the TUI logs nowhere else)
    #[arg(long)]
    pub log_file: Option<std::path::PathBuf>,
}

impl Cli {
    fn is_interactive(&self) -> bool {
        self.keys.is_none() && !self.json && !self.text
    }
}

pub fn run(args: Cli) -> Result<()> {
    if args.silent && !args.json {
        return Err(anyhow::anyhow!(
            "--silent can only be used with --json. Use --silent --json together."
        ));
    }

    let interactive = args.is_interactive() && cfg!(feature = "tui");
    let target = match (args.log_file.as_deref(), interactive) {
        (Some(path), _) => LogTarget::File(path),
        (None, true) => LogTarget::Off,
        (None, false) => LogTarget::Stderr,
    };
    logging::init(&args.log_level, target)?;

    if args.is_interactive() {
        #[cfg(feature = "tui")]
        {
            return crate::tui::run();
        }
        #[cfg(not(feature = "tui"))]
        {
            // Fallback when built without TUI support.
            return run_stdin();
        }
    }

    let events = match args.keys.as_deref() {
        Some(script) => parse_script(script).context("invalid key script")?,
        None => read_stdin_script()?,
    };

    if args.json {
        return run_json(&events, args.silent);
    }
    run_text(&events)
}

/// Print one transcript line per key and a final display line.
fn run_text(events: &[InputEvent]) -> Result<()> {
    let mut calc = Calculator::new(String::new());
    let summary = crate::text_summary::build_text_summary(&mut calc, events)?;
    for line in summary.lines {
        println!("{line}");
    }
    Ok(())
}

fn run_json(events: &[InputEvent], silent: bool) -> Result<()> {
    let mut calc = Calculator::new(String::new());
    for (i, ev) in events.iter().enumerate() {
        calc.on_event(*ev)
            .with_context(|| format!("key #{} ({}) failed", i + 1, ev.label()))?;
    }
    if !silent {
        let out = serde_json::to_string_pretty(&calc.snapshot())?;
        println!("{out}");
    }
    Ok(())
}

/// Read every line of stdin as one continuous key script.
fn read_stdin_script() -> Result<Vec<InputEvent>> {
    let mut events = Vec::new();
    for (n, line) in std::io::stdin().lock().lines().enumerate() {
        let line = line.context("read stdin")?;
        let parsed =
            parse_script(&line).with_context(|| format!("invalid key script on line {}", n + 1))?;
        events.extend(parsed);
    }
    Ok(events)
}

/// Line-oriented session: each stdin line is a script, the display is printed after it.
#[cfg(not(feature = "tui"))]
fn run_stdin() -> Result<()> {
    let mut calc = Calculator::new(String::new());
    for line in std::io::stdin().lock().lines() {
        let line = line.context("read stdin")?;
        match parse_script(&line) {
            Ok(events) => {
                for ev in events {
                    if let Err(e) = calc.on_event(ev) {
                        eprintln!("{e}");
                        break;
                    }
                }
                println!("{}", calc.display());
            }
            Err(e) => eprintln!("{e}"),
        }
    }
    Ok(())
}
