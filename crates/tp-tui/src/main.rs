mod app;
mod command;
mod palette;
mod tabs;
mod ui;
mod widgets;

use std::io::{self, BufRead, Write as _};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self as ct_event, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use tp_core::{Config, SessionStore, ThemeFilter, ViewKind};
use tp_telemetry::logging::{self, LogFormat};

use crate::app::App;

/// Command-line options (simple, no clap dependency).
#[derive(Debug)]
struct Options {
    headless: bool,
    view: Option<ViewKind>,
    theme: Option<ThemeFilter>,
    config: Option<PathBuf>,
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Result<Option<&'a String>> {
    match args.iter().position(|a| a == flag) {
        Some(i) => args
            .get(i + 1)
            .map(Some)
            .with_context(|| format!("{flag} needs a value")),
        None => Ok(None),
    }
}

fn parse_args(args: &[String]) -> Result<Options> {
    Ok(Options {
        headless: args.iter().any(|a| a == "--headless"),
        view: flag_value(args, "--view")?
            .map(|v| v.parse::<ViewKind>())
            .transpose()?,
        theme: flag_value(args, "--theme")?.map(|t| ThemeFilter::parse(t)),
        config: flag_value(args, "--config")?.map(PathBuf::from),
    })
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let opts = parse_args(&args)?;

    let config = match &opts.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().context("loading config")?,
    };
    logging::init(
        "tp-tui",
        &config.general.log_level,
        LogFormat::from_json_flag(config.general.json_logs),
    );

    let store = SessionStore::builtin();
    let duplicates = store.duplicate_ids();
    if !duplicates.is_empty() {
        tracing::warn!(?duplicates, "session ids are not unique");
    }

    let mut app = App::new(store, config);
    if let Some(view) = opts.view {
        app.set_view(view);
    }
    if let Some(theme) = opts.theme {
        app.set_filter(theme);
    }

    if opts.headless {
        return run_headless(app);
    }

    // Restore the terminal on panic.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    let result = run(app);

    restore_terminal()?;
    result
}

/// Run the interactive TUI with the standard crossterm backend.
fn run(mut app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    while !app.should_quit {
        terminal.draw(|frame| ui::render(frame, &app))?;

        if ct_event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = ct_event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }
    }

    Ok(())
}

/// Headless mode: reads commands from stdin, writes JSON lines to stdout.
/// No terminal rendering.
///
/// Usage: `echo '{"cmd":"query_state"}' | tp-tui --headless`
fn run_headless(mut app: App) -> Result<()> {
    emit_event(&serde_json::json!({
        "event": "started",
        "views": ViewKind::ALL.len(),
        "view": app.view.key(),
        "theme": app.filter.label(),
        "sessions": app.store().all_sessions().len(),
    }));

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        // JSON first, then `:` text commands.
        let Some(cmd) = command::parse_json_command(line).or_else(|| command::parse_command(line)) else {
            tracing::debug!(line, "unrecognised headless command");
            emit_event(&serde_json::json!({
                "event": "error",
                "message": format!("unknown command: {line}"),
            }));
            continue;
        };

        let prev_view = app.view;
        let prev_filter = app.filter.clone();
        let prev_detail = app.detail.clone();
        let result = command::execute_command(&mut app, cmd);

        if app.view != prev_view {
            emit_event(&serde_json::json!({
                "event": "view_changed",
                "view": app.view.key(),
                "view_label": app.view.label(),
            }));
        }
        if app.filter != prev_filter {
            emit_event(&serde_json::json!({
                "event": "theme_changed",
                "theme": app.filter.label(),
                "sessions": app.filtered().len(),
            }));
        }
        if app.detail != prev_detail {
            let event = if app.detail.is_some() { "detail_opened" } else { "detail_closed" };
            emit_event(&serde_json::json!({
                "event": event,
                "session": app.detail.as_ref().or(prev_detail.as_ref()),
            }));
        }

        match result {
            Some(json) => {
                println!("{json}");
                io::stdout().flush()?;
            }
            None => emit_event(&serde_json::json!({"event": "ok"})),
        }

        if app.should_quit {
            emit_event(&serde_json::json!({"event": "quit"}));
            break;
        }
    }

    Ok(())
}

fn emit_event(value: &serde_json::Value) {
    if let Ok(s) = serde_json::to_string(value) {
        println!("{s}");
        let _ = io::stdout().flush();
    }
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, LeaveAlternateScreen)?;
    Ok(())
}
