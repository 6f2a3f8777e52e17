use std::io::{self, stdout};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;

mod app;
mod calibration;
mod cli;
mod estimation;
mod models;
mod theme;
mod ui;
mod utils;
mod watcher;

use app::App;
use calibration::{CalibrationStore, DEFAULT_MAX_COMPLEXITY_HOURS};
use models::{Mode, Overlay};

fn main() -> io::Result<()> {
    let config = cli::parse_args()?;
    let store = CalibrationStore::open_default()?;
    let calibration_hours = resolve_calibration(&config, &store)?;

    let mut app = App::new(&config, store, calibration_hours);

    // Keep the watcher alive for the lifetime of the UI
    let _watcher = watcher::setup_report_watcher(
        app.report_path.clone(),
        app.report_needs_reload.clone(),
    );

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    // Run the app
    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

/// Decide the calibration value for this session: an explicit --hours wins,
/// then the stored value, then the setup prompt (or the default when
/// prompts are skipped). Whatever wins is persisted for the next start.
fn resolve_calibration(config: &cli::CliConfig, store: &CalibrationStore) -> io::Result<f64> {
    if let Some(hours) = config.hours {
        store.save(hours)?;
        return Ok(hours);
    }

    let stored = match store.load() {
        Ok(value) => value,
        Err(e) => {
            eprintln!("Warning: ignoring unreadable calibration file: {e}");
            None
        }
    };

    if let Some(hours) = stored {
        if !config.recalibrate {
            return Ok(hours);
        }
    }

    if config.skip_prompts {
        let hours = stored.unwrap_or(DEFAULT_MAX_COMPLEXITY_HOURS);
        store.save(hours)?;
        return Ok(hours);
    }

    let hours = cli::prompt_calibration(stored)?;
    store.save(hours)?;
    Ok(hours)
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        app.reload_report_if_needed();

        terminal.draw(|frame| ui::render_dashboard(frame, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                handle_key(app, key);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if app.mode == Mode::Recalibrate {
        match key.code {
            KeyCode::Esc => app.cancel_recalibrate_input(),
            KeyCode::Enter => app.commit_recalibrate_input(),
            KeyCode::Backspace => {
                app.input_buffer.pop();
            }
            KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => {
                app.input_buffer.push(c);
            }
            _ => {}
        }
        return;
    }

    if app.overlay == Overlay::StoryDetail {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => app.overlay = Overlay::None,
            KeyCode::Up | KeyCode::Char('k') => app.select_previous_story(),
            KeyCode::Down | KeyCode::Char('j') => app.select_next_story(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_story(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_story(),
        KeyCode::Enter => {
            if app.selected_story().is_some() {
                app.overlay = Overlay::StoryDetail;
            }
        }
        KeyCode::Char('s') => app.cycle_sort_mode(),
        KeyCode::Char('c') => app.open_recalibrate_input(),
        KeyCode::Char('r') => {
            if let Ok(mut flag) = app.report_needs_reload.lock() {
                *flag = true;
            }
        }
        _ => {}
    }
}
