//! Slicing Pie TUI: three-panel terminal form with vim-style navigation.
//!
//! Panels:
//! 1. Calculator: company settings and cofounder cards
//! 2. Results: equity split cards and summary
//! 3. About: method, disclaimer and key bindings

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use slicepie_core::session::Session;
use slicepie_runner::config::ScenarioConfig;
use slicepie_tui::app::AppState;
use slicepie_tui::{input, ui};

#[derive(Parser)]
#[command(
    name = "slicepie-tui",
    version,
    about = "Slicing Pie TUI - interactive equity split calculator"
)]
struct Args {
    /// Start from a scenario TOML file instead of a single default cofounder.
    #[arg(long)]
    scenario: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load before touching the terminal so errors print normally.
    let session = match &args.scenario {
        Some(path) => ScenarioConfig::from_file(path)
            .and_then(ScenarioConfig::into_session)
            .with_context(|| format!("Failed to load scenario {}", path.display()))?,
        None => Session::new(),
    };
    let mut app = AppState::new(session, args.scenario.clone());
    if let Some(path) = &args.scenario {
        app.set_status(format!("Loaded {}", path.display()));
    }

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the main event loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        // 3. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
