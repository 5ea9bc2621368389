// Slider Tabs
// Terminal demo of the tabs widget

// IMPORTS ------------------>>

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

use slider_tabs::config::{convert_tabs_config, create_children};
use slider_tabs::config_validation::load_and_validate_config;
use slider_tabs::core::{App, EventHandler};

//--------------------------------------------------------<<

/// Environment variable naming the log file; logging is off when unset
const LOG_FILE_ENV: &str = "SLIDER_TABS_LOG";

// ┌──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                                 MAIN ENTRY POINT                                                 │
// └──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┘

fn main() -> Result<()> {
    init_logging()?;

    // Load and validate configuration from YAML file
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let app_config = load_and_validate_config(config_path).context("Failed to load configuration")?;
    let options = convert_tabs_config(&app_config.tabs).context("Invalid tabs options")?;
    let children = create_children(&app_config.tabs.children);

    let mut app = App::new(
        app_config.application.title.clone(),
        app_config.application.bindings.clone(),
        options,
        children,
        app_config.application.quiet_resize,
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    info!(changes = app.history.len(), "exiting");
    result
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                           MAIN LOOP                                            │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    app.tabs.mount(Instant::now());

    while !app.should_quit {
        let now = Instant::now();
        let size = terminal.size()?;
        app.before_draw(Rect::new(0, 0, size.width, size.height), now);

        terminal.draw(|f| app.render(f, now))?;
        if app.after_draw(now) {
            // Redraw at once so the new slider position shows
            continue;
        }

        if event::poll(app.poll_timeout(Instant::now()))? {
            let event = EventHandler::handle(event::read()?);
            app.handle(event, Instant::now());
        }
    }

    app.tabs.teardown();
    Ok(())
}

/// Log to the file named by `SLIDER_TABS_LOG`; stdout belongs to the terminal UI
fn init_logging() -> Result<()> {
    let Some(path) = std::env::var_os(LOG_FILE_ENV) else {
        return Ok(());
    };
    let file = File::create(&path).with_context(|| format!("Failed to create log file {:?}", path))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("slider_tabs=debug")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    info!(path = ?path, "logging started");
    Ok(())
}
