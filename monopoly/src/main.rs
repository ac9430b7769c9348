//! Monopoly table TUI application.
//!
//! Enter the two dice rolled at the physical table, send them to the game
//! server, and follow whose turn it is.
//!
//! # Headless Mode
//!
//! Run with `--headless` for a line-based interface suitable for scripting:
//!
//! ```bash
//! echo "3 4" | cargo run -p monopoly -- --headless --server http://localhost:8000
//! ```

mod app;
mod events;
mod headless;
mod ui;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use monopoly_core::logging::{self, DEFAULT_LOG_FILE};
use monopoly_core::{RollSession, SessionConfig, DEFAULT_SERVER_URL, SERVER_URL_ENV};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Duration;

use app::App;
use events::{handle_event, EventResult};
use ui::render::render;

/// Options taken from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    help: bool,
    headless: bool,
    server_url: Option<String>,
    log_file: PathBuf,
}

impl CliOptions {
    fn parse(args: &[String]) -> Self {
        let mut options = Self {
            help: false,
            headless: false,
            server_url: None,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        };

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "-h" | "--help" => options.help = true,
                "--headless" => options.headless = true,
                "--server" => {
                    if let Some(url) = args.get(i + 1) {
                        options.server_url = Some(url.clone());
                        i += 1;
                    }
                }
                "--log-file" => {
                    if let Some(path) = args.get(i + 1) {
                        options.log_file = PathBuf::from(path);
                        i += 1;
                    }
                }
                _ => {}
            }
            i += 1;
        }

        options
    }

    fn session_config(&self) -> SessionConfig {
        let config = SessionConfig::from_env();
        match &self.server_url {
            Some(url) => config.with_server_url(url.clone()),
            None => config,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let options = CliOptions::parse(&args);

    if options.help {
        print_help();
        return Ok(());
    }

    if options.headless {
        logging::init_stderr_logging()?;
        let (session, events) = RollSession::connect(options.session_config())?;
        return headless::run_headless(session, events)
            .await
            .map_err(|e| e.into());
    }

    // The terminal belongs to the UI, so logs go to a file
    logging::init_file_logging(&options.log_file)?;

    let (session, events) = match RollSession::connect(options.session_config()) {
        Ok(connected) => connected,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Set {SERVER_URL_ENV} or pass --server <URL>.");
            std::process::exit(1);
        }
    };
    tracing::info!(server = session.server_url().unwrap_or_default(), "starting table");
    session.check_connection();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, App::new(session, events)).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        tracing::error!(error = %e, "table UI stopped");
        eprintln!("Error: {e}");
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> io::Result<()> {
    loop {
        // Replies that arrived since the last frame
        app.drain_events();

        terminal.draw(|f| render(f, &app))?;

        // Poll for events with timeout for animations
        if event::poll(Duration::from_millis(100))? {
            let ev = event::read()?;
            if handle_event(&mut app, ev) == EventResult::Quit {
                return Ok(());
            }
        } else {
            app.tick();
        }

        // Let spawned requests make progress between frames
        tokio::task::yield_now().await;
    }
}

fn print_help() {
    println!("Monopoly table - send dice rolls to the game server");
    println!();
    println!("USAGE:");
    println!("  monopoly [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -h, --help           Show this help message");
    println!("  --headless           Run in headless mode (text-only, no TUI)");
    println!("  --server <URL>       Game server base URL");
    println!("                       (default: ${SERVER_URL_ENV} or {DEFAULT_SERVER_URL})");
    println!("  --log-file <PATH>    Log file for the TUI (default: {DEFAULT_LOG_FILE})");
    println!();
    println!("ENVIRONMENT:");
    println!("  {SERVER_URL_ENV}  Game server base URL, also read from .env");
    println!("  RUST_LOG             Log filter (default: info)");
    println!();
    println!("EXAMPLES:");
    println!("  monopoly                                   # Interactive TUI mode");
    println!("  monopoly --server http://localhost:8000    # Use a local server");
    println!("  monopoly --headless < rolls.txt            # Replay rolls from a file");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_defaults() {
        let options = CliOptions::parse(&args(&["monopoly"]));

        assert!(!options.help);
        assert!(!options.headless);
        assert_eq!(options.server_url, None);
        assert_eq!(options.log_file, PathBuf::from(DEFAULT_LOG_FILE));
    }

    #[test]
    fn test_parse_flags() {
        let options = CliOptions::parse(&args(&[
            "monopoly",
            "--headless",
            "--server",
            "http://localhost:8000",
            "--log-file",
            "/tmp/table.log",
        ]));

        assert!(options.headless);
        assert_eq!(options.server_url.as_deref(), Some("http://localhost:8000"));
        assert_eq!(options.log_file, PathBuf::from("/tmp/table.log"));
        assert_eq!(
            options.session_config().server_url,
            "http://localhost:8000"
        );
    }

    #[test]
    fn test_parse_dangling_flag() {
        let options = CliOptions::parse(&args(&["monopoly", "--server"]));
        assert_eq!(options.server_url, None);

        let options = CliOptions::parse(&args(&["monopoly", "-h"]));
        assert!(options.help);
    }
}
