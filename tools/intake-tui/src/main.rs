//! Intake TUI entry point.
//!
//! ## Usage
//!
//! ```bash
//! # Default endpoint, logs discarded
//! intake-tui
//!
//! # Local API with logs in a file
//! intake-tui --endpoint http://127.0.0.1:8080/form --log-file intake.log
//! ```

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tokio::sync::mpsc;
use tracing::{debug, info};

use intake_core::{
    ApiConfig, CredentialConfig, FormState, IntakeApi, IntakeConfig, IntakeService,
    DEFAULT_BCRYPT_COST, DEFAULT_ENDPOINT,
};
use intake_telemetry::{init_tracing, LogSink, TelemetryConfig};
use intake_tui::{ui, Action, App, ShellEvent};

/// Intake form in the terminal
#[derive(Parser, Debug)]
#[command(name = "intake-tui")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Form API endpoint (GET options, POST submissions)
    #[arg(long, env = "INTAKE_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// bcrypt work factor for the password hash
    #[arg(long, env = "INTAKE_BCRYPT_COST", default_value_t = DEFAULT_BCRYPT_COST)]
    bcrypt_cost: u32,

    /// Append logs to this file (discarded when unset)
    #[arg(long, env = "INTAKE_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Request timeout, e.g. "10s" (transport default when unset)
    #[arg(long, env = "INTAKE_TIMEOUT", value_parser = humantime::parse_duration)]
    timeout: Option<Duration>,
}

impl Args {
    fn intake_config(&self) -> IntakeConfig {
        IntakeConfig {
            api: ApiConfig {
                endpoint: self.endpoint.clone(),
                timeout: self.timeout,
            },
            credential: CredentialConfig {
                cost: self.bcrypt_cost,
            },
        }
    }

    fn log_sink(&self) -> LogSink {
        match &self.log_file {
            Some(path) => LogSink::File(path.clone()),
            None => LogSink::Discard,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let telemetry = TelemetryConfig::from_env("intake-tui");
    init_tracing(&telemetry, args.log_sink()).context("Failed to initialize logging")?;

    let service = IntakeService::connect(&args.intake_config())
        .context("Invalid intake configuration")?;
    let service = Arc::new(service);

    // Setup terminal with panic hook for cleanup
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let result = run_app(&mut terminal, &mut app, service).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("Shell closed");
    result
}

/// Main application loop.
async fn run_app<B, S>(terminal: &mut Terminal<B>, app: &mut App, service: Arc<S>) -> Result<()>
where
    B: Backend,
    S: IntakeApi + 'static,
{
    let (tx, mut rx) = mpsc::unbounded_channel();

    // Options are fetched once per session
    spawn_load_options(&service, &tx);

    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        while let Ok(event) = rx.try_recv() {
            app.apply(event);
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if let Action::Submit(state) = app.handle_key(key) {
                    spawn_submit(&service, &tx, state);
                }
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

fn spawn_load_options<S: IntakeApi + 'static>(
    service: &Arc<S>,
    tx: &mpsc::UnboundedSender<ShellEvent>,
) {
    let service = Arc::clone(service);
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = service.load_options().await;
        if tx.send(ShellEvent::OptionsLoaded(result)).is_err() {
            debug!("Shell closed before options arrived");
        }
    });
}

fn spawn_submit<S: IntakeApi + 'static>(
    service: &Arc<S>,
    tx: &mpsc::UnboundedSender<ShellEvent>,
    state: FormState,
) {
    let service = Arc::clone(service);
    let tx = tx.clone();
    tokio::spawn(async move {
        let outcome = service.submit(state).await;
        if tx.send(ShellEvent::Submitted(outcome)).is_err() {
            debug!(?outcome, "Shell closed before submission finished");
        }
    });
}
