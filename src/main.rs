mod config;
mod controller;
mod headless;
mod logging;
mod model;
mod view;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use config::Cli;
use controller::AppController;
use model::{AppModel, HttpProvider, LoggingAddHook};
use view::AppView;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let provider = HttpProvider::new(cli.api_url.clone(), cli.timeout())
        .context("Failed to build the data provider client")?;

    if let Some(command) = &cli.command {
        if let Err(e) = logging::init_stderr_logging() {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }
        let output = headless::run(command, &provider, cli.race_policy).await?;
        println!("{}", output);
        return Ok(());
    }

    if let Err(e) = logging::init_logging(&cli.log_dir) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!(api_url = %cli.api_url, policy = ?cli.race_policy, "=== pitchside starting ===");

    let model = Arc::new(AppModel::new(cli.start, cli.race_policy));
    let controller = AppController::new(model.clone(), Arc::new(provider), Arc::new(LoggingAddHook));
    controller.show_screen(cli.start).await;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, model, controller).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("pitchside shutting down");
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    model: Arc<AppModel>,
    controller: AppController,
) -> io::Result<()> {
    loop {
        // Auto-clear old errors (after 5 seconds)
        model.auto_clear_old_errors().await;

        let snapshot = model.snapshot().await;
        let should_quit = model.should_quit().await;

        terminal.draw(|f| {
            AppView::render(f, &snapshot);
        })?;

        // Short poll so background loads show up promptly
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Err(e) = controller.handle_key_event(key).await {
                    tracing::warn!(error = %e, "Key handling failed");
                }
            }
        }

        if should_quit {
            break;
        }
    }

    Ok(())
}
