use crate::config::Config;
use crate::logger::Logger;
use crate::services::profile::{LocalProfileService, ProfileService};
use crate::ui::app_component::AppComponent;
use crate::ui::core::{EventHandler, EventType};
use anyhow::Context;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::sync::Arc;

/// Run the application with the in-process profile service
pub async fn run_app(config: Config, logger: Logger) -> anyhow::Result<()> {
    run_app_with_service(config, logger, Arc::new(LocalProfileService::new())).await
}

/// Set up the terminal, run the event loop and always restore the terminal afterwards
pub async fn run_app_with_service(
    config: Config,
    logger: Logger,
    profile_service: Arc<dyn ProfileService>,
) -> anyhow::Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppComponent::new(&config, logger, profile_service);
    let mut event_handler = EventHandler::new();

    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;
    let restored = restore_terminal(&mut terminal);
    finish(app, result, restored)
}

/// Undo the terminal setup, attempting every step even when one fails
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> anyhow::Result<()> {
    let raw_mode = disable_raw_mode().context("Failed to disable raw mode");
    let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen).context("Failed to leave alternate screen");
    let cursor = terminal.show_cursor().context("Failed to show cursor");
    raw_mode.and(screen).and(cursor)
}

/// Shut the app down, then report the loop error first and the restore error second
fn finish(app: AppComponent, result: anyhow::Result<()>, restored: anyhow::Result<()>) -> anyhow::Result<()> {
    app.shutdown();
    result.and(restored)
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> anyhow::Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|f| app.render(f))?;
            needs_render = false;
        }

        let event = event_handler.next_event().await?;
        match event {
            EventType::Key(_) | EventType::Resize(_, _) => {
                app.handle_event(event)?;
                needs_render = true;
            }
            EventType::Tick => {
                // Only redraw when a background result arrived or a call is still spinning
                let was_busy = app.is_busy();
                app.handle_event(event)?;
                needs_render = was_busy || app.is_busy();
            }
            EventType::Other => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
