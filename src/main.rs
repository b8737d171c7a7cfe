mod app;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io::stdout;
use std::time::{Duration, Instant};

use hpicker::config::Config;
use hpicker::events::{Action, EventHandler};
use hpicker::log;
use hpicker::picker::FeedbackKind;

use app::App;

/// Redraw interval while a transition runs
const FRAME_INTERVAL: Duration = Duration::from_millis(16);
/// Redraw interval when idle
const IDLE_INTERVAL: Duration = Duration::from_millis(250);

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
    }

    // Parse CLI arguments
    let args: Vec<String> = std::env::args().collect();
    let mut gap_override: Option<f32> = None;
    let mut feedback_override: Option<FeedbackKind> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--gap" | "-g" => {
                match args.get(i + 1).map(|value| value.parse::<f32>()) {
                    Some(Ok(gap)) if gap >= 0.0 => gap_override = Some(gap),
                    _ => eprintln!("Warning: --gap requires a non-negative number"),
                }
                i += 2;
                continue;
            }
            "--no-bell" => feedback_override = Some(FeedbackKind::None),
            _ => {
                // Unknown flag, ignore
            }
        }
        i += 1;
    }

    let config = Config::load().with_overrides(gap_override, feedback_override);
    log::log(&format!("Config: {:?}", config));

    let mut app = App::new(&config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    log::install_panic_hook(|| {
        let _ = reset_terminal();
    });
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    reset_terminal()?;
    terminal.show_cursor()?;

    result
}

/// Leave raw mode, mouse capture and the alternate screen.
fn reset_terminal() -> std::io::Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen)
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        // Redraw often only while the strip is sliding
        let tick = if app.picker.is_animating(Instant::now()) {
            FRAME_INTERVAL
        } else {
            IDLE_INTERVAL
        };

        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(event)) => {
                        let action = EventHandler::handle_event(&*app, &event);
                        if action != Action::None {
                            log::log_event(&format!("{:?}", action));
                        }
                        app.dispatch(action);
                    }
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                }
            }
            _ = tokio::time::sleep(tick) => {}
        }

        if app.should_quit {
            break;
        }
    }

    log::log("=== hpicker exiting ===");
    Ok(())
}
