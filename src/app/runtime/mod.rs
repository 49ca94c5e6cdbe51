use ratatui::{Terminal, backend::CrosstermBackend};

use crate::args::Args;
use crate::sources::CatalogSource;
use crate::state::AppState;

use super::terminal::{restore_terminal, setup_terminal};

mod channels;
mod event_loop;
mod handlers;
pub mod init;
mod workers;

use channels::Channels;
use event_loop::run_event_loop;
use init::{apply_settings_to_app_state, resolve_settings, trigger_initial_fetch};
use workers::auxiliary::{spawn_event_thread, spawn_tick_worker};
use workers::catalog::spawn_catalog_worker;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Run the storefront TUI end-to-end: resolve settings, set up the
/// terminal, spawn workers, drive the event loop and restore the terminal.
///
/// Inputs:
/// - `args`: Parsed command-line arguments
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on unrecoverable terminal or
///   client setup errors.
///
/// Details:
/// - `STOREFRONT_TEST_HEADLESS=1` skips terminal setup and the input thread.
/// - The catalog source is built before the terminal is touched so a bad
///   configuration never leaves the terminal in raw mode.
pub async fn run(args: Args) -> Result<()> {
    let headless = crate::util::is_headless();

    let settings = resolve_settings(&args);
    let source = CatalogSource::from_settings(&settings)?;
    tracing::info!(source = %source.describe(), headless, "catalog source configured");

    let mut app = AppState::default();
    apply_settings_to_app_state(&mut app, settings);

    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        match Terminal::new(CrosstermBackend::new(std::io::stdout())) {
            Ok(t) => Some(t),
            Err(e) => {
                let _ = restore_terminal();
                return Err(e.into());
            }
        }
    };

    let mut channels = Channels::new();
    if let Some(req_rx) = channels.catalog_req_rx.take() {
        spawn_catalog_worker(source, req_rx, channels.catalog_res_tx.clone());
    }
    spawn_tick_worker(&channels.tick_tx);
    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );

    trigger_initial_fetch(&mut app, args.query.as_deref(), &channels.catalog_req_tx);

    run_event_loop(&mut terminal, &mut app, &mut channels).await;

    tracing::debug!("main loop exited");
    channels
        .event_thread_cancelled
        .store(true, std::sync::atomic::Ordering::Relaxed);

    if !headless {
        restore_terminal()?;
    }
    Ok(())
}
