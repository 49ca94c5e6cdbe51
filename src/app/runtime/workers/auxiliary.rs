use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

/// Tick period driving notification expiry and redraws.
const TICK_MS: u64 = 250;

/// What: Spawn the tick worker.
///
/// Inputs:
/// - `tick_tx`: Channel sender for tick events
///
/// Details:
/// - Sends a tick every 250ms until the receiver is dropped.
pub fn spawn_tick_worker(tick_tx: &mpsc::UnboundedSender<()>) {
    let tick_tx_bg = tick_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(TICK_MS));
        loop {
            interval.tick().await;
            if tick_tx_bg.send(()).is_err() {
                break;
            }
        }
    });
}

/// What: Spawn the blocking thread that reads terminal events.
///
/// Inputs:
/// - `headless`: Skip the thread entirely when true
/// - `event_tx`: Channel sender for terminal events
/// - `cancelled`: Flag checked between polls so the thread exits promptly
///
/// Details:
/// - Polls with a 50ms timeout so cancellation is observed even without input.
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        while !cancelled.load(Ordering::Relaxed) {
            match crossterm::event::poll(Duration::from_millis(50)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(e) => tracing::debug!(error = %e, "terminal event read failed"),
                },
                Ok(false) | Err(_) => {}
            }
        }
    });
}
