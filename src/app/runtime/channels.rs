use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::state::{CatalogRequest, CatalogResult};

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - Contains the senders and receivers used between the main event loop
///   and the background workers.
pub struct Channels {
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    pub event_thread_cancelled: Arc<AtomicBool>,
    pub catalog_req_tx: mpsc::UnboundedSender<CatalogRequest>,
    pub catalog_req_rx: Option<mpsc::UnboundedReceiver<CatalogRequest>>,
    pub catalog_res_tx: mpsc::UnboundedSender<CatalogResult>,
    pub catalog_res_rx: mpsc::UnboundedReceiver<CatalogResult>,
    pub tick_tx: mpsc::UnboundedSender<()>,
    pub tick_rx: mpsc::UnboundedReceiver<()>,
}

impl Channels {
    /// What: Create every channel pair used by the runtime.
    ///
    /// Inputs: None
    ///
    /// Output:
    /// - Fresh `Channels`; `catalog_req_rx` is handed to the catalog worker with `take()`.
    pub fn new() -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (catalog_req_tx, catalog_req_rx) = mpsc::unbounded_channel();
        let (catalog_res_tx, catalog_res_rx) = mpsc::unbounded_channel();
        let (tick_tx, tick_rx) = mpsc::unbounded_channel();
        Self {
            event_tx,
            event_rx,
            event_thread_cancelled: Arc::new(AtomicBool::new(false)),
            catalog_req_tx,
            catalog_req_rx: Some(catalog_req_rx),
            catalog_res_tx,
            catalog_res_rx,
            tick_tx,
            tick_rx,
        }
    }
}
