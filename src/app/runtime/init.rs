use tokio::sync::mpsc;

use crate::args::Args;
use crate::logic::{send_catalog_request, submit_search};
use crate::state::{AppState, CatalogRequest, FetchPurpose};
use crate::theme::{Settings, load_settings, settings_path};

/// What: Apply resolved settings to the application state.
///
/// Inputs:
/// - `app`: Application state
/// - `settings`: Settings after CLI overrides
///
/// Output:
/// - Stores the settings and sets the initial sort mode.
pub fn apply_settings_to_app_state(app: &mut AppState, settings: Settings) {
    app.listing.sort_mode = settings.initial_sort_mode();
    app.settings = settings;
}

/// What: Resolve settings from the config file and command line.
///
/// Inputs:
/// - `args`: Parsed command-line arguments
///
/// Output:
/// - Settings with CLI values layered over the file.
pub fn resolve_settings(args: &Args) -> Settings {
    let path = args.config.clone().unwrap_or_else(settings_path);
    args.apply_to(load_settings(&path))
}

/// What: Issue the first catalog fetch.
///
/// Inputs:
/// - `app`: Application state
/// - `initial_query`: `--query` value, if any
/// - `catalog_tx`: Channel to the catalog worker
///
/// Details:
/// - With an initial query the input is pre-filled and submitted as a search;
///   otherwise a plain `Initial` fetch is sent.
pub fn trigger_initial_fetch(
    app: &mut AppState,
    initial_query: Option<&str>,
    catalog_tx: &mpsc::UnboundedSender<CatalogRequest>,
) {
    match initial_query.filter(|q| !q.is_empty()) {
        Some(q) => {
            app.input = q.to_string();
            app.caret = app.input.chars().count();
            submit_search(app, catalog_tx);
        }
        None => {
            send_catalog_request(&mut app.listing, FetchPurpose::Initial, catalog_tx);
        }
    }
}
