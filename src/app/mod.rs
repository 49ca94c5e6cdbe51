//! storefront application module.
//!
//! Terminal setup lives in `terminal`; the event loop, channels and
//! background workers live in `runtime`.

/// Runtime event loop and background workers.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

// Re-export the public entrypoint so callers keep using `app::run(...)`.
pub use runtime::run;
pub use runtime::init::apply_settings_to_app_state;
