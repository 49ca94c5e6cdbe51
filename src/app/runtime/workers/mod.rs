/// Tick worker and terminal event thread.
pub mod auxiliary;
/// Catalog fetch worker.
pub mod catalog;
