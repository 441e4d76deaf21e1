//! UI layer for the viewer: app shell and the benchmark table widget.

pub mod app;
pub mod table_view;

pub use app::{BenchmarkViewerApp, StartupConfig};
