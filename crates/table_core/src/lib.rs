pub mod filter;
pub mod format;
pub mod loader;
pub mod render;
pub mod sort;
pub mod view_model;

pub use filter::FilterState;
pub use loader::{load_dataset, DataSource, LoadError, RecordSource, DEFAULT_DATA_FILE};
pub use render::{RenderedTable, TableBody};
pub use view_model::{BenchmarkTable, LoadState};

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests/loader_tests.rs"]
mod loader_tests;
