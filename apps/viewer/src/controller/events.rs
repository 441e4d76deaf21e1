//! Backend-to-UI events and load error modeling for the viewer controller.

use shared::domain::{BenchmarkRecord, SortColumn};
use table_core::LoadError;

pub enum UiEvent {
    Info(String),
    DatasetLoaded(Vec<BenchmarkRecord>),
    DatasetFailed(UiError),
}

/// User input captured by the table view during one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    HeaderClicked(SortColumn),
    SearchChanged(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    HttpStatus,
    MalformedData,
    FileAccess,
    Configuration,
    Startup,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    message: String,
}

impl UiError {
    pub fn from_load_error(err: &LoadError) -> Self {
        let category = match err {
            LoadError::Transport { .. } => UiErrorCategory::Transport,
            LoadError::Status { .. } => UiErrorCategory::HttpStatus,
            LoadError::Parse { .. } => UiErrorCategory::MalformedData,
            LoadError::Io { .. } => UiErrorCategory::FileAccess,
            LoadError::InvalidSource { .. } => UiErrorCategory::Configuration,
        };
        Self {
            category,
            message: err.to_string(),
        }
    }

    pub fn startup(message: impl Into<String>) -> Self {
        Self {
            category: UiErrorCategory::Startup,
            message: message.into(),
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub fn category_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Transport => "Network",
        UiErrorCategory::HttpStatus => "HTTP",
        UiErrorCategory::MalformedData => "Malformed data",
        UiErrorCategory::FileAccess => "File",
        UiErrorCategory::Configuration => "Configuration",
        UiErrorCategory::Startup => "Startup",
    }
}
