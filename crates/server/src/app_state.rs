use std::path::PathBuf;

#[derive(Debug, Clone)]
pub(crate) struct AppState {
    pub(crate) data_file: PathBuf,
    pub(crate) static_dir: Option<PathBuf>,
}
