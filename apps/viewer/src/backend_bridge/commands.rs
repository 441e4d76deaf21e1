//! Backend commands queued from UI to backend worker.

use url::Url;

pub enum BackendCommand {
    LoadDataset {
        source: String,
        base_url: Option<Url>,
    },
}
