use std::{fmt, path::PathBuf};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use shared::domain::BenchmarkRecord;
use thiserror::Error;
use tracing::{error, info};
use url::Url;

pub const DEFAULT_DATA_FILE: &str = "data.json";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to fetch {url}: {source}")]
    Transport { url: Url, source: reqwest::Error },
    #[error("{url} responded with HTTP {status}")]
    Status { url: Url, status: StatusCode },
    #[error("malformed benchmark data from {origin}: {source}")]
    Parse {
        origin: String,
        source: serde_json::Error,
    },
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid data source '{raw}': {reason}")]
    InvalidSource { raw: String, reason: String },
}

/// Where `data.json` lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Http(Url),
    File(PathBuf),
}

impl DataSource {
    /// Interprets `raw` as an absolute URL, a relative name joined onto `base_url`,
    /// or a local path when no base is given.
    pub fn resolve(raw: &str, base_url: Option<&Url>) -> Result<Self, LoadError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(invalid_source(raw, "source is empty"));
        }

        if has_drive_prefix(raw) {
            return Ok(DataSource::File(PathBuf::from(raw)));
        }

        match Url::parse(raw) {
            Ok(url) => Self::from_url(raw, url),
            Err(url::ParseError::RelativeUrlWithoutBase) => match base_url {
                Some(base) => {
                    let joined = base
                        .join(raw)
                        .map_err(|err| invalid_source(raw, err.to_string()))?;
                    Self::from_url(raw, joined)
                }
                None => Ok(DataSource::File(PathBuf::from(raw))),
            },
            Err(err) => Err(invalid_source(raw, err.to_string())),
        }
    }

    fn from_url(raw: &str, url: Url) -> Result<Self, LoadError> {
        match url.scheme() {
            "http" | "https" => Ok(DataSource::Http(url)),
            "file" => url
                .to_file_path()
                .map(DataSource::File)
                .map_err(|()| invalid_source(raw, "file URL has no local path")),
            other => Err(invalid_source(raw, format!("unsupported scheme '{other}'"))),
        }
    }

    pub fn into_record_source(self, client: Client) -> Box<dyn RecordSource> {
        match self {
            DataSource::Http(url) => Box::new(HttpRecordSource::new(client, url)),
            DataSource::File(path) => Box::new(FileRecordSource::new(path)),
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Http(url) => write!(f, "{url}"),
            DataSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

fn has_drive_prefix(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() >= 3
        && bytes[0].is_ascii_alphabetic()
        && bytes[1] == b':'
        && matches!(bytes[2], b'\\' | b'/')
}

fn invalid_source(raw: &str, reason: impl Into<String>) -> LoadError {
    LoadError::InvalidSource {
        raw: raw.to_string(),
        reason: reason.into(),
    }
}

#[async_trait]
pub trait RecordSource: Send + Sync {
    fn describe(&self) -> String;
    async fn fetch_records(&self) -> Result<Vec<BenchmarkRecord>, LoadError>;
}

pub struct HttpRecordSource {
    client: Client,
    url: Url,
}

impl HttpRecordSource {
    pub fn new(client: Client, url: Url) -> Self {
        Self { client, url }
    }
}

#[async_trait]
impl RecordSource for HttpRecordSource {
    fn describe(&self) -> String {
        self.url.to_string()
    }

    async fn fetch_records(&self) -> Result<Vec<BenchmarkRecord>, LoadError> {
        let transport = |source| LoadError::Transport {
            url: self.url.clone(),
            source,
        };
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                url: self.url.clone(),
                status,
            });
        }

        let body = response.bytes().await.map_err(transport)?;
        parse_records(&body, self.url.as_str())
    }
}

pub struct FileRecordSource {
    path: PathBuf,
}

impl FileRecordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RecordSource for FileRecordSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch_records(&self) -> Result<Vec<BenchmarkRecord>, LoadError> {
        let body = tokio::fs::read(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                path: self.path.clone(),
                source,
            })?;
        parse_records(&body, &self.path.display().to_string())
    }
}

/// Decodes a `data.json` body; anything other than an array of records is an error.
pub fn parse_records(body: &[u8], origin: &str) -> Result<Vec<BenchmarkRecord>, LoadError> {
    serde_json::from_slice(body).map_err(|source| LoadError::Parse {
        origin: origin.to_string(),
        source,
    })
}

/// Load boundary: fetches once, logs the outcome, never retries.
pub async fn load_dataset(source: &dyn RecordSource) -> Result<Vec<BenchmarkRecord>, LoadError> {
    let origin = source.describe();
    match source.fetch_records().await {
        Ok(records) => {
            info!(source = %origin, records = records.len(), "loaded benchmark data");
            Ok(records)
        }
        Err(err) => {
            error!(source = %origin, error = %err, "error loading benchmark data");
            Err(err)
        }
    }
}
