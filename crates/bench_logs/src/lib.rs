//! Turns vLLM benchmark logs into the `data.json` consumed by the table.
//!
//! Logs are expected to be named `{model}_{scenario}.log`, where the scenario is
//! one of `standard`, `long_context`, or `throughput`, and to contain a summary
//! line such as `Throughput: 12.34 tokens/s, 5.67 requests/s`.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use regex::Regex;
use serde::Serialize;
use shared::domain::BenchmarkRecord;
use thiserror::Error;
use tracing::{info, warn};

static TOKENS_PER_SEC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Throughput:\s+([\d.]+)\s+tokens/s").expect("static regex")
});
static REQUESTS_PER_SEC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Throughput:.*,\s+([\d.]+)\s+requests/s").expect("static regex")
});

/// Filename marker, display name. Checked in order.
const SCENARIOS: [(&str, &str); 3] = [
    ("standard", "Standard (512/128)"),
    ("long_context", "Long Context (16384/128)"),
    ("throughput", "Throughput (128/128)"),
];
const UNKNOWN: &str = "Unknown";

#[derive(Debug, Error)]
pub enum LogParseError {
    #[error("log directory '{}' does not exist", .0.display())]
    MissingDir(PathBuf),
    #[error("failed to access '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to encode benchmark data: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A parsed log: the table record plus the log it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedLog {
    #[serde(flatten)]
    pub record: BenchmarkRecord,
    pub filename: String,
}

/// Splits a log filename into (model, scenario display name).
pub fn split_log_name(filename: &str) -> (String, String) {
    for (marker, display) in SCENARIOS {
        if filename.contains(marker) {
            let model = filename
                .split(&format!("_{marker}"))
                .next()
                .unwrap_or_default();
            return (model.to_string(), display.to_string());
        }
    }
    (UNKNOWN.to_string(), UNKNOWN.to_string())
}

/// Extracts metrics from one log's contents. `None` when no throughput line is present.
pub fn parse_log_text(filename: &str, content: &str) -> Option<ParsedLog> {
    let throughput = TOKENS_PER_SEC
        .captures(content)
        .and_then(|caps| caps[1].parse::<f64>().ok())?;
    let requests = REQUESTS_PER_SEC
        .captures(content)
        .and_then(|caps| caps[1].parse::<f64>().ok())
        .unwrap_or(0.0);

    let (model, scenario) = split_log_name(filename);
    Some(ParsedLog {
        record: BenchmarkRecord::new(model, scenario, throughput, requests),
        filename: filename.to_string(),
    })
}

pub fn parse_log_file(path: &Path) -> Result<Option<ParsedLog>, LogParseError> {
    let bytes = fs::read(path).map_err(|source| LogParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    // Progress bars leave raw bytes in the logs.
    let content = String::from_utf8_lossy(&bytes);
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let parsed = parse_log_text(&filename, &content);
    if parsed.is_none() {
        warn!(%filename, "could not parse metrics from log");
    }
    Ok(parsed)
}

/// Parses every `*.log` in `log_dir`, sorted by model then scenario.
pub fn scan_log_dir(log_dir: &Path) -> Result<Vec<ParsedLog>, LogParseError> {
    if !log_dir.is_dir() {
        return Err(LogParseError::MissingDir(log_dir.to_path_buf()));
    }
    info!(dir = %log_dir.display(), "scanning for log files");

    let io_err = |source| LogParseError::Io {
        path: log_dir.to_path_buf(),
        source,
    };
    let mut parsed = Vec::new();
    for entry in fs::read_dir(log_dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("log") {
            continue;
        }
        if let Some(log) = parse_log_file(&path)? {
            parsed.push(log);
        }
    }

    parsed.sort_by(|a, b| {
        (&a.record.model, &a.record.scenario).cmp(&(&b.record.model, &b.record.scenario))
    });
    Ok(parsed)
}

/// Writes `logs` as pretty JSON, creating the parent directory if needed.
pub fn write_dataset(output: &Path, logs: &[ParsedLog]) -> Result<(), LogParseError> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| LogParseError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let json = serde_json::to_string_pretty(logs)?;
    fs::write(output, json).map_err(|source| LogParseError::Io {
        path: output.to_path_buf(),
        source,
    })?;
    info!(records = logs.len(), output = %output.display(), "wrote benchmark data");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_model_from_scenario_marker() {
        assert_eq!(
            split_log_name("meta-llama_Meta-Llama-3.1-8B-Instruct_long_context.log"),
            (
                "meta-llama_Meta-Llama-3.1-8B-Instruct".to_string(),
                "Long Context (16384/128)".to_string()
            )
        );
        assert_eq!(
            split_log_name("qwen_standard.log").1,
            "Standard (512/128)".to_string()
        );
        assert_eq!(
            split_log_name("mystery.log"),
            ("Unknown".to_string(), "Unknown".to_string())
        );
    }

    #[test]
    fn request_rate_defaults_to_zero() {
        let log = parse_log_text("m_throughput.log", "Throughput: 812.5 tokens/s\n")
            .expect("parsed");
        assert_eq!(log.record.throughput_tokens_per_sec, 812.5);
        assert_eq!(log.record.requests_per_sec, 0.0);
        assert_eq!(log.record.scenario, "Throughput (128/128)");
    }

    #[test]
    fn missing_throughput_line_is_skipped() {
        assert!(parse_log_text("m_standard.log", "engine crashed").is_none());
    }
}
