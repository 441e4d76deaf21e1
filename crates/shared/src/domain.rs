use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::UnknownColumn;

/// One benchmark result row as stored in `data.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    pub model: String,
    pub scenario: String,
    pub throughput_tokens_per_sec: f64,
    pub requests_per_sec: f64,
}

impl BenchmarkRecord {
    pub fn new(
        model: impl Into<String>,
        scenario: impl Into<String>,
        throughput_tokens_per_sec: f64,
        requests_per_sec: f64,
    ) -> Self {
        Self {
            model: model.into(),
            scenario: scenario.into(),
            throughput_tokens_per_sec,
            requests_per_sec,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    Model,
    Scenario,
    ThroughputTokensPerSec,
    RequestsPerSec,
}

impl SortColumn {
    /// Header order, left to right.
    pub const ALL: [SortColumn; 4] = [
        SortColumn::Model,
        SortColumn::Scenario,
        SortColumn::ThroughputTokensPerSec,
        SortColumn::RequestsPerSec,
    ];

    /// Record field name; also the value of the header's `data-sort` attribute.
    pub fn key(self) -> &'static str {
        match self {
            SortColumn::Model => "model",
            SortColumn::Scenario => "scenario",
            SortColumn::ThroughputTokensPerSec => "throughput_tokens_per_sec",
            SortColumn::RequestsPerSec => "requests_per_sec",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortColumn::Model => "Model",
            SortColumn::Scenario => "Scenario",
            SortColumn::ThroughputTokensPerSec => "Throughput (tokens/s)",
            SortColumn::RequestsPerSec => "Requests/s",
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SortColumn {
    type Err = UnknownColumn;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SortColumn::ALL
            .into_iter()
            .find(|column| column.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownColumn(wanted.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Active sort descriptor. Starts on `model`, ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            column: SortColumn::Model,
            direction: SortDirection::Asc,
        }
    }
}

impl SortState {
    pub fn new(column: SortColumn, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    /// State after a header click: same column flips, any other column starts ascending.
    pub fn toggled(self, column: SortColumn) -> Self {
        let direction = if self.column == column {
            self.direction.flipped()
        } else {
            SortDirection::Asc
        };
        Self { column, direction }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_column_flips_and_other_column_resets() {
        let state = SortState::default();
        let flipped = state.toggled(SortColumn::Model);
        assert_eq!(flipped.direction, SortDirection::Desc);

        let moved = flipped.toggled(SortColumn::RequestsPerSec);
        assert_eq!(
            moved,
            SortState::new(SortColumn::RequestsPerSec, SortDirection::Asc)
        );
    }

    #[test]
    fn parses_column_keys_case_insensitively() {
        assert_eq!(
            "Throughput_Tokens_Per_Sec".parse::<SortColumn>().expect("column"),
            SortColumn::ThroughputTokensPerSec
        );
        let err = "latency".parse::<SortColumn>().expect_err("unknown");
        assert_eq!(err.0, "latency");
    }

    #[test]
    fn record_ignores_extra_fields() {
        let record: BenchmarkRecord = serde_json::from_str(
            r#"{"model":"m","scenario":"s","throughput_tokens_per_sec":1.5,"requests_per_sec":2,"filename":"m_standard.log"}"#,
        )
        .expect("record");
        assert_eq!(record, BenchmarkRecord::new("m", "s", 1.5, 2.0));
    }
}
