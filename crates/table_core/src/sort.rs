use std::cmp::Ordering;

use shared::domain::{BenchmarkRecord, SortColumn, SortDirection, SortState};

/// Ascending comparison on one column. Text columns ignore case.
pub fn compare_by_column(a: &BenchmarkRecord, b: &BenchmarkRecord, column: SortColumn) -> Ordering {
    match column {
        SortColumn::Model => a.model.to_lowercase().cmp(&b.model.to_lowercase()),
        SortColumn::Scenario => a.scenario.to_lowercase().cmp(&b.scenario.to_lowercase()),
        SortColumn::ThroughputTokensPerSec => a
            .throughput_tokens_per_sec
            .total_cmp(&b.throughput_tokens_per_sec),
        SortColumn::RequestsPerSec => a.requests_per_sec.total_cmp(&b.requests_per_sec),
    }
}

/// Stable in-place sort. Equal keys keep their relative order in both directions.
pub fn sort_records(records: &mut [BenchmarkRecord], state: SortState) {
    records.sort_by(|a, b| {
        let ordering = compare_by_column(a, b, state.column);
        match state.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}
