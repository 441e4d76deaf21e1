//! State transitions: the only place the viewer mutates its `BenchmarkTable`.

use table_core::BenchmarkTable;

use crate::controller::events::{category_label, UiAction, UiEvent};

pub fn apply_action(table: &mut BenchmarkTable, action: UiAction) {
    match action {
        UiAction::HeaderClicked(column) => {
            table.sort_by(column);
        }
        UiAction::SearchChanged(query) => table.set_filter(query),
    }
}

pub fn apply_event(table: &mut BenchmarkTable, status: &mut String, event: UiEvent) {
    match event {
        UiEvent::Info(message) => *status = message,
        UiEvent::DatasetLoaded(records) => {
            *status = format!("Loaded {} benchmark results", records.len());
            table.finish_loading(records);
        }
        UiEvent::DatasetFailed(err) => {
            *status = format!("{} error: {}", category_label(err.category()), err.message());
            table.fail_loading(err.message());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::events::UiError;
    use shared::domain::{BenchmarkRecord, SortColumn, SortDirection};
    use table_core::{render::PlaceholderKind, LoadError, LoadState, TableBody};

    fn records() -> Vec<BenchmarkRecord> {
        vec![
            BenchmarkRecord::new("A", "x", 10.005, 1.0),
            BenchmarkRecord::new("b", "y", 2.0, 5.0),
        ]
    }

    #[test]
    fn loaded_event_populates_table_and_status() {
        let mut table = BenchmarkTable::new();
        let mut status = String::new();
        apply_event(&mut table, &mut status, UiEvent::DatasetLoaded(records()));
        assert_eq!(table.load_state(), &LoadState::Loaded);
        assert_eq!(table.dataset().len(), 2);
        assert_eq!(status, "Loaded 2 benchmark results");
    }

    #[test]
    fn failed_event_shows_error_row() {
        let mut table = BenchmarkTable::new();
        let mut status = String::new();
        let err = LoadError::InvalidSource {
            raw: String::new(),
            reason: "source is empty".to_string(),
        };
        apply_event(
            &mut table,
            &mut status,
            UiEvent::DatasetFailed(UiError::from_load_error(&err)),
        );
        assert!(status.starts_with("Configuration error"));
        match table.render().body {
            TableBody::Placeholder(p) => assert_eq!(p.kind, PlaceholderKind::LoadError),
            TableBody::Rows(_) => panic!("expected error row"),
        }
    }

    #[test]
    fn header_clicks_toggle_and_search_narrows() {
        let mut table = BenchmarkTable::with_records(records());
        apply_action(&mut table, UiAction::HeaderClicked(SortColumn::Model));
        assert_eq!(table.sort_state().direction, SortDirection::Desc);
        assert_eq!(table.dataset()[0].model, "b");

        apply_action(&mut table, UiAction::SearchChanged("X".to_string()));
        let visible = table.visible_records();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].model, "A");
    }
}
