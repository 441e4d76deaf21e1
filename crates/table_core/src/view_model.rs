use shared::domain::{BenchmarkRecord, SortColumn, SortState};
use tracing::debug;

use crate::{
    filter::{filter_records, FilterState},
    loader::LoadError,
    render::{header_cells, render_rows, Placeholder, PlaceholderKind, RenderedTable, TableBody},
    sort::sort_records,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Pending,
    Loaded,
    Failed(String),
}

/// The whole table state: canonical dataset, sort descriptor, and search text.
///
/// UI handlers mutate it through [`sort_by`](Self::sort_by) and
/// [`set_filter`](Self::set_filter) and then call [`render`](Self::render), which is
/// pure. The dataset is kept sorted by the active descriptor; filtering only ever
/// produces a derived view.
#[derive(Debug, Clone)]
pub struct BenchmarkTable {
    dataset: Vec<BenchmarkRecord>,
    sort: SortState,
    filter: FilterState,
    load_state: LoadState,
}

impl Default for BenchmarkTable {
    fn default() -> Self {
        Self::new()
    }
}

impl BenchmarkTable {
    pub fn new() -> Self {
        Self {
            dataset: Vec::new(),
            sort: SortState::default(),
            filter: FilterState::default(),
            load_state: LoadState::Pending,
        }
    }

    pub fn with_records(records: Vec<BenchmarkRecord>) -> Self {
        let mut table = Self::new();
        table.finish_loading(records);
        table
    }

    pub fn apply_load_result(&mut self, result: Result<Vec<BenchmarkRecord>, LoadError>) {
        match result {
            Ok(records) => self.finish_loading(records),
            Err(err) => self.fail_loading(err.to_string()),
        }
    }

    /// Stores the loaded records ordered by the active descriptor.
    pub fn finish_loading(&mut self, records: Vec<BenchmarkRecord>) {
        self.dataset = records;
        sort_records(&mut self.dataset, self.sort);
        self.load_state = LoadState::Loaded;
    }

    /// Terminal for the session: the dataset stays empty.
    pub fn fail_loading(&mut self, message: impl Into<String>) {
        self.dataset.clear();
        self.load_state = LoadState::Failed(message.into());
    }

    /// Header click. Returns the new descriptor.
    pub fn sort_by(&mut self, column: SortColumn) -> SortState {
        self.sort = self.sort.toggled(column);
        sort_records(&mut self.dataset, self.sort);
        debug!(column = %self.sort.column, direction = ?self.sort.direction, "sorted dataset");
        self.sort
    }

    /// Search input change.
    pub fn set_filter(&mut self, query: impl Into<String>) {
        self.filter.set_query(query);
    }

    pub fn dataset(&self) -> &[BenchmarkRecord] {
        &self.dataset
    }

    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn visible_records(&self) -> Vec<&BenchmarkRecord> {
        filter_records(&self.dataset, &self.filter)
    }

    pub fn render(&self) -> RenderedTable {
        let body = match &self.load_state {
            LoadState::Pending => TableBody::Placeholder(Placeholder::new(PlaceholderKind::Loading)),
            LoadState::Failed(_) => {
                TableBody::Placeholder(Placeholder::new(PlaceholderKind::LoadError))
            }
            LoadState::Loaded => render_rows(&self.visible_records()),
        };
        RenderedTable {
            headers: header_cells(self.sort),
            body,
        }
    }
}
