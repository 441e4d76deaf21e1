use shared::domain::BenchmarkRecord;

/// Free-text search over `model` and `scenario`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    needle: String,
}

impl FilterState {
    pub fn new(query: impl Into<String>) -> Self {
        let mut state = Self::default();
        state.set_query(query);
        state
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.needle = query.into().to_lowercase();
    }

    pub fn matches(&self, record: &BenchmarkRecord) -> bool {
        record.model.to_lowercase().contains(&self.needle)
            || record.scenario.to_lowercase().contains(&self.needle)
    }
}

/// Derived view: the matching records in dataset order. Never touches `records`.
pub fn filter_records<'a>(
    records: &'a [BenchmarkRecord],
    filter: &FilterState,
) -> Vec<&'a BenchmarkRecord> {
    records.iter().filter(|record| filter.matches(record)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(model: &str, scenario: &str) -> BenchmarkRecord {
        BenchmarkRecord::new(model, scenario, 1.0, 1.0)
    }

    #[test]
    fn empty_query_keeps_everything() {
        let records = vec![record("a", "x"), record("b", "y")];
        let view = filter_records(&records, &FilterState::default());
        assert_eq!(view.len(), 2);
    }

    #[test]
    fn matches_model_or_scenario_ignoring_case() {
        let records = vec![
            record("meta-llama/Llama-3.1-8B", "Standard (512/128)"),
            record("openai/gpt-oss-20b", "Long Context (16384/128)"),
            record("RedHatAI/Qwen3-14B", "Throughput (128/128)"),
        ];

        let by_model = filter_records(&records, &FilterState::new("LLAMA"));
        assert_eq!(by_model.len(), 1);
        assert_eq!(by_model[0].model, "meta-llama/Llama-3.1-8B");

        let by_scenario = filter_records(&records, &FilterState::new("long context"));
        assert_eq!(by_scenario.len(), 1);
        assert_eq!(by_scenario[0].model, "openai/gpt-oss-20b");
    }

    #[test]
    fn numeric_fields_are_not_searched() {
        let records = vec![BenchmarkRecord::new("a", "x", 123.0, 4.0)];
        assert!(filter_records(&records, &FilterState::new("123")).is_empty());
    }
}
