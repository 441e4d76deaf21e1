use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use shared::domain::SortColumn;
use table_core::{
    load_dataset, render, BenchmarkTable, DataSource, LoadState, DEFAULT_DATA_FILE,
};
use url::Url;

#[derive(Parser, Debug)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse vLLM benchmark logs into data.json.
    ParseLogs {
        #[arg(long, default_value = "results/logs")]
        log_dir: PathBuf,
        #[arg(long, default_value = "docs/data.json")]
        output: PathBuf,
    },
    /// Load data.json and print the table.
    Render {
        #[arg(long, default_value = DEFAULT_DATA_FILE)]
        source: String,
        /// Page URL that relative sources are resolved against.
        #[arg(long)]
        base_url: Option<Url>,
        /// Header clicks, applied in order.
        #[arg(long = "sort")]
        sorts: Vec<SortColumn>,
        #[arg(long, default_value = "")]
        filter: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Html,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    match cli.command {
        Command::ParseLogs { log_dir, output } => {
            let logs = bench_logs::scan_log_dir(&log_dir)?;
            bench_logs::write_dataset(&output, &logs)?;
            println!(
                "parsed {} logs; data saved to {}",
                logs.len(),
                output.display()
            );
        }
        Command::Render {
            source,
            base_url,
            sorts,
            filter,
            format,
        } => {
            let source = DataSource::resolve(&source, base_url.as_ref())
                .context("failed to resolve data source")?;
            let table = load_table(source, &sorts, filter).await;
            print!("{}", render_output(&table, format));
            ensure_loaded(&table)?;
        }
    }

    Ok(())
}

/// Loads `source`, replays `sorts` as header clicks, then applies `filter`.
async fn load_table(source: DataSource, sorts: &[SortColumn], filter: String) -> BenchmarkTable {
    let source = source.into_record_source(reqwest::Client::new());
    let mut table = BenchmarkTable::new();
    table.apply_load_result(load_dataset(source.as_ref()).await);
    for column in sorts {
        table.sort_by(*column);
    }
    table.set_filter(filter);
    table
}

fn render_output(table: &BenchmarkTable, format: OutputFormat) -> String {
    let rendered = table.render();
    match format {
        OutputFormat::Text => render::to_text(&rendered),
        OutputFormat::Html => render::to_html_rows(&rendered.body),
    }
}

/// Error rows are printed first; this turns a failed load into a non-zero exit.
fn ensure_loaded(table: &BenchmarkTable) -> Result<()> {
    if let LoadState::Failed(reason) = table.load_state() {
        bail!("benchmark data could not be loaded: {reason}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use shared::domain::SortDirection;
    use table_core::render::LOAD_ERROR_MESSAGE;

    use super::*;

    const DATA_JSON: &str = r#"[
      {"model": "a", "scenario": "Standard (512/128)", "throughput_tokens_per_sec": 10.005, "requests_per_sec": 1},
      {"model": "b", "scenario": "Long Context (16384/128)", "throughput_tokens_per_sec": 2, "requests_per_sec": 5},
      {"model": "c", "scenario": "Standard (512/128)", "throughput_tokens_per_sec": 30, "requests_per_sec": 3}
    ]"#;

    fn data_file(dir: &tempfile::TempDir) -> DataSource {
        let path = dir.path().join("data.json");
        fs::write(&path, DATA_JSON).expect("write data");
        DataSource::File(path)
    }

    #[tokio::test]
    async fn repeated_sort_flag_flips_direction() {
        let dir = tempfile::tempdir().expect("tempdir");
        let sorts = [
            SortColumn::ThroughputTokensPerSec,
            SortColumn::ThroughputTokensPerSec,
        ];
        let table = load_table(data_file(&dir), &sorts, String::new()).await;

        assert_eq!(table.sort_state().direction, SortDirection::Desc);
        let models: Vec<&str> = table.dataset().iter().map(|r| r.model.as_str()).collect();
        assert_eq!(models, vec!["c", "a", "b"]);
        assert!(ensure_loaded(&table).is_ok());
    }

    #[tokio::test]
    async fn filter_applies_after_sorting() {
        let dir = tempfile::tempdir().expect("tempdir");
        let table = load_table(
            data_file(&dir),
            &[SortColumn::RequestsPerSec],
            "standard".to_string(),
        )
        .await;

        let html = render_output(&table, OutputFormat::Html);
        assert_eq!(html.lines().count(), 2);
        let a = html.find(">a<").expect("row a");
        let c = html.find(">c<").expect("row c");
        assert!(a < c);
        assert!(html.contains("10.01"));
    }

    #[tokio::test]
    async fn failed_load_prints_error_row_and_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        let source = DataSource::File(dir.path().join("absent.json"));
        let table = load_table(source, &[SortColumn::Model], String::new()).await;

        let text = render_output(&table, OutputFormat::Text);
        assert!(text.lines().any(|line| line == LOAD_ERROR_MESSAGE));
        assert!(ensure_loaded(&table).is_err());
    }
}
