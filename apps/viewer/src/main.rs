mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use table_core::DEFAULT_DATA_FILE;
use url::Url;

use backend_bridge::commands::BackendCommand;
use controller::events::UiEvent;
use ui::{BenchmarkViewerApp, StartupConfig};

#[derive(Parser, Debug)]
struct Args {
    /// URL or path of the benchmark data.
    #[arg(long, default_value = DEFAULT_DATA_FILE)]
    source: String,
    /// Page URL that a relative `--source` is resolved against.
    #[arg(long)]
    base_url: Option<Url>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    backend_bridge::runtime::launch(cmd_rx, ui_tx);

    let startup = StartupConfig {
        source: args.source,
        base_url: args.base_url,
    };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Benchmark Results")
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([640.0, 360.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Benchmark Results",
        options,
        Box::new(|_cc| Ok(Box::new(BenchmarkViewerApp::new(cmd_tx, ui_rx, startup)))),
    )
}
