use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use table_core::{BenchmarkTable, LoadState};
use url::Url;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiAction, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;
use crate::controller::reducer::{apply_action, apply_event};
use crate::ui::table_view::show_table;

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub source: String,
    pub base_url: Option<Url>,
}

pub struct BenchmarkViewerApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    table: BenchmarkTable,
    search: String,
    status: String,
}

impl BenchmarkViewerApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        startup: StartupConfig,
    ) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            table: BenchmarkTable::new(),
            search: String::new(),
            status: "Starting".to_string(),
        };
        dispatch_backend_command(
            &app.cmd_tx,
            BackendCommand::LoadDataset {
                source: startup.source,
                base_url: startup.base_url,
            },
            &mut app.status,
        );
        app
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            apply_event(&mut self.table, &mut self.status, event);
        }
    }

    fn show_search_bar(&mut self, ctx: &egui::Context) -> Option<UiAction> {
        egui::TopBottomPanel::top("search_bar")
            .show(ctx, |ui| {
                ui.add_space(6.0);
                let response = ui
                    .horizontal(|ui| {
                        ui.label(egui::RichText::new("Search").strong());
                        ui.add(
                            egui::TextEdit::singleline(&mut self.search)
                                .hint_text("Filter by model or scenario")
                                .desired_width(320.0),
                        )
                    })
                    .inner;
                ui.add_space(6.0);
                response
                    .changed()
                    .then(|| UiAction::SearchChanged(self.search.clone()))
            })
            .inner
    }

    fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            let visible = self.table.visible_records().len();
            let total = self.table.dataset().len();
            ui.horizontal(|ui| {
                ui.small(egui::RichText::new(&self.status).weak());
                if *self.table.load_state() == LoadState::Loaded {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.small(format!("{visible} of {total} rows"));
                    });
                }
            });
        });
    }
}

impl eframe::App for BenchmarkViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        let mut actions = Vec::new();
        actions.extend(self.show_search_bar(ctx));
        self.show_status_bar(ctx);

        let rendered = self.table.render();
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(column) = show_table(ui, &rendered) {
                actions.push(UiAction::HeaderClicked(column));
            }
        });

        if !actions.is_empty() {
            for action in actions {
                apply_action(&mut self.table, action);
            }
            ctx.request_repaint();
        }

        if *self.table.load_state() == LoadState::Pending {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
