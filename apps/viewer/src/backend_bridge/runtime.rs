//! Runtime bridge between UI command queue and backend event intake.

use std::thread;

use crossbeam_channel::{Receiver, Sender};
use table_core::{load_dataset, DataSource};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiEvent};

pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::DatasetFailed(UiError::startup(format!(
                    "backend worker startup failure: {err}"
                ))));
                return;
            }
        };
        let client = reqwest::Client::new();

        while let Ok(cmd) = cmd_rx.recv() {
            match cmd {
                BackendCommand::LoadDataset { source, base_url } => {
                    let _ = ui_tx.try_send(UiEvent::Info(format!("Loading {source}...")));
                    let result = match DataSource::resolve(&source, base_url.as_ref()) {
                        Ok(source) => {
                            let source = source.into_record_source(client.clone());
                            runtime.block_on(load_dataset(source.as_ref()))
                        }
                        Err(err) => {
                            tracing::error!(%source, error = %err, "error loading benchmark data");
                            Err(err)
                        }
                    };
                    let event = match result {
                        Ok(records) => UiEvent::DatasetLoaded(records),
                        Err(err) => UiEvent::DatasetFailed(UiError::from_load_error(&err)),
                    };
                    if ui_tx.send(event).is_err() {
                        tracing::debug!("ui event receiver dropped; stopping backend worker");
                        break;
                    }
                }
            }
        }
    });
}
