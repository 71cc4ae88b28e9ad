//! Runtime bridge between the UI command queue, the poll timer and the elevator authority.

use std::{sync::Arc, thread};

use client_core::{
    CommandQueue, ElevatorAuthority, HttpAuthority, SnapshotHandle, StateSynchronizer,
};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::config::StartupConfig;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

/// Starts the backend worker and returns the read side of the snapshot it maintains.
pub fn launch(
    config: &StartupConfig,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) -> SnapshotHandle {
    let authority: Arc<dyn ElevatorAuthority> = Arc::new(HttpAuthority::new(&config.backend_url));
    let (synchronizer, snapshots) =
        StateSynchronizer::new(Arc::clone(&authority), config.floor_count);
    let queue = CommandQueue::new(authority).with_dedupe(config.dedupe_commands);
    let poll_interval = config.poll_interval;
    let backend_url = config.backend_url.clone();

    thread::spawn(move || {
        let _ = ui_tx.try_send(UiEvent::Info("Backend worker starting...".to_string()));
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let poller = synchronizer.spawn(poll_interval);
            tracing::info!(
                backend = %backend_url,
                interval_ms = poll_interval.as_millis() as u64,
                "polling elevator authority"
            );
            let _ = ui_tx.try_send(UiEvent::Info(format!("Polling {backend_url}")));

            while let Ok(cmd) = cmd_rx.recv() {
                forward_command(&queue, cmd);
            }

            tracing::info!("ui command queue closed; stopping backend worker");
            poller.abort();
        });
    });

    snapshots
}

/// Hands one UI command to the delivery queue. Returns `false` when it was dropped as a
/// duplicate of a command still in flight.
fn forward_command(queue: &CommandQueue, cmd: BackendCommand) -> bool {
    match cmd {
        BackendCommand::Button(command) => match queue.dispatch(command) {
            Some(_delivery) => true,
            None => {
                tracing::debug!(
                    kind = command.kind.as_str(),
                    floor = command.floor,
                    value = command.value,
                    "ui command dropped as in-flight duplicate"
                );
                false
            }
        },
    }
}
