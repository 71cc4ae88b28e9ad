//! Command orchestration from pointer hits to the backend command queue.

use client_core::CommandSink;
use crossbeam_channel::{Sender, TrySendError};
use shared::domain::ButtonCommand;

use crate::backend_bridge::commands::BackendCommand;

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) {
    let cmd_name = match &cmd {
        BackendCommand::Button(button) => button.kind.as_str(),
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued ui->backend command"),
        Err(TrySendError::Full(_)) => {
            *status = "Command queue is full; press again".to_string();
        }
        Err(TrySendError::Disconnected(_)) => {
            *status =
                "Backend worker disconnected (possible startup/runtime failure); restart the viewer"
                    .to_string();
        }
    }
}

/// Routes pointer-generated commands onto the backend queue for one input pass.
pub struct BackendQueue<'a> {
    cmd_tx: &'a Sender<BackendCommand>,
    status: &'a mut String,
}

impl<'a> BackendQueue<'a> {
    pub fn new(cmd_tx: &'a Sender<BackendCommand>, status: &'a mut String) -> Self {
        Self { cmd_tx, status }
    }
}

impl CommandSink for BackendQueue<'_> {
    fn submit(&mut self, command: ButtonCommand) {
        dispatch_backend_command(self.cmd_tx, BackendCommand::Button(command), self.status);
    }
}
