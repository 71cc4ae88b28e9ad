//! Fire-and-forget delivery of button commands.

use std::{
    collections::HashSet,
    sync::{Arc, Mutex, PoisonError},
};

use shared::domain::ButtonCommand;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::authority::ElevatorAuthority;

type InFlight = Arc<Mutex<HashSet<ButtonCommand>>>;

/// Each command is posted on its own task. Failures are logged and never retried; the next
/// poll is what shows whether the authority registered the call.
#[derive(Clone)]
pub struct CommandQueue {
    authority: Arc<dyn ElevatorAuthority>,
    in_flight: Option<InFlight>,
}

impl CommandQueue {
    pub fn new(authority: Arc<dyn ElevatorAuthority>) -> Self {
        Self {
            authority,
            in_flight: None,
        }
    }

    /// Drop commands identical to one that is still being delivered.
    pub fn with_dedupe(mut self, enabled: bool) -> Self {
        self.in_flight = enabled.then(InFlight::default);
        self
    }

    /// Must be called from within a tokio runtime. Returns `None` if the command was
    /// dropped as a duplicate.
    pub fn dispatch(&self, command: ButtonCommand) -> Option<JoinHandle<()>> {
        if let Some(in_flight) = &self.in_flight {
            let fresh = in_flight
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .insert(command);
            if !fresh {
                debug!(
                    kind = command.kind.as_str(),
                    floor = command.floor,
                    value = command.value,
                    "dropping duplicate in-flight command"
                );
                return None;
            }
        }

        let authority = Arc::clone(&self.authority);
        let in_flight = self.in_flight.clone();
        Some(tokio::spawn(async move {
            match authority.send_button(command).await {
                Ok(()) => debug!(
                    kind = command.kind.as_str(),
                    floor = command.floor,
                    value = command.value,
                    "button command delivered"
                ),
                Err(err) => warn!(
                    kind = command.kind.as_str(),
                    floor = command.floor,
                    value = command.value,
                    error = %err,
                    "button command delivery failed"
                ),
            }
            if let Some(in_flight) = in_flight {
                in_flight
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .remove(&command);
            }
        }))
    }
}

#[cfg(test)]
#[path = "tests/commands_tests.rs"]
mod tests;
