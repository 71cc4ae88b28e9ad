//! Backend commands queued from UI to backend worker.

use shared::domain::ButtonCommand;

pub enum BackendCommand {
    Button(ButtonCommand),
}
