//! Pointer hit-testing over the interactive widgets.

use shared::domain::ButtonCommand;
use tracing::debug;

use crate::widgets::{Geometry, WidgetRegistry};

/// Receives the commands produced by pointer input.
pub trait CommandSink {
    fn submit(&mut self, command: ButtonCommand);
}

impl CommandSink for Vec<ButtonCommand> {
    fn submit(&mut self, command: ButtonCommand) {
        self.push(command);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Press,
    Release,
}

impl PointerPhase {
    fn value(self) -> bool {
        matches!(self, PointerPhase::Press)
    }
}

/// Open square of side `width` centred on the widget. Height is not consulted.
pub fn hit_region_contains(geometry: &Geometry, x: f32, y: f32) -> bool {
    let half = geometry.width / 2.0;
    x > geometry.x - half && x < geometry.x + half && y > geometry.y - half && y < geometry.y + half
}

/// Emits one command per interactive widget whose hit region contains `(x, y)`.
///
/// Returns how many commands were submitted. Overlapping widgets each fire.
pub fn dispatch_pointer(
    registry: &WidgetRegistry,
    phase: PointerPhase,
    x: f32,
    y: f32,
    sink: &mut impl CommandSink,
) -> usize {
    let mut emitted = 0;
    for widget in registry.interactive() {
        let Some(kind) = widget.kind.button_kind() else {
            continue;
        };
        if !hit_region_contains(&widget.geometry, x, y) {
            continue;
        }
        let command = ButtonCommand::new(kind, widget.floor, phase.value());
        debug!(
            kind = kind.as_str(),
            floor = command.floor,
            value = command.value,
            "pointer hit"
        );
        sink.submit(command);
        emitted += 1;
    }
    emitted
}

pub fn on_press(registry: &WidgetRegistry, x: f32, y: f32, sink: &mut impl CommandSink) -> usize {
    dispatch_pointer(registry, PointerPhase::Press, x, y, sink)
}

pub fn on_release(
    registry: &WidgetRegistry,
    x: f32,
    y: f32,
    sink: &mut impl CommandSink,
) -> usize {
    dispatch_pointer(registry, PointerPhase::Release, x, y, sink)
}

#[cfg(test)]
#[path = "tests/input_tests.rs"]
mod tests;
