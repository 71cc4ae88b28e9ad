//! Per-frame copy of the held snapshot into widget visual state.

use shared::{domain::FloorIndex, protocol::ElevatorSnapshot};
use tracing::{info, warn};

use crate::{layout::FloorMapper, widgets::WidgetRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileOutcome {
    Applied,
    Absent,
}

/// Vertical span highlighted around a floor line, `margin` floors in each direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloorBand {
    pub floor: FloorIndex,
    pub top: f32,
    pub bottom: f32,
    pub current: bool,
}

#[derive(Debug, Default)]
pub struct RenderReconciler {
    absent_reported: bool,
}

impl RenderReconciler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Leaves widgets untouched when no snapshot has been received yet.
    pub fn reconcile(
        &mut self,
        registry: &mut WidgetRegistry,
        snapshot: Option<&ElevatorSnapshot>,
    ) -> ReconcileOutcome {
        let Some(snapshot) = snapshot else {
            if !self.absent_reported {
                warn!("no elevator snapshot available yet; drawing static chrome only");
                self.absent_reported = true;
            }
            return ReconcileOutcome::Absent;
        };
        if self.absent_reported {
            info!("elevator snapshot available");
            self.absent_reported = false;
        }

        for widget in &mut registry.cabin_buttons {
            widget.visual_state = snapshot.cabin_button(widget.floor);
        }
        for widget in &mut registry.cabin_lamps {
            widget.visual_state = snapshot.cabin_lamp(widget.floor);
        }
        for widget in &mut registry.up_buttons {
            widget.visual_state = snapshot.up_button(widget.floor);
        }
        for widget in &mut registry.up_lamps {
            widget.visual_state = snapshot.up_lamp(widget.floor);
        }
        for widget in &mut registry.down_buttons {
            widget.visual_state = snapshot.down_button(widget.floor);
        }
        for widget in &mut registry.down_lamps {
            widget.visual_state = snapshot.down_lamp(widget.floor);
        }
        let indicator = snapshot.indicator_floor();
        for widget in &mut registry.floor_indicators {
            widget.visual_state = indicator == Some(widget.floor);
        }

        registry.cabin.geometry.y = registry.mapper.position(snapshot.position as f32);
        registry.cabin.door_open = snapshot.door_lamp;

        ReconcileOutcome::Applied
    }
}

pub fn floor_bands(mapper: &FloorMapper, snapshot: &ElevatorSnapshot) -> Vec<FloorBand> {
    let margin = snapshot.margin as f32;
    let current = snapshot.current_floor();
    (0..mapper.floor_count())
        .map(|floor| {
            let upper = mapper.position(floor as f32 + margin);
            let lower = mapper.position(floor as f32 - margin);
            FloorBand {
                floor,
                top: upper.min(lower),
                bottom: upper.max(lower),
                current: current == Some(floor),
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/reconcile_tests.rs"]
mod tests;
