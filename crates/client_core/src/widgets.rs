//! Per-floor widget sets, built once from the floor count and never resized.

use shared::domain::{
    down_slot_to_logical_floor, logical_floor_to_down_slot, ButtonKind, FloorIndex,
};

use crate::layout::{FloorMapper, LayoutConfig, LayoutError};

/// Centre-anchored bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Geometry {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    CabinButton,
    CabinLamp,
    UpButton,
    UpLamp,
    DownButton,
    DownLamp,
    FloorIndicator,
}

/// What the draw step renders for a widget kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetShape {
    Square,
    UpTriangle,
    DownTriangle,
    Lamp,
    Label,
}

impl WidgetKind {
    /// The command kind a pointer hit emits, or `None` for display-only widgets.
    pub fn button_kind(self) -> Option<ButtonKind> {
        match self {
            WidgetKind::CabinButton => Some(ButtonKind::Cabin),
            WidgetKind::UpButton => Some(ButtonKind::Up),
            WidgetKind::DownButton => Some(ButtonKind::Down),
            WidgetKind::CabinLamp
            | WidgetKind::UpLamp
            | WidgetKind::DownLamp
            | WidgetKind::FloorIndicator => None,
        }
    }

    pub fn shape(self) -> WidgetShape {
        match self {
            WidgetKind::CabinButton => WidgetShape::Square,
            WidgetKind::UpButton => WidgetShape::UpTriangle,
            WidgetKind::DownButton => WidgetShape::DownTriangle,
            WidgetKind::CabinLamp | WidgetKind::UpLamp | WidgetKind::DownLamp => WidgetShape::Lamp,
            WidgetKind::FloorIndicator => WidgetShape::Label,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Widget {
    /// Logical floor this widget belongs to (down widgets start at floor 1).
    pub floor: FloorIndex,
    pub geometry: Geometry,
    pub kind: WidgetKind,
    /// Registered for buttons, lit for lamps, active for floor indicators.
    pub visual_state: bool,
}

/// The moving cabin. Only `geometry.y` and `door_open` change after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Cabin {
    pub geometry: Geometry,
    pub door_open: bool,
}

#[derive(Debug, Clone)]
pub struct WidgetRegistry {
    pub(crate) mapper: FloorMapper,
    pub(crate) cabin_buttons: Vec<Widget>,
    pub(crate) cabin_lamps: Vec<Widget>,
    pub(crate) up_buttons: Vec<Widget>,
    pub(crate) up_lamps: Vec<Widget>,
    pub(crate) down_buttons: Vec<Widget>,
    pub(crate) down_lamps: Vec<Widget>,
    pub(crate) floor_indicators: Vec<Widget>,
    pub(crate) cabin: Cabin,
}

impl WidgetRegistry {
    pub fn build(layout: &LayoutConfig) -> Result<Self, LayoutError> {
        let mapper = layout.mapper()?;
        let floor_count = mapper.floor_count();
        let size = layout.control_size;

        let served = || 0..floor_count;
        let below_top = || 0..floor_count - 1;
        let above_bottom = || (0..floor_count - 1).map(down_slot_to_logical_floor);

        let cabin_buttons = column(
            &mapper,
            WidgetKind::CabinButton,
            layout.cabin_button_x,
            size,
            served(),
        );
        let cabin_lamps = column(
            &mapper,
            WidgetKind::CabinLamp,
            layout.cabin_lamp_x,
            size,
            served(),
        );
        let up_buttons = column(
            &mapper,
            WidgetKind::UpButton,
            layout.up_button_x,
            size,
            below_top(),
        );
        let up_lamps = column(&mapper, WidgetKind::UpLamp, layout.up_lamp_x, size, below_top());
        let down_buttons = column(
            &mapper,
            WidgetKind::DownButton,
            layout.down_button_x,
            size,
            above_bottom(),
        );
        let down_lamps = column(
            &mapper,
            WidgetKind::DownLamp,
            layout.down_lamp_x,
            size,
            above_bottom(),
        );

        let floor_indicators = (0..floor_count)
            .map(|floor| Widget {
                floor,
                geometry: Geometry::new(
                    layout.indicator_x,
                    mapper.floor_position(floor) + layout.indicator_offset_y,
                    layout.indicator_text_size,
                    layout.indicator_text_size,
                ),
                kind: WidgetKind::FloorIndicator,
                visual_state: false,
            })
            .collect();

        let cabin = Cabin {
            geometry: Geometry::new(
                layout.shaft_x,
                mapper.floor_position(0),
                layout.cabin_width,
                layout.cabin_height(),
            ),
            door_open: false,
        };

        Ok(Self {
            mapper,
            cabin_buttons,
            cabin_lamps,
            up_buttons,
            up_lamps,
            down_buttons,
            down_lamps,
            floor_indicators,
            cabin,
        })
    }

    pub fn mapper(&self) -> &FloorMapper {
        &self.mapper
    }

    pub fn floor_count(&self) -> usize {
        self.mapper.floor_count()
    }

    pub fn cabin_buttons(&self) -> &[Widget] {
        &self.cabin_buttons
    }

    pub fn cabin_lamps(&self) -> &[Widget] {
        &self.cabin_lamps
    }

    pub fn up_buttons(&self) -> &[Widget] {
        &self.up_buttons
    }

    pub fn up_lamps(&self) -> &[Widget] {
        &self.up_lamps
    }

    /// Down buttons for floors `1..N-1`, bottom first. Each carries its logical floor.
    pub fn down_buttons(&self) -> &[Widget] {
        &self.down_buttons
    }

    pub fn down_lamps(&self) -> &[Widget] {
        &self.down_lamps
    }

    pub fn down_button(&self, floor: FloorIndex) -> Option<&Widget> {
        logical_floor_to_down_slot(floor).and_then(|slot| self.down_buttons.get(slot))
    }

    pub fn down_lamp(&self, floor: FloorIndex) -> Option<&Widget> {
        logical_floor_to_down_slot(floor).and_then(|slot| self.down_lamps.get(slot))
    }

    pub fn floor_indicators(&self) -> &[Widget] {
        &self.floor_indicators
    }

    pub fn cabin(&self) -> &Cabin {
        &self.cabin
    }

    /// Every per-floor widget, in draw order.
    pub fn widgets(&self) -> impl Iterator<Item = &Widget> {
        self.cabin_buttons
            .iter()
            .chain(&self.up_buttons)
            .chain(&self.down_buttons)
            .chain(&self.cabin_lamps)
            .chain(&self.down_lamps)
            .chain(&self.up_lamps)
            .chain(&self.floor_indicators)
    }

    /// Widgets that emit commands when hit.
    pub fn interactive(&self) -> impl Iterator<Item = &Widget> {
        self.cabin_buttons
            .iter()
            .chain(&self.up_buttons)
            .chain(&self.down_buttons)
    }
}

fn column(
    mapper: &FloorMapper,
    kind: WidgetKind,
    x: f32,
    size: f32,
    floors: impl Iterator<Item = FloorIndex>,
) -> Vec<Widget> {
    floors
        .map(|floor| Widget {
            floor,
            geometry: Geometry::new(x, mapper.floor_position(floor), size, size),
            kind,
            visual_state: false,
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/widgets_tests.rs"]
mod tests;
