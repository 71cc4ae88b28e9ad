use serde::{Deserialize, Serialize};

/// Floor number counted from the bottom-most served floor.
pub type FloorIndex = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonKind {
    Cabin,
    Up,
    Down,
}

impl ButtonKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonKind::Cabin => "cabin",
            ButtonKind::Up => "up",
            ButtonKind::Down => "down",
        }
    }
}

/// One press or release of a button, as delivered to the authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ButtonCommand {
    #[serde(rename = "Type")]
    pub kind: ButtonKind,
    #[serde(rename = "Floor")]
    pub floor: FloorIndex,
    #[serde(rename = "Value")]
    pub value: bool,
}

impl ButtonCommand {
    pub fn new(kind: ButtonKind, floor: FloorIndex, value: bool) -> Self {
        Self { kind, floor, value }
    }
}

// Down calls exist for floors 1..N-1. Widgets keep them in a dense vec (slot 0 is floor 1),
// while the authority's arrays are indexed by floor directly and leave index 0 unused.

/// Dense down-widget slot for a logical floor. Floor 0 has no down call.
pub fn logical_floor_to_down_slot(floor: FloorIndex) -> Option<usize> {
    floor.checked_sub(1)
}

pub fn down_slot_to_logical_floor(slot: usize) -> FloorIndex {
    slot + 1
}
