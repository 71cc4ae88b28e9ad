use serde::{Deserialize, Serialize};

use crate::{
    domain::{FloorIndex, logical_floor_to_down_slot},
    error::SnapshotError,
};

/// Full elevator state as reported by `GET /total`.
///
/// Array layouts differ by kind: cabin arrays have one entry per floor, up arrays cover
/// floors `0..N-1` (the authority may pad a trailing top slot), and down arrays are
/// length `N` with index 0 unused so that floor `f` lives at index `f`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElevatorSnapshot {
    /// Floor whose sensor is active, or -1 while the cabin is between floors.
    pub current_floor: i64,
    pub position: f64,
    pub margin: f64,
    pub door_lamp: bool,
    pub indicator_lamp: i64,
    pub cabin_buttons: Vec<bool>,
    pub cabin_lamps: Vec<bool>,
    pub up_buttons: Vec<bool>,
    pub up_lamps: Vec<bool>,
    pub down_buttons: Vec<bool>,
    pub down_lamps: Vec<bool>,

    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub n_floors: i64,
    #[serde(default)]
    pub speed: f64,
    #[serde(default)]
    pub direction: f64,
    #[serde(default)]
    pub blocked: bool,
    #[serde(default)]
    pub stop_button: bool,
    #[serde(default)]
    pub obstruction_button: bool,
    #[serde(default)]
    pub stop_lamp: bool,
    #[serde(default)]
    pub obstruction_lamp: bool,
}

impl ElevatorSnapshot {
    /// A parked cabin on floor 0 with no calls registered.
    pub fn idle(floor_count: usize) -> Self {
        let per_floor = vec![false; floor_count];
        let below_top = vec![false; floor_count.saturating_sub(1)];
        Self {
            current_floor: 0,
            position: 0.0,
            margin: 0.05,
            door_lamp: false,
            indicator_lamp: 0,
            cabin_buttons: per_floor.clone(),
            cabin_lamps: per_floor.clone(),
            up_buttons: below_top.clone(),
            up_lamps: below_top,
            down_buttons: per_floor.clone(),
            down_lamps: per_floor,
            id: 0,
            n_floors: floor_count as i64,
            speed: 0.0,
            direction: 0.0,
            blocked: false,
            stop_button: false,
            obstruction_button: false,
            stop_lamp: false,
            obstruction_lamp: false,
        }
    }

    /// Checks array lengths and floor fields against `floor_count`.
    pub fn validate(&self, floor_count: usize) -> Result<(), SnapshotError> {
        exact_len("cabinButtons", &self.cabin_buttons, floor_count)?;
        exact_len("cabinLamps", &self.cabin_lamps, floor_count)?;
        up_len("upButtons", &self.up_buttons, floor_count)?;
        up_len("upLamps", &self.up_lamps, floor_count)?;
        exact_len("downButtons", &self.down_buttons, floor_count)?;
        exact_len("downLamps", &self.down_lamps, floor_count)?;

        if self.current_floor != -1 {
            floor_in_range("currentFloor", self.current_floor, floor_count)?;
        }
        floor_in_range("indicatorLamp", self.indicator_lamp, floor_count)?;

        if !self.position.is_finite() {
            return Err(SnapshotError::NonFinite { field: "position" });
        }
        if !self.margin.is_finite() {
            return Err(SnapshotError::NonFinite { field: "margin" });
        }
        Ok(())
    }

    pub fn current_floor(&self) -> Option<FloorIndex> {
        usize::try_from(self.current_floor).ok()
    }

    pub fn indicator_floor(&self) -> Option<FloorIndex> {
        usize::try_from(self.indicator_lamp).ok()
    }

    pub fn cabin_button(&self, floor: FloorIndex) -> bool {
        self.cabin_buttons.get(floor).copied().unwrap_or(false)
    }

    pub fn cabin_lamp(&self, floor: FloorIndex) -> bool {
        self.cabin_lamps.get(floor).copied().unwrap_or(false)
    }

    pub fn up_button(&self, floor: FloorIndex) -> bool {
        self.up_buttons.get(floor).copied().unwrap_or(false)
    }

    pub fn up_lamp(&self, floor: FloorIndex) -> bool {
        self.up_lamps.get(floor).copied().unwrap_or(false)
    }

    /// Down call state for logical floor `floor`; floor 0 has none and index 0 is never read.
    pub fn down_button(&self, floor: FloorIndex) -> bool {
        logical_floor_to_down_slot(floor).is_some()
            && self.down_buttons.get(floor).copied().unwrap_or(false)
    }

    pub fn down_lamp(&self, floor: FloorIndex) -> bool {
        logical_floor_to_down_slot(floor).is_some()
            && self.down_lamps.get(floor).copied().unwrap_or(false)
    }
}

fn exact_len(field: &'static str, values: &[bool], expected: usize) -> Result<(), SnapshotError> {
    if values.len() != expected {
        return Err(SnapshotError::LengthMismatch {
            field,
            expected,
            actual: values.len(),
        });
    }
    Ok(())
}

fn up_len(field: &'static str, values: &[bool], floor_count: usize) -> Result<(), SnapshotError> {
    let expected = floor_count.saturating_sub(1);
    if values.len() != expected && values.len() != floor_count {
        return Err(SnapshotError::LengthMismatch {
            field,
            expected,
            actual: values.len(),
        });
    }
    Ok(())
}

fn floor_in_range(
    field: &'static str,
    value: i64,
    floor_count: usize,
) -> Result<(), SnapshotError> {
    if value < 0 || value as u64 >= floor_count as u64 {
        return Err(SnapshotError::FloorOutOfRange {
            field,
            value,
            floor_count,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const AUTHORITY_BODY: &str = r#"{
        "id": 0, "nFloors": 4, "position": 1.02, "speed": 0.4, "direction": 1,
        "blocked": false, "margin": 0.05, "currentFloor": 1,
        "obstructionButton": false, "stopButton": false,
        "upButtons": [false, true, false, false],
        "downButtons": [false, false, false, true],
        "cabinButtons": [false, false, true, false],
        "stopLamp": false, "obstructionLamp": false, "doorLamp": true,
        "upLamps": [false, true, false, false],
        "downLamps": [false, false, false, true],
        "cabinLamps": [false, false, true, false],
        "indicatorLamp": 1
    }"#;

    #[test]
    fn decodes_authority_body_and_accepts_padded_up_arrays() {
        let snapshot: ElevatorSnapshot = serde_json::from_str(AUTHORITY_BODY).expect("decode");
        assert_eq!(snapshot.current_floor(), Some(1));
        assert!(snapshot.door_lamp);
        assert_eq!(snapshot.speed, 0.4);
        snapshot.validate(4).expect("valid");
    }

    #[test]
    fn down_accessor_reads_array_index_equal_to_floor() {
        let snapshot: ElevatorSnapshot = serde_json::from_str(AUTHORITY_BODY).expect("decode");
        assert!(snapshot.down_button(3));
        assert!(!snapshot.down_button(2));
        assert!(snapshot.down_lamp(3));
    }

    #[test]
    fn down_accessor_never_reads_slot_zero() {
        let mut snapshot: ElevatorSnapshot =
            serde_json::from_str(AUTHORITY_BODY).expect("decode");
        snapshot.down_buttons[0] = true;
        snapshot.down_lamps[0] = true;
        assert!(!snapshot.down_button(0));
        assert!(!snapshot.down_lamp(0));
    }

    #[test]
    fn between_floors_is_valid() {
        let mut snapshot: ElevatorSnapshot =
            serde_json::from_str(AUTHORITY_BODY).expect("decode");
        snapshot.current_floor = -1;
        snapshot.validate(4).expect("between floors");
        assert_eq!(snapshot.current_floor(), None);
    }

    #[test]
    fn rejects_short_cabin_array() {
        let mut snapshot: ElevatorSnapshot =
            serde_json::from_str(AUTHORITY_BODY).expect("decode");
        snapshot.cabin_lamps.pop();
        assert_eq!(
            snapshot.validate(4),
            Err(SnapshotError::LengthMismatch {
                field: "cabinLamps",
                expected: 4,
                actual: 3,
            })
        );
    }

    #[test]
    fn rejects_indicator_beyond_top_floor() {
        let mut snapshot: ElevatorSnapshot =
            serde_json::from_str(AUTHORITY_BODY).expect("decode");
        snapshot.indicator_lamp = 4;
        assert!(matches!(
            snapshot.validate(4),
            Err(SnapshotError::FloorOutOfRange {
                field: "indicatorLamp",
                ..
            })
        ));
    }

    #[test]
    fn rejects_snapshot_for_a_different_building() {
        let snapshot: ElevatorSnapshot = serde_json::from_str(AUTHORITY_BODY).expect("decode");
        assert!(snapshot.validate(6).is_err());
    }
}
