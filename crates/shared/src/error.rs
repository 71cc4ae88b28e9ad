use thiserror::Error;

/// Ways a polled snapshot can disagree with the configured floor count.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SnapshotError {
    #[error("{field} has length {actual}, expected {expected}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("{field} = {value} is outside 0..{floor_count}")]
    FloorOutOfRange {
        field: &'static str,
        value: i64,
        floor_count: usize,
    },
    #[error("{field} is not a finite number")]
    NonFinite { field: &'static str },
}
