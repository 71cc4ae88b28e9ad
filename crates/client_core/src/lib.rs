//! Toolkit-independent core of the elevator viewer: floor geometry, widget registry,
//! pointer dispatch, per-frame reconciliation and the link to the elevator authority.

pub mod authority;
pub mod commands;
pub mod error;
pub mod input;
pub mod layout;
pub mod reconcile;
pub mod sync;
pub mod widgets;

pub use authority::{ElevatorAuthority, HttpAuthority, DEFAULT_BACKEND_URL};
pub use commands::CommandQueue;
pub use error::ClientError;
pub use input::{dispatch_pointer, on_press, on_release, CommandSink, PointerPhase};
pub use layout::{FloorMapper, LayoutConfig, LayoutError};
pub use reconcile::{floor_bands, FloorBand, ReconcileOutcome, RenderReconciler};
pub use sync::{HeldSnapshot, SnapshotHandle, StateSynchronizer, SyncCounts};
pub use widgets::{Cabin, Geometry, Widget, WidgetKind, WidgetRegistry, WidgetShape};
