//! UI layer for the viewer: app shell, draw step, and colours.

pub mod app;
pub mod paint;
pub mod theme;

pub use app::ElevatorViewApp;
