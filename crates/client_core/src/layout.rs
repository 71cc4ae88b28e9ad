//! Floor-to-screen mapping and the fixed column layout of the viewer.

use shared::domain::FloorIndex;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("at least two floors are required, got {floor_count}")]
    TooFewFloors { floor_count: usize },
    #[error("top bound {top} must lie above bottom bound {bottom}")]
    InvalidBounds { top: f32, bottom: f32 },
    #[error("canvas must have positive size, got {width}x{height}")]
    InvalidCanvas { width: f32, height: f32 },
}

/// Maps (possibly fractional) floor values onto the vertical screen axis.
///
/// Floor 0 sits on `bottom` and the top floor on `top`; both endpoints are returned exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloorMapper {
    floor_count: usize,
    top: f32,
    bottom: f32,
}

impl FloorMapper {
    pub fn new(floor_count: usize, top: f32, bottom: f32) -> Result<Self, LayoutError> {
        if floor_count < 2 {
            return Err(LayoutError::TooFewFloors { floor_count });
        }
        if !(top.is_finite() && bottom.is_finite()) || top >= bottom {
            return Err(LayoutError::InvalidBounds { top, bottom });
        }
        Ok(Self {
            floor_count,
            top,
            bottom,
        })
    }

    pub fn floor_count(&self) -> usize {
        self.floor_count
    }

    pub fn top(&self) -> f32 {
        self.top
    }

    pub fn bottom(&self) -> f32 {
        self.bottom
    }

    pub fn position(&self, floor: f32) -> f32 {
        let last = (self.floor_count - 1) as f32;
        if floor == 0.0 {
            return self.bottom;
        }
        if floor == last {
            return self.top;
        }
        self.top + (self.bottom - self.top) * (last - floor) / last
    }

    pub fn floor_position(&self, floor: FloorIndex) -> f32 {
        self.position(floor as f32)
    }

    /// Vertical distance between two adjacent floors.
    pub fn spacing(&self) -> f32 {
        (self.bottom - self.top) / (self.floor_count - 1) as f32
    }
}

/// Canvas size, floor count and column positions for every widget kind.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    pub width: f32,
    pub height: f32,
    pub floor_count: usize,
    pub control_size: f32,
    pub cabin_button_x: f32,
    pub cabin_lamp_x: f32,
    pub shaft_x: f32,
    pub cabin_width: f32,
    pub indicator_x: f32,
    pub indicator_offset_y: f32,
    pub indicator_text_size: f32,
    pub up_lamp_x: f32,
    pub up_button_x: f32,
    pub down_button_x: f32,
    pub down_lamp_x: f32,
}

impl LayoutConfig {
    pub fn new(width: f32, height: f32, floor_count: usize) -> Self {
        Self {
            width,
            height,
            floor_count,
            control_size: 30.0,
            cabin_button_x: 20.0,
            cabin_lamp_x: 55.0,
            shaft_x: 120.0,
            cabin_width: 50.0,
            indicator_x: 200.0,
            indicator_offset_y: 5.0,
            indicator_text_size: 20.0,
            up_lamp_x: 250.0,
            up_button_x: 290.0,
            down_button_x: 350.0,
            down_lamp_x: 390.0,
        }
    }

    /// Half a floor spacing of headroom above the top floor and below the bottom one.
    pub fn mapper(&self) -> Result<FloorMapper, LayoutError> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(LayoutError::InvalidCanvas {
                width: self.width,
                height: self.height,
            });
        }
        if self.floor_count < 2 {
            return Err(LayoutError::TooFewFloors {
                floor_count: self.floor_count,
            });
        }
        let top = self.height / (2.0 * self.floor_count as f32);
        FloorMapper::new(self.floor_count, top, self.height - top)
    }

    pub fn cabin_height(&self) -> f32 {
        self.height / (1.5 * self.floor_count as f32)
    }
}

#[cfg(test)]
#[path = "tests/layout_tests.rs"]
mod tests;
