use serde::{Deserialize, Serialize};

/// Feet per metre. Flood fields store stage in metres; building geometry
/// and water-surface elevations are in feet.
pub const FT_PER_M: f64 = 3.28084;

/// A 2D flood field storing water-surface stage as f32 in metres, row-major.
/// Buildings address cells as (row = grid_y, col = grid_x).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloodField {
    /// Row-major stage values in metres.
    pub data: Vec<f32>,
    pub width: usize,
    pub height: usize,
}

impl FloodField {
    /// Create a new FloodField filled with the given stage.
    pub fn new(width: usize, height: usize, fill: f32) -> Self {
        Self {
            data: vec![fill; width * height],
            width,
            height,
        }
    }

    /// Create a dry (zero-stage) field.
    pub fn dry(width: usize, height: usize) -> Self {
        Self::new(width, height, 0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row * self.width + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, val: f32) {
        self.data[row * self.width + col] = val;
    }

    /// Stage at (row, col), converted to feet.
    ///
    /// Panics if the cell lies outside the field; grid indices are a caller
    /// precondition, not a recoverable condition.
    #[inline]
    pub fn stage_ft(&self, row: usize, col: usize) -> f64 {
        self.get(row, col) as f64 * FT_PER_M
    }

    pub fn min_stage(&self) -> f32 {
        self.data.iter().cloned().fold(f32::INFINITY, f32::min)
    }

    pub fn max_stage(&self) -> f32 {
        self.data.iter().cloned().fold(f32::NEG_INFINITY, f32::max)
    }
}
