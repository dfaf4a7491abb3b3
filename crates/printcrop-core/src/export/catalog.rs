//! Print sizes offered for padded export.

use serde::Serialize;

use crate::geometry::AspectRatio;

/// A print frame. Stored portrait-first (`width <= height`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PrintSize {
    pub width: f64,
    pub height: f64,
    pub label: &'static str,
}

impl PrintSize {
    pub const fn new(width: f64, height: f64, label: &'static str) -> Self {
        Self {
            width,
            height,
            label,
        }
    }

    /// Frame sides turned to match the crop: swapped for a landscape crop.
    pub fn oriented_for(&self, crop: AspectRatio) -> (f64, f64) {
        if crop.is_landscape() {
            (self.height, self.width)
        } else {
            (self.width, self.height)
        }
    }
}

/// Common photo print sizes, in inches.
pub const PRINT_SIZES: [PrintSize; 8] = [
    PrintSize::new(4.0, 6.0, "4×6"),
    PrintSize::new(5.0, 7.0, "5×7"),
    PrintSize::new(8.0, 10.0, "8×10"),
    PrintSize::new(8.0, 12.0, "8×12"),
    PrintSize::new(11.0, 14.0, "11×14"),
    PrintSize::new(12.0, 18.0, "12×18"),
    PrintSize::new(16.0, 20.0, "16×20"),
    PrintSize::new(20.0, 30.0, "20×30"),
];

/// Catalog entry at `index`.
pub fn print_size(index: usize) -> Option<PrintSize> {
    PRINT_SIZES.get(index).copied()
}
