//! # chart-core
//!
//! Framework-free types shared by the SVG chart helpers.
//! Holds chart geometry values, legend descriptors and the
//! data-binning routine used to downsample series before plotting.

pub mod binning;
pub mod legend;

pub use binning::*;
pub use legend::*;

use serde::{Deserialize, Serialize};

// ============================================================================
// GEOMETRY
// ============================================================================

/// Pixel range `(start, end)`; `start > end` for inverted (y) axes
pub type Range = (f64, f64);

/// Chart margin configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Margin {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { left, right, top, bottom }
    }

    pub const fn uniform(margin: f64) -> Self {
        Self::new(margin, margin, margin, margin)
    }

    pub const fn symmetric(vertical: f64, horizontal: f64) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Room for a left axis and a bottom axis
    pub const fn standard() -> Self {
        Self::new(20.0, 20.0, 30.0, 50.0)
    }

    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

impl Default for Margin {
    fn default() -> Self {
        Self::standard()
    }
}

/// Point in chart coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

// ============================================================================
// COLOR CONSTANTS
// ============================================================================

pub mod colors {
    pub const AXIS: &str = "currentColor";
    pub const TEXT_PRIMARY: &str = "#212121";

    /// Categorical palette for series and legend markers
    pub const CATEGORY: [&str; 10] = [
        "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd",
        "#8c564b", "#e377c2", "#7f7f7f", "#bcbd22", "#17becf",
    ];

    /// Palette color for the n-th series, wrapping around
    pub fn category(index: usize) -> &'static str {
        CATEGORY[index % CATEGORY.len()]
    }
}
