//! # chart-helpers
//!
//! D3.js-style helpers for SVG charts built with Leptos.
//! The chart components own data flow and interaction; these helpers only
//! compute geometry and draw the scaffolding around the marks.
//!
//! ## Modules
//!
//! - `scale` - linear, time and band scales
//! - `axis` - axis generator and `AxisView` component
//! - `legend` - legend layout and `Legend` component
//! - `svg` - transform strings and path builder
//! - `format` - tick label formatters

pub mod axis;
pub mod format;
pub mod legend;
pub mod scale;
pub mod svg;

pub use axis::*;
pub use format::*;
pub use legend::*;
pub use scale::*;
pub use svg::*;

// Re-export the core types for convenience
pub use chart_core::{
    bin_data, colors, merge_windows, window_size, Attr, Field, LegendInfo, LegendInfoMap, Margin,
    Mergeable, Point, Range,
};

use leptos::prelude::*;

/// Pixels per tick used to derive axis tick counts
pub const TICK_SPACING: f64 = 30.0;

/// Default band padding, as a fraction of the band step
pub const DEFAULT_BAND_PADDING: f64 = 0.2;

// ============================================================================
// LAYOUT MANAGER
// ============================================================================

/// Chart geometry: total SVG size, margins and the inner plot area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutManager {
    pub total_width: f64,
    pub total_height: f64,
    /// Inner plot width (excluding margins)
    pub width: f64,
    /// Inner plot height (excluding margins)
    pub height: f64,
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl LayoutManager {
    pub fn new(total_width: f64, total_height: f64, margin: Margin) -> Self {
        let layout = Self {
            total_width,
            total_height,
            width: (total_width - margin.left - margin.right).max(0.0),
            height: (total_height - margin.top - margin.bottom).max(0.0),
            left: margin.left,
            right: margin.right,
            top: margin.top,
            bottom: margin.bottom,
        };
        tracing::debug!(width = layout.width, height = layout.height, "chart layout");
        layout
    }

    pub fn margin(&self) -> Margin {
        Margin::new(self.top, self.right, self.bottom, self.left)
    }

    /// ViewBox string for the SVG root
    pub fn viewbox(&self) -> String {
        format!("0 0 {} {}", self.total_width, self.total_height)
    }

    /// SVG transform for the inner plot area
    pub fn inner_transform(&self) -> String {
        translate(self.left, self.top)
    }

    /// Ticks that fit along the inner width
    pub fn x_tick_count(&self) -> usize {
        (self.width / TICK_SPACING).floor() as usize
    }

    /// Ticks that fit along the inner height
    pub fn y_tick_count(&self) -> usize {
        (self.height / TICK_SPACING).floor() as usize
    }

    /// Axis along the bottom edge of the plot area
    pub fn axis_bottom<S: AxisScale + ?Sized>(&self, scale: &S) -> RenderedAxis {
        Axis::bottom()
            .ticks(self.x_tick_count())
            .render(scale, Some(translate(0.0, self.height)))
    }

    /// Axis along the left edge of the plot area
    pub fn axis_left<S: AxisScale + ?Sized>(&self, scale: &S) -> RenderedAxis {
        Axis::left().ticks(self.y_tick_count()).render(scale, None)
    }

    /// Linear x scale; domain `[0, max]` when `max` is set and non-zero
    pub fn x_linear(&self, max: Option<f64>) -> LinearScale {
        with_max(LinearScale::new().range(0.0, self.width), max)
    }

    /// Linear y scale growing upwards; domain `[0, max]` when `max` is set and non-zero
    pub fn y_linear(&self, max: Option<f64>) -> LinearScale {
        with_max(LinearScale::new().range(self.height, 0.0), max)
    }

    /// Band x scale with the default padding
    pub fn x_band<I, K>(&self, domain: I) -> BandScale
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.x_band_padded(domain, DEFAULT_BAND_PADDING)
    }

    pub fn x_band_padded<I, K>(&self, domain: I, padding: f64) -> BandScale
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        BandScale::new(domain).range(0.0, self.width).padding(padding)
    }

    /// Band y scale with the default padding; first key at the bottom
    pub fn y_band<I, K>(&self, domain: I) -> BandScale
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.y_band_padded(domain, DEFAULT_BAND_PADDING)
    }

    pub fn y_band_padded<I, K>(&self, domain: I, padding: f64) -> BandScale
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        BandScale::new(domain).range(self.height, 0.0).padding(padding)
    }

    /// Time x scale over `[start_ms, end_ms]`
    pub fn x_time(&self, start_ms: i64, end_ms: i64) -> TimeScale {
        TimeScale::new().domain(start_ms, end_ms).range(0.0, self.width)
    }
}

fn with_max(scale: LinearScale, max: Option<f64>) -> LinearScale {
    match max {
        Some(max) if max != 0.0 && !max.is_nan() => scale.domain(0.0, max),
        _ => scale,
    }
}

impl Default for LayoutManager {
    fn default() -> Self {
        Self::new(800.0, 400.0, Margin::default())
    }
}

// ============================================================================
// SVG SCAFFOLDING
// ============================================================================

/// SVG root sized to the layout, with a margin-translated plot group
#[component]
pub fn ChartSvg(
    layout: LayoutManager,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <svg
            class=class.unwrap_or_else(|| "chart".to_string())
            width=layout.total_width
            height=layout.total_height
            viewBox=layout.viewbox()
        >
            <g class="plot-area" transform=layout.inner_transform()>
                {children()}
            </g>
        </svg>
    }
}

/// Nested group shifted by the layout margins
#[component]
pub fn ChartGroup(layout: LayoutManager, children: Children) -> impl IntoView {
    view! {
        <g transform=layout.inner_transform()>
            {children()}
        </g>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> LayoutManager {
        LayoutManager::new(500.0, 300.0, Margin::new(10.0, 20.0, 40.0, 50.0))
    }

    #[test]
    fn test_inner_size() {
        let layout = layout();
        assert_eq!(layout.width, 430.0);
        assert_eq!(layout.height, 250.0);
        assert_eq!(layout.margin(), Margin::new(10.0, 20.0, 40.0, 50.0));
        assert_eq!(layout.inner_transform(), "translate(50, 10)");
        assert_eq!(layout.viewbox(), "0 0 500 300");
    }

    #[test]
    fn test_margins_larger_than_box() {
        let layout = LayoutManager::new(40.0, 20.0, Margin::uniform(30.0));
        assert_eq!(layout.width, 0.0);
        assert_eq!(layout.height, 0.0);
        assert_eq!(layout.x_tick_count(), 0);
    }

    #[test]
    fn test_tick_counts() {
        let layout = layout();
        assert_eq!(layout.x_tick_count(), 14);
        assert_eq!(layout.y_tick_count(), 8);
    }

    #[test]
    fn test_linear_scales() {
        let layout = layout();

        let x = layout.x_linear(Some(10.0));
        assert_eq!(x.domain_bounds(), (0.0, 10.0));
        assert_eq!(x.range_bounds(), (0.0, 430.0));

        let y = layout.y_linear(Some(100.0));
        assert_eq!(y.scale(0.0), 250.0);
        assert_eq!(y.scale(100.0), 0.0);

        // zero and missing max keep the unit domain
        assert_eq!(layout.x_linear(Some(0.0)).domain_bounds(), (0.0, 1.0));
        assert_eq!(layout.y_linear(None).domain_bounds(), (0.0, 1.0));
    }

    #[test]
    fn test_band_scales() {
        let layout = LayoutManager::new(120.0, 120.0, Margin::uniform(0.0));

        let x = layout.x_band(["a", "b", "c"]);
        assert_eq!(x.scale("a"), Some(7.5));

        let y = layout.y_band(["a", "b", "c"]);
        assert_eq!(y.scale("a"), Some(82.5));

        let tight = layout.x_band_padded(["a", "b"], 0.0);
        assert_eq!(tight.bandwidth(), 60.0);
    }

    #[test]
    fn test_axis_bottom_placement() {
        let layout = layout();
        let axis = layout.axis_bottom(&layout.x_linear(Some(100.0)));

        assert_eq!(axis.transform.as_deref(), Some("translate(0, 250)"));
        assert_eq!(axis.axis.tick_count(), 14);
        assert_eq!(axis.domain_path, "M0,6V0H430V6");
        assert_eq!(axis.ticks.first().map(|t| t.offset), Some(0.0));
    }

    #[test]
    fn test_axis_left_placement() {
        let layout = layout();
        let axis = layout.axis_left(&layout.y_linear(Some(1.0)));

        assert_eq!(axis.transform, None);
        assert_eq!(axis.axis.orient(), AxisOrient::Left);
        assert_eq!(axis.ticks.last().map(|t| t.offset), Some(0.0));
        assert_eq!(axis.ticks.last().map(|t| t.label.as_str()), Some("1.0"));
    }

    #[test]
    fn test_time_scale() {
        let layout = layout();
        let x = layout.x_time(0, 86_400_000);
        assert_eq!(x.scale(43_200_000), 215.0);
    }
}
