//! # axis
//!
//! D3-style axis generator and its SVG component.
//!
//! An [`Axis`] is configured once (orientation, tick count, formatter) and
//! rendered against any [`AxisScale`] into a [`RenderedAxis`]: plain tick
//! offsets, labels and the domain path, ready for [`AxisView`].

use crate::{
    format::{format_time, step_tick_format, TickFormat},
    scale::{BandScale, LinearScale, Scale, TimeScale},
    svg::{translate, PathBuilder},
};
use chart_core::{colors, Range};
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

// ============================================================================
// STRATEGY PATTERN: Axis Scale
// ============================================================================

/// Single tick: pixel offset along the axis and its label
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub offset: f64,
    pub label: String,
}

/// Scales an axis can be drawn for
pub trait AxisScale {
    /// Pixel range covered by the scale
    fn range_extent(&self) -> Range;

    /// About `count` ticks; `format` overrides the scale's own labels
    fn axis_ticks(&self, count: usize, format: Option<TickFormat>) -> Vec<AxisTick>;
}

impl AxisScale for LinearScale {
    fn range_extent(&self) -> Range {
        self.range_bounds()
    }

    fn axis_ticks(&self, count: usize, format: Option<TickFormat>) -> Vec<AxisTick> {
        let step = self.tick_step(count);
        self.ticks(count)
            .into_iter()
            .map(|value| AxisTick {
                offset: self.scale(value),
                label: match format {
                    Some(f) => f(value),
                    None => step_tick_format(value, step),
                },
            })
            .collect()
    }
}

impl AxisScale for TimeScale {
    fn range_extent(&self) -> Range {
        self.range_bounds()
    }

    fn axis_ticks(&self, count: usize, format: Option<TickFormat>) -> Vec<AxisTick> {
        let interval_secs = self.tick_interval(count) / 1000;
        self.ticks(count)
            .into_iter()
            .map(|ts| AxisTick {
                offset: self.scale(ts),
                label: match format {
                    Some(f) => f(ts as f64),
                    None => format_time(ts, interval_secs),
                },
            })
            .collect()
    }
}

/// Band axes tick every key at its band center; `count` does not apply
impl AxisScale for BandScale {
    fn range_extent(&self) -> Range {
        self.range_bounds()
    }

    fn axis_ticks(&self, _count: usize, _format: Option<TickFormat>) -> Vec<AxisTick> {
        let half = self.bandwidth() / 2.0;
        self.domain()
            .iter()
            .enumerate()
            .map(|(i, key)| AxisTick {
                offset: self.position(i) + half,
                label: key.clone(),
            })
            .collect()
    }
}

// ============================================================================
// AXIS GENERATOR
// ============================================================================

/// Which side of the plot the axis sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisOrient {
    Top,
    Right,
    #[default]
    Bottom,
    Left,
}

impl AxisOrient {
    /// +1 when ticks point down/right, -1 when they point up/left
    fn direction(&self) -> f64 {
        match self {
            Self::Top | Self::Left => -1.0,
            Self::Bottom | Self::Right => 1.0,
        }
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Top => "axis-top",
            Self::Right => "axis-right",
            Self::Bottom => "axis-bottom",
            Self::Left => "axis-left",
        }
    }

    pub fn text_anchor(&self) -> &'static str {
        match self {
            Self::Right => "start",
            Self::Left => "end",
            Self::Top | Self::Bottom => "middle",
        }
    }

    pub fn text_dy(&self) -> &'static str {
        match self {
            Self::Top => "0em",
            Self::Bottom => "0.71em",
            Self::Left | Self::Right => "0.32em",
        }
    }

    /// Transform placing a tick at `offset` along the axis
    pub fn tick_transform(&self, offset: f64) -> String {
        if self.is_vertical() {
            translate(0.0, offset)
        } else {
            translate(offset, 0.0)
        }
    }
}

/// Tick geometry in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisConfig {
    pub tick_size_inner: f64,
    pub tick_size_outer: f64,
    pub tick_padding: f64,
    pub font_size: f64,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            tick_size_inner: 6.0,
            tick_size_outer: 6.0,
            tick_padding: 3.0,
            font_size: 10.0,
        }
    }
}

/// Axis generator
#[derive(Debug, Clone, Copy)]
pub struct Axis {
    orient: AxisOrient,
    tick_count: usize,
    format: Option<TickFormat>,
    config: AxisConfig,
}

impl Axis {
    pub fn new(orient: AxisOrient) -> Self {
        Self {
            orient,
            tick_count: 10,
            format: None,
            config: AxisConfig::default(),
        }
    }

    pub fn bottom() -> Self {
        Self::new(AxisOrient::Bottom)
    }

    pub fn left() -> Self {
        Self::new(AxisOrient::Left)
    }

    pub fn top() -> Self {
        Self::new(AxisOrient::Top)
    }

    pub fn right() -> Self {
        Self::new(AxisOrient::Right)
    }

    pub fn ticks(mut self, count: usize) -> Self {
        self.tick_count = count;
        self
    }

    pub fn tick_format(mut self, format: TickFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Inner and outer tick size together
    pub fn tick_size(mut self, size: f64) -> Self {
        self.config.tick_size_inner = size;
        self.config.tick_size_outer = size;
        self
    }

    pub fn tick_padding(mut self, padding: f64) -> Self {
        self.config.tick_padding = padding;
        self
    }

    pub fn config(mut self, config: AxisConfig) -> Self {
        self.config = config;
        self
    }

    pub fn orient(&self) -> AxisOrient {
        self.orient
    }

    pub fn tick_count(&self) -> usize {
        self.tick_count
    }

    /// Tick offsets and labels for `scale`
    pub fn tick_values<S: AxisScale + ?Sized>(&self, scale: &S) -> Vec<AxisTick> {
        scale.axis_ticks(self.tick_count, self.format)
    }

    /// Axis line with outer ticks at both ends of `range`
    pub fn domain_path(&self, range: Range) -> String {
        let (r0, r1) = range;
        let outer = self.orient.direction() * self.config.tick_size_outer;

        if self.orient.is_vertical() {
            PathBuilder::new()
                .move_to(outer, r0)
                .horizontal_to(0.0)
                .vertical_to(r1)
                .horizontal_to(outer)
                .build()
        } else {
            PathBuilder::new()
                .move_to(r0, outer)
                .vertical_to(0.0)
                .horizontal_to(r1)
                .vertical_to(outer)
                .build()
        }
    }

    /// Tick line end point `(x2, y2)` relative to the tick origin
    pub fn tick_line_end(&self) -> (f64, f64) {
        let length = self.orient.direction() * self.config.tick_size_inner;
        if self.orient.is_vertical() { (length, 0.0) } else { (0.0, length) }
    }

    /// Label position `(x, y)` relative to the tick origin
    pub fn label_position(&self) -> (f64, f64) {
        let spacing = self.config.tick_size_inner.max(0.0) + self.config.tick_padding;
        let distance = self.orient.direction() * spacing;
        if self.orient.is_vertical() { (distance, 0.0) } else { (0.0, distance) }
    }

    /// Compute everything [`AxisView`] draws; `transform` places the axis group
    pub fn render<S: AxisScale + ?Sized>(&self, scale: &S, transform: Option<String>) -> RenderedAxis {
        let ticks = self.tick_values(scale);
        tracing::trace!(orient = ?self.orient, ticks = ticks.len(), "rendering axis");

        RenderedAxis {
            axis: *self,
            ticks,
            domain_path: self.domain_path(scale.range_extent()),
            transform,
        }
    }
}

/// Axis geometry computed against a concrete scale
#[derive(Debug, Clone)]
pub struct RenderedAxis {
    pub axis: Axis,
    pub ticks: Vec<AxisTick>,
    pub domain_path: String,
    pub transform: Option<String>,
}

impl RenderedAxis {
    pub fn labels(&self) -> Vec<&str> {
        self.ticks.iter().map(|t| t.label.as_str()).collect()
    }
}

// ============================================================================
// AXIS COMPONENT
// ============================================================================

/// Renders an axis group the way d3's axis generator lays it out
#[component]
pub fn AxisView(axis: RenderedAxis) -> impl IntoView {
    let orient = axis.axis.orient();
    let (line_x2, line_y2) = axis.axis.tick_line_end();
    let (label_x, label_y) = axis.axis.label_position();
    let font_size = axis.axis.config.font_size;
    let transform = axis.transform.unwrap_or_else(|| translate(0.0, 0.0));

    view! {
        <g
            class=format!("axis {}", orient.css_class())
            transform=transform
            fill="none"
            font-size=font_size
            font-family="sans-serif"
            text-anchor=orient.text_anchor()
        >
            <path class="domain" stroke=colors::AXIS d=axis.domain_path />
            {axis.ticks.into_iter().map(|tick| {
                view! {
                    <g class="tick" opacity="1" transform=orient.tick_transform(tick.offset)>
                        <line stroke=colors::AXIS x2=line_x2 y2=line_y2 />
                        <text fill=colors::AXIS x=label_x y=label_y dy=orient.text_dy()>
                            {tick.label}
                        </text>
                    </g>
                }
            }).collect_view()}
        </g>
    }
}
