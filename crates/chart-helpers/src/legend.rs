//! Chart legends
//!
//! A row (or column) of colored markers with labels, anchored to the right
//! edge of the legend box.

use crate::svg::translate;
use chart_core::{colors, LegendInfo, LegendInfoMap};
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Marker circle and label offsets inside one legend item
const MARKER_RADIUS: f64 = 3.0;
const MARKER_CX: f64 = 2.0;
const MARKER_CY: f64 = 11.0;
const LABEL_DX: f64 = 10.0;
const LABEL_DY: f64 = 14.0;

/// Row pitch for vertical legends
const ROW_HEIGHT: f64 = 30.0;

// ============================================================================
// CONFIG
// ============================================================================

/// Legend box and spacing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendConfig {
    pub width: f64,
    pub height: f64,
    /// Gap between horizontal items
    pub margin: f64,
    pub horizontal: bool,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 40.0,
            margin: 15.0,
            horizontal: true,
        }
    }
}

impl LegendConfig {
    pub fn vertical(width: f64) -> Self {
        Self {
            width,
            horizontal: false,
            ..Self::default()
        }
    }
}

// ============================================================================
// STRATEGY PATTERN: Text measurement
// ============================================================================

/// Strategy trait for measuring rendered label width
pub trait TextMeasure: Send + Sync {
    fn text_width(&self, text: &str) -> f64;

    /// Width of a whole legend item: marker, gap and label
    fn item_width(&self, label: &str) -> f64 {
        (LABEL_DX + self.text_width(label)) - (MARKER_CX - MARKER_RADIUS)
    }
}

/// Estimates width from glyph count; good enough before layout exists
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproxTextMeasure {
    pub font_size: f64,
    /// Average glyph advance as a fraction of the font size
    pub glyph_ratio: f64,
}

impl Default for ApproxTextMeasure {
    fn default() -> Self {
        // 0.8em of a 16px root font
        Self {
            font_size: 12.8,
            glyph_ratio: 0.6,
        }
    }
}

impl TextMeasure for ApproxTextMeasure {
    fn text_width(&self, text: &str) -> f64 {
        text.chars().count() as f64 * self.font_size * self.glyph_ratio
    }
}

// ============================================================================
// LAYOUT
// ============================================================================

/// Offsets `(x, y)` for items of the given widths.
///
/// Horizontal legends stack leftwards from the right edge, `margin` apart,
/// centered on the box height. Vertical legends put every item at `x = 0`,
/// one row every 30px.
pub fn legend_layout(widths: &[f64], config: &LegendConfig) -> Vec<(f64, f64)> {
    let mut h_offset = 0.0;

    widths
        .iter()
        .enumerate()
        .map(|(i, width)| {
            if config.horizontal {
                h_offset += width;
                if i > 0 {
                    h_offset += config.margin;
                }
                (config.width - h_offset, config.height / 2.0 - 10.0)
            } else {
                (0.0, i as f64 * ROW_HEIGHT)
            }
        })
        .collect()
}

/// One positioned legend entry
#[derive(Debug, Clone, PartialEq)]
pub struct LegendItem {
    pub label: String,
    pub color: String,
    pub x: f64,
    pub y: f64,
}

impl LegendItem {
    pub fn transform(&self) -> String {
        translate(self.x, self.y)
    }
}

/// Position every entry of `legends`.
///
/// Entries keep map order; horizontal legends are laid out last-first so the
/// first entry ends up leftmost.
pub fn layout_legend(
    legends: &LegendInfoMap,
    config: &LegendConfig,
    measure: &dyn TextMeasure,
) -> Vec<LegendItem> {
    let mut entries: Vec<&LegendInfo> = legends.values().collect();
    if config.horizontal {
        entries.reverse();
    }

    let widths: Vec<f64> = entries.iter().map(|e| measure.item_width(e.label())).collect();

    entries
        .into_iter()
        .zip(legend_layout(&widths, config))
        .map(|(entry, (x, y))| LegendItem {
            label: entry.label().to_string(),
            color: entry.color.clone(),
            x,
            y,
        })
        .collect()
}

// ============================================================================
// LEGEND COMPONENT
// ============================================================================

/// Legend group; place it inside a chart `<svg>`
#[component]
pub fn Legend(
    #[prop(into)] legends: Signal<LegendInfoMap>,
    #[prop(optional)] config: Option<LegendConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let measure = ApproxTextMeasure::default();

    let items = move || layout_legend(&legends.get(), &config, &measure);

    view! {
        <g class="legend">
            {move || {
                items().into_iter().map(|item| {
                    let transform = item.transform();
                    view! {
                        <g class="legend-item" transform=transform>
                            <circle r=MARKER_RADIUS cx=MARKER_CX cy=MARKER_CY fill=item.color />
                            <text
                                dx=LABEL_DX
                                dy=LABEL_DY
                                fill=colors::TEXT_PRIMARY
                                style="font-size: 0.8em"
                            >
                                {item.label}
                            </text>
                        </g>
                    }
                }).collect_view()
            }}
        </g>
    }
}
