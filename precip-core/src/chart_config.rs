//! Chart.js bar chart configuration.
//!
//! The structs mirror the subset of the Chart.js 4 option tree the
//! precipitation chart uses and serialize straight into the object passed to
//! `new Chart(canvas, config)`.

use crate::month_color::color_for_month;
use crate::record::PrecipitationRecord;
use serde::Serialize;

/// Dataset label shown in the tooltip.
pub const DATASET_LABEL: &str = "Precipitation";

const BAR_BORDER_WIDTH: u32 = 1;
const BAR_BORDER_RADIUS: u32 = 8;
const TOOLTIP_BACKGROUND: &str = "#eee";
const TOOLTIP_TEXT: &str = "#000";

/// Chart.js axis id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisId {
    X,
    Y,
}

/// Where an axis is drawn relative to the chart area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisPosition {
    Top,
    Left,
    Bottom,
}

/// Bar orientation, chosen from the compact-layout signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Vertical bars: months along the bottom, values up the left.
    Vertical,
    /// Horizontal bars: months down the left, values across the top.
    Horizontal,
}

impl Orientation {
    pub fn from_compact(compact: bool) -> Self {
        if compact {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    /// The axis carrying the month labels (Chart.js `indexAxis`).
    pub fn category_axis(self) -> AxisId {
        match self {
            Orientation::Vertical => AxisId::X,
            Orientation::Horizontal => AxisId::Y,
        }
    }

    /// The axis carrying the precipitation values.
    pub fn value_axis(self) -> AxisId {
        match self {
            Orientation::Vertical => AxisId::Y,
            Orientation::Horizontal => AxisId::X,
        }
    }

    fn category_position(self) -> AxisPosition {
        match self {
            Orientation::Vertical => AxisPosition::Bottom,
            Orientation::Horizontal => AxisPosition::Left,
        }
    }

    fn value_position(self) -> AxisPosition {
        match self {
            Orientation::Vertical => AxisPosition::Left,
            Orientation::Horizontal => AxisPosition::Top,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChartConfig {
    #[serde(rename = "type")]
    pub chart_type: &'static str,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<BarDataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarDataset {
    pub label: &'static str,
    pub data: Vec<f64>,
    /// One entry per bar; `None` serializes to `null`, leaving the bar
    /// without a fill color.
    pub background_color: Vec<Option<&'static str>>,
    pub border_width: u32,
    pub border_radius: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub plugins: Plugins,
    pub maintain_aspect_ratio: bool,
    pub responsive: bool,
    pub index_axis: AxisId,
    pub scales: Scales,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
    pub tooltip: Tooltip,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub display: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    pub background_color: &'static str,
    pub body_color: &'static str,
    pub title_color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub x: AxisOptions,
    pub y: AxisOptions,
}

impl Scales {
    pub fn axis(&self, id: AxisId) -> &AxisOptions {
        match id {
            AxisId::X => &self.x,
            AxisId::Y => &self.y,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisOptions {
    pub position: AxisPosition,
    pub title: AxisTitle,
    pub grid: Grid,
    pub begin_at_zero: bool,
}

impl AxisOptions {
    fn at(position: AxisPosition) -> Self {
        Self {
            position,
            title: AxisTitle { align: "end" },
            grid: Grid { display: false },
            begin_at_zero: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTitle {
    pub align: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grid {
    pub display: bool,
}

/// Build the bar chart configuration for a list of records.
///
/// Bars appear in record order. `compact` selects horizontal bars.
pub fn build_bar_chart(records: &[PrecipitationRecord], compact: bool) -> BarChartConfig {
    let orientation = Orientation::from_compact(compact);

    let labels = records.iter().map(|r| r.month.clone()).collect();
    let data = records.iter().map(|r| r.precipitation_mm).collect();
    let background_color = records
        .iter()
        .map(|r| color_for_month(&r.month))
        .collect();

    let category = AxisOptions::at(orientation.category_position());
    let value = AxisOptions::at(orientation.value_position());
    let scales = match orientation.category_axis() {
        AxisId::X => Scales { x: category, y: value },
        AxisId::Y => Scales { x: value, y: category },
    };

    BarChartConfig {
        chart_type: "bar",
        data: ChartData {
            labels,
            datasets: vec![BarDataset {
                label: DATASET_LABEL,
                data,
                background_color,
                border_width: BAR_BORDER_WIDTH,
                border_radius: BAR_BORDER_RADIUS,
            }],
        },
        options: ChartOptions {
            plugins: Plugins {
                legend: Legend { display: false },
                tooltip: Tooltip {
                    background_color: TOOLTIP_BACKGROUND,
                    body_color: TOOLTIP_TEXT,
                    title_color: TOOLTIP_TEXT,
                },
            },
            maintain_aspect_ratio: false,
            responsive: true,
            index_axis: orientation.category_axis(),
            scales,
        },
    }
}

impl BarChartConfig {
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
