use expense_domain::coerce_amount;
use serde::{Deserialize, Serialize};

use super::{ChartPath, PathCommand, Point, SeriesPoint};

pub const DEFAULT_PADDING: f64 = 20.0;

/// Distance of the x-axis labels above the bottom edge.
const LABEL_OFFSET: f64 = 4.0;

/// Canvas dimensions for a line chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineLayout {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl LineLayout {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            padding: DEFAULT_PADDING,
        }
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    pub fn inner_width(&self) -> f64 {
        self.width - 2.0 * self.padding
    }

    pub fn inner_height(&self) -> f64 {
        self.height - 2.0 * self.padding
    }

    /// The y coordinate of the x axis.
    pub fn baseline(&self) -> f64 {
        self.height - self.padding
    }
}

impl Default for LineLayout {
    fn default() -> Self {
        Self::new(600.0, 200.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLabel {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineGeometry {
    /// Connects the markers in order.
    pub line_path: ChartPath,
    /// `line_path` closed down to the baseline, for a filled region under the line.
    pub area_path: ChartPath,
    pub markers: Vec<Point>,
    pub labels: Vec<AxisLabel>,
    pub baseline: f64,
    pub min_value: f64,
    pub max_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LineChart {
    NoData,
    Plot(LineGeometry),
}

impl LineChart {
    pub fn geometry(&self) -> Option<&LineGeometry> {
        match self {
            LineChart::Plot(geometry) => Some(geometry),
            LineChart::NoData => None,
        }
    }
}

/// Lays out `points` left to right across `layout`.
///
/// Values are scaled linearly from `[min, max]` onto `[baseline, padding]`. A flat series uses
/// a unit denominator, which puts every point on the baseline; a single point sits at
/// `x = padding`.
pub fn build_line(points: &[SeriesPoint], layout: &LineLayout) -> LineChart {
    if points.is_empty() {
        return LineChart::NoData;
    }

    let values: Vec<f64> = points.iter().map(|point| coerce_amount(point.value)).collect();
    let min_value = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max_value = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = match max_value - min_value {
        spread if spread == 0.0 => 1.0,
        spread => spread,
    };
    let steps = points.len().saturating_sub(1).max(1) as f64;

    let markers: Vec<Point> = values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let x = layout.padding + (index as f64 / steps) * layout.inner_width();
            let y = layout.padding + (1.0 - (value - min_value) / range) * layout.inner_height();
            Point::new(x, y)
        })
        .collect();

    let mut commands: Vec<PathCommand> = markers
        .iter()
        .enumerate()
        .map(|(index, marker)| {
            if index == 0 {
                PathCommand::MoveTo(*marker)
            } else {
                PathCommand::LineTo(*marker)
            }
        })
        .collect();
    let line_path = ChartPath(commands.clone());

    let baseline = layout.baseline();
    if let (Some(first), Some(last)) = (markers.first(), markers.last()) {
        commands.push(PathCommand::LineTo(Point::new(last.x, baseline)));
        commands.push(PathCommand::LineTo(Point::new(first.x, baseline)));
    }
    commands.push(PathCommand::Close);

    let labels = markers
        .iter()
        .zip(points)
        .map(|(marker, point)| AxisLabel {
            x: marker.x,
            y: layout.height - LABEL_OFFSET,
            text: point.label.clone(),
        })
        .collect();

    LineChart::Plot(LineGeometry {
        line_path,
        area_path: ChartPath(commands),
        markers,
        labels,
        baseline,
        min_value,
        max_value,
    })
}
