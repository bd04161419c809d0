use std::f64::consts::{FRAC_PI_2, TAU};

use expense_domain::coerce_amount;
use serde::{Deserialize, Serialize};

use super::{ChartPath, PathCommand, Point, Slice};

/// Slice colours, assigned by slice index modulo the palette length.
pub const PALETTE: [&str; 6] = [
    "#646cff", "#ff7ab6", "#7ee787", "#ffb86b", "#9be7ff", "#d6a8ff",
];

/// Gap between the circle and the canvas edge.
const RIM_INSET: f64 = 2.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieArc {
    pub path: ChartPath,
    pub label: String,
    pub value: f64,
    /// Share of the total, `value / total_value`.
    pub fraction: f64,
    /// Start angle in radians; 12 o'clock is `-π/2`.
    pub start_angle: f64,
    pub end_angle: f64,
    /// Set when the slice spans more than half the circle.
    pub large_arc: bool,
    pub color_index: usize,
}

impl PieArc {
    pub fn color(&self) -> &'static str {
        PALETTE[self.color_index % PALETTE.len()]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieGeometry {
    pub arcs: Vec<PieArc>,
    pub total_value: f64,
    pub center: Point,
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PieChart {
    NoData,
    Plot(PieGeometry),
}

impl PieChart {
    pub fn geometry(&self) -> Option<&PieGeometry> {
        match self {
            PieChart::Plot(geometry) => Some(geometry),
            PieChart::NoData => None,
        }
    }
}

/// Lays `slices` out clockwise from 12 o'clock on a `size` x `size` canvas.
///
/// Slices keep their input order. Zero and negative values are not filtered out; callers that
/// cannot make sense of them should drop them first.
pub fn build_pie(slices: &[Slice], size: f64) -> PieChart {
    let total_value: f64 = slices.iter().map(|slice| coerce_amount(slice.value)).sum();
    if slices.is_empty() || total_value == 0.0 {
        return PieChart::NoData;
    }

    let center = Point::new(size / 2.0, size / 2.0);
    let radius = size / 2.0 - RIM_INSET;
    let mut cumulative = 0.0;

    let arcs = slices
        .iter()
        .enumerate()
        .map(|(index, slice)| {
            let value = coerce_amount(slice.value);
            let fraction = value / total_value;
            let start_angle = angle_at(cumulative);
            cumulative += fraction;
            let end_angle = angle_at(cumulative);
            let large_arc = fraction > 0.5;

            let path = ChartPath(vec![
                PathCommand::MoveTo(center),
                PathCommand::LineTo(on_circle(center, radius, start_angle)),
                PathCommand::Arc {
                    radius,
                    large_arc,
                    sweep: true,
                    to: on_circle(center, radius, end_angle),
                },
                PathCommand::Close,
            ]);

            PieArc {
                path,
                label: slice.label.clone(),
                value,
                fraction,
                start_angle,
                end_angle,
                large_arc,
                color_index: index % PALETTE.len(),
            }
        })
        .collect();

    PieChart::Plot(PieGeometry {
        arcs,
        total_value,
        center,
        radius,
    })
}

fn angle_at(fraction: f64) -> f64 {
    TAU * fraction - FRAC_PI_2
}

fn on_circle(center: Point, radius: f64, angle: f64) -> Point {
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}
