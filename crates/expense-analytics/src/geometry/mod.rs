//! Chart geometry in an abstract 2D space: origin top-left, y grows downward.
//!
//! Generators return coordinates and path commands only; turning them into pixels is the
//! rendering surface's job.

pub mod line;
pub mod pie;

pub use line::*;
pub use pie::*;

use std::fmt;

use expense_domain::{CategoryTotal, TrendBucket};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A single drawing instruction, rendered in SVG path syntax.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    Arc {
        radius: f64,
        large_arc: bool,
        sweep: bool,
        to: Point,
    },
    Close,
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathCommand::MoveTo(p) => write!(f, "M {} {}", p.x, p.y),
            PathCommand::LineTo(p) => write!(f, "L {} {}", p.x, p.y),
            PathCommand::Arc {
                radius,
                large_arc,
                sweep,
                to,
            } => write!(
                f,
                "A {radius} {radius} 0 {} {} {} {}",
                u8::from(*large_arc),
                u8::from(*sweep),
                to.x,
                to.y
            ),
            PathCommand::Close => f.write_str("Z"),
        }
    }
}

/// An ordered list of path commands.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartPath(pub Vec<PathCommand>);

impl ChartPath {
    pub fn commands(&self) -> &[PathCommand] {
        &self.0
    }

    /// Renders the path as an SVG `d` attribute value.
    pub fn to_svg(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ChartPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, command) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{command}")?;
        }
        Ok(())
    }
}

/// A labelled value on a line chart's x axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

impl From<&TrendBucket> for SeriesPoint {
    fn from(bucket: &TrendBucket) -> Self {
        Self::new(bucket.period_label.clone(), bucket.total)
    }
}

/// A labelled share of a pie chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    pub label: String,
    pub value: f64,
}

impl Slice {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

impl From<&CategoryTotal> for Slice {
    fn from(total: &CategoryTotal) -> Self {
        Self::new(total.category.clone(), total.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_render_in_svg_syntax() {
        let path = ChartPath(vec![
            PathCommand::MoveTo(Point::new(100.0, 100.0)),
            PathCommand::LineTo(Point::new(100.0, 2.0)),
            PathCommand::Arc {
                radius: 98.0,
                large_arc: true,
                sweep: true,
                to: Point::new(2.5, 100.0),
            },
            PathCommand::Close,
        ]);
        assert_eq!(
            path.to_svg(),
            "M 100 100 L 100 2 A 98 98 0 1 1 2.5 100 Z"
        );
    }
}
