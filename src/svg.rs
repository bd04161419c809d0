//! Renders chart geometry into standalone SVG documents.

use std::fmt::Write;

use expense_analytics::{LineChart, LineLayout, PieChart};

const LINE_COLOR: &str = "#646cff";
const AREA_FILL: &str = "rgba(100,108,255,0.08)";
const GRID_COLOR: &str = "#ccc";
const MARKER_RADIUS: f64 = 3.0;

/// Line chart document sized to `layout`; an empty series renders a "No data" placeholder.
pub fn render_line(chart: &LineChart, layout: &LineLayout) -> String {
    let LineChart::Plot(geometry) = chart else {
        return placeholder(layout.width, layout.height);
    };

    let mut svg = open_document(layout.width, layout.height);
    let p = layout.padding;
    let _ = writeln!(
        svg,
        r#"  <line x1="{p}" y1="{p}" x2="{p}" y2="{b}" stroke="{GRID_COLOR}" stroke-width="0.5"/>"#,
        b = geometry.baseline
    );
    let _ = writeln!(
        svg,
        r#"  <line x1="{p}" y1="{b}" x2="{r}" y2="{b}" stroke="{GRID_COLOR}" stroke-width="0.5"/>"#,
        b = geometry.baseline,
        r = layout.width - p
    );
    let _ = writeln!(
        svg,
        r#"  <path d="{}" fill="{AREA_FILL}" stroke="none"/>"#,
        geometry.area_path
    );
    let _ = writeln!(
        svg,
        r#"  <path d="{}" fill="none" stroke="{LINE_COLOR}" stroke-width="2"/>"#,
        geometry.line_path
    );
    for marker in &geometry.markers {
        let _ = writeln!(
            svg,
            r#"  <circle cx="{}" cy="{}" r="{MARKER_RADIUS}" fill="{LINE_COLOR}"/>"#,
            marker.x, marker.y
        );
    }
    for label in &geometry.labels {
        let _ = writeln!(
            svg,
            r#"  <text x="{}" y="{}" font-size="10" text-anchor="middle">{}</text>"#,
            label.x,
            label.y,
            escape(&label.text)
        );
    }
    svg.push_str("</svg>\n");
    svg
}

/// Pie chart document of `size` x `size`; each slice carries its label as a tooltip.
pub fn render_pie(chart: &PieChart, size: f64) -> String {
    let PieChart::Plot(geometry) = chart else {
        return placeholder(size, size);
    };

    let mut svg = open_document(size, size);
    for arc in &geometry.arcs {
        let _ = writeln!(
            svg,
            r##"  <path d="{}" fill="{}" stroke="#fff" stroke-width="1"><title>{}: {}</title></path>"##,
            arc.path,
            arc.color(),
            escape(&arc.label),
            arc.value
        );
    }
    svg.push_str("</svg>\n");
    svg
}

fn open_document(width: f64, height: f64) -> String {
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">\n"
    )
}

fn placeholder(width: f64, height: f64) -> String {
    let mut svg = open_document(width, height);
    let _ = writeln!(
        svg,
        r#"  <text x="{}" y="{}" text-anchor="middle">No data</text>"#,
        width / 2.0,
        height / 2.0
    );
    svg.push_str("</svg>\n");
    svg
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    escaped
}
