//! SVG rendering of a plane dataset on the fixed plot canvas

use crate::plot::{PlotLayout, CANVAS_HEIGHT, CANVAS_WIDTH};
use micmac_domain::{Classification, PlotDataset};
use std::fmt::Write;

const MARGIN: f64 = 80.0;
const MIN_RADIUS: f64 = 4.0;
const MAX_RADIUS: f64 = 24.0;
const UNCLASSIFIED_COLOR: &str = "#636efa";
const DASHED: &str = r#"stroke="gray" stroke-dasharray="6 4""#;

fn class_color(classification: Classification) -> &'static str {
    match classification {
        Classification::KeyChallenge => "#ef553b",
        Classification::Driving => "#636efa",
        Classification::Dependent => "#00cc96",
        Classification::Autonomous => "#ab63fa",
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Maps data coordinates onto the canvas
struct Frame {
    x_max: f64,
    y_max: f64,
}

impl Frame {
    fn new(dataset: &PlotDataset) -> Self {
        let mut x_max = dataset.points.iter().map(|p| p.x).fold(0.0, f64::max);
        let mut y_max = dataset.points.iter().map(|p| p.y).fold(0.0, f64::max);
        if let Some(lines) = dataset.reference_lines {
            x_max = x_max.max(lines.mean_dependence);
            y_max = y_max.max(lines.mean_influence);
        }
        // Headroom so the largest markers are not clipped
        Self {
            x_max: if x_max > 0.0 { x_max * 1.1 } else { 1.0 },
            y_max: if y_max > 0.0 { y_max * 1.1 } else { 1.0 },
        }
    }

    fn x(&self, value: f64) -> f64 {
        MARGIN + value / self.x_max * (f64::from(CANVAS_WIDTH) - 2.0 * MARGIN)
    }

    fn y(&self, value: f64) -> f64 {
        f64::from(CANVAS_HEIGHT)
            - MARGIN
            - value / self.y_max * (f64::from(CANVAS_HEIGHT) - 2.0 * MARGIN)
    }
}

/// Render a plane as a standalone SVG document
///
/// Marker area grows with potential influence. The direct plane also gets
/// dashed quadrant lines and a legend of the classification colors.
pub fn render_svg(dataset: &PlotDataset) -> String {
    let layout = PlotLayout::for_plane(dataset.plane);
    let frame = Frame::new(dataset);
    let width = f64::from(CANVAS_WIDTH);
    let height = f64::from(CANVAS_HEIGHT);
    let max_size = dataset.points.iter().map(|p| p.size).fold(0.0, f64::max);

    let mut svg = String::new();
    // Writing to a String cannot fail
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}""#,
        w = CANVAS_WIDTH,
        h = CANVAS_HEIGHT
    );
    let _ = writeln!(
        svg,
        r#" viewBox="0 0 {w} {h}" font-family="sans-serif">"#,
        w = CANVAS_WIDTH,
        h = CANVAS_HEIGHT
    );
    let _ = writeln!(svg, r#"<rect width="100%" height="100%" fill="white"/>"#);
    let _ = writeln!(
        svg,
        r#"<text x="{}" y="40" font-size="22" text-anchor="middle">{}</text>"#,
        width / 2.0,
        escape(layout.title)
    );

    // Axes
    let _ = writeln!(
        svg,
        r#"<line x1="{m}" y1="{b}" x2="{r}" y2="{b}" stroke="black"/>"#,
        m = MARGIN,
        b = height - MARGIN,
        r = width - MARGIN
    );
    let _ = writeln!(
        svg,
        r#"<line x1="{m}" y1="{t}" x2="{m}" y2="{b}" stroke="black"/>"#,
        m = MARGIN,
        t = MARGIN,
        b = height - MARGIN
    );
    let _ = writeln!(
        svg,
        r#"<text x="{}" y="{}" font-size="16" text-anchor="middle">{}</text>"#,
        width / 2.0,
        height - MARGIN / 3.0,
        escape(layout.x_label)
    );
    let _ = writeln!(
        svg,
        r#"<text x="{x}" y="{y}" font-size="16" text-anchor="middle" {rotate}>{label}</text>"#,
        x = MARGIN / 3.0,
        y = height / 2.0,
        rotate = format_args!(r#"transform="rotate(-90 {} {})""#, MARGIN / 3.0, height / 2.0),
        label = escape(layout.y_label)
    );

    if let Some(lines) = dataset.reference_lines {
        let x = frame.x(lines.mean_dependence);
        let y = frame.y(lines.mean_influence);
        let _ = writeln!(
            svg,
            r#"<line x1="{x:.2}" y1="{t}" x2="{x:.2}" y2="{b}" {dash}/>"#,
            t = MARGIN,
            b = height - MARGIN,
            dash = DASHED
        );
        let _ = writeln!(
            svg,
            r#"<line x1="{l}" y1="{y:.2}" x2="{r}" y2="{y:.2}" {dash}/>"#,
            l = MARGIN,
            r = width - MARGIN,
            dash = DASHED
        );
    }

    for point in &dataset.points {
        let radius = if max_size > 0.0 {
            MIN_RADIUS + (MAX_RADIUS - MIN_RADIUS) * (point.size / max_size).sqrt()
        } else {
            MIN_RADIUS
        };
        let color = point
            .classification
            .map(class_color)
            .unwrap_or(UNCLASSIFIED_COLOR);
        let cx = frame.x(point.x);
        let cy = frame.y(point.y);

        let _ = writeln!(
            svg,
            r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}" fill-opacity="0.7"/>"#,
            cx,
            cy,
            radius,
            color
        );
        let _ = writeln!(
            svg,
            r#"<text x="{:.2}" y="{:.2}" font-size="12" text-anchor="middle">{}</text>"#,
            cx,
            cy - radius - 4.0,
            escape(&point.name)
        );
    }

    if dataset.reference_lines.is_some() {
        for (i, classification) in Classification::ALL.iter().enumerate() {
            let y = MARGIN + 20.0 * i as f64;
            let _ = writeln!(
                svg,
                r#"<circle cx="{}" cy="{}" r="6" fill="{}"/>"#,
                width - MARGIN - 150.0,
                y,
                class_color(*classification)
            );
            let _ = writeln!(
                svg,
                r#"<text x="{}" y="{}" font-size="13">{}</text>"#,
                width - MARGIN - 138.0,
                y + 4.0,
                escape(classification.export_label())
            );
        }
    }

    svg.push_str("</svg>\n");
    svg
}
