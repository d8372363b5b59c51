use crate::color_utils::{is_transparent, to_svg_hex, to_svg_opacity};
use crate::models::{PlotStyle, ViewBox};
use crate::point::Point;
use std::fmt::Write as _;

const MARGIN_LEFT: f64 = 60.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 50.0;
const TICK_LENGTH: f64 = 5.0;
const FONT_SIZE: f64 = 12.0;
const TITLE_FONT_SIZE: f64 = 14.0;

/// Calculate the data-space region covering the curve and its control points,
/// padded by 5% on each side. Non-finite points are ignored.
pub fn calculate_viewbox(curve: &[Point], control_points: &[Point]) -> ViewBox {
    const PADDING_RATIO: f64 = 0.05;

    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    for p in curve.iter().chain(control_points).filter(|p| p.is_finite()) {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }

    if min_x > max_x {
        return ViewBox {
            min_x: 0.0,
            min_y: 0.0,
            width: 1.0,
            height: 1.0,
        };
    }

    let (min_x, width) = widen(min_x, max_x - min_x);
    let (min_y, height) = widen(min_y, max_y - min_y);
    let pad_x = width * PADDING_RATIO;
    let pad_y = height * PADDING_RATIO;

    ViewBox {
        min_x: min_x - pad_x,
        min_y: min_y - pad_y,
        width: width + pad_x * 2.0,
        height: height + pad_y * 2.0,
    }
}

// A zero span (all points on one vertical or horizontal line) becomes a unit
// span centred on the points.
fn widen(min: f64, span: f64) -> (f64, f64) {
    if span > f64::EPSILON {
        (min, span)
    } else {
        (min - 0.5, 1.0)
    }
}

/// Evenly spaced tick positions within `[min, max]` at a 1/2/5 step.
pub fn nice_ticks(min: f64, max: f64, target_count: usize) -> (Vec<f64>, f64) {
    let span = max - min;
    if !(span.is_finite() && span > 0.0) || target_count < 2 {
        return (vec![min], 1.0);
    }
    let raw_step = span / (target_count - 1) as f64;
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let normalized = raw_step / magnitude;
    let step = magnitude
        * if normalized <= 1.0 {
            1.0
        } else if normalized <= 2.0 {
            2.0
        } else if normalized <= 5.0 {
            5.0
        } else {
            10.0
        };

    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    let ticks = (first..=last).map(|i| i as f64 * step).collect();
    (ticks, step)
}

/// Format a tick value with just enough decimals for `step`.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = (-step.log10().floor()).max(0.0) as usize;
    let text = format!("{value:.decimals$}");
    // Avoid "-0" and "-0.0" labels.
    if text.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') {
        text.trim_start_matches('-').to_string()
    } else {
        text
    }
}

/// Maps data coordinates into the pixel rectangle left for the plot body.
struct Projection {
    viewbox: ViewBox,
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl Projection {
    fn new(viewbox: ViewBox, style: &PlotStyle) -> Self {
        Self {
            viewbox,
            left: MARGIN_LEFT,
            top: MARGIN_TOP,
            width: (f64::from(style.width) - MARGIN_LEFT - MARGIN_RIGHT).max(1.0),
            height: (f64::from(style.height) - MARGIN_TOP - MARGIN_BOTTOM).max(1.0),
        }
    }

    fn x(&self, x: f64) -> f64 {
        self.left + (x - self.viewbox.min_x) / self.viewbox.width * self.width
    }

    // Data y grows upwards, SVG y downwards.
    fn y(&self, y: f64) -> f64 {
        self.top + (self.viewbox.max_y() - y) / self.viewbox.height * self.height
    }

    fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

fn render_axes(proj: &Projection, out: &mut String) {
    let _ = writeln!(
        out,
        r##"  <rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="#000000" stroke-width="1"/>"##,
        proj.left, proj.top, proj.width, proj.height
    );

    let vb = proj.viewbox;
    let (x_ticks, x_step) = nice_ticks(vb.min_x, vb.max_x(), 5);
    for tick in x_ticks {
        let px = proj.x(tick);
        let _ = writeln!(
            out,
            r##"  <line x1="{px}" y1="{}" x2="{px}" y2="{}" stroke="#000000" stroke-width="1"/>"##,
            proj.bottom(),
            proj.bottom() + TICK_LENGTH
        );
        let _ = writeln!(
            out,
            r##"  <text x="{px}" y="{}" font-size="{FONT_SIZE}" font-family="sans-serif" text-anchor="middle">{}</text>"##,
            proj.bottom() + TICK_LENGTH + FONT_SIZE + 2.0,
            format_tick(tick, x_step)
        );
    }

    let (y_ticks, y_step) = nice_ticks(vb.min_y, vb.max_y(), 5);
    for tick in y_ticks {
        let py = proj.y(tick);
        let _ = writeln!(
            out,
            r##"  <line x1="{}" y1="{py}" x2="{}" y2="{py}" stroke="#000000" stroke-width="1"/>"##,
            proj.left - TICK_LENGTH,
            proj.left
        );
        let _ = writeln!(
            out,
            r##"  <text x="{}" y="{}" font-size="{FONT_SIZE}" font-family="sans-serif" text-anchor="end">{}</text>"##,
            proj.left - TICK_LENGTH - 3.0,
            py + FONT_SIZE * 0.35,
            format_tick(tick, y_step)
        );
    }
}

fn render_labels(proj: &Projection, style: &PlotStyle, out: &mut String) {
    let center_x = proj.left + proj.width / 2.0;
    let center_y = proj.top + proj.height / 2.0;
    let _ = writeln!(
        out,
        r##"  <text x="{center_x}" y="{}" font-size="{TITLE_FONT_SIZE}" font-family="sans-serif" text-anchor="middle">{}</text>"##,
        MARGIN_TOP / 2.0 + TITLE_FONT_SIZE * 0.35,
        escape_xml(&style.title)
    );
    let _ = writeln!(
        out,
        r##"  <text x="{center_x}" y="{}" font-size="{FONT_SIZE}" font-family="sans-serif" text-anchor="middle">{}</text>"##,
        proj.bottom() + MARGIN_BOTTOM - 8.0,
        escape_xml(&style.x_label)
    );
    let label_x = 16.0;
    let _ = writeln!(
        out,
        r##"  <text x="{label_x}" y="{center_y}" font-size="{FONT_SIZE}" font-family="sans-serif" text-anchor="middle" transform="rotate(-90 {label_x} {center_y})">{}</text>"##,
        escape_xml(&style.y_label)
    );
}

fn render_curve(curve: &[Point], proj: &Projection, style: &PlotStyle, out: &mut String) {
    let points = curve
        .iter()
        .filter(|p| p.is_finite())
        .map(|p| format!("{},{}", proj.x(p.x), proj.y(p.y)))
        .collect::<Vec<_>>();
    if points.len() < 2 || is_transparent(style.curve_color) {
        return;
    }
    let _ = writeln!(
        out,
        r##"  <polyline points="{}" fill="none" stroke="{}" stroke-opacity="{}" stroke-width="{}" stroke-linejoin="round" stroke-linecap="round"/>"##,
        points.join(" "),
        to_svg_hex(style.curve_color),
        to_svg_opacity(style.curve_color),
        style.curve_width
    );
}

fn render_markers(control_points: &[Point], proj: &Projection, style: &PlotStyle, out: &mut String) {
    if is_transparent(style.marker_color) {
        return;
    }
    let stroke = to_svg_hex(style.marker_color);
    let opacity = to_svg_opacity(style.marker_color);
    for p in control_points.iter().filter(|p| p.is_finite()) {
        let _ = writeln!(
            out,
            r##"  <circle cx="{}" cy="{}" r="{}" fill="none" stroke="{stroke}" stroke-opacity="{opacity}" stroke-width="1"/>"##,
            proj.x(p.x),
            proj.y(p.y),
            style.marker_radius
        );
    }
}

/// Generate an SVG plot with the curve drawn as a line and circle markers at
/// the control points.
pub fn generate_svg(curve: &[Point], control_points: &[Point], style: &PlotStyle) -> String {
    let viewbox = calculate_viewbox(curve, control_points);
    let proj = Projection::new(viewbox, style);

    let mut body = String::new();
    if !is_transparent(style.background) {
        let _ = writeln!(
            body,
            r##"  <rect x="0" y="0" width="{}" height="{}" fill="{}" fill-opacity="{}"/>"##,
            style.width,
            style.height,
            to_svg_hex(style.background),
            to_svg_opacity(style.background)
        );
    }
    render_axes(&proj, &mut body);
    render_labels(&proj, style, &mut body);
    render_curve(curve, &proj, style, &mut body);
    render_markers(control_points, &proj, style, &mut body);

    format!(
        "<svg width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" xmlns=\"http://www.w3.org/2000/svg\">\n{body}</svg>\n",
        w = style.width,
        h = style.height,
    )
}
