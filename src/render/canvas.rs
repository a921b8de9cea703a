//! The SVG canvas: an append-only list of element records and their
//! serialization

use std::fmt::Write as _;

use enum_dispatch::enum_dispatch;

use super::defaults;
use crate::types::{Point, Viewport};

/// Serialize one element as a single line of markup
#[enum_dispatch]
pub trait WriteSvg {
    fn write_svg(&self, out: &mut String);
}

/// Any element the canvas can hold
#[enum_dispatch(WriteSvg)]
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Polygon(Polygon),
    Text(Text),
}

/// SVG polygon element (`<polygon>`)
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub points: Vec<Point>,
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
    pub stroke_dasharray: String,
    pub opacity: f64,
}

impl WriteSvg for Polygon {
    fn write_svg(&self, out: &mut String) {
        out.push_str(r#"<polygon points=""#);
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{},{}", fmt_num(p.x), fmt_num(p.y));
        }
        let _ = write!(
            out,
            r#"" fill="{}" stroke="{}" stroke-width="{}" stroke-dasharray="{}" opacity="{}"/>"#,
            escape_attr(&self.fill),
            escape_attr(&self.stroke),
            fmt_num(self.stroke_width),
            escape_attr(&self.stroke_dasharray),
            fmt_num(self.opacity),
        );
    }
}

/// SVG text element (`<text>`)
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub x: f64,
    pub y: f64,
    pub fill: String,
    pub font_size: String,
    pub font_family: String,
    pub content: String,
}

impl WriteSvg for Text {
    fn write_svg(&self, out: &mut String) {
        let _ = write!(
            out,
            r#"<text x="{}" y="{}" fill="{}" font-size="{}" font-family="{}">{}</text>"#,
            fmt_num(self.x),
            fmt_num(self.y),
            escape_attr(&self.fill),
            escape_attr(&self.font_size),
            escape_attr(&self.font_family),
            escape_text(&self.content),
        );
    }
}

/// An SVG surface sized to a viewport.
///
/// Elements are painted in the order they were appended.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    viewport: Viewport,
    elements: Vec<Element>,
}

impl Canvas {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            elements: Vec::new(),
        }
    }

    pub fn push(&mut self, element: impl Into<Element>) {
        let element = element.into();
        crate::log::trace!(index = self.elements.len(), ?element, "append");
        self.elements.push(element);
    }

    /// Drop every element, keeping the size
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Serialize the whole document
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="{}" width="{}" height="{}">"#,
            defaults::SVG_NS,
            fmt_num(self.viewport.width),
            fmt_num(self.viewport.height),
        );
        for element in &self.elements {
            element.write_svg(&mut out);
            out.push('\n');
        }
        out.push_str("</svg>\n");
        out
    }
}

/// Format a number with 6 significant figures, trailing zeros trimmed.
pub(crate) fn fmt_num(value: f64) -> String {
    fmt_num_precision(value, 6)
}

/// Format a number with specified significant figures, trailing zeros trimmed.
fn fmt_num_precision(value: f64, sig_figs: i32) -> String {
    if value == 0.0 {
        // also catches -0.0
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    let abs_val = value.abs();
    let magnitude = abs_val.log10().floor() as i32;
    let scale = 10_f64.powi(sig_figs - 1 - magnitude);
    let rounded = (value * scale).round() / scale;

    let decimals = (sig_figs - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}
