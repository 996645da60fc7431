//! Drawing environments onto a canvas.
//!
//! The core only emits fills in absolute canvas coordinates: a box's
//! local position plus its horizontal offset. Pixels are the canvas's
//! business.

use std::fmt::Write;

use crate::types::{Environment, Shape, ShapeKind, BOX_OFFSETS, BOX_SIZE};

pub const CANVAS_WIDTH: f64 = 600.0;
pub const CANVAS_HEIGHT: f64 = 200.0;

const BACKGROUND: &str = "Grey";
const REGION: &str = "LightGrey";

/// Fill primitives a drawing surface must provide.
pub trait Canvas {
    fn set_fill_color(&mut self, color: &str);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn fill_arc(&mut self, center_x: f64, center_y: f64, radius: f64);
    /// Fill the closed polygon through `points`.
    fn fill_path(&mut self, points: &[(f64, f64)]);
}

/// Grey backdrop with the three placement regions highlighted.
pub fn draw_background<C: Canvas>(canvas: &mut C) {
    canvas.set_fill_color(BACKGROUND);
    canvas.fill_rect(0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT);

    canvas.set_fill_color(REGION);
    let side = BOX_SIZE as f64;
    for offset in BOX_OFFSETS {
        canvas.fill_rect(offset as f64, 0.0, side, side);
    }
}

/// Draw one shape of box `box_index` (0, 1 or 2).
pub fn draw_shape<C: Canvas>(canvas: &mut C, box_index: usize, shape: &Shape) {
    let x = BOX_OFFSETS[box_index].saturating_add(shape.x_loc) as f64;
    let y = shape.y_loc as f64;
    let s = shape.size.units() as f64;

    canvas.set_fill_color(shape.color.fill_value());
    match shape.kind {
        ShapeKind::Square => canvas.fill_rect(x, y, s, s),
        ShapeKind::Circle => canvas.fill_arc(x + s / 2.0, y + s / 2.0, s / 2.0),
        ShapeKind::Triangle => canvas.fill_path(&[(x, y + s), (x + s, y + s), (x + s / 2.0, y)]),
    }
}

/// Background, then every shape of every box. Boxes past the third
/// have no region and are skipped.
pub fn draw_environment<C: Canvas>(canvas: &mut C, env: &Environment) {
    draw_background(canvas);
    for (i, shapes) in env.boxes.iter().take(BOX_OFFSETS.len()).enumerate() {
        for shape in shapes {
            draw_shape(canvas, i, shape);
        }
    }
}

/// Canvas that records fills as an SVG document.
#[derive(Debug, Clone)]
pub struct SvgCanvas {
    body: String,
    fill: String,
}

impl Default for SvgCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgCanvas {
    pub fn new() -> Self {
        Self {
            body: String::new(),
            fill: "Black".to_string(),
        }
    }

    /// Close the document and return it.
    pub fn finish(self) -> String {
        let mut svg = String::with_capacity(self.body.len() + 160);
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = CANVAS_WIDTH,
            h = CANVAS_HEIGHT
        );
        svg.push_str(&self.body);
        svg.push_str("</svg>\n");
        svg
    }
}

impl Canvas for SvgCanvas {
    fn set_fill_color(&mut self, color: &str) {
        self.fill = color.to_string();
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let _ = writeln!(
            self.body,
            r#"  <rect x="{x}" y="{y}" width="{width}" height="{height}" fill="{}"/>"#,
            self.fill
        );
    }

    fn fill_arc(&mut self, center_x: f64, center_y: f64, radius: f64) {
        let _ = writeln!(
            self.body,
            r#"  <circle cx="{center_x}" cy="{center_y}" r="{radius}" fill="{}"/>"#,
            self.fill
        );
    }

    fn fill_path(&mut self, points: &[(f64, f64)]) {
        let mut d = String::new();
        for (i, (px, py)) in points.iter().enumerate() {
            let _ = write!(d, "{}{px},{py}", if i == 0 { "M" } else { "L" });
        }
        let _ = writeln!(self.body, r#"  <path d="{d}Z" fill="{}"/>"#, self.fill);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, ShapeAttributes, Size};

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Fill(String),
        Rect(f64, f64, f64, f64),
        Arc(f64, f64, f64),
        Path(Vec<(f64, f64)>),
    }

    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op>,
    }

    impl Canvas for Recorder {
        fn set_fill_color(&mut self, color: &str) {
            self.ops.push(Op::Fill(color.to_string()));
        }
        fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
            self.ops.push(Op::Rect(x, y, width, height));
        }
        fn fill_arc(&mut self, center_x: f64, center_y: f64, radius: f64) {
            self.ops.push(Op::Arc(center_x, center_y, radius));
        }
        fn fill_path(&mut self, points: &[(f64, f64)]) {
            self.ops.push(Op::Path(points.to_vec()));
        }
    }

    #[test]
    fn background_highlights_placement_regions() {
        let mut rec = Recorder::default();
        draw_background(&mut rec);
        assert_eq!(
            rec.ops,
            vec![
                Op::Fill("Grey".into()),
                Op::Rect(0.0, 0.0, 600.0, 200.0),
                Op::Fill("LightGrey".into()),
                Op::Rect(0.0, 0.0, 100.0, 100.0),
                Op::Rect(150.0, 0.0, 100.0, 100.0),
                Op::Rect(300.0, 0.0, 100.0, 100.0),
            ]
        );
    }

    #[test]
    fn shapes_use_box_offset() {
        let mut rec = Recorder::default();
        let square = ShapeAttributes::new(ShapeKind::Square, Color::Black, Size::Medium).at(40, 80);
        let circle = ShapeAttributes::new(ShapeKind::Circle, Color::Blue, Size::Small).at(0, 10);
        let triangle =
            ShapeAttributes::new(ShapeKind::Triangle, Color::Yellow, Size::Large).at(10, 0);
        draw_shape(&mut rec, 2, &square);
        draw_shape(&mut rec, 1, &circle);
        draw_shape(&mut rec, 0, &triangle);
        assert_eq!(
            rec.ops,
            vec![
                Op::Fill("Black".into()),
                Op::Rect(340.0, 80.0, 20.0, 20.0),
                Op::Fill("#0099ff".into()),
                Op::Arc(155.0, 15.0, 5.0),
                Op::Fill("Yellow".into()),
                Op::Path(vec![(10.0, 30.0), (40.0, 30.0), (25.0, 0.0)]),
            ]
        );
    }

    #[test]
    fn huge_history_coordinates_saturate() {
        let mut rec = Recorder::default();
        let square = ShapeAttributes::new(ShapeKind::Square, Color::Black, Size::Small)
            .at(u32::MAX, u32::MAX);
        draw_shape(&mut rec, 2, &square);
        assert_eq!(
            rec.ops[1],
            Op::Rect(u32::MAX as f64, u32::MAX as f64, 10.0, 10.0)
        );
    }

    #[test]
    fn environment_draws_every_shape() {
        let square = ShapeAttributes::new(ShapeKind::Square, Color::Black, Size::Small);
        let env = Environment::new(vec![
            vec![square.at(0, 0), square.at(50, 50)],
            vec![square.at(0, 0)],
            vec![square.at(0, 0)],
        ]);
        let mut rec = Recorder::default();
        draw_environment(&mut rec, &env);
        let rects = rec.ops.iter().filter(|op| matches!(op, Op::Rect(..))).count();
        assert_eq!(rects, 4 + 4);
    }

    #[test]
    fn svg_document() {
        let env = Environment::new(vec![
            vec![ShapeAttributes::new(ShapeKind::Circle, Color::Blue, Size::Medium).at(10, 10)],
            vec![ShapeAttributes::new(ShapeKind::Triangle, Color::Black, Size::Small).at(0, 0)],
            vec![],
        ]);
        let mut canvas = SvgCanvas::new();
        draw_environment(&mut canvas, &env);
        let svg = canvas.finish();
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains(r##"<circle cx="20" cy="20" r="10" fill="#0099ff"/>"##));
        assert!(svg.contains(r#"<path d="M150,10L160,10L155,0Z" fill="Black"/>"#));
        assert_eq!(svg.matches("<rect").count(), 4);
    }
}
