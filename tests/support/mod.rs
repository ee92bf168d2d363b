#![allow(dead_code)]

use snake_viz::DrawSurface;

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    SetSize(u32, u32),
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Stroke,
    StrokeStyle(String),
    FillStyle(String),
    FillRect(f64, f64, f64, f64),
}

/// Records every call instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<Op>,
    size: (u32, u32),
}

impl RecordingSurface {
    /// `(from, to)` pairs for each move_to/line_to.
    pub fn lines(&self) -> Vec<((f64, f64), (f64, f64))> {
        self.ops
            .windows(2)
            .filter_map(|w| match (&w[0], &w[1]) {
                (Op::MoveTo(x0, y0), Op::LineTo(x1, y1)) => Some(((*x0, *y0), (*x1, *y1))),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl DrawSurface for RecordingSurface {
    fn set_size(&mut self, width: u32, height: u32) {
        self.size = (width, height);
        self.ops.push(Op::SetSize(width, height));
    }

    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn begin_path(&mut self) {
        self.ops.push(Op::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(Op::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(Op::LineTo(x, y));
    }

    fn stroke(&mut self) {
        self.ops.push(Op::Stroke);
    }

    fn set_stroke_style(&mut self, style: &str) {
        self.ops.push(Op::StrokeStyle(style.to_string()));
    }

    fn set_fill_style(&mut self, style: &str) {
        self.ops.push(Op::FillStyle(style.to_string()));
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ops.push(Op::FillRect(x, y, w, h));
    }
}
