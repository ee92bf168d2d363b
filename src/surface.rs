/// A 2D drawing context bound to a resizable pixel buffer.
///
/// Mirrors the subset of `CanvasRenderingContext2d` the viewer uses, so the
/// grid can be drawn against a recording surface on the host.
pub trait DrawSurface {
    /// Resize the backing buffer. Discards anything already drawn.
    fn set_size(&mut self, width: u32, height: u32);
    fn size(&self) -> (u32, u32);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn stroke(&mut self);

    fn set_stroke_style(&mut self, _style: &str) {}
    fn set_fill_style(&mut self, _style: &str) {}
    fn fill_rect(&mut self, _x: f64, _y: f64, _w: f64, _h: f64) {}
}
