use crate::surface::DrawSurface;

/// One gridline, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: (f64, f64),
    pub to: (f64, f64),
}

impl Segment {
    pub fn length(&self) -> f64 {
        let dx = self.to.0 - self.from.0;
        let dy = self.to.1 - self.from.1;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn is_vertical(&self) -> bool {
        self.from.0 == self.to.0
    }
}

/// A square grid of `width` x `width` cells, `cell_size` pixels each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub width: u32,
    pub cell_size: u32,
}

impl Grid {
    pub fn new(width: u32, cell_size: u32) -> Self {
        Self { width, cell_size }
    }

    /// Side length of the grid in pixels.
    pub fn extent(&self) -> u32 {
        self.width.saturating_mul(self.cell_size)
    }

    /// Vertical lines left to right, then horizontal lines top to bottom.
    /// Always `width + 1` of each.
    /// Offsets clamp to [`Grid::extent`], like the extent itself.
    pub fn segments(&self) -> impl Iterator<Item = Segment> {
        let cell = self.cell_size;
        let extent = f64::from(self.extent());
        let offset = move |i: u32| f64::from(i.saturating_mul(cell));
        let lines = 0..=self.width;
        let vertical = lines.clone().map(move |i| {
            let x = offset(i);
            Segment { from: (x, 0.0), to: (x, extent) }
        });
        let horizontal = lines.map(move |i| {
            let y = offset(i);
            Segment { from: (0.0, y), to: (extent, y) }
        });
        vertical.chain(horizontal)
    }

    /// Draw every gridline as a single stroked path.
    ///
    /// Starts a fresh path each call, so repeated draws do not accumulate
    /// segments. Clearing the surface is up to the caller.
    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        surface.begin_path();
        for seg in self.segments() {
            surface.move_to(seg.from.0, seg.from.1);
            surface.line_to(seg.to.0, seg.to.1);
        }
        surface.stroke();
    }

    /// Pixel origin of the cell at row-major `idx`, or `None` if it falls
    /// outside the grid.
    pub fn cell_origin(&self, idx: u32) -> Option<(f64, f64)> {
        if self.width == 0 || idx >= self.width.saturating_mul(self.width) {
            return None;
        }
        let col = idx % self.width;
        let row = idx / self.width;
        let cell = f64::from(self.cell_size);
        Some((f64::from(col) * cell, f64::from(row) * cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extent_saturates() {
        assert_eq!(Grid::new(u32::MAX, 2).extent(), u32::MAX);
        assert_eq!(Grid::new(5, 10).extent(), 50);
    }

    #[test]
    fn cell_origin_is_row_major() {
        let grid = Grid::new(16, 20);
        assert_eq!(grid.cell_origin(10), Some((200.0, 0.0)));
        assert_eq!(grid.cell_origin(17), Some((20.0, 20.0)));
        assert_eq!(grid.cell_origin(256), None);
        assert_eq!(Grid::new(0, 20).cell_origin(0), None);
    }

    #[test]
    fn segment_orientation() {
        let mut segs = Grid::new(1, 4).segments();
        assert!(segs.next().unwrap().is_vertical());
        assert!(segs.next().unwrap().is_vertical());
        assert!(!segs.next().unwrap().is_vertical());
    }
}
