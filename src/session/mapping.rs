/// Conversion between board pixels and cell coordinates.
///
/// Cells are square, `canvas_width / cols` pixels on each side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellMapping {
    cell_size: f32,
}

impl CellMapping {
    pub fn new(canvas_width: f32, cols: usize) -> Self {
        Self {
            cell_size: canvas_width / cols as f32,
        }
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Cell `(r, c)` under the pixel `(x, y)`.
    ///
    /// Pixels left of or above the board give negative coordinates; the caller is expected
    /// to bounds-check them. Returns `None` for a degenerate canvas.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<(i64, i64)> {
        if !(self.cell_size.is_finite() && self.cell_size > 0.) || !x.is_finite() || !y.is_finite()
        {
            return None;
        }
        let c = (x / self.cell_size).floor() as i64;
        let r = (y / self.cell_size).floor() as i64;
        Some((r, c))
    }

    /// Top left corner of the cell and its side length, in pixels.
    pub fn cell_rect(&self, r: usize, c: usize) -> ([f32; 2], f32) {
        (
            [c as f32 * self.cell_size, r as f32 * self.cell_size],
            self.cell_size,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::CellMapping;

    #[test]
    fn test_cell_at() {
        let mapping = CellMapping::new(500., 50);
        assert_eq!(mapping.cell_size(), 10.);
        assert_eq!(mapping.cell_at(0., 0.), Some((0, 0)));
        assert_eq!(mapping.cell_at(9.99, 10.), Some((1, 0)));
        assert_eq!(mapping.cell_at(499.9, 499.9), Some((49, 49)));
        assert_eq!(mapping.cell_at(500., 0.), Some((0, 50)));
        assert_eq!(mapping.cell_at(-0.5, 3.), Some((0, -1)));
    }

    #[test]
    fn test_degenerate_canvas() {
        let mapping = CellMapping::new(0., 10);
        assert_eq!(mapping.cell_at(1., 1.), None);
        let mapping = CellMapping::new(100., 10);
        assert_eq!(mapping.cell_at(f32::NAN, 1.), None);
    }

    #[test]
    fn test_cell_rect() {
        let mapping = CellMapping::new(720., 10);
        assert_eq!(mapping.cell_rect(2, 3), ([216., 144.], 72.));
    }
}
