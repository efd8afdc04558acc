// Pixel <-> cell conversion for the canvas.

/// Upper bound on a cell's side in display units.
pub const MAX_CELL_SIZE: f64 = 15.0;
/// Display budget the whole grid must fit into.
pub const DISPLAY_WIDTH: f64 = 800.0;
pub const DISPLAY_HEIGHT: f64 = 600.0;

/// Where a cell lands on the display surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellRect {
    pub left: f64,
    pub top: f64,
    pub center_x: f64,
    pub center_y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateMapper {
    width: u32,
    height: u32,
    cell_size: f64,
}

impl Default for CoordinateMapper {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl CoordinateMapper {
    /// Fixes one uniform cell size for a `width` x `height` grid.
    pub fn new(width: u32, height: u32) -> Self {
        let mut cell_size = MAX_CELL_SIZE;
        if width > 0 {
            cell_size = cell_size.min(DISPLAY_WIDTH / width as f64);
        }
        if height > 0 {
            cell_size = cell_size.min(DISPLAY_HEIGHT / height as f64);
        }
        Self {
            width,
            height,
            cell_size,
        }
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Display surface size: `width*cellSize` x `height*cellSize`.
    pub fn surface_size(&self) -> (f64, f64) {
        (
            self.width as f64 * self.cell_size,
            self.height as f64 * self.cell_size,
        )
    }

    /// Cell index under a display point. May be negative or past the grid edge.
    pub fn to_cell(&self, px: f64, py: f64) -> (i64, i64) {
        (
            (px / self.cell_size).floor() as i64,
            (py / self.cell_size).floor() as i64,
        )
    }

    pub fn to_display(&self, x: u32, y: u32) -> CellRect {
        let left = x as f64 * self.cell_size;
        let top = y as f64 * self.cell_size;
        let half = self.cell_size / 2.0;
        CellRect {
            left,
            top,
            center_x: left + half,
            center_y: top + half,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_grid_uses_max_cell_size() {
        let m = CoordinateMapper::new(10, 10);
        assert_eq!(m.cell_size(), 15.0);
        assert_eq!(m.surface_size(), (150.0, 150.0));
    }

    #[test]
    fn test_cell_size_is_min_of_budgets() {
        let m = CoordinateMapper::new(200, 100);
        assert_eq!(m.cell_size(), 4.0);
        assert_eq!(m.surface_size(), (800.0, 400.0));

        let m = CoordinateMapper::new(50, 200);
        assert_eq!(m.cell_size(), 3.0);
        assert_eq!(m.surface_size(), (150.0, 600.0));

        let m = CoordinateMapper::new(150, 10);
        assert_eq!(m.cell_size(), 800.0 / 150.0);
    }

    #[test]
    fn test_to_cell_floors() {
        let m = CoordinateMapper::new(10, 10);
        assert_eq!(m.to_cell(0.0, 0.0), (0, 0));
        assert_eq!(m.to_cell(14.9, 15.0), (0, 1));
        assert_eq!(m.to_cell(-0.5, 31.0), (-1, 2));
    }

    #[test]
    fn test_to_display_corner_and_center() {
        let m = CoordinateMapper::new(10, 10);
        let r = m.to_display(2, 3);
        assert_eq!((r.left, r.top), (30.0, 45.0));
        assert_eq!((r.center_x, r.center_y), (37.5, 52.5));
    }

    #[test]
    fn test_round_trip_through_center() {
        let m = CoordinateMapper::new(123, 77);
        for (x, y) in [(0, 0), (5, 9), (122, 76)] {
            let r = m.to_display(x, y);
            assert_eq!(m.to_cell(r.center_x, r.center_y), (x as i64, y as i64));
        }
    }
}
