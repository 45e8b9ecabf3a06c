// viewport.rs - Screen pixel <-> grid cell mapping

use crate::Cell;

pub const MIN_CELL_SIZE: i32 = 2;
pub const MAX_CELL_SIZE: i32 = 50;
pub const DEFAULT_CELL_SIZE: i32 = 20;

pub fn clamp_cell_size(size: i32) -> i32 {
    size.clamp(MIN_CELL_SIZE, MAX_CELL_SIZE)
}

/// Cell under screen point (px, py). Floors, so negative positions land in
/// the cell to their left/above rather than snapping towards zero.
pub fn screen_to_cell(px: f64, py: f64, offset_x: f64, offset_y: f64, cell_size: i32) -> Cell {
    let size = f64::from(cell_size);
    Cell::new(
        ((px + offset_x) / size).floor() as i32,
        ((py + offset_y) / size).floor() as i32,
    )
}

/// Top-left screen corner of `cell`.
pub fn cell_to_screen(cell: Cell, offset_x: f64, offset_y: f64, cell_size: i32) -> (f64, f64) {
    let size = f64::from(cell_size);
    (
        f64::from(cell.x) * size - offset_x,
        f64::from(cell.y) * size - offset_y,
    )
}

/// New offsets after rescaling from `old_cell_size` to `new_cell_size` so the
/// world point under (px, py) stays put. The new size is clamped first; when
/// that leaves the size unchanged the offsets come back unchanged.
pub fn zoom_at(
    px: f64,
    py: f64,
    offset_x: f64,
    offset_y: f64,
    old_cell_size: i32,
    new_cell_size: i32,
) -> (f64, f64) {
    let new_cell_size = clamp_cell_size(new_cell_size);
    if new_cell_size == old_cell_size {
        return (offset_x, offset_y);
    }

    let world_x = (px + offset_x) / f64::from(old_cell_size);
    let world_y = (py + offset_y) / f64::from(old_cell_size);
    (
        world_x * f64::from(new_cell_size) - px,
        world_y * f64::from(new_cell_size) - py,
    )
}

/// Drag moves the camera opposite to the pointer.
pub fn pan(offset_x: f64, offset_y: f64, dx: f64, dy: f64) -> (f64, f64) {
    (offset_x - dx, offset_y - dy)
}

/// Screen positions of cell boundaries along one axis within `[0, extent)`.
pub fn grid_lines(extent: f64, offset: f64, cell_size: i32) -> impl Iterator<Item = f64> {
    let size = f64::from(cell_size);
    let first = (-offset).rem_euclid(size);
    std::iter::successors(Some(first), move |&p| Some(p + size)).take_while(move |&p| p < extent)
}

/// Camera over the infinite grid: pan offsets in pixels and the cell size.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    pub offset_x: f64,
    pub offset_y: f64,
    cell_size: i32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_CELL_SIZE)
    }
}

impl Viewport {
    pub fn new(cell_size: i32) -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            cell_size: clamp_cell_size(cell_size),
        }
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    pub fn screen_to_cell(&self, px: f64, py: f64) -> Cell {
        screen_to_cell(px, py, self.offset_x, self.offset_y, self.cell_size)
    }

    pub fn cell_to_screen(&self, cell: Cell) -> (f64, f64) {
        cell_to_screen(cell, self.offset_x, self.offset_y, self.cell_size)
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        (self.offset_x, self.offset_y) = pan(self.offset_x, self.offset_y, dx, dy);
    }

    /// Rescales to `new_cell_size` (clamped) around screen point (px, py).
    /// Returns whether the cell size changed.
    pub fn zoom_at(&mut self, px: f64, py: f64, new_cell_size: i32) -> bool {
        let new_cell_size = clamp_cell_size(new_cell_size);
        if new_cell_size == self.cell_size {
            return false;
        }
        (self.offset_x, self.offset_y) =
            zoom_at(px, py, self.offset_x, self.offset_y, self.cell_size, new_cell_size);
        self.cell_size = new_cell_size;
        true
    }

    /// One wheel notch: grow by a pixel on positive delta, shrink on negative.
    pub fn zoom_step(&mut self, px: f64, py: f64, wheel_delta: f64) -> bool {
        let target = if wheel_delta > 0.0 {
            self.cell_size + 1
        } else if wheel_delta < 0.0 {
            self.cell_size - 1
        } else {
            return false;
        };
        self.zoom_at(px, py, target)
    }

    /// Back to the origin, keeping the zoom level.
    pub fn reset_origin(&mut self) {
        self.offset_x = 0.0;
        self.offset_y = 0.0;
    }

    /// Inclusive corner cells of the area a `width` x `height` screen shows.
    pub fn visible_cells(&self, width: f64, height: f64) -> (Cell, Cell) {
        (self.screen_to_cell(0.0, 0.0), self.screen_to_cell(width, height))
    }

    pub fn vertical_lines(&self, width: f64) -> impl Iterator<Item = f64> {
        grid_lines(width, self.offset_x, self.cell_size)
    }

    pub fn horizontal_lines(&self, height: f64) -> impl Iterator<Item = f64> {
        grid_lines(height, self.offset_y, self.cell_size)
    }

    /// Camera position as shown to the user; y grows upwards on screen.
    pub fn display_coords(&self) -> (i64, i64) {
        (self.offset_x as i64, -self.offset_y as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_not_truncate() {
        assert_eq!(screen_to_cell(5.0, 5.0, 0.0, 0.0, 20), Cell::new(0, 0));
        assert_eq!(screen_to_cell(-1.0, -19.5, 0.0, 0.0, 20), Cell::new(-1, -1));
        assert_eq!(screen_to_cell(10.0, 10.0, -30.0, -50.0, 20), Cell::new(-1, -2));
        assert_eq!(screen_to_cell(0.0, 0.0, -20.0, 20.0, 20), Cell::new(-1, 1));
    }

    #[test]
    fn cell_to_screen_subtracts_offset() {
        assert_eq!(cell_to_screen(Cell::new(3, -2), 10.0, -5.5, 20), (50.0, -34.5));
    }

    #[test]
    fn screen_cell_round_trip() {
        let offsets = [(0.0, 0.0), (12.5, -37.25), (-1000.0, 333.0), (0.125, -0.75)];
        let cells = [Cell::new(0, 0), Cell::new(-1, -1), Cell::new(17, -42), Cell::new(-300, 999)];
        for size in [MIN_CELL_SIZE, 7, DEFAULT_CELL_SIZE, MAX_CELL_SIZE] {
            for &(ox, oy) in &offsets {
                for &cell in &cells {
                    let (sx, sy) = cell_to_screen(cell, ox, oy, size);
                    assert_eq!(screen_to_cell(sx, sy, ox, oy, size), cell, "{cell:?} {ox} {oy} {size}");
                }
            }
        }
    }

    #[test]
    fn zoom_keeps_cell_under_cursor() {
        let cases = [
            (130.0, 75.0, 10.0, -45.0, 20, 21),
            (5.0, 5.0, -100.0, -100.0, 10, 40),
            (400.0, 300.0, 0.0, 0.0, 20, 19),
            (64.0, 32.0, 256.0, -128.0, 16, 2),
        ];
        for (px, py, ox, oy, old, new) in cases {
            let before = screen_to_cell(px, py, ox, oy, old);
            let (nx, ny) = zoom_at(px, py, ox, oy, old, new);
            assert_eq!(screen_to_cell(px, py, nx, ny, new), before);
        }
    }

    #[test]
    fn zoom_blocked_by_clamp_keeps_offsets() {
        assert_eq!(zoom_at(10.0, 10.0, 3.5, -7.0, MAX_CELL_SIZE, 51), (3.5, -7.0));
        assert_eq!(zoom_at(10.0, 10.0, 3.5, -7.0, MIN_CELL_SIZE, 1), (3.5, -7.0));
    }

    #[test]
    fn zoom_request_outside_range_is_clamped() {
        let (ox, _) = zoom_at(0.0, 0.0, 100.0, 0.0, 20, 500);
        assert_eq!(ox, 100.0 / 20.0 * f64::from(MAX_CELL_SIZE));
    }

    #[test]
    fn pan_moves_camera_against_pointer() {
        assert_eq!(pan(10.0, 10.0, 4.0, -6.0), (6.0, 16.0));
    }

    #[test]
    fn viewport_zoom_step_respects_bounds() {
        let mut view = Viewport::new(MAX_CELL_SIZE);
        assert!(!view.zoom_step(10.0, 10.0, 1.0));
        assert!(view.zoom_step(10.0, 10.0, -1.0));
        assert_eq!(view.cell_size(), MAX_CELL_SIZE - 1);
        assert!(!view.zoom_step(10.0, 10.0, 0.0));

        let mut tiny = Viewport::new(MIN_CELL_SIZE);
        assert!(!tiny.zoom_step(0.0, 0.0, -3.0));
        assert_eq!(tiny.cell_size(), MIN_CELL_SIZE);
    }

    #[test]
    fn new_clamps_cell_size() {
        assert_eq!(Viewport::new(0).cell_size(), MIN_CELL_SIZE);
        assert_eq!(Viewport::new(99).cell_size(), MAX_CELL_SIZE);
        assert_eq!(Viewport::default().cell_size(), DEFAULT_CELL_SIZE);
    }

    #[test]
    fn pan_and_reset() {
        let mut view = Viewport::default();
        view.pan_by(30.0, -45.0);
        assert_eq!((view.offset_x, view.offset_y), (-30.0, 45.0));
        assert_eq!(view.display_coords(), (-30, -45));
        view.reset_origin();
        assert_eq!((view.offset_x, view.offset_y), (0.0, 0.0));
        assert_eq!(view.cell_size(), DEFAULT_CELL_SIZE);
    }

    #[test]
    fn visible_rectangle() {
        let mut view = Viewport::new(10);
        view.pan_by(15.0, -5.0);
        let (min, max) = view.visible_cells(100.0, 50.0);
        assert_eq!(min, Cell::new(-2, 0));
        assert_eq!(max, Cell::new(8, 5));
    }

    #[test]
    fn grid_lines_start_at_first_boundary() {
        let xs: Vec<f64> = grid_lines(50.0, 30.0, 20).collect();
        assert_eq!(xs, vec![10.0, 30.0]);

        let ys: Vec<f64> = grid_lines(45.0, -30.0, 20).collect();
        assert_eq!(ys, vec![10.0, 30.0]);

        let aligned: Vec<f64> = grid_lines(40.0, 0.0, 20).collect();
        assert_eq!(aligned, vec![0.0, 20.0]);
    }
}
