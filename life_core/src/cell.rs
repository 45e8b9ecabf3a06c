// cell.rs - Cell coordinates on the unbounded grid

/// The eight neighbor offsets: {-1,0,1} x {-1,0,1} without (0,0).
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// A grid position. Coordinates are unbounded in both directions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The eight cells surrounding this one.
    pub fn neighbors(self) -> impl Iterator<Item = Cell> {
        NEIGHBOR_OFFSETS
            .iter()
            .map(move |&(dx, dy)| Cell::new(self.x + dx, self.y + dy))
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Cell::new(x, y)
    }
}
