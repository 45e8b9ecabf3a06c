// grid.rs - Sparse grid state for Conway's Game of Life

use std::collections::HashSet;

use crate::Cell;

/// Cells alive at startup: a horizontal blinker at the origin.
pub const SEED_CELLS: [(i32, i32); 3] = [(0, 0), (1, 0), (2, 0)];

/// The live cells of one generation plus the generation counter.
///
/// Only live cells are stored, so the grid has no edges. A new value is built
/// for every generation; toggling edits the live set in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GridState {
    alive: HashSet<Cell>,
    generation: u64,
}

impl GridState {
    /// No live cells, generation 0.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The startup pattern at generation 0.
    pub fn seed() -> Self {
        Self::from_cells(SEED_CELLS.iter().copied().map(Cell::from))
    }

    /// Builds generation 0 from the given live cells. Duplicates collapse.
    pub fn from_cells<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = Cell>,
    {
        Self {
            alive: cells.into_iter().collect(),
            generation: 0,
        }
    }

    pub(crate) fn with_generation(alive: HashSet<Cell>, generation: u64) -> Self {
        Self { alive, generation }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.alive.contains(&cell)
    }

    /// Flips one cell between alive and dead. The generation is unchanged.
    pub fn toggle(&mut self, cell: Cell) {
        if !self.alive.remove(&cell) {
            self.alive.insert(cell);
        }
    }

    /// By-value form of [`GridState::toggle`].
    pub fn toggled(mut self, cell: Cell) -> Self {
        self.toggle(cell);
        self
    }

    pub fn population(&self) -> usize {
        self.alive.len()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_empty(&self) -> bool {
        self.alive.is_empty()
    }

    /// Live cells in no particular order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.alive.iter().copied()
    }

    pub(crate) fn alive(&self) -> &HashSet<Cell> {
        &self.alive
    }
}
