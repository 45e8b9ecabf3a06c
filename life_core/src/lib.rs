//! Conway's Game of Life on an unbounded grid.
//!
//! Live cells are kept in a hash set, so the plane has no edges and memory
//! follows the population rather than the area. [`step`] advances one
//! generation; [`viewport`] maps between screen pixels and cells for a UI.

mod cell;
mod engine;
mod grid;
pub mod viewport;

pub use cell::{Cell, NEIGHBOR_OFFSETS};
pub use engine::{alive_neighbors, next_state, step};
pub use grid::{GridState, SEED_CELLS};
pub use viewport::Viewport;

/// Initial state: the three-cell blinker at generation 0.
pub fn seed() -> GridState {
    GridState::seed()
}

/// By-value toggle, for callers threading state through.
pub fn toggle(state: GridState, cell: Cell) -> GridState {
    state.toggled(cell)
}

pub fn population(state: &GridState) -> usize {
    state.population()
}

pub fn generation(state: &GridState) -> u64 {
    state.generation()
}
