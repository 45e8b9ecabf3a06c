// engine.rs - Generation advance over the sparse grid

use std::collections::HashSet;

use log::trace;

use crate::{Cell, GridState};

/// Conway's rule for one cell.
pub fn next_state(current_alive: bool, count: usize) -> bool {
    match (current_alive, count) {
        (true, 2) | (true, 3) => true,   // Survival
        (false, 3)            => true,   // Birth
        _                     => false,  // Death or stays dead
    }
}

/// Number of `cell`'s neighbors present in `alive`.
pub fn alive_neighbors(alive: &HashSet<Cell>, cell: Cell) -> usize {
    cell.neighbors().filter(|n| alive.contains(n)).count()
}

/// Computes the next generation from `state`.
///
/// Only live cells and their neighbors can change, so those are the only
/// candidates examined. Counts are always taken from the input set, never the
/// one being built.
pub fn step(state: &GridState) -> GridState {
    let current = state.alive();

    let mut candidates: HashSet<Cell> = HashSet::with_capacity(current.len() * 9);
    for &cell in current {
        candidates.insert(cell);
        candidates.extend(cell.neighbors());
    }

    let next: HashSet<Cell> = candidates
        .into_iter()
        .filter(|&cell| next_state(current.contains(&cell), alive_neighbors(current, cell)))
        .collect();

    let next = GridState::with_generation(next, state.generation() + 1);
    trace!("generation {} population {}", next.generation(), next.population());
    next
}
