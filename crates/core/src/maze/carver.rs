//! Randomized depth-first backtracking over a `Grid`.
//!
//! Runs on an explicit stack so large grids never grow the call stack. The stack top plays
//! the role of the "current cell": a cell stays on the stack until it has no unvisited
//! neighbors left, so the random draws happen in the same order a recursive carve would
//! make them.

use log::debug;
use rand_chacha::rand_core::Rng;
use serde::{Deserialize, Serialize};

use crate::types::{Pos, Wall};

use super::error::MazeError;
use super::grid::Grid;
use super::seed::random_index;

/// One carve step: the wall pair between `from` and `to` was cleared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passage {
    pub from: Pos,
    pub to: Pos,
    pub wall: Wall,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CarveOutcome {
    /// Cell most recently entered for the first time. `None` only for an empty grid.
    pub last_visited: Option<Pos>,
    /// Carve steps in the order they happened.
    pub passages: Vec<Passage>,
}

pub fn carve<R: Rng + ?Sized>(
    grid: &mut Grid,
    start: Pos,
    rng: &mut R,
) -> Result<CarveOutcome, MazeError> {
    if grid.is_empty() {
        return Ok(CarveOutcome::default());
    }
    if !grid.in_bounds(start) {
        return Err(MazeError::StartOutOfBounds {
            start,
            width: grid.width(),
            depth: grid.depth(),
        });
    }

    let mut passages = Vec::with_capacity(grid.len().saturating_sub(1));
    let mut stack = vec![start];
    grid.mark_visited(start);
    let mut last_visited = start;

    while let Some(&current) = stack.last() {
        let candidates = grid.unvisited_neighbors(current);
        if candidates.is_empty() {
            stack.pop();
            continue;
        }

        let (wall, next) = candidates[random_index(rng, candidates.len())];
        grid.open_between(current, next);
        grid.mark_visited(next);
        passages.push(Passage { from: current, to: next, wall });
        last_visited = next;
        stack.push(next);
    }

    debug!(
        "carved {}x{} grid from {:?}: {} passages, last visited {:?}",
        grid.width(),
        grid.depth(),
        start,
        passages.len(),
        last_visited
    );

    Ok(CarveOutcome { last_visited: Some(last_visited), passages })
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, VecDeque};

    use proptest::prelude::*;

    use super::*;
    use crate::maze::seed::rng_from_seed;

    fn carved(width: usize, depth: usize, seed: u64) -> (Grid, CarveOutcome) {
        let mut grid = Grid::new(width, depth);
        let mut rng = rng_from_seed(seed);
        let outcome = carve(&mut grid, Pos::new(0, 0), &mut rng).expect("origin is in bounds");
        (grid, outcome)
    }

    fn reachable_through_open_walls(grid: &Grid, start: Pos) -> BTreeSet<Pos> {
        let mut open = VecDeque::from([start]);
        let mut seen = BTreeSet::from([start]);
        while let Some(pos) = open.pop_front() {
            for wall in Wall::ALL {
                let next = pos.step(wall);
                if !grid.in_bounds(next) || grid.has_wall(pos, wall) || seen.contains(&next) {
                    continue;
                }
                seen.insert(next);
                open.push_back(next);
            }
        }
        seen
    }

    #[test]
    fn single_cell_grid_is_its_own_treasure() {
        let (grid, outcome) = carved(1, 1, 3);
        assert_eq!(outcome.last_visited, Some(Pos::new(0, 0)));
        assert!(outcome.passages.is_empty());
        assert!(grid.is_visited(Pos::new(0, 0)));
        assert_eq!(grid.open_passage_count(), 0);
    }

    #[test]
    fn two_by_one_opens_exactly_the_shared_wall() {
        let (grid, outcome) = carved(2, 1, 11);
        assert_eq!(
            outcome.passages,
            vec![Passage { from: Pos::new(0, 0), to: Pos::new(1, 0), wall: Wall::Right }]
        );
        assert_eq!(outcome.last_visited, Some(Pos::new(1, 0)));
        assert!(!grid.has_wall(Pos::new(0, 0), Wall::Right));
        assert!(!grid.has_wall(Pos::new(1, 0), Wall::Left));
        assert_eq!(grid.open_passage_count(), 1);
    }

    #[test]
    fn empty_grid_is_a_no_op() {
        for (width, depth) in [(0, 0), (0, 4), (4, 0)] {
            let (grid, outcome) = carved(width, depth, 1);
            assert!(grid.is_empty());
            assert_eq!(outcome, CarveOutcome::default());
        }
    }

    #[test]
    fn start_outside_grid_is_rejected() {
        let mut grid = Grid::new(3, 3);
        let mut rng = rng_from_seed(1);
        let err = carve(&mut grid, Pos::new(3, 0), &mut rng).expect_err("start is outside");
        assert_eq!(
            err,
            MazeError::StartOutOfBounds { start: Pos::new(3, 0), width: 3, depth: 3 }
        );
        assert!(grid.cells().all(|cell| !cell.visited));
    }

    #[test]
    fn last_visited_is_the_final_newly_entered_cell() {
        let (_, outcome) = carved(6, 5, 2_024);
        let last_passage = outcome.passages.last().expect("6x5 grid carves passages");
        assert_eq!(outcome.last_visited, Some(last_passage.to));
    }

    #[test]
    fn same_seed_repeats_carve_sequence() {
        let (grid_a, outcome_a) = carved(9, 7, 77);
        let (grid_b, outcome_b) = carved(9, 7, 77);
        assert_eq!(outcome_a, outcome_b);
        assert_eq!(grid_a, grid_b);
    }

    #[test]
    fn different_seeds_change_carve_sequence() {
        let (_, outcome_a) = carved(9, 7, 77);
        let (_, outcome_b) = carved(9, 7, 78);
        assert_ne!(outcome_a.passages, outcome_b.passages);
    }

    #[test]
    fn large_grid_does_not_exhaust_the_stack() {
        let (grid, outcome) = carved(400, 400, 5);
        assert_eq!(outcome.passages.len(), 400 * 400 - 1);
        assert!(grid.cells().all(|cell| cell.visited));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]
        #[test]
        fn carving_produces_a_spanning_tree(
            seed in any::<u64>(),
            width in 1_usize..16,
            depth in 1_usize..16,
        ) {
            let (grid, outcome) = carved(width, depth, seed);
            let cell_count = width * depth;

            prop_assert!(grid.cells().all(|cell| cell.visited), "every cell should be visited");
            prop_assert_eq!(outcome.passages.len(), cell_count - 1);
            prop_assert_eq!(grid.open_passage_count(), cell_count - 1);

            let entered: BTreeSet<Pos> = outcome.passages.iter().map(|passage| passage.to).collect();
            prop_assert_eq!(entered.len(), cell_count - 1, "no cell is entered twice");
            prop_assert!(!entered.contains(&Pos::new(0, 0)));

            let reachable = reachable_through_open_walls(&grid, Pos::new(0, 0));
            prop_assert_eq!(reachable.len(), cell_count);
        }

        #[test]
        fn cleared_walls_are_symmetric(
            seed in any::<u64>(),
            width in 1_usize..12,
            depth in 1_usize..12,
        ) {
            let (grid, _) = carved(width, depth, seed);
            for cell in grid.cells() {
                for wall in Wall::ALL {
                    let neighbor = cell.pos.step(wall);
                    if !grid.in_bounds(neighbor) {
                        prop_assert!(cell.has_wall(wall), "border walls stay intact");
                        continue;
                    }
                    prop_assert_eq!(
                        cell.has_wall(wall),
                        grid.has_wall(neighbor, wall.opposite())
                    );
                }
            }
        }
    }
}
