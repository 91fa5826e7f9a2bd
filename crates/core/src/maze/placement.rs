//! Treasure and enemy spawn placement on a carved grid.

use log::warn;
use rand_chacha::rand_core::Rng;

use crate::types::Pos;

use super::grid::Grid;
use super::seed::random_index;

/// Picks up to `count` distinct inner cells uniformly at random.
///
/// Requests beyond the number of inner cells are skipped, so the result may be shorter than
/// `count`. The picks are returned in draw order.
pub fn pick_spawn_cells<R: Rng + ?Sized>(grid: &Grid, count: usize, rng: &mut R) -> Vec<Pos> {
    let mut pool = grid.inner_cells();
    if count > pool.len() {
        warn!(
            "requested {count} enemy spawns but the {}x{} grid has {} inner cells; skipping {}",
            grid.width(),
            grid.depth(),
            pool.len(),
            count - pool.len()
        );
    }

    let take = count.min(pool.len());
    for slot in 0..take {
        let pick = slot + random_index(rng, pool.len() - slot);
        pool.swap(slot, pick);
    }
    pool.truncate(take);
    pool
}
