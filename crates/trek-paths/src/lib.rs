//! Weighted A* pathfinding over terrain grids.
//!
//! The search runs over one [`Grid`] layer at a time, with 4-directional
//! moves. What a move costs and which tiles may be entered at all is decided
//! by a [`CostTable`] and an optional [`WalkabilitySet`], bundled into a
//! [`TerrainPather`].
//!
//! Searches go through [`PathRange`], which owns and reuses its node cache
//! so that the many legs of a route plan incur no allocations after
//! warm-up. [`find_path`] is a one-shot convenience wrapper.
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | neighbor enumeration |
//! | [`WeightedPather`] : [`Pather`] | per-move cost |
//! | [`AstarPather`] : [`WeightedPather`] | admissible heuristic |

mod astar;
mod distance;
mod pathrange;
mod terrain;
mod traits;

pub use distance::manhattan;
pub use pathrange::{PathRange, PathSegment, UNREACHABLE};
pub use terrain::{
    CostTable, DUNGEON_TILE_COST, TerrainPather, UNWALKABLE_COST, WalkabilitySet, is_walkable,
};
pub use traits::{AstarPather, Pather, WeightedPather};

use trek_core::{Grid, Position};

/// Cheapest path from `start` to `goal` on `grid`, or `None` when the goal
/// cannot be reached (including when either endpoint is out of bounds).
///
/// Allocates a fresh [`PathRange`]; use one directly for repeated queries.
pub fn find_path(
    grid: &Grid,
    start: Position,
    goal: Position,
    costs: &CostTable,
    walkable: Option<&WalkabilitySet>,
) -> Option<PathSegment> {
    let mut pr = PathRange::new(grid.bounds());
    pr.astar_path(&TerrainPather::new(grid, costs, walkable), start, goal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use trek_core::Symbol;

    #[test]
    fn find_path_one_shot() {
        let grid = Grid::filled(5, 5, Symbol::Grass);
        let costs = CostTable::overworld();
        let seg = find_path(&grid, Position::ZERO, Position::new(4, 4), &costs, None).unwrap();
        assert_eq!(seg.positions.len(), 9);
        assert_eq!(seg.cost, 80);
        assert!(find_path(&grid, Position::ZERO, Position::new(5, 0), &costs, None).is_none());
    }
}
