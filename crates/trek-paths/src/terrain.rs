//! Terrain cost model: per-symbol traversal costs and walkability filters.

use trek_core::{Dungeon, Grid, Position, Symbol};

use crate::distance::manhattan;
use crate::traits::{AstarPather, Pather, WeightedPather};

/// Cost charged for entering a tile whose symbol has no table entry.
///
/// Large enough that any route around such a tile is preferred, but the tile
/// stays enterable unless a [`WalkabilitySet`] excludes it.
pub const UNWALKABLE_COST: i32 = 9999;

/// Cost of every passable dungeon tile.
pub const DUNGEON_TILE_COST: i32 = 10;

/// Mapping from terrain symbol to the cost of entering a tile.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostTable {
    entries: Vec<(Symbol, i32)>,
}

impl CostTable {
    /// An empty table: every symbol costs [`UNWALKABLE_COST`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Overworld terrain costs.
    pub fn overworld() -> Self {
        Self::new()
            .with(Symbol::Grass, 10)
            .with(Symbol::Sand, 20)
            .with(Symbol::Forest, 100)
            .with(Symbol::Mountain, 150)
            .with(Symbol::Water, 180)
            .with(Symbol::Start, 10)
            .with(Symbol::LostWoods, 10)
            .with(Symbol::MasterSword, 10)
            .with(Symbol::DungeonEntrance(Dungeon::One), 20)
            .with(Symbol::DungeonEntrance(Dungeon::Two), 20)
            .with(Symbol::DungeonEntrance(Dungeon::Three), 20)
    }

    /// Dungeon interior costs: every passable tile costs the same.
    pub fn dungeon() -> Self {
        Self::new()
            .with(Symbol::ClearPath, DUNGEON_TILE_COST)
            .with(Symbol::Pendant, DUNGEON_TILE_COST)
            .with(Symbol::Entrance, DUNGEON_TILE_COST)
    }

    /// A table charging `cost` for each of `symbols`.
    pub fn uniform(symbols: &[Symbol], cost: i32) -> Self {
        symbols
            .iter()
            .fold(Self::new(), |table, &s| table.with(s, cost))
    }

    /// Builder-style [`CostTable::set`].
    pub fn with(mut self, symbol: Symbol, cost: i32) -> Self {
        self.set(symbol, cost);
        self
    }

    /// Set the cost of `symbol`, replacing any previous entry.
    ///
    /// Costs are non-negative: a negative `cost` is charged as zero.
    pub fn set(&mut self, symbol: Symbol, cost: i32) {
        match self.entries.iter_mut().find(|(s, _)| *s == symbol) {
            Some(entry) => entry.1 = cost,
            None => self.entries.push((symbol, cost)),
        }
    }

    /// The table entry for `symbol`, if any.
    pub fn get(&self, symbol: Symbol) -> Option<i32> {
        self.entries
            .iter()
            .find(|(s, _)| *s == symbol)
            .map(|&(_, c)| c)
    }

    /// Cost of entering a `symbol` tile, [`UNWALKABLE_COST`] on a miss.
    pub fn cost(&self, symbol: Symbol) -> i32 {
        self.get(symbol).map_or(UNWALKABLE_COST, |c| c.max(0))
    }

    /// Cost of entering the tile at `p`, or `None` if out of bounds.
    pub fn cost_of(&self, grid: &Grid, p: Position) -> Option<i32> {
        grid.at(p).map(|s| self.cost(s))
    }

    /// The smallest cost in the table, if any.
    pub fn min_cost(&self) -> Option<i32> {
        self.entries.iter().map(|&(_, c)| c.max(0)).min()
    }

    /// Lower bound on the cost of entering any tile, misses included.
    pub fn step_floor(&self) -> i32 {
        self.min_cost()
            .map_or(UNWALKABLE_COST, |c| c.min(UNWALKABLE_COST))
    }
}

/// Allow-list of enterable symbols.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WalkabilitySet {
    symbols: Vec<Symbol>,
}

impl WalkabilitySet {
    /// A set holding exactly `symbols`.
    pub fn new(symbols: &[Symbol]) -> Self {
        let mut set = Self::default();
        for &s in symbols {
            set.insert(s);
        }
        set
    }

    /// The passable tiles of a dungeon interior.
    pub fn dungeon() -> Self {
        Self::new(&[Symbol::ClearPath, Symbol::Pendant, Symbol::Entrance])
    }

    /// Add `symbol` to the set.
    pub fn insert(&mut self, symbol: Symbol) {
        if !self.symbols.contains(&symbol) {
            self.symbols.push(symbol);
        }
    }

    /// Whether `symbol` may be entered.
    pub fn contains(&self, symbol: Symbol) -> bool {
        self.symbols.contains(&symbol)
    }
}

/// Whether the tile at `p` may be entered: it must be in bounds and, when a
/// filter is given, its symbol must belong to it.
pub fn is_walkable(grid: &Grid, p: Position, walkable: Option<&WalkabilitySet>) -> bool {
    match grid.at(p) {
        Some(s) => walkable.is_none_or(|w| w.contains(s)),
        None => false,
    }
}

/// Pather over one map layer, parametrized by a cost table and an optional
/// walkability filter.
///
/// Moves are 4-directional. Costs are charged on entering a tile, so the
/// start tile is free. The estimate is the Manhattan distance scaled by the
/// table's [`CostTable::step_floor`], which keeps it admissible for any
/// table; with a zero-cost entry the search degrades to Dijkstra.
#[derive(Clone, Copy)]
pub struct TerrainPather<'a> {
    pub grid: &'a Grid,
    pub costs: &'a CostTable,
    pub walkable: Option<&'a WalkabilitySet>,
    floor: i32,
}

impl<'a> TerrainPather<'a> {
    /// Create a pather.
    pub fn new(grid: &'a Grid, costs: &'a CostTable, walkable: Option<&'a WalkabilitySet>) -> Self {
        Self {
            grid,
            costs,
            walkable,
            floor: costs.step_floor(),
        }
    }
}

impl Pather for TerrainPather<'_> {
    fn neighbors(&self, p: Position, buf: &mut Vec<Position>) {
        for n in p.neighbors_4() {
            if is_walkable(self.grid, n, self.walkable) {
                buf.push(n);
            }
        }
    }
}

impl WeightedPather for TerrainPather<'_> {
    fn cost(&self, _from: Position, to: Position) -> i32 {
        self.costs.cost_of(self.grid, to).unwrap_or(UNWALKABLE_COST)
    }
}

impl AstarPather for TerrainPather<'_> {
    fn estimate(&self, from: Position, to: Position) -> i32 {
        manhattan(from, to).saturating_mul(self.floor)
    }
}
