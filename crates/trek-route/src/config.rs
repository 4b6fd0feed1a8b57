//! Planner configuration.

use trek_paths::{CostTable, WalkabilitySet};

/// How the walk back out of a dungeon is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HomewardPolicy {
    /// Run a fresh search from the pendant to the entrance. Costs are
    /// charged for the tiles entered in that direction, so the entrance is
    /// paid for and the pendant is not.
    #[default]
    Recompute,
    /// Walk the outward path backwards and charge the outward cost again.
    Reverse,
}

/// Cost model and policies for one planning run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteConfig {
    pub overworld_costs: CostTable,
    /// Overworld tiles that may be entered. `None` lets every tile be
    /// entered, symbols without a cost entry at the sentinel cost.
    pub overworld_walkable: Option<WalkabilitySet>,
    pub dungeon_costs: CostTable,
    pub dungeon_walkable: WalkabilitySet,
    pub homeward: HomewardPolicy,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            overworld_costs: CostTable::overworld(),
            overworld_walkable: None,
            dungeon_costs: CostTable::dungeon(),
            dungeon_walkable: WalkabilitySet::dungeon(),
            homeward: HomewardPolicy::default(),
        }
    }
}

impl RouteConfig {
    /// Builder-style setter for [`RouteConfig::homeward`].
    pub fn with_homeward(mut self, homeward: HomewardPolicy) -> Self {
        self.homeward = homeward;
        self
    }
}
