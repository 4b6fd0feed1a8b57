//! The world to plan over and the landmarks resolved from it.

use trek_core::{Dungeon, Grid, Position, Symbol};

use crate::error::{MapId, RouteError};

/// The overworld and the three dungeon interiors, indexed by [`Dungeon`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quest {
    pub overworld: Grid,
    pub dungeons: [Grid; 3],
}

/// Entrance and pendant of one dungeon interior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interior {
    pub entrance: Position,
    pub target: Position,
}

/// A [`Quest`] with every landmark located.
///
/// Resolution happens once, before any search, so a missing or duplicated
/// landmark never costs a single A* call.
#[derive(Debug, Clone)]
pub struct QuestPlan {
    quest: Quest,
    start: Position,
    via: Option<Position>,
    destination: Position,
    doors: [Position; 3],
    interiors: [Interior; 3],
}

impl QuestPlan {
    /// Locate the landmarks of `quest`.
    ///
    /// The overworld must hold exactly one start `L`, one Master Sword `MS`
    /// and one door `M1`..`M3` per dungeon, plus at most one Lost Woods `LW`
    /// (visited right before the Master Sword when present). Each dungeon
    /// must hold exactly one entrance `E` and one pendant `P`.
    pub fn resolve(quest: Quest) -> Result<Self, RouteError> {
        let ow = &quest.overworld;
        let start = unique(ow, MapId::Overworld, Symbol::Start)?;
        let destination = unique(ow, MapId::Overworld, Symbol::MasterSword)?;
        let via = match ow.count(Symbol::LostWoods) {
            0 => None,
            1 => ow.locate(Symbol::LostWoods),
            found => {
                return Err(RouteError::Structural {
                    map: MapId::Overworld,
                    symbol: Symbol::LostWoods,
                    found,
                });
            }
        };

        let mut doors = [Position::ZERO; 3];
        let mut interiors = [Interior {
            entrance: Position::ZERO,
            target: Position::ZERO,
        }; 3];
        for d in Dungeon::ALL {
            doors[d.index()] = unique(ow, MapId::Overworld, Symbol::DungeonEntrance(d))?;
            let grid = &quest.dungeons[d.index()];
            interiors[d.index()] = Interior {
                entrance: unique(grid, MapId::Dungeon(d), Symbol::Entrance)?,
                target: unique(grid, MapId::Dungeon(d), Symbol::Pendant)?,
            };
        }

        log::debug!(
            "resolved quest: start {start}, doors {} {} {}, destination {destination}",
            doors[0],
            doors[1],
            doors[2]
        );

        Ok(Self {
            quest,
            start,
            via,
            destination,
            doors,
            interiors,
        })
    }

    pub fn overworld(&self) -> &Grid {
        &self.quest.overworld
    }

    pub fn dungeon_grid(&self, d: Dungeon) -> &Grid {
        &self.quest.dungeons[d.index()]
    }

    pub fn start(&self) -> Position {
        self.start
    }

    /// The Lost Woods, if the overworld has them.
    pub fn via(&self) -> Option<Position> {
        self.via
    }

    pub fn destination(&self) -> Position {
        self.destination
    }

    /// Overworld door of dungeon `d`.
    pub fn door(&self, d: Dungeon) -> Position {
        self.doors[d.index()]
    }

    pub fn interior(&self, d: Dungeon) -> Interior {
        self.interiors[d.index()]
    }
}

fn unique(grid: &Grid, map: MapId, symbol: Symbol) -> Result<Position, RouteError> {
    let found = grid.count(symbol);
    match grid.locate(symbol) {
        Some(p) if found == 1 => Ok(p),
        _ => Err(RouteError::Structural { map, symbol, found }),
    }
}
