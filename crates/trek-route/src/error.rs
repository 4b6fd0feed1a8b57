//! Route planning errors.

use std::fmt;

use trek_core::{Dungeon, Position, Symbol};

/// Which map a symbol was looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapId {
    Overworld,
    Dungeon(Dungeon),
}

impl fmt::Display for MapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overworld => write!(f, "overworld"),
            Self::Dungeon(d) => write!(f, "{d}"),
        }
    }
}

/// The role of one A* invocation within a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LegKind {
    /// Overworld walk to a dungeon's door.
    Approach(Dungeon),
    /// Inside a dungeon, from its entrance to the pendant.
    Outward(Dungeon),
    /// Inside a dungeon, from the pendant back to the entrance.
    Homeward(Dungeon),
    /// Overworld walk from the last dungeon to the Lost Woods.
    Via,
    /// Final overworld walk to the Master Sword.
    Destination,
}

impl fmt::Display for LegKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Approach(d) => write!(f, "approach to {d}"),
            Self::Outward(d) => write!(f, "{d} entrance to pendant"),
            Self::Homeward(d) => write!(f, "{d} pendant to entrance"),
            Self::Via => write!(f, "walk to the Lost Woods"),
            Self::Destination => write!(f, "walk to the destination"),
        }
    }
}

/// One search between two fixed endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Leg {
    pub kind: LegKind,
    pub from: Position,
    pub to: Position,
}

impl fmt::Display for Leg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} -> {}", self.kind, self.from, self.to)
    }
}

/// Errors raised while planning a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// A required symbol is missing from a map or appears more than once.
    Structural {
        map: MapId,
        symbol: Symbol,
        found: usize,
    },
    /// A leg of one candidate order has no path. The optimizer skips the
    /// order and keeps going.
    Unreachable(Leg),
    /// Every visiting order has an unreachable leg.
    NoValidRoute { orders: usize },
    /// The caller asked the optimizer to stop.
    Cancelled,
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Structural { map, symbol, found } => {
                if *found == 0 {
                    write!(f, "route: {map} has no \u{201c}{symbol}\u{201d} tile")
                } else {
                    write!(
                        f,
                        "route: {map} has {found} \u{201c}{symbol}\u{201d} tiles, expected one"
                    )
                }
            }
            Self::Unreachable(leg) => write!(f, "route: no path for {leg}"),
            Self::NoValidRoute { orders } => {
                write!(f, "route: none of the {orders} dungeon orders is walkable")
            }
            Self::Cancelled => write!(f, "route: planning cancelled"),
        }
    }
}

impl std::error::Error for RouteError {}
