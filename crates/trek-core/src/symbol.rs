//! Terrain symbols.
//!
//! Map files spell terrain as short tokens (`G`, `LW`, `CC`, ...). Each token
//! maps to exactly one [`Symbol`] variant; anything else is rejected by the
//! loader.

use std::fmt;

/// One of the three dungeons, numbered 1 to 3 as on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dungeon {
    One,
    Two,
    Three,
}

impl Dungeon {
    /// All dungeons in map-numbering order.
    pub const ALL: [Dungeon; 3] = [Dungeon::One, Dungeon::Two, Dungeon::Three];

    /// Zero-based index (`One` is 0).
    pub const fn index(self) -> usize {
        match self {
            Dungeon::One => 0,
            Dungeon::Two => 1,
            Dungeon::Three => 2,
        }
    }

    /// Dungeon for a zero-based index.
    pub const fn from_index(idx: usize) -> Option<Dungeon> {
        match idx {
            0 => Some(Dungeon::One),
            1 => Some(Dungeon::Two),
            2 => Some(Dungeon::Three),
            _ => None,
        }
    }

    /// The number printed on the map (1, 2 or 3).
    pub const fn number(self) -> usize {
        self.index() + 1
    }
}

impl fmt::Display for Dungeon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dungeon {}", self.number())
    }
}

/// A terrain symbol of either map layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Symbol {
    // Overworld
    Grass,
    Sand,
    Forest,
    Mountain,
    Water,
    /// The hero's house, where the journey starts.
    Start,
    LostWoods,
    MasterSword,
    /// Overworld door leading into a dungeon.
    DungeonEntrance(Dungeon),
    // Dungeon interiors
    Wall,
    ClearPath,
    /// Interior side of the dungeon door.
    Entrance,
    Pendant,
}

impl Symbol {
    /// Parse a map token. Surrounding whitespace is ignored.
    pub fn parse(token: &str) -> Option<Symbol> {
        let s = match token.trim() {
            "G" => Symbol::Grass,
            "S" => Symbol::Sand,
            "F" => Symbol::Forest,
            "M" => Symbol::Mountain,
            "A" => Symbol::Water,
            "L" => Symbol::Start,
            "LW" => Symbol::LostWoods,
            "MS" => Symbol::MasterSword,
            "M1" => Symbol::DungeonEntrance(Dungeon::One),
            "M2" => Symbol::DungeonEntrance(Dungeon::Two),
            "M3" => Symbol::DungeonEntrance(Dungeon::Three),
            "X" => Symbol::Wall,
            "CC" => Symbol::ClearPath,
            "E" => Symbol::Entrance,
            "P" => Symbol::Pendant,
            _ => return None,
        };
        Some(s)
    }

    /// The map token for this symbol.
    pub fn token(self) -> &'static str {
        match self {
            Symbol::Grass => "G",
            Symbol::Sand => "S",
            Symbol::Forest => "F",
            Symbol::Mountain => "M",
            Symbol::Water => "A",
            Symbol::Start => "L",
            Symbol::LostWoods => "LW",
            Symbol::MasterSword => "MS",
            Symbol::DungeonEntrance(Dungeon::One) => "M1",
            Symbol::DungeonEntrance(Dungeon::Two) => "M2",
            Symbol::DungeonEntrance(Dungeon::Three) => "M3",
            Symbol::Wall => "X",
            Symbol::ClearPath => "CC",
            Symbol::Entrance => "E",
            Symbol::Pendant => "P",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
