//! An immutable grid of terrain [`Symbol`]s.
//!
//! A [`Grid`] is built once, either from typed rows or from the textual
//! comma-delimited map format, and is never mutated afterwards. Every query
//! is bounds-checked.

use std::fmt;

use crate::geom::{Bounds, Position};
use crate::symbol::Symbol;

/// A rectangular map layer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GridRepr"))]
pub struct Grid {
    cells: Vec<Symbol>,
    bounds: Bounds,
}

/// Unchecked wire form of a [`Grid`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GridRepr {
    cells: Vec<Symbol>,
    bounds: Bounds,
}

#[cfg(feature = "serde")]
impl TryFrom<GridRepr> for Grid {
    type Error = GridError;

    fn try_from(repr: GridRepr) -> Result<Self, GridError> {
        if repr.bounds.is_empty() {
            return Err(GridError::Empty);
        }
        if repr.cells.len() != repr.bounds.len() {
            return Err(GridError::CellCount {
                expected: repr.bounds.len(),
                found: repr.cells.len(),
            });
        }
        Ok(Self {
            cells: repr.cells,
            bounds: repr.bounds,
        })
    }
}

impl Grid {
    /// Build a grid from typed rows. Every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<Symbol>>) -> Result<Self, GridError> {
        let Some(first) = rows.first() else {
            return Err(GridError::Empty);
        };
        let width = first.len();
        if width == 0 {
            return Err(GridError::Empty);
        }
        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, r) in rows.iter().enumerate() {
            if r.len() != width {
                return Err(GridError::InconsistentWidth {
                    row,
                    expected: width,
                    found: r.len(),
                });
            }
            cells.extend_from_slice(r);
        }
        Ok(Self {
            cells,
            bounds: Bounds::new(rows.len() as i32, width as i32),
        })
    }

    /// A grid of the given size where every tile holds `symbol`.
    pub fn filled(height: i32, width: i32, symbol: Symbol) -> Self {
        let bounds = Bounds::new(height, width);
        Self {
            cells: vec![symbol; bounds.len()],
            bounds,
        }
    }

    /// Parse the textual map format: one row per line, tiles separated by
    /// commas. Blank lines are skipped and tokens are trimmed.
    ///
    /// When `expected_size` is given, the map must be exactly that many rows
    /// and columns.
    pub fn parse(text: &str, expected_size: Option<usize>) -> Result<Self, GridError> {
        let mut rows = Vec::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let row = rows.len() as i32;
            let mut symbols = Vec::new();
            for (col, token) in line.split(',').enumerate() {
                let token = token.trim();
                let Some(s) = Symbol::parse(token) else {
                    return Err(GridError::UnknownSymbol {
                        token: token.to_string(),
                        pos: Position::new(row, col as i32),
                    });
                };
                symbols.push(s);
            }
            rows.push(symbols);
        }
        let grid = Self::from_rows(rows)?;
        if let Some(size) = expected_size {
            let (h, w) = (grid.height() as usize, grid.width() as usize);
            if h != size || w != size {
                return Err(GridError::WrongSize {
                    expected: size,
                    rows: h,
                    cols: w,
                });
            }
        }
        Ok(grid)
    }

    /// The extent of this grid.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of columns.
    pub fn width(&self) -> i32 {
        self.bounds.width
    }

    /// Number of rows.
    pub fn height(&self) -> i32 {
        self.bounds.height
    }

    /// Whether `p` addresses a tile of this grid.
    pub fn contains(&self, p: Position) -> bool {
        self.bounds.contains(p)
    }

    /// The symbol at `p`, or `None` if out of bounds.
    pub fn at(&self, p: Position) -> Option<Symbol> {
        self.bounds.index(p).map(|i| self.cells[i])
    }

    /// First position holding `symbol`, scanning rows top to bottom and each
    /// row left to right.
    pub fn locate(&self, symbol: Symbol) -> Option<Position> {
        self.cells
            .iter()
            .position(|&c| c == symbol)
            .map(|i| self.bounds.position(i))
    }

    /// Count how many tiles hold `symbol`.
    pub fn count(&self, symbol: Symbol) -> usize {
        self.cells.iter().filter(|&&c| c == symbol).count()
    }

    /// Iterate over `(Position, Symbol)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Symbol)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// The symbols of row `row`, or `None` if out of bounds.
    pub fn row(&self, row: i32) -> Option<&[Symbol]> {
        if row < 0 || row >= self.bounds.height {
            return None;
        }
        let w = self.bounds.width as usize;
        let start = row as usize * w;
        Some(&self.cells[start..start + w])
    }
}

/// Errors that can occur when building a [`Grid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// No rows, or rows without tiles.
    Empty,
    /// A row's length differs from the first row's.
    InconsistentWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The map is not of the expected square size.
    WrongSize {
        expected: usize,
        rows: usize,
        cols: usize,
    },
    /// A token that names no terrain.
    UnknownSymbol { token: String, pos: Position },
    /// The number of tiles does not match the grid's extent.
    CellCount { expected: usize, found: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: no tiles"),
            Self::InconsistentWidth {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has {found} tiles, expected {expected}"
            ),
            Self::WrongSize {
                expected,
                rows,
                cols,
            } => write!(
                f,
                "grid: expected {expected}x{expected} tiles, found {rows}x{cols}"
            ),
            Self::UnknownSymbol { token, pos } => {
                write!(f, "grid: unknown symbol \u{201c}{token}\u{201d} at {pos}")
            }
            Self::CellCount { expected, found } => {
                write!(f, "grid: {found} tiles for an extent of {expected}")
            }
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::Dungeon;

    const SMALL: &str = "\
G, S, M1
F, L, A

MS, LW, G
";

    #[test]
    fn parse_and_size() {
        let g = Grid::parse(SMALL, Some(3)).unwrap();
        assert_eq!(g.width(), 3);
        assert_eq!(g.height(), 3);
        assert_eq!(g.at(Position::new(0, 2)), Some(Symbol::DungeonEntrance(Dungeon::One)));
        assert_eq!(g.at(Position::new(2, 0)), Some(Symbol::MasterSword));
        assert_eq!(g.at(Position::new(3, 0)), None);
        assert_eq!(g.at(Position::new(0, -1)), None);
    }

    #[test]
    fn parse_wrong_size() {
        let err = Grid::parse(SMALL, Some(4)).unwrap_err();
        assert_eq!(
            err,
            GridError::WrongSize {
                expected: 4,
                rows: 3,
                cols: 3
            }
        );
    }

    #[test]
    fn parse_inconsistent_width() {
        let err = Grid::parse("G,G\nG\n", None).unwrap_err();
        assert_eq!(
            err,
            GridError::InconsistentWidth {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn parse_unknown_symbol() {
        let err = Grid::parse("G,G\nG,Q\n", None).unwrap_err();
        assert_eq!(
            err,
            GridError::UnknownSymbol {
                token: "Q".into(),
                pos: Position::new(1, 1)
            }
        );
        assert!(err.to_string().contains("(1, 1)"));
    }

    #[test]
    fn parse_empty() {
        assert_eq!(Grid::parse("\n\n", None).unwrap_err(), GridError::Empty);
    }

    #[test]
    fn locate_first_row_major() {
        let g = Grid::parse("G,P\nP,G\n", None).unwrap();
        assert_eq!(g.locate(Symbol::Pendant), Some(Position::new(0, 1)));
        assert_eq!(g.count(Symbol::Pendant), 2);
        assert_eq!(g.locate(Symbol::Wall), None);
        assert_eq!(g.count(Symbol::Wall), 0);
    }

    #[test]
    fn iter_and_rows() {
        let g = Grid::parse(SMALL, None).unwrap();
        let items: Vec<_> = g.iter().collect();
        assert_eq!(items.len(), 9);
        assert_eq!(items[4], (Position::new(1, 1), Symbol::Start));
        assert_eq!(g.row(2), Some(&[Symbol::MasterSword, Symbol::LostWoods, Symbol::Grass][..]));
        assert_eq!(g.row(3), None);
    }

    #[test]
    fn filled_grid() {
        let g = Grid::filled(4, 5, Symbol::Grass);
        assert_eq!(g.count(Symbol::Grass), 20);
        assert_eq!(g.bounds(), Bounds::new(4, 5));
    }
}
