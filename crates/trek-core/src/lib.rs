//! **trek-core**: core types for tile-world route planning.
//!
//! This crate provides the foundational types shared by the *trek*
//! crates: tile coordinates, typed terrain symbols and the immutable map
//! grid together with its textual loader.

pub mod geom;
pub mod grid;
pub mod symbol;

pub use geom::{Bounds, Position};
pub use grid::{Grid, GridError};
pub use symbol::{Dungeon, Symbol};
