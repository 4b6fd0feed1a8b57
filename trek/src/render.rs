//! Plain-terminal rendering of maps and route summaries.

use std::collections::HashSet;
use std::fmt::Write as _;

use crossterm::style::{Color, Stylize};
use trek_core::{Grid, Position, Symbol};
use trek_route::{Layer, Route, Step};

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb { r, g, b }
}

const GRASS: Color = rgb(146, 208, 80);
const SAND: Color = rgb(196, 188, 150);
const FOREST: Color = rgb(0, 176, 80);
const MOUNTAIN: Color = rgb(148, 138, 84);
const WATER: Color = rgb(84, 141, 212);
const DOOR: Color = rgb(255, 99, 71);
const WALL: Color = rgb(62, 47, 15);
const CLEAR: Color = rgb(211, 211, 211);
const PENDANT: Color = rgb(255, 20, 147);
const ENTRANCE: Color = rgb(0, 255, 0);
const HERO: Color = rgb(255, 255, 85);

fn symbol_color(s: Symbol) -> Color {
    match s {
        Symbol::Grass | Symbol::LostWoods | Symbol::Start | Symbol::MasterSword => GRASS,
        Symbol::Sand => SAND,
        Symbol::Forest => FOREST,
        Symbol::Mountain => MOUNTAIN,
        Symbol::Water => WATER,
        Symbol::DungeonEntrance(_) => DOOR,
        Symbol::Wall => WALL,
        Symbol::ClearPath => CLEAR,
        Symbol::Pendant => PENDANT,
        Symbol::Entrance => ENTRANCE,
    }
}

/// Draw `grid` one row per line, marking every tile of `path` with a bold
/// hero glyph.
pub fn render_grid(grid: &Grid, path: &[Position]) -> String {
    let on_path: HashSet<Position> = path.iter().copied().collect();
    let mut out = String::new();
    for row in 0..grid.height() {
        let Some(cells) = grid.row(row) else {
            break;
        };
        for (col, &s) in cells.iter().enumerate() {
            if on_path.contains(&Position::new(row, col as i32)) {
                let _ = write!(out, "{} ", "L ".with(HERO).bold());
            } else {
                let _ = write!(out, "{} ", format!("{:<2}", s.token()).with(symbol_color(s)));
            }
        }
        out.push('\n');
    }
    out
}

/// One-paragraph textual summary of a route.
pub fn summary(route: &Route) -> String {
    let order: Vec<String> = route.order.iter().map(|d| d.number().to_string()).collect();
    let mut out = String::new();
    let _ = writeln!(out, "Best dungeon order: {}", order.join(", "));
    let _ = writeln!(out, "Total cost: {}", route.total_cost);
    let _ = writeln!(out, "Overworld cost: {}", route.outer_cost());
    for w in &route.dungeons {
        let _ = writeln!(
            out,
            "  {}: {} (in {}, out {})",
            w.dungeon,
            w.cost(),
            w.outward.cost,
            w.homeward.cost
        );
    }
    out
}

/// One line describing step `idx` of `total`.
pub fn step_line(step: Step, idx: usize, total: usize, progress: f32) -> String {
    let layer = match step.layer {
        Layer::Overworld => "overworld".to_string(),
        Layer::Dungeon(d) => d.to_string(),
    };
    format!("{}/{} ({progress:.1}%) {layer} {}", idx + 1, total, step.pos)
}
