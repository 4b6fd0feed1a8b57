//! Route planning across the overworld and three dungeons.
//!
//! A journey starts at the hero's house, enters each dungeon through its
//! overworld door, fetches the pendant inside, comes back out, and finally
//! walks to the Master Sword (through the Lost Woods when the map has them).
//! The planner tries all six dungeon orders and keeps the cheapest.
//!
//! - [`QuestPlan::resolve`] locates every landmark up front and rejects
//!   malformed maps before any search runs.
//! - [`compose_route`] stitches the legs of one fixed order.
//! - [`plan_route`] / [`plan_route_with_cancel`] pick the best order.
//! - [`Route::timeline`] and [`PlaybackCursor`] support step-by-step replay.
//!
//! Planning is a pure function of its inputs: grids and configuration are
//! only read, so several plans may run on different threads at once.

mod compose;
mod config;
mod error;
mod optimize;
mod playback;
mod quest;
mod route;

pub use compose::compose_route;
pub use config::{HomewardPolicy, RouteConfig};
pub use error::{Leg, LegKind, MapId, RouteError};
pub use optimize::{ORDERS, plan_route, plan_route_with_cancel};
pub use playback::PlaybackCursor;
pub use quest::{Interior, Quest, QuestPlan};
pub use route::{Layer, OuterLeg, Route, Step, WaypointResult};

#[cfg(test)]
mod tests {
    use trek_core::{Dungeon, Grid, Position, Symbol};

    use super::*;

    fn random_quest() -> Quest {
        const TERRAIN: [Symbol; 5] = [
            Symbol::Grass,
            Symbol::Sand,
            Symbol::Forest,
            Symbol::Mountain,
            Symbol::Water,
        ];
        let n = 12;
        let mut rows: Vec<Vec<Symbol>> = (0..n)
            .map(|_| {
                (0..n)
                    .map(|_| TERRAIN[rand::random_range(0..TERRAIN.len())])
                    .collect()
            })
            .collect();
        let landmarks = [
            (Symbol::Start, 0, 0),
            (Symbol::DungeonEntrance(Dungeon::One), 0, 11),
            (Symbol::DungeonEntrance(Dungeon::Two), 11, 0),
            (Symbol::DungeonEntrance(Dungeon::Three), 6, 6),
            (Symbol::LostWoods, 3, 8),
            (Symbol::MasterSword, 11, 11),
        ];
        for (s, r, c) in landmarks {
            rows[r][c] = s;
        }
        let dungeon = Grid::parse(
            "\
E,CC,CC,CC
X,X,X,CC
CC,CC,X,CC
P,CC,CC,CC
",
            None,
        )
        .unwrap();
        Quest {
            overworld: Grid::from_rows(rows).unwrap(),
            dungeons: [dungeon.clone(), dungeon.clone(), dungeon],
        }
    }

    #[test]
    fn best_route_beats_every_order() {
        let plan = QuestPlan::resolve(random_quest()).unwrap();
        let config = RouteConfig::default();
        let best = plan_route(&plan, &config).unwrap();
        assert_eq!(best.total_cost, best.legs_cost());
        for order in ORDERS {
            let candidate = compose_route(&plan, &config, order).unwrap();
            assert_eq!(candidate.total_cost, candidate.legs_cost());
            assert!(best.total_cost <= candidate.total_cost);
        }
        // Idempotent.
        assert_eq!(plan_route(&plan, &config).unwrap().total_cost, best.total_cost);
    }

    #[test]
    fn route_replays_through_every_layer() {
        let plan = QuestPlan::resolve(random_quest()).unwrap();
        let route = plan_route(&plan, &RouteConfig::default()).unwrap();
        let timeline = route.timeline();
        assert_eq!(timeline.first().map(|s| s.pos), Some(plan.start()));
        assert_eq!(timeline.last().map(|s| s.pos), Some(plan.destination()));

        let mut cursor = PlaybackCursor::new(timeline.len());
        let mut shown = Vec::new();
        while let Some(i) = cursor.advance() {
            shown.push(timeline[i]);
            if i == timeline.len() / 2 {
                cursor.pause();
                assert_eq!(cursor.advance(), None);
                cursor.resume();
            }
        }
        assert_eq!(shown, timeline);

        for d in Dungeon::ALL {
            let layer = Layer::Dungeon(d);
            let inside: Vec<Position> = timeline
                .iter()
                .filter(|s| s.layer == layer)
                .map(|s| s.pos)
                .collect();
            let w = route.dungeon(d).unwrap();
            assert_eq!(inside.len(), w.outward.positions.len() + w.homeward.positions.len() - 1);
            assert_eq!(inside.first(), Some(&plan.interior(d).entrance));
            assert_eq!(inside.last(), Some(&plan.interior(d).entrance));
        }
    }

    #[test]
    fn plans_on_a_worker_thread() {
        let plan = QuestPlan::resolve(random_quest()).unwrap();
        let config = RouteConfig::default();
        let expected = plan_route(&plan, &config).unwrap();
        let handle = std::thread::spawn(move || plan_route(&plan, &config));
        let route = handle.join().unwrap().unwrap();
        assert_eq!(route.total_cost, expected.total_cost);
    }
}
