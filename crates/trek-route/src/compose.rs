//! Stitching one visiting order into a [`Route`].

use trek_core::{Dungeon, Position};
use trek_paths::{PathRange, PathSegment, TerrainPather};

use crate::config::{HomewardPolicy, RouteConfig};
use crate::error::{Leg, LegKind, RouteError};
use crate::quest::QuestPlan;
use crate::route::{OuterLeg, Route, WaypointResult};

/// Compose the route visiting the dungeons in `order`.
///
/// Fails with [`RouteError::Unreachable`] naming the first leg without a
/// path.
pub fn compose_route(
    plan: &QuestPlan,
    config: &RouteConfig,
    order: [Dungeon; 3],
) -> Result<Route, RouteError> {
    Composer::new(plan).compose(plan, config, order)
}

/// Search caches for both map layers, kept across the orders of one
/// optimizer run.
pub(crate) struct Composer {
    outer: PathRange,
    inner: PathRange,
}

impl Composer {
    pub(crate) fn new(plan: &QuestPlan) -> Self {
        Self {
            outer: PathRange::new(plan.overworld().bounds()),
            // Resized to each dungeon in `visit_dungeon` before any search.
            inner: PathRange::new(plan.dungeon_grid(Dungeon::One).bounds()),
        }
    }

    pub(crate) fn compose(
        &mut self,
        plan: &QuestPlan,
        config: &RouteConfig,
        order: [Dungeon; 3],
    ) -> Result<Route, RouteError> {
        let mut route = Route {
            total_cost: 0,
            order,
            outer_path: Vec::new(),
            outer_legs: Vec::with_capacity(5),
            dungeons: Vec::with_capacity(3),
        };

        let mut pos = plan.start();
        for d in order {
            let door = plan.door(d);
            self.walk_outer(plan, config, &mut route, LegKind::Approach(d), pos, door)?;
            let inside = self.visit_dungeon(plan, config, d)?;
            route.total_cost += inside.cost();
            route.dungeons.push(inside);
            pos = door;
        }

        if let Some(via) = plan.via() {
            self.walk_outer(plan, config, &mut route, LegKind::Via, pos, via)?;
            pos = via;
        }
        self.walk_outer(
            plan,
            config,
            &mut route,
            LegKind::Destination,
            pos,
            plan.destination(),
        )?;

        Ok(route)
    }

    fn walk_outer(
        &mut self,
        plan: &QuestPlan,
        config: &RouteConfig,
        route: &mut Route,
        kind: LegKind,
        from: Position,
        to: Position,
    ) -> Result<(), RouteError> {
        let pather = TerrainPather::new(
            plan.overworld(),
            &config.overworld_costs,
            config.overworld_walkable.as_ref(),
        );
        let segment = self
            .outer
            .astar_path(&pather, from, to)
            .ok_or(RouteError::Unreachable(Leg { kind, from, to }))?;
        log::trace!("{kind}: cost {}", segment.cost);

        // The first tile of a later leg is the last tile of the previous one.
        let skip = usize::from(!route.outer_path.is_empty());
        route
            .outer_path
            .extend(segment.positions.iter().skip(skip).copied());
        route.total_cost += segment.cost;
        route.outer_legs.push(OuterLeg { kind, segment });
        Ok(())
    }

    fn visit_dungeon(
        &mut self,
        plan: &QuestPlan,
        config: &RouteConfig,
        d: Dungeon,
    ) -> Result<WaypointResult, RouteError> {
        let grid = plan.dungeon_grid(d);
        let interior = plan.interior(d);
        let pather = TerrainPather::new(grid, &config.dungeon_costs, Some(&config.dungeon_walkable));
        self.inner.set_bounds(grid.bounds());

        let outward = self.interior_leg(&pather, LegKind::Outward(d), interior.entrance, interior.target)?;
        let homeward = match config.homeward {
            HomewardPolicy::Recompute => {
                self.interior_leg(&pather, LegKind::Homeward(d), interior.target, interior.entrance)?
            }
            HomewardPolicy::Reverse => outward.reversed(),
        };
        log::trace!("{d}: outward {}, homeward {}", outward.cost, homeward.cost);

        Ok(WaypointResult {
            dungeon: d,
            outward,
            homeward,
        })
    }

    fn interior_leg(
        &mut self,
        pather: &TerrainPather<'_>,
        kind: LegKind,
        from: Position,
        to: Position,
    ) -> Result<PathSegment, RouteError> {
        self.inner
            .astar_path(pather, from, to)
            .ok_or(RouteError::Unreachable(Leg { kind, from, to }))
    }
}

#[cfg(test)]
mod tests {
    use trek_core::{Grid, Symbol};

    use super::*;
    use crate::quest::Quest;

    const OVERWORLD: &str = "\
L,G,G,G,M1
G,A,A,A,G
G,G,S,G,G
M2,G,G,G,M3
G,G,LW,G,MS
";

    const DUNGEON: &str = "\
E,CC,CC
X,X,CC
P,CC,CC
";

    fn plan(overworld: &str, dungeons: [&str; 3]) -> QuestPlan {
        QuestPlan::resolve(Quest {
            overworld: Grid::parse(overworld, None).unwrap(),
            dungeons: dungeons.map(|d| Grid::parse(d, None).unwrap()),
        })
        .unwrap()
    }

    fn assert_invariants(route: &Route) {
        assert_eq!(route.total_cost, route.legs_cost());
        for w in route.outer_path.windows(2) {
            assert_ne!(w[0], w[1], "junction tile repeated");
            assert!(w[0].is_adjacent(w[1]));
        }
        let expected_len: usize =
            1 + route.outer_legs.iter().map(|l| l.segment.steps()).sum::<usize>();
        assert_eq!(route.outer_path.len(), expected_len);
    }

    #[test]
    fn composes_all_legs() {
        let plan = plan(OVERWORLD, [DUNGEON; 3]);
        let order = [Dungeon::One, Dungeon::Three, Dungeon::Two];
        let route = compose_route(&plan, &RouteConfig::default(), order).unwrap();
        assert_invariants(&route);
        assert_eq!(route.order, order);
        let kinds: Vec<LegKind> = route.outer_legs.iter().map(|l| l.kind).collect();
        assert_eq!(
            kinds,
            vec![
                LegKind::Approach(Dungeon::One),
                LegKind::Approach(Dungeon::Three),
                LegKind::Approach(Dungeon::Two),
                LegKind::Via,
                LegKind::Destination,
            ]
        );
        assert_eq!(route.outer_path.first(), Some(&plan.start()));
        assert_eq!(route.outer_path.last(), Some(&plan.destination()));
        // Each interior walk is 6 moves of 10.
        for w in &route.dungeons {
            assert_eq!(w.outward.cost, 60);
            assert_eq!(w.homeward.cost, 60);
            assert_eq!(w.outward.start(), Some(Position::new(0, 0)));
            assert_eq!(w.homeward.goal(), Some(Position::new(0, 0)));
        }
        // L -> M1: 4 moves (3 grass + door) = 50; M1 -> M3 down the right
        // column: G,G,M3 = 40; M3 -> M2 along row 3: 3 grass + door = 50;
        // M2 -> LW: G then G,LW = 30; LW -> MS: G,MS = 20.
        assert_eq!(route.outer_cost(), 50 + 40 + 50 + 30 + 20);
        assert_eq!(route.total_cost, route.outer_cost() + 3 * 120);
    }

    #[test]
    fn without_lost_woods_goes_straight_to_destination() {
        let plan = plan(&OVERWORLD.replace("LW", "G"), [DUNGEON; 3]);
        let route =
            compose_route(&plan, &RouteConfig::default(), [Dungeon::One, Dungeon::Two, Dungeon::Three])
                .unwrap();
        assert_invariants(&route);
        assert_eq!(route.outer_legs.len(), 4);
        assert_eq!(route.outer_legs[3].kind, LegKind::Destination);
    }

    #[test]
    fn homeward_policies_differ_on_uneven_tiles() {
        // Entrance tile expensive, pendant tile cheap: the recomputed walk
        // back pays for the entrance, the reversed one repeats the outward
        // cost which paid for the pendant.
        let plan = plan(OVERWORLD, ["E,CC,P\n", "E,P\n", "E,P\n"]);
        let mut config = RouteConfig::default();
        config.dungeon_costs.set(Symbol::Entrance, 50);
        config.dungeon_costs.set(Symbol::Pendant, 5);
        let order = [Dungeon::One, Dungeon::Two, Dungeon::Three];

        let recompute = compose_route(&plan, &config, order).unwrap();
        let one = recompute.dungeon(Dungeon::One).unwrap();
        assert_eq!(one.outward.cost, 10 + 5);
        assert_eq!(one.homeward.cost, 10 + 50);
        assert_invariants(&recompute);

        let config = config.with_homeward(HomewardPolicy::Reverse);
        let reverse = compose_route(&plan, &config, order).unwrap();
        let one = reverse.dungeon(Dungeon::One).unwrap();
        assert_eq!(one.homeward.cost, one.outward.cost);
        assert_eq!(
            one.homeward.positions,
            vec![Position::new(0, 2), Position::new(0, 1), Position::new(0, 0)]
        );
        assert_invariants(&reverse);
        assert!(reverse.total_cost < recompute.total_cost);
    }

    #[test]
    fn dungeons_of_different_sizes_share_one_cache() {
        let large = "\
E,CC,CC,CC,CC
X,X,X,X,CC
CC,CC,CC,CC,CC
CC,X,X,X,X
CC,CC,CC,CC,P
";
        let plan = plan(OVERWORLD, ["E,P\n", large, DUNGEON]);
        let mut composer = Composer::new(&plan);
        let config = RouteConfig::default();
        for order in [
            [Dungeon::One, Dungeon::Two, Dungeon::Three],
            [Dungeon::Three, Dungeon::Two, Dungeon::One],
        ] {
            let route = composer.compose(&plan, &config, order).unwrap();
            assert_invariants(&route);
            assert_eq!(route.dungeon(Dungeon::One).unwrap().outward.cost, 10);
            // 16 moves snaking down the large dungeon.
            assert_eq!(route.dungeon(Dungeon::Two).unwrap().outward.cost, 160);
            assert_eq!(route.dungeon(Dungeon::Three).unwrap().outward.cost, 60);
            let two = route.dungeon(Dungeon::Two).unwrap();
            assert_eq!(two.outward.goal(), Some(Position::new(4, 4)));
        }
    }

    #[test]
    fn walled_pendant_is_unreachable() {
        let plan = plan(OVERWORLD, [DUNGEON, "E,X,P\n", DUNGEON]);
        let err = compose_route(&plan, &RouteConfig::default(), [Dungeon::One, Dungeon::Two, Dungeon::Three])
            .unwrap_err();
        assert_eq!(
            err,
            RouteError::Unreachable(Leg {
                kind: LegKind::Outward(Dungeon::Two),
                from: Position::new(0, 0),
                to: Position::new(0, 2),
            })
        );
    }
}
