//! The planner's output.

use trek_core::{Dungeon, Position};
use trek_paths::PathSegment;

use crate::error::LegKind;

/// An overworld leg of a route.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OuterLeg {
    pub kind: LegKind,
    pub segment: PathSegment,
}

/// What happened inside one dungeon.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaypointResult {
    pub dungeon: Dungeon,
    /// Entrance to pendant.
    pub outward: PathSegment,
    /// Pendant back to entrance.
    pub homeward: PathSegment,
}

impl WaypointResult {
    /// Combined cost of both interior walks.
    pub fn cost(&self) -> i32 {
        self.outward.cost + self.homeward.cost
    }
}

/// Map layer a [`Step`] takes place on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Layer {
    Overworld,
    Dungeon(Dungeon),
}

/// One tile of the complete journey.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    pub layer: Layer,
    pub pos: Position,
}

/// A fully stitched journey: start, the three dungeons in `order`, then the
/// destination.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub total_cost: i32,
    pub order: [Dungeon; 3],
    /// Every overworld leg concatenated, junction tiles kept once.
    pub outer_path: Vec<Position>,
    /// Overworld legs in walking order: one approach per dungeon, then the
    /// final approach (via the Lost Woods when present).
    pub outer_legs: Vec<OuterLeg>,
    /// Interior results in visiting order.
    pub dungeons: Vec<WaypointResult>,
}

impl Route {
    /// Sum of every leg's cost, overworld and interior.
    pub fn legs_cost(&self) -> i32 {
        let outer: i32 = self.outer_legs.iter().map(|l| l.segment.cost).sum();
        let inner: i32 = self.dungeons.iter().map(WaypointResult::cost).sum();
        outer + inner
    }

    /// Cost of the overworld legs alone.
    pub fn outer_cost(&self) -> i32 {
        self.outer_legs.iter().map(|l| l.segment.cost).sum()
    }

    /// Interior result for dungeon `d`.
    pub fn dungeon(&self, d: Dungeon) -> Option<&WaypointResult> {
        self.dungeons.iter().find(|w| w.dungeon == d)
    }

    /// Every tile of the journey in walking order, across both layers.
    ///
    /// Junction tiles between consecutive overworld legs appear once, and
    /// each dungeon's pendant appears once between its outward and homeward
    /// walks.
    pub fn timeline(&self) -> Vec<Step> {
        let mut steps = Vec::new();
        let mut outer_started = false;
        let mut push_outer = |steps: &mut Vec<Step>, leg: &OuterLeg| {
            let skip = usize::from(outer_started);
            outer_started = true;
            steps.extend(leg.segment.positions.iter().skip(skip).map(|&pos| Step {
                layer: Layer::Overworld,
                pos,
            }));
        };

        let mut legs = self.outer_legs.iter();
        for w in &self.dungeons {
            if let Some(leg) = legs.next() {
                push_outer(&mut steps, leg);
            }
            let layer = Layer::Dungeon(w.dungeon);
            steps.extend(w.outward.positions.iter().map(|&pos| Step { layer, pos }));
            steps.extend(
                w.homeward
                    .positions
                    .iter()
                    .skip(1)
                    .map(|&pos| Step { layer, pos }),
            );
        }
        for leg in legs {
            push_outer(&mut steps, leg);
        }
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(points: &[(i32, i32)], cost: i32) -> PathSegment {
        PathSegment {
            positions: points.iter().map(|&p| Position::from(p)).collect(),
            cost,
        }
    }

    fn sample() -> Route {
        let inner = |d| WaypointResult {
            dungeon: d,
            outward: seg(&[(0, 0), (0, 1)], 10),
            homeward: seg(&[(0, 1), (0, 0)], 10),
        };
        Route {
            total_cost: 110,
            order: [Dungeon::Two, Dungeon::One, Dungeon::Three],
            outer_path: vec![
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(0, 2),
                Position::new(0, 3),
                Position::new(1, 3),
            ],
            outer_legs: vec![
                OuterLeg {
                    kind: LegKind::Approach(Dungeon::Two),
                    segment: seg(&[(0, 0), (0, 1)], 10),
                },
                OuterLeg {
                    kind: LegKind::Approach(Dungeon::One),
                    segment: seg(&[(0, 1), (0, 2)], 10),
                },
                OuterLeg {
                    kind: LegKind::Approach(Dungeon::Three),
                    segment: seg(&[(0, 2), (0, 3)], 10),
                },
                OuterLeg {
                    kind: LegKind::Destination,
                    segment: seg(&[(0, 3), (1, 3)], 20),
                },
            ],
            dungeons: vec![inner(Dungeon::Two), inner(Dungeon::One), inner(Dungeon::Three)],
        }
    }

    #[test]
    fn costs_add_up() {
        let r = sample();
        assert_eq!(r.outer_cost(), 50);
        assert_eq!(r.legs_cost(), 110);
        assert_eq!(r.legs_cost(), r.total_cost);
        assert_eq!(r.dungeon(Dungeon::One).map(WaypointResult::cost), Some(20));
    }

    #[test]
    fn timeline_interleaves_layers() {
        let steps = sample().timeline();
        // 2 + 3 (first dungeon) + 1 + 3 + 1 + 3 + 1 (final leg)
        assert_eq!(steps.len(), 14);
        assert_eq!(
            steps[0],
            Step {
                layer: Layer::Overworld,
                pos: Position::new(0, 0)
            }
        );
        assert_eq!(steps[2].layer, Layer::Dungeon(Dungeon::Two));
        assert_eq!(steps[4].pos, Position::new(0, 0));
        assert_eq!(
            steps[5],
            Step {
                layer: Layer::Overworld,
                pos: Position::new(0, 2)
            }
        );
        assert_eq!(
            steps[13],
            Step {
                layer: Layer::Overworld,
                pos: Position::new(1, 3)
            }
        );
        let outer: Vec<Position> = steps
            .iter()
            .filter(|s| s.layer == Layer::Overworld)
            .map(|s| s.pos)
            .collect();
        assert_eq!(outer, sample().outer_path);
    }
}
