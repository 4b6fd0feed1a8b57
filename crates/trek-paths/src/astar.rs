use std::collections::BinaryHeap;

use trek_core::Position;

use crate::PathRange;
use crate::pathrange::{NodeRef, PathSegment, UNREACHABLE};
use crate::traits::AstarPather;

impl PathRange {
    /// Compute the cheapest path from `from` to `to` using A*.
    ///
    /// Returns the full path (including both endpoints) with its cost, or
    /// `None` if either endpoint is out of range or no path exists. The
    /// search stops when the goal is popped from the open set, not when it
    /// is first discovered.
    pub fn astar_path<P: AstarPather>(
        &mut self,
        pather: &P,
        from: Position,
        to: Position,
    ) -> Option<PathSegment> {
        let start_idx = self.idx(from)?;
        let goal_idx = self.idx(to)?;

        if start_idx == goal_idx {
            return Some(PathSegment {
                positions: vec![from],
                cost: 0,
            });
        }

        // Bump generation to lazily invalidate all nodes.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut seq: u64 = 0;
        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            f: pather.estimate(from, to),
            seq,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut expanded = 0usize;

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };

            let ci = current.idx;

            // Skip stale entries.
            if self.nodes[ci].generation != cur_gen || !self.nodes[ci].open {
                continue;
            }

            if ci == goal_idx {
                break 'search true;
            }

            self.nodes[ci].open = false;
            expanded += 1;
            let current_g = self.nodes[ci].g;
            let current_pos = self.position(ci);

            nbuf.clear();
            pather.neighbors(current_pos, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative_g = current_g.saturating_add(pather.cost(current_pos, np));

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    if tentative_g >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                    n.g = UNREACHABLE;
                }

                n.g = tentative_g;
                n.parent = ci;
                n.open = true;

                seq += 1;
                open.push(NodeRef {
                    idx: ni,
                    f: tentative_g.saturating_add(pather.estimate(np, to)),
                    seq,
                });
            }
        };

        self.nbuf = nbuf;

        if !found {
            log::trace!("astar {from} -> {to}: no path after {expanded} expansions");
            return None;
        }

        let mut positions = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            positions.push(self.position(ci));
            ci = self.nodes[ci].parent;
        }
        positions.reverse();
        let cost = self.nodes[goal_idx].g;
        log::trace!(
            "astar {from} -> {to}: cost {cost}, {} tiles, {expanded} expansions",
            positions.len()
        );
        Some(PathSegment { positions, cost })
    }
}
