use crate::search::{NO_PARENT, Path, PathSearch};
use crate::traits::GridNode;

impl<N: GridNode> PathSearch<N> {
    /// Compute the cheapest path from `start` to `goal` using A*.
    ///
    /// Returns the full path (including both endpoints) and its cost, or
    /// `None` if the goal cannot be reached. An unreachable goal is a normal
    /// outcome, not an error.
    ///
    /// Passability is never checked here: an impassable start has no
    /// neighbors and an impassable goal is nobody's neighbor, so both simply
    /// yield `None`. The one exception is `start == goal`, which always
    /// returns the single-node path without searching.
    pub fn search(&mut self, start: N, goal: N) -> Option<Path<N>> {
        self.reset();

        if start == goal {
            return Some(Path {
                nodes: vec![start],
                cost: 0,
            });
        }

        let si = self.intern(start);
        self.states[si].g = 0;
        self.push_open(si, 0, start.heuristic(&goal));

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = self.open.pop() else {
                break 'search None;
            };

            let ci = current.idx;

            // Skip stale entries superseded by a cheaper push.
            if self.states[ci].closed || current.g != self.states[ci].g {
                continue;
            }

            if self.nodes[ci] == goal {
                break 'search Some(ci);
            }

            if self.max_expansions.is_some_and(|limit| self.expanded >= limit) {
                log::debug!(
                    "path search {start:?} -> {goal:?} stopped after {} expansions",
                    self.expanded
                );
                break 'search None;
            }

            self.states[ci].closed = true;
            self.expanded += 1;
            let current_node = self.nodes[ci];

            nbuf.clear();
            current_node.neighbors(&mut nbuf);

            for &np in nbuf.iter() {
                let tentative_g = current.g.saturating_add(np.step_cost(&current_node));

                let ni = match self.index.get(&np).copied() {
                    Some(ni) => {
                        let n = &self.states[ni];
                        if n.closed || tentative_g >= n.g {
                            continue;
                        }
                        ni
                    }
                    None => self.intern(np),
                };

                let n = &mut self.states[ni];
                n.g = tentative_g;
                n.parent = ci;

                self.push_open(ni, tentative_g, np.heuristic(&goal));
            }
        };

        self.nbuf = nbuf;

        let Some(goal_idx) = found else {
            log::debug!(
                "no path {start:?} -> {goal:?} ({} nodes expanded)",
                self.expanded
            );
            return None;
        };

        // Reconstruct path.
        let mut nodes = Vec::new();
        let mut ci = goal_idx;
        while ci != NO_PARENT {
            nodes.push(self.nodes[ci]);
            ci = self.states[ci].parent;
        }
        nodes.reverse();

        let cost = self.states[goal_idx].g;
        log::trace!(
            "path {start:?} -> {goal:?}: {} steps, cost {cost}, {} nodes expanded",
            nodes.len() - 1,
            self.expanded
        );
        Some(Path { nodes, cost })
    }
}

/// One-shot A* search with freshly allocated state.
///
/// Prefer a long-lived [`PathSearch`] when issuing many searches.
pub fn search<N: GridNode>(start: N, goal: N) -> Option<Path<N>> {
    PathSearch::new().search(start, goal)
}
