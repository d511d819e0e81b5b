//! The outer `graphplan()` loop: alternate `expand`/`extract` until success,
//! unreachability, or level-off + nogood-fixpoint (§4.4).

use crate::domain::Domain;
use crate::extract::LayeredPlan;
use crate::graph::{Nogood, PlanningGraph};
use crate::ids::PropId;

#[derive(Debug)]
pub enum PlanOutcome {
    Solved(LayeredPlan),
    Unsolvable,
    /// Expansion would have gone past the configured level cap.
    LevelCapExceeded(usize),
}

/// Runs Graphplan to completion (or until `max_level` is hit).
///
/// `init`/`goal` are proposition ids already resolved against `domain`.
pub fn graphplan(domain: Domain, init: &[PropId], goal: &[PropId], max_level: Option<usize>) -> PlanOutcome {
    let goal_set: Nogood = goal.iter().copied().collect();
    let mut graph = PlanningGraph::new(domain, init);

    let mut k = 0;
    while !graph.goal_reachable(goal, k) && !graph.leveled_off() {
        if let Some(cap) = max_level {
            if k >= cap {
                return PlanOutcome::LevelCapExceeded(cap);
            }
        }
        k += 1;
        graph.expand();
    }
    if !graph.goal_reachable(goal, k) {
        tracing::info!(level = k, "graph leveled off before the goal became reachable");
        return PlanOutcome::Unsolvable;
    }

    let mut nogood_size = if graph.leveled_off() { graph.nogoods[k].len() } else { 0 };
    let mut plan = graph.extract(&goal_set, k);
    while plan.is_none() {
        if let Some(cap) = max_level {
            if k >= cap {
                return PlanOutcome::LevelCapExceeded(cap);
            }
        }
        k += 1;
        graph.expand();
        plan = graph.extract(&goal_set, k);
        if plan.is_none() && graph.leveled_off() {
            let last = graph.top_level();
            let size = graph.nogoods[last].len();
            if size == nogood_size {
                tracing::info!(level = last, "nogood table reached a fixpoint; problem is unsolvable");
                return PlanOutcome::Unsolvable;
            }
            nogood_size = size;
        }
    }

    PlanOutcome::Solved(plan.expect("loop only exits once a plan is found"))
}
