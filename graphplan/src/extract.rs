//! Backward, goal-directed plan extraction over a `PlanningGraph`, with
//! nogood memoization (§4.3).

use crate::graph::{Nogood, PlanningGraph};
use crate::ids::{ActionId, PropId};
use std::collections::BTreeSet;

/// `[A_1, ..., A_k]`, one action set per level, NOOPs retained.
pub type LayeredPlan = Vec<Vec<ActionId>>;

impl PlanningGraph {
    /// `extract(goal_set, k)`.
    pub fn extract(&mut self, goal_set: &Nogood, k: usize) -> Option<LayeredPlan> {
        if k == 0 {
            // Graph-level termination (goal_reachable at the calling level)
            // already ensures goal_set is satisfied by the initial state.
            return Some(Vec::new());
        }
        if self.nogoods[k].contains(goal_set) {
            return None;
        }
        let remaining: Vec<PropId> = goal_set.iter().copied().collect();
        let mut chosen = Vec::new();
        match self.gp_search(&remaining, &mut chosen, k) {
            Some(plan) => Some(plan),
            None => {
                self.nogoods[k].insert(goal_set.clone());
                None
            }
        }
    }

    /// `gp_search(remaining_goals, chosen_actions, k)`.
    fn gp_search(&mut self, remaining: &[PropId], chosen: &mut Vec<ActionId>, k: usize) -> Option<LayeredPlan> {
        if remaining.is_empty() {
            let mut subgoal = BTreeSet::new();
            for &a in chosen.iter() {
                for &p in self.domain.action(a).preconditions.as_slice() {
                    subgoal.insert(p);
                }
            }
            let tail = self.extract(&subgoal, k - 1)?;
            let mut plan = tail;
            plan.push(chosen.clone());
            return Some(plan);
        }

        let phi = remaining[0];
        let rest = &remaining[1..];

        let layer_actions = &self.layers[k].actions;
        let mutex_actions = &self.layers[k].mutex_actions;
        let mut providers: Vec<ActionId> = self
            .domain
            .producers_of(phi)
            .iter()
            .copied()
            .filter(|&a| layer_actions.contains(usize::from(a)))
            .filter(|&a| chosen.iter().all(|&c| !mutex_actions.contains(a, c)))
            .collect();
        // NOOPs preferred: retain a fact rather than re-deriving it.
        providers.sort_by_key(|&a| (!self.domain.action(a).is_noop(), usize::from(a)));

        for provider in providers {
            chosen.push(provider);
            let add_effects = self.domain.action(provider).add_effects.clone();
            let remaining_after: Vec<PropId> = rest.iter().copied().filter(|p| !add_effects.contains(p)).collect();
            if let Some(plan) = self.gp_search(&remaining_after, chosen, k) {
                return Some(plan);
            }
            chosen.pop();
        }
        None
    }
}
