//! The planning graph proper: an append-only sequence of layers plus the
//! per-level nogood table, and the driver-facing queries over them
//! (`goal_reachable`, `leveled_off`).

use crate::domain::Domain;
use crate::ids::PropId;
use crate::layer::{self, Layer};
use std::collections::{BTreeSet, HashSet};

pub type Nogood = BTreeSet<PropId>;

pub struct PlanningGraph {
    pub domain: Domain,
    pub layers: Vec<Layer>,
    pub nogoods: Vec<HashSet<Nogood>>,
}

impl PlanningGraph {
    pub fn new(domain: Domain, init: &[PropId]) -> PlanningGraph {
        let layer0 = Layer::initial(&domain, init);
        PlanningGraph {
            domain,
            layers: vec![layer0],
            nogoods: vec![HashSet::new()],
        }
    }

    pub fn top_level(&self) -> usize {
        self.layers.len() - 1
    }

    /// §4.2: appends layer k+1 and a fresh nogood slot for it.
    pub fn expand(&mut self) {
        let next = layer::expand(&self.domain, self.layers.last().expect("at least one layer"));
        tracing::debug!(
            level = self.layers.len(),
            propositions = next.propositions.count_ones(..),
            actions = next.actions.count_ones(..),
            mutex_actions = next.mutex_actions.len(),
            mutex_propositions = next.mutex_propositions.len(),
            "expanded planning graph"
        );
        self.layers.push(next);
        self.nogoods.push(HashSet::new());
    }

    /// `G ⊆ propositions(layer)` and no pair of `G` is mutex at that layer.
    pub fn goal_reachable(&self, goal: &[PropId], level: usize) -> bool {
        let layer = &self.layers[level];
        if !goal.iter().all(|&p| layer.has_proposition(p)) {
            return false;
        }
        for (i, &p) in goal.iter().enumerate() {
            for &q in &goal[i + 1..] {
                if layer.mutex_propositions.contains(p, q) {
                    return false;
                }
            }
        }
        true
    }

    /// §4.4: the graph stopped changing between the last two layers.
    pub fn leveled_off(&self) -> bool {
        let k = self.top_level();
        k >= 1 && self.layers[k].same_fixpoint_state(&self.layers[k - 1])
    }
}
