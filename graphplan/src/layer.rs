//! A single level of the planning graph, and the mutex engine that decides
//! action-mutex and proposition-mutex relations.

use crate::domain::Domain;
use crate::ids::{ActionId, PropId};
use crate::pairset::PairSet;
use fixedbitset::FixedBitSet;
use itertools::Itertools;

/// Level `k` of the planning graph. `actions`/`mutex_actions`/link sets are
/// empty (not "undefined") at level 0, since there is no action layer below
/// the initial proposition layer.
pub struct Layer {
    pub propositions: FixedBitSet,
    pub actions: FixedBitSet,
    pub mutex_propositions: PairSet<PropId>,
    pub mutex_actions: PairSet<ActionId>,
    pub precond_links: Vec<(PropId, ActionId)>,
    pub add_links: Vec<(ActionId, PropId)>,
    pub del_links: Vec<(ActionId, PropId)>,
}

impl Layer {
    pub fn initial(domain: &Domain, init: &[PropId]) -> Layer {
        let mut propositions = FixedBitSet::with_capacity(domain.num_propositions());
        for &p in init {
            propositions.insert(usize::from(p));
        }
        Layer {
            propositions,
            actions: FixedBitSet::with_capacity(domain.num_actions()),
            mutex_propositions: PairSet::new(domain.num_propositions()),
            mutex_actions: PairSet::new(domain.num_actions()),
            precond_links: Vec::new(),
            add_links: Vec::new(),
            del_links: Vec::new(),
        }
    }

    pub fn has_proposition(&self, p: PropId) -> bool {
        self.propositions.contains(usize::from(p))
    }

    pub fn has_action(&self, a: ActionId) -> bool {
        self.actions.contains(usize::from(a))
    }

    /// I5: this layer's state is unchanged from `prev`.
    pub fn same_fixpoint_state(&self, prev: &Layer) -> bool {
        self.propositions == prev.propositions
            && self.actions == prev.actions
            && self.mutex_propositions == prev.mutex_propositions
            && self.mutex_actions == prev.mutex_actions
    }
}

/// §4.2 step 2: `a != b` and either they are dependent, or they compete for
/// a mutex pair of preconditions.
fn are_mutex_actions(domain: &Domain, a: ActionId, b: ActionId, prev_mutex_props: &PairSet<PropId>) -> bool {
    if a == b {
        return false;
    }
    if !domain.independent(a, b) {
        return true;
    }
    let action_a = domain.action(a);
    let action_b = domain.action(b);
    for &p in &action_a.preconditions {
        for &q in &action_b.preconditions {
            if prev_mutex_props.contains(p, q) {
                return true;
            }
        }
    }
    false
}

/// §4.2 step 4: `p != q` and every pair of producers of `p` and `q` present
/// in `actions` is itself action-mutex.
fn are_mutex_propositions(
    domain: &Domain,
    p: PropId,
    q: PropId,
    actions: &FixedBitSet,
    mutex_actions: &PairSet<ActionId>,
) -> bool {
    if p == q {
        return false;
    }
    let producers_p: Vec<ActionId> = domain
        .producers_of(p)
        .iter()
        .copied()
        .filter(|&a| actions.contains(usize::from(a)))
        .collect();
    let producers_q: Vec<ActionId> = domain
        .producers_of(q)
        .iter()
        .copied()
        .filter(|&a| actions.contains(usize::from(a)))
        .collect();
    // Vacuous truth only happens if one side has no producer in this layer,
    // which §4.2 notes cannot occur for a proposition actually in layer k+1.
    for &a in &producers_p {
        for &b in &producers_q {
            if a == b || !mutex_actions.contains(a, b) {
                return false;
            }
        }
    }
    true
}

/// Builds layer `k+1` from layer `k` (§4.2, steps 1-6 minus the nogood slot,
/// which the caller appends).
pub fn expand(domain: &Domain, prev: &Layer) -> Layer {
    let mut actions = FixedBitSet::with_capacity(domain.num_actions());
    for id in domain.action_ids() {
        let action = domain.action(id);
        let pre: &[PropId] = action.preconditions.as_slice();
        let all_present = pre.iter().all(|&p| prev.has_proposition(p));
        let no_competing_pair = (0..pre.len())
            .all(|i| (i + 1..pre.len()).all(|j| !prev.mutex_propositions.contains(pre[i], pre[j])));
        if all_present && no_competing_pair {
            actions.insert(usize::from(id));
        }
    }

    let mut mutex_actions = PairSet::new(domain.num_actions());
    let action_ids: Vec<ActionId> = actions.ones().map(ActionId::new).collect();
    for (a, b) in action_ids.iter().copied().tuple_combinations() {
        if are_mutex_actions(domain, a, b, &prev.mutex_propositions) {
            mutex_actions.insert(a, b);
        }
    }

    let mut propositions = FixedBitSet::with_capacity(domain.num_propositions());
    for &a in &action_ids {
        for &p in &domain.action(a).add_effects {
            propositions.insert(usize::from(p));
        }
    }

    let mut mutex_propositions = PairSet::new(domain.num_propositions());
    let prop_ids: Vec<PropId> = propositions.ones().map(PropId::new).collect();
    for (p, q) in prop_ids.iter().copied().tuple_combinations() {
        if are_mutex_propositions(domain, p, q, &actions, &mutex_actions) {
            mutex_propositions.insert(p, q);
        }
    }

    let mut precond_links = Vec::new();
    let mut add_links = Vec::new();
    let mut del_links = Vec::new();
    for &a in &action_ids {
        let action = domain.action(a);
        for &p in &action.preconditions {
            if prev.has_proposition(p) {
                precond_links.push((p, a));
            }
        }
        for &p in &action.add_effects {
            add_links.push((a, p));
        }
        for &p in &action.del_effects {
            del_links.push((a, p));
        }
    }

    Layer {
        propositions,
        actions,
        mutex_propositions,
        mutex_actions,
        precond_links,
        add_links,
        del_links,
    }
}
