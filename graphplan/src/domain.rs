//! Domain instantiator: from `(cargos, rockets, places)` enumerate every
//! ground proposition and action of the Rocket domain, and precompute the
//! static action-independence table.
//!
//! This runs once, before any planning-graph layer is built; everything it
//! produces is read-only for the remainder of the planner's lifetime.

use crate::action::{Action, ActionKind, PropSet};
use crate::ids::{ActionId, ObjId, Objects, PropId};
use crate::pairset::PairSet;
use crate::proposition::Proposition;
use itertools::Itertools;
use std::collections::HashMap;
use std::fmt;

pub struct Domain {
    pub objects: Objects,
    propositions: Vec<Proposition>,
    prop_index: HashMap<Proposition, PropId>,
    actions: Vec<Action>,
    /// Actions whose positive effects include a given proposition, indexed
    /// by `PropId`. Static: independent of which layer an action sits in.
    producers: Vec<Vec<ActionId>>,
    /// Symmetric "dependent" relation over `ActionId`; `independent(a,b)`
    /// is the negation of membership here.
    dependent: PairSet<ActionId>,
}

impl Domain {
    pub fn num_propositions(&self) -> usize {
        self.propositions.len()
    }

    pub fn num_actions(&self) -> usize {
        self.actions.len()
    }

    pub fn proposition(&self, id: PropId) -> &Proposition {
        &self.propositions[usize::from(id)]
    }

    pub fn proposition_id(&self, p: &Proposition) -> Option<PropId> {
        self.prop_index.get(p).copied()
    }

    pub fn action(&self, id: ActionId) -> &Action {
        &self.actions[usize::from(id)]
    }

    pub fn action_ids(&self) -> impl Iterator<Item = ActionId> {
        (0..self.actions.len()).map(ActionId::new)
    }

    pub fn proposition_ids(&self) -> impl Iterator<Item = PropId> {
        (0..self.propositions.len()).map(PropId::new)
    }

    /// Actions whose positive effects contain `prop`.
    pub fn producers_of(&self, prop: PropId) -> &[ActionId] {
        &self.producers[usize::from(prop)]
    }

    /// `true` iff `a` and `b` are independent: neither's delete set touches
    /// the other's precondition or add set. Total over `actions x actions`,
    /// computed once in `build`.
    pub fn independent(&self, a: ActionId, b: ActionId) -> bool {
        a == b || !self.dependent.contains(a, b)
    }

    pub fn action_label(&self, id: ActionId) -> String {
        let action = self.action(id);
        match action.kind {
            ActionKind::Noop(p) => format!("NOOP {}", self.proposition(p).display(&self.objects)),
            _ => {
                struct W<'a>(&'a ActionKind, &'a Objects);
                impl fmt::Display for W<'_> {
                    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                        crate::action::fmt_kind(self.0, self.1, f, |_| Ok(()))
                    }
                }
                W(&action.kind, &self.objects).to_string()
            }
        }
    }

    fn intern_prop(&mut self, p: Proposition) -> PropId {
        if let Some(&id) = self.prop_index.get(&p) {
            return id;
        }
        let id = PropId::new(self.propositions.len());
        self.propositions.push(p);
        self.prop_index.insert(p, id);
        id
    }

    fn push_action(&mut self, kind: ActionKind, pre: PropSet, add: PropSet, del: PropSet) {
        self.actions.push(Action {
            kind,
            preconditions: pre,
            add_effects: add,
            del_effects: del,
        });
    }

    /// Builds the domain from disjoint, order-preserving object lists.
    pub fn build(cargos: &[String], rockets: &[String], places: &[String]) -> Domain {
        let mut objects = Objects::default();
        let cargo_ids: Vec<ObjId> = cargos.iter().map(|c| objects.intern(c)).collect();
        let rocket_ids: Vec<ObjId> = rockets.iter().map(|r| objects.intern(r)).collect();
        let place_ids: Vec<ObjId> = places.iter().map(|p| objects.intern(p)).collect();

        let mut d = Domain {
            objects,
            propositions: Vec::new(),
            prop_index: HashMap::new(),
            actions: Vec::new(),
            producers: Vec::new(),
            dependent: PairSet::new(0),
        };

        // §4.1: all ground propositions.
        for &c in &cargo_ids {
            for &r in &rocket_ids {
                d.intern_prop(Proposition::In(c, r));
            }
            for &p in &place_ids {
                d.intern_prop(Proposition::At(c, p));
            }
        }
        for &r in &rocket_ids {
            d.intern_prop(Proposition::HasFuel(r));
            for &p in &place_ids {
                d.intern_prop(Proposition::At(r, p));
            }
        }

        // §4.1: one NOOP per proposition, constructed first so their
        // `ActionId`s come before the "real" actions (mirrors the source
        // domain builder, which also emits NOOPs before LOAD/UNLOAD/MOVE).
        let all_props: Vec<PropId> = (0..d.propositions.len()).map(PropId::new).collect();
        for prop in all_props {
            let mut pre = PropSet::new();
            pre.push(prop);
            let mut add = PropSet::new();
            add.push(prop);
            d.push_action(ActionKind::Noop(prop), pre, add, PropSet::new());
        }

        // LOAD(c,r,p) / UNLOAD(c,r,p) for every (c,r,p).
        for &c in &cargo_ids {
            for &r in &rocket_ids {
                for &p in &place_ids {
                    let at_r_p = d.intern_prop(Proposition::At(r, p));
                    let at_c_p = d.intern_prop(Proposition::At(c, p));
                    let in_c_r = d.intern_prop(Proposition::In(c, r));

                    let mut pre = PropSet::new();
                    pre.push(at_r_p);
                    pre.push(at_c_p);
                    let mut add = PropSet::new();
                    add.push(in_c_r);
                    let mut del = PropSet::new();
                    del.push(at_c_p);
                    d.push_action(ActionKind::Load { cargo: c, rocket: r, place: p }, pre, add, del);

                    let mut pre = PropSet::new();
                    pre.push(at_r_p);
                    pre.push(in_c_r);
                    let mut add = PropSet::new();
                    add.push(at_c_p);
                    let mut del = PropSet::new();
                    del.push(in_c_r);
                    d.push_action(ActionKind::Unload { cargo: c, rocket: r, place: p }, pre, add, del);
                }
            }
        }

        // MOVE(r,p1,p2) for p1 != p2.
        for &r in &rocket_ids {
            for &p1 in &place_ids {
                for &p2 in &place_ids {
                    if p1 == p2 {
                        continue;
                    }
                    let at_r_p1 = d.intern_prop(Proposition::At(r, p1));
                    let has_fuel = d.intern_prop(Proposition::HasFuel(r));
                    let at_r_p2 = d.intern_prop(Proposition::At(r, p2));

                    let mut pre = PropSet::new();
                    pre.push(at_r_p1);
                    pre.push(has_fuel);
                    let mut add = PropSet::new();
                    add.push(at_r_p2);
                    let mut del = PropSet::new();
                    del.push(at_r_p1);
                    del.push(has_fuel);
                    d.push_action(ActionKind::Move { rocket: r, from: p1, to: p2 }, pre, add, del);
                }
            }
        }

        d.producers = vec![Vec::new(); d.propositions.len()];
        for (i, action) in d.actions.iter().enumerate() {
            let id = ActionId::new(i);
            for &p in &action.add_effects {
                d.producers[usize::from(p)].push(id);
            }
        }

        d.dependent = PairSet::new(d.actions.len());
        for (a, b) in d.action_ids().tuple_combinations() {
            if !are_independent(&d.actions[usize::from(a)], &d.actions[usize::from(b)]) {
                d.dependent.insert(a, b);
            }
        }

        tracing::debug!(
            propositions = d.propositions.len(),
            actions = d.actions.len(),
            "instantiated rocket domain"
        );

        d
    }
}

/// Two actions are independent iff no negative effect of either lies in the
/// other's preconditions or positive effects.
fn are_independent(a: &Action, b: &Action) -> bool {
    for &n in &a.del_effects {
        if b.preconditions.contains(&n) || b.add_effects.contains(&n) {
            return false;
        }
    }
    for &n in &b.del_effects {
        if a.preconditions.contains(&n) || a.add_effects.contains(&n) {
            return false;
        }
    }
    true
}
