//! Ground action schemas: MOVE, LOAD, UNLOAD, NOOP.

use crate::ids::{ObjId, Objects, PropId};
use smallvec::SmallVec;
use std::fmt;

/// Preconditions and effect sets never hold more than two propositions in
/// this domain; a small vec avoids a heap allocation per action in the
/// common case.
pub type PropSet = SmallVec<[PropId; 2]>;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ActionKind {
    Move { rocket: ObjId, from: ObjId, to: ObjId },
    Load { cargo: ObjId, rocket: ObjId, place: ObjId },
    Unload { cargo: ObjId, rocket: ObjId, place: ObjId },
    Noop(PropId),
}

/// A ground action: its name/arguments plus the precomputed precondition
/// and add/delete effect sets (as interned proposition ids).
pub struct Action {
    pub kind: ActionKind,
    pub preconditions: PropSet,
    pub add_effects: PropSet,
    pub del_effects: PropSet,
}

impl Action {
    pub fn is_noop(&self) -> bool {
        matches!(self.kind, ActionKind::Noop(_))
    }
}

/// Renders an action's name and arguments, e.g. `MOVE r1 london paris`.
/// NOOPs render the proposition they carry, via the caller-supplied closure,
/// since `ActionKind::Noop` only stores a `PropId`.
pub(crate) fn fmt_kind(
    kind: &ActionKind,
    objects: &Objects,
    f: &mut fmt::Formatter<'_>,
    fmt_noop: impl FnOnce(&mut fmt::Formatter<'_>) -> fmt::Result,
) -> fmt::Result {
    match kind {
        ActionKind::Move { rocket, from, to } => {
            write!(f, "MOVE {} {} {}", objects.name(*rocket), objects.name(*from), objects.name(*to))
        }
        ActionKind::Load { cargo, rocket, place } => {
            write!(
                f,
                "LOAD {} {} {}",
                objects.name(*cargo),
                objects.name(*rocket),
                objects.name(*place)
            )
        }
        ActionKind::Unload { cargo, rocket, place } => {
            write!(
                f,
                "UNLOAD {} {} {}",
                objects.name(*cargo),
                objects.name(*rocket),
                objects.name(*place)
            )
        }
        ActionKind::Noop(_) => fmt_noop(f),
    }
}
