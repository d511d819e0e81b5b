//! Dense integer ids for objects, propositions and actions.
//!
//! Everything the planner hashes or compares on the hot path (state-set
//! membership, mutex lookups, producer lookups) goes through one of these
//! newtypes instead of through strings or structural equality, so that sets
//! of propositions/actions can be represented as bitsets.

use std::fmt;

/// Interned object identifier (a cargo, rocket or place name).
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub struct ObjId(u32);

/// Interned proposition identifier, dense over the whole domain.
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub struct PropId(u32);

/// Interned ground-action identifier, dense over the whole domain.
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub struct ActionId(u32);

macro_rules! dense_id {
    ($ty:ident) => {
        impl $ty {
            pub(crate) fn new(i: usize) -> Self {
                $ty(u32::try_from(i).expect("id space exceeds u32"))
            }
        }
        impl From<$ty> for usize {
            fn from(id: $ty) -> usize {
                id.0 as usize
            }
        }
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

dense_id!(ObjId);
dense_id!(PropId);
dense_id!(ActionId);

/// A string interner used for object names. Kept separate from the
/// proposition/action interning since object names come straight from the
/// fact-file parser.
#[derive(Clone, Debug, Default)]
pub struct Objects {
    names: Vec<String>,
    by_name: std::collections::HashMap<String, ObjId>,
}

impl Objects {
    pub fn intern(&mut self, name: &str) -> ObjId {
        if let Some(&id) = self.by_name.get(name) {
            return id;
        }
        let id = ObjId::new(self.names.len());
        self.names.push(name.to_string());
        self.by_name.insert(name.to_string(), id);
        id
    }

    pub fn get(&self, name: &str) -> Option<ObjId> {
        self.by_name.get(name).copied()
    }

    pub fn name(&self, id: ObjId) -> &str {
        &self.names[usize::from(id)]
    }
}
