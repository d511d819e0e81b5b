//! Ground atoms of the Rocket domain.

use crate::ids::{ObjId, Objects};
use std::fmt;

/// A ground atom. The Rocket domain only ever produces three predicate
/// shapes, so rather than keeping a generic `(name, args)` pair (as the
/// source planner does) we close the enum over them: equality, hashing and
/// pattern matching all stay branch-free and allocation-free.
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub enum Proposition {
    /// `at(thing, place)`, thing is a cargo or a rocket.
    At(ObjId, ObjId),
    /// `in(cargo, rocket)`.
    In(ObjId, ObjId),
    /// `has-fuel(rocket)`.
    HasFuel(ObjId),
}

impl Proposition {
    pub fn display<'a>(&'a self, objects: &'a Objects) -> impl fmt::Display + 'a {
        DisplayProp(self, objects)
    }
}

struct DisplayProp<'a>(&'a Proposition, &'a Objects);

impl fmt::Display for DisplayProp<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let objects = self.1;
        match self.0 {
            Proposition::At(thing, place) => {
                write!(f, "(at {} {})", objects.name(*thing), objects.name(*place))
            }
            Proposition::In(cargo, rocket) => {
                write!(f, "(in {} {})", objects.name(*cargo), objects.name(*rocket))
            }
            Proposition::HasFuel(rocket) => write!(f, "(has-fuel {})", objects.name(*rocket)),
        }
    }
}
