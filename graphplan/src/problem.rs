//! Resolves a [`ParsedProblem`] (raw strings) into a [`Domain`] plus interned
//! initial/goal proposition ids, the boundary between "syntax" (parsing.rs)
//! and "semantics" (domain.rs).

use crate::domain::Domain;
use crate::error::ParseError;
use crate::ids::PropId;
use crate::parsing::{ParsedProblem, RawAtom};
use crate::proposition::Proposition;

pub struct Problem {
    pub domain: Domain,
    pub init: Vec<PropId>,
    pub goal: Vec<PropId>,
}

pub fn build_problem(parsed: ParsedProblem, path: &str) -> Result<Problem, ParseError> {
    let domain = Domain::build(&parsed.cargos, &parsed.rockets, &parsed.places);
    let init = parsed
        .init
        .iter()
        .map(|atom| resolve_atom(&domain, atom, path))
        .collect::<Result<Vec<_>, _>>()?;
    let goal = parsed
        .goal
        .iter()
        .map(|atom| resolve_atom(&domain, atom, path))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Problem { domain, init, goal })
}

fn resolve_atom(domain: &Domain, atom: &RawAtom, path: &str) -> Result<PropId, ParseError> {
    let prop = match atom.head.as_str() {
        "at" => {
            expect_arity(atom, path, 2)?;
            Proposition::At(lookup(domain, atom, path, 0)?, lookup(domain, atom, path, 1)?)
        }
        "in" => {
            expect_arity(atom, path, 2)?;
            Proposition::In(lookup(domain, atom, path, 0)?, lookup(domain, atom, path, 1)?)
        }
        "has-fuel" => {
            expect_arity(atom, path, 1)?;
            Proposition::HasFuel(lookup(domain, atom, path, 0)?)
        }
        other => {
            return Err(ParseError::UnknownPredicate {
                path: path.to_string(),
                line: atom.line,
                head: other.to_string(),
            })
        }
    };
    domain.proposition_id(&prop).ok_or_else(|| ParseError::AtomNotInDomain {
        path: path.to_string(),
        line: atom.line,
        head: atom.head.clone(),
        args: atom.args.join(" "),
    })
}

fn expect_arity(atom: &RawAtom, path: &str, expected: usize) -> Result<(), ParseError> {
    if atom.args.len() == expected {
        Ok(())
    } else {
        Err(ParseError::WrongArity {
            path: path.to_string(),
            line: atom.line,
            head: atom.head.clone(),
            expected,
            got: atom.args.len(),
        })
    }
}

fn lookup(domain: &Domain, atom: &RawAtom, path: &str, index: usize) -> Result<crate::ids::ObjId, ParseError> {
    let name = &atom.args[index];
    domain.objects.get(name).ok_or_else(|| ParseError::UnknownObject {
        path: path.to_string(),
        line: atom.line,
        object: name.clone(),
    })
}
