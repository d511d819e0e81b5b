//! Recoverable error type for malformed fact files and problem instances.
//!
//! Everything here originates from untrusted input (the problem file), so it
//! is a `Result`, not a panic; arity mismatches baked into the domain's own
//! action constructors are a different matter (programmer error) and are
//! asserted instead.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("{path}:{line}: expected block header \"{expected}\", found {found:?}")]
    ExpectedBlockHeader {
        path: String,
        line: usize,
        expected: &'static str,
        found: String,
    },
    #[error("{path}: missing block \"{block}\" (reached end of file)")]
    MissingBlock { path: String, block: &'static str },
    #[error("{path}:{line}: malformed line {text:?} (expected \"( head arg1 arg2 ... )\")")]
    MalformedLine { path: String, line: usize, text: String },
    #[error("{path}:{line}: unknown object type {tpe:?} (expected CARGO, ROCKET or PLACE)")]
    UnknownObjectType { path: String, line: usize, tpe: String },
    #[error("{path}:{line}: unknown predicate {head:?} (expected at, in or has-fuel)")]
    UnknownPredicate { path: String, line: usize, head: String },
    #[error("{path}:{line}: {head} expects {expected} argument(s), got {got}")]
    WrongArity {
        path: String,
        line: usize,
        head: String,
        expected: usize,
        got: usize,
    },
    #[error("{path}:{line}: atom references unknown object {object:?}")]
    UnknownObject { path: String, line: usize, object: String },
    #[error("{path}:{line}: ( {head} {args} ) is not a proposition of this domain (check object types)")]
    AtomNotInDomain {
        path: String,
        line: usize,
        head: String,
        args: String,
    },
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
