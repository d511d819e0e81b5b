pub mod action;
pub mod domain;
pub mod driver;
pub mod error;
pub mod extract;
pub mod graph;
pub mod ids;
pub mod layer;
pub mod pairset;
pub mod parsing;
pub mod problem;
pub mod proposition;

pub use driver::{graphplan, PlanOutcome};
pub use error::ParseError;
pub use extract::LayeredPlan;
pub use problem::{build_problem, Problem};
