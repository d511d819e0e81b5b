//! End-to-end scenarios over the full pipeline: fact text -> parsed problem
//! -> domain + plan -> plan shape. Mirrors the Rocket domain's textbook
//! examples (trivial goal, single hop, load/move/unload, parallel loads,
//! fuel exhaustion, and a goal that is mutex at the level it first appears).

use graphplan::domain::Domain;
use graphplan::driver::PlanOutcome;
use graphplan::parsing::parse_problem_str;
use graphplan::problem::build_problem;
use graphplan::LayeredPlan;

fn solve(text: &str) -> PlanOutcome {
    let parsed = parse_problem_str(text, "<test>").expect("fixture should parse");
    let problem = build_problem(parsed, "<test>").expect("fixture should resolve");
    graphplan::graphplan(problem.domain, &problem.init, &problem.goal, None)
}

/// Rebuilds a `Domain` from the same object lists purely to inspect actions
/// (`graphplan` takes the solving domain by value).
fn label_domain(text: &str) -> Domain {
    let parsed = parse_problem_str(text, "<test>").expect("fixture should parse");
    Domain::build(&parsed.cargos, &parsed.rockets, &parsed.places)
}

fn real_action_count(plan: &LayeredPlan, domain: &Domain) -> usize {
    plan.iter().flatten().filter(|&&id| !domain.action(id).is_noop()).count()
}

#[test]
fn trivial_goal_already_satisfied() {
    let text = "OBJECTS\n\
( r1 ROCKET )\n\
( p1 PLACE )\n\
\n\
INIT\n\
( at r1 p1 )\n\
( has-fuel r1 )\n\
\n\
GOAL\n\
( at r1 p1 )\n";

    match solve(text) {
        PlanOutcome::Solved(plan) => assert!(plan.is_empty(), "no actions needed when the goal already holds"),
        other => panic!("expected Solved, got {other:?}"),
    }
}

#[test]
fn single_move_reaches_goal() {
    let text = "OBJECTS\n\
( r1 ROCKET )\n\
( p1 PLACE )\n\
( p2 PLACE )\n\
\n\
INIT\n\
( at r1 p1 )\n\
( has-fuel r1 )\n\
\n\
GOAL\n\
( at r1 p2 )\n";

    let domain = label_domain(text);
    match solve(text) {
        PlanOutcome::Solved(plan) => {
            assert_eq!(plan.len(), 1, "one hop should need exactly one level");
            assert_eq!(real_action_count(&plan, &domain), 1);
        }
        other => panic!("expected Solved, got {other:?}"),
    }
}

#[test]
fn load_move_unload_chain() {
    let text = "OBJECTS\n\
( c1 CARGO )\n\
( r1 ROCKET )\n\
( p1 PLACE )\n\
( p2 PLACE )\n\
\n\
INIT\n\
( at c1 p1 )\n\
( at r1 p1 )\n\
( has-fuel r1 )\n\
\n\
GOAL\n\
( at c1 p2 )\n";

    let domain = label_domain(text);
    match solve(text) {
        PlanOutcome::Solved(plan) => {
            assert_eq!(plan.len(), 3, "LOAD, MOVE and UNLOAD cannot share a level");
            assert_eq!(real_action_count(&plan, &domain), 3);
        }
        other => panic!("expected Solved, got {other:?}"),
    }
}

#[test]
fn parallel_load_of_two_cargos() {
    let text = "OBJECTS\n\
( c1 CARGO )\n\
( c2 CARGO )\n\
( r1 ROCKET )\n\
( p1 PLACE )\n\
\n\
INIT\n\
( at c1 p1 )\n\
( at c2 p1 )\n\
( at r1 p1 )\n\
( has-fuel r1 )\n\
\n\
GOAL\n\
( in c1 r1 )\n\
( in c2 r1 )\n";

    let domain = label_domain(text);
    match solve(text) {
        PlanOutcome::Solved(plan) => {
            assert_eq!(plan.len(), 1, "loading two independent cargos should be parallel");
            assert_eq!(real_action_count(&plan, &domain), 2);
        }
        other => panic!("expected Solved, got {other:?}"),
    }
}

#[test]
fn fuel_exhaustion_is_unsolvable() {
    // The rocket starts away from the cargo, so reaching the cargo's
    // destination needs two hops (pick up, then deliver). A single unit of
    // fuel with no refuel action can only pay for one.
    let text = "OBJECTS\n\
( c1 CARGO )\n\
( r1 ROCKET )\n\
( p1 PLACE )\n\
( p2 PLACE )\n\
( p3 PLACE )\n\
\n\
INIT\n\
( at c1 p1 )\n\
( at r1 p2 )\n\
( has-fuel r1 )\n\
\n\
GOAL\n\
( at c1 p3 )\n";

    match solve(text) {
        PlanOutcome::Unsolvable => {}
        other => panic!("expected Unsolvable, got {other:?}"),
    }
}

#[test]
fn mutex_goal_resolved_one_level_later() {
    // At level 1, loading the cargo and moving the rocket are mutex (both
    // need `at r1 p1`, and MOVE deletes it) so their effects can't be a
    // joint goal yet. By level 2 the conflict is gone (`NOOP(in c1 r1)` and
    // `MOVE` no longer compete) and the goal becomes reachable.
    let text = "OBJECTS\n\
( c1 CARGO )\n\
( r1 ROCKET )\n\
( p1 PLACE )\n\
( p2 PLACE )\n\
\n\
INIT\n\
( at c1 p1 )\n\
( at r1 p1 )\n\
( has-fuel r1 )\n\
\n\
GOAL\n\
( in c1 r1 )\n\
( at r1 p2 )\n";

    let domain = label_domain(text);
    match solve(text) {
        PlanOutcome::Solved(plan) => {
            assert_eq!(plan.len(), 2, "the goal pair is mutex at level 1 and only resolves at level 2");
            assert_eq!(real_action_count(&plan, &domain), 2);
        }
        other => panic!("expected Solved, got {other:?}"),
    }
}

#[test]
fn unknown_predicate_is_a_parse_error() {
    let text = "OBJECTS\n\
( r1 ROCKET )\n\
( p1 PLACE )\n\
\n\
INIT\n\
( at r1 p1 )\n\
\n\
GOAL\n\
( flies r1 p1 )\n";

    let parsed = parse_problem_str(text, "<test>").expect("fixture should parse at the syntax level");
    let err = build_problem(parsed, "<test>").unwrap_err();
    assert!(matches!(err, graphplan::ParseError::UnknownPredicate { .. }));
}
