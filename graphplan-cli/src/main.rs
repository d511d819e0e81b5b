use anyhow::{Context, Result};
use clap::Parser;
use env_param::EnvParam;
use graphplan::domain::Domain;
use graphplan::driver::PlanOutcome;
use graphplan::parsing::parse_problem_file;
use graphplan::problem::build_problem;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Caps the number of planning-graph levels `expand()` is allowed to build
/// before the driver gives up and reports `LevelCapExceeded`. Unset means no
/// cap.
static PLANNER_MAX_LEVEL: EnvParam<i64> = EnvParam::new("PLANNER_MAX_LEVEL", "-1");

/// Graphplan solver for the Rocket logistics domain.
#[derive(Debug, Parser)]
#[command(name = "graphplan", rename_all = "kebab-case")]
struct Opt {
    /// Fact file describing objects, initial state and goal (§6 grammar).
    problem: PathBuf,

    /// Logging level: one of "error", "warn", "info", "debug", "trace".
    #[arg(long, default_value = "warn")]
    log_level: tracing::Level,

    /// Writes a per-level diagnostic summary of the planning graph to this
    /// file. Purely informational; never read back by the planner.
    #[arg(long)]
    trace: Option<PathBuf>,
}

fn main() -> Result<()> {
    let opt = Opt::parse();

    let subscriber = tracing_subscriber::fmt().with_max_level(opt.log_level).finish();
    tracing::subscriber::set_global_default(subscriber).context("failed to install log subscriber")?;

    let parsed = match parse_problem_file(&opt.problem) {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("parse error: {err}");
            std::process::exit(2);
        }
    };

    // `build_problem` consumes the parsed problem to build the domain that
    // actually drives the search; keep the object lists around so we can
    // rebuild an identical, read-only `Domain` afterwards purely to render
    // action labels once the driver (which takes the first domain by value)
    // has handed back a plan.
    let label_domain = Domain::build(&parsed.cargos, &parsed.rockets, &parsed.places);

    let path_display = opt.problem.display().to_string();
    let problem = match build_problem(parsed, &path_display) {
        Ok(problem) => problem,
        Err(err) => {
            eprintln!("parse error: {err}");
            std::process::exit(2);
        }
    };

    let max_level = {
        let raw = PLANNER_MAX_LEVEL.get();
        if raw < 0 {
            None
        } else {
            Some(raw as usize)
        }
    };

    let domain = problem.domain;
    let outcome = graphplan::graphplan(domain, &problem.init, &problem.goal, max_level);

    match outcome {
        PlanOutcome::Solved(plan) => {
            print_plan(&plan, &label_domain);
            if let Some(trace_path) = &opt.trace {
                write_trace_summary(trace_path, &plan, &label_domain)?;
            }
            Ok(())
        }
        PlanOutcome::Unsolvable => {
            println!("no plan exists");
            std::process::exit(1);
        }
        PlanOutcome::LevelCapExceeded(cap) => {
            eprintln!("expansion exceeded PLANNER_MAX_LEVEL={cap}");
            std::process::exit(3);
        }
    }
}

/// One line per level; NOOPs are elided since they carry no plan content.
fn print_plan(plan: &graphplan::LayeredPlan, domain: &Domain) {
    for (level, actions) in plan.iter().enumerate() {
        let rendered: Vec<String> = actions
            .iter()
            .copied()
            .filter(|&id| !domain.action(id).is_noop())
            .map(|id| domain.action_label(id))
            .collect();
        println!("{level}: {}", rendered.join(", "));
    }
}

fn write_trace_summary(path: &PathBuf, plan: &graphplan::LayeredPlan, domain: &Domain) -> Result<()> {
    let mut f = File::create(path).with_context(|| format!("failed to create trace file {}", path.display()))?;
    writeln!(f, "levels: {}", plan.len())?;
    for (level, actions) in plan.iter().enumerate() {
        let real = actions.iter().filter(|&&id| !domain.action(id).is_noop()).count();
        writeln!(f, "level {level}: {real} action(s), {} total (incl. NOOPs)", actions.len())?;
    }
    Ok(())
}
