use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use grid_search_greedy::{
    greedy_best_first_search, world, Coord, FrontierPolicy, SearchConfig, SearchOutcome,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Greedy best-first search over the built-in world")]
struct Cli {
    /// Start cell as `x,y`.
    #[arg(long, value_parser = parse_coord)]
    start: Option<Coord>,

    /// Goal cell as `x,y`.
    #[arg(long, value_parser = parse_coord)]
    goal: Option<Coord>,

    /// Only move north, south, east and west.
    #[arg(long)]
    orthogonal: bool,

    /// Disallow diagonal moves past a blocked orthogonal cell.
    #[arg(long)]
    no_corner_cutting: bool,

    /// Select nodes by scanning every discovered node.
    #[arg(long)]
    linear_scan: bool,

    /// Print the outcome as JSON.
    #[arg(long)]
    json: bool,
}

fn parse_coord(value: &str) -> Result<Coord> {
    let mut parts = value.split(',').map(str::trim);
    let (x, y) = match (parts.next(), parts.next(), parts.next()) {
        (Some(x), Some(y), None) => (x, y),
        _ => bail!("expected `x,y`, got {:?}", value),
    };
    let x = x.parse().with_context(|| format!("invalid x coordinate {:?}", x))?;
    let y = y.parse().with_context(|| format!("invalid y coordinate {:?}", y))?;
    Ok(Coord::new(x, y))
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish()
        .try_init()
        .map_err(anyhow::Error::msg)
        .context("failed to install tracing subscriber")
}

fn build_config(cli: &Cli) -> SearchConfig {
    let mut config = world::config().with_corner_cutting_prevented(cli.no_corner_cutting);
    if cli.orthogonal {
        config = config.with_diagonal(false);
    }
    if cli.linear_scan {
        config = config.with_frontier(FrontierPolicy::LinearScan);
    }
    config
}

fn report<W: Write>(outcome: &SearchOutcome, json: bool, out: &mut W) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, outcome)?;
        writeln!(out)?;
        return Ok(());
    }

    match outcome {
        SearchOutcome::Found { path, .. } => {
            writeln!(out, "Path found.")?;
            writeln!(out, "{}", path)?;
        }
        SearchOutcome::Exhausted { .. } => writeln!(out, "Path could not be found.")?,
    }
    Ok(())
}

fn main() -> Result<()> {
    init_tracing()?;
    let cli = Cli::parse();

    let grid = world::map();
    let start = cli.start.unwrap_or(world::START);
    let goal = cli.goal.unwrap_or(world::GOAL);
    let config = build_config(&cli);

    let outcome = greedy_best_first_search(&grid, start, goal, config).with_context(|| {
        format!(
            "failed to search from ({}, {}) to ({}, {})",
            start.x, start.y, goal.x, goal.y
        )
    })?;

    let stdout = io::stdout();
    report(&outcome, cli.json, &mut stdout.lock())
}
