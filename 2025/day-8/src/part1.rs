use miette::*;

use crate::circuit::{Playground, Policy};
use crate::parser::{parse_points, Point};

/// Connects the closest pairs and multiplies the sizes of the three largest circuits.
///
/// The number of connections follows the puzzle: 10 for the example, 1000 otherwise.
#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let points = parse_points(input)?;
    let policy = Policy::auto_budget(points.len());
    solve(&points, policy)
}

/// Same as [`process`] with an explicit number of connections.
#[tracing::instrument(skip(input))]
pub fn process_with(input: &str, connections: i64) -> Result<String> {
    let policy = Policy::budget(connections)?;
    let points = parse_points(input)?;
    solve(&points, policy)
}

fn solve(points: &[Point], policy: Policy) -> Result<String> {
    let outcome = Playground::new(points, policy).run()?;
    let result = outcome
        .largest_circuits_product()
        .ok_or_else(|| miette!("A connection budget always reports circuit sizes"))?;

    Ok(result.to_string())
}
