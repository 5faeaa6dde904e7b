use miette::*;

use crate::circuit::{Playground, Policy};
use crate::parser::parse_points;

/// Connects closest pairs until every box shares one circuit, then multiplies
/// the X coordinates of the two boxes joined last.
#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let points = parse_points(input)?;

    let outcome = Playground::new(&points, Policy::FullyConnected).run()?;
    let result = outcome
        .last_connection_product(&points)
        .ok_or_else(|| miette!("Full connectivity always reports the last connection"))?;

    Ok(result.to_string())
}
