use chumsky::prelude::*;
use glam::I64Vec3;
use itertools::Itertools;

use crate::error::CircuitError;

/// A junction box position. Its index in the input is its identity.
pub type Point = I64Vec3;

/// Largest coordinate magnitude accepted (2^61). Squared distances and
/// products of two coordinates stay inside `i128` up to this bound.
pub const MAX_COORD: i64 = 1 << 61;

pub fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Point>, extra::Err<Rich<'a, char>>> {
    let coord = just('-')
        .or_not()
        .then(text::int(10))
        .to_slice()
        .try_map(|digits: &str, span| {
            let value = digits
                .parse::<i64>()
                .map_err(|e| Rich::custom(span, format!("`{digits}` is not a coordinate: {e}")))?;
            if value.unsigned_abs() > MAX_COORD.unsigned_abs() {
                return Err(Rich::custom(
                    span,
                    format!("`{digits}` is beyond the ±{MAX_COORD} coordinate range"),
                ));
            }
            Ok(value)
        });

    // Blank or whitespace-only lines between boxes are skipped.
    let separator = text::inline_whitespace()
        .ignore_then(text::newline())
        .repeated()
        .at_least(1);

    let point = coord
        .then_ignore(just(','))
        .then(coord)
        .then_ignore(just(','))
        .then(coord)
        .map(|((x, y), z)| I64Vec3::new(x, y, z));

    point
        .separated_by(separator)
        .allow_trailing()
        .collect()
        .padded()
}

pub fn parse_points(input: &str) -> Result<Vec<Point>, CircuitError> {
    parser()
        .parse(input)
        .into_result()
        .map_err(|errs| CircuitError::Parse(errs.iter().map(ToString::to_string).join("; ")))
}
