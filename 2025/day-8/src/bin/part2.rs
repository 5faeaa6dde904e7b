use std::time::Instant;

use miette::*;

use aoc2025_day_8::{cli, part2};

fn main() -> Result<()> {
    let matches = cli::command(
        "part2",
        "Multiply the X coordinates of the last two boxes needed to join every circuit",
    )
    .get_matches();

    cli::init_tracing(matches.get_flag("verbose"));
    let path = matches
        .get_one::<String>("input")
        .ok_or_else(|| miette!("Missing input file"))?;
    let input = cli::read_input(path)?;

    let start = Instant::now();
    let result = part2::process(&input)?;
    tracing::info!(elapsed = ?start.elapsed(), "solved");

    println!("Result: {}", result);
    Ok(())
}
