use std::time::Instant;

use clap::{value_parser, Arg};
use miette::*;

use aoc2025_day_8::{cli, part1};

fn main() -> Result<()> {
    let matches = cli::command(
        "part1",
        "Multiply the sizes of the three largest circuits after the closest connections",
    )
    .arg(
        Arg::new("connections")
            .short('c')
            .long("connections")
            .value_name("K")
            .allow_negative_numbers(true)
            .value_parser(value_parser!(i64))
            .help("Closest pairs to connect [default: 10 for up to 20 boxes, else 1000]"),
    )
    .get_matches();

    cli::init_tracing(matches.get_flag("verbose"));
    let path = matches
        .get_one::<String>("input")
        .ok_or_else(|| miette!("Missing input file"))?;
    let input = cli::read_input(path)?;

    let start = Instant::now();
    let result = match matches.get_one::<i64>("connections") {
        Some(&connections) => part1::process_with(&input, connections)?,
        None => part1::process(&input)?,
    };
    tracing::info!(elapsed = ?start.elapsed(), "solved");

    println!("Result: {}", result);
    Ok(())
}
