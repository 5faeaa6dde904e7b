pub mod circuit;
pub mod cli;
pub mod dsu;
pub mod error;
pub mod pairs;
pub mod parser;
pub mod part1;
pub mod part2;

pub use error::CircuitError;
