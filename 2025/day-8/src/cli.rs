use std::path::Path;

use clap::{Arg, ArgAction, Command};
use miette::*;
use tracing_subscriber::EnvFilter;

/// Arguments shared by both binaries: the input file and `--verbose`.
pub fn command(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .about(about)
        .arg(
            Arg::new("input")
                .value_name("FILE")
                .required(true)
                .help("Junction box positions, one `x,y,z` per line"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log every step at debug level"),
        )
}

/// `--verbose` forces `debug`, otherwise `RUST_LOG` decides and falls back to `warn`.
pub fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

pub fn read_input(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read {}", path.display()))
}
