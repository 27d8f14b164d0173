use clap::Parser;
use entrygauge::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
