//! hello-system - print the toolchain version, OS, architecture and CPU count

use std::process;

use clap::Parser;
use fundamentals_cli::{print_error, run, CommonArgs};
use fundamentals_config::Program;

#[derive(Parser)]
#[command(
    name = "hello-system",
    about = "Print the Rust version, operating system, architecture and CPU count",
    version
)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(Program::EnvReport, &cli.common) {
        print_error(&e);
        process::exit(1);
    }
}
