//! data-collector - walk through declarations, types, sizes, conversions and scope

use std::process;

use clap::Parser;
use fundamentals_cli::{print_error, run, CommonArgs};
use fundamentals_config::Program;

#[derive(Parser)]
#[command(
    name = "data-collector",
    about = "Demonstrate variable declarations, inferred types, zero values, sizes and conversions",
    version
)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(Program::TypesDemo, &cli.common) {
        print_error(&e);
        process::exit(1);
    }
}
