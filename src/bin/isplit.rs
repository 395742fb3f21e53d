use std::process;

use clap::Parser;
use imgsplit::commands::run::{self, RunArgs};

#[derive(Debug, Parser)]
#[command(
    name = "isplit",
    about = "Split every image in a folder and rotate the halves"
)]
struct Cli {
    #[command(flatten)]
    run: RunArgs,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run::run(cli.run) {
        eprintln!("{err}");
        process::exit(1);
    }
}
