//! pptflow - end-to-end verification CLI for a presentation editor's project API
//!
//! Creates, lists, opens and saves a throwaway project against a running
//! service and reports pass/fail for each step.

use clap::Parser;
use pptflow::commands::{Commands, GlobalArgs};
use pptflow::{cli, common::logging};

#[derive(Parser)]
#[command(name = "pptflow", about = "End-to-end check of the presentation project API")]
#[command(version, long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    logging::init_cli(cli.global.verbose);

    if let Err(e) = cli::dispatch(cli.command, cli.global).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
