use anyhow::Result;
use clap::Parser;

use chstats_tools::export::{export, ExportArgs};
use chstats_tools::inspect::{inspect, InspectArgs};
use chstats_tools::tables::{tables, TablesArgs};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
enum Cli {
    Export(ExportArgs),
    Inspect(InspectArgs),
    Tables(TablesArgs),
}

fn main() -> Result<()> {
    env_logger::init();

    match Cli::parse_from(wild::args()) {
        Cli::Export(args) => export(args),
        Cli::Inspect(args) => inspect(&args),
        Cli::Tables(args) => tables(&args),
    }
}
