//! The `tables` subcommand

use crate::utils::InputArgs;
use anyhow::{Context, Result};
use chstats::cache::{Category, SongCache};
use clap::Args;
use colored::Colorize;

/// Arguments for the `tables` subcommand
#[derive(Args)]
#[clap(
    author,
    version,
    about = "Print the metadata lookup tables of the song cache",
    long_about = None
)]
pub struct TablesArgs {
    #[clap(flatten)]
    input: InputArgs,

    /// Print every entry, instead of just the table sizes
    #[clap(short, long)]
    verbose: bool,
}

/// Print the metadata lookup tables of the song cache
pub fn tables(args: &TablesArgs) -> Result<()> {
    let path = args.input.cache_path()?;
    let cache =
        SongCache::from_path(&path).context(format!("Could not read {}", path.display()))?;

    println!("{:<32}{} songs", path.display().to_string(), cache.len());

    for category in Category::ALL {
        let table = cache.tables().table(category);
        println!("{:<10} {:>6} entries", category.name().bold(), table.len());

        if args.verbose {
            for (index, entry) in table.iter().enumerate() {
                println!("  {index:>6} | {entry}");
            }
        }
    }

    Ok(())
}
