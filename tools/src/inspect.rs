//! The `inspect` subcommand

use crate::{export::format_playtime, utils::InputArgs};
use anyhow::Result;
use chstats::{library::SongRecord, Checksum};
use clap::Args;
use colored::Colorize;

/// Arguments for the `inspect` subcommand
#[derive(Args)]
#[clap(
    author,
    version,
    about = "Print the played songs along with their scores",
    long_about = None
)]
pub struct InspectArgs {
    #[clap(flatten)]
    input: InputArgs,

    /// Only print the song with this checksum. Can be repeated
    #[clap(short, long = "song")]
    songs: Vec<Checksum>,
}

/// Print the played songs along with their scores
pub fn inspect(args: &InspectArgs) -> Result<()> {
    let library = args.input.load_library()?;

    if args.songs.is_empty() {
        let mut first = true;
        for song in library.songs() {
            if first {
                first = false;
            } else {
                println!();
            }

            print_song(song);
        }

        println!();
        println!(
            "{} songs played, for a total of {}",
            library.len(),
            format_playtime(library.playtime()).bold()
        );
    } else {
        for (index, checksum) in args.songs.iter().enumerate() {
            if index > 0 {
                println!();
            }

            match library.song(checksum) {
                Some(song) => print_song(song),
                None => println!("No scores found for {}", checksum.to_string().dimmed()),
            }
        }
    }

    Ok(())
}

fn print_song(song: &SongRecord) {
    match &song.metadata {
        Some(metadata) => println!(
            "{} - {} {}",
            metadata.artist,
            metadata.title.bold(),
            format!("({})", metadata.charter).dimmed()
        ),
        None => println!("{}", "Unknown song".italic()),
    }

    println!(
        "  {} | played {}x",
        song.checksum.to_string().dimmed(),
        song.play_count
    );

    for (instrument, score) in &song.instruments {
        println!(
            "  {:<8} | {:<6} | {:>3}% | {} | {:>9}",
            instrument.to_string(),
            score.difficulty.to_string().green(),
            score.percentage,
            stars(score.stars).yellow(),
            score.score
        );
    }
}

/// Render a star count, e.g. `★★★☆☆` for 3 stars
///
/// Full combos can get 6 or 7 stars, which are shown as a number instead, padded to the same
/// width.
fn stars(count: u8) -> String {
    const MAX: u8 = 5;

    if count <= MAX {
        format!(
            "{}{}",
            "★".repeat(count.into()),
            "☆".repeat((MAX - count).into())
        )
    } else {
        format!("{:<width$}", format!("{count}★"), width = usize::from(MAX))
    }
}
