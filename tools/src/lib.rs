//! # Clone Hero Stats Tools
//!
//! [Clone Hero](https://clonehero.net/) keeps track of the songs you have installed in a binary
//! `songcache.bin` file, and of your high scores in a binary `scoredata.bin` file. Neither can be
//! read without a bit of help. This crate provides a command-line utility that decodes both,
//! joins them together and exports the result to JSON and CSV.
//!
//! All subcommands look for the two files in the folder you pass them (or the current folder),
//! optionally recursively. You can also pass their paths explicitly with `--cache` and `--scores`.
//!
//! ## Export
//!
//! ```console
//! chstats-tools-export 0.1.0
//! Export the scores of all played songs to scores.json and scores.csv
//!
//! USAGE:
//!     chstats-tools export [OPTIONS] [DIR]
//!
//! ARGS:
//!     <DIR>    The folder to look for songcache.bin and scoredata.bin in. Defaults to the current folder
//!
//! OPTIONS:
//!         --cache <CACHE>      The song cache to read, instead of searching for it
//!     -f, --force              Overwrite existing files without asking
//!     -h, --help               Print help information
//!         --no-csv             Skip writing scores.csv
//!         --no-json            Skip writing scores.json
//!     -o, --output <OUTPUT>    The destination folder to place the exports in
//!     -r, --recursive          Search the folder recursively
//!         --scores <SCORES>    The score data to read, instead of searching for it
//!     -V, --version            Print version information
//! ```
//!
//! ### Example
//!
//! ```console
//! 4ntler@mbp > chstats-tools export ~/.clonehero -o ~/scores
//! Parsing cache
//! Parsing scores
//! Creating json
//! Creating CSV
//! Playtime: 3days 4h 12m 9s
//! ```
//!
//! ## Inspect
//!
//! ```console
//! chstats-tools-inspect 0.1.0
//! Print the played songs along with their scores
//!
//! USAGE:
//!     chstats-tools inspect [OPTIONS] [DIR]
//!
//! OPTIONS:
//!     -s, --song <SONGS>    Only print the song with this checksum. Can be repeated
//! ```
//!
//! ### Example
//!
//! ```console
//! 4ntler@mbp > chstats-tools inspect ~/.clonehero -s 1f6e07b1bd1ea5a6bd47cf1a4f2ee2ff
//! Dragonforce - Through the Fire and Flames (Rockin' Lemon)
//!   1f6e07b1bd1ea5a6bd47cf1a4f2ee2ff | played 14x
//!   lead     | expert |  91% | ★★★★☆ |    861234
//!   bass     | hard   | 100% | 6★   |    402113
//! ```
//!
//! ## Tables
//!
//! ```console
//! chstats-tools-tables 0.1.0
//! Print the metadata lookup tables of the song cache
//!
//! USAGE:
//!     chstats-tools tables [OPTIONS] [DIR]
//!
//! OPTIONS:
//!     -v, --verbose    Print every entry, instead of just the table sizes
//! ```

pub mod export;
pub mod inspect;
pub(crate) mod report;
pub mod tables;
pub(crate) mod utils;
