use anyhow::{anyhow, Context, Result};
use chstats::library::Library;
use clap::Args;
use log::debug;
use std::{
    env::current_dir,
    io::stdin,
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

/// The file name Clone Hero uses for its song cache
pub const SONG_CACHE_NAME: &str = "songcache.bin";

/// The file name Clone Hero uses for its score data
pub const SCORE_DATA_NAME: &str = "scoredata.bin";

/// Arguments shared by all subcommands for finding the Clone Hero files
#[derive(Args)]
pub struct InputArgs {
    /// The folder to look for songcache.bin and scoredata.bin in. Defaults to the current folder
    dir: Option<PathBuf>,

    /// Search the folder recursively
    #[clap(short, long)]
    recursive: bool,

    /// The song cache to read, instead of searching for it
    #[clap(long)]
    cache: Option<PathBuf>,

    /// The score data to read, instead of searching for it
    #[clap(long)]
    scores: Option<PathBuf>,
}

impl InputArgs {
    /// The path to the song cache, either as passed or found
    pub fn cache_path(&self) -> Result<PathBuf> {
        self.resolve(self.cache.as_deref(), SONG_CACHE_NAME)
    }

    /// The path to the score data, either as passed or found
    pub fn scores_path(&self) -> Result<PathBuf> {
        self.resolve(self.scores.as_deref(), SCORE_DATA_NAME)
    }

    /// Locate both files, decode them and join the results
    pub fn load_library(&self) -> Result<Library> {
        let cache = self.cache_path()?;
        let scores = self.scores_path()?;

        Library::from_paths(&cache, &scores).context(format!(
            "Could not read {} and {}",
            cache.display(),
            scores.display()
        ))
    }

    fn resolve(&self, path: Option<&Path>, name: &str) -> Result<PathBuf> {
        if let Some(path) = path {
            return Ok(path.to_owned());
        }

        let dir = match &self.dir {
            Some(dir) => dir.clone(),
            None => current_dir().context("Could not fetch current working directory")?,
        };

        find_file(&dir, name, self.recursive)
    }
}

/// Find the first file with a specific name in a folder
pub fn find_file(dir: &Path, name: &str, recursive: bool) -> Result<PathBuf> {
    let mut walk_dir = WalkDir::new(dir).sort_by_file_name();
    if !recursive {
        walk_dir = walk_dir.max_depth(1);
    }

    let path = walk_dir
        .into_iter()
        .filter_map(Result::ok)
        .find(|entry| entry.file_type().is_file() && entry.file_name() == name)
        .map(|entry| entry.into_path())
        .ok_or_else(|| {
            anyhow!(
                "Could not find {name} in {}. Make sure it's there, or pass its path explicitly",
                dir.display()
            )
        })?;

    debug!("Found {name} at {}", path.display());
    Ok(path)
}

pub fn check_for_overwrite(path: &Path) -> Result<()> {
    if path.exists() {
        loop {
            println!(
                "{} already exists. Do you want to overwrite it? Y/n",
                path.to_string_lossy()
            );

            let mut line = String::new();
            stdin()
                .read_line(&mut line)
                .context("Could not read terminal input")?;

            match line.trim_end() {
                "Y" => break,
                "n" => std::process::exit(0),
                _ => (),
            }
        }
    }

    Ok(())
}
