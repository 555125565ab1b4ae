//! The `export` subcommand

use crate::{
    report::{write_csv, write_json},
    utils::{check_for_overwrite, InputArgs},
};
use anyhow::{Context, Result};
use chstats::{cache::SongCache, library::Library, scores::ScoreData};
use clap::Args;
use std::{
    env::current_dir,
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    time::Duration,
};

/// Arguments for the `export` subcommand
#[derive(Args)]
#[clap(
    author,
    version,
    about = "Export the scores of all played songs to scores.json and scores.csv",
    long_about = None
)]
pub struct ExportArgs {
    #[clap(flatten)]
    input: InputArgs,

    /// The destination folder to place the exports in
    #[clap(short, long)]
    output: Option<PathBuf>,

    /// Skip writing scores.json
    #[clap(long)]
    no_json: bool,

    /// Skip writing scores.csv
    #[clap(long)]
    no_csv: bool,

    /// Overwrite existing files without asking
    #[clap(short, long)]
    force: bool,
}

/// Export the scores of all played songs to scores.json and scores.csv
pub fn export(args: ExportArgs) -> Result<()> {
    let cache_path = args.input.cache_path()?;
    let scores_path = args.input.scores_path()?;

    // Nothing gets written unless both files decode
    println!("Parsing cache");
    let cache = SongCache::from_path(&cache_path)
        .context(format!("Could not read {}", cache_path.display()))?;

    println!("Parsing scores");
    let scores = ScoreData::from_path(&scores_path)
        .context(format!("Could not read {}", scores_path.display()))?;

    let library = Library::merge(cache, scores);

    let folder = match args.output {
        Some(folder) => folder,
        None => current_dir().context("Could not fetch current working directory")?,
    };
    create_dir_all(&folder).context("Could not create output directory")?;

    if !args.no_json {
        println!("Creating json");
        let path = folder.join("scores.json");
        let mut writer = create_output(&path, args.force)?;
        write_json(&library, &mut writer).context("Could not write to JSON")?;
        writer.flush().context("Could not write to JSON")?;
    }

    if !args.no_csv {
        println!("Creating CSV");
        let path = folder.join("scores.csv");
        let mut writer = create_output(&path, args.force)?;
        write_csv(&library, &mut writer).context("Could not write to CSV")?;
        writer.flush().context("Could not write to CSV")?;
    }

    println!("Playtime: {}", format_playtime(library.playtime()));

    Ok(())
}

fn create_output(path: &Path, force: bool) -> Result<BufWriter<File>> {
    if !force {
        check_for_overwrite(path)?;
    }

    let file =
        File::create(path).context(format!("Could not create file at {}", path.display()))?;

    Ok(BufWriter::new(file))
}

/// Format a playtime, rounded down to whole seconds
pub(crate) fn format_playtime(playtime: Duration) -> String {
    humantime::format_duration(Duration::from_secs(playtime.as_secs())).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{SCORE_DATA_NAME, SONG_CACHE_NAME};
    use clap::Parser;
    use std::{ffi::OsString, fs};

    #[derive(Parser)]
    struct Cli {
        #[clap(flatten)]
        args: ExportArgs,
    }

    /// An empty song cache: the header, seven empty tables and no songs
    fn empty_song_cache() -> Vec<u8> {
        let mut bytes = vec![0; 20];
        for _ in 0..7 {
            bytes.push(1);
            bytes.extend_from_slice(&0_u32.to_le_bytes());
        }
        bytes.extend_from_slice(&0_u32.to_le_bytes());
        bytes
    }

    /// Score data holding a single song with an expert lead score
    fn score_data() -> Vec<u8> {
        let mut bytes = vec![1, 0, 0, 0, 1, 0, 0, 0];
        bytes.extend_from_slice(&[0xAB; 16]);
        bytes.push(1);
        bytes.extend_from_slice(&[2, 0, 0]);
        bytes.extend_from_slice(&[0, 0, 3, 100, 0, 100, 0, 6, 1, 0, 0, 0, 0x10, 0x27, 0, 0]);
        bytes
    }

    fn args(dir: &Path, output: &Path, extra: &[&str]) -> Result<ExportArgs> {
        let mut argv: Vec<OsString> = vec![
            "export".into(),
            "--cache".into(),
            dir.join(SONG_CACHE_NAME).into(),
            "--scores".into(),
            dir.join(SCORE_DATA_NAME).into(),
            "-o".into(),
            output.into(),
        ];
        argv.extend(extra.iter().map(OsString::from));

        Ok(Cli::try_parse_from(argv)?.args)
    }

    #[test]
    fn nothing_written_on_decode_failure() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let output = dir.path().join("out");

        let scores = score_data();
        fs::write(dir.path().join(SONG_CACHE_NAME), empty_song_cache())?;
        fs::write(dir.path().join(SCORE_DATA_NAME), &scores[..scores.len() - 1])?;

        assert!(export(args(dir.path(), &output, &["--force"])?).is_err());
        assert!(!output.join("scores.json").exists());
        assert!(!output.join("scores.csv").exists());

        Ok(())
    }

    #[test]
    fn json_only() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let output = dir.path().join("out");

        fs::write(dir.path().join(SONG_CACHE_NAME), empty_song_cache())?;
        fs::write(dir.path().join(SCORE_DATA_NAME), score_data())?;

        export(args(dir.path(), &output, &["--force", "--no-csv"])?)?;

        assert!(!output.join("scores.csv").exists());

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(output.join("scores.json"))?)?;
        let song = &json["abababababababababababababababab"];
        assert_eq!(song["plays"], 2);
        assert_eq!(song["instruments"]["lead"]["difficulty"], "expert");
        assert_eq!(song["instruments"]["lead"]["score"], 10_000);

        Ok(())
    }

    #[test]
    fn csv_only_overwrites_with_force() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let output = dir.path().to_owned();

        fs::write(dir.path().join(SONG_CACHE_NAME), empty_song_cache())?;
        fs::write(dir.path().join(SCORE_DATA_NAME), score_data())?;
        fs::write(output.join("scores.csv"), "stale")?;

        export(args(dir.path(), &output, &["--force", "--no-json"])?)?;

        assert!(!output.join("scores.json").exists());

        let csv = fs::read_to_string(output.join("scores.csv"))?;
        assert!(csv.starts_with("\"Checksum\""));
        assert!(csv.contains(r#",,,,,,"lead","expert","100","6","10000""#));

        Ok(())
    }

    #[test]
    fn playtime() {
        assert_eq!(format_playtime(Duration::ZERO), "0s");
        assert_eq!(
            format_playtime(Duration::from_millis(3_723_999)),
            "1h 2m 3s"
        );
        assert_eq!(
            format_playtime(Duration::from_secs(2 * 86_400 + 60)),
            "2days 1m"
        );
    }
}
