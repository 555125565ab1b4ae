//! JSON and CSV renditions of a [`Library`]

use chstats::{
    library::{Library, SongRecord},
    scores::{Instrument, InstrumentScore},
};
use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use serde_json::ser::PrettyFormatter;
use std::io::{self, Write};

/// Write the library as a JSON object, keyed by checksum
pub fn write_json<W>(library: &Library, writer: W) -> serde_json::Result<()>
where
    W: Write,
{
    let formatter = PrettyFormatter::with_indent(b"\t");
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);

    JsonLibrary(library).serialize(&mut serializer)
}

/// Write the library as CSV
///
/// Every song gets a row of its own, followed by one row per instrument. The instrument rows
/// are shifted to the right so that they line up under the instrument columns.
pub fn write_csv<W>(library: &Library, mut writer: W) -> io::Result<()>
where
    W: Write,
{
    write_csv_row(&mut writer, 0, &CSV_HEADER)?;

    for song in library.songs() {
        let (title, artist, charter, song_length) = match &song.metadata {
            Some(metadata) => (
                metadata.title.as_str(),
                metadata.artist.as_str(),
                metadata.charter.as_str(),
                metadata.song_length.to_string(),
            ),
            None => ("", "", "", String::new()),
        };

        let checksum = song.checksum.to_string();
        let plays = song.play_count.to_string();
        write_csv_row(
            &mut writer,
            0,
            &[
                checksum.as_str(),
                title,
                artist,
                charter,
                song_length.as_str(),
                plays.as_str(),
            ],
        )?;

        for (instrument, score) in &song.instruments {
            let instrument = instrument.to_string();
            let percentage = score.percentage.to_string();
            let stars = score.stars.to_string();
            let points = score.score.to_string();

            write_csv_row(
                &mut writer,
                CSV_INSTRUMENT_OFFSET,
                &[
                    instrument.as_str(),
                    score.difficulty.name(),
                    percentage.as_str(),
                    stars.as_str(),
                    points.as_str(),
                ],
            )?;
        }
    }

    Ok(())
}

const CSV_HEADER: [&str; 11] = [
    "Checksum",
    "Title",
    "Artist",
    "Charter",
    "songlength",
    "plays",
    "instrument",
    "difficulty",
    "percentage",
    "stars",
    "score",
];

/// The column at which instrument rows start
const CSV_INSTRUMENT_OFFSET: usize = 6;

fn write_csv_row<W>(mut writer: W, offset: usize, values: &[&str]) -> io::Result<()>
where
    W: Write,
{
    let values = values
        .iter()
        .map(|value| format!("\"{}\"", value.replace('"', "\"\"")))
        .collect::<Vec<_>>();

    writeln!(writer, "{}{}", ",".repeat(offset), values.join(","))
}

struct JsonLibrary<'a>(&'a Library);

impl Serialize for JsonLibrary<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(
            self.0
                .songs()
                .map(|song| (song.checksum.to_string(), JsonSong::from(song))),
        )
    }
}

#[derive(Serialize)]
struct JsonSong<'a> {
    #[serde(flatten)]
    metadata: Option<JsonMetadata<'a>>,

    plays: u32,

    #[serde(serialize_with = "instruments_serialize")]
    instruments: &'a IndexMap<Instrument, InstrumentScore>,
}

impl<'a> From<&'a SongRecord> for JsonSong<'a> {
    fn from(song: &'a SongRecord) -> Self {
        Self {
            metadata: song.metadata.as_ref().map(|metadata| JsonMetadata {
                title: &metadata.title,
                artist: &metadata.artist,
                album: &metadata.album,
                genre: &metadata.genre,
                year: &metadata.year,
                charter: &metadata.charter,
                playlist: &metadata.playlist,
                song_length: metadata.song_length,
            }),
            plays: song.play_count,
            instruments: &song.instruments,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct JsonMetadata<'a> {
    title: &'a str,
    artist: &'a str,
    album: &'a str,
    genre: &'a str,
    year: &'a str,
    charter: &'a str,
    playlist: &'a str,

    #[serde(rename = "songlength")]
    song_length: u32,
}

#[derive(Serialize)]
struct JsonInstrument {
    difficulty: &'static str,
    percentage: u16,
    stars: u8,
    score: u32,
}

fn instruments_serialize<S>(
    instruments: &&IndexMap<Instrument, InstrumentScore>,
    s: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    s.collect_map(instruments.iter().map(|(instrument, score)| {
        (
            instrument.to_string(),
            JsonInstrument {
                difficulty: score.difficulty.name(),
                percentage: score.percentage,
                stars: score.stars,
                score: score.score,
            },
        )
    }))
}
