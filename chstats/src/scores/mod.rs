//! The score data (`scoredata.bin`)
//!
//! Every song that has been played at least once gets a block in the score data, holding the
//! play count and the best result per instrument.

mod instrument;

pub use instrument::{Difficulty, Instrument, InstrumentScore, InvalidDifficultyError};

use crate::{
    checksum::Checksum,
    serde::{ByteCursor, ReadError},
};
use indexmap::IndexMap;
use log::{debug, trace};
use std::{
    fs::File,
    io::{self, Read},
    path::Path,
};
use thiserror::Error;

/// The length of the header, which isn't interpreted
const HEADER_LEN: usize = 4;

/// The number of bytes used for a song's play count
///
/// It's not entirely certain that this is 3. It could be anywhere from 2 to 4, with the
/// remaining byte(s) belonging to a neighbouring field that has always been 0 so far.
pub const PLAY_COUNT_WIDTH: usize = 3;

/// Always seems to hold the number 1
const UNKNOWN_CONSTANT_LEN: usize = 4;

/// The length of a single instrument record
pub const INSTRUMENT_RECORD_LEN: usize = 16;

/// The recorded scores of a single song
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongScores {
    pub checksum: Checksum,

    /// The number of times the song has been played
    pub play_count: u32,

    /// The best result per instrument, in the order the file lists them
    pub instruments: IndexMap<Instrument, InstrumentScore>,
}

/// The decoded contents of a Clone Hero score data file
///
/// ```no_run
/// # use chstats::scores::ScoreData;
/// let scores = ScoreData::from_path("scoredata.bin")?;
///
/// for song in scores.songs() {
///     println!("{} was played {} times", song.checksum, song.play_count);
/// }
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreData {
    /// The header bytes, kept as-is
    pub header: [u8; HEADER_LEN],

    songs: IndexMap<Checksum, SongScores>,
}

impl ScoreData {
    /// Construct score data from its parts
    pub fn new(header: [u8; HEADER_LEN], songs: IndexMap<Checksum, SongScores>) -> Self {
        Self { header, songs }
    }

    /// Decode score data from its raw bytes
    ///
    /// Decoding is all-or-nothing: the first malformed field aborts with an error holding
    /// the offset at which it was found.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FromBytesError> {
        let mut cursor = ByteCursor::new(bytes);

        let header = cursor.read_array()?;
        let count = cursor.read_u32()?;
        debug!("The score data holds {count} songs");

        let mut songs = IndexMap::new();
        for _ in 0..count {
            let song = read_song(&mut cursor)?;
            if let Some(previous) = songs.insert(song.checksum, song) {
                debug!("Song {} appears in the score data more than once", previous.checksum);
            }
        }

        Ok(Self { header, songs })
    }

    /// Deserialize score data from an arbitrary I/O reader
    pub fn from_reader<R>(mut reader: R) -> Result<Self, FromReaderError>
    where
        R: Read,
    {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;

        Ok(Self::from_bytes(&bytes)?)
    }

    /// Deserialize score data from a path on disk (scoredata.bin)
    pub fn from_path<P>(path: P) -> Result<Self, FromPathError>
    where
        P: AsRef<Path>,
    {
        let file = File::open(path)?;
        Ok(Self::from_reader(file)?)
    }

    /// Iterate over all songs, in the order they appear in the file
    pub fn songs(&self) -> impl Iterator<Item = &SongScores> {
        self.songs.values()
    }

    /// Retrieve the scores of a single song
    pub fn song(&self, checksum: &Checksum) -> Option<&SongScores> {
        self.songs.get(checksum)
    }

    /// The number of songs with scores
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Are there any scores at all?
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Take ownership of the per-song scores
    pub fn into_songs(self) -> IndexMap<Checksum, SongScores> {
        self.songs
    }
}

/// Read a song block: the checksum, instrument count, play count and instrument records
fn read_song(cursor: &mut ByteCursor) -> Result<SongScores, FromBytesError> {
    trace!("Reading score block at offset {}", cursor.position());

    let checksum = Checksum::new(cursor.read_array()?);
    let instrument_count = cursor.read_u8()?;
    let play_count = cursor.read_uint_le(PLAY_COUNT_WIDTH)? as u32;

    let mut instruments = IndexMap::with_capacity(instrument_count.into());
    for _ in 0..instrument_count {
        let (instrument, score) = read_instrument(cursor)?;

        // Later records overwrite earlier ones for the same instrument
        instruments.insert(instrument, score);
    }

    Ok(SongScores {
        checksum,
        play_count,
        instruments,
    })
}

fn read_instrument(
    cursor: &mut ByteCursor,
) -> Result<(Instrument, InstrumentScore), FromBytesError> {
    let instrument = Instrument(cursor.read_u16()?);

    let offset = cursor.position();
    let difficulty = Difficulty::try_from(cursor.read_u8()?).map_err(|error| {
        FromBytesError::InvalidDifficultyIndex {
            index: error.0,
            offset,
        }
    })?;

    let percentage = cursor.read_u16()?;
    let _denominator = cursor.read_u16()?;
    let stars = cursor.read_u8()?;
    cursor.skip(UNKNOWN_CONSTANT_LEN)?;
    let score = cursor.read_u32()?;

    Ok((
        instrument,
        InstrumentScore {
            difficulty,
            percentage,
            stars,
            score,
        },
    ))
}

/// Errors that might be returned from [`ScoreData::from_bytes()`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FromBytesError {
    /// A field could not be read
    #[error("Reading a field of the score data failed")]
    Read(#[from] ReadError),

    /// A score was set on an unknown difficulty
    #[error("The difficulty index {index} at offset {offset} is unknown")]
    InvalidDifficultyIndex { index: u8, offset: usize },
}

/// Errors that might be returned from [`ScoreData::from_reader()`]
#[derive(Debug, Error)]
pub enum FromReaderError {
    /// Any failure that has to do with I/O
    #[error("Something failed with I/O")]
    Read(#[from] io::Error),

    /// Decoding the bytes that were read failed
    #[error("Decoding the score data failed")]
    FromBytes(#[from] FromBytesError),
}

/// Errors that might be returned from [`ScoreData::from_path()`]
#[derive(Debug, Error)]
pub enum FromPathError {
    /// Could not open the file for reading
    #[error("Could not open the file for reading")]
    FileOpen(#[from] io::Error),

    /// Deserialization from the file failed
    #[error("Reading the score data from file failed")]
    Read(#[from] FromReaderError),
}
