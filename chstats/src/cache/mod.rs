//! The song cache (`songcache.bin`)
//!
//! Clone Hero scans its song folders and caches what it finds in a single binary file. This
//! module decodes that cache into [`SongMetadata`] per [`Checksum`].

mod metadata;
mod tables;

pub use metadata::SongMetadata;
pub use tables::{Category, LookupTables};

use crate::{
    checksum::Checksum,
    serde::{ByteCursor, ReadError, read_string},
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
const HEADER_LEN: usize = 20;

/// A checksum-like field following the song path, unused
const PATH_HASH_LEN: usize = 16;

/// The delimiter following the song's file name
const FILE_NAME_DELIMITER_LEN: usize = 1;

/// Unknown, directly after the metadata indices
const UNKNOWN_AFTER_METADATA_LEN: usize = 8;

/// Presumably one difficulty marker per instrument
const DIFFICULTIES_LEN: usize = 13;

/// The preview start offset
const START_OFFSET_LEN: usize = 4;

/// Unknown, directly after the icon name
const UNKNOWN_AFTER_ICON_LEN: usize = 8;

/// Unknown, directly after the song length
const UNKNOWN_AFTER_SONG_LENGTH_LEN: usize = 8;

/// The delimiter following the game identifier
const GAME_DELIMITER_LEN: usize = 1;

/// The decoded contents of a Clone Hero song cache
///
/// The cache starts with a [`LookupTables`] section, holding the unique strings of every
/// metadata [`Category`]. After that comes one fixed-shape entry per song, which refers to
/// the tables by index and ends with the song's [`Checksum`].
///
/// ```no_run
/// # use chstats::cache::SongCache;
/// let cache = SongCache::from_path("songcache.bin")?;
///
/// for (checksum, song) in cache.songs() {
///     println!("{checksum}: {} - {}", song.artist, song.title);
/// }
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongCache {
    tables: LookupTables,
    songs: IndexMap<Checksum, SongMetadata>,
}

impl SongCache {
    /// Construct a song cache from its parts
    pub fn new(tables: LookupTables, songs: IndexMap<Checksum, SongMetadata>) -> Self {
        Self { tables, songs }
    }

    /// Decode a song cache from its raw bytes
    ///
    /// Decoding is all-or-nothing: the first malformed field aborts with an error holding
    /// the offset at which it was found.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FromBytesError> {
        let mut cursor = ByteCursor::new(bytes);
        cursor.seek(HEADER_LEN)?;

        let tables = LookupTables::read(&mut cursor)?;

        let count = cursor.read_u32()?;
        debug!("The song cache holds {count} songs");

        let mut songs = IndexMap::new();
        for _ in 0..count {
            let (checksum, metadata) = read_song(&mut cursor, &tables)?;
            if songs.insert(checksum, metadata).is_some() {
                debug!("Song {checksum} appears in the cache more than once");
            }
        }

        Ok(Self { tables, songs })
    }

    /// Deserialize a song cache from an arbitrary I/O reader
    pub fn from_reader<R>(mut reader: R) -> Result<Self, FromReaderError>
    where
        R: Read,
    {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;

        Ok(Self::from_bytes(&bytes)?)
    }

    /// Deserialize a song cache from a path on disk (songcache.bin)
    pub fn from_path<P>(path: P) -> Result<Self, FromPathError>
    where
        P: AsRef<Path>,
    {
        let file = File::open(path)?;
        Ok(Self::from_reader(file)?)
    }

    /// The metadata string tables the songs were resolved against
    pub fn tables(&self) -> &LookupTables {
        &self.tables
    }

    /// Iterate over all songs, in the order they appear in the cache
    pub fn songs(&self) -> impl Iterator<Item = (&Checksum, &SongMetadata)> {
        self.songs.iter()
    }

    /// Retrieve the metadata of a single song
    pub fn song(&self, checksum: &Checksum) -> Option<&SongMetadata> {
        self.songs.get(checksum)
    }

    /// The number of songs in the cache
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Does the cache hold any songs at all?
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Take ownership of the per-song metadata
    pub fn into_songs(self) -> IndexMap<Checksum, SongMetadata> {
        self.songs
    }
}

fn read_song(
    cursor: &mut ByteCursor,
    tables: &LookupTables,
) -> Result<(Checksum, SongMetadata), FromBytesError> {
    trace!("Reading song cache entry at offset {}", cursor.position());

    // Path, hash-like field and file name of the notes file; none of them are needed
    read_string(cursor)?;
    cursor.skip(PATH_HASH_LEN)?;
    read_string(cursor)?;
    cursor.skip(FILE_NAME_DELIMITER_LEN)?;

    let mut fields: [String; Category::COUNT] = Default::default();
    for (category, field) in Category::ALL.into_iter().zip(&mut fields) {
        let offset = cursor.position();
        let index = cursor.read_u32()?;

        *field = tables
            .resolve(category, index)
            .ok_or_else(|| FromBytesError::LookupIndexOutOfRange {
                category,
                index,
                len: tables.table(category).len(),
                offset,
            })?
            .to_owned();
    }

    cursor.skip(UNKNOWN_AFTER_METADATA_LEN)?;
    cursor.skip(DIFFICULTIES_LEN)?;
    cursor.skip(START_OFFSET_LEN)?;

    // Icon name
    read_string(cursor)?;
    cursor.skip(UNKNOWN_AFTER_ICON_LEN)?;

    let song_length = cursor.read_u32()?;
    cursor.skip(UNKNOWN_AFTER_SONG_LENGTH_LEN)?;

    // Game identifier
    read_string(cursor)?;
    cursor.skip(GAME_DELIMITER_LEN)?;

    let checksum = Checksum::new(cursor.read_array()?);

    Ok((checksum, SongMetadata::from_fields(fields, song_length)))
}

/// Errors that might be returned from [`SongCache::from_bytes()`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FromBytesError {
    /// A field could not be read
    #[error("Reading a field of the song cache failed")]
    Read(#[from] ReadError),

    /// A song refers to a metadata string that doesn't exist
    #[error(
        "The {category} index {index} at offset {offset} is out of range (the table holds {len} entries)"
    )]
    LookupIndexOutOfRange {
        category: Category,
        index: u32,
        len: usize,
        offset: usize,
    },
}

/// Errors that might be returned from [`SongCache::from_reader()`]
#[derive(Debug, Error)]
pub enum FromReaderError {
    /// Any failure that has to do with I/O
    #[error("Something failed with I/O")]
    Read(#[from] io::Error),

    /// Decoding the bytes that were read failed
    #[error("Decoding the song cache failed")]
    FromBytes(#[from] FromBytesError),
}

/// Errors that might be returned from [`SongCache::from_path()`]
#[derive(Debug, Error)]
pub enum FromPathError {
    /// Could not open the file for reading
    #[error("Could not open the file for reading")]
    FileOpen(#[from] io::Error),

    /// Deserialization from the file failed
    #[error("Reading the song cache from file failed")]
    Read(#[from] FromReaderError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{CacheEntry, checksum, song_cache};
    use std::io::Cursor;

    const TABLES: [&[&str]; Category::COUNT] = [
        &["Through the Fire and Flames", "More Than a Feeling"],
        &["Dragonforce", "Boston"],
        &["Inhuman Rampage", "Boston"],
        &["Power Metal", "Rock"],
        &["2006", "1976"],
        &["Harmonix"],
        &["Guitar Hero III"],
    ];

    fn entries() -> Vec<CacheEntry> {
        vec![
            CacheEntry {
                indices: [0, 0, 0, 0, 0, 0, 0],
                song_length: 441_000,
                checksum: checksum(0xA0),
            },
            CacheEntry {
                indices: [1, 1, 1, 1, 1, 0, 0],
                song_length: 285_000,
                checksum: checksum(0xB0),
            },
        ]
    }

    #[test]
    fn decode() {
        let bytes = song_cache(TABLES, &entries());
        let cache = SongCache::from_bytes(&bytes).unwrap();

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.tables().table(Category::Artist), ["Dragonforce", "Boston"]);

        let ttfaf = cache.song(&checksum(0xA0)).unwrap();
        assert_eq!(ttfaf.title, "Through the Fire and Flames");
        assert_eq!(ttfaf.artist, "Dragonforce");
        assert_eq!(ttfaf.album, "Inhuman Rampage");
        assert_eq!(ttfaf.genre, "Power Metal");
        assert_eq!(ttfaf.year, "2006");
        assert_eq!(ttfaf.charter, "Harmonix");
        assert_eq!(ttfaf.playlist, "Guitar Hero III");
        assert_eq!(ttfaf.song_length, 441_000);

        let feeling = cache.song(&checksum(0xB0)).unwrap();
        assert_eq!(feeling.title, "More Than a Feeling");
        assert_eq!(feeling.album, "Boston");
        assert_eq!(feeling.charter, "Harmonix");
        assert_eq!(feeling.song_length, 285_000);

        // File order is preserved
        let order: Vec<_> = cache.songs().map(|(checksum, _)| *checksum).collect();
        assert_eq!(order, [checksum(0xA0), checksum(0xB0)]);
    }

    #[test]
    fn deterministic() {
        let bytes = song_cache(TABLES, &entries());

        assert_eq!(
            SongCache::from_bytes(&bytes).unwrap(),
            SongCache::from_bytes(&bytes).unwrap()
        );
    }

    #[test]
    fn from_reader() {
        let bytes = song_cache(TABLES, &entries());
        let cache = SongCache::from_reader(Cursor::new(&bytes)).unwrap();

        assert_eq!(cache, SongCache::from_bytes(&bytes).unwrap());
    }

    #[test]
    fn empty() {
        let bytes = song_cache([&[]; Category::COUNT], &[]);
        let cache = SongCache::from_bytes(&bytes).unwrap();

        assert!(cache.is_empty());
    }

    #[test]
    fn index_equal_to_table_length() {
        let mut entries = entries();
        entries[1].indices[Category::Charter.index()] = 1;

        let bytes = song_cache(TABLES, &entries);

        assert!(matches!(
            SongCache::from_bytes(&bytes),
            Err(FromBytesError::LookupIndexOutOfRange {
                category: Category::Charter,
                index: 1,
                len: 1,
                ..
            })
        ));
    }

    #[test]
    fn index_far_out_of_range() {
        let mut entries = entries();
        entries[0].indices[Category::Title.index()] = u32::MAX;

        let bytes = song_cache(TABLES, &entries);

        assert!(matches!(
            SongCache::from_bytes(&bytes),
            Err(FromBytesError::LookupIndexOutOfRange {
                category: Category::Title,
                index: u32::MAX,
                len: 2,
                ..
            })
        ));
    }

    #[test]
    fn truncated() {
        let bytes = song_cache(TABLES, &entries());

        // Cut off halfway through the last checksum
        let truncated = &bytes[..bytes.len() - 8];

        assert_eq!(
            SongCache::from_bytes(truncated),
            Err(FromBytesError::Read(ReadError::UnexpectedEndOfData {
                offset: bytes.len() - 16,
                requested: 16,
                remaining: 8
            }))
        );
    }

    #[test]
    fn shorter_than_header() {
        assert_eq!(
            SongCache::from_bytes(&[0; 12]),
            Err(FromBytesError::Read(ReadError::InvalidOffset {
                offset: 20,
                len: 12
            }))
        );
    }
}
