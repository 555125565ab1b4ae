//! Combining the song cache and score data into one record per played song

use crate::{
    cache::{self, SongCache, SongMetadata},
    checksum::Checksum,
    scores::{self, Instrument, InstrumentScore, ScoreData},
};
use indexmap::IndexMap;
use log::{debug, warn};
use std::{panic, path::Path, thread, time::Duration};
use thiserror::Error;

/// Everything known about a song that has been played
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongRecord {
    pub checksum: Checksum,

    /// The song's descriptive fields
    ///
    /// This is [`None`] when the score data mentions a song the cache doesn't know about,
    /// e.g. because it was removed from the song folders since it was last played.
    pub metadata: Option<SongMetadata>,

    /// The number of times the song has been played
    pub play_count: u32,

    /// The best result per instrument, never empty
    pub instruments: IndexMap<Instrument, InstrumentScore>,
}

impl SongRecord {
    /// The total time spent playing this song, if its length is known
    pub fn playtime(&self) -> Option<Duration> {
        self.metadata
            .as_ref()
            .map(|metadata| metadata.duration().saturating_mul(self.play_count))
    }
}

/// All played songs, with their metadata and scores
///
/// A [`Library`] is built by joining a [`SongCache`] and [`ScoreData`] on [`Checksum`].
/// Songs that are in the cache but were never played are left out.
///
/// ```no_run
/// # use chstats::library::Library;
/// let library = Library::from_paths("songcache.bin", "scoredata.bin")?;
///
/// for song in library.songs() {
///     let title = song.metadata.as_ref().map_or("?", |metadata| metadata.title.as_str());
///     println!("{title}: played {} times", song.play_count);
/// }
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Library {
    songs: IndexMap<Checksum, SongRecord>,
}

impl Library {
    /// Join a song cache and score data
    ///
    /// Songs are ordered as they appear in the cache. Scores for songs missing from the
    /// cache are kept without metadata and come last, in score data order.
    pub fn merge(cache: SongCache, scores: ScoreData) -> Self {
        let mut scores: IndexMap<_, _> = scores
            .into_songs()
            .into_iter()
            .map(|(checksum, song)| (checksum, Some(song)))
            .collect();

        let mut songs = IndexMap::new();

        for (checksum, metadata) in cache.into_songs() {
            if let Some(song) = scores.get_mut(&checksum).and_then(Option::take) {
                songs.insert(
                    checksum,
                    SongRecord {
                        checksum,
                        metadata: Some(metadata),
                        play_count: song.play_count,
                        instruments: song.instruments,
                    },
                );
            }
        }

        for song in scores.into_values().flatten() {
            warn!("Song {} has scores, but isn't in the song cache", song.checksum);

            songs.insert(
                song.checksum,
                SongRecord {
                    checksum: song.checksum,
                    metadata: None,
                    play_count: song.play_count,
                    instruments: song.instruments,
                },
            );
        }

        let count = songs.len();
        songs.retain(|_, song| !song.instruments.is_empty());
        debug!("Dropped {} songs without any scores", count - songs.len());

        Self { songs }
    }

    /// Read a song cache and score data from disk and join them
    ///
    /// Both files are decoded concurrently.
    pub fn from_paths<C, S>(cache: C, scores: S) -> Result<Self, FromPathsError>
    where
        C: AsRef<Path>,
        S: AsRef<Path>,
    {
        let cache = cache.as_ref();
        let scores = scores.as_ref();

        let (cache, scores) = thread::scope(|scope| {
            let cache = scope.spawn(|| SongCache::from_path(cache));
            let scores = ScoreData::from_path(scores);

            let cache = cache
                .join()
                .unwrap_or_else(|payload| panic::resume_unwind(payload));

            (cache, scores)
        });

        Ok(Self::merge(cache?, scores?))
    }

    /// Iterate over all songs
    pub fn songs(&self) -> impl Iterator<Item = &SongRecord> {
        self.songs.values()
    }

    /// Retrieve a single song
    pub fn song(&self, checksum: &Checksum) -> Option<&SongRecord> {
        self.songs.get(checksum)
    }

    /// The number of played songs
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Has any song been played at all?
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// The total time spent playing songs
    ///
    /// Songs without metadata don't count towards this, because their length is unknown.
    /// The total saturates at [`Duration::MAX`].
    pub fn playtime(&self) -> Duration {
        self.songs()
            .filter_map(SongRecord::playtime)
            .fold(Duration::ZERO, Duration::saturating_add)
    }
}

/// Errors that might be returned from [`Library::from_paths()`]
#[derive(Debug, Error)]
pub enum FromPathsError {
    /// The song cache could not be read
    #[error("Reading the song cache failed")]
    Cache(#[from] cache::FromPathError),

    /// The score data could not be read
    #[error("Reading the score data failed")]
    Scores(#[from] scores::FromPathError),
}
