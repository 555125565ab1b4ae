//! Decoding of the song cache and score data that [Clone Hero](https://clonehero.net) keeps
//! next to its settings.
//!
//! Neither format is documented. The layouts here were found by poking at real files, which is
//! why several byte ranges are read past without being interpreted. The decoders are strict:
//! any inconsistency aborts with an error telling at which offset things went wrong, rather
//! than producing partially decoded results.
//!
//! * [`cache::SongCache`] decodes `songcache.bin`, holding the title, artist etc. of every song
//! * [`scores::ScoreData`] decodes `scoredata.bin`, holding play counts and scores
//! * [`library::Library`] joins the two on their [`Checksum`]

pub mod cache;
pub mod checksum;
pub mod library;
pub mod scores;
pub mod serde;

#[cfg(test)]
mod fixtures;

pub use checksum::Checksum;
