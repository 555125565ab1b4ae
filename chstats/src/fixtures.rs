//! Builders for synthetic song caches and score data used throughout the tests

use crate::{
    cache::Category,
    checksum::Checksum,
    scores::{INSTRUMENT_RECORD_LEN, PLAY_COUNT_WIDTH},
    serde::write_string,
};

/// A checksum with every byte set to `seed`
pub fn checksum(seed: u8) -> Checksum {
    Checksum::new([seed; Checksum::LEN])
}

/// A single song in a synthetic song cache
pub struct CacheEntry {
    pub indices: [u32; Category::COUNT],
    pub song_length: u32,
    pub checksum: Checksum,
}

/// Build the bytes of a song cache
///
/// The uninterpreted ranges are filled with non-zero garbage, so that a decoder which reads
/// them by accident produces noticeably wrong results. The song path is long enough to need
/// a two-byte length.
pub fn song_cache(tables: [&[&str]; Category::COUNT], entries: &[CacheEntry]) -> Vec<u8> {
    let mut bytes = vec![0x5A; 20];

    for table in tables {
        bytes.push(0x01);
        bytes.extend_from_slice(&(table.len() as u32).to_le_bytes());
        for entry in table {
            write_string(entry, &mut bytes).unwrap();
        }
    }

    bytes.extend_from_slice(&(entries.len() as u32).to_le_bytes());

    for entry in entries {
        write_string(&"songs/".repeat(30), &mut bytes).unwrap();
        bytes.extend_from_slice(&[0xC1; 16]);
        write_string("notes.chart", &mut bytes).unwrap();
        bytes.push(0x00);

        for index in entry.indices {
            bytes.extend_from_slice(&index.to_le_bytes());
        }

        bytes.extend_from_slice(&[0xC2; 8]);
        bytes.extend_from_slice(&[0xFF; 13]);
        bytes.extend_from_slice(&[0xC3; 4]);
        write_string("gh3", &mut bytes).unwrap();
        bytes.extend_from_slice(&[0xC4; 8]);
        bytes.extend_from_slice(&entry.song_length.to_le_bytes());
        bytes.extend_from_slice(&[0xC5; 8]);
        write_string("Clone Hero", &mut bytes).unwrap();
        bytes.push(0x00);
        bytes.extend_from_slice(entry.checksum.bytes());
    }

    bytes
}

/// A single instrument result in synthetic score data
pub struct ScoreEntry {
    pub instrument: u16,
    pub difficulty: u8,
    pub percentage: u16,
    pub stars: u8,
    pub score: u32,
}

impl ScoreEntry {
    pub fn to_bytes(&self) -> [u8; INSTRUMENT_RECORD_LEN] {
        let mut bytes = [0; INSTRUMENT_RECORD_LEN];
        bytes[0..2].copy_from_slice(&self.instrument.to_le_bytes());
        bytes[2] = self.difficulty;
        bytes[3..5].copy_from_slice(&self.percentage.to_le_bytes());
        bytes[5..7].copy_from_slice(&100_u16.to_le_bytes());
        bytes[7] = self.stars;
        bytes[8..12].copy_from_slice(&1_u32.to_le_bytes());
        bytes[12..16].copy_from_slice(&self.score.to_le_bytes());
        bytes
    }
}

/// A single song block in synthetic score data
pub struct ScoreBlock {
    pub checksum: Checksum,
    pub play_count: u32,
    pub entries: Vec<ScoreEntry>,
}

/// Build the bytes of a score data file
pub fn score_data(blocks: &[ScoreBlock]) -> Vec<u8> {
    let mut bytes = vec![0x01, 0x00, 0x00, 0x00];
    bytes.extend_from_slice(&(blocks.len() as u32).to_le_bytes());

    for block in blocks {
        bytes.extend_from_slice(block.checksum.bytes());
        bytes.push(u8::try_from(block.entries.len()).unwrap());
        bytes.extend_from_slice(&block.play_count.to_le_bytes()[..PLAY_COUNT_WIDTH]);

        for entry in &block.entries {
            bytes.extend_from_slice(&entry.to_bytes());
        }
    }

    bytes
}
