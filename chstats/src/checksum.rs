//! The 16-byte song identifier shared by the song cache and score data
use std::{fmt, str::FromStr};
use thiserror::Error;

/// A 16-byte hash identifying a song by its notes file
///
/// Clone Hero does not store scores by song title or path, but by a hash of the chart. The
/// same [`Checksum`] appears at the end of every song cache entry and at the start of every
/// score data block, which is what ties the two files together.
///
/// A [`Checksum`] displays as (and parses from) 32 lowercase hexadecimal characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Checksum([u8; Self::LEN]);

impl Checksum {
    /// The number of bytes in a checksum
    pub const LEN: usize = 16;

    /// Construct a checksum from its raw bytes
    pub const fn new(bytes: [u8; Self::LEN]) -> Self {
        Self(bytes)
    }

    /// Access the raw bytes of the checksum
    pub fn bytes(&self) -> &[u8; Self::LEN] {
        &self.0
    }
}

impl From<[u8; Checksum::LEN]> for Checksum {
    fn from(bytes: [u8; Checksum::LEN]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }

        Ok(())
    }
}

impl FromStr for Checksum {
    type Err = ParseChecksumError;

    fn from_str(str: &str) -> Result<Self, Self::Err> {
        if str.len() != Self::LEN * 2 {
            return Err(ParseChecksumError::IncorrectLength(str.len()));
        }

        let mut bytes = [0; Self::LEN];
        for (index, pair) in str.as_bytes().chunks_exact(2).enumerate() {
            let digit = |offset: usize| {
                char::from(pair[offset])
                    .to_digit(16)
                    .ok_or(ParseChecksumError::InvalidDigit {
                        position: index * 2 + offset,
                    })
            };

            bytes[index] = (digit(0)? << 4 | digit(1)?) as u8;
        }

        Ok(Self(bytes))
    }
}

/// Errors that can result from parsing a [`Checksum`] from a hex string
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseChecksumError {
    /// A checksum is always written as exactly 32 hexadecimal characters
    #[error("Expected 32 hexadecimal characters, found {0}")]
    IncorrectLength(usize),

    /// The string contains something other than hexadecimal digits
    #[error("Invalid hexadecimal digit at position {position}")]
    InvalidDigit { position: usize },
}
