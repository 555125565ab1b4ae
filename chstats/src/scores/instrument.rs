use std::{borrow::Cow, fmt};
use thiserror::Error;

/// The instrument a score was set on, identified by its index in the score data
///
/// Only some of the indices are known. The ones that aren't are named after their index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Instrument(pub u16);

impl Instrument {
    /// The names of the known instrument indices
    const NAMES: [&'static str; 8] = ["lead", "bass", "rhythm", "3", "4", "5", "6", "keys"];

    pub const LEAD: Instrument = Instrument(0);
    pub const BASS: Instrument = Instrument(1);
    pub const RHYTHM: Instrument = Instrument(2);
    pub const KEYS: Instrument = Instrument(7);

    /// The name of the instrument
    pub fn name(&self) -> Cow<'static, str> {
        match Self::NAMES.get(usize::from(self.0)) {
            Some(&name) => Cow::Borrowed(name),
            None => Cow::Owned(self.0.to_string()),
        }
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// The difficulty a score was set on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    /// The lowercase name of the difficulty
    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Expert => "expert",
        }
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = InvalidDifficultyError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Difficulty::Easy),
            1 => Ok(Difficulty::Medium),
            2 => Ok(Difficulty::Hard),
            3 => Ok(Difficulty::Expert),
            index => Err(InvalidDifficultyError(index)),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The error returned when a byte doesn't map to a [`Difficulty`]
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{0} is not a valid difficulty index")]
pub struct InvalidDifficultyError(pub u8);

/// The best result on a single instrument of a song
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstrumentScore {
    pub difficulty: Difficulty,

    /// Percentage of notes hit
    ///
    /// The file stores this as a fraction, but the denominator has only ever been seen to
    /// be 100, so only the numerator is kept.
    pub percentage: u16,

    pub stars: u8,
    pub score: u32,
}
