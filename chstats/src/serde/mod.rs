//! Low-level primitives shared by the song cache and score data decoders
//!
//! Everything in both files is little-endian. Strings are prefixed with their length in
//! bytes, which is encoded in a peculiar one-or-two byte scheme (see [`read_var_len`]).

mod cursor;
mod string;

pub use cursor::ByteCursor;
pub use string::{MAX_VAR_LEN, read_string, read_var_len, write_string, write_var_len};

use std::{io, str::Utf8Error};
use thiserror::Error;

/// Errors that might be returned by the [`ByteCursor`] and the primitives built on it
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReadError {
    /// The source ran out of bytes in the middle of a field
    #[error("Expected {requested} byte(s) at offset {offset}, but only {remaining} remain")]
    UnexpectedEndOfData {
        offset: usize,
        requested: usize,
        remaining: usize,
    },

    /// An absolute seek went beyond the end of the source
    #[error("Offset {offset} lies beyond the end of the data ({len} bytes)")]
    InvalidOffset { offset: usize, len: usize },

    /// A length-prefixed string did not contain valid UTF-8
    #[error("The string at offset {offset} is not valid UTF-8")]
    InvalidEncoding {
        offset: usize,
        #[source]
        source: Utf8Error,
    },
}

/// Errors that might be returned from [`write_var_len`] and [`write_string`]
#[derive(Debug, Error)]
pub enum WriteError {
    /// The length does not fit in the two-byte encoding
    #[error("A length of {len} does not fit the variable-length encoding (max {max})", max = MAX_VAR_LEN)]
    InvalidLength { len: usize },

    /// Any failure that has to do with I/O
    #[error("Something failed with I/O")]
    Io(#[from] io::Error),
}
