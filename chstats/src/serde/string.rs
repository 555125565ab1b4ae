use super::{ByteCursor, ReadError, WriteError};
use std::{io::Write, str};

/// Lengths at or above this value spill over into a second byte
const EXTENSION_THRESHOLD: usize = 0x80;

/// The largest length the two-byte form can express (`0xFF + 0xFE * 0x80`)
pub const MAX_VAR_LEN: usize = 0x7FFF;

/// Read a variable-length string length
///
/// Lengths below 128 take up a single byte. Anything else sets the high bit of the first
/// byte and continues into a second one, which counts the additional multiples of 128 plus
/// one. Only this single extension has ever been observed, so it is not generalized to a
/// chain of continuation bytes.
pub fn read_var_len(cursor: &mut ByteCursor) -> Result<usize, ReadError> {
    let first = cursor.read_u8()? as usize;
    if first < EXTENSION_THRESHOLD {
        return Ok(first);
    }

    // first >= 0x80, so this can't underflow even if the second byte is zero
    let second = cursor.read_u8()? as usize;
    Ok(first + second * EXTENSION_THRESHOLD - EXTENSION_THRESHOLD)
}

/// Read a length-prefixed UTF-8 string
pub fn read_string(cursor: &mut ByteCursor) -> Result<String, ReadError> {
    let len = read_var_len(cursor)?;
    let offset = cursor.position();
    let bytes = cursor.read_exact(len)?;

    str::from_utf8(bytes)
        .map(str::to_owned)
        .map_err(|source| ReadError::InvalidEncoding { offset, source })
}

/// Write a length in the variable-length encoding understood by [`read_var_len`]
pub fn write_var_len<W>(len: usize, mut writer: W) -> Result<(), WriteError>
where
    W: Write,
{
    if len < EXTENSION_THRESHOLD {
        writer.write_all(&[len as u8])?;
    } else if len <= MAX_VAR_LEN {
        let first = EXTENSION_THRESHOLD + len % EXTENSION_THRESHOLD;
        let second = len / EXTENSION_THRESHOLD;
        writer.write_all(&[first as u8, second as u8])?;
    } else {
        return Err(WriteError::InvalidLength { len });
    }

    Ok(())
}

/// Write a string prefixed with its variable-length encoded length in bytes
pub fn write_string<W>(string: &str, mut writer: W) -> Result<(), WriteError>
where
    W: Write,
{
    write_var_len(string.len(), &mut writer)?;
    writer.write_all(string.as_bytes())?;

    Ok(())
}
