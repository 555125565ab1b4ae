use super::ReadError;

/// A sequential, forward-reading cursor over a byte slice
///
/// Both Clone Hero formats are plain sequences of packed fields without any framing, so
/// decoding is a matter of consuming them one by one in the right order. [`ByteCursor`]
/// keeps track of the read position and reports it in every error, which makes it possible
/// to pinpoint where a file diverges from the expected layout.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl<'a> ByteCursor<'a> {
    /// Create a cursor positioned at the start of the bytes
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, position: 0 }
    }

    /// The absolute offset of the next byte to be read
    pub fn position(&self) -> usize {
        self.position
    }

    /// The number of bytes left between the position and the end of the source
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.position
    }

    /// Read the next `count` bytes and advance past them
    pub fn read_exact(&mut self, count: usize) -> Result<&'a [u8], ReadError> {
        if count > self.remaining() {
            return Err(ReadError::UnexpectedEndOfData {
                offset: self.position,
                requested: count,
                remaining: self.remaining(),
            });
        }

        let bytes = &self.bytes[self.position..self.position + count];
        self.position += count;

        Ok(bytes)
    }

    /// Read `count` (at most 8) bytes as a little-endian unsigned integer
    pub fn read_uint_le(&mut self, count: usize) -> Result<u64, ReadError> {
        assert!(count <= 8, "a u64 can hold at most 8 bytes");

        let bytes = self.read_exact(count)?;

        let mut buffer = [0; 8];
        buffer[..count].copy_from_slice(bytes);

        Ok(u64::from_le_bytes(buffer))
    }

    pub fn read_u8(&mut self) -> Result<u8, ReadError> {
        Ok(self.read_exact(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16, ReadError> {
        Ok(u16::from_le_bytes(self.read_array()?))
    }

    pub fn read_u32(&mut self) -> Result<u32, ReadError> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    /// Read the next `N` bytes into a fixed-size array
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], ReadError> {
        let mut array = [0; N];
        array.copy_from_slice(self.read_exact(N)?);
        Ok(array)
    }

    /// Move past a byte range whose meaning is not known
    ///
    /// Both formats contain fields that have never been reverse-engineered. They still need
    /// to be consumed for the cursor to line up with the fields that follow them.
    pub fn skip(&mut self, count: usize) -> Result<(), ReadError> {
        self.read_exact(count).map(|_| ())
    }

    /// Reposition the cursor to an absolute offset from the start of the source
    pub fn seek(&mut self, offset: usize) -> Result<(), ReadError> {
        if offset > self.bytes.len() {
            return Err(ReadError::InvalidOffset {
                offset,
                len: self.bytes.len(),
            });
        }

        self.position = offset;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_exact() {
        let mut cursor = ByteCursor::new(&[1, 2, 3, 4, 5]);

        assert_eq!(cursor.read_exact(2).unwrap(), &[1, 2]);
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.read_exact(3).unwrap(), &[3, 4, 5]);
        assert_eq!(cursor.remaining(), 0);
        assert!(cursor.read_exact(0).unwrap().is_empty());
    }

    #[test]
    fn read_past_end() {
        let mut cursor = ByteCursor::new(&[1, 2, 3]);
        cursor.skip(2).unwrap();

        assert_eq!(
            cursor.read_exact(2),
            Err(ReadError::UnexpectedEndOfData {
                offset: 2,
                requested: 2,
                remaining: 1
            })
        );

        // A failed read leaves the position untouched
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn little_endian() {
        let mut cursor = ByteCursor::new(&[0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0xAA]);

        assert_eq!(cursor.read_uint_le(3).unwrap(), 0x030201);
        assert_eq!(cursor.read_u16().unwrap(), 0x0504);
        assert_eq!(cursor.read_u8().unwrap(), 0x06);
        assert_eq!(cursor.read_u16().unwrap(), 0xAA07);

        let mut cursor = ByteCursor::new(&[0x78, 0x56, 0x34, 0x12]);
        assert_eq!(cursor.read_u32().unwrap(), 0x12345678);
    }

    #[test]
    fn seek() {
        let mut cursor = ByteCursor::new(&[0; 20]);

        cursor.seek(20).unwrap();
        assert_eq!(cursor.remaining(), 0);

        cursor.seek(4).unwrap();
        assert_eq!(cursor.position(), 4);

        assert_eq!(
            cursor.seek(21),
            Err(ReadError::InvalidOffset { offset: 21, len: 20 })
        );
        assert_eq!(cursor.position(), 4);
    }
}
