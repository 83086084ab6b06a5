//! Bounds-checked big-endian reading over raw font bytes

use crate::error::{Error, Result};
use super::directory::Tag;

/// A position-tracking reader over a byte slice.
///
/// Every read either consumes exactly the requested bytes or fails with
/// [`Error::UnexpectedEof`]. After a failure the cursor should be dropped.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Cursor { data, pos: 0 }
    }

    /// Current offset from the start of the data
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left between the current position and the end
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Total length of the underlying data
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Move to an absolute offset. Seeking to exactly the end is allowed.
    pub fn seek(&mut self, offset: usize) -> Result<()> {
        if offset > self.data.len() {
            return Err(Error::UnexpectedEof {
                requested: offset,
                available: self.data.len(),
            });
        }
        self.pos = offset;
        Ok(())
    }

    pub fn skip(&mut self, n_bytes: usize) -> Result<()> {
        self.read_bytes(n_bytes).map(|_| ())
    }

    pub fn read_bytes(&mut self, n_bytes: usize) -> Result<&'a [u8]> {
        let available = self.remaining();
        if n_bytes > available {
            return Err(Error::UnexpectedEof {
                requested: n_bytes,
                available,
            });
        }
        let bytes = &self.data[self.pos..self.pos + n_bytes];
        self.pos += n_bytes;
        Ok(bytes)
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        self.read_array::<1>().map(|b| b[0])
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        self.read_array::<1>().map(i8::from_be_bytes)
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        self.read_array().map(u16::from_be_bytes)
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        self.read_array().map(i16::from_be_bytes)
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        self.read_array().map(u32::from_be_bytes)
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        self.read_array().map(i32::from_be_bytes)
    }

    pub fn read_tag(&mut self) -> Result<Tag> {
        self.read_array().map(Tag::new)
    }

    /// Read a string of `len` bytes, choosing the encoding from its first byte.
    ///
    /// A leading zero byte means UTF-16BE (the high byte of a Basic Latin code
    /// unit), anything else is treated as single-byte Latin-1.
    pub fn read_string(&mut self, len: usize) -> Result<String> {
        let bytes = self.read_bytes(len)?;
        match bytes.first() {
            Some(0) => Ok(decode_utf16_be(bytes)),
            _ => Ok(decode_latin1(bytes)),
        }
    }

    /// Read a string of `len` bytes as UTF-16BE regardless of its contents.
    pub fn read_utf16_string(&mut self, len: usize) -> Result<String> {
        self.read_bytes(len).map(decode_utf16_be)
    }
}

fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

fn decode_utf16_be(bytes: &[u8]) -> String {
    let units = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]));
    let mut text: String = char::decode_utf16(units)
        .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect();
    if bytes.len() % 2 == 1 {
        text.push(char::REPLACEMENT_CHARACTER);
    }
    text
}
