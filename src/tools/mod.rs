pub mod encoding;

use std::io;
use std::io::prelude::*;

use crate::Error;

pub fn malformed(err: &str) -> Error {
    Error::MalformedText(err.to_string())
}

// reads until `count` bytes are collected or the input runs dry,
// so a short vector means end of stream rather than an error
pub fn read_bytes<R: Read>(input: &mut R, count: usize) -> io::Result<Vec<u8>> {
    // sizes come from the file, so don't trust them for the allocation
    let mut vec = Vec::with_capacity(count.min(0x10000));
    input.by_ref().take(count as u64).read_to_end(&mut vec)?;
    Ok(vec)
}

pub fn decode_int_be_u32(input: &[u8]) -> u32 {
    // bits shifted past the top are dropped, so oversized slices can't panic
    input
        .iter()
        .fold(0u32, |result, b| (result << 8) | *b as u32)
}

/// Bit 7 is the highest-order bit. Positions past 7 are always off.
pub fn is_bit_on(byte: u8, pos: u32) -> bool {
    if pos > 7 {
        return false;
    }
    byte & (1 << pos) != 0
}
