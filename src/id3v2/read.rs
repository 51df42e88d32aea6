use std::io;
use std::io::prelude::*;

use crate::id3v2::structure::TagHeader;
use crate::id3v2::tools::decode_synch_int;
use crate::tools::encoding::*;
use crate::tools::read_bytes;
use crate::Error;

pub const HEADER_LEN: usize = 10;

// the leading byte picks the encoding:
//   $00  ISO-8859-1
//   $01  UTF-16 with BOM
//   $02  UTF-16BE without BOM
//   $03  UTF-8
pub fn string(arr: &[u8]) -> Result<String, Error> {
    match arr.first() {
        None => Ok(String::new()),
        Some(0x00) => Ok(decode_iso_8859_1(&arr[1..])),
        Some(0x01) => decode_utf16(&arr[1..]),
        Some(0x02) => Err(Error::UnsupportedEncoding(0x02)),
        Some(0x03) => decode_utf8(&arr[1..]),
        // no encoding byte at all, assume ISO-8859-1 for the whole thing
        Some(_) => Ok(decode_iso_8859_1(arr)),
    }
}

/// Reads the 10 byte tag header. The raw bytes are returned too so each
/// version can interpret the flags byte its own way.
pub fn header<T: Read>(input: &mut T) -> Result<(TagHeader, [u8; HEADER_LEN]), Error> {
    let data = read_bytes(input, HEADER_LEN)?;

    // ID3v2 identifier           "ID3"
    if data.len() < 3 || &data[0..3] != b"ID3" {
        return Err(Error::NoTagPresent);
    }
    if data.len() < HEADER_LEN {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "ID3v2 header is cut short",
        )
        .into());
    }

    let mut arr = [0; HEADER_LEN];
    arr.copy_from_slice(&data);

    // ID3v2 version              $0X 0Y
    // ID3v2 flags                %abcd0000
    // ID3v2 size             4 * %0xxxxxxx
    let header = TagHeader {
        version: arr[3],
        minor_version: arr[4],
        size: decode_synch_int(&arr[6..10]),
        ..Default::default()
    };

    Ok((header, arr))
}
