extern crate encoding;
use self::encoding::{DecoderTrap, Encoding};

use crate::tools::malformed;
use crate::Error;

pub fn decode_iso_8859_1(input: &[u8]) -> String {
    use self::encoding::all::ISO_8859_1;
    // every byte maps to U+0000..U+00FF, so the trap never fires
    ISO_8859_1
        .decode(input, DecoderTrap::Replace)
        .unwrap_or_default()
        .trim_end_matches('\0')
        .to_string()
}

pub fn decode_utf8(input: &[u8]) -> Result<String, Error> {
    use self::encoding::all::UTF_8;
    let s = UTF_8
        .decode(input, DecoderTrap::Strict)
        .map_err(|e| malformed(&format!("invalid UTF-8 ({})", e)))?;
    Ok(s.trim_end_matches('\0').to_string())
}

pub fn decode_utf16(input: &[u8]) -> Result<String, Error> {
    use self::encoding::all::{UTF_16BE, UTF_16LE};
    if input.len() < 2 {
        return Err(malformed("sequence is too short to contain a UTF-16 BOM"));
    }

    // a lone trailing byte is usually half of the terminator
    let mut text = input[2..].to_vec();
    if text.len() % 2 != 0 {
        text.push(0x00);
    }

    let s = match &input[0..2] {
        [0xFF, 0xFE] => UTF_16LE.decode(&text, DecoderTrap::Strict),
        [0xFE, 0xFF] => UTF_16BE.decode(&text, DecoderTrap::Strict),
        _ => {
            return Err(malformed(&format!(
                "unrecognized UTF-16 BOM: 0x{:02X}{:02X}",
                input[0], input[1]
            )))
        }
    }
    .map_err(|e| malformed(&format!("invalid UTF-16 ({})", e)))?;

    Ok(s.trim_end_matches('\0').to_string())
}
