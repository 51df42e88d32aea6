use tracing::warn;

pub fn decode_synch_int(input: &[u8]) -> u32 {
    let mut result: u32 = 0;
    for (i, b) in input.iter().enumerate() {
        // the msb of each byte must be zero, but real files break this;
        // mask it off and keep going
        if b & 0x80 != 0 {
            warn!(
                "Invalid synch-safe byte {:#04x} at position {}, ignoring high bit",
                b, i
            );
        }
        // move the 7 bit parts to proper places
        // (0000 0001 0111 1111 => 1111 1111)
        result = (result << 7) | (b & 0x7F) as u32;
    }
    result
}

// left-padded to four bytes; a fifth is added only when the value needs more than 28 bits
pub fn encode_synch_int(input: u32) -> Vec<u8> {
    let mut result = Vec::with_capacity(5);
    let mut rest = input;
    while rest > 0 || result.len() < 4 {
        result.push((rest & 0x7F) as u8);
        rest >>= 7;
    }
    result.reverse();
    result
}

pub fn is_valid_frame_id(input: &[u8]) -> bool {
    !input.is_empty()
        && input
            .iter()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
}

pub fn decode_frame_id(input: &[u8]) -> Option<String> {
    if is_valid_frame_id(input) {
        Some(input.iter().map(|c| *c as char).collect())
    } else {
        None
    }
}
