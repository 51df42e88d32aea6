use std::collections::HashMap;
use std::fmt;
use std::io::prelude::*;

use tracing::{debug, warn};

use crate::id3v2::dictionary;
use crate::id3v2::structure::{Frame, FrameHeader, HeaderFlags, TagHeader};
use crate::id3v2::tools::{decode_frame_id, decode_synch_int};
use crate::tools::{decode_int_be_u32, is_bit_on, read_bytes};
use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Version {
    V2_2,
    V2_3,
    V2_4,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeCodec {
    Plain,
    Synchsafe,
}

/// The on-disk layout of a frame header for one tag version.
#[derive(Debug, Clone, Copy)]
pub struct Grammar {
    pub id_width: usize,
    pub size_width: usize,
    pub size_codec: SizeCodec,
    pub flags_width: usize,
    pub dictionary: &'static HashMap<&'static str, &'static str>,
}

impl Grammar {
    pub fn frame_header_len(&self) -> usize {
        self.id_width + self.size_width + self.flags_width
    }

    fn decode_size(&self, input: &[u8]) -> u32 {
        match self.size_codec {
            SizeCodec::Plain => decode_int_be_u32(input),
            SizeCodec::Synchsafe => decode_synch_int(input),
        }
    }
}

impl Version {
    pub fn from_major(version: u8) -> Option<Version> {
        match version {
            2 => Some(Version::V2_2),
            3 => Some(Version::V2_3),
            4 => Some(Version::V2_4),
            _ => None,
        }
    }

    pub fn major(self) -> u8 {
        match self {
            Version::V2_2 => 2,
            Version::V2_3 => 3,
            Version::V2_4 => 4,
        }
    }

    pub fn grammar(self) -> Grammar {
        match self {
            // 3: Frame ID  $xx xx xx
            // 3: Size      $xx xx xx
            Version::V2_2 => Grammar {
                id_width: 3,
                size_width: 3,
                size_codec: SizeCodec::Plain,
                flags_width: 0,
                dictionary: &dictionary::V22,
            },
            // 4: Frame ID  $xx xx xx xx
            // 4: Size      $xx xx xx xx
            // 2: Flags     $xx xx
            Version::V2_3 => Grammar {
                id_width: 4,
                size_width: 4,
                size_codec: SizeCodec::Plain,
                flags_width: 2,
                dictionary: &dictionary::V23,
            },
            // 4: Frame ID  $xx xx xx xx
            // 4: Size      4 * %0xxxxxxx
            // 2: Flags     $xx xx
            Version::V2_4 => Grammar {
                id_width: 4,
                size_width: 4,
                size_codec: SizeCodec::Synchsafe,
                flags_width: 2,
                dictionary: &dictionary::V24,
            },
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ID3v2.{}", self.major())
    }
}

pub trait FrameGrammar {
    /// Interprets byte 5 of the raw tag header; bit meanings differ per version.
    fn fill_flags(&self, header: &mut TagHeader, raw: &[u8; 10]);

    /// Reads frames from at most `budget` bytes of `input`, stopping at
    /// padding (an invalid frame id) or at the end of the input.
    fn read_frames<R: Read>(&self, input: R, budget: u32) -> Result<Vec<Frame>, Error>;

    fn describe(&self, id: &str) -> Option<&'static str>;
}

impl FrameGrammar for Version {
    fn fill_flags(&self, header: &mut TagHeader, raw: &[u8; 10]) {
        // v2.2: %ab000000, v2.3: %abc00000, v2.4: %abcd0000
        let byte = raw[5];
        let mut flags = HeaderFlags {
            unsynchronization: is_bit_on(byte, 7),
            ..Default::default()
        };
        match self {
            Version::V2_2 => flags.compression = is_bit_on(byte, 6),
            Version::V2_3 | Version::V2_4 => {
                flags.extended_header = is_bit_on(byte, 6);
                flags.experimental = is_bit_on(byte, 5);
            }
        }
        if *self == Version::V2_4 {
            flags.footer_present = is_bit_on(byte, 4);
        }
        header.flags = flags;
    }

    fn read_frames<R: Read>(&self, mut input: R, budget: u32) -> Result<Vec<Frame>, Error> {
        let grammar = self.grammar();
        let data = read_bytes(&mut input, budget as usize)?;
        if data.len() < budget as usize {
            debug!(
                "Tag declares {} bytes but only {} are present",
                budget,
                data.len()
            );
        }

        let header_len = grammar.frame_header_len();
        let mut frames = Vec::new();
        let mut pos = 0;

        loop {
            // anything that doesn't look like a frame id is padding
            let id = match data
                .get(pos..pos + grammar.id_width)
                .and_then(decode_frame_id)
            {
                Some(id) => id,
                None => break,
            };

            let raw = match data.get(pos..pos + header_len) {
                Some(raw) => raw,
                None => {
                    debug!("Frame header for {} is cut short", id);
                    break;
                }
            };
            let size_end = grammar.id_width + grammar.size_width;
            let size = grammar.decode_size(&raw[grammar.id_width..size_end]);
            let flags = raw[size_end..].to_vec();
            pos += header_len;

            let end = pos.saturating_add(size as usize).min(data.len());
            let body = data[pos..end].to_vec();
            pos = end;

            let truncated = body.len() < size as usize;
            if truncated {
                warn!(
                    "Frame {} declares {} bytes but only {} are present",
                    id,
                    size,
                    body.len()
                );
            }
            debug!("Read frame {} ({} bytes)", id, size);

            frames.push(Frame {
                header: FrameHeader { id, size, flags },
                body,
            });

            if truncated {
                break;
            }
        }

        Ok(frames)
    }

    fn describe(&self, id: &str) -> Option<&'static str> {
        self.grammar().dictionary.get(id).copied()
    }
}
