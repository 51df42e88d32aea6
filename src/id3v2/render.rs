use std::fmt;

use tracing::warn;

use crate::id3v2::read;
use crate::id3v2::structure::{Frame, Tag};
use crate::id3v2::version::{FrameGrammar, Version};
use crate::Error;

/// One display line produced from a frame.
#[derive(Debug)]
pub enum Field {
    Text {
        id: String,
        description: &'static str,
        value: String,
    },
    // not a text or url frame, or one we have no description for
    Unrenderable {
        id: String,
    },
    Undecodable {
        id: String,
        description: &'static str,
        error: Error,
    },
}

impl Field {
    pub fn id(&self) -> &str {
        match self {
            Field::Text { id, .. } | Field::Unrenderable { id } | Field::Undecodable { id, .. } => id,
        }
    }

    // placeholders and decoding failures are not meant for normal output
    pub fn is_text(&self) -> bool {
        match self {
            Field::Text { .. } => true,
            _ => false,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Field::Text {
                description, value, ..
            } => write!(f, "{}: {}", description, value),
            Field::Unrenderable { id } => write!(f, "Frame is not a text frame ({})", id),
            Field::Undecodable {
                description, error, ..
            } => write!(f, "{}: <{}>", description, error),
        }
    }
}

// only text (T***) and url (W***) frames carry something printable
pub fn description(version: Version, frame: &Frame) -> Option<&'static str> {
    match frame.header.id.chars().next() {
        Some('T') | Some('W') => version.describe(&frame.header.id),
        _ => None,
    }
}

pub fn frame(version: Version, frame: &Frame) -> Field {
    let id = frame.header.id.clone();
    let description = match description(version, frame) {
        Some(d) => d,
        None => return Field::Unrenderable { id },
    };

    match read::string(&frame.body) {
        Ok(value) => Field::Text {
            id,
            description,
            value,
        },
        Err(error) => {
            warn!("Could not decode frame {}: {}", id, error);
            Field::Undecodable {
                id,
                description,
                error,
            }
        }
    }
}

impl Tag {
    /// Renders every frame in on-disk order. A frame that fails to decode
    /// becomes a `Field::Undecodable` and does not affect the others.
    pub fn render(&self) -> Vec<Field> {
        let version = match self.version() {
            Some(v) => v,
            None => return Vec::new(),
        };
        self.frames.iter().map(|f| frame(version, f)).collect()
    }
}
