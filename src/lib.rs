#[macro_use]
extern crate lazy_static;

pub mod id3v2;

mod dispatch;
pub mod tools;


pub use crate::dispatch::get_tag;
pub use crate::id3v2::render::Field;
pub use crate::id3v2::structure::{Frame, FrameHeader, HeaderFlags, Tag, TagHeader};
pub use crate::id3v2::version::{FrameGrammar, Version};

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The stream does not start with an "ID3" magic; callers skip the file.
    #[error("ID3v2 tag not present")]
    NoTagPresent,

    #[error("ID3v2.{0} is not supported")]
    UnsupportedVersion(u8),

    #[error("Unsupported text encoding {0:#04x}")]
    UnsupportedEncoding(u8),

    #[error("Malformed text: {0}")]
    MalformedText(String),

    #[error("IO error: {0}")]
    IOError(#[from] io::Error),
}
