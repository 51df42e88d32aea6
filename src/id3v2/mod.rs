use std::io::prelude::*;

use tracing::{debug, warn};

use crate::Error;

pub mod dictionary;
pub mod read;
pub mod render;
pub mod structure;
pub mod tools;
pub mod version;

use self::structure::Tag;
use self::version::{FrameGrammar, Version};

/// Decodes the ID3v2 tag at the start of `input`.
pub fn get<T: Read>(input: &mut T) -> Result<Tag, Error> {
    let (mut header, raw) = read::header(input)?;

    let version = match Version::from_major(header.version) {
        Some(v) => v,
        None => return Err(Error::UnsupportedVersion(header.version)),
    };
    version.fill_flags(&mut header, &raw);
    debug!(
        "Found {}.{} tag, {} bytes, {:?}",
        version, header.minor_version, header.size, header.flags
    );

    // TODO: skip over the extended header using its own size field
    if header.flags.extended_header {
        warn!("Extended ID3 headers are not parsed, frames may be misread");
    }

    let frames = version.read_frames(input, header.size)?;

    Ok(Tag { header, frames })
}

#[cfg(test)]
mod tests;
