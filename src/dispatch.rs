use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::debug;

use crate::id3v2;
use crate::Error;
use crate::Tag;

/// Opens `path` and decodes the ID3v2 tag at its start.
///
/// `Error::NoTagPresent` and `Error::UnsupportedVersion` mean the file can
/// be skipped; `Error::IOError` means it could not be read.
pub fn get_tag<P: AsRef<Path>>(path: P) -> Result<Tag, Error> {
    let path = path.as_ref();
    debug!("Reading tag from {}", path.display());

    let file = File::open(path)?;
    let mut input = BufReader::new(file);
    id3v2::get(&mut input)
}
