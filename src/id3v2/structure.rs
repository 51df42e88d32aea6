use crate::id3v2::version::Version;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct TagHeader {
    pub version: u8,
    pub minor_version: u8,
    pub flags: HeaderFlags,
    pub size: u32, // in bytes after the 10 byte header, goes up to 256 mb
}

// which of these can be set depends on the version
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct HeaderFlags {
    pub unsynchronization: bool,
    pub extended_header: bool,
    pub experimental: bool,
    pub footer_present: bool,
    pub compression: bool, // v2.2 only
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct FrameHeader {
    pub id: String,
    pub size: u32, // body only
    // raw, two bytes in v2.3/v2.4, empty in v2.2
    pub flags: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub header: FrameHeader,
    pub body: Vec<u8>,
}

/// A decoded ID3v2 tag. Frames are kept in the order they appear on disk.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub header: TagHeader,
    pub frames: Vec<Frame>,
}

impl Tag {
    pub fn version(&self) -> Option<Version> {
        Version::from_major(self.header.version)
    }
}
