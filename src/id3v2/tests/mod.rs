
use std::io::Cursor;

use crate::id3v2::read;
use crate::id3v2::tools::encode_synch_int;
use crate::id3v2::version::{FrameGrammar, Version};
use crate::Error;
use crate::Field;
use crate::HeaderFlags;
use crate::Tag;

fn tag_bytes(version: u8, flags: u8, frames: &[u8]) -> Vec<u8> {
    let mut vec = vec![b'I', b'D', b'3', version, 0x00, flags];
    vec.extend_from_slice(&encode_synch_int(frames.len() as u32));
    vec.extend_from_slice(frames);
    vec
}

fn frame_v22(id: &[u8; 3], body: &[u8]) -> Vec<u8> {
    let mut vec = id.to_vec();
    vec.extend_from_slice(&(body.len() as u32).to_be_bytes()[1..]);
    vec.extend_from_slice(body);
    vec
}

fn frame_v23(id: &[u8; 4], body: &[u8]) -> Vec<u8> {
    let mut vec = id.to_vec();
    vec.extend_from_slice(&(body.len() as u32).to_be_bytes());
    vec.extend_from_slice(b"\x00\x00");
    vec.extend_from_slice(body);
    vec
}

fn frame_v24(id: &[u8; 4], body: &[u8]) -> Vec<u8> {
    let mut vec = id.to_vec();
    vec.extend_from_slice(&encode_synch_int(body.len() as u32));
    vec.extend_from_slice(b"\x00\x00");
    vec.extend_from_slice(body);
    vec
}

fn get(data: Vec<u8>) -> Result<Tag, Error> {
    super::get(&mut Cursor::new(data))
}

fn lines(tag: &Tag) -> Vec<String> {
    tag.render().iter().map(|f| f.to_string()).collect()
}

#[test]
fn header_test() {
    let mut input = Cursor::new(b"ID3\x04\x00\x00\x00\x00\x01\x7F".to_vec());
    let (header, raw) = read::header(&mut input).unwrap();

    assert_eq!(header.version, 4);
    assert_eq!(header.minor_version, 0);
    // 1 * 128 + 127
    assert_eq!(header.size, 255);
    assert_eq!(header.flags, HeaderFlags::default());
    assert_eq!(&raw[0..3], b"ID3");

    let mut input = Cursor::new(b"ID3\x04\x00\x00\x00\x00\x00\x7F".to_vec());
    let (header, _) = read::header(&mut input).unwrap();
    assert_eq!(header.size, 0x7F);
}

#[test]
fn no_tag_test() {
    let inputs: [&[u8]; 4] = [b"TAG\x04\x00\x00\x00\x00\x01\x7F", b"", b"ID", b"id3\x04"];
    for data in inputs.iter() {
        let mut input = Cursor::new(data.to_vec());
        match read::header(&mut input) {
            Err(Error::NoTagPresent) => (),
            r => panic!("Expected NoTagPresent, got {:?}", r),
        }
    }
}

#[test]
fn short_header_test() {
    match get(b"ID3\x04\x00".to_vec()) {
        Err(Error::IOError(e)) => assert_eq!(e.kind(), std::io::ErrorKind::UnexpectedEof),
        r => panic!("Expected IOError, got {:?}", r),
    }
}

#[test]
fn unsupported_version_test() {
    match get(tag_bytes(5, 0x00, &[])) {
        Err(Error::UnsupportedVersion(5)) => (),
        r => panic!("Expected UnsupportedVersion, got {:?}", r),
    }
    match get(tag_bytes(0xFF, 0x00, &[])) {
        Err(Error::UnsupportedVersion(0xFF)) => (),
        r => panic!("Expected UnsupportedVersion, got {:?}", r),
    }
}

#[test]
fn header_flags_test() {
    let tag = get(tag_bytes(2, 0b1100_0000, &[])).unwrap();
    assert_eq!(
        tag.header.flags,
        HeaderFlags {
            unsynchronization: true,
            compression: true,
            ..Default::default()
        }
    );

    // footer bit means nothing before v2.4
    let tag = get(tag_bytes(3, 0b1111_0000, &[])).unwrap();
    assert_eq!(
        tag.header.flags,
        HeaderFlags {
            unsynchronization: true,
            extended_header: true,
            experimental: true,
            ..Default::default()
        }
    );

    let tag = get(tag_bytes(4, 0b0001_0000, &[])).unwrap();
    assert_eq!(
        tag.header.flags,
        HeaderFlags {
            footer_present: true,
            ..Default::default()
        }
    );
}

#[test]
fn id3v22_read_test() {
    let mut frames = b"TAL\x00\x00\x03\x00\x41\x42".to_vec();
    frames.append(&mut frame_v22(b"TT2", b"\x03example song\x00"));
    frames.append(&mut frame_v22(b"PIC", b"\x00JPG\x03\x00\xFF\xD8"));

    let tag = get(tag_bytes(2, 0x00, &frames)).unwrap();

    assert_eq!(tag.version(), Some(Version::V2_2));
    assert_eq!(tag.frames.len(), 3);
    assert_eq!(tag.frames[0].header.id, "TAL");
    assert_eq!(tag.frames[0].header.size, 3);
    assert!(tag.frames[0].header.flags.is_empty());
    assert_eq!(tag.frames[0].body, vec![0x00, 0x41, 0x42]);

    assert_eq!(
        lines(&tag),
        vec![
            "Album/Movie/Show title: AB",
            "Title/Songname/Content description: example song",
            "Frame is not a text frame (PIC)",
        ]
    );
}

#[test]
fn id3v23_read_test() {
    // declared size of 5 leaves the trailing NUL to be seen as padding
    let frames = b"TALB\x00\x00\x00\x05\x00\x00\x00\x54\x65\x73\x74\x00".to_vec();
    let tag = get(tag_bytes(3, 0x00, &frames)).unwrap();

    assert_eq!(tag.frames.len(), 1);
    assert_eq!(tag.frames[0].header.flags, vec![0x00, 0x00]);
    assert_eq!(lines(&tag), vec!["Album/Movie/Show title: Test"]);
}

#[test]
fn id3v23_utf16_read_test() {
    let mut frames = frame_v23(b"TPE1", b"\x01\xFF\xFE\x4F\x4E\xB0\x65\x00\x00");
    frames.append(&mut frame_v23(b"TIT2", b"\x01\xFE\xFF\x00\x41\x00\x42\x00\x00"));
    let tag = get(tag_bytes(3, 0x00, &frames)).unwrap();

    let fields = tag.render();
    match &fields[0] {
        Field::Text { id, value, .. } => {
            assert_eq!(id, "TPE1");
            assert_eq!(value, "\u{4E4F}\u{65B0}");
        }
        f => panic!("Expected text, got {:?}", f),
    }
    assert_eq!(fields[1].to_string(), "Title/songname/content description: AB");
}

#[test]
fn id3v24_read_test() {
    // 200 bytes needs two synchsafe digits: 01 48
    let title = format!("\x03{}", "a".repeat(199));
    let mut frames = frame_v24(b"TIT2", title.as_bytes());
    assert_eq!(&frames[4..8], b"\x00\x00\x01\x48");
    frames.append(&mut frame_v24(b"TDRC", b"\x032017\x00"));
    frames.append(&mut frame_v24(b"WOAR", b"\x00https://example.com"));

    let tag = get(tag_bytes(4, 0x00, &frames)).unwrap();

    assert_eq!(tag.frames.len(), 3);
    assert_eq!(tag.frames[0].header.size, 200);
    assert_eq!(
        lines(&tag)[1..],
        [
            "Recording time: 2017".to_string(),
            "Official artist/performer webpage: https://example.com".to_string(),
        ]
    );
}

#[test]
fn size_codec_test() {
    // the same size bytes mean 256 in v2.3 and 128 in v2.4
    let mut frames = b"PRIV\x00\x00\x01\x00\x00\x00".to_vec();
    frames.resize(frames.len() + 256, 0x41);

    let tag = get(tag_bytes(3, 0x00, &frames)).unwrap();
    assert_eq!(tag.frames[0].body.len(), 256);

    let tag = get(tag_bytes(4, 0x00, &frames)).unwrap();
    assert_eq!(tag.frames[0].header.size, 128);
    assert_eq!(tag.frames[0].body.len(), 128);
    // the 128 bytes after the body are 'A's, which parse as a frame too
    assert_eq!(tag.frames[1].header.id, "AAAA");
}

#[test]
fn frame_flags_test() {
    let frames = b"TIT2\x00\x00\x00\x02\x40\x08\x00\x41".to_vec();
    let tag = get(tag_bytes(3, 0x00, &frames)).unwrap();
    assert_eq!(tag.frames[0].header.flags, vec![0x40, 0x08]);
    assert_eq!(lines(&tag), vec!["Title/songname/content description: A"]);
}

#[test]
fn unknown_frame_test() {
    let mut frames = frame_v23(b"ZZZZ", b"\x00\x41");
    frames.append(&mut frame_v23(b"TZZZ", b"\x00\x41"));
    frames.append(&mut frame_v23(b"APIC", b"\x00image/png\x00\x03\x00\x89"));
    frames.append(&mut frame_v23(b"TIT2", b"\x00Title"));

    let tag = get(tag_bytes(3, 0x00, &frames)).unwrap();
    let fields = tag.render();

    assert_eq!(
        fields.iter().map(|f| f.id()).collect::<Vec<_>>(),
        vec!["ZZZZ", "TZZZ", "APIC", "TIT2"]
    );
    assert!(matches!(fields[0], Field::Unrenderable { .. }));
    assert!(matches!(fields[1], Field::Unrenderable { .. }));
    assert!(matches!(fields[2], Field::Unrenderable { .. }));
    assert_eq!(fields[3].to_string(), "Title/songname/content description: Title");
}

#[test]
fn user_defined_frame_test() {
    let frames = frame_v23(b"TXXX", b"\x00desc\x00value\x00");
    let tag = get(tag_bytes(3, 0x00, &frames)).unwrap();
    match &tag.render()[0] {
        Field::Text {
            description, value, ..
        } => {
            assert_eq!(*description, "User defined text information frame");
            assert_eq!(value, "desc\u{0}value");
        }
        f => panic!("Expected text, got {:?}", f),
    }
}

#[test]
fn undecodable_frame_test() {
    let mut frames = frame_v24(b"TIT2", b"\x02\x00\x41");
    frames.append(&mut frame_v24(b"TPE1", b"\x01\x41\x00"));
    frames.append(&mut frame_v24(b"TALB", b"\x03Album"));

    let tag = get(tag_bytes(4, 0x00, &frames)).unwrap();
    let fields = tag.render();

    assert_eq!(fields.len(), 3);
    match &fields[0] {
        Field::Undecodable {
            error: Error::UnsupportedEncoding(2),
            ..
        } => (),
        f => panic!("Expected UnsupportedEncoding, got {:?}", f),
    }
    match &fields[1] {
        Field::Undecodable {
            error: Error::MalformedText(_),
            ..
        } => (),
        f => panic!("Expected MalformedText, got {:?}", f),
    }
    assert_eq!(fields[2].to_string(), "Album/Movie/Show title: Album");

    let shown: Vec<&str> = fields
        .iter()
        .filter(|f| f.is_text())
        .map(|f| f.id())
        .collect();
    assert_eq!(shown, vec!["TALB"]);
}

#[test]
fn padding_test() {
    let mut frames = frame_v23(b"TIT2", b"\x00Title");
    frames.resize(frames.len() + 64, 0x00);
    // a valid looking frame after padding is never reached
    frames.append(&mut frame_v23(b"TALB", b"\x00Album"));

    let tag = get(tag_bytes(3, 0x00, &frames)).unwrap();
    assert_eq!(tag.frames.len(), 1);
}

#[test]
fn budget_test() {
    let mut frames = frame_v23(b"TIT2", b"\x00Title");
    let declared = frames.len();
    // audio data right after the tag must not be read as frames
    frames.append(&mut frame_v23(b"TALB", b"\x00Album"));

    let mut data = vec![b'I', b'D', b'3', 3, 0x00, 0x00];
    data.extend_from_slice(&encode_synch_int(declared as u32));
    data.extend_from_slice(&frames);

    let tag = get(data).unwrap();
    assert_eq!(tag.frames.len(), 1);
}

#[test]
fn truncated_tag_test() {
    let frames = frame_v23(b"TIT2", b"\x00Title");

    // declares 1000 bytes, has far fewer
    let mut data = vec![b'I', b'D', b'3', 3, 0x00, 0x00];
    data.extend_from_slice(&encode_synch_int(1000));
    data.extend_from_slice(&frames);
    let tag = get(data).unwrap();
    assert_eq!(tag.frames.len(), 1);
    assert_eq!(lines(&tag), vec!["Title/songname/content description: Title"]);

    // frame body cut off by the end of the file
    let mut data = vec![b'I', b'D', b'3', 3, 0x00, 0x00];
    data.extend_from_slice(&encode_synch_int(1000));
    data.extend_from_slice(b"TALB\x00\x00\x00\x20\x00\x00\x00Alb");
    let tag = get(data).unwrap();
    assert_eq!(tag.frames.len(), 1);
    assert_eq!(tag.frames[0].header.size, 0x20);
    assert_eq!(tag.frames[0].body, b"\x00Alb".to_vec());

    // frame header cut off
    let mut data = vec![b'I', b'D', b'3', 4, 0x00, 0x00];
    data.extend_from_slice(&encode_synch_int(1000));
    data.extend_from_slice(b"TALB\x00\x00");
    let tag = get(data).unwrap();
    assert!(tag.frames.is_empty());
}

#[test]
fn string_test() {
    assert_eq!(read::string(b"\x03Title").unwrap(), "Title");
    assert_eq!(read::string(b"\x00Test\x00").unwrap(), "Test");
    assert_eq!(read::string(b"").unwrap(), "");
    assert_eq!(read::string(b"\x03").unwrap(), "");
    // no encoding byte, whole body is latin-1
    assert_eq!(read::string(b"AB\x00").unwrap(), "AB");
    assert!(matches!(
        read::string(b"\x02\x00\x41"),
        Err(Error::UnsupportedEncoding(2))
    ));
    assert!(matches!(
        read::string(b"\x01"),
        Err(Error::MalformedText(_))
    ));
}

#[test]
fn describe_test() {
    assert_eq!(Version::V2_3.describe("TALB"), Some("Album/Movie/Show title"));
    assert_eq!(Version::V2_2.describe("TAL"), Some("Album/Movie/Show title"));
    assert_eq!(Version::V2_2.describe("TALB"), None);
    assert_eq!(Version::V2_4.describe("TDRC"), Some("Recording time"));
    // dropped in v2.4
    assert_eq!(Version::V2_4.describe("TYER"), None);
    assert_eq!(Version::V2_3.describe("WXXX"), Some("User defined URL link frame"));
}
