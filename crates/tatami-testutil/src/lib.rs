//! Test utilities for tatami.
//!
//! Builds well-formed (and deliberately malformed) ZIP archives in memory so
//! tests never have to ship binary fixtures. Only the pieces the scanner
//! reads are written: local file headers, payloads, and an optional
//! end-of-central-directory marker.

use std::io::Write;

use flate2::Compression;
use flate2::write::DeflateEncoder;

/// ZIP compression method "store".
pub const METHOD_STORE: u16 = 0;
/// ZIP compression method "deflate".
pub const METHOD_DEFLATE: u16 = 8;

/// Builder for synthetic ZIP archives.
///
/// ```
/// use tatami_testutil::ZipBuilder;
///
/// let bytes = ZipBuilder::new()
///     .stored("readme.txt", b"hello")
///     .dir("assets")
///     .deflated("assets/map.txt", b"0123456789 0123456789")
///     .build();
/// assert_eq!(&bytes[0..4], b"PK\x03\x04");
/// ```
#[derive(Debug, Default)]
pub struct ZipBuilder {
    buf: Vec<u8>,
}

impl ZipBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a member stored without compression.
    pub fn stored(self, name: &str, contents: &[u8]) -> Self {
        let size = contents.len() as u32;
        self.member(name, METHOD_STORE, contents, size)
    }

    /// Append a member compressed with raw DEFLATE.
    pub fn deflated(self, name: &str, contents: &[u8]) -> Self {
        let payload = deflate(contents);
        self.member(name, METHOD_DEFLATE, &payload, contents.len() as u32)
    }

    /// Append a directory member (name with a trailing separator).
    pub fn dir(self, name: &str) -> Self {
        let name = format!("{}/", name.trim_end_matches('/'));
        self.member(&name, METHOD_STORE, &[], 0)
    }

    /// Append a member with explicit header fields; `payload` is written
    /// verbatim and `uncompressed_size` is declared as-is, so callers can
    /// fabricate any header the scanner might meet.
    pub fn member(mut self, name: &str, method: u16, payload: &[u8], uncompressed_size: u32) -> Self {
        self.buf.extend_from_slice(&0x0403_4b50_u32.to_le_bytes());
        self.buf.extend_from_slice(&20_u16.to_le_bytes()); // version needed
        self.buf.extend_from_slice(&0_u16.to_le_bytes()); // flags
        self.buf.extend_from_slice(&method.to_le_bytes());
        self.buf.extend_from_slice(&0_u16.to_le_bytes()); // mod time
        self.buf.extend_from_slice(&0_u16.to_le_bytes()); // mod date
        self.buf.extend_from_slice(&0_u32.to_le_bytes()); // crc-32, never checked
        self.buf.extend_from_slice(&(payload.len() as u32).to_le_bytes());
        self.buf.extend_from_slice(&uncompressed_size.to_le_bytes());
        self.buf.extend_from_slice(&(name.len() as u16).to_le_bytes());
        self.buf.extend_from_slice(&0_u16.to_le_bytes()); // extra field length
        self.buf.extend_from_slice(name.as_bytes());
        self.buf.extend_from_slice(payload);
        self
    }

    /// Finish with an end-of-central-directory marker, as a real archiver
    /// would.
    pub fn build(mut self) -> Vec<u8> {
        self.buf.extend_from_slice(&0x0605_4b50_u32.to_le_bytes());
        self.buf.extend_from_slice(&[0_u8; 18]);
        self.buf
    }

    /// Finish without any trailing marker; the scanner stops at EOF instead.
    pub fn build_unterminated(self) -> Vec<u8> {
        self.buf
    }
}

/// Raw-DEFLATE compress `contents` the way a ZIP archiver would.
pub fn deflate(contents: &[u8]) -> Vec<u8> {
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
    // Writing into a Vec cannot fail.
    let _ = encoder.write_all(contents);
    encoder.finish().unwrap_or_default()
}
