//! DEFLATE expansion for archive members.
//!
//! ZIP stores deflated members as raw DEFLATE streams — no zlib or gzip
//! framing — so expansion goes through [`flate2::read::DeflateDecoder`].

use std::io::Read;

use flate2::read::DeflateDecoder;

use crate::ArchiveError;

/// Expand one member's payload to its full uncompressed form.
///
/// Stored members pass through untouched; the buffer simply changes hands.
/// An `expected_size` of zero short-circuits to an empty buffer without
/// invoking the decoder at all. Everything else runs a raw inflate pass and
/// any decoder failure is reported as [`ArchiveError::Inflate`].
pub fn expand(raw: Vec<u8>, compressed: bool, expected_size: usize) -> Result<Vec<u8>, ArchiveError> {
    if !compressed {
        return Ok(raw);
    }
    if expected_size == 0 {
        return Ok(Vec::new());
    }
    let mut expanded = Vec::with_capacity(expected_size);
    let mut decoder = DeflateDecoder::new(raw.as_slice());
    decoder
        .read_to_end(&mut expanded)
        .map_err(|source| ArchiveError::Inflate { source })?;
    Ok(expanded)
}
