//! tatami-zip: forward-only ZIP reading for the tatami virtual filesystem.
//!
//! This crate reads an archive's **local file headers** into an in-memory
//! index ([`read_archive_info`]) and expands individual members on demand
//! ([`read_member`]). The central directory is deliberately ignored: scanning
//! stops at the first central-directory or end-of-central-directory marker,
//! so only the local headers are ever trusted. Well-formed archives read in
//! one cheap sequential pass; archives whose local headers disagree with
//! their central directory are misread, and that trade-off is intentional.
//!
//! No ZIP writing, no encryption, no Zip64.

mod header;
mod inflate;

pub use header::{ZipEntry, ZipIndex, read_archive_info};
pub use inflate::expand;

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Why an archive could not be read.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// The archive file itself could not be opened.
    #[error("cannot open archive {}: {}", .path.display(), .source)]
    CannotOpen { path: PathBuf, source: io::Error },

    /// A record started with a signature this reader does not know.
    #[error("bad record signature 0x{0:08x}")]
    BadSignature(u32),

    /// The archive ended in the middle of a record.
    #[error("archive truncated mid-record")]
    Truncated,

    /// A member name exceeded the accepted length.
    #[error("member name too long: {0} bytes")]
    NameTooLong(usize),

    /// A member's DEFLATE stream failed to expand.
    #[error("deflate stream corrupt: {source}")]
    Inflate { source: io::Error },
}

impl From<ArchiveError> for io::Error {
    fn from(err: ArchiveError) -> Self {
        let kind = match &err {
            ArchiveError::CannotOpen { source, .. } => source.kind(),
            _ => io::ErrorKind::InvalidData,
        };
        io::Error::new(kind, err.to_string())
    }
}

/// Read and expand a single member's payload.
///
/// Seeks to the entry's `data_offset`, reads exactly `compressed_size` raw
/// bytes, and runs them through [`expand`]. The whole member lands in memory;
/// there is no streaming decompression.
pub fn read_member(archive: &Path, entry: &ZipEntry) -> Result<Vec<u8>, ArchiveError> {
    let mut file = File::open(archive).map_err(|source| ArchiveError::CannotOpen {
        path: archive.to_path_buf(),
        source,
    })?;
    file.seek(SeekFrom::Start(entry.data_offset))
        .map_err(|_| ArchiveError::Truncated)?;
    let mut raw = vec![0_u8; entry.compressed_size as usize];
    file.read_exact(&mut raw).map_err(|_| ArchiveError::Truncated)?;
    expand(raw, entry.compressed, entry.uncompressed_size as usize)
}
