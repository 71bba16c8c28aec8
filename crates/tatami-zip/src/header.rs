//! Local-file-header scanning.
//!
//! A ZIP archive is a sequence of records, each introduced by a 4-byte
//! little-endian signature. The scanner walks them from offset 0:
//!
//! ```text
//! PK\x03\x04  local file header   → index the member, skip its payload
//! PK\x01\x02  central directory   → stop, scan complete
//! PK\x05\x06  end of central dir  → stop, scan complete
//! anything else                   → the archive is rejected
//! ```
//!
//! Member names are separator-normalized as they are read; names with a
//! trailing separator are directory members and go into a separate set.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use crate::ArchiveError;

/// Signature of a local file header record.
const LOCAL_FILE_HEADER: u32 = 0x0403_4b50;
/// Signature of a central directory file header.
const CENTRAL_DIR_HEADER: u32 = 0x0201_4b50;
/// Signature of the end-of-central-directory record.
const END_OF_CENTRAL_DIR: u32 = 0x0605_4b50;

/// Fixed-size remainder of a local file header after its signature.
const LOCAL_HEADER_LEN: usize = 26;

/// Longest member name accepted.
const MAX_NAME_LEN: usize = 1000;

/// ZIP compression method "store" (no compression).
const METHOD_STORE: u16 = 0;

/// One non-directory member of an archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZipEntry {
    /// Member path, separator-normalized, relative to the archive root.
    pub name: PathBuf,
    /// Byte offset where the member's (possibly compressed) payload begins.
    pub data_offset: u64,
    /// Payload size on disk.
    pub compressed_size: u32,
    /// Size after expansion.
    pub uncompressed_size: u32,
    /// Whether the payload needs DEFLATE expansion (method ≠ store).
    pub compressed: bool,
}

/// In-memory index of an archive's members.
#[derive(Debug, Clone, Default)]
pub struct ZipIndex {
    /// Non-directory members, in the order the scanner met them. Lookups
    /// take the first match, so the earlier of two colliding names wins.
    pub entries: Vec<ZipEntry>,
    /// Directory members, trailing separator stripped.
    pub dirs: BTreeSet<PathBuf>,
}

impl ZipIndex {
    /// First entry whose name matches `name` exactly.
    pub fn find(&self, name: &Path) -> Option<&ZipEntry> {
        self.entries.iter().find(|e| e.name.as_path() == name)
    }
}

/// Scan the local file headers of the archive at `path` into a [`ZipIndex`].
///
/// Scanning succeeds on a clean stop: a central-directory marker, an
/// end-of-central-directory marker, or EOF at a record boundary. Any other
/// outcome discards the partial index and reports why.
pub fn read_archive_info(path: &Path) -> Result<ZipIndex, ArchiveError> {
    let file = File::open(path).map_err(|source| ArchiveError::CannotOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = BufReader::new(file);
    let mut index = ZipIndex::default();

    loop {
        let mut sig = [0_u8; 4];
        match read_full(&mut reader, &mut sig)? {
            0 => break, // EOF at a record boundary
            4 => {}
            _ => return Err(ArchiveError::Truncated),
        }
        match u32::from_le_bytes(sig) {
            LOCAL_FILE_HEADER => read_local_header(&mut reader, &mut index)?,
            CENTRAL_DIR_HEADER | END_OF_CENTRAL_DIR => break,
            other => return Err(ArchiveError::BadSignature(other)),
        }
    }
    Ok(index)
}

/// Parse one local file header (signature already consumed) and position the
/// reader at the next record.
fn read_local_header(reader: &mut BufReader<File>, index: &mut ZipIndex) -> Result<(), ArchiveError> {
    let mut header = [0_u8; LOCAL_HEADER_LEN];
    if read_full(reader, &mut header)? != LOCAL_HEADER_LEN {
        return Err(ArchiveError::Truncated);
    }
    // Field offsets are relative to the record signature; its 4 bytes are
    // already consumed, so subtract 4 when indexing into `header`.
    let method = u16_at(&header, 4);
    let compressed_size = u32_at(&header, 14);
    let uncompressed_size = u32_at(&header, 18);
    let name_len = u16_at(&header, 22) as usize;
    let extra_len = u64::from(u16_at(&header, 24));

    if name_len > MAX_NAME_LEN {
        return Err(ArchiveError::NameTooLong(name_len));
    }

    let mut raw_name = vec![0_u8; name_len];
    if read_full(reader, &mut raw_name)? != name_len {
        return Err(ArchiveError::Truncated);
    }

    let data_offset = reader
        .stream_position()
        .map_err(|_| ArchiveError::Truncated)?
        + extra_len;

    let name = normalize_name(&raw_name);
    if let Some(dir) = name.strip_suffix(MAIN_SEPARATOR) {
        index.dirs.insert(PathBuf::from(dir));
    } else if !name.is_empty() {
        index.entries.push(ZipEntry {
            name: PathBuf::from(name),
            data_offset,
            compressed_size,
            uncompressed_size,
            compressed: method != METHOD_STORE,
        });
    }

    reader
        .seek(SeekFrom::Start(data_offset + u64::from(compressed_size)))
        .map_err(|_| ArchiveError::Truncated)?;
    Ok(())
}

/// Fill `buf` as far as the stream allows, returning how many bytes landed.
fn read_full(reader: &mut impl Read, buf: &mut [u8]) -> Result<usize, ArchiveError> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
            Err(_) => return Err(ArchiveError::Truncated),
        }
    }
    Ok(filled)
}

/// Decode a raw member name, converting both separator styles to the
/// platform's.
fn normalize_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw)
        .chars()
        .map(|c| if c == '/' || c == '\\' { MAIN_SEPARATOR } else { c })
        .collect()
}

fn u16_at(buf: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([buf[offset], buf[offset + 1]])
}

fn u32_at(buf: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([buf[offset], buf[offset + 1], buf[offset + 2], buf[offset + 3]])
}
