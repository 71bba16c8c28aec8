//! Open file handles.
//!
//! Every `open_*` call yields exactly one handle, owned by the caller until
//! it is dropped. Dropping is closing: native descriptors are released and
//! decompressed buffers freed, with nothing shared and nothing pooled.

use std::fmt;
use std::fs;
use std::io::{self, Read, Seek, SeekFrom, Write};

/// An open file produced by the VFS.
///
/// Byte-stream access is the standard [`Read`] + [`Write`] + [`Seek`] trio;
/// `len` and `eof` round out the contract. Position queries go through
/// [`Seek::stream_position`].
pub trait VfsFile: Read + Write + Seek + fmt::Debug + Send {
    /// Total length of the file in bytes.
    fn len(&self) -> io::Result<u64>;

    /// True once the cursor has reached the end of the file.
    fn eof(&mut self) -> io::Result<bool> {
        Ok(self.stream_position()? >= self.len()?)
    }
}

/// Handle over a native file opened from a directory mount.
///
/// All operations pass straight through to the OS file.
#[derive(Debug)]
pub struct LocalFile {
    file: fs::File,
}

impl LocalFile {
    pub(crate) fn new(file: fs::File) -> Self {
        Self { file }
    }
}

impl Read for LocalFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file.read(buf)
    }
}

impl Write for LocalFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

impl Seek for LocalFile {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.file.seek(pos)
    }
}

impl VfsFile for LocalFile {
    fn len(&self) -> io::Result<u64> {
        Ok(self.file.metadata()?.len())
    }
}

/// Handle over a fully expanded archive member.
///
/// The member's decompressed bytes live inside the handle; reads and seeks
/// never touch the archive again. Seeking outside the buffer fails, and
/// writes consume nothing — archives are read-only.
#[derive(Debug)]
pub struct ArchiveFile {
    data: Vec<u8>,
    pos: u64,
}

impl ArchiveFile {
    pub(crate) fn new(data: Vec<u8>) -> Self {
        Self { data, pos: 0 }
    }
}

impl Read for ArchiveFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let start = self.pos.min(self.data.len() as u64) as usize;
        let n = buf.len().min(self.data.len() - start);
        buf[..n].copy_from_slice(&self.data[start..start + n]);
        self.pos += n as u64;
        Ok(n)
    }
}

impl Write for ArchiveFile {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Ok(0)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Seek for ArchiveFile {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let len = self.data.len() as i128;
        let target = match pos {
            SeekFrom::Start(n) => n as i128,
            SeekFrom::End(n) => len + i128::from(n),
            SeekFrom::Current(n) => i128::from(self.pos) + i128::from(n),
        };
        if target < 0 || target > len {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "seek outside archive member",
            ));
        }
        self.pos = target as u64;
        Ok(self.pos)
    }
}

impl VfsFile for ArchiveFile {
    fn len(&self) -> io::Result<u64> {
        Ok(self.data.len() as u64)
    }
}
