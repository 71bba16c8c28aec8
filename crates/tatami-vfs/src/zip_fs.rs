//! ZIP-archive-backed mount.
//!
//! The archive's local file headers are indexed once at mount time
//! (`tatami_zip::read_archive_info`); member payloads are read and expanded
//! on demand, one whole member per open. Archives are strictly read-only.

use std::io;
use std::path::{Path, PathBuf};

use tatami_zip::{ArchiveError, ZipIndex, read_archive_info, read_member};

use crate::handle::{ArchiveFile, VfsFile};
use crate::traits::{DirEntry, Filesystem, MountKind};

/// A mount over a ZIP archive.
#[derive(Debug, Clone)]
pub struct ZipFs {
    root: PathBuf,
    sub_dir: PathBuf,
    index: ZipIndex,
}

impl ZipFs {
    /// Index the archive at `root`, exposing only `sub_dir` inside it
    /// (empty = the whole archive).
    ///
    /// A parse failure discards everything; no partially indexed archive
    /// ever becomes a mount.
    pub fn new(root: impl AsRef<Path>, sub_dir: impl Into<PathBuf>) -> Result<Self, ArchiveError> {
        let raw = root.as_ref();
        let root = std::fs::canonicalize(raw).map_err(|source| ArchiveError::CannotOpen {
            path: raw.to_path_buf(),
            source,
        })?;
        let index = read_archive_info(&root)?;
        Ok(Self {
            root,
            sub_dir: sub_dir.into(),
            index,
        })
    }

    /// Number of indexed (non-directory) members.
    pub fn member_count(&self) -> usize {
        self.index.entries.len()
    }

    /// Full member name for a sanitized virtual path.
    fn scoped(&self, path: &Path) -> PathBuf {
        self.sub_dir.join(path)
    }
}

/// Name of `member` when it is an immediate child of `scope`.
fn direct_child(member: &Path, scope: &Path) -> Option<String> {
    let rest = member.strip_prefix(scope).ok()?;
    let mut components = rest.components();
    let first = components.next()?;
    if components.next().is_some() {
        return None;
    }
    Some(first.as_os_str().to_string_lossy().into_owned())
}

impl Filesystem for ZipFs {
    fn kind(&self) -> MountKind {
        MountKind::Zip
    }

    fn root(&self) -> &Path {
        &self.root
    }

    fn sub_dir(&self) -> &Path {
        &self.sub_dir
    }

    fn exists(&self, path: &Path) -> bool {
        let name = self.scoped(path);
        self.index.find(&name).is_some() || self.index.dirs.contains(&name)
    }

    fn is_dir(&self, path: &Path) -> bool {
        // Only directories the archive actually recorded count; nothing is
        // synthesized from deeper member paths.
        self.index.dirs.contains(&self.scoped(path))
    }

    fn real_dir(&self, path: &Path) -> Option<PathBuf> {
        self.exists(path).then(|| self.root.clone())
    }

    fn list(&self, dir: &Path) -> io::Result<Vec<DirEntry>> {
        let scope = self.scoped(dir);

        let dir_names: Vec<String> = self
            .index
            .dirs
            .iter()
            .filter_map(|d| direct_child(d, &scope))
            .collect();

        // Files keep the scanner's encounter order; the first occurrence of
        // a name wins, and a name recorded as a directory never lists as a
        // file.
        let mut entries = Vec::new();
        let mut seen = std::collections::HashSet::new();
        for entry in &self.index.entries {
            if let Some(name) = direct_child(&entry.name, &scope) {
                if dir_names.contains(&name) || !seen.insert(name.clone()) {
                    continue;
                }
                entries.push(DirEntry::file(name, u64::from(entry.uncompressed_size)));
            }
        }
        entries.extend(dir_names.into_iter().map(DirEntry::directory));
        Ok(entries)
    }

    fn open_read(&self, path: &Path) -> io::Result<Box<dyn VfsFile>> {
        let name = self.scoped(path);
        let Some(entry) = self.index.find(&name) else {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such member: {}", path.display()),
            ));
        };
        let data = read_member(&self.root, entry)?;
        Ok(Box::new(ArchiveFile::new(data)))
    }

    fn open_write(&self, _path: &Path, _append: bool) -> io::Result<Box<dyn VfsFile>> {
        Err(read_only_error())
    }

    fn mkdir(&self, _path: &Path) -> io::Result<()> {
        Err(read_only_error())
    }

    fn remove(&self, _path: &Path) -> io::Result<()> {
        Err(read_only_error())
    }

    fn read_only(&self) -> bool {
        true
    }
}

fn read_only_error() -> io::Error {
    io::Error::new(io::ErrorKind::PermissionDenied, "archive mounts are read-only")
}
