//! Directory-backed mount.
//!
//! Maps virtual paths straight onto the OS filesystem under a canonical
//! root, optionally scoped to a sub-directory. Symbolic links are invisible
//! unless explicitly permitted, so a link can never lead out of the mounted
//! tree.

use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use crate::handle::{LocalFile, VfsFile};
use crate::traits::{DirEntry, Filesystem, MountKind};

/// A mount over a real on-disk directory.
#[derive(Debug, Clone)]
pub struct DirFs {
    root: PathBuf,
    sub_dir: PathBuf,
    /// `root` + `sub_dir`, precomputed for building real paths.
    root_sub_dir: PathBuf,
    follow_links: bool,
}

impl DirFs {
    /// Create a mount over `root`, exposing only `sub_dir` inside it
    /// (empty = the whole directory).
    ///
    /// `root` must exist and be a directory; it is canonicalized once here
    /// and never changes afterwards.
    pub fn new(root: impl AsRef<Path>, sub_dir: impl Into<PathBuf>) -> io::Result<Self> {
        let root = fs::canonicalize(root.as_ref())?;
        if !root.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotADirectory,
                format!("not a directory: {}", root.display()),
            ));
        }
        let sub_dir = sub_dir.into();
        let root_sub_dir = root.join(&sub_dir);
        Ok(Self {
            root,
            sub_dir,
            root_sub_dir,
            follow_links: false,
        })
    }

    /// Real path for a sanitized virtual path.
    fn full(&self, path: &Path) -> PathBuf {
        self.root_sub_dir.join(path)
    }

    /// Metadata honoring the symlink policy.
    ///
    /// With links disabled a symlink is invisible — `None`, as if nothing
    /// were there. With links enabled the target's metadata is returned and
    /// broken links vanish.
    fn stat(&self, full: &Path) -> Option<fs::Metadata> {
        let meta = fs::symlink_metadata(full).ok()?;
        if meta.file_type().is_symlink() {
            if !self.follow_links {
                return None;
            }
            return fs::metadata(full).ok();
        }
        Some(meta)
    }
}

impl Filesystem for DirFs {
    fn kind(&self) -> MountKind {
        MountKind::Dir
    }

    fn root(&self) -> &Path {
        &self.root
    }

    fn sub_dir(&self) -> &Path {
        &self.sub_dir
    }

    fn exists(&self, path: &Path) -> bool {
        self.stat(&self.full(path)).is_some()
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.stat(&self.full(path)).is_some_and(|m| m.is_dir())
    }

    fn real_dir(&self, path: &Path) -> Option<PathBuf> {
        self.exists(path).then(|| self.root_sub_dir.clone())
    }

    fn list(&self, dir: &Path) -> io::Result<Vec<DirEntry>> {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();
        for dirent in fs::read_dir(self.full(dir))? {
            let dirent = dirent?;
            let Some(meta) = self.stat(&dirent.path()) else {
                continue; // symlink policy, or a racing unlink
            };
            let name = dirent.file_name().to_string_lossy().into_owned();
            if !seen.insert(name.clone()) {
                continue;
            }
            if meta.is_dir() {
                entries.push(DirEntry::directory(name));
            } else {
                entries.push(DirEntry::file(name, meta.len()));
            }
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn open_read(&self, path: &Path) -> io::Result<Box<dyn VfsFile>> {
        let full = self.full(path);
        // Existence check first: honors the symlink policy and guarantees a
        // read can never create anything.
        if self.stat(&full).is_none() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("not found: {}", path.display()),
            ));
        }
        Ok(Box::new(LocalFile::new(fs::File::open(full)?)))
    }

    fn open_write(&self, path: &Path, append: bool) -> io::Result<Box<dyn VfsFile>> {
        let mut options = OpenOptions::new();
        options.write(true).create(true);
        if append {
            options.append(true);
        } else {
            options.truncate(true);
        }
        Ok(Box::new(LocalFile::new(options.open(self.full(path))?)))
    }

    fn mkdir(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(self.full(path))
    }

    fn remove(&self, path: &Path) -> io::Result<()> {
        let full = self.full(path);
        if fs::metadata(&full)?.is_dir() {
            fs::remove_dir(&full)
        } else {
            fs::remove_file(&full)
        }
    }

    fn read_only(&self) -> bool {
        false
    }

    fn set_follow_links(&mut self, permit: bool) {
        self.follow_links = permit;
    }
}
