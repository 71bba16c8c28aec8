//! Mount table and the [`Vfs`] façade.
//!
//! ```text
//! Vfs
//! ├── mounts: [DirFs | ZipFs, ...]   ← ordered search path, front wins
//! └── write_dir: Option<DirFs>      ← sole target for writes
//! ```
//!
//! Read-style calls scan the mounts front-to-back and the first mount that
//! can answer wins. Listing calls aggregate over every mount with
//! first-mount-wins de-duplication. Write-style calls go only to the elected
//! write directory; archive mounts decline them by construction.
//!
//! The `Vfs` is a plain owned context: construct one per application (or
//! per test), drop it to unmount everything. Nothing here is global.

use std::collections::HashSet;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;

use tatami_zip::ArchiveError;

use crate::dir_fs::DirFs;
use crate::handle::VfsFile;
use crate::sanitize::{PathError, sanitize};
use crate::traits::{DirEntry, Filesystem, MountKind};
use crate::zip_fs::ZipFs;

/// Where a new mount lands in the search path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountOrder {
    /// Front of the table — highest priority, consulted first.
    Prepend,
    /// Back of the table — lowest priority, consulted last.
    Append,
}

/// Why a mount-table change was refused.
///
/// These are diagnostics, not panics: the table is left exactly as it was.
#[derive(Debug, Error)]
pub enum MountError {
    /// The mount source path does not exist.
    #[error("mount source not found: {}", .0.display())]
    SourceMissing(PathBuf),

    /// Asked to mount a directory, but the path is not one.
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Asked to mount an archive, but the path does not look like one.
    #[error("not a zip archive: {}", .0.display())]
    NotAnArchive(PathBuf),

    /// The same (root, sub dir) pair is already mounted.
    #[error("already mounted: {} (sub dir: {})", .root.display(), .sub_dir.display())]
    AlreadyMounted { root: PathBuf, sub_dir: PathBuf },

    /// No matching mount to remove.
    #[error("not mounted: {} (sub dir: {})", .root.display(), .sub_dir.display())]
    NotMounted { root: PathBuf, sub_dir: PathBuf },

    /// The matching mount is of the other kind; unmount it with the right
    /// call instead.
    #[error("mounted as a different kind: {}", .0.display())]
    KindMismatch(PathBuf),

    /// The archive failed to parse; the candidate mount was discarded.
    #[error("unreadable archive {}: {}", .path.display(), .source)]
    Archive { path: PathBuf, source: ArchiveError },

    /// An OS-level failure while preparing the mount.
    #[error("io error on {}: {}", .path.display(), .source)]
    Io { path: PathBuf, source: io::Error },
}

/// The virtual filesystem context.
///
/// Owns the ordered mount table and the elected write directory. All
/// methods take `&self` or `&mut self` on the context — there is no global
/// state — and every path argument is sanitized before any backend sees it.
#[derive(Debug, Default)]
pub struct Vfs {
    mounts: Vec<Box<dyn Filesystem>>,
    write_dir: Option<DirFs>,
    permit_links: bool,
}

impl Vfs {
    /// An empty context: no mounts, no write directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// A context pre-wired for an application: the per-user data directory
    /// for `app` (see [`crate::paths::user_dir`]) is created, elected as the
    /// write directory, and mounted at highest priority.
    pub fn with_user_dir(app: &str) -> Result<Self, MountError> {
        let dir = crate::paths::user_dir(app);
        std::fs::create_dir_all(&dir).map_err(|source| {
            reject(MountError::Io {
                path: dir.clone(),
                source,
            })
        })?;
        let mut vfs = Self::new();
        vfs.set_write_dir(&dir)?;
        vfs.mount_dir(&dir, MountOrder::Prepend)?;
        Ok(vfs)
    }

    // ---- mount table -----------------------------------------------------

    /// Mount a directory at the virtual root.
    pub fn mount_dir(&mut self, path: impl AsRef<Path>, order: MountOrder) -> Result<(), MountError> {
        self.mount_dir_at(path, "", order)
    }

    /// Mount a directory, exposing only `sub_dir` inside it.
    pub fn mount_dir_at(
        &mut self,
        path: impl AsRef<Path>,
        sub_dir: impl Into<PathBuf>,
        order: MountOrder,
    ) -> Result<(), MountError> {
        let sub_dir = sub_dir.into();
        let root = self.check_source(path.as_ref(), MountKind::Dir)?;
        self.check_duplicate(&root, &sub_dir, MountKind::Dir)?;

        let mut fs = DirFs::new(&root, sub_dir).map_err(|source| {
            reject(MountError::Io {
                path: root.clone(),
                source,
            })
        })?;
        fs.set_follow_links(self.permit_links);
        tracing::info!(root = %root.display(), "mounted directory");
        self.insert(Box::new(fs), order);
        Ok(())
    }

    /// Mount a ZIP archive at the virtual root.
    pub fn mount_zip(&mut self, path: impl AsRef<Path>, order: MountOrder) -> Result<(), MountError> {
        self.mount_zip_at(path, "", order)
    }

    /// Mount a ZIP archive, exposing only `sub_dir` inside it.
    pub fn mount_zip_at(
        &mut self,
        path: impl AsRef<Path>,
        sub_dir: impl Into<PathBuf>,
        order: MountOrder,
    ) -> Result<(), MountError> {
        let sub_dir = sub_dir.into();
        let root = self.check_source(path.as_ref(), MountKind::Zip)?;
        self.check_duplicate(&root, &sub_dir, MountKind::Zip)?;

        let fs = ZipFs::new(&root, sub_dir).map_err(|source| {
            reject(MountError::Archive {
                path: root.clone(),
                source,
            })
        })?;
        tracing::info!(archive = %root.display(), members = fs.member_count(), "mounted archive");
        self.insert(Box::new(fs), order);
        Ok(())
    }

    /// Unmount the directory mounted from `path` at the virtual root.
    pub fn unmount_dir(&mut self, path: impl AsRef<Path>) -> Result<(), MountError> {
        self.unmount_dir_at(path, "")
    }

    /// Unmount the directory mounted from `path` with `sub_dir` scoping.
    pub fn unmount_dir_at(
        &mut self,
        path: impl AsRef<Path>,
        sub_dir: impl Into<PathBuf>,
    ) -> Result<(), MountError> {
        self.unmount(path.as_ref(), &sub_dir.into(), MountKind::Dir)
    }

    /// Unmount the archive mounted from `path` at the virtual root.
    pub fn unmount_zip(&mut self, path: impl AsRef<Path>) -> Result<(), MountError> {
        self.unmount_zip_at(path, "")
    }

    /// Unmount the archive mounted from `path` with `sub_dir` scoping.
    pub fn unmount_zip_at(
        &mut self,
        path: impl AsRef<Path>,
        sub_dir: impl Into<PathBuf>,
    ) -> Result<(), MountError> {
        self.unmount(path.as_ref(), &sub_dir.into(), MountKind::Zip)
    }

    /// Elect the directory that receives writes, creations, and removals.
    ///
    /// Replaces any previous election. The directory is *not* added to the
    /// read mounts — mount it separately if it should also be readable.
    pub fn set_write_dir(&mut self, path: impl AsRef<Path>) -> Result<(), MountError> {
        let root = self.check_source(path.as_ref(), MountKind::Dir)?;
        let mut fs = DirFs::new(&root, "").map_err(|source| {
            reject(MountError::Io {
                path: root.clone(),
                source,
            })
        })?;
        fs.set_follow_links(self.permit_links);
        tracing::info!(root = %root.display(), "write directory elected");
        self.write_dir = Some(fs);
        Ok(())
    }

    /// The elected write directory, if any.
    pub fn write_dir(&self) -> Option<&Path> {
        self.write_dir.as_ref().map(|d| d.root())
    }

    /// Toggle whether directory mounts may follow symbolic links.
    ///
    /// Off by default: enumeration and existence checks skip links entirely,
    /// so a link can never lead out of a mounted tree. Applies to current
    /// and future mounts.
    pub fn permit_symlinks(&mut self, permit: bool) {
        self.permit_links = permit;
        for mount in &mut self.mounts {
            mount.set_follow_links(permit);
        }
        if let Some(dir) = &mut self.write_dir {
            dir.set_follow_links(permit);
        }
    }

    /// Unmount everything and drop the write-directory election.
    /// Idempotent; dropping the context does the same.
    pub fn clear(&mut self) {
        self.mounts.clear();
        self.write_dir = None;
    }

    /// Number of active mounts.
    pub fn mount_count(&self) -> usize {
        self.mounts.len()
    }

    // ---- read-style queries ----------------------------------------------

    /// Check whether `path` exists in any mount.
    pub fn exists(&self, path: &str) -> bool {
        let Ok(p) = self.clean(path) else { return false };
        self.mounts.iter().any(|m| m.exists(&p))
    }

    /// Check whether any mount knows `path` as a directory.
    pub fn is_dir(&self, path: &str) -> bool {
        let Ok(p) = self.clean(path) else { return false };
        self.mounts.iter().any(|m| m.is_dir(&p))
    }

    /// Real on-disk location that satisfies `path`: the backing directory
    /// for directory mounts, the archive file for archive mounts.
    pub fn real_dir(&self, path: &str) -> Option<PathBuf> {
        let p = self.clean(path).ok()?;
        self.mounts.iter().find_map(|m| m.real_dir(&p))
    }

    /// Open `path` for reading from the first mount that has it.
    pub fn open_read(&self, path: &str) -> io::Result<Box<dyn VfsFile>> {
        let p = self.clean(path).map_err(invalid_path)?;
        for mount in &self.mounts {
            match mount.open_read(&p) {
                Ok(handle) => return Ok(handle),
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(e) => return Err(e),
            }
        }
        Err(not_found(path))
    }

    /// Read the whole of `path` into memory.
    pub fn read(&self, path: &str) -> io::Result<Vec<u8>> {
        let mut handle = self.open_read(path)?;
        let mut data = Vec::with_capacity(handle.len()? as usize);
        handle.read_to_end(&mut data)?;
        Ok(data)
    }

    // ---- listing queries -------------------------------------------------

    /// List the immediate children of `dir` across all mounts.
    ///
    /// Aggregates over every mount; a higher-priority mount's entry masks a
    /// lower-priority mount's entry of the same name.
    pub fn list(&self, dir: &str) -> Vec<DirEntry> {
        let Ok(p) = self.clean(dir) else {
            return Vec::new();
        };
        let mut seen = HashSet::new();
        let mut entries = Vec::new();
        for mount in &self.mounts {
            let Ok(children) = mount.list(&p) else { continue };
            for child in children {
                if seen.insert(child.name.clone()) {
                    entries.push(child);
                }
            }
        }
        entries
    }

    /// Names of the files directly under `dir`.
    pub fn file_names(&self, dir: &str) -> Vec<String> {
        self.list(dir)
            .into_iter()
            .filter(|e| e.is_file())
            .map(|e| e.name)
            .collect()
    }

    /// Files directly under `dir`, each joined onto `dir`.
    pub fn file_paths(&self, dir: &str) -> Vec<PathBuf> {
        let Ok(p) = self.clean(dir) else {
            return Vec::new();
        };
        self.list(dir)
            .into_iter()
            .filter(|e| e.is_file())
            .map(|e| p.join(e.name))
            .collect()
    }

    /// Names of the directories directly under `dir`.
    pub fn dir_names(&self, dir: &str) -> Vec<String> {
        self.list(dir)
            .into_iter()
            .filter(|e| e.is_dir())
            .map(|e| e.name)
            .collect()
    }

    // ---- write-style operations ------------------------------------------

    /// Open `path` for writing in the write directory, truncating.
    pub fn open_write(&self, path: &str) -> io::Result<Box<dyn VfsFile>> {
        let p = self.clean(path).map_err(invalid_path)?;
        self.write_fs()?.open_write(&p, false)
    }

    /// Open `path` for appending in the write directory.
    pub fn open_append(&self, path: &str) -> io::Result<Box<dyn VfsFile>> {
        let p = self.clean(path).map_err(invalid_path)?;
        self.write_fs()?.open_write(&p, true)
    }

    /// Create a directory (and missing parents) in the write directory.
    pub fn mkdir(&self, path: &str) -> io::Result<()> {
        let p = self.clean(path).map_err(invalid_path)?;
        self.write_fs()?.mkdir(&p)
    }

    /// Remove a file or empty directory from the write directory.
    pub fn remove(&self, path: &str) -> io::Result<()> {
        let p = self.clean(path).map_err(invalid_path)?;
        self.write_fs()?.remove(&p)
    }

    // ---- internals -------------------------------------------------------

    /// Sanitize a caller path, logging the rejection once on failure.
    fn clean(&self, raw: &str) -> Result<PathBuf, PathError> {
        sanitize(raw).map_err(|e| {
            tracing::debug!(path = raw, error = %e, "rejected path");
            e
        })
    }

    fn write_fs(&self) -> io::Result<&DirFs> {
        self.write_dir.as_ref().ok_or_else(|| {
            tracing::debug!("write refused: no write directory configured");
            io::Error::new(
                io::ErrorKind::PermissionDenied,
                "no write directory configured",
            )
        })
    }

    /// Validate a mount source and return its canonical path.
    fn check_source(&self, path: &Path, kind: MountKind) -> Result<PathBuf, MountError> {
        let meta = std::fs::metadata(path)
            .map_err(|_| reject(MountError::SourceMissing(path.to_path_buf())))?;
        match kind {
            MountKind::Dir => {
                if !meta.is_dir() {
                    return Err(reject(MountError::NotADirectory(path.to_path_buf())));
                }
            }
            MountKind::Zip => {
                if !meta.is_file() || !has_zip_extension(path) {
                    return Err(reject(MountError::NotAnArchive(path.to_path_buf())));
                }
            }
        }
        std::fs::canonicalize(path).map_err(|source| {
            reject(MountError::Io {
                path: path.to_path_buf(),
                source,
            })
        })
    }

    fn check_duplicate(&self, root: &Path, sub_dir: &Path, kind: MountKind) -> Result<(), MountError> {
        if self.find_mount(root, sub_dir, kind).is_some() {
            return Err(reject(MountError::AlreadyMounted {
                root: root.to_path_buf(),
                sub_dir: sub_dir.to_path_buf(),
            }));
        }
        Ok(())
    }

    fn find_mount(&self, root: &Path, sub_dir: &Path, kind: MountKind) -> Option<usize> {
        self.mounts
            .iter()
            .position(|m| m.kind() == kind && m.root() == root && m.sub_dir() == sub_dir)
    }

    fn insert(&mut self, fs: Box<dyn Filesystem>, order: MountOrder) {
        match order {
            MountOrder::Prepend => self.mounts.insert(0, fs),
            MountOrder::Append => self.mounts.push(fs),
        }
    }

    fn unmount(&mut self, path: &Path, sub_dir: &Path, kind: MountKind) -> Result<(), MountError> {
        let root = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        match self.find_mount(&root, sub_dir, kind) {
            Some(i) => {
                let mount = self.mounts.remove(i);
                tracing::info!(root = %mount.root().display(), "unmounted");
                Ok(())
            }
            None => {
                // The same (root, sub dir) under the other kind is a hard
                // error, not a silent miss.
                let other = match kind {
                    MountKind::Dir => MountKind::Zip,
                    MountKind::Zip => MountKind::Dir,
                };
                if self.find_mount(&root, sub_dir, other).is_some() {
                    Err(reject(MountError::KindMismatch(root)))
                } else {
                    Err(reject(MountError::NotMounted {
                        root,
                        sub_dir: sub_dir.to_path_buf(),
                    }))
                }
            }
        }
    }
}

fn has_zip_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("zip"))
}

/// Log a refused mount-table change and hand the error back.
fn reject(err: MountError) -> MountError {
    tracing::warn!(error = %err, "mount table change rejected");
    err
}

fn invalid_path(err: PathError) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, err.to_string())
}

fn not_found(path: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("not found in any mount: {path}"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn dir_with(files: &[(&str, &[u8])]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for (name, contents) in files {
            let path = dir.path().join(name);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(path, contents).unwrap();
        }
        dir
    }

    #[test]
    fn empty_context_answers_nothing() {
        let vfs = Vfs::new();
        assert!(!vfs.exists("anything"));
        assert!(vfs.list("").is_empty());
        assert!(vfs.real_dir("anything").is_none());
        let err = vfs.open_read("anything").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn duplicate_mount_is_rejected() {
        let dir = dir_with(&[("a.txt", b"a")]);
        let mut vfs = Vfs::new();

        vfs.mount_dir(dir.path(), MountOrder::Append).unwrap();
        let err = vfs.mount_dir(dir.path(), MountOrder::Prepend).unwrap_err();
        assert!(matches!(err, MountError::AlreadyMounted { .. }));
        assert_eq!(vfs.mount_count(), 1);

        // A different sub dir is a different mount.
        vfs.mount_dir_at(dir.path(), "sub", MountOrder::Append).unwrap();
        assert_eq!(vfs.mount_count(), 2);
    }

    #[test]
    fn mount_requires_an_existing_directory() {
        let mut vfs = Vfs::new();
        let err = vfs.mount_dir("/no/such/dir", MountOrder::Append).unwrap_err();
        assert!(matches!(err, MountError::SourceMissing(_)));

        let dir = dir_with(&[("plain.txt", b"")]);
        let err = vfs
            .mount_dir(dir.path().join("plain.txt"), MountOrder::Append)
            .unwrap_err();
        assert!(matches!(err, MountError::NotADirectory(_)));
        assert_eq!(vfs.mount_count(), 0);
    }

    #[test]
    fn mount_zip_requires_a_zip_name() {
        let dir = dir_with(&[("archive.pak", b"PK\x05\x06")]);
        let mut vfs = Vfs::new();
        let err = vfs
            .mount_zip(dir.path().join("archive.pak"), MountOrder::Append)
            .unwrap_err();
        assert!(matches!(err, MountError::NotAnArchive(_)));
    }

    #[test]
    fn malformed_zip_leaves_the_table_unchanged() {
        let dir = dir_with(&[("bad.zip", b"this is not a zip")]);
        let mut vfs = Vfs::new();
        let err = vfs
            .mount_zip(dir.path().join("bad.zip"), MountOrder::Append)
            .unwrap_err();
        assert!(matches!(err, MountError::Archive { .. }));
        assert_eq!(vfs.mount_count(), 0);
    }

    #[test]
    fn unmount_requires_an_exact_match() {
        let dir = dir_with(&[("a.txt", b"a")]);
        let other = dir_with(&[]);
        let mut vfs = Vfs::new();
        vfs.mount_dir(dir.path(), MountOrder::Append).unwrap();

        // Wrong root.
        assert!(matches!(
            vfs.unmount_dir(other.path()),
            Err(MountError::NotMounted { .. })
        ));
        // Wrong sub dir.
        assert!(matches!(
            vfs.unmount_dir_at(dir.path(), "sub"),
            Err(MountError::NotMounted { .. })
        ));
        // Nothing was removed by the failed attempts.
        assert_eq!(vfs.mount_count(), 1);

        vfs.unmount_dir(dir.path()).unwrap();
        assert_eq!(vfs.mount_count(), 0);

        // Unmounting again keeps failing.
        assert!(vfs.unmount_dir(dir.path()).is_err());
    }

    #[test]
    fn unmount_kind_mismatch_is_a_hard_error() {
        let dir = dir_with(&[("a.txt", b"a")]);
        let mut vfs = Vfs::new();
        vfs.mount_dir(dir.path(), MountOrder::Append).unwrap();

        let err = vfs.unmount_zip(dir.path()).unwrap_err();
        assert!(matches!(err, MountError::KindMismatch(_)));
        assert_eq!(vfs.mount_count(), 1);
    }

    #[test]
    fn prepended_mount_shadows_appended() {
        let base = dir_with(&[("config.ini", b"base")]);
        let patch = dir_with(&[("config.ini", b"patch")]);
        let mut vfs = Vfs::new();

        vfs.mount_dir(base.path(), MountOrder::Append).unwrap();
        vfs.mount_dir(patch.path(), MountOrder::Prepend).unwrap();

        assert_eq!(vfs.read("config.ini").unwrap(), b"patch");

        // Drop the patch and the base shows through again.
        vfs.unmount_dir(patch.path()).unwrap();
        assert_eq!(vfs.read("config.ini").unwrap(), b"base");
    }

    #[test]
    fn listings_aggregate_and_mask_by_priority() {
        let base = dir_with(&[("shared.txt", b"base"), ("base_only.txt", b"")]);
        let patch = dir_with(&[("shared.txt", b"patch"), ("patch_only.txt", b"")]);
        let mut vfs = Vfs::new();

        vfs.mount_dir(base.path(), MountOrder::Append).unwrap();
        vfs.mount_dir(patch.path(), MountOrder::Prepend).unwrap();

        let mut names = vfs.file_names("");
        names.sort();
        assert_eq!(names, ["base_only.txt", "patch_only.txt", "shared.txt"]);
    }

    #[test]
    fn traversal_paths_answer_not_found() {
        let dir = dir_with(&[("a.txt", b"a")]);
        let mut vfs = Vfs::new();
        vfs.mount_dir(dir.path(), MountOrder::Append).unwrap();
        vfs.set_write_dir(dir.path()).unwrap();

        assert!(!vfs.exists("../a.txt"));
        assert!(!vfs.exists("maps/../../a.txt"));
        assert!(vfs.list("..").is_empty());
        assert!(vfs.open_read("../a.txt").is_err());
        assert!(vfs.open_write("../escape.txt").is_err());
        assert!(vfs.mkdir("../escape").is_err());
    }

    #[test]
    fn writes_require_an_elected_directory() {
        let dir = dir_with(&[]);
        let mut vfs = Vfs::new();
        vfs.mount_dir(dir.path(), MountOrder::Append).unwrap();

        let err = vfs.open_write("save.dat").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
        assert!(vfs.mkdir("saves").is_err());
        assert!(vfs.remove("a.txt").is_err());

        vfs.set_write_dir(dir.path()).unwrap();
        assert_eq!(vfs.write_dir().unwrap(), dir.path().canonicalize().unwrap());
        vfs.mkdir("saves").unwrap();
        assert!(dir.path().join("saves").is_dir());
    }

    #[test]
    fn write_dir_is_not_implicitly_readable() {
        let dir = dir_with(&[("secret.txt", b"s")]);
        let mut vfs = Vfs::new();
        vfs.set_write_dir(dir.path()).unwrap();

        assert_eq!(vfs.mount_count(), 0);
        assert!(!vfs.exists("secret.txt"));
    }

    #[test]
    fn clear_unmounts_everything_and_is_idempotent() {
        let dir = dir_with(&[("a.txt", b"a")]);
        let mut vfs = Vfs::new();
        vfs.mount_dir(dir.path(), MountOrder::Append).unwrap();
        vfs.set_write_dir(dir.path()).unwrap();

        vfs.clear();
        assert_eq!(vfs.mount_count(), 0);
        assert!(vfs.write_dir().is_none());

        vfs.clear();
        assert_eq!(vfs.mount_count(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn symlink_policy_applies_to_every_mount() {
        let dir = dir_with(&[("target.txt", b"t")]);
        std::os::unix::fs::symlink(dir.path().join("target.txt"), dir.path().join("link.txt"))
            .unwrap();

        let mut vfs = Vfs::new();
        vfs.mount_dir(dir.path(), MountOrder::Append).unwrap();
        assert!(!vfs.exists("link.txt"));

        vfs.permit_symlinks(true);
        assert!(vfs.exists("link.txt"));
        assert_eq!(vfs.read("link.txt").unwrap(), b"t");

        vfs.permit_symlinks(false);
        assert!(!vfs.exists("link.txt"));
    }

    #[test]
    fn real_dir_names_the_winning_mount() {
        let base = dir_with(&[("a.txt", b"a")]);
        let mut vfs = Vfs::new();
        vfs.mount_dir(base.path(), MountOrder::Append).unwrap();

        let real = vfs.real_dir("a.txt").unwrap();
        assert_eq!(real, base.path().canonicalize().unwrap());
        assert!(vfs.real_dir("ghost.txt").is_none());
    }
}
