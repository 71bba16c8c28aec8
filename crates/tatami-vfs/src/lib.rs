//! tatami-vfs (畳): a layered virtual filesystem.
//!
//! One ordered search path over many backing stores — plain directories and
//! ZIP archives — behind a single API:
//!
//! ```text
//! Vfs
//! ├── data/patch.zip        ← prepended: overrides everything below it
//! ├── ~/.local/share/app/   ← user directory (usually also the write dir)
//! └── data/base.zip         ← appended: the stock assets
//! ```
//!
//! Callers open, read, and enumerate virtual paths; the [`Vfs`] façade scans
//! the mounts front-to-back and the first store that can answer wins.
//! Listings aggregate across every mount, with higher-priority mounts
//! masking same-named entries below them. Writes only ever land in the one
//! elected write directory.
//!
//! Backends are interchangeable behind the [`Filesystem`] trait: [`DirFs`]
//! maps straight onto the OS, [`ZipFs`] answers from an in-memory index of
//! the archive's local file headers (see `tatami-zip`) and expands members
//! on demand.

mod dir_fs;
mod handle;
pub mod paths;
mod sanitize;
mod traits;
mod vfs;
mod zip_fs;

pub use dir_fs::DirFs;
pub use handle::{ArchiveFile, LocalFile, VfsFile};
pub use sanitize::{PathError, sanitize};
pub use traits::{DirEntry, EntryKind, Filesystem, MountKind};
pub use vfs::{MountError, MountOrder, Vfs};
pub use zip_fs::ZipFs;
