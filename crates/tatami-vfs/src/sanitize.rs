//! Virtual path sanitization.
//!
//! Every façade entry point that takes a path runs it through [`sanitize`]
//! before any backend is consulted. Rejection short-circuits the whole call;
//! no backend ever sees an unsanitized path.

use std::path::{Component, MAIN_SEPARATOR, Path, PathBuf};

use thiserror::Error;

/// Why a virtual path was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// Absolute paths (including drive prefixes) are never virtual paths.
    #[error("absolute path not allowed: {0}")]
    Absolute(String),
    /// A `..` segment would climb above the virtual root.
    #[error("path escapes the mount root: {0}")]
    Escapes(String),
    /// The path is structurally unusable (embedded NUL).
    #[error("malformed path: {0}")]
    Malformed(String),
}

/// Normalize a caller-supplied virtual path.
///
/// Both separator styles are converted to the platform's, `.` segments are
/// dropped, and `..` segments resolve against the segments before them.
/// The empty string is the virtual root and sanitizes to an empty path.
///
/// Pure: no filesystem access, no side effects.
pub fn sanitize(raw: &str) -> Result<PathBuf, PathError> {
    if raw.contains('\0') {
        return Err(PathError::Malformed(raw.escape_default().to_string()));
    }

    let unified: String = raw
        .chars()
        .map(|c| if c == '/' || c == '\\' { MAIN_SEPARATOR } else { c })
        .collect();

    // A Windows drive prefix is absolute no matter the host platform.
    let bytes = unified.as_bytes();
    if bytes.len() >= 2 && bytes[1] == b':' && bytes[0].is_ascii_alphabetic() {
        return Err(PathError::Absolute(raw.to_string()));
    }

    let mut cleaned = PathBuf::new();
    let mut depth = 0_usize;
    for component in Path::new(&unified).components() {
        match component {
            Component::Normal(part) => {
                cleaned.push(part);
                depth += 1;
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if depth == 0 {
                    return Err(PathError::Escapes(raw.to_string()));
                }
                cleaned.pop();
                depth -= 1;
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(PathError::Absolute(raw.to_string()));
            }
        }
    }
    Ok(cleaned)
}
