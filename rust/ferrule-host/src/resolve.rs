//! Library path resolution.
//!
//! Maps a bare library stem like `ferrule_demo` to the platform's shared
//! library file name and finds it on disk, checking the working directory
//! and an optional search directory before falling back to the OS loader's
//! own search path.

use std::path::{Path, PathBuf};

/// Platform-specific file name candidates for a library stem, most
/// conventional first.
pub fn candidate_names(stem: &str) -> Vec<String> {
    if cfg!(target_os = "windows") {
        vec![format!("{stem}.dll"), format!("lib{stem}.dll")]
    } else if cfg!(target_os = "macos") {
        vec![format!("lib{stem}.dylib"), format!("{stem}.dylib")]
    } else {
        vec![format!("lib{stem}.so"), format!("{stem}.so")]
    }
}

/// Resolve `name` to a loadable path.
///
/// A name that is absolute or already carries an extension is used as given
/// (relative to `search_dir` if it does not exist as-is). Bare stems are
/// expanded through [`candidate_names`] and probed in the working directory
/// and then `search_dir`. When nothing exists on disk, the most conventional
/// candidate is returned so the OS loader can search its own paths.
pub fn resolve_library_path(name: &str, search_dir: Option<&Path>) -> PathBuf {
    let direct = Path::new(name);
    if direct.is_absolute() || direct.extension().is_some() {
        if direct.exists() {
            return direct.to_path_buf();
        }
        if let Some(dir) = search_dir {
            let joined = dir.join(direct);
            if joined.exists() {
                return joined;
            }
        }
        return direct.to_path_buf();
    }

    let candidates = candidate_names(name);
    for candidate in &candidates {
        let p = Path::new(candidate);
        if p.exists() {
            return p.to_path_buf();
        }
    }
    if let Some(dir) = search_dir {
        for candidate in &candidates {
            let joined = dir.join(candidate);
            if joined.exists() {
                return joined;
            }
        }
    }

    PathBuf::from(&candidates[0])
}
