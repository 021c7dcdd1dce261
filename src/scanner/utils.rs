use crate::constants::{CACHE_SUBDIRS, HOME_SHORTHAND};
use std::path::{Path, PathBuf};

/// Expands a leading `~` or `~/` against `home`. Any other input is returned as-is.
pub fn expand_home(home: &Path, raw: &str) -> PathBuf {
    match raw.strip_prefix(HOME_SHORTHAND) {
        Some("") => home.to_path_buf(),
        Some(rest) if rest.starts_with('/') => home.join(rest.trim_start_matches('/')),
        _ => PathBuf::from(raw),
    }
}

/// Known cache subdirectories that exist directly beneath `dir`, in
/// [`CACHE_SUBDIRS`] order.
pub fn existing_cache_subdirs(dir: &Path) -> Vec<PathBuf> {
    CACHE_SUBDIRS
        .iter()
        .map(|name| dir.join(name))
        .filter(|path| path.exists())
        .collect()
}
