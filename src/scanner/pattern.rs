use crate::constants::PROFILE_ROOTS;
use crate::scanner::utils::{existing_cache_subdirs, expand_home};
use globset::{GlobBuilder, GlobMatcher};
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Whether `pattern` points into a multi-profile browser directory.
pub fn is_profile_pattern(pattern: &str) -> bool {
    PROFILE_ROOTS.iter().any(|root| pattern.contains(root))
}

/// Resolves a path pattern with at most one `*` segment into concrete paths.
///
/// Without a wildcard the expanded literal path is returned as-is (no
/// existence check) unless `expand_profiles` is set and it is a directory, in
/// which case its known cache subdirectories are returned instead.
///
/// With a wildcard, the parent directory is listed and every entry whose name
/// matches the segment is kept, in listing order. Components after the
/// wildcard segment are appended to each match and kept only when the joined
/// path exists. Filesystem errors yield an empty result.
pub fn resolve_pattern(home: &Path, pattern: &str, expand_profiles: bool) -> Vec<PathBuf> {
    let expanded = expand_home(home, pattern);

    let components: Vec<Component<'_>> = expanded.components().collect();
    let Some(wild_idx) = components
        .iter()
        .position(|c| c.as_os_str().to_string_lossy().contains('*'))
    else {
        if expand_profiles && expanded.is_dir() {
            return existing_cache_subdirs(&expanded);
        }
        return vec![expanded];
    };

    let parent: PathBuf = components[..wild_idx].iter().collect();
    let remainder: PathBuf = components[wild_idx + 1..].iter().collect();
    let segment = components[wild_idx].as_os_str().to_string_lossy();

    let Some(matcher) = segment_matcher(&segment) else {
        return vec![];
    };

    let entries = match fs::read_dir(&parent) {
        Ok(entries) => entries,
        Err(e) => {
            debug!(parent = %parent.display(), error = %e, "pattern parent not readable");
            return vec![];
        }
    };

    let mut matches = Vec::new();
    for entry in entries.filter_map(Result::ok) {
        if !matcher.is_match(Path::new(&entry.file_name())) {
            continue;
        }

        let path = entry.path();
        if remainder.as_os_str().is_empty() {
            if expand_profiles && path.is_dir() {
                matches.extend(existing_cache_subdirs(&path));
            } else {
                matches.push(path);
            }
        } else {
            let joined = path.join(&remainder);
            if joined.exists() {
                matches.push(joined);
            }
        }
    }
    matches
}

/// Compiles a single path segment where `*` means "zero or more characters"
/// and everything else is literal.
fn segment_matcher(segment: &str) -> Option<GlobMatcher> {
    let escaped = segment
        .split('*')
        .map(globset::escape)
        .collect::<Vec<_>>()
        .join("*");

    match GlobBuilder::new(&escaped).literal_separator(true).build() {
        Ok(glob) => Some(glob.compile_matcher()),
        Err(e) => {
            debug!(segment, error = %e, "invalid wildcard segment");
            None
        }
    }
}
