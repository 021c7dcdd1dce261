use crate::constants::APPLICATION_SUPPORT;
use crate::model::{CatalogEntry, DiscoveredApp};
use crate::scanner::utils::{existing_cache_subdirs, expand_home};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Finds Electron-style apps under `~/Library/Application Support` that the
/// catalog does not already cover. Read errors yield an empty list.
pub fn discover_apps(home: &Path, catalog: &[CatalogEntry]) -> Vec<DiscoveredApp> {
    let root = home.join(APPLICATION_SUPPORT);

    let mut app_dirs: Vec<PathBuf> = match fs::read_dir(&root) {
        Ok(read_dir) => read_dir
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_ok_and(|t| t.is_dir()))
            .map(|e| e.path())
            .collect(),
        Err(e) => {
            debug!(root = %root.display(), error = %e, "skipping app discovery");
            return vec![];
        }
    };
    app_dirs.sort();

    let known: Vec<String> = catalog
        .iter()
        .flat_map(|entry| entry.patterns.iter())
        .map(|pattern| expand_home(home, pattern).to_string_lossy().into_owned())
        .collect();

    let mut apps = Vec::new();
    for app_dir in app_dirs {
        let Some(name) = app_dir.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };

        if known.iter().any(|path| path.contains(&name)) {
            trace!(app = %name, "already in catalog");
            continue;
        }

        let paths = existing_cache_subdirs(&app_dir);
        if paths.is_empty() {
            continue;
        }

        debug!(app = %name, caches = paths.len(), "discovered cache-bearing app");
        apps.push(DiscoveredApp {
            key: sanitize_key(&name),
            name,
            paths,
        });
    }
    apps
}

/// Lower-cases `name` and drops everything outside `[a-z0-9]`.
pub fn sanitize_key(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use tempfile::tempdir;

    const CATALOG: &[CatalogEntry] = &[CatalogEntry {
        key: "vscode",
        name: "VSCode Cache",
        patterns: &["~/Library/Application Support/Code/Cache"],
        requires_sudo: false,
        warning: None,
        command: None,
    }];

    #[test]
    fn sanitize_key_test() {
        assert_eq!(sanitize_key("Slack"), "slack");
        assert_eq!(sanitize_key("Notion Calendar"), "notioncalendar");
        assert_eq!(sanitize_key("com.tinyspeck.slackmacgap"), "comtinyspeckslackmacgap");
        assert_eq!(sanitize_key("Zoom-2.0_beta"), "zoom20beta");
    }

    #[test]
    fn missing_root_discovers_nothing() {
        let home = Path::new("/nonexistent/cachesweep/home");
        assert!(discover_apps(home, CATALOG).is_empty());
    }

    #[test]
    fn discovers_apps_with_cache_subdirs() -> Result<()> {
        let home = tempdir()?;
        let support = home.path().join(APPLICATION_SUPPORT);

        fs::create_dir_all(support.join("Slack/Cache"))?;
        fs::create_dir_all(support.join("Slack/Service Worker"))?;
        fs::create_dir_all(support.join("Slack/Preferences"))?;
        fs::create_dir_all(support.join("Plain App/Data"))?;
        fs::write(support.join("loose-file"), b"x")?;

        let apps = discover_apps(home.path(), CATALOG);
        assert_eq!(apps.len(), 1);
        assert_eq!(apps[0].key, "slack");
        assert_eq!(apps[0].name, "Slack");
        assert_eq!(
            apps[0].paths,
            vec![
                support.join("Slack/Cache"),
                support.join("Slack/Service Worker"),
            ]
        );
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_app_dirs_are_not_followed() -> Result<()> {
        let home = tempdir()?;
        let support = home.path().join(APPLICATION_SUPPORT);
        let elsewhere = home.path().join("elsewhere/Linked");
        fs::create_dir_all(elsewhere.join("Cache"))?;
        fs::create_dir_all(&support)?;
        std::os::unix::fs::symlink(&elsewhere, support.join("Linked"))?;
        fs::create_dir_all(support.join("Real/Cache"))?;

        let apps = discover_apps(home.path(), CATALOG);
        let keys: Vec<&str> = apps.iter().map(|a| a.key.as_str()).collect();
        assert_eq!(keys, vec!["real"]);
        Ok(())
    }

    #[test]
    fn skips_apps_named_in_catalog_paths() -> Result<()> {
        let home = tempdir()?;
        let support = home.path().join(APPLICATION_SUPPORT);

        // "Code" and "Cod" are both substrings of the catalog's VSCode paths.
        fs::create_dir_all(support.join("Code/GPUCache"))?;
        fs::create_dir_all(support.join("Cod/GPUCache"))?;
        fs::create_dir_all(support.join("Discord/GPUCache"))?;

        let apps = discover_apps(home.path(), CATALOG);
        let keys: Vec<&str> = apps.iter().map(|a| a.key.as_str()).collect();
        assert_eq!(keys, vec!["discord"]);
        Ok(())
    }
}
