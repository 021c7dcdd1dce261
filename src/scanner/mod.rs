pub mod discovery;
pub mod pattern;
pub mod size;
pub mod utils;

use crate::model::{Category, CatalogEntry, DiscoveredApp, ScanResult};
use crate::scanner::discovery::discover_apps;
use crate::scanner::pattern::{is_profile_pattern, resolve_pattern};
use crate::scanner::size::SizeProbe;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub struct CatalogScanner<'a> {
    pub home: &'a Path,
    pub catalog: &'a [CatalogEntry],
    pub probe: &'a dyn SizeProbe,
    pub discover: bool,
}

impl CatalogScanner<'_> {
    /// Measures every catalog and discovered category, largest first.
    ///
    /// Categories with nothing on disk are dropped unless they declare a
    /// command. Equal sizes keep catalog order.
    pub fn scan(&self, progress_cb: Option<&dyn Fn(&str)>) -> Vec<ScanResult> {
        let discovered = if self.discover {
            discover_apps(self.home, self.catalog)
        } else {
            vec![]
        };
        let categories = merge_categories(self.catalog, discovered);
        info!(categories = categories.len(), "scanning");

        let mut results: Vec<ScanResult> = categories
            .iter()
            .filter_map(|category| {
                if let Some(cb) = progress_cb {
                    cb(category.name());
                }
                self.scan_category(category)
            })
            .collect();

        results.sort_by(|a, b| b.total_size.cmp(&a.total_size));
        results
    }

    fn scan_category(&self, category: &Category<'_>) -> Option<ScanResult> {
        let candidates: Vec<PathBuf> = match category {
            Category::Catalog(entry) => entry
                .patterns
                .iter()
                .flat_map(|pattern| {
                    resolve_pattern(self.home, pattern, is_profile_pattern(pattern))
                })
                .collect(),
            Category::Discovered(app) => app.paths.clone(),
        };

        let mut total_size = 0;
        let mut paths = Vec::new();
        for path in candidates {
            let size = self.probe.measure(&path);
            if size > 0 {
                total_size += size;
                paths.push(path);
            }
        }

        let has_command = matches!(category, Category::Catalog(entry) if entry.command.is_some());
        if total_size == 0 && !has_command {
            return None;
        }

        debug!(key = category.key(), total_size, paths = paths.len(), "measured");
        Some(ScanResult::from_category(category, paths, total_size))
    }
}

/// Catalog entries first, then discovered apps whose keys are still free.
fn merge_categories(catalog: &[CatalogEntry], discovered: Vec<DiscoveredApp>) -> Vec<Category<'_>> {
    let mut taken: HashSet<String> = catalog.iter().map(|e| e.key.to_string()).collect();
    let mut merged: Vec<Category<'_>> = catalog.iter().map(Category::Catalog).collect();

    for app in discovered {
        if taken.insert(app.key.clone()) {
            merged.push(Category::Discovered(app));
        } else {
            warn!(key = %app.key, app = %app.name, "discovered app key already in use, skipping");
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::APPLICATION_SUPPORT;
    use crate::scanner::size::ApparentSizeProbe;
    use anyhow::Result;
    use std::fs;
    use tempfile::tempdir;

    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * 1024;

    fn scanner<'a>(home: &'a Path, catalog: &'a [CatalogEntry]) -> CatalogScanner<'a> {
        CatalogScanner {
            home,
            catalog,
            probe: &ApparentSizeProbe,
            discover: true,
        }
    }

    const fn entry(key: &'static str, patterns: &'static [&'static str]) -> CatalogEntry {
        CatalogEntry {
            key,
            name: key,
            patterns,
            requires_sudo: false,
            warning: None,
            command: None,
        }
    }

    #[test]
    fn user_cache_end_to_end() -> Result<()> {
        const CATALOG: &[CatalogEntry] = &[entry("userCache", &["~/.cache"])];
        let home = tempdir()?;
        let cache = home.path().join(".cache");
        fs::create_dir_all(cache.join("pip"))?;
        fs::write(cache.join("pip/wheel"), vec![0u8; 6 * 1024])?;
        fs::write(cache.join("index"), vec![0u8; 4 * 1024])?;

        let results = scanner(home.path(), CATALOG).scan(None);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].key, "userCache");
        assert_eq!(results[0].total_size, 10 * KIB);
        assert_eq!(results[0].paths, vec![cache]);
        assert!(!results[0].auto_discovered);
        Ok(())
    }

    #[test]
    fn command_entry_is_kept_without_paths() -> Result<()> {
        const CATALOG: &[CatalogEntry] = &[
            CatalogEntry {
                command: Some("npm cache clean --force"),
                ..entry("npm", &[])
            },
            entry("empty", &["~/nothing-here"]),
        ];
        let home = tempdir()?;

        let results = scanner(home.path(), CATALOG).scan(None);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].key, "npm");
        assert_eq!(results[0].total_size, 0);
        assert!(results[0].paths.is_empty());
        assert_eq!(results[0].command.as_deref(), Some("npm cache clean --force"));
        Ok(())
    }

    #[test]
    fn chrome_profiles_are_summed() -> Result<()> {
        const CATALOG: &[CatalogEntry] =
            &[entry("chrome", &["~/Library/Caches/Google/Chrome/*/Cache"])];
        let home = tempdir()?;
        let chrome = home.path().join("Library/Caches/Google/Chrome");
        for profile in ["Default", "Profile 1"] {
            let cache = chrome.join(profile).join("Cache");
            fs::create_dir_all(&cache)?;
            fs::write(cache.join("data_0"), vec![0u8; 5 * 1024 * 1024])?;
        }

        let results = scanner(home.path(), CATALOG).scan(None);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].total_size, 10 * MIB);

        let mut paths = results[0].paths.clone();
        paths.sort();
        assert_eq!(
            paths,
            vec![chrome.join("Default/Cache"), chrome.join("Profile 1/Cache")]
        );
        Ok(())
    }

    #[test]
    fn empty_paths_are_not_reported() -> Result<()> {
        const CATALOG: &[CatalogEntry] = &[entry("xcode", &["~/DerivedData", "~/UserData"])];
        let home = tempdir()?;
        fs::create_dir_all(home.path().join("DerivedData"))?;
        fs::create_dir_all(home.path().join("UserData"))?;
        fs::write(home.path().join("UserData/state"), [0u8; 10])?;

        let results = scanner(home.path(), CATALOG).scan(None);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].paths, vec![home.path().join("UserData")]);
        assert_eq!(results[0].total_size, 10);
        Ok(())
    }

    #[test]
    fn results_sorted_descending_and_stable() -> Result<()> {
        const CATALOG: &[CatalogEntry] = &[
            entry("small", &["~/small"]),
            entry("tieA", &["~/tieA"]),
            entry("big", &["~/big"]),
            entry("tieB", &["~/tieB"]),
            CatalogEntry {
                command: Some("true"),
                ..entry("cmd", &[])
            },
        ];
        let home = tempdir()?;
        fs::write(home.path().join("small"), [0u8; 10])?;
        fs::write(home.path().join("tieA"), [0u8; 50])?;
        fs::write(home.path().join("big"), [0u8; 100])?;
        fs::write(home.path().join("tieB"), [0u8; 50])?;

        let results = scanner(home.path(), CATALOG).scan(None);
        let keys: Vec<&str> = results.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["big", "tieA", "tieB", "small", "cmd"]);
        assert!(results.windows(2).all(|w| w[0].total_size >= w[1].total_size));
        Ok(())
    }

    #[test]
    fn discovered_apps_are_scanned_after_catalog() -> Result<()> {
        const CATALOG: &[CatalogEntry] = &[entry(
            "vscode",
            &["~/Library/Application Support/Code/Cache"],
        )];
        let home = tempdir()?;
        let support = home.path().join(APPLICATION_SUPPORT);
        fs::create_dir_all(support.join("Code/Cache"))?;
        fs::write(support.join("Code/Cache/a"), [0u8; 30])?;
        fs::create_dir_all(support.join("Slack/GPUCache"))?;
        fs::write(support.join("Slack/GPUCache/b"), [0u8; 30])?;

        let results = scanner(home.path(), CATALOG).scan(None);
        let keys: Vec<&str> = results.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["vscode", "slack"]);
        assert!(results[1].auto_discovered);
        assert_eq!(results[1].paths, vec![support.join("Slack/GPUCache")]);

        let no_discovery = CatalogScanner {
            discover: false,
            ..scanner(home.path(), CATALOG)
        };
        assert_eq!(no_discovery.scan(None).len(), 1);
        Ok(())
    }

    #[test]
    fn progress_callback_sees_every_category() -> Result<()> {
        const CATALOG: &[CatalogEntry] = &[entry("a", &["~/a"]), entry("b", &["~/b"])];
        let home = tempdir()?;
        let seen = std::cell::RefCell::new(Vec::new());
        let cb = |name: &str| seen.borrow_mut().push(name.to_string());

        scanner(home.path(), CATALOG).scan(Some(&cb));
        assert_eq!(seen.into_inner(), vec!["a", "b"]);
        Ok(())
    }

    #[test]
    fn merge_keeps_static_precedence_and_first_discovered() {
        const CATALOG: &[CatalogEntry] = &[entry("slack", &["~/x"])];
        let app = |key: &str, name: &str| DiscoveredApp {
            key: key.to_string(),
            name: name.to_string(),
            paths: vec![],
        };

        let merged = merge_categories(
            CATALOG,
            vec![
                app("slack", "slack"),
                app("notion", "Notion"),
                app("notion", "notion!"),
            ],
        );
        let names: Vec<&str> = merged.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["slack", "Notion"]);
        assert!(matches!(merged[0], Category::Catalog(_)));
    }
}
