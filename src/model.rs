use std::path::PathBuf;

/// A hard-coded cache category. Patterns may start with `~/` and may contain
/// one `*` segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub key: &'static str,
    pub name: &'static str,
    pub patterns: &'static [&'static str],
    pub requires_sudo: bool,
    pub warning: Option<&'static str>,
    pub command: Option<&'static str>,
}

/// An application directory found by probing for cache subdirectories.
/// Paths are absolute and already known to exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredApp {
    pub key: String,
    pub name: String,
    pub paths: Vec<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Category<'a> {
    Catalog(&'a CatalogEntry),
    Discovered(DiscoveredApp),
}

impl Category<'_> {
    pub fn key(&self) -> &str {
        match self {
            Self::Catalog(entry) => entry.key,
            Self::Discovered(app) => &app.key,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Catalog(entry) => entry.name,
            Self::Discovered(app) => &app.name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScanResult {
    pub key: String,
    pub name: String,
    pub requires_sudo: bool,
    pub warning: Option<String>,
    pub command: Option<String>,
    pub auto_discovered: bool,
    /// Paths that existed with a nonzero size when scanned.
    pub paths: Vec<PathBuf>,
    pub total_size: u64,
    pub is_selected: bool,
}

impl ScanResult {
    pub fn from_category(category: &Category<'_>, paths: Vec<PathBuf>, total_size: u64) -> Self {
        let (requires_sudo, warning, command, auto_discovered) = match category {
            Category::Catalog(entry) => (
                entry.requires_sudo,
                entry.warning.map(str::to_string),
                entry.command.map(str::to_string),
                false,
            ),
            Category::Discovered(_) => (false, None, None, true),
        };

        Self {
            key: category.key().to_string(),
            name: category.name().to_string(),
            requires_sudo,
            warning,
            command,
            auto_discovered,
            paths,
            total_size,
            is_selected: false,
        }
    }

    /// Short status tags shown next to the size.
    pub fn tags(&self) -> Vec<&'static str> {
        let mut tags = Vec::new();
        if self.requires_sudo {
            tags.push("sudo");
        }
        if self.warning.is_some() {
            tags.push("warn");
        }
        if self.command.is_some() {
            tags.push("cmd");
        }
        if self.auto_discovered {
            tags.push("auto");
        }
        tags
    }
}
