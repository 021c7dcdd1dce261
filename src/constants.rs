pub const HOME_SHORTHAND: &str = "~";
pub const APPLICATION_SUPPORT: &str = "Library/Application Support";

/// Subdirectory names Chromium and Electron apps use for disposable data.
pub const CACHE_SUBDIRS: &[&str] = &[
    "Cache",
    "Code Cache",
    "GPUCache",
    "WebStorage",
    "Service Worker",
    "IndexedDB",
    "blob_storage",
    "Session Storage",
    "databases",
    "Local Storage",
];

/// Browser roots whose children are per-profile directories.
pub const PROFILE_ROOTS: &[&str] = &[
    "Google/Chrome",
    "BraveSoftware/Brave-Browser",
    "Microsoft Edge",
];

pub const DU_BIN: &str = "du";
pub const SUDO_BIN: &str = "sudo";
pub const SHELL_BIN: &str = "/bin/sh";
