use crate::model::CatalogEntry;

pub static CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        key: "yarn",
        name: "Yarn Cache",
        patterns: &["~/Library/Caches/Yarn/v6"],
        requires_sudo: false,
        warning: None,
        command: None,
    },
    CatalogEntry {
        key: "chrome",
        name: "Chrome Cache",
        patterns: &[
            "~/Library/Caches/Google/Chrome/*/Cache",
            "~/Library/Caches/Google/Chrome/*/Code Cache",
            "~/Library/Application Support/Google/Chrome/*/WebStorage",
            "~/Library/Application Support/Google/Chrome/*/Service Worker",
        ],
        requires_sudo: false,
        warning: None,
        command: None,
    },
    CatalogEntry {
        key: "googleUpdater",
        name: "Google Updater",
        patterns: &["~/Library/Application Support/Google/GoogleUpdater"],
        requires_sudo: false,
        warning: None,
        command: None,
    },
    CatalogEntry {
        key: "cocoapods",
        name: "CocoaPods Cache",
        patterns: &["~/Library/Caches/CocoaPods/Pods"],
        requires_sudo: false,
        warning: None,
        command: None,
    },
    CatalogEntry {
        key: "homebrew",
        name: "Homebrew Cache",
        patterns: &["~/Library/Caches/Homebrew/downloads"],
        requires_sudo: false,
        warning: None,
        command: Some("brew cleanup"),
    },
    CatalogEntry {
        key: "vscode",
        name: "VSCode Cache",
        patterns: &[
            "~/Library/Application Support/Code/Cache",
            "~/Library/Application Support/Code/Code Cache",
            "~/Library/Application Support/Code/GPUCache",
            "~/Library/Application Support/Code/WebStorage",
            "~/Library/Application Support/Code/Service Worker",
            "~/Library/Application Support/Code/CachedData",
            "~/Library/Application Support/Code - Insiders/Cache",
            "~/Library/Application Support/Code - Insiders/Code Cache",
            "~/Library/Application Support/Code - Insiders/GPUCache",
            "~/Library/Application Support/Code - Insiders/WebStorage",
            "~/Library/Application Support/Code - Insiders/Service Worker",
            "~/Library/Application Support/Code - Insiders/CachedData",
        ],
        requires_sudo: false,
        warning: None,
        command: None,
    },
    CatalogEntry {
        key: "krisp",
        name: "Krisp Cache",
        patterns: &[
            "~/Library/Application Support/krisp/Cache",
            "~/Library/Application Support/krisp/Code Cache",
            "~/Library/Application Support/krisp/GPUCache",
            "~/Library/Application Support/krisp/WebStorage",
            "~/Library/Application Support/krisp/Service Worker",
            "~/Library/Application Support/krisp/update",
            "~/Library/Application Support/krisp/logs",
        ],
        requires_sudo: false,
        warning: None,
        command: None,
    },
    CatalogEntry {
        key: "warp",
        name: "Warp Terminal Cache",
        patterns: &[
            "~/Library/Application Support/dev.warp.Warp-Stable/Cache",
            "~/Library/Application Support/dev.warp.Warp-Stable/Code Cache",
            "~/Library/Application Support/dev.warp.Warp-Stable/GPUCache",
            "~/Library/Application Support/dev.warp.Warp-Stable/autoupdate",
        ],
        requires_sudo: false,
        warning: None,
        command: None,
    },
    CatalogEntry {
        key: "teams",
        name: "Microsoft Teams Cache",
        patterns: &[
            "~/Library/Containers/com.microsoft.teams2/Data/Library/Caches",
            "~/Library/Containers/com.microsoft.teams2/Data/Library/Application Support/Microsoft/MSTeams/EBWebView/WV2Profile_tfw/Service Worker",
            "~/Library/Containers/com.microsoft.teams2/Data/Library/Application Support/Microsoft/MSTeams/EBWebView/WV2Profile_tfw/Session Storage",
            "~/Library/Containers/com.microsoft.teams2/Data/Library/Application Support/Microsoft/MSTeams/EBWebView/WV2Profile_tfw/WebStorage",
            "~/Library/Group Containers/UBF8T346G9.com.microsoft.teams/Library/Application Support/Logs",
        ],
        requires_sudo: false,
        warning: None,
        command: None,
    },
    CatalogEntry {
        key: "xcode",
        name: "Xcode Cache",
        patterns: &[
            "~/Library/Developer/Xcode/DerivedData",
            "~/Library/Developer/Xcode/UserData",
        ],
        requires_sudo: false,
        warning: None,
        command: None,
    },
    CatalogEntry {
        key: "gradle",
        name: "Gradle Cache",
        patterns: &["~/.gradle"],
        requires_sudo: false,
        warning: Some(
            "Cleaning this will require re-installing modules for mobile projects (first build will be slower)",
        ),
        command: None,
    },
    CatalogEntry {
        key: "userCache",
        name: "User Cache Directory",
        patterns: &["~/.cache"],
        requires_sudo: false,
        warning: None,
        command: None,
    },
    CatalogEntry {
        key: "mediaAnalysis",
        name: "Media Analysis Cache",
        patterns: &[
            "~/Library/Containers/com.apple.mediaanalysisd/Data/Library/Caches/com.apple.mediaanalysisd/com.apple.e5rt.e5bundlecache",
        ],
        requires_sudo: false,
        warning: None,
        command: None,
    },
    CatalogEntry {
        key: "systemTemp",
        name: "System Temp",
        patterns: &["/private/var/tmp"],
        requires_sudo: true,
        warning: Some("Requires sudo - cleaning system-level temporary files"),
        command: None,
    },
    CatalogEntry {
        key: "simulator",
        name: "iOS Simulator Cache",
        patterns: &["/Library/Developer/CoreSimulator/Caches"],
        requires_sudo: true,
        warning: Some("Requires sudo"),
        command: None,
    },
    CatalogEntry {
        key: "systemLogs",
        name: "System Logs",
        patterns: &["/Library/Logs"],
        requires_sudo: true,
        warning: Some("Requires sudo - cleaning system-level logs"),
        command: None,
    },
    CatalogEntry {
        key: "npm",
        name: "NPM Cache",
        patterns: &[],
        requires_sudo: false,
        warning: None,
        command: Some("npm cache clean --force"),
    },
    CatalogEntry {
        key: "pnpm",
        name: "PNPM Store",
        patterns: &[],
        requires_sudo: false,
        warning: None,
        command: Some("pnpm store prune"),
    },
];
