use crate::scanner::size::{ApparentSizeProbe, DiskUsageProbe, SizeProbe};
use anyhow::{Context, Result};
use std::path::PathBuf;

pub struct Settings {
    pub home: PathBuf,
    pub list_only: bool,
    pub apparent_size: bool,
    pub discover: bool,
    pub use_trash: bool,
}

impl Settings {
    pub fn probe(&self) -> Box<dyn SizeProbe> {
        if self.apparent_size {
            Box::new(ApparentSizeProbe)
        } else {
            Box::new(DiskUsageProbe)
        }
    }
}

/// Home of the invoking user, even when run through `sudo`.
pub fn resolve_home() -> Result<PathBuf> {
    home_for(std::env::var("SUDO_USER").ok(), dirs::home_dir())
}

fn home_for(sudo_user: Option<String>, home_dir: Option<PathBuf>) -> Result<PathBuf> {
    match sudo_user {
        Some(user) if !user.is_empty() => Ok(PathBuf::from("/Users").join(user)),
        _ => home_dir.context("Home directory not found"),
    }
}
