use crate::constants::{SHELL_BIN, SUDO_BIN};
use crate::model::ScanResult;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum CleanError {
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error("`{command}` exited with {status}")]
    Exit { command: String, status: ExitStatus },
    #[error("failed to remove {}: {source}", path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to move {} to trash: {source}", path.display())]
    Trash {
        path: PathBuf,
        #[source]
        source: trash::Error,
    },
}

/// Side effects performed while cleaning.
pub trait CleanBackend {
    fn run_command(&self, command: &str) -> Result<(), CleanError>;
    fn remove(&self, path: &Path) -> Result<(), CleanError>;
    fn remove_elevated(&self, path: &Path) -> Result<(), CleanError>;
}

pub struct SystemBackend {
    pub use_trash: bool,
}

impl CleanBackend for SystemBackend {
    fn run_command(&self, command: &str) -> Result<(), CleanError> {
        let status = Command::new(SHELL_BIN)
            .arg("-c")
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|source| CleanError::Spawn {
                command: command.to_string(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(CleanError::Exit {
                command: command.to_string(),
                status,
            })
        }
    }

    fn remove(&self, path: &Path) -> Result<(), CleanError> {
        if self.use_trash {
            return trash::delete(path).map_err(|source| CleanError::Trash {
                path: path.to_path_buf(),
                source,
            });
        }

        let removal = match fs::symlink_metadata(path) {
            Ok(metadata) if metadata.is_dir() => fs::remove_dir_all(path),
            Ok(_) => fs::remove_file(path),
            Err(e) => Err(e),
        };

        match removal {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(CleanError::Remove {
                path: path.to_path_buf(),
                source: e,
            }),
            _ => Ok(()),
        }
    }

    fn remove_elevated(&self, path: &Path) -> Result<(), CleanError> {
        let command = format!("{SUDO_BIN} rm -rf {}", path.display());
        // stdin stays attached so sudo can prompt for a password.
        let status = Command::new(SUDO_BIN)
            .args(["rm", "-rf", "--"])
            .arg(path)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|source| CleanError::Spawn {
                command: command.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(CleanError::Exit { command, status })
        }
    }
}

#[derive(Debug)]
pub enum CleanOutcome {
    Succeeded { freed: u64 },
    Failed(CleanError),
    NothingToDo,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CleanReport {
    pub succeeded: usize,
    pub failed: usize,
    pub skipped: usize,
    pub bytes_freed: u64,
}

impl CleanReport {
    fn record(&mut self, outcome: &CleanOutcome) {
        match outcome {
            CleanOutcome::Succeeded { freed } => {
                self.succeeded += 1;
                self.bytes_freed += freed;
            }
            CleanOutcome::Failed(_) => self.failed += 1,
            CleanOutcome::NothingToDo => self.skipped += 1,
        }
    }
}

/// Cleans every result whose key is in `selected`, in result order. A failed
/// entry never stops the ones after it. `on_start` fires before each entry
/// and `on_outcome` after it.
pub fn clean_selected(
    results: &[ScanResult],
    selected: &[String],
    backend: &dyn CleanBackend,
    mut on_start: impl FnMut(&ScanResult),
    mut on_outcome: impl FnMut(&ScanResult, &CleanOutcome),
) -> CleanReport {
    let mut report = CleanReport::default();

    for result in results.iter().filter(|r| selected.contains(&r.key)) {
        on_start(result);
        let outcome = clean_entry(result, backend);
        report.record(&outcome);
        on_outcome(result, &outcome);
    }

    info!(
        succeeded = report.succeeded,
        failed = report.failed,
        bytes_freed = report.bytes_freed,
        "cleaning finished"
    );
    report
}

/// Runs the entry's command if it has one, otherwise removes each path still
/// on disk and stops at the first failure.
pub fn clean_entry(result: &ScanResult, backend: &dyn CleanBackend) -> CleanOutcome {
    if let Some(command) = &result.command {
        return match backend.run_command(command) {
            Ok(()) => CleanOutcome::Succeeded { freed: 0 },
            Err(e) => CleanOutcome::Failed(e),
        };
    }

    let mut attempted = false;
    for path in &result.paths {
        if fs::symlink_metadata(path).is_err() {
            debug!(path = %path.display(), "already gone");
            continue;
        }
        attempted = true;

        let removal = if result.requires_sudo {
            backend.remove_elevated(path)
        } else {
            backend.remove(path)
        };
        if let Err(e) = removal {
            return CleanOutcome::Failed(e);
        }
    }

    if attempted {
        CleanOutcome::Succeeded {
            freed: result.total_size,
        }
    } else {
        CleanOutcome::NothingToDo
    }
}
