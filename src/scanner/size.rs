use crate::constants::DU_BIN;
use jwalk::WalkDir;
use std::fs;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

/// Measures how much disk space a path takes up.
pub trait SizeProbe {
    /// Size of a directory tree in bytes. Only called for existing directories.
    fn directory_size(&self, path: &Path) -> u64;

    /// Size of `path` in bytes: 0 when missing, the byte length for a file,
    /// and [`SizeProbe::directory_size`] for a directory.
    fn measure(&self, path: &Path) -> u64 {
        match fs::metadata(path) {
            Ok(metadata) if metadata.is_dir() => self.directory_size(path),
            Ok(metadata) => metadata.len(),
            Err(_) => 0,
        }
    }
}

/// Allocated size as reported by `du -sk`.
pub struct DiskUsageProbe;

impl SizeProbe for DiskUsageProbe {
    fn directory_size(&self, path: &Path) -> u64 {
        let output = Command::new(DU_BIN)
            .arg("-sk")
            .arg(path)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output();

        match output {
            // du exits nonzero on unreadable subtrees but still prints a total.
            Ok(out) => parse_du_output(&String::from_utf8_lossy(&out.stdout)),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "failed to run du");
                0
            }
        }
    }
}

/// Sum of regular file lengths, walking the tree in-process.
pub struct ApparentSizeProbe;

impl SizeProbe for ApparentSizeProbe {
    fn directory_size(&self, path: &Path) -> u64 {
        let mut size = 0;

        for entry in WalkDir::new(path)
            .skip_hidden(false)
            .parallelism(jwalk::Parallelism::Serial)
            .into_iter()
            .flatten()
        {
            if let Ok(metadata) = entry.metadata()
                && metadata.is_file()
            {
                size += metadata.len();
            }
        }

        size
    }
}

/// Converts the first field of `du -sk` output (kilobytes) to bytes.
fn parse_du_output(stdout: &str) -> u64 {
    stdout
        .split_whitespace()
        .next()
        .and_then(|kb| kb.parse::<u64>().ok())
        .map_or(0, |kb| kb.saturating_mul(1024))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn missing_path_is_zero() {
        let path = Path::new("/path/to/non/existent/directory/cachesweep_test_12345");
        assert_eq!(DiskUsageProbe.measure(path), 0);
        assert_eq!(ApparentSizeProbe.measure(path), 0);
    }

    #[test]
    fn regular_file_is_its_length() -> Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("blob.bin");
        let mut f = File::create(&file_path)?;
        f.write_all(&[0u8; 1234])?;

        assert_eq!(DiskUsageProbe.measure(&file_path), 1234);
        assert_eq!(ApparentSizeProbe.measure(&file_path), 1234);
        Ok(())
    }

    #[test]
    fn apparent_size_sums_nested_files() -> Result<()> {
        let dir = tempdir()?;
        let root = dir.path();

        fs::create_dir_all(root.join("a/b"))?;
        fs::write(root.join("a/one"), [0u8; 100])?;
        fs::write(root.join("a/b/two"), [0u8; 200])?;
        fs::write(root.join(".hidden"), [0u8; 50])?;

        assert_eq!(ApparentSizeProbe.measure(root), 350);
        Ok(())
    }

    #[test]
    fn disk_usage_reports_whole_kilobytes() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("data"), vec![1u8; 64 * 1024])?;

        let size = DiskUsageProbe.measure(dir.path());
        assert!(size > 0);
        assert_eq!(size % 1024, 0);
        Ok(())
    }

    #[test]
    fn parse_du_output_test() {
        assert_eq!(parse_du_output("12\t/some/path\n"), 12 * 1024);
        assert_eq!(parse_du_output("0\t/empty\n"), 0);
        assert_eq!(parse_du_output(""), 0);
        assert_eq!(parse_du_output("du: cannot read\n"), 0);
    }
}
