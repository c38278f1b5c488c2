//! Starter-kit helpers: scaffold small demo directories on disk.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;

/// Sample data file written by [`create_csv_app`].
const SAMPLE_CSV: &str = "value\n1\n2\n3\n4\n5\n";

const SAMPLE_README: &str = "# CSV demo\n\n\
Run `fusion mean numbers.csv` or `fusion median numbers.csv` against the\n\
bundled sample data.\n";

/// Recursively copy the directory tree at `src` into `dst`.
///
/// Missing parent directories are created. Returns the number of files
/// copied.
pub fn copy_tree(src: &Path, dst: &Path) -> Result<usize> {
    let mut copied = 0usize;

    for entry in walkdir::WalkDir::new(src) {
        let entry = entry.map_err(|e| std::io::Error::other(e.to_string()))?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| std::io::Error::other(e.to_string()))?;
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }

    debug!("Copied {} files from {} to {}", copied, src.display(), dst.display());
    Ok(copied)
}

/// Create a minimal CSV demo in `dst` and return the created path.
///
/// Writes `numbers.csv` (the bundled sample data) and a short README.
pub fn create_csv_app(dst: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dst)?;
    std::fs::write(dst.join("numbers.csv"), SAMPLE_CSV)?;
    std::fs::write(dst.join("README.md"), SAMPLE_README)?;
    Ok(dst.to_path_buf())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_csv_app_writes_sample_files() {
        let tmp = TempDir::new().expect("tempdir");
        let dst = tmp.path().join("demo");

        let created = create_csv_app(&dst).expect("create_csv_app");

        assert_eq!(created, dst);
        let csv = std::fs::read_to_string(dst.join("numbers.csv")).expect("read csv");
        assert!(csv.starts_with("value\n"));
        assert!(dst.join("README.md").exists());
    }

    #[test]
    fn test_copy_tree_preserves_structure() {
        let tmp = TempDir::new().expect("tempdir");
        let src = tmp.path().join("src");
        let nested = src.join("a").join("b");
        std::fs::create_dir_all(&nested).expect("mkdirs");
        std::fs::write(src.join("top.txt"), "top").expect("write");
        std::fs::write(nested.join("deep.txt"), "deep").expect("write");

        let dst = tmp.path().join("dst");
        let copied = copy_tree(&src, &dst).expect("copy_tree");

        assert_eq!(copied, 2);
        assert_eq!(
            std::fs::read_to_string(dst.join("top.txt")).expect("read"),
            "top"
        );
        assert_eq!(
            std::fs::read_to_string(dst.join("a").join("b").join("deep.txt")).expect("read"),
            "deep"
        );
    }

    #[test]
    fn test_copy_tree_empty_dir() {
        let tmp = TempDir::new().expect("tempdir");
        let src = tmp.path().join("empty");
        std::fs::create_dir_all(&src).expect("mkdir");

        let dst = tmp.path().join("out");
        let copied = copy_tree(&src, &dst).expect("copy_tree");

        assert_eq!(copied, 0);
        assert!(dst.is_dir());
    }
}
