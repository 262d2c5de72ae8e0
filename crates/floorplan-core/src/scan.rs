//! Image discovery: recursive directory walk for floor plan files.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::ScanConfig;
use crate::error::AnalysisError;

/// Finds image files under a root directory.
pub struct ImageScanner {
    config: ScanConfig,
}

impl ImageScanner {
    /// Create a new scanner for the configured extensions.
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Collect every matching image file under `root`, recursively, sorted
    /// lexicographically by path so processing order is reproducible.
    ///
    /// Non-matching files and directories are skipped silently. Any
    /// traversal error (missing root, unreadable directory) aborts the
    /// whole scan; no partial listing is returned.
    pub fn scan(&self, root: &Path) -> Result<Vec<PathBuf>, AnalysisError> {
        let mut paths = Vec::new();

        for entry in WalkDir::new(root).follow_links(true) {
            let entry = entry.map_err(|e| AnalysisError::Walk {
                path: e
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.to_path_buf()),
                message: e.to_string(),
            })?;

            if entry.file_type().is_file() && self.is_supported(entry.path()) {
                paths.push(entry.path().to_path_buf());
            }
        }

        paths.sort();
        Ok(paths)
    }

    /// Check if a file has a supported extension.
    fn is_supported(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                let ext_lower = ext.to_lowercase();
                self.config
                    .extensions
                    .iter()
                    .any(|e| e.to_lowercase() == ext_lower)
            })
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScanConfig;
    use std::fs;

    fn scanner() -> ImageScanner {
        ImageScanner::new(ScanConfig::default())
    }

    #[test]
    fn test_is_supported() {
        let scanner = scanner();
        assert!(scanner.is_supported(Path::new("plan.jpeg")));
        assert!(scanner.is_supported(Path::new("plan.JPEG")));
        assert!(!scanner.is_supported(Path::new("plan.png")));
        assert!(!scanner.is_supported(Path::new("notes.txt")));
        assert!(!scanner.is_supported(Path::new("noext")));
    }

    #[test]
    fn test_scan_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.jpeg"), b"x").unwrap();
        fs::write(dir.path().join("a.jpeg"), b"x").unwrap();
        fs::write(dir.path().join("readme.txt"), b"x").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/c.jpeg"), b"x").unwrap();
        fs::write(dir.path().join("sub/skip.png"), b"x").unwrap();

        let paths = scanner().scan(dir.path()).unwrap();
        let names: Vec<String> = paths
            .iter()
            .map(|p| {
                p.strip_prefix(dir.path())
                    .unwrap()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        assert_eq!(names, vec!["a.jpeg", "b.jpeg", "sub/c.jpeg"]);
    }

    #[test]
    fn test_scan_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        let paths = scanner().scan(dir.path()).unwrap();
        assert!(paths.is_empty());
    }

    #[test]
    fn test_scan_missing_dir_errors() {
        let err = scanner()
            .scan(Path::new("/definitely/not/a/real/dir"))
            .unwrap_err();
        assert!(matches!(err, AnalysisError::Walk { .. }));
    }

    #[test]
    fn test_scan_single_file_root() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("only.jpeg");
        fs::write(&file, b"x").unwrap();

        let paths = scanner().scan(&file).unwrap();
        assert_eq!(paths, vec![file]);
    }
}
