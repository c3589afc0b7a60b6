// Local filesystem adapter - Input discovery

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Files found for a set of command-line inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discovery {
    /// Media files, in argument order, without duplicates
    pub files: Vec<PathBuf>,
    /// Inputs that are neither a file nor a directory
    pub missing: Vec<PathBuf>,
}

/// Local filesystem adapter
pub struct FsLocalAdapter {
    extension: String,
}

impl FsLocalAdapter {
    /// Create an adapter that picks up files with the given extension from directories
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
        }
    }

    /// Expand inputs into media files.
    ///
    /// Files are taken as given. Directories are scanned one level deep for
    /// files whose extension matches exactly, sorted by name.
    pub fn discover(&self, inputs: &[PathBuf]) -> Discovery {
        let mut discovery = Discovery::default();
        let mut seen = HashSet::new();

        for input in inputs {
            if input.is_file() {
                if seen.insert(input.clone()) {
                    discovery.files.push(input.clone());
                }
            } else if input.is_dir() {
                for file in self.scan_directory(input) {
                    if seen.insert(file.clone()) {
                        discovery.files.push(file);
                    }
                }
            } else {
                tracing::warn!("Input does not exist: {}", input.display());
                discovery.missing.push(input.clone());
            }
        }

        discovery
    }

    fn scan_directory(&self, dir: &Path) -> Vec<PathBuf> {
        WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| self.has_extension(path))
            .collect()
    }

    fn has_extension(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| ext.to_string_lossy() == self.extension.as_str())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_directory_scan_is_flat_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.mkv"), b"").unwrap();
        fs::write(dir.path().join("a.mkv"), b"").unwrap();
        fs::write(dir.path().join("c.mp4"), b"").unwrap();
        fs::write(dir.path().join("d.MKV"), b"").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("e.mkv"), b"").unwrap();

        let discovery = FsLocalAdapter::new("mkv").discover(&[dir.path().to_path_buf()]);

        assert_eq!(
            discovery.files,
            vec![dir.path().join("a.mkv"), dir.path().join("b.mkv")]
        );
        assert!(discovery.missing.is_empty());
    }

    #[test]
    fn test_explicit_files_keep_order_and_dedupe() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("z.mkv");
        let second = dir.path().join("a.mp4");
        fs::write(&first, b"").unwrap();
        fs::write(&second, b"").unwrap();

        let discovery = FsLocalAdapter::new("mkv").discover(&[
            first.clone(),
            second.clone(),
            first.clone(),
            dir.path().to_path_buf(),
        ]);

        assert_eq!(discovery.files, vec![first, second]);
    }

    #[test]
    fn test_missing_inputs_are_reported() {
        let missing = PathBuf::from("/nonexistent/trackname/input.mkv");
        let discovery = FsLocalAdapter::new("mkv").discover(&[missing.clone()]);
        assert!(discovery.files.is_empty());
        assert_eq!(discovery.missing, vec![missing]);
    }
}
