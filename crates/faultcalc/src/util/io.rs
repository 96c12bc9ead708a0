//! I/O utility functions

use std::fs;
use std::io;
use std::path::Path;

/// Write content to a file atomically using write-then-rename.
///
/// The content is first written to a sibling `.tmp` file which is then renamed
/// over the target, so readers never observe a half-written settings file.
///
/// # Example
/// ```ignore
/// atomic_write(Path::new("settings.yaml"), &yaml)?;
/// ```
pub fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let temp_path = path.with_extension("yaml.tmp");
    fs::write(&temp_path, content)?;
    fs::rename(&temp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_atomic_write() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.yaml");

        atomic_write(&path, "output: json\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "output: json\n");
        assert!(!path.with_extension("yaml.tmp").exists());
    }

    #[test]
    fn test_atomic_write_replaces_existing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.yaml");

        fs::write(&path, "old").unwrap();
        atomic_write(&path, "new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }
}
