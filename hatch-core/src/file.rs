use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the project root
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk, replacing whatever is there
    fn write(&self, base: &Path) -> Result<()> {
        write_file(&self.path(base), &self.render())
    }
}

/// Create parent directories, then write. The directory creation is what
/// guarantees `src/routes/` exists before anything is written into it.
fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::write(path, e))?;
    }
    std::fs::write(path, content).map_err(|e| Error::write(path, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Greeting;

    impl GeneratedFile for Greeting {
        fn path(&self, base: &Path) -> PathBuf {
            base.join("src").join("routes").join("greeting.rs")
        }

        fn render(&self) -> String {
            "pub fn hi() {}\n".to_string()
        }
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("c").join("test.txt");

        write_file(&path, "nested").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_write_file_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        write_file(&path, "first").unwrap();
        write_file(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_write_file_reports_path_on_failure() {
        let temp = TempDir::new().unwrap();
        // a regular file where a directory is expected
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let path = blocker.join("inner.txt");

        let err = write_file(&path, "x").unwrap_err();
        match *err {
            Error::Write { path: at, .. } => assert_eq!(at, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_generated_file_write() {
        let temp = TempDir::new().unwrap();

        Greeting.write(temp.path()).unwrap();

        let written = temp.path().join("src/routes/greeting.rs");
        assert_eq!(fs::read_to_string(&written).unwrap(), "pub fn hi() {}\n");

        // a second write replaces what cargo or the user left there
        fs::write(&written, "fn old() {}\n").unwrap();
        Greeting.write(temp.path()).unwrap();
        assert_eq!(fs::read_to_string(&written).unwrap(), "pub fn hi() {}\n");
    }
}
