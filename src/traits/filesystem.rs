use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Trait for filesystem operations to enable testing with mocks
pub trait FileSystem: Send + Sync {
    /// Read file contents as string
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Write string contents to file
    fn write(&self, path: &Path, contents: &str) -> Result<()>;
}

/// Real filesystem implementation using std::fs
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {:?}", path))
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create parent directory: {:?}", parent))?;
        }

        std::fs::write(path, contents).with_context(|| format!("Failed to write file: {:?}", path))
    }
}

/// Mock filesystem implementation for testing (in-memory)
#[allow(dead_code)]
pub struct MockFileSystem {
    files: Arc<RwLock<HashMap<PathBuf, String>>>,
}

#[allow(dead_code)]
impl MockFileSystem {
    /// Create new empty mock filesystem
    pub fn new() -> Self {
        Self {
            files: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Seed a file
    pub fn with_file(self, path: impl Into<PathBuf>, contents: &str) -> Self {
        self.files
            .write()
            .unwrap()
            .insert(path.into(), contents.to_string());
        self
    }

    /// Get captured file contents for testing assertions
    pub fn get_file_contents(&self, path: &Path) -> Option<String> {
        self.files.read().unwrap().get(path).cloned()
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.files
            .read()
            .unwrap()
            .get(path)
            .cloned()
            .with_context(|| format!("File not found in mock filesystem: {:?}", path))
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        self.files
            .write()
            .unwrap()
            .insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}
