use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

// @module: File and stdin/stdout helpers for the CLI

/// Path argument meaning "read from stdin"
pub const STDIN_MARKER: &str = "-";

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Read from the given path, or from stdin when the path is `-`
    pub fn read_input(path: &Path) -> Result<String> {
        if path.as_os_str() == STDIN_MARKER {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            return Ok(buffer);
        }
        Self::read_to_string(path)
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }

    // @generates: Output path in dir, refusing to clobber unless forced
    pub fn resolve_output_path<P: AsRef<Path>>(
        output_dir: P,
        file_name: &str,
        force_overwrite: bool,
    ) -> Result<PathBuf> {
        let path = output_dir.as_ref().join(file_name);
        if path.exists() && !force_overwrite {
            return Err(anyhow::anyhow!(
                "Output file already exists: {:?}. Use -f to force overwrite.",
                path
            ));
        }
        Ok(path)
    }
}
