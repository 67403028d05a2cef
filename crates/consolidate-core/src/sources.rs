// Rust guideline compliant 2026-02-06

//! Input discovery and file-handle setup.
//!
//! Scans an input directory, validates that every entry is a supported
//! text file, and opens the accepted files for the merge driver. The scan
//! is strict: a single unsupported entry fails the whole operation before
//! any output is produced.

use crate::{Error, Result};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Open input files keyed by path, ordered by identifier.
pub struct SourceSet {
    inputs: BTreeMap<String, BufReader<File>>,
}

impl SourceSet {
    /// Opens every text file in a directory.
    ///
    /// The scan is non-recursive. Every directory entry must carry one of
    /// the accepted extensions; the first entry that does not (including
    /// subdirectories) aborts the scan.
    ///
    /// # Arguments
    ///
    /// * `dir` - Path to the input directory
    /// * `extensions` - Accepted extensions, without leading dots
    ///
    /// # Returns
    ///
    /// A SourceSet with one open reader per file, keyed by the file's path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `dir` is missing or not a directory
    /// - Any entry has an unsupported extension
    /// - A file cannot be opened
    pub fn open_directory(dir: &Path, extensions: &[String]) -> Result<Self> {
        if !dir.is_dir() {
            return Err(Error::InvalidDirectory(format!(
                "`{}` is not a path to a valid directory",
                dir.display()
            )));
        }

        let mut inputs = BTreeMap::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if !is_supported_text_file(&name, extensions) {
                return Err(Error::UnsupportedFile(format!(
                    "non-text file `{}` found in directory `{}`",
                    name,
                    dir.display()
                )));
            }
            let path = entry.path();
            let file = File::open(&path)?;
            inputs.insert(path.to_string_lossy().into_owned(), BufReader::new(file));
        }

        Ok(Self { inputs })
    }

    /// Returns the number of open sources.
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    /// Returns true if the directory contributed no files.
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Releases the ordered reader map to the merge driver.
    pub fn into_inner(self) -> BTreeMap<String, BufReader<File>> {
        self.inputs
    }
}

/// Creates (or truncates) the output file behind a buffered writer.
///
/// # Errors
///
/// Returns an error if the file cannot be created.
pub fn open_output(path: &Path) -> Result<BufWriter<File>> {
    Ok(BufWriter::new(File::create(path)?))
}

/// Returns whether the filename carries a supported text extension.
fn is_supported_text_file(name: &str, extensions: &[String]) -> bool {
    extensions
        .iter()
        .any(|ext| name.strip_suffix(ext.as_str()).is_some_and(|stem| stem.ends_with('.')))
}
