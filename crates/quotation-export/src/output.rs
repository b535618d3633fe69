use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::error::ExportError;

/// Directory generated quotations are written into.
///
/// Files are only ever added; each gets a random name so concurrent renders
/// never target the same path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDir {
    root: PathBuf,
}

impl OutputDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the directory (and parents) if it doesn't exist yet.
    pub fn ensure(&self) -> Result<(), ExportError> {
        std::fs::create_dir_all(&self.root)?;
        Ok(())
    }

    /// A fresh `quotation_<hex>.pdf` path inside the directory.
    pub fn next_path(&self) -> PathBuf {
        self.root.join(quotation_file_name())
    }
}

pub fn quotation_file_name() -> String {
    format!("quotation_{}.pdf", Uuid::new_v4().simple())
}
