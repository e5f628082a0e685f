use crate::domain::ports::MenuSource;
use crate::utils::error::Result;
use std::fs;
use std::path::PathBuf;

/// Filesystem-backed menu source.
#[derive(Debug, Clone)]
pub struct FileMenuSource {
    path: PathBuf,
}

impl FileMenuSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl MenuSource for FileMenuSource {
    fn read(&self) -> Result<String> {
        let content = fs::read_to_string(&self.path)?;
        Ok(content)
    }
}
