//! File collaborators around the extractor: read the markdown in, write the JSON out.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::scene::Scene;

pub fn read_document(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path).map_err(|source| Error::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "read input document");
    Ok(text)
}

/// Serialize `scenes` as a pretty-printed JSON array, replacing any existing file.
pub fn write_scenes(path: &Path, scenes: &[Scene]) -> Result<()> {
    let json = serde_json::to_string_pretty(scenes)?;
    fs::write(path, json).map_err(|source| Error::OutputUnwritable {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), scenes = scenes.len(), "wrote scenes");
    Ok(())
}

/// Read back a file produced by [`write_scenes`].
pub fn load_scenes(path: &Path) -> Result<Vec<Scene>> {
    let json = read_document(path)?;
    Ok(serde_json::from_str(&json)?)
}
