use std::{fs::File, path::Path};

/// A file of pairs to load into a map. Keys and values are strings
#[derive(Debug, serde::Deserialize)]
pub struct EntriesFile {
    /// Pairs to set, in order
    pub entries: Vec<(String, String)>,

    /// Force every pair in
    #[serde(default)]
    pub force: bool,
}

impl EntriesFile {
    /// Read an entries file from disk
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        log::debug!("Reading entries from {}", path.display());
        let file = File::open(path)?;
        Ok(serde_json::from_reader(file)?)
    }
}
