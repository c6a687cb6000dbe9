use crate::core::errors::SkillPathError;
use csv::ReaderBuilder;
use log::{info, warn};
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

/// One row of the career-skill lookup table. `age` is the upper bound of
/// the age band the row applies to.
#[derive(Debug, Deserialize, Clone)]
pub struct DatasetRow {
    #[serde(rename = "Age")]
    pub age: u32,
    #[serde(rename = "Education Level")]
    pub education: String,
    #[serde(rename = "Occupation")]
    pub occupation: String,
    #[serde(rename = "Interest")]
    pub interest: String,
    #[serde(rename = "Experience")]
    pub experience: String,
    #[serde(rename = "Recommended Skill")]
    pub recommended_skill: String,
}

/// Reads the dataset CSV once, in file order. Rows without a recommended
/// skill are useless to every lookup tier and are dropped here.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Vec<DatasetRow>, SkillPathError> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| SkillPathError::DatasetError(format!("failed to open {}: {}", path.display(), e)))?;
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);

    let mut rows = Vec::new();
    let mut dropped = 0usize;
    for result in reader.deserialize() {
        let row: DatasetRow =
            result.map_err(|e| SkillPathError::DatasetError(format!("failed to parse {}: {}", path.display(), e)))?;
        if row.recommended_skill.trim().is_empty() {
            dropped += 1;
            continue;
        }
        rows.push(row);
    }

    if dropped > 0 {
        warn!("dropped {} dataset rows without a recommended skill", dropped);
    }
    info!("dataset loaded: {} records", rows.len());
    Ok(rows)
}
