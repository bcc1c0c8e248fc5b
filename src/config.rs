//! Device profile input: a JSON file of named devices, each carrying the
//! eight band specs for its speaker-simulation EQ curve.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::preset::BandSpec;

/// One device entry from the config file.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceProfile {
    pub name: String,
    /// Explicit output filename; derived from `name` when absent.
    #[serde(default)]
    pub filename: Option<String>,
    pub bands: Vec<BandSpec>,
}

impl DeviceProfile {
    pub fn output_filename(&self) -> String {
        self.filename
            .clone()
            .unwrap_or_else(|| format!("{}.pst", self.name.replace(' ', "_")))
    }

    pub fn active_bands(&self) -> usize {
        self.bands.iter().filter(|b| b.is_active()).count()
    }
}

#[derive(Debug, Deserialize)]
struct DeviceFile {
    devices: Vec<DeviceProfile>,
}

pub fn load_devices(path: &Path) -> Result<Vec<DeviceProfile>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("could not read device config {}", path.display()))?;
    let file: DeviceFile = serde_json::from_str(&raw)
        .with_context(|| format!("malformed device config {}", path.display()))?;
    Ok(file.devices)
}
