//! Batch preset generation: per-device encode + write, the device listing,
//! and the name filter backing `--device`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::config::DeviceProfile;
use crate::preset;

/// Case-insensitive substring match on device names.
pub fn filter_devices<'a>(
    devices: &'a [DeviceProfile],
    query: &str,
) -> Vec<&'a DeviceProfile> {
    let query = query.to_lowercase();
    devices
        .iter()
        .filter(|d| d.name.to_lowercase().contains(&query))
        .collect()
}

/// Encode one device's preset and write it under `output_dir`.
///
/// The buffer is fully assembled in memory before the file is created, so a
/// failed encode never leaves a partial file behind.
pub fn write_preset(
    device: &DeviceProfile,
    output_dir: &Path,
) -> Result<PathBuf> {
    let data = preset::encode(&device.bands)
        .with_context(|| format!("device '{}'", device.name))?;

    let path = output_dir.join(device.output_filename());
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("could not create {}", parent.display()))?;
    }
    fs::write(&path, &data)
        .with_context(|| format!("could not write {}", path.display()))?;
    debug!(device = %device.name, path = %path.display(), "wrote preset");
    Ok(path)
}

/// Generate a preset file for every device in `targets`, printing one
/// summary line per device.
pub fn generate_all(
    targets: &[&DeviceProfile],
    output_dir: &Path,
) -> Result<()> {
    println!(
        "Generating {} preset(s) -> {}/\n",
        targets.len(),
        output_dir.display()
    );

    for device in targets {
        let path = write_preset(device, output_dir)?;
        let written = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        // Band 0 / band 7 are the HP / LP stages by profile convention;
        // encode has already verified both frequencies are present.
        let hp = device.bands[0].frequency.unwrap_or_default();
        let lp = device.bands[7].frequency.unwrap_or_default();
        println!(
            "  {:<22} {}/{} bands  HP={}Hz  LP={}Hz  ->  {}",
            device.name,
            device.active_bands(),
            preset::BAND_COUNT,
            hp,
            lp,
            written
        );
    }

    println!("\nDone. {} preset(s) written.", targets.len());
    Ok(())
}

/// Print the device table for `--list`.
pub fn list_devices(devices: &[DeviceProfile]) {
    println!("Available devices ({}):\n", devices.len());
    for device in devices {
        println!(
            "  {:<22} {}/{} bands active  ->  {}",
            device.name,
            device.active_bands(),
            preset::BAND_COUNT,
            device.output_filename()
        );
    }
    println!();
}
