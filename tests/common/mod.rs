use assert_fs::TempDir;
use assert_fs::prelude::*;

/// A full 8-band profile in JSON, flat from 100 Hz with an 8 kHz low-pass
/// shelf cut on the last band.
pub const EIGHT_BANDS: &str = r#"[
    { "frequency": 100 },
    { "frequency": 200 },
    { "frequency": 400 },
    { "frequency": 800 },
    { "frequency": 1600 },
    { "frequency": 3200 },
    { "frequency": 6400 },
    { "frequency": 8000, "gain": -3, "enabled": false }
]"#;

/// Builds a temp dir holding a devices.json with two profiles:
/// "iPhone Speaker" (derived filename) and "Laptop" (explicit filename).
pub fn basic_config() -> TempDir {
    let td = TempDir::new().unwrap();
    td.child("devices.json")
        .write_str(&format!(
            r#"{{
                "devices": [
                    {{ "name": "iPhone Speaker", "bands": {EIGHT_BANDS} }},
                    {{ "name": "Laptop", "filename": "laptop_eq.pst", "bands": {EIGHT_BANDS} }}
                ]
            }}"#
        ))
        .unwrap();
    td
}
