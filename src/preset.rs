//! Channel EQ `.pst` binary encoding.
//!
//! A preset is always exactly 240 bytes: a 20-byte header, eight 16-byte
//! band records, and an 88-byte footer. Everything here is little-endian.

use serde::Deserialize;
use thiserror::Error;

/// Total size of an encoded preset file.
pub const PRESET_LEN: usize = 240;

/// Number of EQ bands in a Channel EQ preset. Band 0 is conventionally the
/// high-pass stage and band 7 the low-pass stage, but the encoder treats all
/// eight identically.
pub const BAND_COUNT: usize = 8;

pub const DEFAULT_Q: f64 = 0.71;
pub const DEFAULT_GAIN: f64 = 0.0;

// Header fields, in file order. The declared file size is 240 even though
// the content after the size field is 236 bytes; the host writes presets
// this way, so we do too.
const HEADER_FILE_SIZE: u32 = 240;
const HEADER_VERSION: u32 = 1;
const HEADER_UNKNOWN: u32 = 52;
pub const MAGIC: &[u8; 8] = b"GAMETSPP";
const HEADER_DATA_SIZE: u32 = 236;

/// 88-byte trailer carrying analyzer settings, output gain, etc. Captured
/// verbatim from presets written by Logic itself (identical across all of
/// them); never built up from fields.
pub const FOOTER: [u8; 88] = [
    0x8f, 0xc2, 0x35, 0x3f, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x33, 0x33, 0x43, 0x41,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x40,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x20, 0x41,
    0x00, 0x00, 0x80, 0x3f, 0x00, 0x00, 0x00, 0xbf,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80, 0x3f,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80, 0x3f,
    0x00, 0x00, 0x70, 0x42, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x70, 0x42, 0x00, 0x00, 0x80, 0x3f,
    0x78, 0x38, 0x50, 0x4c, 0x08, 0x00, 0x00, 0x00,
];

/// One float slot within a 16-byte band record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandField {
    Q,
    Enabled,
    Frequency,
    Gain,
}

/// Wire order of the four floats in a band record. The host loads values
/// positionally, so a wrong order loads silently into the wrong EQ
/// parameter; this array is the single place the order is defined and the
/// round-trip tests decode through it.
pub const BAND_FIELD_ORDER: [BandField; 4] = [
    BandField::Q,
    BandField::Enabled,
    BandField::Frequency,
    BandField::Gain,
];

/// One EQ band as authored in a device profile. Every field is optional in
/// the input so that validation happens here, with band indices in the
/// error, rather than inside the JSON deserializer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BandSpec {
    pub frequency: Option<f64>,
    pub gain: Option<f64>,
    pub q: Option<f64>,
    pub enabled: Option<bool>,
}

impl BandSpec {
    /// A band counts as active unless it carries an explicit `enabled: false`.
    pub fn is_active(&self) -> bool {
        self.enabled != Some(false)
    }

    fn resolve(&self, band: usize) -> Result<ResolvedBand, EncodeError> {
        let frequency = self
            .frequency
            .ok_or(EncodeError::MissingFrequency { band })?;
        Ok(ResolvedBand {
            q: self.q.unwrap_or(DEFAULT_Q) as f32,
            enabled: if self.is_active() { 1.0 } else { 0.0 },
            frequency: frequency as f32,
            gain: self.gain.unwrap_or(DEFAULT_GAIN) as f32,
        })
    }
}

/// A band with defaults applied and the enabled flag lowered to its
/// floating-point wire form.
struct ResolvedBand {
    q: f32,
    enabled: f32,
    frequency: f32,
    gain: f32,
}

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("expected exactly {BAND_COUNT} bands, got {found}")]
    BandCount { found: usize },

    #[error("band {band}: missing required field `frequency`")]
    MissingFrequency { band: usize },

    #[error("assembled preset is {len} bytes, expected {PRESET_LEN}")]
    SizeMismatch { len: usize },
}

fn pack_band(band: &ResolvedBand) -> [u8; 16] {
    let mut record = [0u8; 16];
    for (slot, field) in BAND_FIELD_ORDER.iter().enumerate() {
        let value = match field {
            BandField::Q => band.q,
            BandField::Enabled => band.enabled,
            BandField::Frequency => band.frequency,
            BandField::Gain => band.gain,
        };
        record[slot * 4..slot * 4 + 4].copy_from_slice(&value.to_le_bytes());
    }
    record
}

/// Encode eight band specs into a complete 240-byte preset.
///
/// Pure and stateless; nothing is written anywhere. Any input-shape
/// violation errors out before a single byte is produced.
pub fn encode(bands: &[BandSpec]) -> Result<Vec<u8>, EncodeError> {
    if bands.len() != BAND_COUNT {
        return Err(EncodeError::BandCount { found: bands.len() });
    }

    let mut out = Vec::with_capacity(PRESET_LEN);
    out.extend_from_slice(&HEADER_FILE_SIZE.to_le_bytes());
    out.extend_from_slice(&HEADER_VERSION.to_le_bytes());
    out.extend_from_slice(&HEADER_UNKNOWN.to_le_bytes());
    out.extend_from_slice(MAGIC);
    out.extend_from_slice(&HEADER_DATA_SIZE.to_le_bytes());

    for (index, band) in bands.iter().enumerate() {
        let resolved = band.resolve(index)?;
        out.extend_from_slice(&pack_band(&resolved));
    }

    out.extend_from_slice(&FOOTER);

    // Unreachable given the fixed-size pieces above; kept as a self-check
    // so an editing mistake fails loudly instead of producing a file the
    // host silently misreads.
    if out.len() != PRESET_LEN {
        return Err(EncodeError::SizeMismatch { len: out.len() });
    }
    Ok(out)
}
