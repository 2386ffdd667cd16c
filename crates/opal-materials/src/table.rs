//! Raw optical-constant tables.
//!
//! A dataset is a flat binary file of consecutive little-endian 64-bit
//! floats in `(photon_energy_ev, n, k)` row order, sorted ascending by
//! energy. [`decode_samples`] turns the raw bytes into [`RawSample`]s;
//! [`encode_samples`] is the inverse, used to produce dataset files.

use crate::provider::MaterialError;

/// Bytes per `(energy, n, k)` row.
const ROW_BYTES: usize = 3 * 8;

/// One measured optical-constant sample.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawSample {
    /// Photon energy in electronvolts.
    pub energy_ev: f64,
    /// Real refractive index $n$.
    pub n: f64,
    /// Extinction coefficient $k$.
    pub k: f64,
}

/// Decode a table from raw little-endian bytes.
///
/// Fails with [`MaterialError::InvalidData`] if the byte length is not a
/// whole number of rows.
pub fn decode_samples(bytes: &[u8]) -> Result<Vec<RawSample>, MaterialError> {
    if bytes.len() % ROW_BYTES != 0 {
        return Err(MaterialError::InvalidData(format!(
            "table is {} bytes, not a multiple of the {ROW_BYTES}-byte row",
            bytes.len()
        )));
    }

    let samples = bytes
        .chunks_exact(ROW_BYTES)
        .map(|row| RawSample {
            energy_ev: read_f64(&row[0..8]),
            n: read_f64(&row[8..16]),
            k: read_f64(&row[16..24]),
        })
        .collect();
    Ok(samples)
}

/// Encode samples into the on-disk byte layout.
#[must_use]
pub fn encode_samples(samples: &[RawSample]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(samples.len() * ROW_BYTES);
    for sample in samples {
        bytes.extend_from_slice(&sample.energy_ev.to_le_bytes());
        bytes.extend_from_slice(&sample.n.to_le_bytes());
        bytes.extend_from_slice(&sample.k.to_le_bytes());
    }
    bytes
}

fn read_f64(bytes: &[u8]) -> f64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(bytes);
    f64::from_le_bytes(buf)
}
