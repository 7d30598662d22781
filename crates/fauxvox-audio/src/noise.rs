//! Index-driven pseudo-random noise.
//!
//! Every noise value is a pure function of its sample (or byte) index, so
//! fixtures regenerate bit-identically without a seeded RNG. The recurrence
//! constants must not change: regenerated fixtures are diffed byte-for-byte.

use crate::signal::AudioSignal;

/// LCG multiplier.
pub const LCG_MULTIPLIER: u64 = 1_103_515_245;
/// LCG increment.
pub const LCG_INCREMENT: u64 = 12_345;
/// Modulus for breath noise (2^31).
pub const BREATH_MODULUS: u64 = 1 << 31;

/// `index * 1103515245 + 12345` modulo 2^64.
///
/// Both moduli applied afterwards divide 2^64, so wrapping is exact.
#[inline]
pub fn lcg(index: u64) -> u64 {
    index
        .wrapping_mul(LCG_MULTIPLIER)
        .wrapping_add(LCG_INCREMENT)
}

/// Breath noise for sample `index`, in `[-weight / 2, weight / 2)`.
#[inline]
pub fn breath_noise(index: u64, weight: f64) -> f64 {
    let unit = (lcg(index) % BREATH_MODULUS) as f64 / BREATH_MODULUS as f64;
    weight * (unit - 0.5)
}

/// `len` noise bytes; byte `k` is `lcg(k) mod 256`.
pub fn noise_bytes(len: usize) -> Vec<u8> {
    (0..len as u64).map(|k| (lcg(k) % 256) as u8).collect()
}

/// `len` 16-bit noise samples built from consecutive byte pairs (little-endian).
pub fn noise_pcm(len: usize) -> Vec<i16> {
    noise_bytes(len * 2)
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect()
}

/// Byte noise scaled into [-1.0, 1.0).
pub fn noise_signal(len: usize, sample_rate: u32) -> AudioSignal {
    let samples = noise_pcm(len)
        .into_iter()
        .map(|s| s as f64 / 32768.0)
        .collect();
    AudioSignal::new(samples, sample_rate)
}
