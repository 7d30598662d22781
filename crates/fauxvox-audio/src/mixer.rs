//! Background-noise mixing.

use crate::error::{AudioError, AudioResult};
use crate::noise::noise_signal;
use crate::signal::AudioSignal;

/// Blends deterministic byte noise into `base`.
///
/// Each output sample is `clamp(base * (1 - ratio) + noise * ratio, -1, 1)`.
/// The input is left untouched; the result has the same length and rate.
///
/// # Arguments
/// * `base` - Signal to mix into
/// * `ratio` - Noise proportion in [0, 1]
pub fn mix_noise(base: &AudioSignal, ratio: f64) -> AudioResult<AudioSignal> {
    if !(0.0..=1.0).contains(&ratio) {
        return Err(AudioError::invalid_param(
            "noise_ratio",
            format!("must be between 0 and 1, got {ratio}"),
        ));
    }

    let noise = noise_signal(base.len(), base.sample_rate());
    let samples = base
        .samples()
        .iter()
        .zip(noise.samples())
        .map(|(&b, &n)| (b * (1.0 - ratio) + n * ratio).clamp(-1.0, 1.0))
        .collect();

    tracing::debug!(ratio, num_samples = base.len(), "mixed background noise");
    Ok(AudioSignal::new(samples, base.sample_rate()))
}
