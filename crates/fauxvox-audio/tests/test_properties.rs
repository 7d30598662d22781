//! Property-based tests for the synthesis and quantization invariants.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p fauxvox-audio --test test_properties
//! ```

use proptest::prelude::*;

use fauxvox_audio::noise::noise_signal;
use fauxvox_audio::synthesis::{speech_duration, syllable_envelope, synthesize_speech};
use fauxvox_audio::{
    dequantize_sample, mix_noise, quantize_sample, samples_for_duration, AudioSignal,
    VoiceProfile,
};

fn words(n: usize) -> String {
    vec!["word"; n].join(" ")
}

proptest! {
    /// Duration is max(0.5, words * 0.4), measured as samples / rate.
    #[test]
    fn duration_follows_word_count(n in 0usize..60) {
        let voice = VoiceProfile::default();
        let signal = synthesize_speech(&words(n), &voice, 16000).unwrap();
        let expected = (n as f64 * 0.4).max(0.5);
        prop_assert_eq!(signal.len(), samples_for_duration(expected, 16000));
        prop_assert!((signal.duration_seconds() - expected).abs() < 1.0 / 16000.0);
        prop_assert_eq!(speech_duration(&words(n), &voice), expected);
    }

    /// Quantize, dequantize and quantize again gives the same integer.
    #[test]
    fn quantize_is_idempotent(a in -1.0f64..=1.0) {
        let q = quantize_sample(a);
        prop_assert_eq!(quantize_sample(dequantize_sample(q)), q);
    }

    /// Out-of-range amplitudes clamp instead of wrapping.
    #[test]
    fn quantize_clamps(a in prop::num::f64::NORMAL) {
        let q = quantize_sample(a);
        if a >= 1.0 {
            prop_assert_eq!(q, i16::MAX);
        }
        if a < -1.0001 {
            prop_assert_eq!(q, i16::MIN);
        }
    }

    /// The syllable envelope never leaves [0, 1].
    #[test]
    fn envelope_is_bounded(t in 0.0f64..3600.0, rate in 0.0f64..50.0) {
        let e = syllable_envelope(t, rate);
        prop_assert!((0.0..=1.0).contains(&e), "envelope({t}, {rate}) = {e}");
    }

    /// Mixing keeps length and rate, and stays within full scale.
    #[test]
    fn mixing_preserves_shape(
        samples in prop::collection::vec(-1.0f64..=1.0, 0..512),
        ratio in 0.0f64..=1.0,
    ) {
        let base = AudioSignal::new(samples, 16000);
        let mixed = mix_noise(&base, ratio).unwrap();
        prop_assert_eq!(mixed.len(), base.len());
        prop_assert_eq!(mixed.sample_rate(), 16000);
        prop_assert!(mixed.samples().iter().all(|s| (-1.0..=1.0).contains(s)));
    }

    /// Ratio 0 returns the base; ratio 1 returns the noise.
    #[test]
    fn mixing_endpoints(samples in prop::collection::vec(-1.0f64..=1.0, 0..512)) {
        let base = AudioSignal::new(samples, 16000);
        prop_assert_eq!(mix_noise(&base, 0.0).unwrap(), base.clone());
        prop_assert_eq!(mix_noise(&base, 1.0).unwrap(), noise_signal(base.len(), 16000));
    }
}
