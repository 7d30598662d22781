//! Voice profiles: the named constants that shape synthesized speech.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AudioError, AudioResult};

/// One time-varying formant partial.
///
/// Its instantaneous frequency is
/// `base * harmonic + wobble_depth * sin(2π * wobble_rate * t)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Formant {
    /// Multiple of the base frequency.
    pub harmonic: f64,
    /// Wobble rate in Hz.
    pub wobble_rate: f64,
    /// Wobble depth in Hz.
    pub wobble_depth: f64,
    /// Mix weight.
    pub weight: f64,
}

impl Formant {
    /// Creates a formant partial.
    pub const fn new(harmonic: f64, wobble_rate: f64, wobble_depth: f64, weight: f64) -> Self {
        Self {
            harmonic,
            wobble_rate,
            wobble_depth,
            weight,
        }
    }
}

/// Parameters of the speech-envelope synthesizer.
///
/// Defaults describe a neutral voice with a 150 Hz fundamental. Custom voices
/// can be loaded from camelCase JSON; omitted fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct VoiceProfile {
    /// Fundamental frequency in Hz.
    pub base_frequency: f64,
    /// Formant partials, summed in order.
    pub formants: Vec<Formant>,
    /// Loudness pulses per second.
    pub syllable_rate: f64,
    /// Weight of the breath noise added after the envelope.
    pub breath_noise: f64,
    /// Final output gain.
    pub output_gain: f64,
    /// Seconds of audio per whitespace-delimited word.
    pub seconds_per_word: f64,
    /// Minimum utterance length in seconds.
    pub min_duration: f64,
}

impl Default for VoiceProfile {
    fn default() -> Self {
        Self {
            base_frequency: 150.0,
            formants: vec![
                Formant::new(1.0, 3.0, 50.0, 0.4),
                Formant::new(2.0, 5.0, 100.0, 0.3),
                Formant::new(3.0, 7.0, 150.0, 0.2),
            ],
            syllable_rate: 4.0,
            breath_noise: 0.1,
            output_gain: 0.8,
            seconds_per_word: 0.4,
            min_duration: 0.5,
        }
    }
}

impl VoiceProfile {
    /// Quiet, breathy variant for whispered fixtures.
    pub fn whisper() -> Self {
        Self {
            formants: vec![
                Formant::new(1.0, 3.0, 50.0, 0.2),
                Formant::new(2.0, 5.0, 100.0, 0.15),
                Formant::new(3.0, 7.0, 150.0, 0.1),
            ],
            breath_noise: 0.3,
            output_gain: 0.4,
            ..Self::default()
        }
    }

    /// Looks up a built-in preset by name.
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "default" => Some(Self::default()),
            "whisper" => Some(Self::whisper()),
            _ => None,
        }
    }

    /// Parses a profile from JSON.
    pub fn from_json_str(json: &str) -> AudioResult<Self> {
        let voice: Self = serde_json::from_str(json)
            .map_err(|e| AudioError::invalid_param("voice", e.to_string()))?;
        voice.validate()?;
        Ok(voice)
    }

    /// Reads and parses a profile from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> AudioResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| AudioError::storage(path, e))?;
        Self::from_json_str(&json)
    }

    /// Checks every field is finite and in range.
    pub fn validate(&self) -> AudioResult<()> {
        if !(self.base_frequency.is_finite() && self.base_frequency > 0.0) {
            return Err(AudioError::InvalidFrequency {
                freq: self.base_frequency,
            });
        }
        if self.formants.is_empty() {
            return Err(AudioError::invalid_param(
                "formants",
                "at least one formant is required",
            ));
        }
        for (i, formant) in self.formants.iter().enumerate() {
            if !(formant.harmonic.is_finite() && formant.harmonic > 0.0) {
                return Err(AudioError::invalid_param(
                    format!("formants[{i}].harmonic"),
                    "must be positive",
                ));
            }
            non_negative(&format!("formants[{i}].wobbleRate"), formant.wobble_rate)?;
            non_negative(&format!("formants[{i}].wobbleDepth"), formant.wobble_depth)?;
            non_negative(&format!("formants[{i}].weight"), formant.weight)?;
        }
        positive("syllableRate", self.syllable_rate)?;
        non_negative("breathNoise", self.breath_noise)?;
        non_negative("outputGain", self.output_gain)?;
        positive("secondsPerWord", self.seconds_per_word)?;
        positive("minDuration", self.min_duration)?;
        Ok(())
    }
}

fn positive(name: &str, value: f64) -> AudioResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AudioError::invalid_param(
            name,
            format!("must be finite and positive, got {value}"),
        ))
    }
}

fn non_negative(name: &str, value: f64) -> AudioResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(AudioError::invalid_param(
            name,
            format!("must be finite and non-negative, got {value}"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_profile_values() {
        let voice = VoiceProfile::default();
        assert_eq!(voice.base_frequency, 150.0);
        assert_eq!(voice.formants.len(), 3);
        assert_eq!(voice.formants[1], Formant::new(2.0, 5.0, 100.0, 0.3));
        assert!(voice.validate().is_ok());
    }

    #[test]
    fn test_whisper_is_quieter() {
        let whisper = VoiceProfile::whisper();
        let normal = VoiceProfile::default();
        assert!(whisper.output_gain < normal.output_gain);
        assert!(whisper.breath_noise > normal.breath_noise);
        assert!(whisper.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let voice = VoiceProfile::from_json_str(r#"{"baseFrequency": 220.0}"#).unwrap();
        assert_eq!(voice.base_frequency, 220.0);
        assert_eq!(voice.syllable_rate, 4.0);
        assert_eq!(voice.formants, VoiceProfile::default().formants);
    }

    #[test]
    fn test_json_roundtrip() {
        let voice = VoiceProfile::whisper();
        let json = serde_json::to_string(&voice).unwrap();
        assert!(json.contains("\"breathNoise\""));
        assert_eq!(VoiceProfile::from_json_str(&json).unwrap(), voice);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = VoiceProfile::from_json_str(r#"{"pitch": 3}"#).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut voice = VoiceProfile::default();
        voice.base_frequency = 0.0;
        assert!(matches!(
            voice.validate(),
            Err(AudioError::InvalidFrequency { .. })
        ));

        let mut voice = VoiceProfile::default();
        voice.formants[2].weight = -0.1;
        let err = voice.validate().unwrap_err();
        assert!(err.to_string().contains("formants[2].weight"));

        let mut voice = VoiceProfile::default();
        voice.formants.clear();
        assert!(voice.validate().is_err());

        let mut voice = VoiceProfile::default();
        voice.output_gain = f64::NAN;
        assert!(voice.validate().is_err());
    }

    #[test]
    fn test_zero_rate_and_durations_rejected() {
        for field in ["syllableRate", "secondsPerWord", "minDuration"] {
            let json = format!(r#"{{"{field}": 0.0}}"#);
            let err = VoiceProfile::from_json_str(&json).unwrap_err();
            assert!(err.is_configuration());
            assert!(err.to_string().contains(field), "{field}: {err}");
        }
    }

    #[test]
    fn test_zero_durations_cannot_silence_speech() {
        let mut voice = VoiceProfile::default();
        voice.min_duration = 0.0;
        voice.seconds_per_word = 0.0;
        assert!(crate::synthesis::synthesize_speech("", &voice, 16000).is_err());
    }

    #[test]
    fn test_preset_lookup() {
        assert_eq!(VoiceProfile::preset("whisper"), Some(VoiceProfile::whisper()));
        assert!(VoiceProfile::preset("baritone").is_none());
    }
}
