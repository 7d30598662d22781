//! Fixture catalog: the named utterances, conversations and edge cases to render.
//!
//! The built-in catalog is embedded from `catalog.json`; a replacement with the
//! same shape can be supplied on the command line.

mod generate;
mod transcript;

pub use generate::{generate_fixtures, FixtureEntry, FixtureSummary};
pub use transcript::TranscriptRecord;

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use fauxvox_audio::{RenderRequest, VoiceProfile};
use serde::{Deserialize, Serialize};

const BUILTIN_CATALOG: &str = include_str!("catalog.json");

/// Free-form fixture metadata, copied verbatim into transcripts.
pub type Metadata = BTreeMap<String, serde_json::Value>;

/// All fixtures to generate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Catalog {
    /// Single utterances.
    #[serde(default)]
    pub utterances: Vec<Utterance>,
    /// Multi-turn conversations.
    #[serde(default)]
    pub conversations: Vec<Conversation>,
    /// Edge cases (silence, noise, pauses, extreme lengths).
    #[serde(default)]
    pub edge_cases: Vec<EdgeCase>,
}

/// A single spoken utterance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Utterance {
    /// Fixture name, also the file stem.
    pub name: String,
    /// Transcript text.
    pub text: String,
    /// Voice preset name; the default voice when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,
    /// Free-form metadata.
    #[serde(default)]
    pub metadata: Metadata,
}

/// Speaker role in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The human side.
    User,
    /// The voice agent.
    Agent,
}

/// One conversation turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Turn {
    /// Who speaks.
    pub role: Role,
    /// Audio file name inside the conversation directory.
    pub audio_file: String,
    /// What is said.
    pub transcript: String,
    /// Pause before this turn starts, in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_before_ms: Option<u64>,
    /// Whether this turn interrupts the previous one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_interruption: Option<bool>,
    /// Context the agent must carry into this turn.
    #[serde(default)]
    pub context_required: Vec<String>,
}

/// What a conversation test expects from the agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ExpectedBehavior {
    /// Minimum number of turns handled.
    pub min_turns: u32,
    /// Facts that must survive across turns.
    #[serde(default)]
    pub context_must_be_preserved: Vec<String>,
    /// Whether an interruption must be handled.
    #[serde(default)]
    pub interruption_handled: bool,
}

/// A multi-turn conversation. Serialized as-is into its manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Conversation {
    /// Conversation name, also the directory name.
    pub name: String,
    /// Human description of the scenario.
    pub description: String,
    /// Turns in order.
    pub turns: Vec<Turn>,
    /// Expected agent behavior.
    pub expected_behavior: ExpectedBehavior,
}

/// How an edge case is rendered.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FixtureKind {
    /// Plain speech for the text.
    #[default]
    Speech,
    /// Silence only; the text is ignored.
    Silence {
        /// Length in seconds.
        duration: f64,
    },
    /// Speech mixed with background noise.
    Noisy {
        /// Noise ratio in [0, 1].
        ratio: f64,
    },
    /// Speech followed by a pause.
    SpeechThenSilence {
        /// Pause length in seconds.
        pause: f64,
    },
    /// A pause followed by speech.
    SilenceThenSpeech {
        /// Pause length in seconds.
        pause: f64,
    },
}

impl FixtureKind {
    /// Builds the render request for `text`.
    pub fn request(&self, text: &str) -> RenderRequest {
        match self {
            FixtureKind::Speech => RenderRequest::speech(text),
            FixtureKind::Silence { duration } => RenderRequest::Silence {
                duration: *duration,
            },
            FixtureKind::Noisy { ratio } => RenderRequest::noisy_speech(text, *ratio),
            FixtureKind::SpeechThenSilence { pause } => RenderRequest::Sequence(vec![
                RenderRequest::speech(text),
                RenderRequest::Silence { duration: *pause },
            ]),
            FixtureKind::SilenceThenSpeech { pause } => RenderRequest::Sequence(vec![
                RenderRequest::Silence { duration: *pause },
                RenderRequest::speech(text),
            ]),
        }
    }

    /// Checks durations and pauses are finite and non-negative, and ratios lie in [0, 1].
    pub fn validate(&self) -> Result<()> {
        match *self {
            FixtureKind::Speech => {}
            FixtureKind::Silence { duration } => check_seconds("duration", duration)?,
            FixtureKind::Noisy { ratio } => {
                if !(0.0..=1.0).contains(&ratio) {
                    bail!("ratio must be between 0 and 1, got {}", ratio);
                }
            }
            FixtureKind::SpeechThenSilence { pause } | FixtureKind::SilenceThenSpeech { pause } => {
                check_seconds("pause", pause)?
            }
        }
        Ok(())
    }
}

fn check_seconds(name: &str, value: f64) -> Result<()> {
    if !(value.is_finite() && value >= 0.0) {
        bail!("{} must be finite and non-negative, got {}", name, value);
    }
    Ok(())
}

/// An edge-case fixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EdgeCase {
    /// Fixture name, also the file stem.
    pub name: String,
    /// Transcript text (empty for silence).
    #[serde(default)]
    pub text: String,
    /// Rendering strategy.
    #[serde(default)]
    pub kind: FixtureKind,
    /// Free-form metadata.
    #[serde(default)]
    pub metadata: Metadata,
}

/// Catalog section selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FixtureGroup {
    /// `audio/utterances`
    Utterances,
    /// `audio/conversations`
    Conversations,
    /// `audio/edge-cases`
    EdgeCases,
}

impl FixtureGroup {
    /// Every group, in generation order.
    pub const ALL: [FixtureGroup; 3] = [
        FixtureGroup::Utterances,
        FixtureGroup::Conversations,
        FixtureGroup::EdgeCases,
    ];

    /// Directory name under `audio/`.
    pub fn dir_name(&self) -> &'static str {
        match self {
            FixtureGroup::Utterances => "utterances",
            FixtureGroup::Conversations => "conversations",
            FixtureGroup::EdgeCases => "edge-cases",
        }
    }
}

impl fmt::Display for FixtureGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

impl FromStr for FixtureGroup {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "utterances" => Ok(FixtureGroup::Utterances),
            "conversations" => Ok(FixtureGroup::Conversations),
            "edge-cases" => Ok(FixtureGroup::EdgeCases),
            other => bail!(
                "unknown fixture group: {} (expected utterances, conversations, or edge-cases)",
                other
            ),
        }
    }
}

impl Catalog {
    /// The catalog shipped with the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_CATALOG).context("built-in catalog is invalid")
    }

    /// Parses and validates a catalog.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json).context("failed to parse catalog")?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Reads a catalog file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog {}", path.display()))?;
        Self::from_json_str(&json).with_context(|| format!("in catalog {}", path.display()))
    }

    /// Checks names are usable as file names and unique per output directory,
    /// and voice presets exist.
    pub fn validate(&self) -> Result<()> {
        // Utterances and edge cases share the transcripts directory.
        let mut transcript_names = HashSet::new();
        for name in self
            .utterances
            .iter()
            .map(|u| &u.name)
            .chain(self.edge_cases.iter().map(|e| &e.name))
        {
            check_file_name(name)?;
            if !transcript_names.insert(name.as_str()) {
                bail!("duplicate fixture name: {}", name);
            }
        }

        for edge_case in &self.edge_cases {
            edge_case
                .kind
                .validate()
                .with_context(|| format!("edge case '{}' has an invalid kind", edge_case.name))?;
        }

        for utterance in &self.utterances {
            if let Some(voice) = &utterance.voice {
                if VoiceProfile::preset(voice).is_none() {
                    bail!(
                        "utterance '{}' uses unknown voice preset '{}'",
                        utterance.name,
                        voice
                    );
                }
            }
        }

        let mut conversation_names = HashSet::new();
        for conversation in &self.conversations {
            check_file_name(&conversation.name)?;
            if !conversation_names.insert(conversation.name.as_str()) {
                bail!("duplicate conversation name: {}", conversation.name);
            }
            let mut files = HashSet::new();
            for turn in &conversation.turns {
                check_file_name(&turn.audio_file)?;
                if !files.insert(turn_stem(&turn.audio_file)) {
                    bail!(
                        "conversation '{}' reuses audio file {}",
                        conversation.name,
                        turn.audio_file
                    );
                }
            }
        }

        Ok(())
    }
}

/// Audio file stem for a turn; `01-user-hello.wav` and `01-user-hello` agree.
pub(crate) fn turn_stem(audio_file: &str) -> &str {
    audio_file.strip_suffix(".wav").unwrap_or(audio_file)
}

fn check_file_name(name: &str) -> Result<()> {
    if name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\'])
        || name.chars().any(char::is_control)
    {
        bail!("invalid fixture file name: {:?}", name);
    }
    Ok(())
}
