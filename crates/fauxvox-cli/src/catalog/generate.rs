//! Renders a catalog into the fixture directory tree.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use fauxvox_audio::{render_to_file, RenderConfig, RenderOutput, RenderRequest, VoiceProfile};
use serde::{Deserialize, Serialize};

use super::{turn_stem, Catalog, FixtureGroup, TranscriptRecord};

/// One rendered fixture file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureEntry {
    /// Catalog section.
    pub group: FixtureGroup,
    /// Fixture name (for conversations, `<conversation>/<stem>`).
    pub name: String,
    /// WAV path relative to the output root.
    pub path: String,
    /// Frames written.
    pub num_samples: usize,
    /// Duration in seconds.
    pub duration_seconds: f64,
    /// BLAKE3 hash of the PCM payload.
    pub pcm_hash: String,
}

/// Everything a fixtures run produced; written as `summary.json`.
///
/// Contains no timestamps, so identical catalogs give identical summaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureSummary {
    /// Sample rate of every file.
    pub sample_rate: u32,
    /// Channel count of every file.
    pub channels: u16,
    /// Bit depth of every file.
    pub bit_depth: u16,
    /// Rendered files in generation order.
    pub fixtures: Vec<FixtureEntry>,
}

impl FixtureSummary {
    /// Total duration of all fixtures in seconds.
    pub fn total_duration_seconds(&self) -> f64 {
        self.fixtures.iter().map(|f| f.duration_seconds).sum()
    }
}

/// Renders the selected `groups` of `catalog` under `out_root`.
///
/// Layout:
/// - `audio/utterances/<name>.wav`, `transcripts/<name>.json`
/// - `audio/conversations/<conv>/<file>.wav`, `.../manifest.json`,
///   `transcripts/conversations/<conv>.json`
/// - `audio/edge-cases/<name>.wav`, `transcripts/<name>.json`
/// - `summary.json`
pub fn generate_fixtures(
    catalog: &Catalog,
    out_root: &Path,
    groups: &[FixtureGroup],
    config: &RenderConfig,
) -> Result<FixtureSummary> {
    let audio_dir = out_root.join("audio");
    let transcripts_dir = out_root.join("transcripts");
    create_dir(&transcripts_dir)?;

    let mut fixtures = Vec::new();

    for group in FixtureGroup::ALL {
        if !groups.contains(&group) {
            continue;
        }
        let group_dir = audio_dir.join(group.dir_name());
        create_dir(&group_dir)?;

        match group {
            FixtureGroup::Utterances => {
                for utterance in &catalog.utterances {
                    let voice_config;
                    let config = match utterance.voice.as_deref().and_then(VoiceProfile::preset) {
                        Some(voice) => {
                            voice_config = RenderConfig {
                                voice,
                                ..config.clone()
                            };
                            &voice_config
                        }
                        None => config,
                    };
                    let rel = format!("audio/{}/{}.wav", group.dir_name(), utterance.name);
                    let output = render(
                        &RenderRequest::speech(&utterance.text),
                        config,
                        out_root,
                        &rel,
                    )?;
                    let record = TranscriptRecord::new(
                        &utterance.name,
                        &utterance.text,
                        &config.format,
                        utterance.metadata.clone(),
                    );
                    write_json(&transcripts_dir.join(format!("{}.json", utterance.name)), &record)?;
                    fixtures.push(entry(group, &utterance.name, rel, output));
                }
            }
            FixtureGroup::Conversations => {
                let manifests_dir = transcripts_dir.join("conversations");
                create_dir(&manifests_dir)?;
                for conversation in &catalog.conversations {
                    let conv_dir = group_dir.join(&conversation.name);
                    create_dir(&conv_dir)?;
                    for turn in &conversation.turns {
                        let stem = turn_stem(&turn.audio_file);
                        let rel = format!(
                            "audio/{}/{}/{}.wav",
                            group.dir_name(),
                            conversation.name,
                            stem
                        );
                        let output = render(
                            &RenderRequest::speech(&turn.transcript),
                            config,
                            out_root,
                            &rel,
                        )?;
                        let name = format!("{}/{}", conversation.name, stem);
                        fixtures.push(entry(group, &name, rel, output));
                    }
                    write_json(&conv_dir.join("manifest.json"), conversation)?;
                    write_json(
                        &manifests_dir.join(format!("{}.json", conversation.name)),
                        conversation,
                    )?;
                }
            }
            FixtureGroup::EdgeCases => {
                for edge_case in &catalog.edge_cases {
                    let rel = format!("audio/{}/{}.wav", group.dir_name(), edge_case.name);
                    let output = render(
                        &edge_case.kind.request(&edge_case.text),
                        config,
                        out_root,
                        &rel,
                    )?;
                    let record = TranscriptRecord::new(
                        &edge_case.name,
                        &edge_case.text,
                        &config.format,
                        edge_case.metadata.clone(),
                    );
                    write_json(&transcripts_dir.join(format!("{}.json", edge_case.name)), &record)?;
                    fixtures.push(entry(group, &edge_case.name, rel, output));
                }
            }
        }
    }

    let summary = FixtureSummary {
        sample_rate: config.format.sample_rate,
        channels: config.format.channels,
        bit_depth: config.format.bits_per_sample,
        fixtures,
    };
    write_json(&out_root.join("summary.json"), &summary)?;

    tracing::info!(
        count = summary.fixtures.len(),
        out_root = %out_root.display(),
        "generated fixtures"
    );
    Ok(summary)
}

fn render(
    request: &RenderRequest,
    config: &RenderConfig,
    out_root: &Path,
    rel: &str,
) -> Result<RenderOutput> {
    let path = out_root.join(rel);
    let output = render_to_file(request, config, &path)
        .with_context(|| format!("failed to render {}", path.display()))?;
    tracing::debug!(path = rel, samples = output.num_samples, "rendered fixture");
    Ok(output)
}

fn entry(group: FixtureGroup, name: &str, path: String, output: RenderOutput) -> FixtureEntry {
    FixtureEntry {
        group,
        name: name.to_string(),
        path,
        num_samples: output.num_samples,
        duration_seconds: output.duration_seconds,
        pcm_hash: output.pcm_hash,
    }
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .with_context(|| format!("failed to create directory {}", path.display()))
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
}
