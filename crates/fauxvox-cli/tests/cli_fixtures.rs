//! Integration tests for fixture generation and the `fauxvox` binary.
//!
//! Tests verify:
//! - The built-in catalog renders to the documented directory layout
//! - Transcript records agree with the WAV headers next to them
//! - Generation is deterministic across runs
//! - CLI exit codes and JSON output
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p fauxvox-cli --test cli_fixtures
//! ```

use std::fs;
use std::path::Path;
use std::process::Command;

use fauxvox_audio::synthesis::speech_duration;
use fauxvox_audio::{read_wav_file, samples_for_duration, RenderConfig, VoiceProfile};
use fauxvox_cli::catalog::{
    generate_fixtures, Catalog, FixtureGroup, FixtureSummary, TranscriptRecord,
};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn fauxvox_binary() -> &'static str {
    env!("CARGO_BIN_EXE_fauxvox")
}

fn generate_all(root: &Path) -> FixtureSummary {
    let catalog = Catalog::builtin().unwrap();
    generate_fixtures(&catalog, root, &FixtureGroup::ALL, &RenderConfig::default()).unwrap()
}

fn read_transcript(root: &Path, name: &str) -> TranscriptRecord {
    let json = fs::read_to_string(root.join("transcripts").join(format!("{name}.json"))).unwrap();
    serde_json::from_str(&json).unwrap()
}

// ============================================================================
// Library-level generation
// ============================================================================

#[test]
fn test_builtin_catalog_layout() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    let summary = generate_all(root);
    let catalog = Catalog::builtin().unwrap();

    let turns: usize = catalog.conversations.iter().map(|c| c.turns.len()).sum();
    assert_eq!(
        summary.fixtures.len(),
        catalog.utterances.len() + turns + catalog.edge_cases.len()
    );

    for utterance in &catalog.utterances {
        assert!(root
            .join("audio/utterances")
            .join(format!("{}.wav", utterance.name))
            .is_file());
        assert!(root
            .join("transcripts")
            .join(format!("{}.json", utterance.name))
            .is_file());
    }
    for edge_case in &catalog.edge_cases {
        assert!(root
            .join("audio/edge-cases")
            .join(format!("{}.wav", edge_case.name))
            .is_file());
    }
    for conversation in &catalog.conversations {
        let conv_dir = root.join("audio/conversations").join(&conversation.name);
        assert!(conv_dir.join("manifest.json").is_file());
        assert!(root
            .join("transcripts/conversations")
            .join(format!("{}.json", conversation.name))
            .is_file());
        for turn in &conversation.turns {
            assert!(conv_dir.join(&turn.audio_file).is_file(), "{}", turn.audio_file);
        }
    }
    assert!(root.join("summary.json").is_file());
}

#[test]
fn test_transcripts_match_wav_headers() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    generate_all(root);
    let catalog = Catalog::builtin().unwrap();

    for utterance in &catalog.utterances {
        let record = read_transcript(root, &utterance.name);
        let (info, pcm) = read_wav_file(
            root.join("audio/utterances")
                .join(format!("{}.wav", utterance.name)),
        )
        .unwrap();

        assert_eq!(record.transcript, utterance.text);
        assert_eq!(record.sample_rate, info.sample_rate);
        assert_eq!(record.channels, info.channels);
        assert_eq!(record.bit_depth, info.bits_per_sample);
        assert_eq!(record.format, "wav");
        assert_eq!(record.metadata, utterance.metadata);

        let voice = VoiceProfile::default();
        let expected = samples_for_duration(speech_duration(&utterance.text, &voice), 16000);
        assert_eq!(pcm.len(), expected, "{}", utterance.name);
    }
}

#[test]
fn test_edge_case_lengths() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    generate_all(root);
    let edge = |name: &str| read_wav_file(root.join(format!("audio/edge-cases/{name}.wav"))).unwrap();

    let (info, pcm) = edge("silence-3s");
    assert_eq!(info.num_frames, 48000);
    assert!(pcm.samples.iter().all(|&s| s == 0));

    // "Yes." is one word, so the minimum duration applies.
    let (info, _) = edge("very-short-utterance");
    assert_eq!(info.num_frames, 8000);

    // Speech length follows the catalog text; the pause is two seconds.
    let catalog = Catalog::builtin().unwrap();
    let voice = VoiceProfile::default();
    let speech_frames = |name: &str| {
        let edge_case = catalog.edge_cases.iter().find(|e| e.name == name).unwrap();
        samples_for_duration(speech_duration(&edge_case.text, &voice), 16000)
    };
    let pause = samples_for_duration(2.0, 16000);

    let speech = speech_frames("speech-then-silence");
    let (info, pcm) = edge("speech-then-silence");
    assert_eq!(info.num_frames, speech + pause);
    assert!(pcm.samples[speech..].iter().all(|&s| s == 0));
    assert!(pcm.samples[..speech].iter().any(|&s| s != 0));

    let speech = speech_frames("silence-then-speech");
    let (info, pcm) = edge("silence-then-speech");
    assert_eq!(info.num_frames, pause + speech);
    assert!(pcm.samples[..pause].iter().all(|&s| s == 0));
    assert!(pcm.samples[pause..].iter().any(|&s| s != 0));
}

#[test]
fn test_whispered_utterance_is_quieter() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    generate_all(root);
    let peak = |name: &str| {
        let (_, pcm) = read_wav_file(root.join(format!("audio/utterances/{name}.wav"))).unwrap();
        pcm.samples.iter().map(|s| s.unsigned_abs()).max().unwrap()
    };
    assert!(peak("whispered") < peak("hello-world"));
}

#[test]
fn test_generation_is_deterministic() {
    let a = tempdir().unwrap();
    let b = tempdir().unwrap();
    let summary_a = generate_all(a.path());
    let summary_b = generate_all(b.path());
    assert_eq!(summary_a, summary_b);

    let json_a = fs::read(a.path().join("summary.json")).unwrap();
    let json_b = fs::read(b.path().join("summary.json")).unwrap();
    assert_eq!(json_a, json_b);

    let wav_a = fs::read(a.path().join("audio/edge-cases/noisy-background.wav")).unwrap();
    let wav_b = fs::read(b.path().join("audio/edge-cases/noisy-background.wav")).unwrap();
    assert_eq!(wav_a, wav_b);
}

#[test]
fn test_group_filter() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    let catalog = Catalog::builtin().unwrap();
    let summary = generate_fixtures(
        &catalog,
        root,
        &[FixtureGroup::EdgeCases],
        &RenderConfig::default(),
    )
    .unwrap();

    assert_eq!(summary.fixtures.len(), catalog.edge_cases.len());
    assert!(summary
        .fixtures
        .iter()
        .all(|f| f.group == FixtureGroup::EdgeCases));
    assert!(!root.join("audio/utterances").exists());
    assert!(!root.join("audio/conversations").exists());
}

#[test]
fn test_custom_catalog_file() {
    let dir = tempdir().unwrap();
    let catalog_path = dir.path().join("catalog.json");
    fs::write(
        &catalog_path,
        r#"{
            "utterances": [{"name": "two-words", "text": "hello there"}],
            "edgeCases": [{"name": "beat", "kind": {"type": "silence", "duration": 0.25}}]
        }"#,
    )
    .unwrap();

    let catalog = Catalog::from_file(&catalog_path).unwrap();
    let out = dir.path().join("out");
    let summary =
        generate_fixtures(&catalog, &out, &FixtureGroup::ALL, &RenderConfig::default()).unwrap();

    assert_eq!(summary.fixtures.len(), 2);
    assert_eq!(summary.fixtures[0].num_samples, 12800);
    assert_eq!(summary.fixtures[1].num_samples, 4000);
    assert!((summary.total_duration_seconds() - 1.05).abs() < 1e-9);
}

// ============================================================================
// Binary
// ============================================================================

#[test]
fn test_cli_speech_json_report() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("hello");

    let result = Command::new(fauxvox_binary())
        .args(["speech", "Hello world", "--output"])
        .arg(&output)
        .arg("--json")
        .output()
        .unwrap();
    assert!(result.status.success());

    let report: serde_json::Value = serde_json::from_slice(&result.stdout).unwrap();
    assert_eq!(report["numSamples"], 12800);
    assert_eq!(report["sampleRate"], 16000);
    assert!(dir.path().join("hello.wav").is_file());
}

#[test]
fn test_cli_inspect_matches_render() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("tone.wav");

    let render = Command::new(fauxvox_binary())
        .args(["tone", "-f", "440", "-d", "0.5", "--json", "-o"])
        .arg(&output)
        .output()
        .unwrap();
    assert!(render.status.success());
    let rendered: serde_json::Value = serde_json::from_slice(&render.stdout).unwrap();

    let inspect = Command::new(fauxvox_binary())
        .arg("inspect")
        .arg(&output)
        .arg("--json")
        .output()
        .unwrap();
    assert!(inspect.status.success());
    let inspected: serde_json::Value = serde_json::from_slice(&inspect.stdout).unwrap();

    assert_eq!(inspected["numFrames"], 8000);
    assert_eq!(inspected["pcmHash"], rendered["pcmHash"]);
}

#[test]
fn test_cli_invalid_noise_ratio_fails() {
    let dir = tempdir().unwrap();
    let result = Command::new(fauxvox_binary())
        .args(["speech", "Hello", "--noise", "1.5", "--output"])
        .arg(dir.path().join("bad.wav"))
        .output()
        .unwrap();

    assert_eq!(result.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("FAUXVOX_007"), "stderr: {stderr}");
    assert!(!dir.path().join("bad.wav").exists());
}

#[test]
fn test_cli_invalid_catalog_writes_nothing() {
    let dir = tempdir().unwrap();
    let catalog_path = dir.path().join("catalog.json");
    fs::write(
        &catalog_path,
        r#"{
            "utterances": [{"name": "u", "text": "written first"}],
            "edgeCases": [{"name": "loud", "text": "x", "kind": {"type": "noisy", "ratio": 1.5}}]
        }"#,
    )
    .unwrap();
    let out = dir.path().join("out");

    let result = Command::new(fauxvox_binary())
        .args(["fixtures", "--catalog"])
        .arg(&catalog_path)
        .arg("--out-root")
        .arg(&out)
        .output()
        .unwrap();

    assert_eq!(result.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("loud"), "stderr: {stderr}");
    assert!(!out.join("audio/utterances/u.wav").exists());
    assert!(!out.join("summary.json").exists());
}

#[test]
fn test_cli_fixtures_json_summary() {
    let dir = tempdir().unwrap();
    let result = Command::new(fauxvox_binary())
        .args(["fixtures", "--only", "utterances", "--json", "--out-root"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(result.status.success());

    let summary: FixtureSummary = serde_json::from_slice(&result.stdout).unwrap();
    assert_eq!(summary.fixtures.len(), 5);
    assert_eq!(summary.sample_rate, 16000);
}
