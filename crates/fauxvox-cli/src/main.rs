//! fauxvox CLI - deterministic synthetic speech fixtures
//!
//! This binary renders speech-like, tone and silence WAV files, generates
//! the full fixture catalog, and inspects existing WAV files.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use fauxvox_audio::AudioError;
use fauxvox_cli::catalog::FixtureGroup;
use fauxvox_cli::{commands, logging};

/// fauxvox - Deterministic synthetic speech audio for voice pipeline tests
#[derive(Parser)]
#[command(name = "fauxvox")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render speech-like audio whose length follows the word count of TEXT
    Speech {
        /// Text to "speak"
        text: String,

        /// Output WAV path (".wav" is appended when missing)
        #[arg(short, long)]
        output: String,

        /// Mix in background noise at this ratio (0.0 to 1.0)
        #[arg(long)]
        noise: Option<f64>,

        /// Voice preset name (default, whisper) or path to a JSON profile
        #[arg(long)]
        voice: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Render a pure sine tone
    Tone {
        /// Frequency in Hz
        #[arg(short, long)]
        frequency: f64,

        /// Duration in seconds
        #[arg(short, long)]
        duration: f64,

        /// Peak amplitude (0.0 to 1.0)
        #[arg(short, long, default_value_t = fauxvox_audio::synthesis::DEFAULT_TONE_AMPLITUDE)]
        amplitude: f64,

        /// Output WAV path
        #[arg(short, long)]
        output: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Render digital silence
    Silence {
        /// Duration in seconds
        #[arg(short, long)]
        duration: f64,

        /// Output WAV path
        #[arg(short, long)]
        output: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Generate the fixture catalog (utterances, conversations, edge cases)
    Fixtures {
        /// Output root directory
        #[arg(long, default_value = "fixtures")]
        out_root: String,

        /// Catalog JSON to use instead of the built-in one
        #[arg(long)]
        catalog: Option<String>,

        /// Only generate these groups (comma-separated)
        #[arg(long, value_delimiter = ',')]
        only: Vec<FixtureGroup>,

        /// Default voice preset name or path to a JSON profile
        #[arg(long)]
        voice: Option<String>,

        /// Print the summary as JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Show format, length and PCM hash of a WAV file
    Inspect {
        /// WAV file to inspect
        input: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init();

    let result = match cli.command {
        Commands::Speech {
            text,
            output,
            noise,
            voice,
            json,
        } => commands::speech::run(&text, &output, noise, voice.as_deref(), json),
        Commands::Tone {
            frequency,
            duration,
            amplitude,
            output,
            json,
        } => commands::tone::run(frequency, duration, amplitude, &output, json),
        Commands::Silence {
            duration,
            output,
            json,
        } => commands::silence::run(duration, &output, json),
        Commands::Fixtures {
            out_root,
            catalog,
            only,
            voice,
            json,
        } => commands::fixtures::run(&out_root, catalog.as_deref(), &only, voice.as_deref(), json),
        Commands::Inspect { input, json } => commands::inspect::run(&input, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            // Surface the stable code when the root cause is a core error.
            match e.chain().find_map(|cause| cause.downcast_ref::<AudioError>()) {
                Some(audio) => eprintln!(
                    "{} [{}]: {:#}",
                    colored::Colorize::red("error"),
                    audio.code(),
                    e
                ),
                None => eprintln!("{}: {:#}", colored::Colorize::red("error"), e),
            }
            ExitCode::from(1)
        }
    }
}
