//! `rotorcrypt` — encrypt or decrypt text with the rotor machine.
//!
//! **Usage:**
//! ```text
//! rotorcrypt [--config <file.json>] [--rotors L,M,R] [--positions LMR] [-v...] <TEXT>...
//! ```
//!
//! Rotors and positions are read left to right, as on the machine. The
//! machine is self-reciprocal, so decrypting is running the ciphertext
//! through the same settings.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rotorcrypt::driver;
use rotorcrypt::MachineConfig;

/// Encrypt or decrypt text with a three-rotor cipher machine.
#[derive(Parser)]
#[command(
    name = "rotorcrypt",
    version,
    about = "Encrypt or decrypt text with a three-rotor cipher machine"
)]
struct Args {
    /// JSON configuration file with "rotors" and "positions".
    #[arg(long)]
    config: Option<PathBuf>,

    /// Rotor types left to right, e.g. "III,II,I".
    #[arg(long, short = 'r')]
    rotors: Option<String>,

    /// Start letters left to right, e.g. "AAA".
    #[arg(long, short = 'p')]
    positions: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,

    /// Text to encrypt. Non-letters are ignored.
    #[arg(required = true)]
    text: Vec<String>,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads the optional config file, then applies `--rotors` and `--positions` on top.
fn load_config(
    path: Option<&Path>,
    rotors: Option<&str>,
    positions: Option<&str>,
) -> Result<MachineConfig> {
    let mut config = match path {
        Some(path) => MachineConfig::from_file(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => MachineConfig::default(),
    };
    if let Some(rotors) = rotors {
        config.rotors = MachineConfig::parse_rotors(rotors).context("invalid --rotors")?;
    }
    if let Some(positions) = positions {
        config.positions =
            MachineConfig::parse_positions(positions).context("invalid --positions")?;
    }
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = load_config(
        args.config.as_deref(),
        args.rotors.as_deref(),
        args.positions.as_deref(),
    )?;
    let text = args.text.join(" ");
    let ciphertext = driver::encrypt_with_config(&config, &text)?;

    println!("{}", ciphertext);
    Ok(())
}
