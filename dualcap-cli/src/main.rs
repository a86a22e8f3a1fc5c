//! dualcap — record the microphone and system audio simultaneously into
//! synchronized WAV files, plus an optional additive mix.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;

use dualcap_core::storage::metadata;
use dualcap_core::{
    record_dual, AudioBackend, DeviceKind, DeviceSelection, OutputPaths, RecordingConfig,
};
use dualcap_cpal::CpalBackend;

/// Record microphone and system audio to synchronized WAV files.
#[derive(Parser, Debug)]
#[command(name = "dualcap")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Capture duration in seconds (may be fractional)
    #[arg(long, default_value_t = 10.0)]
    seconds: f64,

    /// Sample rate in Hz
    #[arg(long, default_value_t = 48_000)]
    samplerate: u32,

    /// Channel count per stream
    #[arg(long, default_value_t = 1)]
    channels: u16,

    /// Frames requested per capture call
    #[arg(long, default_value_t = 1024)]
    blocksize: usize,

    /// Output directory, created if missing
    #[arg(long, default_value = "out_audio")]
    outdir: PathBuf,

    /// File name prefix for the output WAVs
    #[arg(long, default_value = "take")]
    prefix: String,

    /// List available devices and exit
    #[arg(long)]
    list_devices: bool,

    /// Explicit microphone device name (default: platform default input)
    #[arg(long)]
    mic_name: Option<String>,

    /// Explicit speaker device name used as the loopback reference
    #[arg(long)]
    speaker_name: Option<String>,

    /// Explicit loopback device name, bypassing name-derivation
    #[arg(long)]
    loopback_name: Option<String>,

    /// Skip the mixed-down third file
    #[arg(long)]
    no_mix: bool,

    /// Also write a JSON metadata sidecar next to the WAVs
    #[arg(long)]
    metadata: bool,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::Error
        } else {
            match self.verbose {
                0 => LevelFilter::Warn,
                1 => LevelFilter::Info,
                2 => LevelFilter::Debug,
                _ => LevelFilter::Trace,
            }
        }
    }
}

fn init_logging(args: &Args) {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .filter_module("dualcap_core", args.log_level())
        .filter_module("dualcap_cpal", args.log_level())
        .format_timestamp_millis()
        .init();
}

fn list_devices(backend: &CpalBackend) -> anyhow::Result<()> {
    let mut devices = backend.devices().context("device enumeration failed")?;
    devices.sort_by_key(|d| d.kind);

    for device in devices {
        let label = match device.kind {
            DeviceKind::Input => "microphone",
            DeviceKind::Output => "speaker",
            DeviceKind::LoopbackInput => "loopback",
        };
        let marker = if device.is_default { " (default)" } else { "" };
        println!("{:<12} {}{}", label, device.name, marker);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args);

    let backend = CpalBackend::new();

    if args.list_devices {
        return list_devices(&backend);
    }

    std::fs::create_dir_all(&args.outdir)
        .with_context(|| format!("failed to create output directory {}", args.outdir.display()))?;

    let config = RecordingConfig {
        samplerate: args.samplerate,
        channels: args.channels,
        seconds: args.seconds,
        blocksize: args.blocksize,
    };
    let selection = DeviceSelection {
        mic_name: args.mic_name.clone(),
        speaker_name: args.speaker_name.clone(),
        loopback_name: args.loopback_name.clone(),
    };
    let outputs = OutputPaths {
        mic: args.outdir.join(format!("{}_mic.wav", args.prefix)),
        system: args.outdir.join(format!("{}_system.wav", args.prefix)),
        mix: (!args.no_mix).then(|| args.outdir.join(format!("{}_mix.wav", args.prefix))),
    };

    let result = record_dual(&backend, &config, &selection, &outputs)?;

    if args.metadata {
        let sidecar = args.outdir.join(format!("{}.metadata.json", args.prefix));
        metadata::write_sidecar(&result.metadata, &sidecar)?;
        println!("metadata: {}", sidecar.display());
    }

    println!("Recorded {} frames per track", result.frames);
    println!("mic:    {}", result.mic_path.display());
    println!("system: {}", result.system_path.display());
    if let Some(mix) = &result.mix_path {
        println!("mix:    {}", mix.display());
    }
    Ok(())
}
