//! Standalone OTIO importer.
//!
//! Takes an OTIO file path (or prompts for one interactively) and imports it
//! into the host application's currently open project, bypassing the staging
//! workflow entirely.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::{LevelFilter, error, info};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use otioflow::app_config::Config;
use otioflow::host::bridge::BridgeClient;
use otioflow::importer::{ImportRequest, TimelineImporter};
use otioflow::logging::CustomLogger;

#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Import an OTIO file into the host application's open project
#[derive(Parser, Debug)]
#[command(name = "import-otio")]
#[command(version = "1.0.0")]
#[command(about = "Import an OTIO timeline into the host application")]
#[command(long_about = "Imports an OTIO timeline file into the currently open project.

EXAMPLES:
    import-otio exported_timeline.otio
    import-otio /path/to/timeline.otio --name \"My Timeline\"
    import-otio timeline.otio --import-clips --clips-path /path/to/media
    import-otio                  # prompts for the file path")]
struct CommandLineOptions {
    /// Input OTIO file path (prompts interactively when omitted)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Timeline name (file stem when omitted)
    #[arg(short, long)]
    name: Option<String>,

    /// Import source clips into the media pool
    #[arg(long)]
    import_clips: bool,

    /// Filesystem path to search for source clips
    #[arg(long)]
    clips_path: Option<String>,

    /// Directory containing the host bridge script
    #[arg(long)]
    scripts_dir: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// Prompt until an existing file path is entered.
///
/// A single layer of surrounding quotes is stripped, so paths pasted from a
/// file manager's "copy as path" work as-is.
fn prompt_for_otio_path() -> Result<PathBuf> {
    println!("Enter the path to your OTIO file:");
    let stdin = std::io::stdin();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            anyhow::bail!("No input provided");
        }

        let entered = strip_quotes(line.trim());
        if entered.is_empty() {
            println!("Please enter a valid file path.");
            continue;
        }

        let path = Path::new(entered);
        if !path.exists() {
            println!("File not found: {}", entered);
            println!("Please enter a valid file path.");
            continue;
        }

        return Ok(path.to_path_buf());
    }
}

/// Strip one layer of matching surrounding quote characters
fn strip_quotes(input: &str) -> &str {
    let bytes = input.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        let last = bytes[bytes.len() - 1];
        if first == last && (first == b'"' || first == b'\'') {
            return &input[1..input.len() - 1];
        }
    }
    input
}

fn main() {
    if CustomLogger::init(LevelFilter::Info).is_err() {
        eprintln!("Failed to initialize logger");
        std::process::exit(1);
    }

    let cli = CommandLineOptions::parse();

    if let Some(level) = &cli.log_level {
        log::set_max_level(match level {
            CliLogLevel::Error => LevelFilter::Error,
            CliLogLevel::Warn => LevelFilter::Warn,
            CliLogLevel::Info => LevelFilter::Info,
            CliLogLevel::Debug => LevelFilter::Debug,
            CliLogLevel::Trace => LevelFilter::Trace,
        });
    }

    if let Err(e) = run(cli) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: CommandLineOptions) -> Result<()> {
    let otio_path = match cli.input {
        Some(path) => path,
        None => prompt_for_otio_path()?,
    };
    info!("OTIO file: {:?}", otio_path);

    let mut config = Config::default();
    if let Some(scripts_dir) = cli.scripts_dir {
        config.scripts_dir = scripts_dir;
    }

    let host = BridgeClient::new(config.bridge_script_path(), config.script_launcher.clone());
    let importer = TimelineImporter::new(Box::new(host));

    let request = ImportRequest {
        timeline_name: cli.name,
        import_source_clips: if cli.import_clips { Some(true) } else { None },
        source_clips_path: cli.clips_path,
        ..ImportRequest::default()
    };

    importer.import(&otio_path, &request)?;
    info!("Timeline is now available in the host application");
    Ok(())
}
