// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{LevelFilter, error};
use std::path::PathBuf;

use otioflow::app_config::{Config, LogLevel};
use otioflow::logging::{CustomLogger, level_filter};
use otioflow::pipeline::Pipeline;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Export the current host timeline and convert it to JSON
    #[command(name = "workflow-1", alias = "export")]
    Workflow1 {
        /// Specific timeline name to export (current timeline when omitted)
        #[arg(short, long)]
        timeline: Option<String>,
    },

    /// Clear the edit staging folder
    #[command(name = "workflow-2", alias = "clear")]
    Workflow2,

    /// Convert the edited JSON back to OTIO and import it into the host
    #[command(name = "workflow-3", alias = "import")]
    Workflow3 {
        /// Name for the imported timeline
        #[arg(short, long)]
        name: Option<String>,

        /// Import source clips into the media pool
        #[arg(long)]
        import_clips: bool,
    },

    /// Show the current pipeline status as JSON
    Status,

    /// Generate shell completions for otioflow
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// otioflow - OTIO round-trip pipeline
///
/// Automates the editorial round-trip between OTIO timeline files and the
/// video-editing host application's scripting interface.
#[derive(Parser, Debug)]
#[command(name = "otioflow")]
#[command(version = "1.0.0")]
#[command(about = "OTIO export/edit/import pipeline for a scripting-only video editor")]
#[command(long_about = "otioflow sequences the OTIO editorial round-trip against the host application.

WORKFLOWS:
    workflow-1          Export the current timeline and convert it to JSON
    workflow-2          Clear the edit staging folder
    workflow-3          Convert an edited JSON to OTIO and import it
    status              Show pipeline staging folders as JSON

EXAMPLES:
    otioflow workflow-1
    otioflow workflow-1 --timeline \"My Timeline\"
    otioflow workflow-2
    otioflow workflow-3 --name \"Edited Timeline\"
    otioflow workflow-3 --import-clips
    otioflow status
    otioflow completions bash > otioflow.bash

STAGING LAYOUT:
    <project-root>/data/timelineprocessing/timeline_ref      exported timelines
    <project-root>/data/timelineprocessing/timeline_edited   edited JSON drop zone")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Path to the project root directory
    #[arg(long, global = true, default_value = ".")]
    project_root: PathBuf,

    /// Directory containing the converter and bridge scripts
    #[arg(long, global = true)]
    scripts_dir: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, global = true, value_enum)]
    log_level: Option<CliLogLevel>,
}

fn main() {
    // Initialize the logger once with info level by default;
    // the level is updated after the CLI is parsed
    if CustomLogger::init(LevelFilter::Info).is_err() {
        eprintln!("Failed to initialize logger");
        std::process::exit(1);
    }

    let cli = CommandLineOptions::parse();

    if let Some(cmd_log_level) = &cli.log_level {
        let level: LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&level));
    }

    if let Err(e) = run(cli) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: CommandLineOptions) -> Result<()> {
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "otioflow", &mut std::io::stdout());
        return Ok(());
    }

    let mut config = Config::for_root(&cli.project_root);
    if let Some(scripts_dir) = &cli.scripts_dir {
        config.scripts_dir = scripts_dir.clone();
    }
    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone().into();
    } else {
        log::set_max_level(level_filter(&config.log_level));
    }

    let pipeline = Pipeline::new(config).context("Failed to initialize pipeline")?;

    match cli.command {
        Commands::Workflow1 { timeline } => {
            pipeline.workflow_export(timeline.as_deref())?;
        }
        Commands::Workflow2 => {
            pipeline.workflow_clear_edited()?;
        }
        Commands::Workflow3 { name, import_clips } => {
            let import_clips = if import_clips { Some(true) } else { None };
            pipeline.workflow_import(name.as_deref(), import_clips)?;
        }
        Commands::Status => {
            let status = pipeline.status()?;
            let rendered = serde_json::to_string_pretty(&status)
                .context("Failed to serialize pipeline status")?;
            println!("{}", rendered);
        }
        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}
