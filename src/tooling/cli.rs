//! CLI Tooling
//!
//! Command-line interface for building, browsing and summarizing path forests.
//! Every command is a pure function of its input mapping and configuration.

use crate::config::{AppConfig, ConfigLoader};
use crate::error::ApiError;
use crate::source::{self, FileMap};
use crate::tooling::format::{format_show_text, format_stats_text, format_tree_text};
use crate::tree::walk::summarize;
use crate::tree::{build, input_digest, Forest};
use crate::viewer::ViewState;
use clap::{Args, Parser, Subcommand};
use serde_json::json;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// Codeview CLI - folder/file trees from flat path maps
#[derive(Parser)]
#[command(name = "codeview")]
#[command(about = "Reconstruct folder/file trees from path-to-content maps")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (layered over the global config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, both, file, file+stderr)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

/// Where the `path -> content` mapping comes from.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// JSON object of path -> content ("-" reads stdin)
    #[arg(long, conflicts_with = "dir", required_unless_present = "dir")]
    pub input: Option<PathBuf>,

    /// Directory to scan instead of a JSON file
    #[arg(long)]
    pub dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the folder/file tree
    Tree {
        #[command(flatten)]
        source: SourceArgs,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
        /// Folder ids to expand (default: expand all)
        #[arg(long)]
        expand: Vec<String>,
    },
    /// Print the content of one file
    Show {
        #[command(flatten)]
        source: SourceArgs,
        /// File id (the input key)
        #[arg(long)]
        path: String,
    },
    /// Summarize folders, files and extensions
    Stats {
        #[command(flatten)]
        source: SourceArgs,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

/// Execution context: configuration is passed in, never read from globals.
pub struct CliContext {
    config: AppConfig,
}

impl CliContext {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Load configuration for a parsed command line and apply logging overrides.
    pub fn from_cli(cli: &Cli) -> Result<Self, ApiError> {
        let mut config = ConfigLoader::load(cli.config.as_deref())?;
        if let Some(level) = &cli.log_level {
            config.logging.level = level.clone();
        }
        if let Some(format) = &cli.log_format {
            config.logging.format = format.clone();
        }
        if let Some(output) = &cli.log_output {
            config.logging.output = output.clone();
        }
        if let Some(file) = &cli.log_file {
            config.logging.file = Some(file.clone());
        }
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        let started = Instant::now();
        let result = self.execute_inner(command);
        info!(
            command = command_name(command),
            ok = result.is_ok(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        result
    }

    fn execute_inner(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Tree {
                source,
                format,
                expand,
            } => {
                let files = load_source(source)?;
                let forest = build(&files)?;
                match format.as_str() {
                    "json" => Ok(serde_json::to_string_pretty(&forest)?),
                    "text" => {
                        let state = expansion_state(&forest, expand);
                        let rows = state.visible_rows(&forest);
                        Ok(format_tree_text(&rows, &forest, &self.config.render))
                    }
                    other => Err(invalid_format(other)),
                }
            }
            Commands::Show { source, path } => {
                let files = load_source(source)?;
                let forest = build(&files)?;
                let mut state = ViewState::new();
                state.select(&forest, path)?;
                let file = state
                    .selected_file(&forest)
                    .ok_or_else(|| ApiError::NodeNotFound(path.clone()))?;
                Ok(format_show_text(file))
            }
            Commands::Stats { source, format } => {
                let files = load_source(source)?;
                let forest = build(&files)?;
                let summary = summarize(&forest);
                let digest = hex::encode(input_digest(&files));
                match format.as_str() {
                    "json" => Ok(serde_json::to_string_pretty(&json!({
                        "digest": digest,
                        "folders": summary.folders,
                        "files": summary.files,
                        "total_bytes": summary.total_bytes,
                        "max_depth": summary.max_depth,
                        "extensions": summary.extensions,
                    }))?),
                    "text" => Ok(format_stats_text(&summary, &digest)),
                    other => Err(invalid_format(other)),
                }
            }
        }
    }
}

fn load_source(source: &SourceArgs) -> Result<FileMap, ApiError> {
    match (&source.input, &source.dir) {
        (Some(input), None) => source::load_json(input),
        (None, Some(dir)) => source::scan_dir(dir),
        _ => Err(ApiError::InvalidArgument(
            "Exactly one of --input or --dir is required".to_string(),
        )),
    }
}

fn expansion_state(forest: &Forest, expand: &[String]) -> ViewState {
    let mut state = ViewState::new();
    if expand.is_empty() {
        state.expand_all(forest);
    } else {
        for id in expand {
            state.expand(id);
        }
        state.retain_valid(forest);
    }
    state
}

fn invalid_format(format: &str) -> ApiError {
    ApiError::InvalidArgument(format!(
        "Unknown format: {} (expected text or json)",
        format
    ))
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Tree { .. } => "tree",
        Commands::Show { .. } => "show",
        Commands::Stats { .. } => "stats",
    }
}
