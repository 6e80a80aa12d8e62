//! Logging System
//!
//! Structured logging using the `tracing` crate. Level, format and destination
//! come from `LoggingConfig`, overridable through `CODEVIEW_LOG*` variables.

use crate::config::paths::xdg_root;
use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Whether logging is enabled (default: true)
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text (default: text)
    #[serde(default = "default_format")]
    pub format: String,

    /// Output destination: stdout, stderr, file, file+stderr
    #[serde(default = "default_output")]
    pub output: String,

    /// Log file path when output includes file; None means platform state dir
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Enable colored output (text format, terminal outputs only)
    #[serde(default = "default_true")]
    pub color: bool,

    /// Module-specific log levels
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_output() -> String {
    "stderr".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            level: default_log_level(),
            format: default_format(),
            output: default_output(),
            file: None,
            color: default_true(),
            modules: HashMap::new(),
        }
    }
}

/// Resolved destinations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputTargets {
    pub stdout: bool,
    pub stderr: bool,
    pub file: bool,
}

/// Initialize the global subscriber.
///
/// Priority order (highest to lowest):
/// 1. Environment variables (CODEVIEW_LOG, CODEVIEW_LOG_FORMAT, CODEVIEW_LOG_OUTPUT)
/// 2. Configuration (file, CLI overrides)
/// 3. Defaults
pub fn init_logging(config: Option<&LoggingConfig>) -> Result<(), ApiError> {
    if config.is_some_and(|c| !c.enabled) {
        let _ = Registry::default().with(EnvFilter::new("off")).try_init();
        return Ok(());
    }

    let filter = build_env_filter(config)?;
    let format = determine_format(config)?;
    let output = determine_output(config)?;
    let terminal = !output.file;
    let use_color = terminal && config.map(|c| c.color).unwrap_or(true);

    let writer = if output.file {
        let file = Arc::new(open_log_file(config.and_then(|c| c.file.clone()))?);
        if output.stderr {
            BoxMakeWriter::new(file.and(std::io::stderr))
        } else {
            BoxMakeWriter::new(file)
        }
    } else if output.stdout && output.stderr {
        BoxMakeWriter::new(std::io::stdout.and(std::io::stderr))
    } else if output.stdout {
        BoxMakeWriter::new(std::io::stdout)
    } else {
        BoxMakeWriter::new(std::io::stderr)
    };

    let base = Registry::default().with(filter);
    let layer = fmt::layer()
        .with_target(true)
        .with_timer(ChronoUtc::rfc_3339())
        .with_writer(writer);

    // A subscriber may already be installed (tests, embedding hosts).
    let result = if format == "json" {
        base.with(layer.json()).try_init()
    } else {
        base.with(layer.with_ansi(use_color)).try_init()
    };
    if let Err(e) = result {
        tracing::debug!(error = %e, "Global subscriber already set");
    }
    Ok(())
}

fn open_log_file(configured: Option<PathBuf>) -> Result<std::fs::File, ApiError> {
    let log_file = configured
        .filter(|p| !p.as_os_str().is_empty())
        .or_else(|| {
            std::env::var("CODEVIEW_LOG_FILE")
                .ok()
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
        })
        .or_else(xdg_root::default_log_file)
        .ok_or_else(|| {
            ApiError::ConfigError("Log file path not set and default resolution failed".to_string())
        })?;
    if let Some(parent) = log_file.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ApiError::ConfigError(format!("Failed to create log directory: {}", e))
        })?;
    }
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .map_err(|e| {
            ApiError::ConfigError(format!("Failed to open log file {:?}: {}", log_file, e))
        })
}

/// Build environment filter from config or environment variables
pub fn build_env_filter(config: Option<&LoggingConfig>) -> Result<EnvFilter, ApiError> {
    if let Ok(filter) = EnvFilter::try_from_env("CODEVIEW_LOG") {
        return Ok(filter);
    }

    let level = config.map(|c| c.level.as_str()).unwrap_or("info");
    if level == "off" {
        return Ok(EnvFilter::new("off"));
    }

    let mut filter = EnvFilter::try_new(level)
        .map_err(|e| ApiError::ConfigError(format!("Invalid log level {:?}: {}", level, e)))?;

    if let Some(config) = config {
        for (module, module_level) in &config.modules {
            filter = filter.add_directive(parse_directive(module, module_level)?);
        }
    }

    if let Ok(modules_str) = std::env::var("CODEVIEW_LOG_MODULES") {
        for module_spec in modules_str.split(',') {
            if let Some((module, module_level)) = module_spec.split_once('=') {
                filter = filter.add_directive(parse_directive(module.trim(), module_level.trim())?);
            }
        }
    }

    Ok(filter)
}

fn parse_directive(
    module: &str,
    level: &str,
) -> Result<tracing_subscriber::filter::Directive, ApiError> {
    format!("{}={}", module, level)
        .parse()
        .map_err(|e| ApiError::ConfigError(format!("Invalid log directive: {}", e)))
}

/// Determine output format from config or environment
pub fn determine_format(config: Option<&LoggingConfig>) -> Result<String, ApiError> {
    if let Ok(format) = std::env::var("CODEVIEW_LOG_FORMAT") {
        if format == "json" || format == "text" {
            return Ok(format);
        }
    }
    let format = config.map(|c| c.format.as_str()).unwrap_or("text");
    match format {
        "json" | "text" => Ok(format.to_string()),
        other => Err(ApiError::ConfigError(format!(
            "Invalid log format: {} (expected json or text)",
            other
        ))),
    }
}

/// Determine output destinations from config or environment
pub fn determine_output(config: Option<&LoggingConfig>) -> Result<OutputTargets, ApiError> {
    let output = std::env::var("CODEVIEW_LOG_OUTPUT")
        .ok()
        .filter(|s| !s.is_empty())
        .or_else(|| config.map(|c| c.output.clone()))
        .unwrap_or_else(default_output);
    parse_output(&output)
}

fn parse_output(output: &str) -> Result<OutputTargets, ApiError> {
    let targets = match output {
        "stdout" => OutputTargets { stdout: true, stderr: false, file: false },
        "stderr" => OutputTargets { stdout: false, stderr: true, file: false },
        "both" => OutputTargets { stdout: true, stderr: true, file: false },
        "file" => OutputTargets { stdout: false, stderr: false, file: true },
        "file+stderr" => OutputTargets { stdout: false, stderr: true, file: true },
        other => {
            return Err(ApiError::ConfigError(format!(
                "Invalid log output: {} (expected stdout, stderr, both, file, file+stderr)",
                other
            )))
        }
    };
    Ok(targets)
}
