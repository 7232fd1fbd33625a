mod schema;

pub use schema::{Config, Overrides, RunSettings};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT: &str = "results.csv";
pub const DEFAULT_OUTPUT: &str = "personality.csv";
pub const DEFAULT_DELIMITER: u8 = b',';
/// Picked up from the working directory when no `--config` is given
pub const DEFAULT_CONFIG: &str = "hexaco.yaml";

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses `hexaco.yaml` in the
///   working directory when it exists and the defaults otherwise.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                anyhow::bail!("Config file not found at {}", p.display());
            }
            p
        }
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG);
            if !default.exists() {
                return Ok(Config::default());
            }
            default
        }
    };

    read_config(&config_path)
}

fn read_config(config_path: &Path) -> Result<Config> {
    let config_content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    parse_config(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", config_path.display()))
}

pub fn parse_config(yaml: &str) -> Result<Config> {
    let config: Config = serde_saphyr::from_str(yaml)?;
    Ok(config)
}

/// Validate configuration values.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(ref delimiter) = config.delimiter {
        if let Err(e) = parse_delimiter(delimiter) {
            errors.push(format!("delimiter: invalid '{}' - {}", delimiter, e));
        }
    }

    if let Some(ref input) = config.input {
        if input.as_os_str().is_empty() {
            errors.push("input: must not be empty".to_string());
        }
    }

    if let Some(ref output) = config.output {
        if output.as_os_str().is_empty() {
            errors.push("output: must not be empty".to_string());
        }
    }

    if let (Some(input), Some(output)) = (&config.input, &config.output) {
        if same_file(input, output) {
            errors.push("output: must differ from input".to_string());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate settings after command-line overrides have been merged in.
/// Returns all validation errors at once (not just the first).
pub fn validate_settings(settings: &RunSettings) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if settings.input.as_os_str().is_empty() {
        errors.push("input: must not be empty".to_string());
    }
    if settings.output.as_os_str().is_empty() {
        errors.push("output: must not be empty".to_string());
    }
    if same_file(&settings.input, &settings.output) {
        errors.push(format!(
            "output: {} would overwrite the input file",
            settings.output.display()
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Same path as written, or both resolve to the same existing file
fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn parse_delimiter(s: &str) -> Result<u8> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some('"' | '\n' | '\r'), None) => {
            anyhow::bail!("quote and line-break characters cannot separate fields")
        }
        (Some(c), None) if c.is_ascii() => Ok(c as u8),
        _ => anyhow::bail!("must be exactly one ASCII character"),
    }
}

impl Config {
    /// Merge command-line overrides and defaults into concrete run settings.
    /// Call after [`validate_config`]; an invalid delimiter falls back to `,`.
    pub fn resolve(&self, overrides: &Overrides) -> RunSettings {
        RunSettings {
            input: overrides
                .input
                .clone()
                .or_else(|| self.input.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT)),
            output: overrides
                .output
                .clone()
                .or_else(|| self.output.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            delimiter: self
                .delimiter
                .as_deref()
                .and_then(|d| parse_delimiter(d).ok())
                .unwrap_or(DEFAULT_DELIMITER),
            facets: overrides.facets || self.facets.unwrap_or(false),
        }
    }
}
