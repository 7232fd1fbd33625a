use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Run configuration as read from YAML.
///
/// Every key is optional; unset keys fall back to the built-in defaults.
///
/// Example YAML:
/// ```yaml
/// input: survey/results.csv
/// output: survey/personality.csv
/// delimiter: ";"
/// facets: true
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Response file with columns q1..q100
    #[serde(default)]
    pub input: Option<PathBuf>,

    /// Where the score table is written
    #[serde(default)]
    pub output: Option<PathBuf>,

    /// Field delimiter for both files; a single ASCII character
    #[serde(default)]
    pub delimiter: Option<String>,

    /// Also score the 24 facets
    #[serde(default)]
    pub facets: Option<bool>,
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    pub input: PathBuf,
    pub output: PathBuf,
    pub delimiter: u8,
    pub facets: bool,
}

/// Command-line values that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub facets: bool,
}
