use crate::bench::LengthRange;
use crate::store::Strategy;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG: &str = ".spellbench.toml";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    pub word_list: PathBuf,
    pub sample_text: PathBuf,
    pub lengths: LengthRange,

    /// Token repeated to form the synthetic benchmark text.
    pub token: String,

    /// Store used for the sample-file report.
    pub report_strategy: Strategy,

    /// Drop blank word-list lines instead of storing the empty word.
    pub skip_blank_lines: bool,

    pub chart_height: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            word_list: PathBuf::from("wordlist.txt"),
            sample_text: PathBuf::from("example_text.txt"),
            lengths: LengthRange::default(),
            token: "word".to_string(),
            report_strategy: Strategy::Linear,
            skip_blank_lines: false,
            chart_height: 12,
        }
    }
}

/// `[lengths]` table of a config file; missing keys keep the lower layer.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialLengths {
    pub start: Option<usize>,
    pub end: Option<usize>,
    pub step: Option<usize>,
}

/// One config file. Only the keys it sets are applied.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialConfig {
    pub word_list: Option<PathBuf>,
    pub sample_text: Option<PathBuf>,
    #[serde(default)]
    pub lengths: PartialLengths,
    pub token: Option<String>,
    pub report_strategy: Option<Strategy>,
    pub skip_blank_lines: Option<bool>,
    pub chart_height: Option<usize>,
}

impl PartialConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

/// Values given on the command line. `None` leaves the file value in place.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub word_list: Option<PathBuf>,
    pub sample_text: Option<PathBuf>,
    pub start: Option<usize>,
    pub end: Option<usize>,
    pub step: Option<usize>,
    pub token: Option<String>,
    pub report_strategy: Option<Strategy>,
    pub skip_blank_lines: bool,
}

impl From<Overrides> for PartialConfig {
    fn from(overrides: Overrides) -> Self {
        Self {
            word_list: overrides.word_list,
            sample_text: overrides.sample_text,
            lengths: PartialLengths {
                start: overrides.start,
                end: overrides.end,
                step: overrides.step,
            },
            token: overrides.token,
            report_strategy: overrides.report_strategy,
            // a flag can only switch filtering on
            skip_blank_lines: overrides.skip_blank_lines.then_some(true),
            chart_height: None,
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(overrides: Overrides) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                config = config.merge(PartialConfig::from_file(&global_path)?);
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG);
        if local_path.exists() {
            config = config.merge(PartialConfig::from_file(&local_path)?);
        }

        let config = config.merge(overrides.into());
        config.validate()?;
        Ok(config)
    }

    /// Apply every key `layer` sets, leaving the rest untouched.
    pub fn merge(mut self, layer: PartialConfig) -> Self {
        if let Some(path) = layer.word_list {
            self.word_list = path;
        }
        if let Some(path) = layer.sample_text {
            self.sample_text = path;
        }
        if let Some(start) = layer.lengths.start {
            self.lengths.start = start;
        }
        if let Some(end) = layer.lengths.end {
            self.lengths.end = end;
        }
        if let Some(step) = layer.lengths.step {
            self.lengths.step = step;
        }
        if let Some(token) = layer.token {
            self.token = token;
        }
        if let Some(strategy) = layer.report_strategy {
            self.report_strategy = strategy;
        }
        if let Some(skip) = layer.skip_blank_lines {
            self.skip_blank_lines = skip;
        }
        if let Some(height) = layer.chart_height {
            self.chart_height = height;
        }
        self
    }

    /// The synthetic token must normalize to a real word: the trie accepts
    /// the empty word unconditionally, which would skew its check timings.
    pub fn validate(&self) -> Result<()> {
        if self.token.trim().is_empty() {
            anyhow::bail!("The benchmark token must not be blank");
        }
        Ok(())
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "spellbench").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
