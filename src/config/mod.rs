pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_distinct_paths, validate_path, validate_range, Validate};
use toml_config::{TomlConfig, DEFAULT_INDENT, MAX_INDENT};

#[cfg(feature = "cli")]
use crate::utils::logger::LogFormat;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "store-etl")]
#[command(about = "Normalizes scraped store listings into a fixed JSON schema")]
pub struct CliConfig {
    #[arg(long, default_value = "vegan_resto2.json")]
    pub input: String,

    #[arg(long, default_value = "cleaned_health_food_stores.json")]
    pub output: String,

    #[arg(long, help = "TOML file providing input/output settings; overrides --input, --output and --indent")]
    pub config: Option<String>,

    #[arg(long, default_value_t = DEFAULT_INDENT)]
    pub indent: usize,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value = "compact")]
    pub log_format: LogFormat,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Settings for the run, read from the TOML file when `--config` is given.
    pub fn resolve(&self) -> Result<RunConfig> {
        match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path);
                Ok(TomlConfig::from_file(path)?.into())
            }
            None => Ok(RunConfig {
                input_path: self.input.clone(),
                output_path: self.output.clone(),
                indent: self.indent,
            }),
        }
    }
}

/// Where to read, where to write, and how to indent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input_path: String,
    pub output_path: String,
    pub indent: usize,
}

impl RunConfig {
    pub fn new(input_path: impl Into<String>, output_path: impl Into<String>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            indent: DEFAULT_INDENT,
        }
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}

impl From<TomlConfig> for RunConfig {
    fn from(config: TomlConfig) -> Self {
        let indent = config.indent();
        Self {
            input_path: config.input.path,
            output_path: config.output.path,
            indent,
        }
    }
}

impl ConfigProvider for RunConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn indent(&self) -> usize {
        self.indent
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input.path", &self.input_path)?;
        validate_path("output.path", &self.output_path)?;
        validate_distinct_paths(&self.input_path, &self.output_path)?;
        validate_range("output.indent", self.indent, 0, MAX_INDENT)
    }
}
