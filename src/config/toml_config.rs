use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{validate_distinct_paths, validate_path, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_INDENT: usize = 4;
pub const MAX_INDENT: usize = 16;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
    pub indent: Option<usize>,
}

impl TomlConfig {
    /// Loads a configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let display = path.as_ref().display().to_string();
        let content =
            std::fs::read_to_string(&path).map_err(|source| EtlError::io(display, source))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EtlError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value. Unset variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| EtlError::Config {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn indent(&self) -> usize {
        self.output.indent.unwrap_or(DEFAULT_INDENT)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input.path", &self.input.path)?;
        validate_path("output.path", &self.output.path)?;
        validate_distinct_paths(&self.input.path, &self.output.path)?;
        validate_range("output.indent", self.indent(), 0, MAX_INDENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[input]
path = "vegan_resto2.json"

[output]
path = "cleaned.json"
indent = 2
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.input.path, "vegan_resto2.json");
        assert_eq!(config.output.path, "cleaned.json");
        assert_eq!(config.indent(), 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_indent_defaults_to_four() {
        let config = TomlConfig::from_toml_str(
            "[input]\npath = \"a.json\"\n\n[output]\npath = \"b.json\"\n",
        )
        .unwrap();
        assert_eq!(config.indent(), DEFAULT_INDENT);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("STORE_ETL_TEST_OUT_DIR", "/tmp/stores");

        let toml_content = r#"
[input]
path = "${STORE_ETL_TEST_UNSET_VAR}/in.json"

[output]
path = "${STORE_ETL_TEST_OUT_DIR}/cleaned.json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.output.path, "/tmp/stores/cleaned.json");
        assert_eq!(config.input.path, "${STORE_ETL_TEST_UNSET_VAR}/in.json");

        std::env::remove_var("STORE_ETL_TEST_OUT_DIR");
    }

    #[test]
    fn test_missing_section_is_config_error() {
        let err = TomlConfig::from_toml_str("[input]\npath = \"a.json\"\n").unwrap_err();
        assert!(matches!(err, EtlError::Config { .. }));
    }

    #[test]
    fn test_config_validation() {
        let same_paths = TomlConfig::from_toml_str(
            "[input]\npath = \"a.json\"\n\n[output]\npath = \"a.json\"\n",
        )
        .unwrap();
        assert!(same_paths.validate().is_err());

        let wide_indent = TomlConfig::from_toml_str(
            "[input]\npath = \"a.json\"\n\n[output]\npath = \"b.json\"\nindent = 40\n",
        )
        .unwrap();
        assert!(wide_indent.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[input]\npath = \"in.json\"\n\n[output]\npath = \"out.json\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.input.path, "in.json");
    }
}
