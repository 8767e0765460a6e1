use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Input file not found: {path}")]
    NotFound { path: String },

    #[error("Could not decode JSON from '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error on '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported JSON shape: expected an array of objects or a single object, found {}", describe_shape(.found, .index))]
    Shape {
        found: &'static str,
        index: Option<usize>,
    },

    #[error("Field '{field}' must be a string, found {found}")]
    StrictType { field: &'static str, found: &'static str },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

fn describe_shape(found: &str, index: &Option<usize>) -> String {
    match index {
        Some(i) => format!("{} at index {}", found, i),
        None => format!("{} at the root", found),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The input file is missing or unreadable as JSON.
    Input,
    /// The JSON parsed but its content does not fit the record model.
    Data,
    Config,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl EtlError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        EtlError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::NotFound { .. } | EtlError::Parse { .. } => ErrorCategory::Input,
            EtlError::Shape { .. } | EtlError::StrictType { .. } => ErrorCategory::Data,
            EtlError::Config { .. } | EtlError::InvalidConfigValue { .. } => ErrorCategory::Config,
            EtlError::Io { .. } | EtlError::Serialization(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Config => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::NotFound { path } => {
                format!("Input file '{}' was not found", path)
            }
            EtlError::Parse { path, .. } => {
                format!("'{}' is not a valid JSON file", path)
            }
            EtlError::Io { path, source } => {
                format!("Could not access '{}': {}", path, source)
            }
            EtlError::Shape { .. } => {
                "The input must be a list of store objects or a single store object".to_string()
            }
            EtlError::StrictType { field, found } => {
                format!("Field '{}' holds {} where text was expected", field, found)
            }
            EtlError::Serialization(e) => format!("Could not encode the output: {}", e),
            EtlError::Config { message } => format!("Invalid configuration: {}", message),
            EtlError::InvalidConfigValue { field, reason, .. } => {
                format!("Invalid configuration for '{}': {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EtlError::NotFound { .. } => {
                "Check that the input file exists or pass its location with --input"
            }
            EtlError::Parse { .. } => "Make sure the scraper export finished and the file is valid JSON",
            EtlError::Io { .. } => "Check file permissions and available disk space",
            EtlError::Shape { .. } => "Export the scraped data as a JSON array of objects",
            EtlError::StrictType { .. } => {
                "The scraper output format changed; inspect the offending field in the input"
            }
            EtlError::Serialization(_) => "Inspect the input for values that cannot be encoded as JSON",
            EtlError::Config { .. } | EtlError::InvalidConfigValue { .. } => {
                "Fix the command line flags or the TOML configuration file"
            }
        }
    }
}

/// JSON type name used in shape and type diagnostics.
pub fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
