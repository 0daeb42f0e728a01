use thiserror::Error;

#[derive(Error, Debug)]
pub enum CipherError {
    #[error("ERROR! File {input} not found or cannot write to {output}")]
    ResourceAccess {
        input: String,
        output: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

impl CipherError {
    pub fn resource_access(input: &str, output: &str, source: std::io::Error) -> Self {
        CipherError::ResourceAccess {
            input: input.to_string(),
            output: output.to_string(),
            source,
        }
    }

    /// Message shown to the person at the terminal.
    pub fn user_friendly_message(&self) -> String {
        match self {
            CipherError::ResourceAccess { .. } => self.to_string(),
            CipherError::IoError(e) => format!("File system error: {}", e),
            CipherError::ConfigError { message } => {
                format!("Could not load settings: {}", message)
            }
            CipherError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            CipherError::ValidationError { message } => message.clone(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CipherError::ResourceAccess { .. } => {
                "Check that the input file exists and the output location is writable"
            }
            CipherError::IoError(_) => "Check file permissions and available disk space",
            CipherError::ConfigError { .. } => "Make sure the settings file exists and is valid TOML",
            CipherError::InvalidConfigValueError { .. } => {
                "Fix the reported setting and run again"
            }
            CipherError::ValidationError { .. } => "Check the command line arguments",
        }
    }
}

pub type Result<T> = std::result::Result<T, CipherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_access_message_names_both_files() {
        let err = CipherError::resource_access(
            "missing.txt",
            "out/result.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );

        assert_eq!(
            err.to_string(),
            "ERROR! File missing.txt not found or cannot write to out/result.txt"
        );
        assert_eq!(err.user_friendly_message(), err.to_string());
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_invalid_config_value_message() {
        let err = CipherError::InvalidConfigValueError {
            field: "output.line_ending".to_string(),
            value: "cr".to_string(),
            reason: "Unsupported line ending".to_string(),
        };
        assert!(err.to_string().contains("'cr'"));
        assert!(err.user_friendly_message().contains("output.line_ending"));
    }
}
