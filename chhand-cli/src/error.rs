//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// No verse text was supplied on any input channel
    EmptyInput,
    /// The verse was analyzed and does not scan as a Doha
    InvalidVerse,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::EmptyInput => {
                write!(f, "No verse provided: pass TEXT, --input FILE, or pipe stdin")
            }
            CliError::InvalidVerse => write!(f, "Verse does not scan as a Doha"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_error_display() {
        let error = CliError::EmptyInput;
        assert_eq!(
            error.to_string(),
            "No verse provided: pass TEXT, --input FILE, or pipe stdin"
        );
    }

    #[test]
    fn test_invalid_verse_error_display() {
        let error = CliError::InvalidVerse;
        assert_eq!(error.to_string(), "Verse does not scan as a Doha");
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = CliError::EmptyInput;
        let _: &dyn std::error::Error = &error;

        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("EmptyInput"));
    }

    #[test]
    fn test_cli_result_type_alias() {
        let success: CliResult<String> = Ok("test".to_string());
        assert!(success.is_ok());

        let failure: CliResult<String> = Err(anyhow::anyhow!("test error"));
        assert!(failure.is_err());
        assert!(failure
            .as_ref()
            .unwrap_err()
            .to_string()
            .contains("test error"));
    }
}
