//! Exit codes and the structured error every command fails with.

use thiserror::Error;

/// Process exit status reported by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    InvalidArgument = 2,
    FileNotFound = 3,
    ConfigError = 4,
    GenerationError = 5,
}

impl ExitCode {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code.code())
    }
}

/// A classified command failure.
///
/// Commands never print or exit on their own: they return this error (wrapped
/// in `anyhow::Error`) and the dispatcher turns it into an exit status.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CommandError {
    message: String,
    exit_code: ExitCode,
}

impl CommandError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.code(), 0);
        assert_eq!(ExitCode::GeneralError.code(), 1);
        assert_eq!(ExitCode::InvalidArgument.code(), 2);
        assert_eq!(ExitCode::FileNotFound.code(), 3);
        assert_eq!(ExitCode::ConfigError.code(), 4);
        assert_eq!(ExitCode::GenerationError.code(), 5);
    }

    #[test]
    fn test_command_error_carries_code() {
        let err = CommandError::new("Missing file", ExitCode::FileNotFound);
        assert_eq!(err.to_string(), "Missing file");
        assert_eq!(err.exit_code(), ExitCode::FileNotFound);
    }

    #[test]
    fn test_command_error_survives_anyhow_context() {
        let err = anyhow::Error::new(CommandError::new("bad config", ExitCode::ConfigError))
            .context("while running icons");

        let inner = err
            .downcast_ref::<CommandError>()
            .expect("CommandError should be reachable through context");
        assert_eq!(inner.exit_code(), ExitCode::ConfigError);
        assert_eq!(inner.message(), "bad config");
    }
}
