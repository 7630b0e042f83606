//! Console output for commands, plus terminal colour helpers.
//!
//! Colours are only emitted when the stream the text is printed on supports
//! them, so piped output (and `NO_COLOR`) stays plain text. Error messages end
//! up on stderr and must be styled against [`Stream::Stderr`].

use crate::cli::errors::{CommandError, ExitCode};
use owo_colors::OwoColorize;
pub use owo_colors::Stream;

pub fn cyan(text: &str, stream: Stream) -> String {
    text.if_supports_color(stream, |text| text.cyan())
        .to_string()
}

pub fn green(text: &str, stream: Stream) -> String {
    text.if_supports_color(stream, |text| text.green())
        .to_string()
}

pub fn red(text: &str, stream: Stream) -> String {
    text.if_supports_color(stream, |text| text.red())
        .to_string()
}

pub fn yellow(text: &str, stream: Stream) -> String {
    text.if_supports_color(stream, |text| text.yellow())
        .to_string()
}

/// Output primitives handed to a command for the duration of one run.
#[derive(Debug, Clone, Copy, Default)]
pub struct Console {
    verbose: bool,
}

impl Console {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn log(&self, message: impl AsRef<str>) {
        println!("{}", message.as_ref());
    }

    /// Prints only when `--verbose` was given.
    pub fn log_verbose(&self, message: impl AsRef<str>) {
        if self.verbose {
            println!("{}", message.as_ref());
        }
    }

    pub fn warn(&self, message: impl AsRef<str>) {
        eprintln!("{} {}", yellow("Warning:", Stream::Stderr), message.as_ref());
    }

    /// Builds the error a command returns to abort with `exit_code`.
    ///
    /// Nothing is printed here; the dispatcher reports the message.
    pub fn error(&self, message: impl Into<String>, exit_code: ExitCode) -> anyhow::Error {
        CommandError::new(message, exit_code).into()
    }
}
