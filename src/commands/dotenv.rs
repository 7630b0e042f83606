use super::Command;
use crate::cli::errors::ExitCode;
use crate::cli::output::{cyan, red, Console, Stream};
use crate::cli::parser::ParsedInvocation;
use crate::cli::schema::{help_flag, verbose_flag, CommandSchema, PositionalSpec};
use anyhow::Result;
use std::path::Path;

const OUTPUT_ENV_FILE: &str = "./.env";

/// Replaces `./.env` with `./.env.<environmentName>`.
pub struct Dotenv {
    schema: CommandSchema,
}

impl Dotenv {
    pub fn new() -> Self {
        let schema = CommandSchema::new(
            "dotenv",
            "Manage .env files for react-native-dotenv\n\
             Manage .env files for react-native-dotenv for a specific environment (development, production, etc...)",
        )
        .with_arg(PositionalSpec::required(
            "environmentName",
            "name of the environment to load .dotenv file for",
        ))
        .with_flag(help_flag())
        .with_flag(verbose_flag())
        .with_example("{bin} {command} development");

        Self { schema }
    }
}

impl Default for Dotenv {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for Dotenv {
    fn schema(&self) -> &CommandSchema {
        &self.schema
    }

    fn execute(&self, parsed: &ParsedInvocation, console: &Console) -> Result<()> {
        let environment = parsed.arg("environmentName").ok_or_else(|| {
            console.error("Missing required argument: environmentName", ExitCode::InvalidArgument)
        })?;

        let source = format!("./.env.{environment}");
        if !Path::new(&source).exists() {
            return Err(console.error(
                format!(
                    "Source file {} not found! {}",
                    cyan(&source, Stream::Stderr),
                    red("ABORTING", Stream::Stderr)
                ),
                ExitCode::FileNotFound,
            ));
        }

        console.log(format!("Generating .env from {} file...", cyan(&source, Stream::Stdout)));
        console.log_verbose(format!("Source environment file: {source}"));

        console.log_verbose("Removing existing .env file");
        // A missing or undeletable .env is not an error; the copy below reports real failures.
        let _ = std::fs::remove_file(OUTPUT_ENV_FILE);

        std::fs::copy(&source, OUTPUT_ENV_FILE).map_err(|err| {
            console.error(
                format!("Failed to generate .env file: {err}"),
                ExitCode::GenerationError,
            )
        })?;

        console.log_verbose("Generated new .env file.");
        Ok(())
    }
}
