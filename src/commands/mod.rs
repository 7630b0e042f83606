//! The command contract and its invocation lifecycle.

mod dotenv;
mod icons;
mod splash;

pub use dotenv::Dotenv;
pub use icons::Icons;
pub use splash::Splash;

use crate::app_config;
use crate::cli::errors::ExitCode;
use crate::cli::help::command_help;
use crate::cli::output::{cyan, green, red, Console, Stream};
use crate::cli::parser::{parse_args, ParsedInvocation};
use crate::cli::schema::{CommandSchema, FlagSpec, FlagValue};
use crate::imaging::AssetFailure;
use anyhow::Result;
use std::path::Path;

/// A leaf command: a schema plus the work it performs.
pub trait Command: Send + Sync {
    fn schema(&self) -> &CommandSchema;

    fn execute(&self, parsed: &ParsedInvocation, console: &Console) -> Result<()>;
}

/// Parses `argv`, prints help if requested, otherwise executes the command.
pub fn run(command: &dyn Command, argv: &[String]) -> Result<()> {
    let parsed = parse_args(argv, command.schema())?;

    if parsed.flag_bool("help") {
        println!("{}", command_help(command.schema()));
        return Ok(());
    }

    let console = Console::new(parsed.flag_bool("verbose"));
    command.execute(&parsed, &console)
}

/// Source file and app name shared by the image commands.
///
/// The file must exist and the app name must be non-blank.
pub(crate) fn resolve_inputs<'a>(
    parsed: &'a ParsedInvocation,
    console: &Console,
) -> Result<(&'a str, &'a str)> {
    let file = parsed
        .arg("file")
        .ok_or_else(|| console.error("Missing required argument: file", ExitCode::InvalidArgument))?;

    if !Path::new(file).exists() {
        return Err(console.error(
            format!(
                "Source file {} not found! {}",
                cyan(file, Stream::Stderr),
                red("ABORTING", Stream::Stderr)
            ),
            ExitCode::FileNotFound,
        ));
    }

    let app_name = parsed
        .flag_str("appName")
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| {
            console.error(
                format!(
                    "Failed to retrieve {} value. Please specify it with the {} flag or check that {} file exists. {}",
                    cyan("appName", Stream::Stderr),
                    green("appName", Stream::Stderr),
                    cyan("app.json", Stream::Stderr),
                    red("ABORTING", Stream::Stderr),
                ),
                ExitCode::ConfigError,
            )
        })?;

    Ok((file, app_name))
}

/// Warns about every failed asset and fails the command if there was any.
pub(crate) fn report_failures(failures: &[AssetFailure], console: &Console) -> Result<()> {
    if failures.is_empty() {
        return Ok(());
    }

    let details = failures
        .iter()
        .map(|failure| format!("  - {failure}"))
        .collect::<Vec<_>>()
        .join("\n");
    console.warn(format!(
        "{} asset(s) failed to generate:\n{details}",
        failures.len()
    ));

    Err(console.error(
        format!("Failed to generate {} asset(s)", failures.len()),
        ExitCode::GenerationError,
    ))
}

/// `-a, --appName`, defaulting to the `name` field of `./app.json`.
pub(crate) fn app_name_flag() -> FlagSpec {
    FlagSpec::string(
        "appName",
        "the appName used to build output assets path. Default is retrieved from 'app.json' file.",
    )
    .with_short('a')
    .with_deferred_default(|| app_config::extract_app_name().map(FlagValue::Str))
}
