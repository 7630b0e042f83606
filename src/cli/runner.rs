//! Entry point: global flags, command lookup and exit-code translation.

use crate::cli::errors::{CommandError, ExitCode};
use crate::cli::help::global_help;
use crate::cli::output::{red, Stream};
use crate::commands::{self, Command, Dotenv, Icons, Splash};
use crate::{CLI_BIN, VERSION};

/// Every command the CLI knows about, in listing order.
pub fn registry() -> Vec<Box<dyn Command>> {
    vec![
        Box::new(Dotenv::new()),
        Box::new(Icons::new()),
        Box::new(Splash::new()),
    ]
}

/// `rn-toolbox/<version> rust-<msrv> <os>-<arch>`
pub fn version_line() -> String {
    let rust = option_env!("CARGO_PKG_RUST_VERSION")
        .filter(|version| !version.is_empty())
        .unwrap_or("unknown");
    format!(
        "{CLI_BIN}/{VERSION} rust-{rust} {}-{}",
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

/// Runs the CLI against `argv` (without the binary name).
///
/// Structured [`CommandError`]s are reported on stderr and mapped to their
/// exit code; any other error is returned to the caller.
pub fn run_cli(argv: &[String]) -> anyhow::Result<ExitCode> {
    if argv.iter().any(|token| token == "--version" || token == "-V") {
        println!("{}", version_line());
        return Ok(ExitCode::Success);
    }

    let commands = registry();

    let Some(name) = argv.first().filter(|token| !token.starts_with('-')) else {
        println!(
            "{}",
            global_help(commands.iter().map(|command| command.schema()), VERSION)
        );
        return Ok(ExitCode::Success);
    };

    let Some(command) = commands
        .iter()
        .find(|command| command.schema().name == name.as_str())
    else {
        let available = commands
            .iter()
            .map(|command| command.schema().name)
            .collect::<Vec<_>>()
            .join(", ");
        eprintln!("Unknown command: {name}");
        eprintln!("Available commands: {available}");
        eprintln!("Run '{CLI_BIN} --help' for usage information.");
        return Ok(ExitCode::InvalidArgument);
    };

    match commands::run(command.as_ref(), &argv[1..]) {
        Ok(()) => Ok(ExitCode::Success),
        Err(err) => match err.downcast_ref::<CommandError>() {
            Some(command_error) => {
                eprintln!("{}", red(command_error.message(), Stream::Stderr));
                Ok(command_error.exit_code())
            }
            None => Err(err),
        },
    }
}
