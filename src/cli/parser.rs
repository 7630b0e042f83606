//! Turns raw command-line tokens into a [`ParsedInvocation`] according to a
//! [`CommandSchema`].
//!
//! Tokenizing is delegated to clap's builder API: a throwaway `clap::Command`
//! is assembled from the schema on every call, with clap's own help and version
//! handling switched off so the schema stays the only authority on which flags
//! exist. Defaults and positional requirements are resolved here afterwards.

use crate::cli::errors::{CommandError, ExitCode};
use crate::cli::schema::{CommandSchema, FlagKind, FlagValue, POSITIONALS_ID};
use clap::{parser::ValueSource, Arg, ArgAction, ArgMatches, ColorChoice};
use std::collections::HashMap;

/// Positional and flag values resolved for one command invocation.
///
/// An absent key means the value is undefined: not given and without default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedInvocation {
    args: HashMap<&'static str, String>,
    flags: HashMap<&'static str, FlagValue>,
}

impl ParsedInvocation {
    /// Invocation carrying nothing but `help=true`.
    fn help_only() -> Self {
        Self {
            args: HashMap::new(),
            flags: HashMap::from([("help", FlagValue::Bool(true))]),
        }
    }

    pub fn arg(&self, name: &str) -> Option<&str> {
        self.args.get(name).map(String::as_str)
    }

    pub fn flag(&self, name: &str) -> Option<&FlagValue> {
        self.flags.get(name)
    }

    /// `true` only when the flag resolved to `Bool(true)`.
    pub fn flag_bool(&self, name: &str) -> bool {
        matches!(self.flags.get(name), Some(FlagValue::Bool(true)))
    }

    pub fn flag_str(&self, name: &str) -> Option<&str> {
        match self.flags.get(name) {
            Some(FlagValue::Str(value)) => Some(value.as_str()),
            _ => None,
        }
    }
}

/// Parses `argv` (the tokens after the command name) against `schema`.
///
/// When `--help` is present, required positionals are not enforced and
/// deferred defaults are not evaluated, so help always renders. A help token
/// also wins over unknown flags and missing flag values.
pub fn parse_args(argv: &[String], schema: &CommandSchema) -> Result<ParsedInvocation, CommandError> {
    schema.validate().map_err(|err| {
        CommandError::new(
            format!("Invalid definition for command '{}': {err}", schema.name),
            ExitCode::GeneralError,
        )
    })?;

    let matches = match build_matcher(schema).try_get_matches_from(argv.iter()) {
        Ok(matches) => matches,
        Err(_) if requests_help(argv, schema) => return Ok(ParsedInvocation::help_only()),
        Err(err) => {
            return Err(CommandError::new(clap_message(&err), ExitCode::InvalidArgument));
        }
    };

    let mut flags = HashMap::new();
    for flag in &schema.flags {
        if let Some(value) = flag_from_matches(&matches, flag.name, flag.kind) {
            flags.insert(flag.name, value);
        }
    }

    let wants_help = matches!(flags.get("help"), Some(FlagValue::Bool(true)));

    if !wants_help {
        for flag in &schema.flags {
            if flags.contains_key(flag.name) {
                continue;
            }
            if let Some(value) = flag.default.as_ref().and_then(|default| default.resolve()) {
                flags.insert(flag.name, value);
            }
        }
    }

    let positionals: Vec<String> = matches
        .get_many::<String>(POSITIONALS_ID)
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    let mut args = HashMap::new();
    for (index, spec) in schema.args.iter().enumerate() {
        if let Some(value) = positionals.get(index) {
            args.insert(spec.name, value.clone());
        } else if let Some(default) = &spec.default {
            args.insert(spec.name, default.clone());
        } else if spec.required && !wants_help {
            return Err(CommandError::new(
                format!("Missing required argument: {}", spec.name),
                ExitCode::InvalidArgument,
            ));
        }
    }

    Ok(ParsedInvocation { args, flags })
}

fn build_matcher(schema: &CommandSchema) -> clap::Command {
    let mut command = clap::Command::new(schema.name)
        .no_binary_name(true)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .color(ColorChoice::Never);

    for flag in &schema.flags {
        let mut arg = Arg::new(flag.name).long(flag.name).overrides_with(flag.name);
        if let Some(short) = flag.short {
            arg = arg.short(short);
        }
        arg = match flag.kind {
            FlagKind::Boolean => arg.action(ArgAction::SetTrue),
            FlagKind::String => arg.action(ArgAction::Set).value_name("value"),
        };
        command = command.arg(arg);
    }

    command.arg(
        Arg::new(POSITIONALS_ID)
            .action(ArgAction::Append)
            .num_args(1..),
    )
}

/// Whether a literal help token appears before any `--` terminator.
fn requests_help(argv: &[String], schema: &CommandSchema) -> bool {
    let Some(help) = schema
        .flag("help")
        .filter(|flag| flag.kind == FlagKind::Boolean)
    else {
        return false;
    };

    let long = format!("--{}", help.name);
    let short = help.short.map(|short| format!("-{short}"));

    argv.iter()
        .take_while(|token| token.as_str() != "--")
        .any(|token| *token == long || short.as_ref() == Some(token))
}

fn flag_from_matches(matches: &ArgMatches, name: &str, kind: FlagKind) -> Option<FlagValue> {
    match kind {
        FlagKind::Boolean => (matches.value_source(name) == Some(ValueSource::CommandLine))
            .then(|| FlagValue::Bool(matches.get_flag(name))),
        FlagKind::String => matches
            .get_one::<String>(name)
            .map(|value| FlagValue::Str(value.clone())),
    }
}

/// First line of clap's rendered error, without the `error: ` lead-in.
fn clap_message(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let line = rendered.lines().next().unwrap_or_default().trim();
    line.strip_prefix("error: ").unwrap_or(line).to_string()
}
