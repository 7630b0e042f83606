//! Help text rendering. Pure functions over [`CommandSchema`].

use crate::cli::schema::{CommandSchema, FlagKind};
use crate::CLI_BIN;

/// Renders the help page of a single command.
pub fn command_help(schema: &CommandSchema) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(schema.description.trim().to_string());
    lines.push(String::new());

    lines.push("USAGE".to_string());
    let mut usage = format!("  $ {CLI_BIN} {}", schema.name);
    for arg in &schema.args {
        if arg.required {
            usage.push_str(&format!(" <{}>", arg.name));
        } else {
            usage.push_str(&format!(" [{}]", arg.name));
        }
    }
    if !schema.flags.is_empty() {
        usage.push_str(" [FLAGS]");
    }
    lines.push(usage);
    lines.push(String::new());

    if !schema.args.is_empty() {
        lines.push("ARGUMENTS".to_string());
        for arg in &schema.args {
            let default = arg
                .default
                .as_ref()
                .map(|value| format!(" [default: {value}]"))
                .unwrap_or_default();
            lines.push(format!(
                "  {}{default}  {}",
                arg.name.to_uppercase(),
                arg.description
            ));
        }
        lines.push(String::new());
    }

    if !schema.flags.is_empty() {
        lines.push("FLAGS".to_string());
        for flag in &schema.flags {
            let short = flag
                .short
                .map(|short| format!("-{short}, "))
                .unwrap_or_else(|| "    ".to_string());
            let value = match flag.kind {
                FlagKind::String => "=<value>",
                FlagKind::Boolean => "",
            };
            lines.push(format!(
                "  {short}--{}{value}  {}",
                flag.name, flag.description
            ));
        }
        lines.push(String::new());
    }

    if !schema.examples.is_empty() {
        lines.push("EXAMPLES".to_string());
        for example in &schema.examples {
            let example = example
                .replace("{bin}", CLI_BIN)
                .replace("{command}", schema.name);
            lines.push(format!("  {example}"));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Renders the top-level help listing every registered command.
pub fn global_help<'a, I>(schemas: I, version: &str) -> String
where
    I: IntoIterator<Item = &'a CommandSchema>,
{
    let mut lines: Vec<String> = vec![
        format!("{CLI_BIN}/{version}"),
        String::new(),
        "A set of scripts to simplify React Native development".to_string(),
        String::new(),
        "USAGE".to_string(),
        format!("  $ {CLI_BIN} <command> [ARGS] [FLAGS]"),
        String::new(),
        "COMMANDS".to_string(),
    ];

    for schema in schemas {
        let summary = schema
            .description
            .trim()
            .lines()
            .next()
            .unwrap_or_default()
            .trim();
        lines.push(format!("  {:<10} {summary}", schema.name));
    }

    lines.push(String::new());
    lines.push("FLAGS".to_string());
    lines.push("  -h, --help     Show help".to_string());
    lines.push("  -V, --version  Show version".to_string());
    lines.push(String::new());
    lines.push(format!(
        "Run '{CLI_BIN} <command> --help' for more information on a command."
    ));
    lines.push(String::new());

    lines.join("\n")
}
