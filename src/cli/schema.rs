//! Declarative description of a command's positionals, flags and examples.
//!
//! A [`CommandSchema`] is the single source of truth for both argument parsing
//! and help rendering. Schemas are built once per command with the `with_*`
//! style builders below and never mutated afterwards.

use std::collections::{HashMap, HashSet};
use std::fmt;
use thiserror::Error;

/// Identifier reserved for the catch-all positional slot used while tokenizing.
pub(crate) const POSITIONALS_ID: &str = "__positionals";

/// Value type accepted by a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagKind {
    Boolean,
    String,
}

/// A resolved flag value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    Bool(bool),
    Str(String),
}

impl From<String> for FlagValue {
    fn from(value: String) -> Self {
        FlagValue::Str(value)
    }
}

impl From<&str> for FlagValue {
    fn from(value: &str) -> Self {
        FlagValue::Str(value.to_string())
    }
}

/// Default for a flag that was not given on the command line.
pub enum FlagDefault {
    /// A literal value.
    Value(FlagValue),
    /// Computed only when the flag is absent. May perform I/O.
    Deferred(Box<dyn Fn() -> Option<FlagValue> + Send + Sync>),
}

impl FlagDefault {
    pub(crate) fn resolve(&self) -> Option<FlagValue> {
        match self {
            FlagDefault::Value(value) => Some(value.clone()),
            FlagDefault::Deferred(compute) => compute(),
        }
    }
}

impl fmt::Debug for FlagDefault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagDefault::Value(value) => f.debug_tuple("Value").field(value).finish(),
            FlagDefault::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

/// A positional argument, consumed in declaration order.
#[derive(Debug, Clone)]
pub struct PositionalSpec {
    pub name: &'static str,
    pub description: String,
    pub required: bool,
    pub default: Option<String>,
}

impl PositionalSpec {
    pub fn required(name: &'static str, description: impl Into<String>) -> Self {
        Self {
            name,
            description: description.into(),
            required: true,
            default: None,
        }
    }

    pub fn optional(name: &'static str, description: impl Into<String>) -> Self {
        Self {
            name,
            description: description.into(),
            required: false,
            default: None,
        }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// A `--name` flag with an optional `-x` short form.
#[derive(Debug)]
pub struct FlagSpec {
    pub name: &'static str,
    pub description: String,
    pub kind: FlagKind,
    pub short: Option<char>,
    pub default: Option<FlagDefault>,
}

impl FlagSpec {
    pub fn boolean(name: &'static str, description: impl Into<String>) -> Self {
        Self {
            name,
            description: description.into(),
            kind: FlagKind::Boolean,
            short: None,
            default: None,
        }
    }

    pub fn string(name: &'static str, description: impl Into<String>) -> Self {
        Self {
            name,
            description: description.into(),
            kind: FlagKind::String,
            short: None,
            default: None,
        }
    }

    pub fn with_short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    pub fn with_default(mut self, value: impl Into<FlagValue>) -> Self {
        self.default = Some(FlagDefault::Value(value.into()));
        self
    }

    /// Sets a default that is only computed when the flag is missing.
    pub fn with_deferred_default<F>(mut self, compute: F) -> Self
    where
        F: Fn() -> Option<FlagValue> + Send + Sync + 'static,
    {
        self.default = Some(FlagDefault::Deferred(Box::new(compute)));
        self
    }
}

/// The `-h, --help` flag every command declares.
pub fn help_flag() -> FlagSpec {
    FlagSpec::boolean("help", "Show help").with_short('h')
}

/// The `-v, --verbose` flag every command declares.
pub fn verbose_flag() -> FlagSpec {
    FlagSpec::boolean("verbose", "Print more detailed log messages.").with_short('v')
}

/// Everything needed to parse and document one command.
#[derive(Debug)]
pub struct CommandSchema {
    pub name: &'static str,
    pub description: String,
    pub args: Vec<PositionalSpec>,
    pub flags: Vec<FlagSpec>,
    pub examples: Vec<String>,
}

impl CommandSchema {
    pub fn new(name: &'static str, description: impl Into<String>) -> Self {
        Self {
            name,
            description: description.into(),
            args: Vec::new(),
            flags: Vec::new(),
            examples: Vec::new(),
        }
    }

    pub fn with_arg(mut self, arg: PositionalSpec) -> Self {
        self.args.push(arg);
        self
    }

    pub fn with_flag(mut self, flag: FlagSpec) -> Self {
        self.flags.push(flag);
        self
    }

    /// Adds a usage example; `{bin}` and `{command}` are substituted in help output.
    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.examples.push(example.into());
        self
    }

    pub fn flag(&self, name: &str) -> Option<&FlagSpec> {
        self.flags.iter().find(|flag| flag.name == name)
    }

    /// Checks the structural invariants parsing relies on.
    pub fn validate(&self) -> Result<(), SchemaError> {
        let mut flag_names = HashSet::new();
        let mut shorts = HashMap::new();

        for flag in &self.flags {
            if flag.name == POSITIONALS_ID {
                return Err(SchemaError::ReservedName(flag.name));
            }
            if !flag_names.insert(flag.name) {
                return Err(SchemaError::DuplicateFlag(flag.name));
            }
            if let Some(short) = flag.short {
                if let Some(previous) = shorts.insert(short, flag.name) {
                    return Err(SchemaError::DuplicateShort {
                        short,
                        first: previous,
                        second: flag.name,
                    });
                }
            }
        }

        let mut arg_names = HashSet::new();
        let mut optional_seen: Option<&'static str> = None;

        for arg in &self.args {
            if !arg_names.insert(arg.name) {
                return Err(SchemaError::DuplicateArgument(arg.name));
            }
            let is_optional = !arg.required || arg.default.is_some();
            match optional_seen {
                Some(optional) if !is_optional => {
                    return Err(SchemaError::RequiredAfterOptional {
                        required: arg.name,
                        optional,
                    });
                }
                None if is_optional => optional_seen = Some(arg.name),
                _ => {}
            }
        }

        Ok(())
    }
}

/// A malformed [`CommandSchema`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("flag `--{0}` is declared more than once")]
    DuplicateFlag(&'static str),

    #[error("short flag `-{short}` is used by both `--{first}` and `--{second}`")]
    DuplicateShort {
        short: char,
        first: &'static str,
        second: &'static str,
    },

    #[error("argument `{0}` is declared more than once")]
    DuplicateArgument(&'static str),

    #[error("required argument `{required}` follows optional argument `{optional}`")]
    RequiredAfterOptional {
        required: &'static str,
        optional: &'static str,
    },

    #[error("`{0}` is a reserved name")]
    ReservedName(&'static str),
}
