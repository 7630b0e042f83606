//! Command-line plumbing shared by every command: schema, parsing, help,
//! output and dispatch.

pub mod errors;
pub mod help;
pub mod output;
pub mod parser;
pub mod runner;
pub mod schema;
