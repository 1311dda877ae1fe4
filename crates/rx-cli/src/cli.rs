//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};

/// rx - render relational algebra trees as s-expressions
#[derive(Parser, Debug)]
#[command(name = "rx")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Emit the s-expression for a serialized relation tree
    Emit(EmitArgs),

    /// List node kinds and the rule each one is formatted with
    Kinds(KindsArgs),
}

/// Arguments for the emit command
#[derive(Args, Debug)]
pub struct EmitArgs {
    /// Relation tree file (JSON or YAML), or `-` for stdin
    pub path: String,

    /// Input format
    #[arg(short, long, value_enum, default_value = "auto")]
    pub input_format: InputFormat,

    /// Output format
    #[arg(short, long, value_enum, default_value = "sexp")]
    pub output: EmitOutput,

    /// Break nested lists over multiple lines
    #[arg(long)]
    pub pretty: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Pick by file extension (stdin is read as JSON)
    Auto,
    /// JSON document
    Json,
    /// YAML document
    Yaml,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitOutput {
    /// Parenthesized s-expression text
    Sexp,
    /// Nested JSON arrays
    Json,
}

/// Arguments for the kinds command
#[derive(Args, Debug)]
pub struct KindsArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: KindsOutput,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindsOutput {
    /// Table format
    Table,
    /// JSON output
    Json,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
