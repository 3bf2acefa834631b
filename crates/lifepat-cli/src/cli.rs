//! CLI argument definitions for the pattern editor.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use lifepat_cli::ops::Op;

#[derive(Parser)]
#[command(
    name = "lifepat",
    version,
    about = "Life pattern editor - import, transform and export cellular automaton patterns",
    long_about = "Load a pattern from text, an image or the preset catalog, apply edit\n\
                  operations and print the result as plain text or JSON.\n\n\
                  Text patterns use one row per line with O (or #, *, 0) for alive cells."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Settings file to use instead of the platform default.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load a text pattern from a file (or `-` for stdin).
    Text(TextArgs),

    /// Convert a raster image into a pattern.
    Image(ImageArgs),

    /// Start from a built-in preset.
    Preset(PresetArgs),

    /// List the built-in presets.
    Presets,

    /// Show the effective configuration.
    Config(ConfigArgs),
}

#[derive(Parser)]
pub struct TextArgs {
    /// Pattern file, or `-` to read stdin.
    #[arg(value_name = "PATH")]
    pub source: PathBuf,

    #[command(flatten)]
    pub session: SessionArgs,
}

#[derive(Parser)]
pub struct ImageArgs {
    /// Image file (PNG, JPEG, GIF or BMP).
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Brightness threshold separating alive from dead pixels.
    #[arg(long = "threshold", value_name = "0-255")]
    pub threshold: Option<u8>,

    #[command(flatten)]
    pub session: SessionArgs,
}

#[derive(Parser)]
pub struct PresetArgs {
    /// Preset name or slug (see `lifepat presets`).
    #[arg(value_name = "NAME")]
    pub name: String,

    #[command(flatten)]
    pub session: SessionArgs,
}

#[derive(Parser)]
pub struct ConfigArgs {
    /// Save the effective configuration to the settings file.
    #[arg(long = "write")]
    pub write: bool,

    /// Default brightness threshold for image imports.
    #[arg(long = "threshold", value_name = "0-255")]
    pub threshold: Option<u8>,

    /// Default pattern name for wrapped exports.
    #[arg(long = "name", value_name = "NAME")]
    pub name: Option<String>,

    #[command(flatten)]
    pub grid: GridArgs,
}

/// Options shared by every command that edits a pattern.
#[derive(Args)]
pub struct SessionArgs {
    #[command(flatten)]
    pub grid: GridArgs,

    /// Edit operation to apply after loading; repeat to chain.
    ///
    /// One of: toggle:R,C  set:R,C,0|1  shift:DX,DY  rotate  flip-h  flip-v
    /// center  clear  undo  redo
    #[arg(long = "op", value_name = "OP")]
    pub ops: Vec<Op>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args)]
pub struct GridArgs {
    /// Grid height in cells.
    #[arg(long = "rows", value_name = "N")]
    pub rows: Option<i32>,

    /// Grid width in cells.
    #[arg(long = "cols", value_name = "N")]
    pub cols: Option<i32>,

    /// Maximum number of undo steps kept.
    #[arg(long = "history", value_name = "N")]
    pub history: Option<usize>,
}

#[derive(Args)]
pub struct OutputArgs {
    /// Print only the pattern block, without the named wrapper.
    #[arg(long = "raw")]
    pub raw: bool,

    /// Pattern name used in the wrapped export.
    #[arg(long = "name", value_name = "NAME")]
    pub name: Option<String>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormatArg,

    /// Print a summary table to stderr.
    #[arg(long = "stats")]
    pub stats: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Text,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
