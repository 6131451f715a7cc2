//! CLI argument definitions and command dispatch.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Flow site CLI - render, preview, export, and validate the Flow marketing site.
///
/// Robot Mode: Use --robot or --format=json for machine-parseable output optimized for AI agents.
#[derive(Parser, Debug)]
#[command(name = "flow", version, about, long_about = None)]
#[command(propagate_version = true)]
#[allow(clippy::struct_excessive_bools)] // CLI flags naturally use multiple bools
pub struct Cli {
    /// Output format (text for humans, json for agents/scripts)
    #[arg(
        long,
        short = 'f',
        default_value = "text",
        global = true,
        env = "FLOW_FORMAT"
    )]
    pub format: OutputFormat,

    /// Robot mode: equivalent to --format=json (optimized for AI agents)
    #[arg(long, global = true)]
    pub robot: bool,

    /// Verbose output (repeat for more detail: -v debug, -vv trace)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-essential output)
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Path to flow.toml (defaults to ./flow.toml when present)
    #[arg(long, short = 'c', global = true, env = "FLOW_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format selection.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text with optional color
    #[default]
    Text,
    /// JSON output for scripts and agents
    Json,
    /// Compact JSON (single line)
    JsonCompact,
}

impl Cli {
    /// Returns true if output should be JSON (robot mode or explicit --format=json).
    pub const fn use_json(&self) -> bool {
        self.robot || matches!(self.format, OutputFormat::Json | OutputFormat::JsonCompact)
    }

    /// Returns true if output should be compact JSON.
    pub const fn use_compact_json(&self) -> bool {
        matches!(self.format, OutputFormat::JsonCompact)
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    // === Site Output ===
    /// Export the rendered site to a static directory
    #[command(visible_alias = "export")]
    Build(BuildArgs),

    /// Start the local preview server
    Serve(ServeArgs),

    // === Inspection ===
    /// Validate rendered markup and declared assets
    Check(CheckArgs),

    /// List renderable pages
    Pages(PagesArgs),

    /// List declared assets and their status
    Assets(AssetsArgs),

    // === Configuration ===
    /// Scaffold flow.toml and the assets directory skeleton
    Init(InitArgs),

    /// Show resolved configuration
    Config(ConfigArgs),

    // === Utilities ===
    /// Show version and build information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// === Argument Structs ===

#[derive(Parser, Debug)]
#[allow(clippy::struct_excessive_bools)] // CLI flags naturally use multiple bools
pub struct BuildArgs {
    /// Output directory (overrides flow.toml; default "dist")
    #[arg(long, short = 'o', value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Remove an existing output directory before exporting
    #[arg(long)]
    pub clean: bool,

    /// Write page HTML and manifest only, skip copying the assets tree
    #[arg(long)]
    pub skip_assets: bool,
}

#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Port to listen on (overrides flow.toml; default 8420)
    #[arg(long, short = 'p')]
    pub port: Option<u16>,

    /// Bind address (overrides flow.toml; default 127.0.0.1)
    #[arg(long)]
    pub bind: Option<String>,
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

#[derive(Parser, Debug)]
pub struct PagesArgs {}

#[derive(Parser, Debug)]
pub struct AssetsArgs {}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Directory to scaffold into (defaults to the current directory)
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Force overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Show configuration file path
    #[arg(long)]
    pub path: bool,
}

#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
