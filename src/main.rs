//! Flow site CLI - render, preview, export, and validate the Flow marketing site.
//!
//! Provides both human-friendly and agent-friendly (robot mode) interfaces.
#![forbid(unsafe_code)]

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::Parser;
use console::Style;
use serde::Serialize;

use flow::cli::{self, Cli, Commands};
use flow::config;
use flow::error::{Result, SiteError};
use flow::output::{ConfigView, OutputMode};
use flow::{assets, check, export, logging, markup, server};

/// Build information embedded at compile time.
mod build_info {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    pub fn git_sha() -> &'static str {
        option_env!("VERGEN_GIT_SHA").unwrap_or("unknown")
    }

    pub fn build_timestamp() -> &'static str {
        option_env!("VERGEN_BUILD_TIMESTAMP").unwrap_or("unknown")
    }
}

fn main() {
    let cli = Cli::parse();

    // Handle no-color flag or non-TTY
    if cli.no_color || !io::stdout().is_terminal() {
        console::set_colors_enabled(false);
    }

    logging::init_logging(cli.use_json(), cli.verbose, cli.quiet);

    // Run the command
    let result = run(&cli);

    // Handle errors
    if let Err(e) = result {
        output_error(&cli, &e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        None => print_quick_start(cli),
        Some(Commands::Build(args)) => cmd_build(cli, args),
        Some(Commands::Serve(args)) => cmd_serve(cli, args),
        Some(Commands::Check(args)) => cmd_check(cli, args),
        Some(Commands::Pages(args)) => cmd_pages(cli, args),
        Some(Commands::Assets(args)) => cmd_assets(cli, args),
        Some(Commands::Init(args)) => cmd_init(cli, args),
        Some(Commands::Config(args)) => cmd_config(cli, args),
        Some(Commands::Version) => cmd_version(cli),
        Some(Commands::Completions(args)) => cmd_completions(cli, args),
    }
}

// === Quick Start (Robot Mode Optimized) ===

/// Prints quick-start help optimized for both humans and AI agents.
#[allow(clippy::unnecessary_wraps)] // Consistent return type with other commands
fn print_quick_start(cli: &Cli) -> Result<()> {
    if cli.use_json() {
        print_robot_quick_start();
    } else {
        print_human_quick_start();
    }
    Ok(())
}

fn print_robot_quick_start() {
    let help = RobotQuickStart {
        tool: "flow",
        version: build_info::VERSION,
        description: "Flow marketing site renderer with robot mode for AI agents",
        inspection: RobotInspection {
            list_pages: "flow pages --robot",
            list_assets: "flow assets --robot",
            validate_site: "flow check --robot",
            show_config: "flow config --robot",
        },
        site_output: RobotSiteOutput {
            export_static: "flow build --out dist",
            replace_existing: "flow build --clean",
            preview_server: "flow serve --port 8420",
        },
        setup: RobotSetup {
            scaffold: "flow init",
            config_file: "flow.toml next to the site (all keys optional)",
        },
        output_modes: OutputModes {
            human: "--format=text (default)",
            robot: "--robot or --format=json",
            compact: "--format=json-compact",
        },
    };

    println!("{}", serde_json::to_string_pretty(&help).unwrap());
}

fn print_human_quick_start() {
    let brand = Style::new().color256(30).bold();
    let cmd = Style::new().color256(112);
    let agent = Style::new().cyan();
    let heading = Style::new().bold().underlined();

    println!(
        "{} {} - Flow site CLI\n",
        brand.apply_to("flow"),
        build_info::VERSION
    );

    println!("{}", heading.apply_to("QUICK START"));
    println!();

    println!("  {}  Scaffold flow.toml and assets", cmd.apply_to("flow init"));
    println!("  {}  Preview at http://127.0.0.1:8420", cmd.apply_to("flow serve"));
    println!("  {}  Validate markup and assets", cmd.apply_to("flow check"));
    println!("  {}  Export the static site", cmd.apply_to("flow build"));
    println!("  {}  List renderable pages", cmd.apply_to("flow pages"));
    println!();

    println!("{}", heading.apply_to("ROBOT MODE (for AI agents)"));
    println!();
    println!("  {}  JSON output", agent.apply_to("flow --robot <command>"));
    println!("  {}  Quick-start JSON", agent.apply_to("flow --robot"));
    println!();

    println!(
        "Run {} for full help",
        Style::new().yellow().apply_to("flow --help")
    );
}

// === Robot Mode JSON Structures ===

#[derive(Serialize)]
struct RobotQuickStart {
    tool: &'static str,
    version: &'static str,
    description: &'static str,
    inspection: RobotInspection,
    site_output: RobotSiteOutput,
    setup: RobotSetup,
    output_modes: OutputModes,
}

#[derive(Serialize)]
struct RobotInspection {
    list_pages: &'static str,
    list_assets: &'static str,
    validate_site: &'static str,
    show_config: &'static str,
}

#[derive(Serialize)]
struct RobotSiteOutput {
    export_static: &'static str,
    replace_existing: &'static str,
    preview_server: &'static str,
}

#[derive(Serialize)]
struct RobotSetup {
    scaffold: &'static str,
    config_file: &'static str,
}

#[derive(Serialize)]
struct OutputModes {
    human: &'static str,
    robot: &'static str,
    compact: &'static str,
}

// === Command Implementations ===

fn cmd_build(cli: &Cli, args: &cli::BuildArgs) -> Result<()> {
    let (config, source) = config::load(cli.config.as_deref())?;
    let base = source.base_dir();

    let out_dir = match &args.out {
        Some(out) => out.clone(),
        None => config::resolve_path(&config.build.out_dir, &base)?,
    };
    let assets_dir = config::resolve_path(&config.build.assets_dir, &base)?;

    let options = export::ExportOptions {
        clean: args.clean,
        skip_assets: args.skip_assets,
    };
    let summary = export::run(&config, &out_dir, &assets_dir, options)?;

    if cli.use_json() || !cli.quiet {
        OutputMode::from_cli(cli).into_output().export_summary(&summary);
    }
    Ok(())
}

fn cmd_serve(cli: &Cli, args: &cli::ServeArgs) -> Result<()> {
    let (config, source) = config::load(cli.config.as_deref())?;
    let assets_dir = config::resolve_path(&config.build.assets_dir, &source.base_dir())?;

    let host = args
        .bind
        .clone()
        .unwrap_or_else(|| config.serve.host.clone());
    let port = args.port.unwrap_or(config.serve.port);

    if !cli.quiet && !cli.use_json() {
        // IPv6 hosts need brackets in the URL
        let shown = if host.contains(':') {
            format!("[{host}]")
        } else {
            host.clone()
        };
        OutputMode::from_cli(cli)
            .into_output()
            .info(&format!("Preview at http://{shown}:{port}/ (Ctrl+C to stop)"));
    }

    server::run(&config, &assets_dir, &host, port)
}

fn cmd_check(cli: &Cli, args: &cli::CheckArgs) -> Result<()> {
    let (config, source) = config::load(cli.config.as_deref())?;
    let assets_dir = config::resolve_path(&config.build.assets_dir, &source.base_dir())?;

    let report = check::run(&config, &assets_dir, args.strict);
    OutputMode::from_cli(cli).into_output().check_report(&report);

    let errors = report.summary.error_count;
    let warnings = report.summary.warning_count;
    if errors > 0 || (args.strict && warnings > 0) {
        return Err(SiteError::ChecksFailed { errors, warnings });
    }
    Ok(())
}

#[allow(clippy::unnecessary_wraps)] // Consistent return type with other commands
fn cmd_pages(cli: &Cli, _args: &cli::PagesArgs) -> Result<()> {
    OutputMode::from_cli(cli).into_output().pages(&markup::PAGES);
    Ok(())
}

fn cmd_assets(cli: &Cli, _args: &cli::AssetsArgs) -> Result<()> {
    let (config, source) = config::load(cli.config.as_deref())?;
    let assets_dir = config::resolve_path(&config.build.assets_dir, &source.base_dir())?;

    let report = assets::inventory(&assets_dir);
    OutputMode::from_cli(cli).into_output().assets(&report);
    Ok(())
}

fn cmd_init(cli: &Cli, args: &cli::InitArgs) -> Result<()> {
    let dir = args.dir.clone().unwrap_or_else(|| PathBuf::from("."));
    let scaffold = config::scaffold(&dir, args.force)?;

    if cli.use_json() || !cli.quiet {
        OutputMode::from_cli(cli).into_output().scaffolded(&scaffold);
    }
    Ok(())
}

fn cmd_config(cli: &Cli, args: &cli::ConfigArgs) -> Result<()> {
    let (config, source) = config::load(cli.config.as_deref())?;

    // Bare path for shell plumbing, same in both modes
    if args.path {
        match source.path() {
            Some(path) => println!("{}", path.display()),
            None => println!("(defaults)"),
        }
        return Ok(());
    }

    OutputMode::from_cli(cli)
        .into_output()
        .config_view(&ConfigView::new(&config, &source));
    Ok(())
}

#[allow(clippy::unnecessary_wraps)] // Consistent return type with other commands
fn cmd_version(cli: &Cli) -> Result<()> {
    OutputMode::from_cli(cli).into_output().version_info(
        build_info::VERSION,
        Some(build_info::git_sha()),
        Some(build_info::build_timestamp()),
    );
    Ok(())
}

#[allow(clippy::unnecessary_wraps)] // Consistent return type with other commands
fn cmd_completions(_cli: &Cli, args: &cli::CompletionsArgs) -> Result<()> {
    use clap::CommandFactory;
    clap_complete::generate(args.shell, &mut Cli::command(), "flow", &mut io::stdout());
    Ok(())
}

// === Utility Functions ===

fn output_error(cli: &Cli, error: &SiteError) {
    OutputMode::from_cli(cli).into_output().error(error);
}
