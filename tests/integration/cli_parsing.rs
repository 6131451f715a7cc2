//! CLI argument parsing: flags, aliases, and environment bindings.

use clap::Parser;

use flow::cli::{Cli, Commands, OutputFormat};

use crate::common::env::EnvGuard;
use crate::common::init_test_logging;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).expect("parse cli")
}

#[test]
fn export_is_an_alias_for_build() {
    init_test_logging();
    let cli = parse(&["flow", "export", "--clean"]);
    match cli.command {
        Some(Commands::Build(args)) => assert!(args.clean),
        other => panic!("expected Build, got {other:?}"),
    }
}

#[test]
fn verbosity_flag_counts_repeats() {
    init_test_logging();
    assert_eq!(parse(&["flow", "pages"]).verbose, 0);
    assert_eq!(parse(&["flow", "-v", "pages"]).verbose, 1);
    assert_eq!(parse(&["flow", "-vv", "pages"]).verbose, 2);
}

#[test]
fn robot_flag_implies_json() {
    init_test_logging();
    let cli = parse(&["flow", "--robot", "pages"]);
    assert!(cli.use_json());
    assert!(!cli.use_compact_json());
}

#[test]
fn compact_format_implies_both_predicates() {
    init_test_logging();
    let cli = parse(&["flow", "--format=json-compact", "pages"]);
    assert!(cli.use_json());
    assert!(cli.use_compact_json());
}

#[test]
fn global_flags_parse_after_the_subcommand() {
    init_test_logging();
    let cli = parse(&["flow", "check", "--strict", "--robot", "-q"]);
    assert!(cli.robot);
    assert!(cli.quiet);
    match cli.command {
        Some(Commands::Check(args)) => assert!(args.strict),
        other => panic!("expected Check, got {other:?}"),
    }
}

#[test]
fn flow_format_env_is_read_at_parse_time() {
    init_test_logging();
    let _guard = EnvGuard::set("FLOW_FORMAT", "json");
    let cli = parse(&["flow", "pages"]);
    assert!(matches!(cli.format, OutputFormat::Json));
    assert!(cli.use_json());
}

#[test]
fn format_defaults_to_text_without_env() {
    init_test_logging();
    let _guard = EnvGuard::remove("FLOW_FORMAT");
    let cli = parse(&["flow", "pages"]);
    assert!(matches!(cli.format, OutputFormat::Text));
    assert!(!cli.use_json());
}

#[test]
fn no_color_env_sets_the_flag() {
    init_test_logging();
    let _guard = EnvGuard::set("NO_COLOR", "1");
    let cli = parse(&["flow", "pages"]);
    assert!(cli.no_color);
}

#[test]
fn flow_config_env_supplies_the_path() {
    init_test_logging();
    let _guard = EnvGuard::set("FLOW_CONFIG", "/srv/site/flow.toml");
    let cli = parse(&["flow", "check"]);
    assert_eq!(
        cli.config.as_deref(),
        Some(std::path::Path::new("/srv/site/flow.toml"))
    );
}
