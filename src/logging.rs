//! Logging setup for the `flow` binary.
//!
//! Diagnostics always go to stderr so stdout stays parseable in robot mode.
//! Human runs get pretty or compact formatting depending on whether stderr is
//! a terminal; robot runs get JSON lines.

use std::io::{self, IsTerminal};

use tracing_subscriber::fmt::{self, format::FmtSpan};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Default filter directive for the given flags.
///
/// Verbosity widens the crate filter and pulls in the preview server's HTTP
/// trace layer past the first level. `RUST_LOG` overrides the result.
fn directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "flow=error";
    }
    match verbose {
        0 => "flow=info",
        1 => "flow=debug,tower_http=debug",
        _ => "flow=trace,tower_http=trace",
    }
}

/// Install the global tracing subscriber. Call once, before any command runs.
///
/// `robot` selects JSON lines; otherwise the format follows stderr's TTY
/// status.
pub fn init_logging(robot: bool, verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directive(verbose, quiet)));

    let base = fmt::layer()
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_span_events(FmtSpan::NONE)
        .with_writer(io::stderr);

    if robot {
        tracing_subscriber::registry()
            .with(filter)
            .with(base.json().with_target(true))
            .init();
    } else if io::stderr().is_terminal() {
        tracing_subscriber::registry()
            .with(filter)
            .with(base.with_target(false))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(base.with_target(false).with_ansi(false).compact())
            .init();
    }
}
