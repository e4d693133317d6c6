//! Logging setup on top of the `log` facade and the `env_logger` backend.
//!
//! The level comes from `RUST_LOG` when it is set, otherwise from the CLI:
//! `--quiet` shows errors only, no flag shows info, `-v` shows debug and
//! `-vv` shows trace. Log lines go to stderr so they never mix with
//! JSON or CSV written to stdout.
//!
//! ```rust,no_run
//! use xmldupe::logging::init_logging;
//!
//! init_logging(1, false);
//! log::debug!("Tally details here");
//! ```

use env_logger::Builder;
use log::LevelFilter;
use std::env;
use std::io::Write;

/// Install the global logger for the given CLI flags.
///
/// Only the first call installs a logger; later calls are ignored, since
/// `env_logger` can only be initialized once per process.
pub fn init_logging(verbose: u8, quiet: bool) {
    let from_env = env::var("RUST_LOG").ok();
    let mut builder = Builder::new();

    if from_env.is_some() {
        builder.parse_default_env();
    } else {
        builder.filter_level(determine_level(verbose, quiet));
    }

    configure_format(&mut builder, verbose);

    if builder.try_init().is_err() {
        return;
    }

    match from_env {
        Some(spec) => log::debug!("Logging configured from RUST_LOG={:?}", spec),
        None => log::debug!("Logging initialized at level: {}", current_level_name()),
    }
}

/// Map CLI flags to a level filter; `quiet` wins over `verbose`.
fn determine_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Plain `LEVEL message` lines by default; with `-v` add the module path.
fn configure_format(builder: &mut Builder, verbose: u8) {
    builder.format(move |buf, record| {
        let level = record.level();
        let style = buf.default_level_style(level);
        if verbose > 0 {
            writeln!(
                buf,
                "{} {style}{:<5}{style:#} [{}] {}",
                buf.timestamp_seconds(),
                level,
                record.module_path().unwrap_or("unknown"),
                record.args()
            )
        } else {
            writeln!(buf, "{style}{:<5}{style:#} {}", level, record.args())
        }
    });
}

/// Name of the currently active maximum level.
pub fn current_level_name() -> &'static str {
    match log::max_level() {
        LevelFilter::Off => "off",
        LevelFilter::Error => "error",
        LevelFilter::Warn => "warn",
        LevelFilter::Info => "info",
        LevelFilter::Debug => "debug",
        LevelFilter::Trace => "trace",
    }
}
