// src/utils/logging.rs
//! Logging setup for the validator binary
//!
//! The library only emits through the `log` facade. The binary installs an
//! `env_logger` backend writing one line per record to stdout:
//!
//! ```text
//! [1760400000 INFO subnet_validator_rs::config::config:58] Loaded 2 miners from roster
//! ```

use env_logger::{Builder, Target};
use log::LevelFilter;
use std::env;

/// Installs the stdout logger at Info, unless `RUST_LOG` says otherwise
pub fn init_logging() {
    build_logger(LevelFilter::Info).init();
}

/// Installs the stdout logger at Debug, unless `RUST_LOG` says otherwise
///
/// Miner resets are logged at debug level, so `inspect --verbose` uses this.
pub fn init_debug_logging() {
    build_logger(LevelFilter::Debug).init();
}

/// Builds a logger that writes `[unix-seconds level module:line] message`
///
/// `default_level` applies only when `RUST_LOG` is unset; a set `RUST_LOG`
/// takes over filtering entirely.
fn build_logger(default_level: LevelFilter) -> Builder {
    let mut builder = Builder::new();

    match env::var("RUST_LOG") {
        Ok(filters) => builder.parse_filters(&filters),
        Err(_) => builder.filter_level(default_level),
    };

    builder
        .format(|buf, record| {
            use std::io::Write;
            writeln!(
                buf,
                "[{} {} {}:{}] {}",
                buf.timestamp_seconds(),
                record.level(),
                record.module_path().unwrap_or_default(),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .target(Target::Stdout);

    builder
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    #[test]
    fn test_default_level_applies_without_rust_log() {
        if env::var("RUST_LOG").is_ok() {
            return;
        }
        let logger = build_logger(LevelFilter::Info).build();
        assert_eq!(logger.filter(), LevelFilter::Info);

        let logger = build_logger(LevelFilter::Debug).build();
        assert!(logger.filter() >= Level::Debug);
    }
}
