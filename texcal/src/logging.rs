//! Logger bootstrap for the `texcal` binary.
//!
//! Log records go to stderr so they never mix with LaTeX written to stdout,
//! or to a file when one is given.  `RUST_LOG` overrides the default level.

use std::path::Path;

use flexi_logger::{FileSpec, FlexiLoggerError, Logger, LoggerHandle};

/// Level used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_LEVEL: &str = if cfg!(debug_assertions) {
    "debug"
} else {
    "info"
};

/// Start logging.  Keep the returned handle alive for the whole run.
pub fn init_logging(log_file: Option<&Path>) -> Result<LoggerHandle, FlexiLoggerError> {
    let mut logger = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?;

    if let Some(log_file) = log_file {
        logger = logger
            .log_to_file(FileSpec::try_from(log_file)?)
            .format_for_files(flexi_logger::detailed_format)
            .print_message();
    } else {
        logger = logger.log_to_stderr();
    }

    logger.start()
}
