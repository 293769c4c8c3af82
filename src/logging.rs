use flexi_logger::{
    colored_default_format, opt_format, Cleanup, Criterion, FileSpec, FlexiLoggerError, Logger,
    LoggerHandle, Naming,
};
use std::path::Path;

/// Starts the global logger.
///
/// `RUST_LOG` wins over `level`. With a `log_dir`, logs go to rotating files there instead of
/// stderr. Keep the returned handle alive for the lifetime of the program.
pub fn setup_logging(level: &str, log_dir: Option<&Path>) -> Result<LoggerHandle, FlexiLoggerError> {
    let logger = Logger::try_with_env_or_str(level)?;
    match log_dir {
        Some(dir) => logger
            .log_to_file(FileSpec::default().directory(dir).basename("snake_mcts"))
            .format(opt_format)
            .rotate(
                Criterion::Size(10 * 1024 * 1024), // Rotate logs after they reach 10 MB
                Naming::Numbers,
                Cleanup::KeepLogFiles(3),
            )
            .start(),
        None => logger.format(colored_default_format).start(),
    }
}
