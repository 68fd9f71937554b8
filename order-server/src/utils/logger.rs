//! Logging Infrastructure
//!
//! Structured logging setup with support for both development and
//! production environments. Filtering follows `RUST_LOG` when set;
//! `LOG_DIR` switches output to a daily-rolling file.

use tracing_subscriber::EnvFilter;

/// Initialize the logger
pub fn init_logger() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,order_server=debug"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    // Add file output if LOG_DIR is provided and exists
    if let Ok(dir) = std::env::var("LOG_DIR") {
        let log_path = std::path::Path::new(&dir);
        if log_path.exists() {
            let file_appender = tracing_appender::rolling::daily(&dir, "order-server");
            subscriber.with_writer(file_appender).init();
            return;
        }
    }

    subscriber.init();
}
