//! Logging system demonstration
//!
//! Run with:
//! ```bash
//! # Pretty format (default in debug)
//! cargo run -p core-runtime --example logging_demo
//!
//! # JSON format with a custom filter
//! cargo run -p core-runtime --example logging_demo -- json "logging_demo=trace"
//! ```

use core_runtime::logging::{init_logging, redact_if_sensitive, LogFormat, LogLevel, LoggingConfig};
use std::env;
use tracing::{debug, info, instrument, warn};

#[instrument]
fn exchange(client_id: &str, code: &str) {
    debug!(
        client_id = %client_id,
        code = %redact_if_sensitive("code", code),
        "Exchanging authorization code"
    );
    warn!(status = 401, "Token endpoint rejected the code");
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let format = match args.get(1).map(String::as_str) {
        Some("json") => LogFormat::Json,
        Some("compact") => LogFormat::Compact,
        Some("pretty") => LogFormat::Pretty,
        _ => LogFormat::default(),
    };

    // The default filter only covers library crates, so name this binary too
    let filter = args
        .get(2)
        .cloned()
        .unwrap_or_else(|| "logging_demo=trace".to_string());

    let config = LoggingConfig::default()
        .with_format(format)
        .with_level(LogLevel::Trace)
        .with_filter(filter);

    if let Err(e) = init_logging(config) {
        eprintln!("{}", e);
        return;
    }

    info!(format = ?format, "Logging initialized");
    exchange("client_id", "auth_code");
}
