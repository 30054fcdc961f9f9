use ratoracle_kernel::{Interval, KernelConfig, Rational, parse_rational};
use serde_json::Value;
use std::fmt::Display;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub const LOG_ENV: &str = "RATORACLE_LOG";

/// Route kernel diagnostics to stderr, filtered by `RATORACLE_LOG`.
pub fn setup_logging() {
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

pub fn exit_with(message: impl Display) -> ! {
    eprintln!("error: {message}");
    std::process::exit(1);
}

pub fn load_config_or_exit(path: Option<&str>) -> KernelConfig {
    match path {
        Some(path) => {
            let config = KernelConfig::load(path).unwrap_or_else(|e| exit_with(e));
            tracing::debug!(path, "loaded kernel config");
            config
        }
        None => KernelConfig::default(),
    }
}

pub fn rational_or_exit(text: &str, what: &str) -> Rational {
    parse_rational(text).unwrap_or_else(|e| exit_with(format!("{what}: {e}")))
}

pub fn interval_or_exit(low: &str, high: &str, what: &str) -> Interval {
    Interval::new(
        rational_or_exit(low, &format!("{what} low")),
        rational_or_exit(high, &format!("{what} high")),
    )
}

pub fn print_json(payload: &Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(payload).expect("json serialization")
    );
}

pub fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
