//! `vitals-monitor` -- checks patient vital readings piped on stdin.
//!
//! Reads one JSON object per line and runs the temperature, pulse rate and
//! SpO2 checks on it, showing the blinking console alert for any reading
//! out of range.
//!
//! ```text
//! echo '{"temperature": 98.6, "pulse_rate": 70, "spo2": 95}' | vitals-monitor
//! ```
//!
//! # Environment variables
//!
//! | Variable                   | Required | Default | Description                       |
//! |----------------------------|----------|---------|-----------------------------------|
//! | `VITALS_BLINK_INTERVAL_MS` | no       | `1000`  | Pause after each alert blink frame |
//! | `RUST_LOG`                 | no       | `vitals_monitor=info,vitals_core=info` | Log filter |
//!
//! Exit status is `0` when every record was ok, `1` when any was out of
//! range and `2` when any could not be checked.

use std::io;

use vitals_core::{BlinkAlert, VitalMonitor};
use vitals_monitor::config::MonitorConfig;
use vitals_monitor::runner::{self, EXIT_MALFORMED};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vitals_monitor=info,vitals_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = MonitorConfig::from_env();

    tracing::info!(
        blink_interval = ?config.blink_interval,
        "Starting vitals-monitor",
    );

    let presenter = BlinkAlert::stdout().with_interval(config.blink_interval);
    let mut monitor = VitalMonitor::new(presenter);

    let code = match runner::run(io::stdin().lock(), &mut monitor) {
        Ok(summary) => summary.exit_code(),
        Err(e) => {
            tracing::error!(error = %e, "Monitoring aborted");
            EXIT_MALFORMED
        }
    };

    std::process::exit(code);
}
