use chrono::NaiveDate;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs a log subscriber once per test binary; `RUST_LOG` controls output.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "scoring=warn".into()))
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}

#[allow(dead_code)]
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
