use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt::{self, format::FmtSpan}};

/// Directives used when `RUST_LOG` is unset: this crate at `info`, codec
/// dependencies only when they warn.
pub const DEFAULT_FILTER: &str = "warn,rawimage_io=info";

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber for the demo binary and tests.
///
/// Pipeline span timings are printed on close once `rawimage_io` logs at
/// `debug` or finer. A second call leaves the first subscriber in place.
pub fn init() {
    let env_filter = filter();
    let directives = env_filter.to_string();
    let spans = if directives.contains("debug") || directives.contains("trace") {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_timer(fmt::time::uptime())
        .with_span_events(spans);

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}
