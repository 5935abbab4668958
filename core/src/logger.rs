//----------------------------------------------------------------------------------------- std lib
use std::io::Write;
use std::time::Instant;
//--------------------------------------------------------------------------------- other libraries
use env_logger::fmt::style::{AnsiColor, Style};
use log::info;
use once_cell::sync::Lazy;
use tracing_subscriber::{Layer as _, fmt::format::FmtSpan, layer::SubscriberExt as _};

/// The environment variable holding the filter for [`init_tracing`].
pub const TRACE_ENV_VAR: &str = "MUSADORA_TRACE";

// This will get initialized below.
/// Returns the init [`Instant`]
pub static INIT_INSTANT: Lazy<Instant> = Lazy::new(Instant::now);

//---------------------------------------------------------------------------------------------------- Logger init function
#[allow(clippy::module_name_repetitions)]
/// Initializes the logger.
///
/// This enables console logging on all the internals of `Musadora`.
///
/// Functionality is provided by [`log`].
///
/// If `RUST_LOG` is set it is used as the filter, otherwise everything but the musadora crates is
/// turned off and the musadora crates log at `filter`.
///
/// # Panics
/// This must only be called _once_.
#[cfg(not(tarpaulin_include))]
pub fn init_logger(filter: log::LevelFilter) {
    // Initialize timer.
    let now = Lazy::force(&INIT_INSTANT);

    let env = std::env::var("RUST_LOG").unwrap_or_default();

    let mut builder = env_logger::Builder::new();
    if env.is_empty() {
        builder
            .filter_level(log::LevelFilter::Off)
            .filter_module("musadora", filter);
    } else {
        builder.parse_filters(&env);
    }

    builder
        .format(move |buf, record| {
            let (level, color) = match record.level() {
                log::Level::Debug => ("D", AnsiColor::Blue),
                log::Level::Trace => ("T", AnsiColor::Magenta),
                log::Level::Info => ("I", AnsiColor::White),
                log::Level::Warn => ("W", AnsiColor::Yellow),
                log::Level::Error => ("E", AnsiColor::Red),
            };
            let level_style = Style::new().fg_color(Some(color.into())).bold();
            let dimmed = Style::new().dimmed();
            writeln!(
                buf,
                // Longest PATH in the repo: `types/src/collection.rs` - `23` characters
                "| {level_style}{level}{level_style:#} | {dimmed}{}{dimmed:#} | {dimmed}{: >23} @ {: <3}{dimmed:#} | {}",
                crate::format_duration(&now.elapsed()),
                record.file_static().unwrap_or("???"),
                record.line().unwrap_or(0),
                record.args(),
            )
        })
        .write_style(env_logger::WriteStyle::Auto)
        .init();

    if env.is_empty() {
        info!("Log Level (Flag) ... {filter}");
    } else {
        info!("Log Level (RUST_LOG) ... {env}");
    }
}

/// Initializes the tracing layer.
///
/// Spans are printed to stderr when they close, filtered by the `MUSADORA_TRACE` environment
/// variable (e.g. `MUSADORA_TRACE=musadora_core=trace`). With no filter set nothing is printed,
/// unless the `verbose_tracing` feature is enabled.
#[must_use]
pub fn init_tracing() -> impl tracing::Subscriber {
    #[cfg(not(feature = "verbose_tracing"))]
    let default = tracing_subscriber::filter::LevelFilter::OFF;
    #[cfg(feature = "verbose_tracing")]
    let default = tracing_subscriber::filter::LevelFilter::TRACE;

    let filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(default.into())
        .with_env_var(TRACE_ENV_VAR)
        .from_env_lossy();

    tracing_subscriber::registry().with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(filter),
    )
}
