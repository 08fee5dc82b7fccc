#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![forbid(unsafe_code)]
//! Test setup for the scim-marshal crates.
//!
//! Annotate tests with `#[scim_testhelpers::test]` to get decoder logs on
//! stderr and colored backtraces on panic. Filter the logs with `SCIM_LOG`,
//! using `tracing_subscriber` target syntax (`SCIM_LOG=scim_marshal=trace`).

pub use scim_testhelpers_macros::test;

use std::sync::LazyLock;
use std::time::Instant;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

static START_TIME: LazyLock<Instant> = LazyLock::new(Instant::now);

struct Uptime;

impl FormatTime for Uptime {
    fn format_time(&self, w: &mut Writer<'_>) -> core::fmt::Result {
        let elapsed = START_TIME.elapsed();
        write!(w, "{:3}.{:03}s", elapsed.as_secs(), elapsed.subsec_millis())
    }
}

/// Frames from the test harness and the panic machinery.
fn is_noise(name: &str) -> bool {
    const PREFIXES: &[&str] = &[
        "test::run_test",
        "test::__rust_begin_short_backtrace",
        "std::panicking::",
        "std::panic::",
        "core::panicking::",
        "std::sys::",
        "core::ops::function::FnOnce::call_once",
        "<alloc::boxed::Box<F,A> as core::ops::function::FnOnce<Args>>::call_once",
        "__pthread",
    ];
    PREFIXES.iter().any(|prefix| name.starts_with(prefix))
}

static SUBSCRIBER_INIT: LazyLock<()> = LazyLock::new(|| {
    let _ = *START_TIME;

    color_backtrace::BacktracePrinter::new()
        .verbosity(color_backtrace::Verbosity::Medium)
        .add_frame_filter(Box::new(|frames| {
            frames.retain(|frame| frame.name.as_deref().is_none_or(|name| !is_noise(name)));
        }))
        .install(Box::new(termcolor::StandardStream::stderr(
            termcolor::ColorChoice::Auto,
        )));

    let filter = std::env::var("SCIM_LOG")
        .ok()
        .and_then(|s| s.parse::<Targets>().ok())
        .unwrap_or_else(|| Targets::new().with_default(tracing::Level::DEBUG));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_test_writer()
                .with_timer(Uptime)
                .with_target(true)
                .with_level(true)
                .with_line_number(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .ok();
});

/// Installs the tracing subscriber and the panic printer, once per process.
pub fn setup() {
    #[allow(clippy::let_unit_value)]
    let _ = *SUBSCRIBER_INIT;
}

/// An error type that panics when it's built, so tests can use `?` on any
/// error and still get the location of the failure.
#[derive(Debug)]
pub struct IPanic;

impl<E> From<E> for IPanic
where
    E: core::error::Error + Send + Sync,
{
    #[track_caller]
    fn from(value: E) -> Self {
        panic!("from: {}: {value}", core::panic::Location::caller())
    }
}
