#[cfg(feature = "trace")]
use std::path::Path;
#[cfg(feature = "trace")]
use std::sync::Once;

#[cfg(feature = "trace")]
static INIT: Once = Once::new();

/// Install a JSONL file subscriber under `log_dir`. The returned guard must
/// be held for the life of the process so buffered events flush on exit;
/// subsequent calls return `None`.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let mut guard = None;
    INIT.call_once(|| {
        let file_appender = tracing_appender::rolling::never(log_dir, "tamil-roman-trace.jsonl");
        let (non_blocking, worker_guard) = tracing_appender::non_blocking(file_appender);
        guard = Some(worker_guard);

        tracing_subscriber::fmt()
            .json()
            .with_writer(non_blocking)
            .with_target(true)
            .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("tamil_roman=debug")),
            )
            .init();
    });
    guard
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &std::path::Path) -> Option<()> {
    None
}
