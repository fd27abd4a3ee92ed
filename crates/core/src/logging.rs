use std::path::Path;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter used when `RUST_LOG` is unset: our own crates at `info`,
/// everything else only when it warns.
const DEFAULT_DIRECTIVES: &str = "warn,unl_api=info,unl_core=info,unl_cli=info";

/// Install the global subscriber for one component (`cli`, a host plugin,
/// ...). Records go to `<log_dir>/unl-<component>.log.<date>`, rolled
/// daily, and are mirrored to stderr when `to_stderr` is set.
///
/// Keep the returned guard alive for as long as logs should be flushed.
pub fn init_logging(component: &str, log_dir: &Path, to_stderr: bool) -> WorkerGuard {
    let _ = std::fs::create_dir_all(log_dir);

    let file_appender =
        tracing_appender::rolling::daily(log_dir, format!("unl-{}.log", component));
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    // Files are read after the fact, so keep module paths there; the
    // stderr mirror stays short.
    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true);

    let stderr_layer = to_stderr.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();

    info!(component, log_dir = %log_dir.display(), "Logging initialized");
    guard
}
