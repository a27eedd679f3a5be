/*
[INPUT]:  RUST_LOG environment variable
[OUTPUT]: Timestamped, level-tagged log lines on stdout
[POS]:    Observability - subscriber setup for the binary
[UPDATE]: When changing log format or output target
*/

use std::io::IsTerminal;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "info";

/// Install a stdout subscriber as the default for the current thread.
///
/// Logging stays active for as long as the returned guard lives. Honours
/// `RUST_LOG` when set, otherwise logs at `info`.
pub fn init_tracing() -> DefaultGuard {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stdout().is_terminal())
        .with_writer(std::io::stdout)
        .finish();

    tracing::subscriber::set_default(subscriber)
}
