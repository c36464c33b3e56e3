//! okserve CLI
//!
//! Takes no arguments: running the binary starts the server on
//! `0.0.0.0:8080` and blocks until the process is terminated.

mod serve;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    serve::run()
}
