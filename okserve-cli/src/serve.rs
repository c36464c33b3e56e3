//! Serve command - start the canned-response server
//!
//! ## Architecture
//!
//! - Level 1: run() - orchestration
//! - Level 2: configure_server(), start_server()
//! - Level 3: (delegated to okserve-server crate)

use anyhow::{Context, Result};

use okserve_server::{run_server, ServerConfig};

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run the server
///
/// 1. Configure server
/// 2. Start server (blocking)
pub fn run() -> Result<()> {
    let config = configure_server();

    tracing::info!("Starting okserve on {}", config.addr);

    start_server(config)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// The listening address is fixed; there are no flags or env overrides
fn configure_server() -> ServerConfig {
    ServerConfig::default()
}

/// Start the server (blocking)
fn start_server(config: ServerConfig) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("failed to create tokio runtime")?;

    runtime.block_on(async { run_server(config).await })?;

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
