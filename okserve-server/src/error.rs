//! Server errors

use std::net::SocketAddr;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    /// The listening socket could not be bound (port in use, no permission)
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    /// The accept loop stopped with an I/O error
    #[error("server terminated: {0}")]
    Serve(#[source] std::io::Error),
}
