//! Server configuration

use std::net::SocketAddr;

use clap::Parser;

/// Default upload size limit (10 MiB)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Default number of concurrently held sessions
pub const DEFAULT_MAX_SESSIONS: usize = 1024;

/// Settings for the HTTP API server, from flags or environment
#[derive(Debug, Clone, Parser)]
#[command(name = "api-server", version, about = "Turbine location upload and map framing API")]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "GEOSHM_BIND", default_value = "0.0.0.0:3000")]
    pub bind: SocketAddr,

    /// Largest accepted request body, in bytes
    #[arg(long, env = "GEOSHM_MAX_UPLOAD_BYTES", default_value_t = DEFAULT_MAX_UPLOAD_BYTES)]
    pub max_upload_bytes: usize,

    /// Sessions kept before the oldest is evicted
    #[arg(long, env = "GEOSHM_MAX_SESSIONS", default_value_t = DEFAULT_MAX_SESSIONS)]
    pub max_sessions: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 3000)),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            max_sessions: DEFAULT_MAX_SESSIONS,
        }
    }
}
