//! TCP connect prober.
//!
//! Classifies a (host, port) pair by attempting a full TCP connection
//! through the operating system's socket API. Does not require elevated
//! privileges.

use crate::scanner::traits::Prober;
use crate::scanner::PortStatus;
use async_trait::async_trait;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::debug;

/// TCP connect prober.
///
/// Every probe gets one connection attempt with a hard deadline:
///
/// - **Established**: [`PortStatus::Open`], and the connection is
///   closed immediately
/// - **Deadline expired**: [`PortStatus::Timeout`]
/// - **Any other failure** (refused, unreachable, ...): [`PortStatus::Closed`]
///
/// There are no retries.
pub struct TcpProber {
    timeout: Duration,
}

impl TcpProber {
    /// Create a new TCP prober with the given per-probe timeout.
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl Prober for TcpProber {
    async fn probe(&self, host: IpAddr, port: u16) -> PortStatus {
        let addr = SocketAddr::new(host, port);

        let status = match timeout(self.timeout, TcpStream::connect(addr)).await {
            Ok(Ok(stream)) => {
                // Reachability is all we wanted; release the socket here.
                drop(stream);
                PortStatus::Open
            }
            Ok(Err(_)) => PortStatus::Closed,
            Err(_) => PortStatus::Timeout,
        };

        debug!("scanned IP {} port {}: {}", host, port, status);

        status
    }
}
