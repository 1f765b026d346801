//! Scan engine: outcome types, run configuration, and the fan-out
//! orchestrator.
//!
//! The engine starts one async task per resolved host and probes that
//! host's ports strictly in order, merging every outcome onto a single
//! mpsc channel. The channel closes exactly when the last host task
//! finishes, which is the consumer's signal that the run is complete.

pub mod tcp;
pub mod traits;

use serde::Serialize;
use std::fmt;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::debug;

pub use tcp::TcpProber;
pub use traits::Prober;

/// Effective per-probe timeout applied in ultrafast mode.
pub const ULTRAFAST_TIMEOUT: Duration = Duration::from_millis(100);

/// Status of a probed port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PortStatus {
    /// Connection established (service listening).
    Open,
    /// Connection failed before the deadline (refused, unreachable, ...).
    Closed,
    /// No answer before the deadline expired.
    Timeout,
}

impl fmt::Display for PortStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Closed => write!(f, "closed"),
            Self::Timeout => write!(f, "timeout"),
        }
    }
}

/// Outcome of probing a single (host, port) pair.
///
/// A completed run yields exactly one outcome per requested pair.
#[derive(Debug, Clone, Serialize)]
pub struct ScanOutcome {
    pub host: IpAddr,
    pub port: u16,
    pub status: PortStatus,
}

/// Configuration for one scan run, immutable once built.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Per-probe connect timeout.
    pub timeout: Duration,
    /// Emit per-host and per-probe trace lines.
    pub debug: bool,
    /// Force the ultrafast timeout for every probe.
    pub ultrafast: bool,
    /// Suppress non-open outcomes in the output.
    pub only_open: bool,
}

impl ScanConfig {
    /// Create a configuration with the given per-probe timeout.
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            debug: false,
            ultrafast: false,
            only_open: false,
        }
    }

    /// Enable trace output.
    pub fn with_debug(mut self) -> Self {
        self.debug = true;
        self
    }

    /// Enable ultrafast mode.
    pub fn with_ultrafast(mut self) -> Self {
        self.ultrafast = true;
        self
    }

    /// Only surface open ports.
    pub fn with_only_open(mut self) -> Self {
        self.only_open = true;
        self
    }

    /// Timeout actually applied to each probe.
    ///
    /// Ultrafast mode overrides the configured timeout entirely.
    pub fn effective_timeout(&self) -> Duration {
        if self.ultrafast {
            ULTRAFAST_TIMEOUT
        } else {
            self.timeout
        }
    }
}

/// Fan out one scan task per host and return the merged result stream.
///
/// Ports are probed strictly in order within a host, so per-host
/// outcomes arrive in port-list order relative to each other; across
/// hosts the stream is interleaved in completion order. Hosts run
/// concurrently without a cap, so a very large CIDR range spawns one
/// task per address. That is a known scaling ceiling of this engine.
///
/// The returned receiver yields exactly hosts × ports outcomes and
/// closes once every host task has finished publishing: each task holds
/// a clone of the sender, the original is dropped before returning, and
/// the channel closes when the last clone goes away.
pub fn spawn_scan(
    prober: Arc<dyn Prober>,
    targets: Vec<IpAddr>,
    ports: Arc<[u16]>,
) -> UnboundedReceiver<ScanOutcome> {
    let (tx, rx) = mpsc::unbounded_channel();

    for host in targets {
        let tx = tx.clone();
        let ports = Arc::clone(&ports);
        let prober = Arc::clone(&prober);

        tokio::spawn(async move {
            debug!("scanning IP {}", host);

            for &port in ports.iter() {
                let status = prober.probe(host, port).await;
                // Send only fails if the consumer went away; nothing
                // left to publish for this host in that case.
                if tx.send(ScanOutcome { host, port, status }).is_err() {
                    return;
                }
            }
        });
    }

    rx
}
