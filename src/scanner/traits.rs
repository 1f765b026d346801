//! Prober trait abstraction.
//!
//! Defines the seam between the orchestrator and the probe mechanism,
//! so the fan-out machinery can be exercised with a scripted prober in
//! tests.

use crate::scanner::PortStatus;
use async_trait::async_trait;
use std::net::IpAddr;

/// Trait for single-probe implementations.
///
/// A probe examines exactly one (host, port) pair and classifies it.
/// Implementations must be cheap to share across tasks; the orchestrator
/// hands one prober to every per-host unit.
#[async_trait]
pub trait Prober: Send + Sync {
    /// Probe one (host, port) pair and classify the outcome.
    async fn probe(&self, host: IpAddr, port: u16) -> PortStatus;
}
