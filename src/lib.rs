//! # sounder - A Concurrent TCP Reachability Sweeper
//!
//! sounder expands a target specification (a single IP address or a CIDR
//! network) into a host list, probes every requested port on each host
//! with a bounded-time TCP connect, and streams classified outcomes as
//! they arrive.
//!
//! ## Features
//!
//! - **Flexible Targeting**: single IPv4/IPv6 addresses and CIDR ranges
//! - **Concurrent Sweeps**: one async task per host, ports probed
//!   sequentially within each host
//! - **Bounded Probes**: per-connection timeout with a 100 ms ultrafast
//!   override for rapid large sweeps
//! - **Streaming Results**: outcomes print the moment they arrive,
//!   optionally filtered to open ports only
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use sounder::scanner::{Prober, TcpProber};
//! use std::net::IpAddr;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     let prober = TcpProber::new(Duration::from_secs(3));
//!     let host: IpAddr = "192.168.1.1".parse().unwrap();
//!
//!     let status = prober.probe(host, 80).await;
//!     println!("Port 80 is {}", status);
//! }
//! ```
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`types`] - target and port specification parsing
//! - [`scanner`] - the `Prober` trait, TCP prober, and fan-out orchestrator
//! - [`output`] - startup banner and the result aggregator
//! - [`cli`] - command-line flag surface
//! - [`error`] - pre-flight validation errors

pub mod cli;
pub mod error;
pub mod output;
pub mod scanner;
pub mod types;

// Re-export commonly used types
pub use error::{ScanError, ScanResult};
pub use scanner::{PortStatus, Prober, ScanConfig, ScanOutcome, TcpProber};
pub use types::TargetSpec;
