//! Error types for sounder.
//!
//! Uses `thiserror` for ergonomic error definitions.
//!
//! Both variants are pre-flight validation errors: they are detected
//! before any probe runs, and a run never starts on bad input. Probe
//! failures during a scan are never errors; they classify into
//! [`crate::scanner::PortStatus`] outcomes instead.

use thiserror::Error;

/// Errors detected while validating scan inputs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// The target string is neither a single IP address nor a CIDR network.
    #[error("invalid IP address or CIDR network: {0}")]
    InvalidTarget(String),

    /// A port token failed to parse as a base-10 port number.
    #[error("invalid port: {0}")]
    InvalidPort(String),
}

/// Result type alias for scan input validation.
pub type ScanResult<T> = Result<T, ScanError>;
