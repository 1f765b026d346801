//! Command-line flag surface.
//!
//! sounder is single-purpose, so the flags live on one flat `Parser`
//! struct rather than subcommands. The target and port flags stay
//! optional here: presence is checked in main so a missing input gets a
//! guidance message instead of a usage error.

use clap::Parser;

/// sounder - a concurrent TCP reachability sweeper.
///
/// Expands a target (single IP address or CIDR network) into hosts,
/// probes each requested port on every host with a bounded-time TCP
/// connect, and streams classified outcomes as they arrive.
#[derive(Parser, Debug)]
#[command(name = "sounder")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A concurrent TCP reachability sweeper", long_about = None)]
pub struct Cli {
    /// Target IP address or CIDR network
    ///
    /// Examples:
    ///   192.168.1.1        Single IP address
    ///   192.168.1.0/24     CIDR range
    ///   2001:db8::/126     IPv6 CIDR range
    #[arg(long, value_name = "ADDR")]
    pub ip: Option<String>,

    /// Comma-separated list of target ports (e.g. "22,80,443")
    #[arg(long, value_name = "PORTS")]
    pub ports: Option<String>,

    /// Per-probe timeout in milliseconds
    #[arg(long, default_value = "5000", value_name = "MS")]
    pub timeout: u64,

    /// Emit per-host and per-probe trace lines
    #[arg(long)]
    pub debug: bool,

    /// Only display open ports
    #[arg(long)]
    pub onlyopen: bool,

    /// Ultrafast scan mode (forces a 100ms timeout)
    #[arg(long)]
    pub ultrafast: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["sounder", "--ip", "10.0.0.1", "--ports", "80"]).unwrap();
        assert_eq!(cli.ip.as_deref(), Some("10.0.0.1"));
        assert_eq!(cli.ports.as_deref(), Some("80"));
        assert_eq!(cli.timeout, 5000);
        assert!(!cli.debug);
        assert!(!cli.onlyopen);
        assert!(!cli.ultrafast);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "sounder",
            "--ip",
            "10.0.0.0/24",
            "--ports",
            "80,443",
            "--timeout",
            "250",
            "--onlyopen",
            "--ultrafast",
            "--debug",
        ])
        .unwrap();
        assert_eq!(cli.timeout, 250);
        assert!(cli.debug && cli.onlyopen && cli.ultrafast);
    }

    #[test]
    fn test_missing_inputs_still_parse() {
        // Presence is validated in main, not by clap.
        let cli = Cli::try_parse_from(["sounder"]).unwrap();
        assert!(cli.ip.is_none());
        assert!(cli.ports.is_none());
    }
}
