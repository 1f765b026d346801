//! Target specification with CIDR support.
//!
//! Supports single IP addresses (IPv4 and IPv6) and CIDR notation
//! (192.168.1.0/24, 2001:db8::/126). Hostnames are not resolved; a
//! string that is neither an address nor a network is rejected.

use crate::error::{ScanError, ScanResult};
use ipnetwork::IpNetwork;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// A parsed target specification.
///
/// Supports:
/// - Single IP: "192.168.1.1"
/// - CIDR: "192.168.1.0/24"
/// - IPv6: "::1", "2001:db8::/126"
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetSpec {
    /// A single IP address.
    Single(IpAddr),
    /// A CIDR network range.
    Cidr(IpNetwork),
}

impl TargetSpec {
    /// Parse a target specification from a string.
    ///
    /// Input containing a `/` must parse as a CIDR network; anything else
    /// must parse as a single address. Surrounding whitespace is ignored.
    pub fn parse(s: &str) -> ScanResult<Self> {
        let s = s.trim();

        if s.contains('/') {
            let network: IpNetwork = s
                .parse()
                .map_err(|_| ScanError::InvalidTarget(s.to_string()))?;
            return Ok(Self::Cidr(network));
        }

        s.parse::<IpAddr>()
            .map(Self::Single)
            .map_err(|_| ScanError::InvalidTarget(s.to_string()))
    }

    /// Resolve this specification to the ordered list of hosts to scan.
    ///
    /// A single address resolves to itself. A CIDR network is enumerated
    /// in ascending address order starting from the network address; when
    /// the network holds more than two addresses, the first (network) and
    /// last (broadcast) addresses are dropped. Networks of one or two
    /// addresses (/31, /32 and the IPv6 equivalents) are returned whole.
    ///
    /// Enumeration is eager, so resolving a very large network allocates
    /// one entry per address.
    pub fn resolve(&self) -> Vec<IpAddr> {
        match self {
            Self::Single(ip) => vec![*ip],
            Self::Cidr(network) => {
                let mut hosts = Vec::new();
                let mut addr = network.network();
                while network.contains(addr) {
                    hosts.push(addr);
                    match next_addr(addr) {
                        Some(next) => addr = next,
                        // Ran off the top of the address space (e.g. a
                        // network ending at 255.255.255.255).
                        None => break,
                    }
                }

                if hosts.len() > 2 {
                    hosts.pop();
                    hosts.remove(0);
                }

                hosts
            }
        }
    }
}

impl FromStr for TargetSpec {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TargetSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(ip) => write!(f, "{}", ip),
            Self::Cidr(network) => write!(f, "{}", network),
        }
    }
}

/// The address numerically following `addr`, or `None` on wraparound.
///
/// Works byte-wise over the big-endian octet representation, so both
/// address families behave identically.
fn next_addr(addr: IpAddr) -> Option<IpAddr> {
    match addr {
        IpAddr::V4(v4) => {
            let mut octets = v4.octets();
            increment(&mut octets).then(|| IpAddr::V4(Ipv4Addr::from(octets)))
        }
        IpAddr::V6(v6) => {
            let mut octets = v6.octets();
            increment(&mut octets).then(|| IpAddr::V6(Ipv6Addr::from(octets)))
        }
    }
}

/// Increment a big-endian byte sequence in place, carrying leftward.
///
/// Returns `false` when the carry runs off the top, i.e. every byte
/// wrapped to zero.
fn increment(bytes: &mut [u8]) -> bool {
    for byte in bytes.iter_mut().rev() {
        let (next, wrapped) = byte.overflowing_add(1);
        *byte = next;
        if !wrapped {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hosts(spec: &str) -> Vec<String> {
        TargetSpec::parse(spec)
            .unwrap()
            .resolve()
            .iter()
            .map(|ip| ip.to_string())
            .collect()
    }

    #[test]
    fn test_parse_ipv4() {
        let spec = TargetSpec::parse("192.168.1.1").unwrap();
        assert!(matches!(spec, TargetSpec::Single(IpAddr::V4(_))));
    }

    #[test]
    fn test_parse_ipv6() {
        let spec = TargetSpec::parse("::1").unwrap();
        assert!(matches!(spec, TargetSpec::Single(IpAddr::V6(_))));
    }

    #[test]
    fn test_parse_cidr() {
        let spec = TargetSpec::parse("192.168.1.0/24").unwrap();
        assert!(matches!(spec, TargetSpec::Cidr(_)));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let spec = TargetSpec::parse("  10.0.0.5  ").unwrap();
        assert_eq!(spec, TargetSpec::Single("10.0.0.5".parse().unwrap()));
    }

    #[test]
    fn test_parse_invalid_target() {
        let err = TargetSpec::parse("not-an-ip").unwrap_err();
        assert_eq!(err, ScanError::InvalidTarget("not-an-ip".to_string()));

        assert!(TargetSpec::parse("10.0.0.0/33").is_err());
        assert!(TargetSpec::parse("").is_err());
    }

    #[test]
    fn test_resolve_single() {
        assert_eq!(hosts("10.0.0.5"), vec!["10.0.0.5"]);
    }

    #[test]
    fn test_resolve_cidr_drops_network_and_broadcast() {
        assert_eq!(hosts("10.0.0.0/30"), vec!["10.0.0.1", "10.0.0.2"]);
    }

    #[test]
    fn test_resolve_small_networks_unfiltered() {
        // Two or fewer addresses: nothing to drop.
        assert_eq!(hosts("10.0.0.4/31"), vec!["10.0.0.4", "10.0.0.5"]);
        assert_eq!(hosts("10.0.0.5/32"), vec!["10.0.0.5"]);
    }

    #[test]
    fn test_resolve_ascending_order() {
        assert_eq!(
            hosts("10.0.0.0/29"),
            vec!["10.0.0.1", "10.0.0.2", "10.0.0.3", "10.0.0.4", "10.0.0.5", "10.0.0.6"]
        );
    }

    #[test]
    fn test_resolve_starts_from_network_address() {
        // Host bits in the input are masked off before enumeration.
        assert_eq!(hosts("10.0.0.5/30"), vec!["10.0.0.5", "10.0.0.6"]);
    }

    #[test]
    fn test_resolve_ipv6_cidr() {
        assert_eq!(hosts("2001:db8::/126"), vec!["2001:db8::1", "2001:db8::2"]);
    }

    #[test]
    fn test_resolve_crosses_octet_boundary() {
        let all = hosts("10.0.0.128/23");
        assert!(all.contains(&"10.0.0.255".to_string()));
        assert!(all.contains(&"10.0.1.0".to_string()));
    }

    #[test]
    fn test_increment_carries_leftward() {
        let mut octets = [10, 0, 0, 255];
        assert!(increment(&mut octets));
        assert_eq!(octets, [10, 0, 1, 0]);

        let mut octets = [255u8; 4];
        assert!(!increment(&mut octets));
        assert_eq!(octets, [0, 0, 0, 0]);
    }

    #[test]
    fn test_resolve_at_top_of_address_space() {
        // Enumeration stops at wraparound instead of cycling.
        assert_eq!(
            hosts("255.255.255.254/31"),
            vec!["255.255.255.254", "255.255.255.255"]
        );
    }
}
