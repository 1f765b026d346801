//! Port list parsing.
//!
//! The port specification is a comma-separated list of base-10 port
//! numbers, e.g. "22,80,443". Range syntax is not supported.

use crate::error::{ScanError, ScanResult};

/// Parse a comma-separated port specification into a port list.
///
/// Tokens are trimmed before parsing. Parsing is all-or-nothing: the
/// first token that fails to parse rejects the whole specification,
/// naming the offending token. Order is preserved and duplicates are
/// kept.
pub fn parse_ports(spec: &str) -> ScanResult<Vec<u16>> {
    spec.trim()
        .split(',')
        .map(|token| {
            let token = token.trim();
            token
                .parse::<u16>()
                .map_err(|_| ScanError::InvalidPort(token.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_port() {
        assert_eq!(parse_ports("80").unwrap(), vec![80]);
    }

    #[test]
    fn test_parse_preserves_order_and_trims() {
        assert_eq!(parse_ports("80, 443,22").unwrap(), vec![80, 443, 22]);
    }

    #[test]
    fn test_parse_keeps_duplicates() {
        assert_eq!(parse_ports("80,80,443").unwrap(), vec![80, 80, 443]);
    }

    #[test]
    fn test_parse_rejects_bad_token() {
        let err = parse_ports("80,abc").unwrap_err();
        assert_eq!(err, ScanError::InvalidPort("abc".to_string()));
    }

    #[test]
    fn test_parse_rejects_empty_token() {
        assert!(parse_ports("80,,443").is_err());
        assert!(parse_ports("").is_err());
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        // Ports are u16; anything past 65535 is not a port number.
        let err = parse_ports("70000").unwrap_err();
        assert_eq!(err, ScanError::InvalidPort("70000".to_string()));
    }
}
