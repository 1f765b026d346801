//! Binary entry point.
//!
//! Thin wrapper around the engine: parse flags, validate inputs up
//! front, then fan out the scan and drain the result stream to stdout.

use anyhow::Result;
use clap::Parser;
use sounder::cli::Cli;
use sounder::output;
use sounder::scanner::{spawn_scan, ScanConfig, TcpProber};
use sounder::types::{parse_ports, TargetSpec};
use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ScanConfig::new(Duration::from_millis(cli.timeout));
    if cli.debug {
        config = config.with_debug();
    }
    if cli.ultrafast {
        config = config.with_ultrafast();
    }
    if cli.onlyopen {
        config = config.with_only_open();
    }

    init_tracing(config.debug);
    output::print_banner();

    let (ip, ports) = match (&cli.ip, &cli.ports) {
        (Some(ip), Some(ports)) => (ip.as_str(), ports.as_str()),
        _ => {
            println!(
                "Please provide both the target IP address (or CIDR network) and the target ports"
            );
            return Ok(());
        }
    };

    // Pre-flight validation: bad input means no scan at all.
    let targets = match TargetSpec::parse(ip) {
        Ok(spec) => spec.resolve(),
        Err(err) => {
            output::print_error(&err.to_string());
            return Ok(());
        }
    };

    let ports = match parse_ports(ports) {
        Ok(ports) => ports,
        Err(err) => {
            output::print_error(&err.to_string());
            return Ok(());
        }
    };

    let prober = Arc::new(TcpProber::new(config.effective_timeout()));
    let rx = spawn_scan(prober, targets, ports.into());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    output::emit_results(rx, config.only_open, &mut out).await?;
    out.flush()?;

    Ok(())
}

/// Route trace lines to stderr; `--debug` raises the default level.
///
/// `RUST_LOG` still wins when set, so a run can be narrowed to specific
/// modules the usual way.
fn init_tracing(debug: bool) {
    let default_filter = if debug { "sounder=debug" } else { "sounder=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();
}
