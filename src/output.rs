//! Output formatting: startup banner and the result aggregator.
//!
//! Outcome lines go to the given sink (stdout in the binary) in the
//! `IP <host> Port <port> is <status>` shape; trace lines travel on the
//! tracing side channel and never mix into the result stream.

use crate::scanner::{PortStatus, ScanOutcome};
use console::style;
use std::io::{self, Write};
use tokio::sync::mpsc::UnboundedReceiver;

/// Print the startup banner.
pub fn print_banner() {
    println!();
    println!(
        "{} {}",
        style("sounder").cyan().bold(),
        style(concat!("v", env!("CARGO_PKG_VERSION"))).dim()
    );
    println!("{}", style("TCP reachability sweeper").dim());
    println!();
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}

/// Drain the result stream, writing one line per emitted outcome.
///
/// With `only_open` set, non-open outcomes are suppressed. Returns once
/// the stream is closed and fully drained, i.e. once every host task
/// has published all of its outcomes. For the binary this is the
/// natural end of the run.
pub async fn emit_results<W: Write>(
    mut rx: UnboundedReceiver<ScanOutcome>,
    only_open: bool,
    out: &mut W,
) -> io::Result<()> {
    while let Some(outcome) = rx.recv().await {
        if !only_open || outcome.status == PortStatus::Open {
            writeln!(out, "{}", format_outcome(&outcome))?;
        }
    }
    Ok(())
}

/// Render one outcome as a result line.
fn format_outcome(outcome: &ScanOutcome) -> String {
    format!(
        "IP {} Port {} is {}",
        outcome.host, outcome.port, outcome.status
    )
}
