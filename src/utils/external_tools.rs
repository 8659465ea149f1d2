use anyhow::{Context, Result};
use std::process::Command;
use tracing::debug;

/// Probes for the samtools binary before a command shells out, returning the
/// version line it reports.
pub fn check_samtools() -> Result<String> {
    let output = Command::new("samtools")
        .arg("--version")
        .output()
        .context("samtools not found. Please install samtools (http://www.htslib.org/) and ensure it's in your PATH")?;
    let version = String::from_utf8_lossy(&output.stdout)
        .lines()
        .next()
        .unwrap_or("samtools (unknown version)")
        .to_string();
    debug!("found {}", version);
    Ok(version)
}
