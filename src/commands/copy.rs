use anyhow::{Context, Result};

use crate::bam::BamOps;

pub fn run(src: String, dst: String) -> Result<()> {
    let ops = BamOps::new();
    ops.copy(&src, &dst)
        .with_context(|| format!("Failed to copy {} to {}", src, dst))?;
    println!("Copied {} -> {}", src, dst);
    Ok(())
}
