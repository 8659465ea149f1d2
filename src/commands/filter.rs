use anyhow::{Context, Result};

use crate::bam::BamOps;
use crate::utils::external_tools::check_samtools;

pub fn run(src: String, dst: String, filter: String) -> Result<()> {
    check_samtools()?;
    let ops = BamOps::new();
    ops.filter(&src, &dst, &filter)
        .with_context(|| format!("Failed to apply '{}' filter to {}", filter, src))?;
    println!("Wrote filtered BAM to {}", dst);
    Ok(())
}
