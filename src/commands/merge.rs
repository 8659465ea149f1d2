use anyhow::{Context, Result};

use crate::bam::BamOps;
use crate::utils::external_tools::check_samtools;

pub fn run(bam_files: Vec<String>) -> Result<()> {
    check_samtools()?;
    let ops = BamOps::new();
    let merged = ops
        .merge(&bam_files)
        .context("Failed to merge BAM files")?;
    println!("Wrote merged BAM to {}", merged);
    Ok(())
}
