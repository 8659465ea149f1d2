use anyhow::{Context, Result};

use crate::bam::BamOps;
use crate::utils::external_tools::check_samtools;

pub fn run(bam_file: String, aligned: bool) -> Result<()> {
    check_samtools()?;
    let ops = BamOps::new();
    let count = ops
        .count_reads(&bam_file, aligned)
        .with_context(|| format!("Failed to count reads in {}", bam_file))?;
    println!("{}", count);
    Ok(())
}
