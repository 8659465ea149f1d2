use anyhow::{Context, Result};

use crate::bam::BamOps;
use crate::utils::external_tools::check_samtools;

pub fn run(bam_file: String) -> Result<()> {
    check_samtools()?;
    let ops = BamOps::new();
    ops.sort(&bam_file)
        .with_context(|| format!("Failed to sort {}", bam_file))?;
    println!("Sorted {} in place", bam_file);
    Ok(())
}
