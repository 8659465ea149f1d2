use anyhow::{Context, Result};

use crate::bam::BamOps;
use crate::utils::external_tools::check_samtools;

pub fn run(bam_file: String, index_file: String) -> Result<()> {
    check_samtools()?;
    let ops = BamOps::new();
    ops.index(&bam_file, &index_file)
        .with_context(|| format!("Failed to index {}", bam_file))?;
    println!("Wrote index to {}", index_file);
    Ok(())
}
