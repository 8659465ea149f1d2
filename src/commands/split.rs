use anyhow::{Context, Result};

use crate::bam::BamOps;
use crate::utils::external_tools::check_samtools;

pub fn run(
    bam_file: String,
    index_file: String,
    chromosome: String,
    output_file: String,
) -> Result<()> {
    check_samtools()?;
    let ops = BamOps::new();
    ops.split(&bam_file, &index_file, &chromosome, &output_file)
        .with_context(|| format!("Failed to split {} out of {}", chromosome, bam_file))?;
    println!("Wrote {} reads to {}", chromosome, output_file);
    Ok(())
}
