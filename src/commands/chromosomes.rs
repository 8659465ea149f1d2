use anyhow::{Context, Result};

use crate::bam::BamOps;

pub fn run(bam_file: String) -> Result<()> {
    let ops = BamOps::new();
    let names = ops
        .list_chromosomes(&bam_file)
        .with_context(|| format!("Failed to read header of {}", bam_file))?;
    for name in names {
        println!("{}", name);
    }
    Ok(())
}
