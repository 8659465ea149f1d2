use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Copy a BAM file byte-for-byte
    Copy {
        /// Source BAM file
        src: String,
        /// Destination path
        dst: String,
    },

    /// Count reads via samtools view -c
    CountReads {
        /// Input BAM file
        bam_file: String,
        /// Count only aligned reads (excludes unmapped and secondary)
        #[arg(long)]
        aligned: bool,
    },

    /// Remove reads matching a named SAM flag filter
    Filter {
        /// Input BAM file
        src: String,
        /// Filtered output BAM file
        dst: String,
        /// Filter name: duplicate or unmapped
        filter: String,
    },

    /// Build an index for a sorted BAM file
    Index {
        /// Input BAM file
        bam_file: String,
        /// Output index file
        index_file: String,
    },

    /// Merge BAM files into <first>_merge.bam
    Merge {
        /// Input BAM files (two or more)
        #[arg(num_args = 2..)]
        bam_files: Vec<String>,
    },

    /// List reference sequence names from the BAM header
    Chromosomes {
        /// Input BAM file
        bam_file: String,
    },

    /// Sort a BAM file in place
    Sort {
        /// Input BAM file
        bam_file: String,
    },

    /// Extract one chromosome into its own BAM file
    Split {
        /// Input BAM file
        bam_file: String,
        /// Index file for the input BAM
        index_file: String,
        /// Chromosome to extract
        chromosome: String,
        /// Output BAM file
        output_file: String,
    },
}
