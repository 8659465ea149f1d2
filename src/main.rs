use clap::Parser;
use tracing_subscriber::EnvFilter;

use bamutils::{cli, commands};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bamutils=info")),
        )
        .init();

    let args = cli::Args::parse();

    let result = match args.command {
        cli::Commands::Copy { src, dst } => commands::copy::run(src, dst),
        cli::Commands::CountReads { bam_file, aligned } => {
            commands::count_reads::run(bam_file, aligned)
        }
        cli::Commands::Filter { src, dst, filter } => commands::filter::run(src, dst, filter),
        cli::Commands::Index {
            bam_file,
            index_file,
        } => commands::index::run(bam_file, index_file),
        cli::Commands::Merge { bam_files } => commands::merge::run(bam_files),
        cli::Commands::Chromosomes { bam_file } => commands::chromosomes::run(bam_file),
        cli::Commands::Sort { bam_file } => commands::sort::run(bam_file),
        cli::Commands::Split {
            bam_file,
            index_file,
            chromosome,
            output_file,
        } => commands::split::run(bam_file, index_file, chromosome, output_file),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
