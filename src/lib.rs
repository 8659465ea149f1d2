pub mod bam;
pub mod cli;
pub mod commands;
pub mod utils;

// Re-export the operations facade
pub use bam::{BamOpError, BamOps, BamUtils};
