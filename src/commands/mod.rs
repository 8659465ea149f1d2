pub mod chromosomes;
pub mod copy;
pub mod count_reads;
pub mod filter;
pub mod index;
pub mod merge;
pub mod sort;
pub mod split;
