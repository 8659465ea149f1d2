use std::fs;
use std::path::Path;

use rust_htslib::bam::{self, Read};
use thiserror::Error;
use tracing::debug;

use super::command::{Runner, SamtoolsCmd, SamtoolsRunner, ToolOutput};
use super::filters;

/// Errors from the BAM operations layer.
#[derive(Debug, Error)]
pub enum BamOpError {
    #[error("input file not found: {path}")]
    MissingInput { path: String },

    #[error("samtools {subcommand} exited with status {status:?}")]
    ToolFailed {
        subcommand: &'static str,
        status: Option<i32>,
    },

    #[error("expected output file was not produced: {path}")]
    MissingOutput { path: String },

    #[error("unknown filter name: {0}")]
    UnknownFilter(String),

    #[error("merge requires at least one input path")]
    NoInputs,

    #[error("samtools view -c printed an unparseable count: {0:?}")]
    BadCount(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Htslib(#[from] rust_htslib::errors::Error),
}

/// Facade over samtools/htslib for everyday BAM manipulation.
///
/// Every operation is a synchronous pass-through: either one samtools
/// process per call, or a single htslib call for header access. No state
/// is kept between calls beyond the runner itself.
pub struct BamOps<R = SamtoolsRunner> {
    runner: R,
}

impl BamOps<SamtoolsRunner> {
    pub fn new() -> Self {
        BamOps {
            runner: SamtoolsRunner,
        }
    }
}

impl Default for BamOps<SamtoolsRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Runner> BamOps<R> {
    pub fn with_runner(runner: R) -> Self {
        BamOps { runner }
    }

    #[cfg(test)]
    pub(crate) fn runner(&self) -> &R {
        &self.runner
    }

    fn run(&self, cmd: SamtoolsCmd) -> Result<ToolOutput, BamOpError> {
        debug!("{}", cmd.render());
        Ok(self.runner.run(&cmd)?)
    }

    fn run_checked(&self, cmd: SamtoolsCmd) -> Result<ToolOutput, BamOpError> {
        let subcommand = cmd.subcommand();
        let output = self.run(cmd)?;
        if !output.success() {
            return Err(BamOpError::ToolFailed {
                subcommand,
                status: output.status,
            });
        }
        Ok(output)
    }

    /// Byte-for-byte copy of a BAM file. The destination is not created
    /// when the source is missing.
    pub fn copy(&self, src: &str, dst: &str) -> Result<(), BamOpError> {
        if !Path::new(src).exists() {
            return Err(BamOpError::MissingInput {
                path: src.to_string(),
            });
        }
        fs::copy(src, dst)?;
        Ok(())
    }

    /// Read count via `samtools view -c`. With `aligned_only`, unmapped and
    /// secondary records (flag mask 260) are excluded from the count.
    pub fn count_reads(&self, path: &str, aligned_only: bool) -> Result<u64, BamOpError> {
        let mut cmd = SamtoolsCmd::new("view").arg("-c");
        if aligned_only {
            cmd = cmd.arg("-F").arg("260");
        }
        let output = self.run_checked(cmd.arg(path))?;
        let text = output.stdout.trim();
        text.parse()
            .map_err(|_| BamOpError::BadCount(text.to_string()))
    }

    /// Writes `dst` with all reads matching the named filter's flag mask
    /// removed: `samtools view -b -F <flag> -o <dst> <src>`.
    pub fn filter(&self, src: &str, dst: &str, filter_name: &str) -> Result<(), BamOpError> {
        let flag = filters::flag_for(filter_name)
            .ok_or_else(|| BamOpError::UnknownFilter(filter_name.to_string()))?;
        let cmd = SamtoolsCmd::new("view")
            .arg("-b")
            .arg("-F")
            .arg(flag.to_string())
            .arg("-o")
            .arg(dst)
            .arg(src);
        self.run_checked(cmd)?;
        Ok(())
    }

    /// Builds an index under a temporary name next to the source, then moves
    /// it onto `out_index`. Success is judged by the final index file being
    /// present, not by the tool's exit status.
    pub fn index(&self, path: &str, out_index: &str) -> Result<(), BamOpError> {
        let tmp_index = format!("{path}_tmp.bai");
        let cmd = SamtoolsCmd::new("index").arg("-b").arg(path).arg(&tmp_index);
        self.run(cmd)?;
        if Path::new(&tmp_index).exists() {
            fs::rename(&tmp_index, out_index)?;
        }
        if !Path::new(out_index).exists() {
            return Err(BamOpError::MissingOutput {
                path: out_index.to_string(),
            });
        }
        Ok(())
    }

    /// Merges the given BAMs into `<first>_merge.bam` via
    /// `samtools merge -f`, overwriting any previous merge target. Returns
    /// the merged path.
    pub fn merge<I, S>(&self, paths: I) -> Result<String, BamOpError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let paths: Vec<String> = paths
            .into_iter()
            .map(|p| p.as_ref().to_string())
            .collect();
        let first = paths.first().ok_or(BamOpError::NoInputs)?;
        let merged = format!("{first}_merge.bam");
        let mut cmd = SamtoolsCmd::new("merge").arg("-f").arg(&merged);
        for path in &paths {
            cmd = cmd.arg(path);
        }
        self.run_checked(cmd)?;
        Ok(merged)
    }

    /// Reference sequence names from the BAM header, in header order. An
    /// empty list is valid for headers without SQ records.
    pub fn list_chromosomes(&self, path: &str) -> Result<Vec<String>, BamOpError> {
        let reader = bam::Reader::from_path(path)?;
        let names = reader
            .header()
            .target_names()
            .iter()
            .map(|name| String::from_utf8_lossy(name).into_owned())
            .collect();
        Ok(names)
    }

    /// Coordinate-sorts a BAM in place:
    /// `samtools sort -o <path> -T <path>_sort <path>`. The `_sort` scratch
    /// prefix keeps samtools' temporaries next to the input.
    pub fn sort(&self, path: &str) -> Result<(), BamOpError> {
        let cmd = SamtoolsCmd::new("sort")
            .arg("-o")
            .arg(path)
            .arg("-T")
            .arg(format!("{path}_sort"))
            .arg(path);
        self.run_checked(cmd)?;
        Ok(())
    }

    /// Extracts one chromosome into the intermediate `<src_bam>.sam`, then
    /// converts that intermediate to BAM at `dst_bam`. The index path is
    /// accepted for interface compatibility; region queries read the index
    /// sitting next to the source. The intermediate SAM is left behind for
    /// the caller to clean up.
    pub fn split(
        &self,
        src_bam: &str,
        _src_index: &str,
        chromosome: &str,
        dst_bam: &str,
    ) -> Result<(), BamOpError> {
        let sam_path = format!("{src_bam}.sam");
        let cmd = SamtoolsCmd::new("view")
            .arg("-h")
            .arg("-o")
            .arg(&sam_path)
            .arg(src_bam)
            .arg(chromosome);
        self.run_checked(cmd)?;
        self.sam_to_bam(&sam_path, dst_bam)
    }

    /// SAM text to coordinate-sorted BAM:
    /// `samtools sort -O bam -o <dst_bam> <src_sam>`.
    pub fn sam_to_bam(&self, src_sam: &str, dst_bam: &str) -> Result<(), BamOpError> {
        let cmd = SamtoolsCmd::new("sort")
            .arg("-O")
            .arg("bam")
            .arg("-o")
            .arg(dst_bam)
            .arg(src_sam);
        self.run_checked(cmd)?;
        Ok(())
    }
}
