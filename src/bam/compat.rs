//! Legacy boolean surface, quirks included. New callers should use
//! [`BamOps`] directly and get structured errors.

use tracing::warn;

use super::command::{Runner, SamtoolsRunner};
use super::ops::{BamOpError, BamOps};

/// Boolean-reporting facade kept for callers that predate [`BamOps`].
pub struct BamUtils<R = SamtoolsRunner> {
    ops: BamOps<R>,
}

impl BamUtils<SamtoolsRunner> {
    pub fn new() -> Self {
        BamUtils { ops: BamOps::new() }
    }
}

impl Default for BamUtils<SamtoolsRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Runner> BamUtils<R> {
    pub fn with_runner(runner: R) -> Self {
        BamUtils {
            ops: BamOps::with_runner(runner),
        }
    }

    pub fn bam_copy(&self, src: &str, dst: &str) -> bool {
        report("copy", self.ops.copy(src, dst))
    }

    /// Count per `view -c`; 0 when the tool cannot be run or its output is
    /// unparseable.
    pub fn bam_count_reads(&self, path: &str, aligned_only: bool) -> u64 {
        match self.ops.count_reads(path, aligned_only) {
            Ok(count) => count,
            Err(e) => {
                warn!("count_reads failed: {e}");
                0
            }
        }
    }

    pub fn bam_filter(&self, src: &str, dst: &str, filter_name: &str) -> bool {
        dispatched("filter", self.ops.filter(src, dst, filter_name))
    }

    pub fn bam_index(&self, path: &str, out_index: &str) -> bool {
        report("index", self.ops.index(path, out_index))
    }

    /// Always returns false, even when the merge call succeeds. Legacy
    /// callers key off the merged file's presence instead of the return
    /// value; kept until they migrate to [`BamOps::merge`].
    pub fn bam_merge<I, S>(&self, paths: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if let Err(e) = self.ops.merge(paths) {
            warn!("merge failed: {e}");
        }
        false
    }

    pub fn bam_list_chromosomes(&self, path: &str) -> Vec<String> {
        match self.ops.list_chromosomes(path) {
            Ok(names) => names,
            Err(e) => {
                warn!("list_chromosomes failed: {e}");
                Vec::new()
            }
        }
    }

    pub fn bam_sort(&self, path: &str) -> bool {
        report("sort", self.ops.sort(path))
    }

    pub fn bam_split(
        &self,
        src_bam: &str,
        src_index: &str,
        chromosome: &str,
        dst_bam: &str,
    ) -> bool {
        dispatched(
            "split",
            self.ops.split(src_bam, src_index, chromosome, dst_bam),
        )
    }

    pub fn sam_to_bam(&self, src_sam: &str, dst_bam: &str) -> bool {
        dispatched("sam_to_bam", self.ops.sam_to_bam(src_sam, dst_bam))
    }
}

/// True only for full success.
fn report(op: &str, result: Result<(), BamOpError>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            warn!("{op} failed: {e}");
            false
        }
    }
}

/// True once the tool call was dispatched, regardless of its exit status.
/// The exit code was never consulted for these operations and existing
/// callers depend on the optimistic result.
fn dispatched(op: &str, result: Result<(), BamOpError>) -> bool {
    match result {
        Ok(()) => true,
        Err(BamOpError::ToolFailed { .. }) => true,
        Err(e) => {
            warn!("{op} failed: {e}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bam::command::testing::RecordingRunner;

    #[test]
    fn merge_reports_false_on_success() {
        let utils = BamUtils::with_runner(RecordingRunner::ok());
        assert!(!utils.bam_merge(["example_1.bam", "example_2.bam"]));
        assert_eq!(utils.ops.runner().invocations().len(), 1);
    }

    #[test]
    fn filter_stays_true_when_tool_fails() {
        let utils = BamUtils::with_runner(RecordingRunner::failing());
        assert!(utils.bam_filter("example.bam", "example.filtered.bam", "duplicate"));
    }

    #[test]
    fn filter_is_false_for_unknown_name() {
        let utils = BamUtils::with_runner(RecordingRunner::ok());
        assert!(!utils.bam_filter("example.bam", "example.filtered.bam", "nonsense"));
        assert!(utils.ops.runner().invocations().is_empty());
    }

    #[test]
    fn split_stays_true_when_tool_fails() {
        let utils = BamUtils::with_runner(RecordingRunner::failing());
        assert!(utils.bam_split("example.bam", "example.bai", "I", "example.I.bam"));
    }

    #[test]
    fn count_reads_falls_back_to_zero() {
        let utils = BamUtils::with_runner(RecordingRunner::failing());
        assert_eq!(utils.bam_count_reads("example.bam", false), 0);
    }

    #[test]
    fn sort_reports_real_outcome() {
        let ok = BamUtils::with_runner(RecordingRunner::ok());
        assert!(ok.bam_sort("example.bam"));

        let failing = BamUtils::with_runner(RecordingRunner::failing());
        assert!(!failing.bam_sort("example.bam"));
    }

    #[test]
    fn copy_reports_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("absent.bam");
        let dst = dir.path().join("copy.bam");
        let utils = BamUtils::with_runner(RecordingRunner::ok());
        assert!(!utils.bam_copy(src.to_str().unwrap(), dst.to_str().unwrap()));
        assert!(!dst.exists());
    }

    #[test]
    fn list_chromosomes_is_empty_for_unreadable_file() {
        let utils = BamUtils::with_runner(RecordingRunner::ok());
        assert!(utils.bam_list_chromosomes("/no/such/file.bam").is_empty());
    }
}
