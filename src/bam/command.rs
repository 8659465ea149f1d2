use std::io;
use std::process::Command;

/// One samtools invocation: the subcommand plus its arguments in the exact
/// order they will appear on the command line. Argument ordering is part of
/// the contract; downstream pipelines compare invocations textually.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamtoolsCmd {
    subcommand: &'static str,
    args: Vec<String>,
}

impl SamtoolsCmd {
    pub fn new(subcommand: &'static str) -> Self {
        SamtoolsCmd {
            subcommand,
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn subcommand(&self) -> &'static str {
        self.subcommand
    }

    /// Arguments as handed to the binary, subcommand first.
    pub fn argv(&self) -> Vec<String> {
        let mut argv = Vec::with_capacity(self.args.len() + 1);
        argv.push(self.subcommand.to_string());
        argv.extend(self.args.iter().cloned());
        argv
    }

    /// Shell-style rendering used for log lines.
    pub fn render(&self) -> String {
        format!("samtools {}", self.argv().join(" "))
    }
}

/// Outcome of a finished samtools process.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    /// Exit code, or `None` when the process was terminated by a signal.
    pub status: Option<i32>,
    pub stdout: String,
}

impl ToolOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Blocking executor for samtools invocations. Each call spawns one process
/// and waits for it; there is no pooling, timeout, or retry.
pub trait Runner {
    fn run(&self, cmd: &SamtoolsCmd) -> io::Result<ToolOutput>;
}

/// Spawns `samtools` from PATH and waits for it to exit.
pub struct SamtoolsRunner;

impl Runner for SamtoolsRunner {
    fn run(&self, cmd: &SamtoolsCmd) -> io::Result<ToolOutput> {
        let output = Command::new("samtools").args(cmd.argv()).output()?;
        Ok(ToolOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argv_preserves_argument_order() {
        let cmd = SamtoolsCmd::new("view")
            .arg("-b")
            .arg("-F")
            .arg("1024")
            .arg("-o")
            .arg("out.bam")
            .arg("in.bam");
        assert_eq!(
            cmd.argv(),
            vec!["view", "-b", "-F", "1024", "-o", "out.bam", "in.bam"]
        );
    }

    #[test]
    fn render_matches_shell_form() {
        let cmd = SamtoolsCmd::new("index")
            .arg("-b")
            .arg("example.bam")
            .arg("example.bam_tmp.bai");
        assert_eq!(
            cmd.render(),
            "samtools index -b example.bam example.bam_tmp.bai"
        );
    }
}
