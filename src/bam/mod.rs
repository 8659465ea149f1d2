pub mod command;
pub mod compat;
pub mod filters;
pub mod ops;

pub use command::{Runner, SamtoolsCmd, SamtoolsRunner, ToolOutput};
pub use compat::BamUtils;
pub use ops::{BamOpError, BamOps};
