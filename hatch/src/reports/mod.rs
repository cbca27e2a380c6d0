//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod output;
mod scaffold;

pub use output::{Output, Report, TerminalOutput};
pub use scaffold::ScaffoldSummary;
