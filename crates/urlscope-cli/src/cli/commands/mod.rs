//! CLI command handlers, one file per command.

mod analyze;
mod clean;
mod list;

pub use analyze::{run_analyze, AnalyzeOptions};
pub use clean::run_clean;
pub use list::run_list;
