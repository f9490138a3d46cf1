//! CLI command handlers.

mod grab;
mod replay;

pub use grab::run_grab;
pub use replay::run_replay;

use pagegrab_core::run::RunSummary;

/// One-line result printed after a run.
pub(crate) fn print_summary(summary: &RunSummary) {
    println!(
        "{} image(s) found, {} archived, {} failed -> {}",
        summary.manifest.len(),
        summary.archive_entries,
        summary.fetch.failed,
        summary.archive_path.display()
    );
    if summary.collect.is_none() {
        println!("collection stopped early; see log for details");
    }
}
