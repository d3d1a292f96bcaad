use crate::error::{GitlocError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::process::Command;
use std::time::Duration;

/// Log format consumed by the aggregator: one short date line per
/// commit, followed by its per-file stats and the change summary.
const LOG_ARGS: &[&str] = &["log", "--pretty=%ad", "--stat", "--no-merges", "--date=short"];

/// Run `git log` in `repo` and return its stdout.
///
/// The repository is passed as the child's working directory; the
/// calling process never changes its own.
pub fn read_log(repo: &Path) -> Result<String> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message("Reading commit history...");
    pb.enable_steady_tick(Duration::from_millis(100));

    let output = Command::new("git")
        .args(LOG_ARGS)
        .current_dir(repo)
        .output();

    pb.finish_and_clear();

    let output = output.map_err(|e| GitlocError::Git(format!("failed to run git: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(GitlocError::Git(format!(
            "git log failed: {}",
            stderr.trim()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
