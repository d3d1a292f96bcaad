use crate::git;
use crate::loc::{count_loc, print_report};
use anyhow::Context;
use std::path::PathBuf;

pub fn exec(repo: PathBuf) -> anyhow::Result<()> {
    let log = git::read_log(&repo).context("Failed to read commit history")?;

    let churn = count_loc(log.lines()).context("Failed to aggregate weekly churn")?;

    print_report(&churn)?;

    Ok(())
}
