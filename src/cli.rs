use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gitloc")]
#[command(about = "Weekly lines-of-code churn report from git history")]
#[command(version)]
pub struct Cli {
    #[arg(
        value_name = "REPO",
        value_parser = existing_path,
        help = "Path to git repository"
    )]
    pub repo: PathBuf,
}

fn existing_path(input: &str) -> std::result::Result<PathBuf, String> {
    let path = PathBuf::from(input);
    if path.exists() {
        Ok(path)
    } else {
        Err(format!("path \"{input}\" does not exist"))
    }
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        crate::loc::exec(self.repo)
    }
}
