use anyhow::Result;
use clap::Parser;
use gitloc::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.execute()
}
