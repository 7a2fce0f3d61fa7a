use abtest_advisor::cli::{self, Cli, Command};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve => cli::serve::run().await,
        Command::Plan(args) => cli::plan::run(args),
        Command::Analyze(args) => cli::analyze::run(args),
    }
}
