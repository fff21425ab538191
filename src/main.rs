use clap::Parser;
use gradewatch::cli::{check, run, Cli, Commands};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Run(args) => run::execute(args).await,
        Commands::Check(command) => check::execute(command).await,
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
