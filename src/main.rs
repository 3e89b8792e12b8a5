use clap::Parser;
use env_logger::Env;
use github_analytics::{Args, Config, Result};
use indicatif::MultiProgress;
use std::error::Error;
use std::io::{stdin, stdout};
use std::path::PathBuf;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    match run(args).await {
        Ok(path) => {
            println!("\n✅ Success! Your analytics data has been written to {}", path.display());
            println!("   Open index.html in your browser to view the dashboard.");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("\n✗ {error}");
            let mut source = error.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<PathBuf> {
    if args.is_interactive() {
        println!("{}", "=".repeat(50));
        println!("GitHub Analytics Dashboard - Data Fetcher");
        println!("{}\n", "=".repeat(50));
    }
    let config = Config::from_args(args, &mut stdin().lock(), &mut stdout())?;
    github_analytics::run(&config, MultiProgress::new()).await
}
