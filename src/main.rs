use clap::Parser;
use tracing_subscriber::EnvFilter;

use geno_join::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("geno_join=debug,info")
    } else {
        EnvFilter::new("geno_join=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Match(args) => {
            cli::match_ids::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Scores(args) => {
            cli::scores::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Pcs(args) => {
            cli::pcs::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Join(args) => {
            cli::join::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
