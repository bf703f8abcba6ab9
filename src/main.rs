use clap::Parser;
use tracing_subscriber::EnvFilter;

use metaplasmid_utils::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("metaplasmid_utils=debug,info")
    } else {
        EnvFilter::new("metaplasmid_utils=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Glue(args) => {
            cli::glue::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::InsertSize(args) => {
            cli::insert_size::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
