use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use docsim::cli::{run_compare, Cli, Commands, CompareArgs};
use docsim::config::Config;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout carries only the result
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("docsim=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Some(Commands::Compare(args)) => compare_command(config, &args),
        None => compare_command(config, &cli.compare),

        #[cfg(feature = "web")]
        Some(Commands::Serve(args)) => {
            let mut config = config.with_overrides(None, None)?;
            if let Some(bind) = args.bind {
                config.bind = bind;
            }
            if let Some(port) = args.port {
                config.port = port;
            }
            tracing::info!(
                max_ngram = config.options.max_ngram,
                precision = config.options.precision,
                "Starting web form"
            );
            docsim::web::run_server(config).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn compare_command(config: Config, args: &CompareArgs) -> Result<ExitCode> {
    let config = config.with_overrides(args.ngram, args.precision)?;
    let outcome = run_compare(
        args,
        &config.options,
        &mut io::stdin().lock(),
        &mut io::stdout(),
        &mut io::stderr(),
    )?;
    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
