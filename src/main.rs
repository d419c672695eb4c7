use clap::Parser;
use course_sampler::{run, Cli, HttpFetcher};
use rand::{rngs::StdRng, SeedableRng};
use std::process::ExitCode;
use tracing_error::ErrorLayer;
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| {
                "warn,course_sampler=info,html5ever=error,selectors=error,hyper=warn,reqwest=info"
                    .into()
            }),
        )
        .with(ErrorLayer::default())
        .init();

    let cli = Cli::parse();
    let fetcher = HttpFetcher::new();
    let mut rng = StdRng::from_os_rng();
    Ok(run(&cli, &fetcher, &mut rng).await?)
}
