//! wxinventory - Main entry point

use clap::Parser;
use log::{debug, info};

use wxinventory::{
    sink_for, Cli, ClientConfig, InventoryPipeline, OutputFormat, Result, TokenResolver,
    WebexClient,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    info!("Starting wxinventory v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: base_url={}, format={}, output_dir={}, max_pages={:?}, rate_limit_wait={}s, max_retries={}",
        cli.base_url,
        cli.format,
        cli.output_dir.display(),
        cli.max_pages,
        cli.rate_limit_wait,
        cli.max_retries
    );

    let token = TokenResolver::new().resolve(cli.token.as_deref())?;

    let config = ClientConfig::new(token)
        .with_base_url(&cli.base_url)
        .with_retry_policy(cli.retry_policy())
        .with_max_pages(cli.max_pages);
    let client = WebexClient::new(config)?;
    debug!("Retry policy: {:?}", client.config().retry_policy());

    let sink = sink_for(cli.format, &cli.output_dir);
    let mut pipeline = InventoryPipeline::new(&client).with_quiet(cli.quiet);
    let artifact = pipeline.run(sink.as_ref()).await?;

    if cli.format != OutputFormat::Table {
        println!("Data has been written to {}", artifact);
    }

    Ok(())
}
