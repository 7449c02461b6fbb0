use clap::Parser;
use quicklink_gateway::cli::{GeneratorArg, CLI};
use quicklink_gateway::{telemetry, App, AppState};
use quicklink_generator::{Generator, RandomGenerator, SeqGenerator};
use quicklink_registry::LinkRegistry;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CLI::parse();
    telemetry::init(config.log_format);

    match config.generator {
        GeneratorArg::Random => run_server(&config, RandomGenerator::new()).await?,
        GeneratorArg::Sequential => {
            let generator = SeqGenerator::with_prefix(config.generator_prefix.clone());
            run_server(&config, generator).await?
        }
    }

    Ok(())
}

async fn run_server<G: Generator>(config: &CLI, generator: G) -> std::io::Result<()> {
    let registry = LinkRegistry::with_settings(generator, config.registry_settings());
    let settings = registry.settings();
    info!(
        generator = %config.generator,
        default_validity_minutes = settings.default_validity_minutes,
        custom_codes = ?settings.custom_codes,
        expiry = ?settings.expiry,
        "created link registry"
    );

    let state = AppState::new(Arc::new(registry), config.public_base_url.clone())
        .with_max_batch_size(config.max_batch_size);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(
        listen_addr = %listener.local_addr()?,
        public_base_url = %config.public_base_url,
        "starting gateway server"
    );

    axum::serve(listener, App::router(state)).await
}
