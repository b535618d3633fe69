use tracing_subscriber::EnvFilter;

use quotation_export::config::RenderConfig;
use quotation_export::output::OutputDir;
use quotation_export::Renderer;
use quotation_server::config::ServerConfig;
use quotation_server::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ServerConfig::from_env()?;

    let output = OutputDir::new(&config.output_dir);
    output.ensure()?;

    let renderer = Renderer::new(RenderConfig::with_asset_dir(&config.asset_dir));
    let app = quotation_server::router(AppState::new(renderer, output));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(
        addr = %config.bind_addr,
        output_dir = %config.output_dir.display(),
        asset_dir = %config.asset_dir.display(),
        "quotation server listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
