/**
 * FastGate Server Entry Point
 *
 * Loads the environment, initializes tracing, assembles the gateway and
 * serves it. The only fatal failures are a broken configuration and a
 * port that cannot be bound; everything after startup is handled per
 * request.
 */

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = fastgate::server::config::GatewayConfig::from_env()?;
    let port = config.port;
    let app = fastgate::server::init::create_app(config)?;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
