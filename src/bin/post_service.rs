/**
 * Post Service Entry Point
 *
 * Serves the feed surface: POST /posts, GET /posts, and
 * POST /posts/{post_id}/like, all behind the auth gate.
 */

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    tracing::info!("Post service starting");

    let app = feedline::server::create_feed_app().await?;

    let port = feedline::server::config::service_port("POST_SERVICE_PORT", 3001);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Post service listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
