use fleetline::server::{self, AppState};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    init_logger();

    let app = server::router(AppState::seeded());

    let addr =
        std::env::var("FLEETLINE_ADDR").unwrap_or_else(|_| "127.0.0.1:5271".to_owned());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "fleetline listening");

    axum::serve(listener, app).await
}

fn init_logger() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fleetline=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}
