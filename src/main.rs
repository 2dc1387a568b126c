use tracing::error;
use tracing_subscriber::EnvFilter;

mod api;
mod commands;
mod models;
mod services;
mod store;
mod utils;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("royalfx_client=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if let Err(message) = commands::dispatch(&args).await {
        error!("{}", message);
        std::process::exit(1);
    }
}
