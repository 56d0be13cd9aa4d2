use bufete::server::{config::Config, model::app::AppState, router, startup};
use dioxus_logger::tracing;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = dioxus_logger::init(config.log_level) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    if let Err(e) = run(config).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), bufete::server::error::Error> {
    let db = startup::connect_to_database(&config).await?;
    let listener = startup::bind_listener(&config).await?;

    tracing::info!("Starting server on {}", config.bind_address);

    let app = router::routes().with_state(AppState { db });
    axum::serve(listener, app).await?;

    Ok(())
}
