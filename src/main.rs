use actix_web::{middleware, web, App, HttpServer};
use mood_ai::config::{LoggingSettings, Settings};
use mood_ai::routes::{self, AppState};
use mood_ai::StartupError;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match logging.format.as_str() {
        "pretty" => subscriber.pretty().init(),
        "json" => subscriber.json().init(),
        _ => subscriber.compact().init(),
    }
}

#[actix_web::main]
async fn main() -> Result<(), StartupError> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::load()?;

    init_logging(&settings.logging);

    info!("Starting mood analysis service...");

    // The lexicon is built before the server binds and never changes afterwards
    let app_state = AppState::from_settings(&settings.scoring)?;

    info!(
        "Scorer initialized with {} lexicon entries, params: {:?}",
        app_state.analyzer.scorer().lexicon().len(),
        app_state.analyzer.scorer().params()
    );

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let payload_limit = settings.server.payload_limit_bytes;
    let cors_settings = settings.cors.clone();

    info!(
        "CORS origins: {}",
        cors_settings.allowed_origins.join(", ")
    );
    info!("Starting HTTP server on {}:{}", host, port);

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::payload_config(payload_limit))
            .wrap(routes::build_cors(&cors_settings))
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    });

    if let Some(workers) = settings.server.workers {
        server = server.workers(workers);
    }

    server.bind((host, port))?.run().await?;

    Ok(())
}
