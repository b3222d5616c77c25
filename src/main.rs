use planner::core::{AppState, Config, MailTransport};
use planner::mail::{HttpMailer, LogMailer, Mailer};
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    // Configurazione letta una sola volta, poi passata allo stato
    let config = Config::from_env().map_err(|err| {
        error!("Invalid configuration: {}", err);
        err
    })?;
    config.print_info();

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;
    info!("Database migrations applied");

    let mailer: Arc<dyn Mailer> = match &config.mail_transport {
        MailTransport::Log => Arc::new(LogMailer::new()),
        MailTransport::Http { api_url, api_token } => {
            Arc::new(HttpMailer::new(api_url.clone(), api_token.clone()))
        }
    };

    let state = Arc::new(AppState::new(pool, &config, mailer));
    let app = planner::create_router(state);

    let listener = TcpListener::bind((config.server_host.as_str(), config.server_port)).await?;
    info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,planner=debug,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
