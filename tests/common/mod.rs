#![allow(dead_code)]

use axum_test::TestServer;
use planner::core::{AppState, Config, DateLocale, MailTransport};
use planner::mail::{LogMailer, Mailer};
use sqlx::SqlitePool;
use std::sync::Arc;
use uuid::Uuid;

pub const API_BASE_URL: &str = "http://localhost:3333";
pub const WEB_BASE_URL: &str = "http://localhost:3000";

/// Viaggio "Florianópolis" in fixtures/trips.sql (10-17 luglio 2024)
pub const FLORIANOPOLIS: &str = "6b2b4c0e-3f0a-4d5e-9c1a-2f7e8d9a0b11";

/// Invitato non ancora confermato in fixtures/participants.sql
pub const PENDING_PARTICIPANT: &str = "b2c3d4e5-f6a7-4b8c-9d0e-1f2a3b4c5d6e";

/// Configurazione dei test: date in pt_BR e mail solo in memoria
pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        api_base_url: API_BASE_URL.to_string(),
        web_base_url: WEB_BASE_URL.to_string(),
        server_host: "127.0.0.1".to_string(),
        server_port: 3333,
        max_connections: 1,
        date_locale: DateLocale::PtBr,
        mail_transport: MailTransport::Log,
        app_env: "test".to_string(),
    }
}

/// Crea un TestServer e restituisce anche l'outbox per le asserzioni sulle email
///
/// # Arguments
/// * `pool` - Connection pool SQLite creato da `#[sqlx::test]`
pub fn create_test_server(pool: SqlitePool) -> (TestServer, Arc<LogMailer>) {
    let mailer = Arc::new(LogMailer::new());
    let server = create_test_server_with_mailer(pool, mailer.clone());
    (server, mailer)
}

/// Come `create_test_server`, ma con un trasporto mail a scelta
pub fn create_test_server_with_mailer(pool: SqlitePool, mailer: Arc<dyn Mailer>) -> TestServer {
    let state = Arc::new(AppState::new(pool, &test_config(), mailer));
    let app = planner::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

pub fn fixture_id(raw: &str) -> Uuid {
    Uuid::parse_str(raw).expect("valid fixture uuid")
}

pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .expect("count query")
}
