use crate::core::dates::DateLocale;
use dotenv::dotenv;
use std::env;
use tracing::{info, warn};
use validator::ValidateUrl;

/// Trasporto usato per le email in uscita
#[derive(Debug, Clone, PartialEq)]
pub enum MailTransport {
    /// Le email restano in un outbox in memoria e vengono solo loggate
    Log,
    /// Le email vengono inoltrate via POST JSON a un servizio esterno
    Http { api_url: String, api_token: Option<String> },
}

/// Configurazione immutabile, letta una sola volta all'avvio e passata ad `AppState`
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub api_base_url: String,
    pub web_base_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub max_connections: u32,
    pub date_locale: DateLocale,
    pub mail_transport: MailTransport,
    pub app_env: String,
}

impl Config {
    /// Carica la configurazione dalle variabili d'ambiente
    /// Chiama dotenv() automaticamente
    pub fn from_env() -> Result<Self, String> {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| "DATABASE_URL must be set in .env file".to_string())?;

        let api_base_url = env::var("API_BASE_URL")
            .map_err(|_| "API_BASE_URL must be set in .env file".to_string())
            .and_then(|url| Self::parse_base_url("API_BASE_URL", &url))?;

        let web_base_url = env::var("WEB_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());
        let web_base_url = Self::parse_base_url("WEB_BASE_URL", &web_base_url)?;

        let server_host = env::var("SERVER_HOST")
            .unwrap_or_else(|_| "127.0.0.1".to_string());

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3333".to_string())
            .parse::<u16>()
            .map_err(|_| "Invalid SERVER_PORT: must be a number between 0-65535".to_string())?;

        let max_connections = env::var("MAX_DB_CONNECTIONS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u32>()
            .map_err(|_| "Invalid MAX_DB_CONNECTIONS: must be a positive number".to_string())?;

        let date_locale = env::var("DATE_LOCALE")
            .unwrap_or_else(|_| "pt_BR".to_string())
            .parse::<DateLocale>()?;

        let mail_transport = Self::parse_mail_transport(
            &env::var("MAIL_TRANSPORT").unwrap_or_else(|_| "log".to_string()),
            env::var("MAIL_API_URL").ok(),
            env::var("MAIL_API_TOKEN").ok(),
        )?;

        let app_env = env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string());

        Ok(Config {
            database_url,
            api_base_url,
            web_base_url,
            server_host,
            server_port,
            max_connections,
            date_locale,
            mail_transport,
            app_env,
        })
    }

    /// Logga la configurazione (nascondendo i segreti)
    pub fn print_info(&self) {
        info!("Server configuration:");
        info!("   Environment: {}", self.app_env);
        info!("   Server Address: {}:{}", self.server_host, self.server_port);
        info!("   Database: {}", Self::mask_url(&self.database_url));
        info!("   Max DB Connections: {}", self.max_connections);
        info!("   API Base URL: {}", self.api_base_url);
        info!("   Web Base URL: {}", self.web_base_url);
        info!("   Date Locale: {:?}", self.date_locale);
        match &self.mail_transport {
            MailTransport::Log => {
                warn!("   Mail Transport: log only (emails are NOT delivered)")
            }
            MailTransport::Http { api_url, api_token } => info!(
                "   Mail Transport: http {} ({})",
                api_url,
                if api_token.is_some() { "token configured" } else { "no token" }
            ),
        }
    }

    /// Controlla che sia un URL valido e toglie lo slash finale,
    /// così i link si costruiscono con semplice concatenazione
    fn parse_base_url(name: &str, raw: &str) -> Result<String, String> {
        if !raw.validate_url() {
            return Err(format!("Invalid {name}: must be a valid URL"));
        }
        Ok(raw.trim_end_matches('/').to_string())
    }

    fn parse_mail_transport(
        kind: &str,
        api_url: Option<String>,
        api_token: Option<String>,
    ) -> Result<MailTransport, String> {
        match kind.to_ascii_lowercase().as_str() {
            "log" => Ok(MailTransport::Log),
            "http" => {
                let api_url = api_url
                    .ok_or_else(|| "MAIL_API_URL must be set when MAIL_TRANSPORT=http".to_string())?;
                if !api_url.validate_url() {
                    return Err("Invalid MAIL_API_URL: must be a valid URL".to_string());
                }
                Ok(MailTransport::Http { api_url, api_token })
            }
            other => Err(format!("Invalid MAIL_TRANSPORT '{other}': expected 'log' or 'http'")),
        }
    }

    /// Maschera credenziali e query string dell'URL del database per il logging
    fn mask_url(url: &str) -> String {
        if let Some(at_pos) = url.find('@') {
            if let Some(scheme_end) = url.find("://") {
                let scheme = &url[..scheme_end + 3];
                let after_at = &url[at_pos..];
                return format!("{}***{}", scheme, after_at);
            }
        }
        url.split('?').next().unwrap_or_default().to_string()
    }
}
