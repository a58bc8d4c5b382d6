use std::time::Duration;

use sea_orm::ConnectOptions;
use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_DB_PORT: u16 = 5432;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 15;
const DEFAULT_PORT: u16 = 3000;

/// Where the database lives.
///
/// Either a complete URL or the individual parts it is assembled from.
#[derive(Clone)]
pub enum DatabaseTarget {
    Url(String),
    Parts {
        server: String,
        port: u16,
        database: String,
        user: String,
        password: String,
        encrypt: bool,
        trust_server_certificate: bool,
    },
}

pub struct Config {
    pub database: DatabaseTarget,
    pub max_connections: u32,
    pub connect_timeout: Duration,
    pub run_migrations: bool,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from a variable lookup.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and parsable
    /// - `Err(AppError::ConfigErr)` - Missing or invalid variable
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let required = |name: &str| {
            var(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let database = match var("DATABASE_URL") {
            Some(url) => DatabaseTarget::Url(url),
            None => DatabaseTarget::Parts {
                server: required("DB_SERVER")?,
                port: parse_or("DB_PORT", var("DB_PORT"), DEFAULT_DB_PORT)?,
                database: required("DB_DATABASE")?,
                user: required("DB_USER")?,
                password: required("DB_PASSWORD")?,
                encrypt: flag("DB_ENCRYPT", var("DB_ENCRYPT"))?,
                trust_server_certificate: flag(
                    "DB_TRUST_SERVER_CERTIFICATE",
                    var("DB_TRUST_SERVER_CERTIFICATE"),
                )?,
            },
        };

        Ok(Self {
            database,
            max_connections: parse_or(
                "DB_MAX_CONNECTIONS",
                var("DB_MAX_CONNECTIONS"),
                DEFAULT_MAX_CONNECTIONS,
            )?,
            connect_timeout: Duration::from_secs(parse_or(
                "DB_CONNECT_TIMEOUT_SECS",
                var("DB_CONNECT_TIMEOUT_SECS"),
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )?),
            run_migrations: flag("DB_RUN_MIGRATIONS", var("DB_RUN_MIGRATIONS"))?,
            port: parse_or("PORT", var("PORT"), DEFAULT_PORT)?,
        })
    }

    /// Connection URL with credentials percent-encoded.
    pub fn database_url(&self) -> Result<String, AppError> {
        match &self.database {
            DatabaseTarget::Url(url) => Ok(url.clone()),
            DatabaseTarget::Parts {
                server,
                port,
                database,
                user,
                password,
                encrypt,
                trust_server_certificate,
            } => {
                let invalid = |reason: String| ConfigError::InvalidEnvVar {
                    name: "DB_SERVER".to_string(),
                    value: server.clone(),
                    reason,
                };

                let mut url = Url::parse(&format!("postgres://{}", server))
                    .map_err(|e| invalid(e.to_string()))?;
                url.set_port(Some(*port))
                    .map_err(|_| invalid("host cannot carry a port".to_string()))?;
                url.set_username(user)
                    .map_err(|_| invalid("host cannot carry credentials".to_string()))?;
                url.set_password(Some(password))
                    .map_err(|_| invalid("host cannot carry credentials".to_string()))?;
                url.set_path(&format!("/{}", database));
                url.query_pairs_mut()
                    .append_pair("sslmode", ssl_mode(*encrypt, *trust_server_certificate));

                Ok(url.to_string())
            }
        }
    }

    /// Pool options for the configured database.
    pub fn connect_options(&self) -> Result<ConnectOptions, AppError> {
        let mut options = ConnectOptions::new(self.database_url()?);
        options
            .max_connections(self.max_connections)
            .connect_timeout(self.connect_timeout)
            .sqlx_logging(false);

        Ok(options)
    }

    /// Logs the effective database settings without the password.
    pub fn log_database_settings(&self) {
        match &self.database {
            DatabaseTarget::Url(url) => {
                tracing::info!("Database: {}", mask_url_password(url));
            }
            DatabaseTarget::Parts {
                server,
                port,
                database,
                user,
                encrypt,
                trust_server_certificate,
                ..
            } => {
                tracing::info!(
                    "Database: server={} port={} database={} user={} password=*** encrypt={} trust_server_certificate={}",
                    server,
                    port,
                    database,
                    user,
                    encrypt,
                    trust_server_certificate
                );
            }
        }
    }
}

/// `sslmode` for the TLS flags.
fn ssl_mode(encrypt: bool, trust_server_certificate: bool) -> &'static str {
    match (encrypt, trust_server_certificate) {
        (true, true) => "require",
        (true, false) => "verify-full",
        (false, _) => "disable",
    }
}

fn mask_url_password(raw: &str) -> String {
    match Url::parse(raw) {
        Ok(mut url) => {
            if url.password().is_some() {
                let _ = url.set_password(Some("***"));
            }
            url.to_string()
        }
        Err(_) => "<unparsable url>".to_string(),
    }
}

fn parse_or<T>(name: &str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value: value.clone(),
                reason: e.to_string(),
            }),
    }
}

fn flag(name: &str, value: Option<String>) -> Result<bool, ConfigError> {
    match value.as_deref().map(str::trim) {
        None => Ok(false),
        Some(v) if v.eq_ignore_ascii_case("true") || v == "1" => Ok(true),
        Some(v) if v.eq_ignore_ascii_case("false") || v == "0" => Ok(false),
        Some(v) => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: v.to_string(),
            reason: "expected true or false".to_string(),
        }),
    }
}
