use std::net::SocketAddr;
use std::path::PathBuf;

use eyre::{eyre, WrapErr};

/// Signing secret used when `HOMA_JWT_SECRET` is unset. Development only.
pub const DEV_JWT_SECRET: &str = "homa-iq-development-secret";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_DATABASE_PATH: &str = "homa.db";
const DEFAULT_TOKEN_TTL_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Server settings, read from `HOMA_*` environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub database_path: PathBuf,
    /// `None` means the development secret is in use.
    pub jwt_secret: Option<String>,
    pub token_ttl: jiff::SignedDuration,
    pub log_format: LogFormat,
}

impl ServerConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bind = get("HOMA_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind
            .parse::<SocketAddr>()
            .wrap_err_with(|| format!("HOMA_BIND_ADDR is not a socket address: {bind}"))?;

        let token_ttl_days = match get("HOMA_TOKEN_TTL_DAYS") {
            Some(days) => days
                .parse::<i64>()
                .wrap_err_with(|| format!("HOMA_TOKEN_TTL_DAYS is not a number: {days}"))?,
            None => DEFAULT_TOKEN_TTL_DAYS,
        };
        if !(1..=365).contains(&token_ttl_days) {
            return Err(eyre!(
                "HOMA_TOKEN_TTL_DAYS must be between 1 and 365, got {token_ttl_days}"
            ));
        }

        let log_format = match get("HOMA_LOG_FORMAT").as_deref() {
            None | Some("pretty") | Some("text") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => return Err(eyre!("HOMA_LOG_FORMAT must be pretty or json, got {other}")),
        };

        Ok(Self {
            bind_addr,
            database_path: get("HOMA_DATABASE_PATH")
                .unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_string())
                .into(),
            jwt_secret: get("HOMA_JWT_SECRET"),
            token_ttl: jiff::SignedDuration::from_hours(token_ttl_days * 24),
            log_format,
        })
    }

    pub fn jwt_secret(&self) -> &[u8] {
        self.jwt_secret.as_deref().unwrap_or(DEV_JWT_SECRET).as_bytes()
    }
}
