//! Application-level configuration sourced from the environment.

use std::{env, path::PathBuf};

use tracing::warn;

/// Default TCP port the HTTP server binds to.
const DEFAULT_PORT: u16 = 4000;
/// Default root directory for publicly served assets (images, rules PDFs).
const DEFAULT_PUBLIC_DIR: &str = "public";
/// Default admin account name.
const DEFAULT_ADMIN_USERNAME: &str = "admin";
/// Lifetime of issued admin tokens, in hours.
pub const TOKEN_TTL_HOURS: i64 = 24;

/// Immutable runtime configuration shared across the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port the HTTP listener binds to.
    pub port: u16,
    /// PostgreSQL connection string; `None` selects the in-memory store.
    pub database_url: Option<String>,
    /// Root directory where uploaded files are written and served from.
    pub public_dir: PathBuf,
    /// Secret used to sign admin tokens.
    pub jwt_secret: String,
    /// Admin account name accepted by the login endpoint.
    pub admin_username: String,
    /// Bcrypt hash of the admin password; `None` disables admin login.
    pub admin_password_hash: Option<String>,
}

impl AppConfig {
    /// Load the configuration from environment variables, falling back to
    /// built-in defaults for everything except the admin credentials.
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .or_else(|_| env::var("SERVER_PORT"))
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let database_url = env::var("DATABASE_URL")
            .ok()
            .filter(|value| !value.trim().is_empty());

        let public_dir = env::var_os("MESA_DADOS_PUBLIC_DIR")
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PUBLIC_DIR));

        let jwt_secret = match env::var("MESA_DADOS_JWT_SECRET") {
            Ok(secret) if !secret.trim().is_empty() => secret,
            _ => {
                warn!("MESA_DADOS_JWT_SECRET not set; using an insecure built-in secret");
                "insecure-development-secret".into()
            }
        };

        let admin_username =
            env::var("MESA_DADOS_ADMIN_USER").unwrap_or_else(|_| DEFAULT_ADMIN_USERNAME.into());

        let admin_password_hash = env::var("MESA_DADOS_ADMIN_PASSWORD_HASH")
            .ok()
            .filter(|value| !value.trim().is_empty());
        if admin_password_hash.is_none() {
            warn!("MESA_DADOS_ADMIN_PASSWORD_HASH not set; admin login is disabled");
        }

        Self {
            port,
            database_url,
            public_dir,
            jwt_secret,
            admin_username,
            admin_password_hash,
        }
    }
}
