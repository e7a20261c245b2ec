use std::net::SocketAddr;
use std::path::PathBuf;

use axum::http::HeaderValue;
use env_helpers::get_env_default;
use secrecy::SecretString;
use url::Url;

use super::InfraError;

/// Frontends allowed to call the API when `CORS_ALLOWED_ORIGINS` is unset.
pub const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000,http://localhost:8080,\
https://fynx-landingpage.vercel.app,https://www.getfynxx.in,https://getfynxx.in";

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub database_url: SecretString,
    pub database_max_connections: u32,
    /// Serialized origins (`scheme://host[:port]`) browsers may call us from.
    pub cors_allowed_origins: Vec<HeaderValue>,
    /// Structured JSON logs are appended here. `None` disables the file layer.
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, InfraError> {
        let database_url = required("DATABASE_URL", get_env_default("DATABASE_URL", String::new()))?;
        let database_url = SecretString::new(database_url.into());

        let bind_addr: SocketAddr =
            get_env_default("BIND_ADDR", SocketAddr::from(([127, 0, 0, 1], 3001)));
        // Hosting platforms hand out the port separately.
        let bind_addr = with_port_override(bind_addr, &get_env_default("PORT", String::new()))?;

        let database_max_connections: u32 = get_env_default("DATABASE_MAX_CONNECTIONS", 5);

        let cors_allowed_origins = parse_origins(&get_env_default(
            "CORS_ALLOWED_ORIGINS",
            DEFAULT_ALLOWED_ORIGINS.to_string(),
        ))?;

        let log_file: String = get_env_default("LOG_FILE", "app.log".to_string());
        let log_file = Some(log_file.trim())
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            bind_addr,
            database_url,
            database_max_connections,
            cors_allowed_origins,
            log_file,
        })
    }

    /// Whether a browser `Origin` header belongs to a known frontend.
    pub fn is_allowed_origin(&self, origin: &HeaderValue) -> bool {
        self.cors_allowed_origins.iter().any(|o| o == origin)
    }
}

fn required(var: &'static str, value: String) -> Result<String, InfraError> {
    if value.trim().is_empty() {
        return Err(InfraError::ConfigMissing { var });
    }
    Ok(value)
}

/// Replace the port of `bind_addr` with `port` unless it is blank.
fn with_port_override(mut bind_addr: SocketAddr, port: &str) -> Result<SocketAddr, InfraError> {
    let port = port.trim();
    if port.is_empty() {
        return Ok(bind_addr);
    }
    let port: u16 = port.parse().map_err(|_| InfraError::ConfigInvalid {
        var: "PORT",
        reason: format!("'{}' is not a port number", port),
    })?;
    bind_addr.set_port(port);
    Ok(bind_addr)
}

/// Parse a comma-separated list of web origins.
///
/// Each entry must be a bare `http`/`https` origin; it is stored in the
/// serialized form browsers send (no trailing slash, default port elided).
pub fn parse_origins(raw: &str) -> Result<Vec<HeaderValue>, InfraError> {
    let invalid = |reason: String| InfraError::ConfigInvalid {
        var: "CORS_ALLOWED_ORIGINS",
        reason,
    };

    let mut origins = Vec::new();
    for item in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let url = Url::parse(item).map_err(|e| invalid(format!("'{}': {}", item, e)))?;

        if !matches!(url.scheme(), "http" | "https") || url.host().is_none() {
            return Err(invalid(format!("'{}' is not an http(s) origin", item)));
        }
        if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
            return Err(invalid(format!("'{}' must not contain a path", item)));
        }

        let serialized = url.origin().ascii_serialization();
        let value = HeaderValue::from_str(&serialized)
            .map_err(|e| invalid(format!("'{}': {}", item, e)))?;
        if !origins.contains(&value) {
            origins.push(value);
        }
    }

    if origins.is_empty() {
        return Err(invalid("at least one origin is required".into()));
    }
    Ok(origins)
}
