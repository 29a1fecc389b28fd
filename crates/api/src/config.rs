use url::Url;

/// A configuration value that is missing or cannot be parsed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} has invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Server configuration loaded from environment variables.
///
/// All fields except the OSM client id have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// How long in-flight requests may drain after a shutdown signal (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// OpenStreetMap OAuth client settings.
    pub osm: OsmConfig,
}

/// OpenStreetMap OAuth2 client settings.
#[derive(Debug, Clone)]
pub struct OsmConfig {
    /// Base URL of the OSM instance. Always usable as a base for path joins.
    pub url: Url,
    pub client_id: String,
    /// Where OSM sends the user back after authorizing.
    pub redirect_uri: String,
    /// Space-separated OAuth scopes.
    pub scope: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                                          |
    /// |--------------------------|--------------------------------------------------|
    /// | `HOST`                   | `0.0.0.0`                                        |
    /// | `PORT`                   | `3000`                                           |
    /// | `CORS_ORIGINS`           | `http://localhost:5173`                          |
    /// | `REQUEST_TIMEOUT_SECS`   | `30`                                             |
    /// | `SHUTDOWN_TIMEOUT_SECS`  | `30`                                             |
    /// | `OSM_URL`                | `https://www.openstreetmap.org`                  |
    /// | `OSM_CLIENT_ID`          | required                                         |
    /// | `OSM_LOGIN_REDIRECT_URI` | `http://127.0.0.1:3000/frontend/authenticate/`   |
    /// | `OSM_SCOPE`              | `read_prefs`                                     |
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = var_or("HOST", "0.0.0.0");
        let port = parse_var("PORT", "3000")?;

        let cors_origins: Vec<String> = var_or("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs = parse_var("REQUEST_TIMEOUT_SECS", "30")?;
        let shutdown_timeout_secs = parse_var("SHUTDOWN_TIMEOUT_SECS", "30")?;

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            osm: OsmConfig::from_env()?,
        })
    }
}

impl OsmConfig {
    /// Load the OSM OAuth settings. `OSM_CLIENT_ID` has no default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = parse_base_url("OSM_URL", &var_or("OSM_URL", "https://www.openstreetmap.org"))?;
        let client_id = std::env::var("OSM_CLIENT_ID")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::Missing("OSM_CLIENT_ID"))?;

        Ok(Self {
            url,
            client_id,
            redirect_uri: var_or(
                "OSM_LOGIN_REDIRECT_URI",
                "http://127.0.0.1:3000/frontend/authenticate/",
            ),
            scope: var_or("OSM_SCOPE", "read_prefs"),
        })
    }
}

fn var_or(var: &str, default: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| default.into())
}

fn parse_var<T>(var: &'static str, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let value = var_or(var, default);
    value.parse().map_err(|e: T::Err| ConfigError::Invalid {
        var,
        reason: e.to_string(),
        value,
    })
}

/// Parse a URL that later gets path segments appended to it.
pub fn parse_base_url(var: &'static str, value: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::Invalid {
        var,
        value: value.to_string(),
        reason,
    };
    let url = Url::parse(value).map_err(|e| invalid(e.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(invalid("not a hierarchical URL".into()));
    }
    Ok(url)
}
