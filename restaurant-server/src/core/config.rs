use super::{Result, ServerError};
use crate::db::surreal::SurrealConfig;

/// Login redirect for regular users
pub const DEFAULT_HOME_REDIRECT: &str = "http://localhost/restaurante_front/home.html";
/// Login redirect for the `admin` user
pub const DEFAULT_ADMIN_REDIRECT: &str = "http://localhost/restaurante_front/admin.html";

const DEFAULT_NAMESPACE: &str = "restaurant";
const DEFAULT_DATABASE: &str = "restaurant";
const REMOTE_SCHEMES: [&str; 4] = ["ws://", "wss://", "http://", "https://"];

/// Which store the server talks to
#[derive(Debug, Clone)]
pub enum StoreBackend {
    /// In-process store, lost on exit
    Memory,
    /// SurrealDB server
    Surreal(SurrealConfig),
}

/// Server configuration
///
/// # Environment
///
/// | variable | default | meaning |
/// |----------|---------|---------|
/// | STORE_URL | (required) | `memory`, or a `ws://`/`wss://`/`http://`/`https://` SurrealDB endpoint |
/// | STORE_NAMESPACE | restaurant | SurrealDB namespace |
/// | STORE_DATABASE | restaurant | SurrealDB database |
/// | STORE_USERNAME / STORE_PASSWORD | unset | root credentials, both or neither |
/// | HTTP_PORT | 3000 | listen port |
/// | HOME_REDIRECT_URL | home page | login redirect for regular users |
/// | ADMIN_REDIRECT_URL | admin page | login redirect for `admin` |
/// | LOG_LEVEL | info | tracing level, `RUST_LOG` takes precedence |
/// | LOG_DIR | unset | write daily rolling log files here |
///
/// ```ignore
/// STORE_URL=ws://localhost:8000 HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub store: StoreBackend,
    pub http_port: u16,
    pub home_redirect_url: String,
    pub admin_redirect_url: String,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let store_url = var("STORE_URL")
            .ok_or_else(|| ServerError::Config("STORE_URL is not set".into()))?;
        let store = parse_store(
            store_url.trim(),
            var("STORE_NAMESPACE").unwrap_or_else(|| DEFAULT_NAMESPACE.into()),
            var("STORE_DATABASE").unwrap_or_else(|| DEFAULT_DATABASE.into()),
            var("STORE_USERNAME"),
            var("STORE_PASSWORD"),
        )?;

        let http_port = match var("HTTP_PORT") {
            Some(p) => p
                .trim()
                .parse()
                .map_err(|_| ServerError::Config(format!("HTTP_PORT is not a port: {p}")))?,
            None => 3000,
        };

        Ok(Self {
            store,
            http_port,
            home_redirect_url: var("HOME_REDIRECT_URL")
                .unwrap_or_else(|| DEFAULT_HOME_REDIRECT.into()),
            admin_redirect_url: var("ADMIN_REDIRECT_URL")
                .unwrap_or_else(|| DEFAULT_ADMIN_REDIRECT.into()),
            log_level: var("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: var("LOG_DIR"),
        })
    }

    /// In-memory configuration for tests and local runs
    pub fn in_memory() -> Self {
        Self {
            store: StoreBackend::Memory,
            http_port: 3000,
            home_redirect_url: DEFAULT_HOME_REDIRECT.into(),
            admin_redirect_url: DEFAULT_ADMIN_REDIRECT.into(),
            log_level: "info".into(),
            log_dir: None,
        }
    }

    /// Redirect target after a successful login
    ///
    /// The case-insensitive `admin` check only picks the page; the login
    /// itself already matched the username exactly.
    pub fn redirect_for(&self, username: &str) -> &str {
        if username.eq_ignore_ascii_case("admin") {
            &self.admin_redirect_url
        } else {
            &self.home_redirect_url
        }
    }
}

fn parse_store(
    url: &str,
    namespace: String,
    database: String,
    username: Option<String>,
    password: Option<String>,
) -> Result<StoreBackend> {
    if url.eq_ignore_ascii_case("memory") || url.starts_with("mem://") {
        return Ok(StoreBackend::Memory);
    }

    if !REMOTE_SCHEMES.iter().any(|scheme| url.starts_with(scheme)) {
        return Err(ServerError::Config(format!(
            "STORE_URL has an unsupported scheme: {url}"
        )));
    }

    let credentials = match (username, password) {
        (Some(user), Some(pass)) => Some((user, pass)),
        (None, None) => None,
        _ => {
            return Err(ServerError::Config(
                "STORE_USERNAME and STORE_PASSWORD must be set together".into(),
            ));
        }
    };

    Ok(StoreBackend::Surreal(SurrealConfig {
        url: url.to_string(),
        namespace,
        database,
        credentials,
    }))
}
