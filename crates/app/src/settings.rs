//! Handles settings for the application. Configuration is read from
//! `settings.toml` (optional) and `QUITS__*` environment variables, e.g.
//! `QUITS__SERVER__PORT=9000`.
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq)]
pub struct App {
    /// `tracing` level for every crate of the workspace.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct Server {
    pub bind: Option<String>,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            bind: None,
            port: default_port(),
        }
    }
}

#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct Settings {
    #[serde(default)]
    pub app: App,
    pub server: Option<Server>,
}

fn default_level() -> String {
    "info".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Settings {
    pub fn new(path: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix("QUITS").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    /// Address the HTTP layer binds to; `127.0.0.1:8080` when unset.
    pub fn server_addr(&self) -> String {
        let server = self.server.as_ref();
        let bind = server
            .and_then(|s| s.bind.clone())
            .unwrap_or_else(|| "127.0.0.1".to_string());
        let port = server.map_or_else(default_port, |s| s.port);
        format!("{bind}:{port}")
    }
}
