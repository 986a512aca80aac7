use crate::domain::images::USE_LOCAL_IMAGES;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

use super::error::SiteError;

const CONFIG_FILE: &str = "config/site";
const ENV_PREFIX: &str = "CASE_STUDY";

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub images: ImageSettings,
    pub log: LogSettings,
    pub output: OutputSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ImageSettings {
    pub use_local: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    pub filter: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputSettings {
    pub path: PathBuf,
}

impl ServerSettings {
    /// First address `host:port` resolves to; `host` may be an IP literal or a hostname.
    pub async fn socket_addr(&self) -> Result<SocketAddr, SiteError> {
        let invalid = || SiteError::InvalidAddress(format!("{}:{}", self.host, self.port));
        tokio::net::lookup_host((self.host.as_str(), self.port))
            .await
            .map_err(|_| invalid())?
            .next()
            .ok_or_else(invalid)
    }
}

fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
    config::Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8080)?
        .set_default("images.use_local", USE_LOCAL_IMAGES)?
        .set_default("log.filter", "info")?
        .set_default("output.path", "dist/index.html")
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

/// Defaults, then `config/site.*` when present, then `CASE_STUDY_*` environment variables.
pub fn load_settings() -> Result<Settings, SiteError> {
    let settings = builder()?
        .add_source(config::File::with_name(CONFIG_FILE).required(false))
        .add_source(environment())
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings: Settings = builder()
            .and_then(|b| b.build())
            .and_then(|c| c.try_deserialize())
            .unwrap();

        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.images.use_local, USE_LOCAL_IMAGES);
        assert_eq!(settings.log.filter, "info");
        assert_eq!(settings.output.path, PathBuf::from("dist/index.html"));
    }

    #[test]
    fn test_file_overrides_defaults() {
        let settings: Settings = builder()
            .unwrap()
            .add_source(config::File::from_str(
                "[server]\nport = 9000\n[images]\nuse_local = true\n",
                config::FileFormat::Toml,
            ))
            .build()
            .and_then(|c| c.try_deserialize())
            .unwrap();

        assert_eq!(settings.server.port, 9000);
        assert!(settings.images.use_local);
        assert_eq!(settings.server.host, "0.0.0.0");
    }

    #[test]
    fn test_environment_overrides_file() {
        let vars = config::Map::from([
            ("CASE_STUDY_SERVER__PORT".to_string(), "9123".to_string()),
            ("CASE_STUDY_IMAGES__USE_LOCAL".to_string(), "true".to_string()),
            ("OTHER_SERVER__PORT".to_string(), "1".to_string()),
        ]);
        let settings: Settings = builder()
            .unwrap()
            .add_source(config::File::from_str(
                "[server]\nport = 9000\n",
                config::FileFormat::Toml,
            ))
            .add_source(environment().source(Some(vars)))
            .build()
            .and_then(|c| c.try_deserialize())
            .unwrap();

        assert_eq!(settings.server.port, 9123);
        assert!(settings.images.use_local);
        assert_eq!(settings.log.filter, "info");
    }

    #[tokio::test]
    async fn test_socket_addr() {
        let server = ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 3000,
        };
        let addr = server.socket_addr().await.unwrap();
        assert_eq!(addr.port(), 3000);
        assert!(addr.ip().is_loopback());
    }

    #[tokio::test]
    async fn test_socket_addr_resolves_hostname() {
        let server = ServerSettings {
            host: "localhost".to_string(),
            port: 3000,
        };
        let addr = server.socket_addr().await.unwrap();
        assert_eq!(addr.port(), 3000);
        assert!(addr.ip().is_loopback());
    }
}
