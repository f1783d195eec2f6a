use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "CareBridge";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum accepted size for an uploaded document (5 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// Address the intake API binds to when nothing else is configured.
pub const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 5000);

const ENV_BIND_ADDR: &str = "CAREBRIDGE_BIND_ADDR";
const ENV_UPLOAD_ROOT: &str = "CAREBRIDGE_UPLOAD_ROOT";
const ENV_MAX_UPLOAD_BYTES: &str = "CAREBRIDGE_MAX_UPLOAD_BYTES";

/// Default `tracing` filter when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "carebridge=info,carebridge_lib=info,tower_http=warn"
}

/// Get the application data directory.
/// Falls back to the working directory when the platform has no data dir.
pub fn app_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Root directory holding one subdirectory per document category.
pub fn default_upload_root() -> PathBuf {
    app_data_dir().join("uploads")
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value}")]
    InvalidValue { var: &'static str, value: String },
}

/// Runtime configuration for the intake server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub upload_root: PathBuf,
    pub max_upload_bytes: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR,
            upload_root: default_upload_root(),
            max_upload_bytes: MAX_UPLOAD_BYTES,
        }
    }
}

impl ServerConfig {
    /// Build a config from `CAREBRIDGE_*` environment variables,
    /// falling back to defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_BIND_ADDR) {
            config.bind_addr = value.parse().map_err(|_| ConfigError::InvalidValue {
                var: ENV_BIND_ADDR,
                value: value.clone(),
            })?;
        }

        if let Some(value) = lookup(ENV_UPLOAD_ROOT) {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    var: ENV_UPLOAD_ROOT,
                    value,
                });
            }
            config.upload_root = PathBuf::from(value);
        }

        if let Some(value) = lookup(ENV_MAX_UPLOAD_BYTES) {
            config.max_upload_bytes = match value.parse::<u64>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        var: ENV_MAX_UPLOAD_BYTES,
                        value,
                    })
                }
            };
        }

        Ok(config)
    }
}
