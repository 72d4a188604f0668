use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub export: ExportConfig,
    pub web: WebConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_request_body_size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog file replacing the bundled recipes; `None` uses the bundled set
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    pub grid_columns: usize,
    pub static_dir: PathBuf,
}

impl Settings {
    /// Load settings from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_vars(env_var)
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Settings {
            server: ServerConfig::from_vars(&var)?,
            catalog: CatalogConfig::from_vars(&var),
            export: ExportConfig::from_vars(&var),
            web: WebConfig::from_vars(&var)?,
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(Error::Config("Port must be non-zero".to_string()));
        }

        if self.web.grid_columns == 0 {
            return Err(Error::Config("Grid columns must be non-zero".to_string()));
        }

        Ok(())
    }
}

impl ServerConfig {
    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = var("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = var("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid PORT value".to_string()))?;

        let max_request_body_size = var("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|| "65536".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid MAX_REQUEST_BODY_SIZE value".to_string()))?;

        Ok(ServerConfig {
            host,
            port,
            max_request_body_size,
        })
    }
}

impl CatalogConfig {
    /// Catalog location only; never fails on unrelated server settings
    pub fn from_env() -> Self {
        Self::from_vars(env_var)
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        CatalogConfig {
            path: var("CATALOG_PATH")
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
        }
    }
}

impl ExportConfig {
    pub fn from_env() -> Self {
        Self::from_vars(env_var)
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        ExportConfig {
            output_dir: var("EXPORT_DIR").unwrap_or_else(|| ".".to_string()).into(),
        }
    }
}

impl WebConfig {
    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let grid_columns = var("GRID_COLUMNS")
            .unwrap_or_else(|| "3".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid GRID_COLUMNS value".to_string()))?;

        let static_dir = var("STATIC_DIR")
            .unwrap_or_else(|| "src/web/static".to_string())
            .into();

        Ok(WebConfig {
            grid_columns,
            static_dir,
        })
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
                max_request_body_size: 65536,
            },
            catalog: CatalogConfig { path: None },
            export: ExportConfig {
                output_dir: ".".into(),
            },
            web: WebConfig {
                grid_columns: 3,
                static_dir: "src/web/static".into(),
            },
        }
    }
}
