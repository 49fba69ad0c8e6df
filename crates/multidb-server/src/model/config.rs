//! Configuration management for the multidb server
//!
//! Settings come from `conf/application.yml` plus `MULTIDB`-prefixed
//! environment overrides, with a few command line switches on top. All
//! backend connection parameters are read exactly once at startup and
//! handed to the registry as immutable structs.

use clap::Parser;
use config::{Config, Environment};
use multidb_common::MultiDbError;
use multidb_persistence::{BackendConfig, BackendSettings, DocumentSettings, RelationalSettings};

use crate::startup::logging::LoggingConfig;

const DEFAULT_SERVER_PORT: u16 = 8080;
const DEFAULT_MONGODB_PORT: u16 = 27017;

/// Command line arguments for the server
#[derive(Debug, Parser)]
#[command()]
struct Cli {
    #[arg(short = 'a', long = "address")]
    address: Option<String>,
    #[arg(short = 'p', long = "port")]
    port: Option<u16>,
    #[arg(long = "log-dir", env = "MULTIDB_LOG_DIR")]
    log_dir: Option<String>,
}

/// Application configuration loaded from config files and environment
#[derive(Clone, Debug, Default)]
pub struct Configuration {
    pub config: Config,
}

impl Configuration {
    pub fn new() -> Self {
        let args = Cli::parse();
        let mut config_builder = Config::builder()
            .add_source(
                Environment::with_prefix("multidb")
                    .separator(".")
                    .try_parsing(true),
            )
            .add_source(config::File::with_name("conf/application.yml"));

        if let Some(v) = args.address {
            config_builder = config_builder
                .set_override("server.address", v)
                .expect("Failed to set server address override");
        }
        if let Some(v) = args.port {
            config_builder = config_builder
                .set_override("server.port", v as i64)
                .expect("Failed to set server port override");
        }
        if let Some(v) = args.log_dir {
            config_builder = config_builder
                .set_override("logs.path", v)
                .expect("Failed to set log directory override");
        }

        let app_config = config_builder
            .build()
            .expect("Failed to build configuration - check conf/application.yml");

        Configuration { config: app_config }
    }

    /// Wrap an already built `Config`, bypassing file and CLI sources.
    pub fn from_config(config: Config) -> Self {
        Configuration { config }
    }

    pub fn server_address(&self) -> String {
        self.config
            .get_string("server.address")
            .unwrap_or("0.0.0.0".to_string())
    }

    pub fn server_port(&self) -> u16 {
        self.config
            .get_int("server.port")
            .unwrap_or(DEFAULT_SERVER_PORT.into()) as u16
    }

    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig::from_config(
            self.config.get_string("logs.path").ok(),
            self.config.get_bool("logs.console").unwrap_or(true),
            self.config.get_bool("logs.file").unwrap_or(true),
            self.config
                .get_string("logs.level")
                .unwrap_or("info".to_string()),
        )
    }

    /// The three backends of the default deployment: two relational, one
    /// document. Missing required settings surface as `ConfigError` here,
    /// before any connection is attempted.
    pub fn backend_configs(&self) -> Result<Vec<BackendConfig>, MultiDbError> {
        Ok(vec![
            self.relational_backend("db1", "Database 1", "first")?,
            self.relational_backend("db2", "Database 2", "second")?,
            self.document_backend("db3", "Database 3", "third")?,
        ])
    }

    fn relational_backend(
        &self,
        name: &str,
        display_name: &str,
        scope: &str,
    ) -> Result<BackendConfig, MultiDbError> {
        let settings = RelationalSettings {
            url: self.require_string(&format!("{}.datasource.url", scope))?,
            driver: self.require_string(&format!("{}.datasource.driver", scope))?,
            username: self
                .config
                .get_string(&format!("{}.datasource.username", scope))
                .unwrap_or_default(),
            password: self
                .config
                .get_string(&format!("{}.datasource.password", scope))
                .unwrap_or_default(),
        };

        Ok(BackendConfig {
            name: name.to_string(),
            display_name: display_name.to_string(),
            settings: BackendSettings::Relational(settings),
        })
    }

    fn document_backend(
        &self,
        name: &str,
        display_name: &str,
        scope: &str,
    ) -> Result<BackendConfig, MultiDbError> {
        let settings = DocumentSettings {
            host: self.require_string(&format!("{}.mongodb.host", scope))?,
            port: self
                .config
                .get_int(&format!("{}.mongodb.port", scope))
                .unwrap_or(DEFAULT_MONGODB_PORT.into()) as u16,
            database: self.require_string(&format!("{}.mongodb.database", scope))?,
        };

        Ok(BackendConfig {
            name: name.to_string(),
            display_name: display_name.to_string(),
            settings: BackendSettings::Document(settings),
        })
    }

    fn require_string(&self, key: &str) -> Result<String, MultiDbError> {
        self.config
            .get_string(key)
            .map_err(|_| MultiDbError::ConfigError(format!("missing required setting '{}'", key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_config() -> Configuration {
        let config = Config::builder()
            .set_override("first.datasource.url", "mysql://localhost:3306/db1")
            .unwrap()
            .set_override("first.datasource.driver", "mysql")
            .unwrap()
            .set_override("first.datasource.username", "root")
            .unwrap()
            .set_override("first.datasource.password", "root")
            .unwrap()
            .set_override("second.datasource.url", "postgres://localhost:5432/db2")
            .unwrap()
            .set_override("second.datasource.driver", "postgres")
            .unwrap()
            .set_override("third.mongodb.host", "localhost")
            .unwrap()
            .set_override("third.mongodb.database", "db3")
            .unwrap()
            .build()
            .unwrap();
        Configuration::from_config(config)
    }

    #[test]
    fn test_backend_configs_builds_all_three() {
        let configs = full_config().backend_configs().unwrap();
        assert_eq!(configs.len(), 3);
        assert_eq!(configs[0].name, "db1");
        assert_eq!(configs[0].display_name, "Database 1");
        assert!(matches!(
            configs[0].settings,
            BackendSettings::Relational(_)
        ));
        assert!(matches!(configs[2].settings, BackendSettings::Document(_)));
    }

    #[test]
    fn test_missing_url_is_config_error() {
        let config = Config::builder()
            .set_override("first.datasource.driver", "mysql")
            .unwrap()
            .build()
            .unwrap();
        let err = Configuration::from_config(config)
            .backend_configs()
            .unwrap_err();
        assert!(matches!(err, MultiDbError::ConfigError(_)));
    }

    #[test]
    fn test_mongodb_port_defaults() {
        let configs = full_config().backend_configs().unwrap();
        match &configs[2].settings {
            BackendSettings::Document(s) => assert_eq!(s.port, 27017),
            _ => panic!("db3 should be the document backend"),
        }
    }

    #[test]
    fn test_server_defaults() {
        let configuration = Configuration::from_config(Config::default());
        assert_eq!(configuration.server_address(), "0.0.0.0");
        assert_eq!(configuration.server_port(), 8080);
    }
}
