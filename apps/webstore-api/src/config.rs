use axum_helpers::http::CorsConfig;
use core_config::{AppInfo, FromEnv, app_info, env_or_default, server::ServerConfig};
use std::path::PathBuf;

// Import MongoDB config from the database library
use database::mongodb::MongoConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Port the storefront listens on when `PORT` is unset
pub const DEFAULT_PORT: u16 = 3000;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub environment: Environment,
    /// Directory whose `images/` subdirectory is served at `/images`
    pub static_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mongodb = MongoConfig::from_env()?;
        let server = ServerConfig::from_env_or(DEFAULT_PORT)?;
        let cors = CorsConfig::from_env()?;
        let static_dir = PathBuf::from(env_or_default("STATIC_DIR", "public"));

        Ok(Self {
            app: app_info!(),
            mongodb,
            server,
            cors,
            environment,
            static_dir,
        })
    }

    pub fn images_dir(&self) -> PathBuf {
        self.static_dir.join("images")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_helpers::http::AllowedOrigins;

    #[test]
    fn test_defaults() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", Some("mongodb://localhost:27017")),
                ("MONGODB_DATABASE", None),
                ("MONGO_DATABASE", None),
                ("PORT", None),
                ("CORS_ALLOWED_ORIGIN", None),
                ("STATIC_DIR", None),
                ("APP_ENV", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.server.port, 3000);
                assert_eq!(config.mongodb.database(), "webstore");
                assert_eq!(config.cors.allowed_origins, AllowedOrigins::Any);
                assert_eq!(config.images_dir(), PathBuf::from("public/images"));
                assert_eq!(config.app.name, "webstore_api");
                assert!(config.environment.is_development());
            },
        );
    }

    #[test]
    fn test_missing_mongodb_url_fails() {
        temp_env::with_vars(
            [("MONGODB_URL", None::<&str>), ("MONGO_URL", None::<&str>)],
            || {
                assert!(Config::from_env().is_err());
            },
        );
    }

    #[test]
    fn test_overrides() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", Some("mongodb://db:27017")),
                ("PORT", Some("8081")),
                ("STATIC_DIR", Some("/srv/www")),
                ("CORS_ALLOWED_ORIGIN", Some("http://localhost:8080")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.server.port, 8081);
                assert_eq!(config.images_dir(), PathBuf::from("/srv/www/images"));
                assert!(matches!(config.cors.allowed_origins, AllowedOrigins::List(_)));
            },
        );
    }
}
