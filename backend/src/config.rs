use std::env;
use dotenv::dotenv;
use serde::Deserialize;
use log::{info, warn};

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub enum Environment {
    #[default]
    Development,
    Test,
    Production,
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dev" | "development" => Ok(Environment::Development),
            "test" => Ok(Environment::Test),
            "prod" | "production" => Ok(Environment::Production),
            _ => Err(format!("Unknown environment: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub tournament: TournamentConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub name: String,
    pub username: String,
    pub password: String,
}

/// Report-level settings handed to the statistics engine
#[derive(Debug, Clone, Deserialize)]
pub struct TournamentConfig {
    pub name: String,
}

type ConfigResult<T> = Result<T, Box<dyn std::error::Error>>;

fn required_var(key: &str) -> ConfigResult<String> {
    env::var(key).map_err(|_| format!("{} must be set in production", key).into())
}

impl Config {
    pub(crate) fn parse_backend_url(url: &str) -> (String, u16) {
        // BACKEND_URL like "http://localhost:50003"
        if let Ok(parsed_url) = url::Url::parse(url) {
            let host = parsed_url.host_str().unwrap_or("127.0.0.1").to_string();
            let port = parsed_url.port().unwrap_or(50003);
            (host, port)
        } else {
            ("127.0.0.1".to_string(), 50003)
        }
    }

    fn load_env_files() {
        if let Ok(env_file_path) = env::var("ENV_FILE_PATH") {
            if !env_file_path.is_empty() {
                info!("Loading environment from ENV_FILE_PATH: {}", env_file_path);
                dotenv::from_filename(&env_file_path).ok();
                return;
            }
        }

        dotenv().ok();
        // .env.<environment> overrides the base file outside development
        let environment_hint = env::var("RUST_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .parse()
            .unwrap_or(Environment::Development);
        let env_file = format!(".env.{:?}", environment_hint).to_lowercase();
        if env_file != ".env.development" {
            let _ = dotenv::from_filename(&env_file);
        }
    }

    pub fn load() -> ConfigResult<Self> {
        Self::load_env_files();

        let environment = env::var("RUST_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .parse()
            .unwrap_or(Environment::Development);

        info!("Loading configuration for environment: {:?}", environment);

        let config = Config {
            environment: environment.clone(),
            server: Self::load_server_config(&environment),
            database: Self::load_database_config(&environment)?,
            tournament: Self::load_tournament_config(),
        };

        config.validate()?;
        config.log_configuration();

        Ok(config)
    }

    fn load_server_config(env: &Environment) -> ServerConfig {
        let backend_url = env::var("BACKEND_URL")
            .unwrap_or_else(|_| "http://0.0.0.0:50003".to_string());
        let (host, port) = Self::parse_backend_url(&backend_url);
        let default_workers = match env {
            Environment::Production => 8,
            Environment::Development | Environment::Test => 1,
        };

        ServerConfig {
            // SERVER_HOST takes precedence over the BACKEND_URL host
            host: env::var("SERVER_HOST").unwrap_or(host),
            port: env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(port),
            workers: env::var("BACKEND_WORKERS")
                .ok()
                .and_then(|w| w.parse().ok())
                .unwrap_or(default_workers),
        }
    }

    fn load_database_config(env: &Environment) -> ConfigResult<DatabaseConfig> {
        let config = match env {
            Environment::Development => {
                let arango_url = env::var("ARANGO_URL");
                match &arango_url {
                    Ok(url) => info!("Found ARANGO_URL in environment: {}", url),
                    Err(_) => warn!("ARANGO_URL not found in environment, using default"),
                }

                DatabaseConfig {
                    url: arango_url.unwrap_or_else(|_| "http://localhost:8529".to_string()),
                    name: env::var("ARANGO_DB").unwrap_or_else(|_| "mundial_dev".to_string()),
                    username: env::var("ARANGO_USERNAME").unwrap_or_else(|_| "root".to_string()),
                    password: env::var("ARANGO_PASSWORD").unwrap_or_else(|_| "test".to_string()),
                }
            }
            Environment::Production => DatabaseConfig {
                url: required_var("ARANGO_URL")?,
                name: required_var("ARANGO_DB")?,
                username: required_var("ARANGO_USERNAME")?,
                password: required_var("ARANGO_PASSWORD")?,
            },
            Environment::Test => DatabaseConfig {
                url: env::var("ARANGO_URL").unwrap_or_else(|_| "http://test-arangodb:8529".to_string()),
                name: env::var("ARANGO_DB").unwrap_or_else(|_| "mundial_test".to_string()),
                username: env::var("ARANGO_USERNAME").unwrap_or_else(|_| "root".to_string()),
                password: env::var("ARANGO_PASSWORD").unwrap_or_else(|_| "test".to_string()),
            },
        };
        Ok(config)
    }

    fn load_tournament_config() -> TournamentConfig {
        TournamentConfig {
            name: env::var("TOURNAMENT_NAME")
                .ok()
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| "Mundial".to_string()),
        }
    }

    pub(crate) fn validate(&self) -> ConfigResult<()> {
        if self.environment == Environment::Production && self.database.password == "test" {
            return Err("Production database password cannot be 'test'".into());
        }

        if self.server.port == 0 {
            return Err("Server port cannot be 0".into());
        }

        if self.server.workers == 0 {
            return Err("Worker count cannot be 0".into());
        }

        if url::Url::parse(&self.database.url).is_err() {
            return Err(format!("Invalid ARANGO_URL: {}", self.database.url).into());
        }

        Ok(())
    }

    fn log_configuration(&self) {
        info!("Configuration loaded successfully");
        info!("Environment: {:?}", self.environment);
        info!("Server: {}:{} (workers: {})", self.server.host, self.server.port, self.server.workers);
        info!("Database: {} at {}", self.database.name, self.database.url);
        info!("Tournament: {}", self.tournament.name);

        if self.environment == Environment::Development {
            warn!("Running in development mode with default credentials");
        }
    }

    #[allow(dead_code)]
    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    #[allow(dead_code)]
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}
