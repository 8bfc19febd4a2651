#[cfg(test)]
mod config_tests {
    use crate::config::{Config, DatabaseConfig, Environment, ServerConfig, TournamentConfig};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn sample_config(environment: Environment) -> Config {
        Config {
            environment,
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 50003,
                workers: 1,
            },
            database: DatabaseConfig {
                url: "http://localhost:8529".to_string(),
                name: "mundial_dev".to_string(),
                username: "root".to_string(),
                password: "test".to_string(),
            },
            tournament: TournamentConfig {
                name: "Mundial".to_string(),
            },
        }
    }

    #[test_case("development", Environment::Development)]
    #[test_case("dev", Environment::Development)]
    #[test_case("TEST", Environment::Test)]
    #[test_case("Production", Environment::Production)]
    #[test_case("prod", Environment::Production)]
    fn test_environment_parsing(raw: &str, expected: Environment) {
        assert_eq!(raw.parse::<Environment>().unwrap(), expected);
    }

    #[test]
    fn test_unknown_environment_is_rejected() {
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn test_environment_default() {
        assert_eq!(Environment::default(), Environment::Development);
    }

    #[test]
    fn test_backend_url_parsing() {
        assert_eq!(
            Config::parse_backend_url("http://localhost:6000"),
            ("localhost".to_string(), 6000)
        );
        assert_eq!(
            Config::parse_backend_url("not a url"),
            ("127.0.0.1".to_string(), 50003)
        );
    }

    #[test]
    fn test_development_config_validates() {
        let config = sample_config(Environment::Development);
        assert!(config.validate().is_ok());
        assert!(config.is_development());
        assert!(!config.is_production());
    }

    #[test]
    fn test_production_rejects_default_password() {
        let config = sample_config(Environment::Production);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_port_is_rejected() {
        let mut config = sample_config(Environment::Test);
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_database_url_is_rejected() {
        let mut config = sample_config(Environment::Test);
        config.database.url = "localhost without scheme".to_string();
        assert!(config.validate().is_err());
    }
}
