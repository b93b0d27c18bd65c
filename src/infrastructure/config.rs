use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("JOBS_PROXY").separator("__"));
        let cfg = builder.build()?;
        let mut config: Config = cfg.try_deserialize()?;

        // Hosting platforms announce the listening port through a bare PORT variable.
        if env::var("JOBS_PROXY__APP__PORT").is_err() {
            if let Ok(port) = env::var("PORT") {
                config.app.port = port.trim().parse().map_err(|_| {
                    config::ConfigError::Message(format!("Invalid PORT value: {port}"))
                })?;
            }
        }

        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.app.host, self.app.port)
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[cfg(test)]
mod tests {
    use super::Config;
    use config::ConfigError;
    use serial_test::serial;
    use std::env;

    fn clear_env_vars() {
        env::remove_var("JOBS_PROXY__APP__PORT");
        env::remove_var("JOBS_PROXY__APP__HOST");
        env::remove_var("PORT");
    }

    #[test]
    #[serial]
    fn defaults_when_nothing_is_set() {
        clear_env_vars();

        let config = Config::from_env().expect("expected configuration to load");

        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    #[serial]
    fn prefixed_variables_override_defaults() {
        clear_env_vars();
        env::set_var("JOBS_PROXY__APP__HOST", "127.0.0.1");
        env::set_var("JOBS_PROXY__APP__PORT", "3000");
        env::set_var("PORT", "9999");

        let config = Config::from_env().expect("expected configuration to load");

        assert_eq!(config.bind_address(), "127.0.0.1:3000");

        clear_env_vars();
    }

    #[test]
    #[serial]
    fn falls_back_to_platform_port() {
        clear_env_vars();
        env::set_var("PORT", "5005");

        let config = Config::from_env().expect("expected configuration to load");

        assert_eq!(config.app.port, 5005);

        clear_env_vars();
    }

    #[test]
    #[serial]
    fn errors_on_unparsable_platform_port() {
        clear_env_vars();
        env::set_var("PORT", "eighty");

        let error = Config::from_env().expect_err("expected configuration to fail");

        match error {
            ConfigError::Message(message) => {
                assert_eq!(message, "Invalid PORT value: eighty".to_string())
            }
            other => panic!("unexpected error: {:?}", other),
        }

        clear_env_vars();
    }
}
