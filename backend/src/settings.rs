//! Server settings loaded via OrthoConfig.
//!
//! Values layer CLI flags over `VISA_*` environment variables over an
//! optional configuration file.

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Configuration values controlling the HTTP listener and start-up seeding.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "VISA")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// Port to bind.
    pub port: Option<u16>,
    /// Seed the stores with the mock account, applications, and reviews.
    pub seed_mock_data: Option<bool>,
}

impl ServerSettings {
    /// Host and port to bind, falling back to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> (String, u16) {
        (
            self.host.clone().unwrap_or_else(|| DEFAULT_HOST.to_owned()),
            self.port.unwrap_or(DEFAULT_PORT),
        )
    }

    /// Whether start-up seeds mock data. Defaults to `true`.
    pub fn seed_mock_data(&self) -> bool {
        self.seed_mock_data.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("visa-backend")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("VISA_HOST", None::<String>),
            ("VISA_PORT", None::<String>),
            ("VISA_SEED_MOCK_DATA", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), ("0.0.0.0".to_owned(), 8080));
        assert!(settings.seed_mock_data());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("VISA_HOST", Some("127.0.0.1".to_owned())),
            ("VISA_PORT", Some("9090".to_owned())),
            ("VISA_SEED_MOCK_DATA", Some("false".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), ("127.0.0.1".to_owned(), 9090));
        assert!(!settings.seed_mock_data());
    }
}
