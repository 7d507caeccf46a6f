//! Configuración de variables de entorno
//!
//! Este módulo lee el entorno del proceso (después de que `dotenvy` cargue `.env`).
//! Cada variable tiene un valor por defecto; los valores mal formados se
//! reportan como error en lugar de sustituirse en silencio.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::utils::errors::AppError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_RECALCULATION_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub cors_origins: Vec<String>,
    /// URL base del backend de recálculo; `None` significa calcular siempre en local
    pub recalculation_base_url: Option<String>,
    pub recalculation_timeout: Duration,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            log_level: "info".to_string(),
            cors_origins: Vec::new(),
            recalculation_base_url: None,
            recalculation_timeout: Duration::from_secs(DEFAULT_RECALCULATION_TIMEOUT_SECS),
        }
    }
}

fn parse_var<T: FromStr>(name: &str, raw: &str) -> Result<T, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::Config(format!("{} must be a valid number, got '{}'", name, raw)))
}

impl EnvironmentConfig {
    /// Cargar la configuración desde las variables del proceso
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Construye la configuración desde cualquier fuente de variables
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => parse_var("PORT", &raw)?,
            None => defaults.port,
        };
        let timeout_secs: u64 = match lookup("RECALCULATION_TIMEOUT_SECS") {
            Some(raw) => parse_var("RECALCULATION_TIMEOUT_SECS", &raw)?,
            None => DEFAULT_RECALCULATION_TIMEOUT_SECS,
        };

        Ok(Self {
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            cors_origins: lookup("CORS_ORIGINS")
                .map(|raw| {
                    raw.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            recalculation_base_url: lookup("RECALCULATION_BASE_URL")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            recalculation_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la dirección `host:puerto` del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = EnvironmentConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(config.is_development());
        assert!(config.recalculation_base_url.is_none());
        assert!(config.cors_origins.is_empty());
    }

    #[test]
    fn test_reads_all_variables() {
        let config = EnvironmentConfig::from_lookup(lookup(&[
            ("ENVIRONMENT", "production"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("CORS_ORIGINS", "https://a.example, https://b.example,"),
            ("RECALCULATION_BASE_URL", "https://calc.example"),
            ("RECALCULATION_TIMEOUT_SECS", "3"),
        ]))
        .unwrap();

        assert!(config.is_production());
        assert_eq!(config.server_url(), "127.0.0.1:8080");
        assert_eq!(config.cors_origins, vec!["https://a.example", "https://b.example"]);
        assert_eq!(config.recalculation_base_url.as_deref(), Some("https://calc.example"));
        assert_eq!(config.recalculation_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_blank_backend_url_means_offline() {
        let config = EnvironmentConfig::from_lookup(lookup(&[("RECALCULATION_BASE_URL", "  ")])).unwrap();
        assert!(config.recalculation_base_url.is_none());
    }

    #[test]
    fn test_bad_port_is_an_error() {
        let result = EnvironmentConfig::from_lookup(lookup(&[("PORT", "eighty")]));
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
