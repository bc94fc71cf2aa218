use serde::{Deserialize, Serialize};

use crate::utils::constants::{DEFAULT_API_BASE, DEFAULT_TOKEN_STORAGE_KEY};

/// Configuración del módulo, resuelta en tiempo de compilación
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    pub api_base: String,
    pub token_storage_key: String,
    pub enable_logging: bool,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            token_storage_key: DEFAULT_TOKEN_STORAGE_KEY.to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("API_BASE"),
            option_env!("TOKEN_STORAGE_KEY"),
            option_env!("ENABLE_LOGGING"),
            option_env!("LOG_LEVEL"),
        )
    }

    fn from_values(
        api_base: Option<&str>,
        token_storage_key: Option<&str>,
        enable_logging: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            api_base: api_base
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base),
            token_storage_key: token_storage_key
                .map(str::to_string)
                .unwrap_or(defaults.token_storage_key),
            enable_logging: enable_logging
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.enable_logging),
            log_level: log_level
                .map(str::to_string)
                .unwrap_or(defaults.log_level),
        }
    }

    /// URL del recurso de horarios
    pub fn schedules_url(&self) -> String {
        format!("{}/schedules", self.api_base)
    }

    /// Nivel para wasm_logger; valores desconocidos caen en Info
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
