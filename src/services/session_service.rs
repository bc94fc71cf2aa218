// ============================================================================
// SESSION SERVICE - Presencia del token en localStorage
// ============================================================================

use crate::config::CONFIG;
use crate::utils::storage::read_raw;

/// ¿Hay sesión activa?
pub trait SessionSource {
    fn is_logged_in(&self) -> bool;
}

/// Sesión respaldada por localStorage
///
/// Solo se comprueba que la clave exista. Una cadena vacía cuenta como sesión
/// iniciada (comportamiento heredado, pendiente de decidir si es intencional).
#[derive(Clone, Debug)]
pub struct LocalStorageSession {
    key: String,
}

impl LocalStorageSession {
    pub fn new() -> Self {
        Self::with_key(CONFIG.token_storage_key.clone())
    }

    pub fn with_key(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Default for LocalStorageSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionSource for LocalStorageSession {
    fn is_logged_in(&self) -> bool {
        token_present(read_raw(&self.key), &self.key)
    }
}

fn token_present(raw: Result<Option<String>, String>, key: &str) -> bool {
    match raw {
        Ok(value) => value.is_some(),
        Err(e) => {
            log::warn!("⚠️ [SESSION] {} (clave '{}'), se asume sin sesión", e, key);
            false
        }
    }
}
