use web_sys::{window, Storage};

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Leer valor crudo de localStorage
///
/// `Ok(None)` si la clave no existe; `Err` si localStorage no está disponible.
pub fn read_raw(key: &str) -> Result<Option<String>, String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    storage
        .get_item(key)
        .map_err(|_| "Error leyendo localStorage".to_string())
}
