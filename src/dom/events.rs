// ============================================================================
// EVENT HANDLING - Arranque al terminar el parseo del documento
// ============================================================================
// El listener de DOMContentLoaded se registra UNA VEZ desde el start de WASM,
// así que closure.forget() no acumula listeners.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Event;

use crate::dom::document;

pub const DOM_CONTENT_LOADED: &str = "DOMContentLoaded";

/// Ejecutar `handler` una sola vez cuando el documento esté parseado.
///
/// Si el módulo arranca con el documento ya parseado, se ejecuta en el acto.
pub fn on_dom_ready<F>(handler: F) -> Result<(), JsValue>
where
    F: FnOnce() + 'static,
{
    let doc = document().ok_or_else(|| JsValue::from_str("No document"))?;

    if doc.ready_state() != "loading" {
        log::debug!("📄 [DOM] Documento ya parseado, ejecutando directamente");
        handler();
        return Ok(());
    }

    let closure = Closure::once(move |_e: Event| handler());
    doc.add_event_listener_with_callback(DOM_CONTENT_LOADED, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
