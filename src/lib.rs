// ============================================================================
// BOOKING LINKS - Enlaces de reserva según horarios y sesión (RUST -> WASM)
// ============================================================================
// - Services: SOLO comunicación (API de horarios, localStorage)
// - Dom: helpers + vista de enlaces
// - App: decide el destino y lo aplica
// - Models: estructuras compartidas con backend
// ============================================================================

pub mod app;
pub mod config;
pub mod dom;
pub mod models;
pub mod services;
pub mod utils;

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests;
#[cfg(test)]
mod test_logger;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::app::BookingLinkUpdater;
use crate::config::CONFIG;

pub use crate::app::{SkipReason, UpdateOutcome};
pub use crate::models::{LinkTarget, Schedule, ScheduleId};
pub use crate::services::{fetch_schedules, FetchError, FetchOutcome};

#[cfg_attr(not(test), wasm_bindgen(start))]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(Config::new(CONFIG.log_level()));
    }
    log::info!("🚆 Booking links - esperando DOMContentLoaded");

    // Una sola ejecución por carga de página
    dom::on_dom_ready(|| {
        wasm_bindgen_futures::spawn_local(async {
            let updater = BookingLinkUpdater::for_browser();
            let outcome = updater.update_booking_links().await;
            log::debug!("🏁 [BOOKING] {:?}", outcome);
        });
    })
}
