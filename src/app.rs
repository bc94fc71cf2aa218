// ============================================================================
// APP - Actualizador de enlaces de reserva
// ============================================================================
// Flujo lineal: horarios -> destino -> DOM
// Dependencias inyectadas para poder probar sin navegador.
// ============================================================================

use crate::dom::{DomLinkView, LinkSlot, LinkView};
use crate::models::LinkTarget;
use crate::services::{ApiClient, LocalStorageSession, ScheduleSource, SessionSource};

/// Por qué no se tocó el DOM
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// El backend respondió con una lista vacía
    NoSchedules,
    /// Fallo de red, HTTP no-2xx o cuerpo ilegible
    Unavailable,
}

/// Resultado de una ejecución
#[derive(Clone, Debug, PartialEq)]
pub enum UpdateOutcome {
    Skipped(SkipReason),
    Applied { target: LinkTarget, written: usize },
}

pub struct BookingLinkUpdater<S, T, V> {
    schedules: S,
    session: T,
    view: V,
}

impl BookingLinkUpdater<ApiClient, LocalStorageSession, DomLinkView> {
    /// Actualizador contra la API, localStorage y el DOM del navegador
    pub fn for_browser() -> Self {
        Self::new(ApiClient::new(), LocalStorageSession::new(), DomLinkView::new())
    }
}

impl<S, T, V> BookingLinkUpdater<S, T, V>
where
    S: ScheduleSource,
    T: SessionSource,
    V: LinkView,
{
    pub fn new(schedules: S, session: T, view: V) -> Self {
        Self { schedules, session, view }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Reescribir los enlaces de reserva. Nunca falla.
    ///
    /// Consulta el `FetchOutcome` completo (en vez de `fetch_schedules`) para distinguir
    /// `Unavailable` de `NoSchedules` en el resultado; el diagnóstico es el mismo.
    pub async fn update_booking_links(&self) -> UpdateOutcome {
        let outcome = self.schedules.fetch().await;
        let reason = if outcome.is_failure() {
            SkipReason::Unavailable
        } else {
            SkipReason::NoSchedules
        };
        let schedules = outcome.into_schedules();

        let logged_in = if schedules.is_empty() {
            false
        } else {
            self.session.is_logged_in()
        };

        let Some(target) = LinkTarget::resolve(&schedules, logged_in) else {
            log::info!("ℹ️ [BOOKING] No hay horarios disponibles para enlazar a la reserva");
            return UpdateOutcome::Skipped(reason);
        };

        let href = target.href();
        let written: usize = LinkSlot::ALL
            .iter()
            .map(|slot| self.view.set_destination(*slot, &href))
            .sum();

        log::info!(
            "🔗 [BOOKING] Destino '{}' aplicado a {} elementos (sesión: {})",
            href,
            written,
            if logged_in { "sí" } else { "no" }
        );

        UpdateOutcome::Applied { target, written }
    }
}
