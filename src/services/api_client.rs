// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================

use gloo_net::http::Request;

use crate::config::CONFIG;
use crate::models::Schedule;
use crate::services::fetch_outcome::{FetchError, FetchOutcome};

/// Origen de horarios (inyectable para tests)
#[allow(async_fn_in_trait)]
pub trait ScheduleSource {
    async fn fetch(&self) -> FetchOutcome;
}

/// Cliente API contra `{API_BASE}/schedules`
#[derive(Clone, Debug)]
pub struct ApiClient {
    schedules_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            schedules_url: CONFIG.schedules_url(),
        }
    }

    pub fn with_schedules_url(url: impl Into<String>) -> Self {
        Self {
            schedules_url: url.into(),
        }
    }

    pub fn schedules_url(&self) -> &str {
        &self.schedules_url
    }

    /// Listar horarios
    pub async fn get_schedules(&self) -> Result<Vec<Schedule>, FetchError> {
        log::debug!("🚆 [API] GET {}", self.schedules_url);

        let response = Request::get(&self.schedules_url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::Http {
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        response
            .json::<Vec<Schedule>>()
            .await
            .map_err(|e| FetchError::Parse(e.to_string()))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ScheduleSource for ApiClient {
    async fn fetch(&self) -> FetchOutcome {
        let outcome = FetchOutcome::from(self.get_schedules().await);
        if let FetchOutcome::Loaded(ref schedules) = outcome {
            log::info!("✅ [API] {} horarios obtenidos", schedules.len());
        }
        outcome
    }
}

/// Punto de entrada público para obtener horarios (fetchSchedules).
///
/// Nunca falla: un error se registra y se devuelve un vector vacío.
pub async fn fetch_schedules<S: ScheduleSource>(source: &S) -> Vec<Schedule> {
    source.fetch().await.into_schedules()
}
