// ============================================================================
// FETCH OUTCOME - Resultado etiquetado de la carga de horarios
// ============================================================================

use thiserror::Error;

use crate::models::Schedule;

/// Causa de fallo al obtener horarios
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {status_text}")]
    Http { status: u16, status_text: String },
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Resultado de `GET /schedules`, sin colapsar "vacío" y "fallo"
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// Al menos un horario
    Loaded(Vec<Schedule>),
    /// Respuesta 2xx con array vacío
    Empty,
    Failed(FetchError),
}

impl FetchOutcome {
    pub fn from_schedules(schedules: Vec<Schedule>) -> Self {
        if schedules.is_empty() {
            FetchOutcome::Empty
        } else {
            FetchOutcome::Loaded(schedules)
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, FetchOutcome::Failed(_))
    }

    /// Degradar a secuencia: los fallos se registran y quedan como vector vacío
    pub fn into_schedules(self) -> Vec<Schedule> {
        match self {
            FetchOutcome::Loaded(schedules) => schedules,
            FetchOutcome::Empty => Vec::new(),
            FetchOutcome::Failed(e) => {
                log::error!("❌ [SCHEDULES] Error obteniendo horarios: {}", e);
                Vec::new()
            }
        }
    }
}

impl From<Result<Vec<Schedule>, FetchError>> for FetchOutcome {
    fn from(result: Result<Vec<Schedule>, FetchError>) -> Self {
        match result {
            Ok(schedules) => FetchOutcome::from_schedules(schedules),
            Err(e) => FetchOutcome::Failed(e),
        }
    }
}
