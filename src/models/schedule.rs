use std::fmt;

use serde::{Deserialize, Serialize};

/// Identificador opaco de un horario (numérico o texto según el backend)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(untagged)]
pub enum ScheduleId {
    Number(serde_json::Number),
    Text(String),
}

/// Se imprime tal cual, sin comillas ni URL-encoding
impl fmt::Display for ScheduleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleId::Number(n) => write!(f, "{}", n),
            ScheduleId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ScheduleId {
    fn from(id: u64) -> Self {
        ScheduleId::Number(id.into())
    }
}

impl From<&str> for ScheduleId {
    fn from(id: &str) -> Self {
        ScheduleId::Text(id.to_string())
    }
}

/// Horario de tren devuelto por `GET /api/schedules`
///
/// Solo `id` participa en la lógica; el resto se conserva por completitud.
///
/// `id` es obligatorio en todas las filas: si falta en cualquiera, la respuesta entera
/// se rechaza como error de parseo y no se reescribe ningún enlace (nunca se genera
/// `train_id=undefined`).
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Schedule {
    pub id: ScheduleId,
    #[serde(default)]
    pub train_name: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub departure_time: Option<String>,
    #[serde(default)]
    pub arrival_time: Option<String>,
    #[serde(default)]
    pub available_seats: Option<i64>,
}

impl Schedule {
    pub fn new(id: impl Into<ScheduleId>) -> Self {
        Self {
            id: id.into(),
            train_name: None,
            source: None,
            destination: None,
            departure_time: None,
            arrival_time: None,
            available_seats: None,
        }
    }
}
