use std::fmt;

use crate::models::{Schedule, ScheduleId};
use crate::utils::constants::{BOOKING_PAGE, LOGIN_PAGE, TRAIN_ID_PARAM};

/// Destino de los enlaces de reserva
#[derive(Clone, PartialEq, Debug)]
pub enum LinkTarget {
    /// `booking.html?train_id=<id>`
    Booking(ScheduleId),
    /// `login.html`
    Login,
}

impl LinkTarget {
    /// Decide el destino a partir de los horarios y del estado de sesión.
    ///
    /// Solo cuenta el primer horario, en el orden del backend. Sin horarios no hay destino.
    pub fn resolve(schedules: &[Schedule], logged_in: bool) -> Option<Self> {
        let first = schedules.first()?;
        if logged_in {
            Some(LinkTarget::Booking(first.id.clone()))
        } else {
            Some(LinkTarget::Login)
        }
    }

    pub fn href(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for LinkTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkTarget::Booking(id) => write!(f, "{}?{}={}", BOOKING_PAGE, TRAIN_ID_PARAM, id),
            LinkTarget::Login => f.write_str(LOGIN_PAGE),
        }
    }
}
