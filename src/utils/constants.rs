// ============================================================================
// CONSTANTES - Rutas, selectores y claves de almacenamiento
// ============================================================================

/// Base de la API (sobrescribible con API_BASE al compilar)
pub const DEFAULT_API_BASE: &str = "/api";

/// Clave de localStorage cuya presencia indica sesión iniciada
pub const DEFAULT_TOKEN_STORAGE_KEY: &str = "token";

/// Página de reserva (sin parámetros)
pub const BOOKING_PAGE: &str = "booking.html";

/// Página de login
pub const LOGIN_PAGE: &str = "login.html";

/// Parámetro de query con el id del tren
pub const TRAIN_ID_PARAM: &str = "train_id";

/// Botón principal de reserva
pub const MAIN_BOOK_BUTTON_ID: &str = "mainBookBtn";

/// Enlaces de reserva de la barra lateral
pub const SIDEBAR_BOOKING_SELECTOR: &str = ".sidebar a[href=\"booking.html\"]";

/// Anclas marcadas como enlace de reserva (otros elementos con la clase no se tocan)
pub const BOOKING_LINK_SELECTOR: &str = "a.booking-link";

pub const HREF_ATTRIBUTE: &str = "href";
