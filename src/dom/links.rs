// ============================================================================
// BOOKING LINKS - Escritura del destino en los enlaces de reserva
// ============================================================================

use web_sys::Element;

use crate::dom::{get_element_by_id, query_selector_all, set_attribute};
use crate::utils::constants::{
    BOOKING_LINK_SELECTOR, HREF_ATTRIBUTE, MAIN_BOOK_BUTTON_ID, SIDEBAR_BOOKING_SELECTOR,
};

/// Grupos de elementos que apuntan a la reserva
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LinkSlot {
    /// `#mainBookBtn` (opcional, único)
    MainButton,
    /// `.sidebar a[href="booking.html"]`
    Sidebar,
    /// `a.booking-link`
    Marked,
}

impl LinkSlot {
    /// Orden de aplicación
    pub const ALL: [LinkSlot; 3] = [LinkSlot::MainButton, LinkSlot::Sidebar, LinkSlot::Marked];

    pub fn label(&self) -> &'static str {
        match self {
            LinkSlot::MainButton => MAIN_BOOK_BUTTON_ID,
            LinkSlot::Sidebar => SIDEBAR_BOOKING_SELECTOR,
            LinkSlot::Marked => BOOKING_LINK_SELECTOR,
        }
    }
}

/// Vista capaz de reescribir destinos de enlaces
pub trait LinkView {
    /// Sobrescribe el destino de todos los elementos del grupo y devuelve cuántos se escribieron.
    /// Un grupo sin elementos no es un error.
    fn set_destination(&self, slot: LinkSlot, href: &str) -> usize;
}

/// Implementación sobre el DOM real
#[derive(Clone, Copy, Debug, Default)]
pub struct DomLinkView;

impl DomLinkView {
    pub fn new() -> Self {
        Self
    }

    fn elements(slot: LinkSlot) -> Vec<Element> {
        match slot {
            LinkSlot::MainButton => get_element_by_id(MAIN_BOOK_BUTTON_ID).into_iter().collect(),
            LinkSlot::Sidebar | LinkSlot::Marked => match query_selector_all(slot.label()) {
                Ok(elements) => elements,
                Err(e) => {
                    log::warn!("⚠️ [LINKS] querySelectorAll('{}') falló: {:?}", slot.label(), e);
                    Vec::new()
                }
            },
        }
    }
}

impl LinkView for DomLinkView {
    fn set_destination(&self, slot: LinkSlot, href: &str) -> usize {
        let mut written = 0;
        for element in Self::elements(slot) {
            match set_attribute(&element, HREF_ATTRIBUTE, href) {
                Ok(()) => written += 1,
                Err(e) => log::warn!("⚠️ [LINKS] No se pudo escribir href en {}: {:?}", slot.label(), e),
            }
        }
        written
    }
}
