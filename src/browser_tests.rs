// Tests contra un DOM real: wasm-pack test --headless --firefox

use wasm_bindgen_test::*;

use crate::app::{BookingLinkUpdater, UpdateOutcome};
use crate::dom::{document, get_attribute, get_element_by_id, query_selector_all, DomLinkView, LinkSlot, LinkView};
use crate::models::{LinkTarget, Schedule};
use crate::services::{FetchOutcome, LocalStorageSession, ScheduleSource, SessionSource};
use crate::utils::storage::get_local_storage;

wasm_bindgen_test_configure!(run_in_browser);

const PAGE: &str = r#"
<a id="mainBookBtn" href="booking.html">Reservar</a>
<nav class="sidebar">
  <a href="index.html">Inicio</a>
  <a href="booking.html">Reservas</a>
  <a href="booking.html">Reservar ahora</a>
</nav>
<a href="booking.html">Fuera de la barra</a>
<a class="booking-link" href="#">Promo</a>
<button class="booking-link">Reservar</button>
"#;

fn mount(html: &str) {
    let body = document().and_then(|d| d.body()).unwrap();
    body.set_inner_html(html);
}

fn hrefs(selector: &str) -> Vec<Option<String>> {
    query_selector_all(selector)
        .unwrap()
        .iter()
        .map(|e| get_attribute(e, "href"))
        .collect()
}

struct Fixed(Vec<Schedule>);

impl ScheduleSource for Fixed {
    async fn fetch(&self) -> FetchOutcome {
        FetchOutcome::from_schedules(self.0.clone())
    }
}

#[wasm_bindgen_test]
fn dom_view_writes_every_slot() {
    mount(PAGE);
    let view = DomLinkView::new();

    assert_eq!(view.set_destination(LinkSlot::MainButton, "login.html"), 1);
    assert_eq!(view.set_destination(LinkSlot::Sidebar, "login.html"), 2);
    assert_eq!(view.set_destination(LinkSlot::Marked, "login.html"), 1);

    let main = get_element_by_id("mainBookBtn").unwrap();
    assert_eq!(get_attribute(&main, "href").as_deref(), Some("login.html"));
    assert_eq!(
        hrefs(".sidebar a"),
        vec![
            Some("index.html".to_string()),
            Some("login.html".to_string()),
            Some("login.html".to_string()),
        ]
    );
    assert_eq!(hrefs("a.booking-link"), vec![Some("login.html".to_string())]);
    // el botón con la clase no es un ancla
    assert_eq!(hrefs("button.booking-link"), vec![None]);
    // fuera de .sidebar no se toca
    assert_eq!(hrefs("body > a[href=\"booking.html\"]").len(), 1);
}

#[wasm_bindgen_test]
fn dom_view_skips_missing_elements() {
    mount("<p>sin enlaces</p>");
    let view = DomLinkView::new();
    for slot in LinkSlot::ALL {
        assert_eq!(view.set_destination(slot, "login.html"), 0);
    }
}

#[wasm_bindgen_test]
fn local_storage_presence_decides_session() {
    let storage = get_local_storage().unwrap();
    let session = LocalStorageSession::with_key("booking_links_test_token");

    storage.remove_item("booking_links_test_token").unwrap();
    assert!(!session.is_logged_in());

    storage.set_item("booking_links_test_token", "").unwrap();
    assert!(session.is_logged_in());

    storage.remove_item("booking_links_test_token").unwrap();
}

#[wasm_bindgen_test]
async fn full_run_against_dom() {
    mount(PAGE);
    let storage = get_local_storage().unwrap();
    storage.set_item("booking_links_e2e_token", "abc123").unwrap();

    let updater = BookingLinkUpdater::new(
        Fixed(vec![Schedule::new(42u64)]),
        LocalStorageSession::with_key("booking_links_e2e_token"),
        DomLinkView::new(),
    );
    let outcome = updater.update_booking_links().await;

    assert_eq!(
        outcome,
        UpdateOutcome::Applied { target: LinkTarget::Booking(42u64.into()), written: 4 }
    );
    assert_eq!(hrefs("a.booking-link"), vec![Some("booking.html?train_id=42".to_string())]);
    assert_eq!(hrefs("button.booking-link"), vec![None]);

    storage.remove_item("booking_links_e2e_token").unwrap();
}

#[wasm_bindgen_test]
async fn empty_schedules_leave_dom_untouched() {
    mount(PAGE);
    let updater = BookingLinkUpdater::new(
        Fixed(Vec::new()),
        LocalStorageSession::with_key("booking_links_unused"),
        DomLinkView::new(),
    );

    updater.update_booking_links().await;

    let main = get_element_by_id("mainBookBtn").unwrap();
    assert_eq!(get_attribute(&main, "href").as_deref(), Some("booking.html"));
    assert_eq!(hrefs(".booking-link"), vec![Some("#".to_string()), None]);
}
