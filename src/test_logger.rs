// Logger de tests: guarda los registros por hilo para poder comprobar diagnósticos

use std::cell::RefCell;
use std::sync::Once;

use log::{Level, LevelFilter, Log, Metadata, Record};

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = RefCell::new(Vec::new());
}

struct CapturingLogger;

impl Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS.with(|r| r.borrow_mut().push((record.level(), record.args().to_string())));
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger;
static INIT: Once = Once::new();

/// Instala el logger (una vez por proceso) y vacía los registros del hilo actual
pub fn capture() {
    INIT.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
    });
    RECORDS.with(|r| r.borrow_mut().clear());
}

/// Registros emitidos por el hilo actual desde `capture()`
pub fn records() -> Vec<(Level, String)> {
    RECORDS.with(|r| r.borrow().clone())
}

pub fn has(level: Level, fragment: &str) -> bool {
    records().iter().any(|(l, msg)| *l == level && msg.contains(fragment))
}
