//! Console Logger
//!
//! `log` sink that writes to the browser console as `[UndoBar] message`.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

const LOG_TAG: &str = "[UndoBar]";

static LOGGER: ConsoleLogger = ConsoleLogger;

pub struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from(format_line(record.level(), &record.args().to_string()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger. A logger already installed (by this or any
/// other module on the page) is left in place; only the level is updated.
pub fn init(level: LevelFilter) {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}

fn format_line(level: Level, message: &str) -> String {
    match level {
        Level::Debug | Level::Trace => format!("{} {} {}", LOG_TAG, level, message),
        _ => format!("{} {}", LOG_TAG, message),
    }
}
