//! Routes the `log` facade used by `caption_core` to the browser console.

use log::{Level, LevelFilter, Log, Metadata, Record};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        match record.level() {
            Level::Error => leptos::logging::error!("[{}] {}", record.target(), record.args()),
            Level::Warn => leptos::logging::warn!("[{}] {}", record.target(), record.args()),
            _ => leptos::logging::log!("[{}] {}", record.target(), record.args()),
        }
    }

    fn flush(&self) {}
}

pub fn init() {
    match log::set_logger(&LOGGER) {
        Ok(()) => log::set_max_level(LevelFilter::Info),
        Err(e) => leptos::logging::warn!("Console logger already installed: {}", e),
    }
}
