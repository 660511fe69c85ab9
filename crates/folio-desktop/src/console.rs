//! Browser console output for `tracing` events

use std::fmt::{self, Write as _};
use std::sync::Once;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::Registry;
use wasm_bindgen::JsValue;
use web_sys::console;

#[cfg(debug_assertions)]
const MAX_LEVEL: LevelFilter = LevelFilter::DEBUG;
#[cfg(not(debug_assertions))]
const MAX_LEVEL: LevelFilter = LevelFilter::INFO;

/// Route `tracing` output and panics to the browser console
///
/// Safe to call more than once; only the first call installs anything, and
/// a subscriber installed by the host page is left in place.
pub fn init() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        let subscriber = Registry::default().with(MAX_LEVEL).with(ConsoleLayer);
        if tracing::subscriber::set_global_default(subscriber).is_err() {
            console::debug_1(&JsValue::from_str("tracing subscriber already installed"));
        }
    });
}

/// Writes each event as one console line at the matching console level
struct ConsoleLayer;

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let line = JsValue::from_str(&render(event));
        match *event.metadata().level() {
            Level::ERROR => console::error_1(&line),
            Level::WARN => console::warn_1(&line),
            Level::INFO => console::info_1(&line),
            _ => console::debug_1(&line),
        }
    }
}

/// `[target] message key=value ...`
fn render(event: &Event<'_>) -> String {
    let mut line = Line::default();
    event.record(&mut line);
    format!("[{}] {}{}", event.metadata().target(), line.message, line.fields)
}

#[derive(Default)]
struct Line {
    message: String,
    fields: String,
}

impl Visit for Line {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}
