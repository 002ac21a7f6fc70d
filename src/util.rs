// Console logging backend for the `log` facade.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

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
        let msg = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&msg),
            Level::Warn => web_sys::console::warn_1(&msg),
            Level::Info => web_sys::console::info_1(&msg),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&msg),
        }
    }

    fn flush(&self) {}
}

/// Route `log` records to the browser console. Calling it again only
/// changes the level.
pub fn init_logging(level: LevelFilter) {
    // Fails only when a logger is already installed, which is fine.
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}

/// Current window size, or an unmeasured viewport outside a browser.
pub fn window_viewport() -> crate::state::Viewport {
    let Some(win) = web_sys::window() else {
        log::debug!("no window; viewport left unmeasured");
        return crate::state::Viewport::default();
    };
    let width = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    crate::state::Viewport::new(width, height)
}

/// True when the event was dispatched on `node` itself, not bubbled up from a child.
pub(crate) fn is_event_from<T: PartialEq>(target: Option<T>, node: Option<T>) -> bool {
    matches!((target, node), (Some(target), Some(node)) if target == node)
}

/// Natural size of an image element, once it has finished decoding.
pub(crate) fn loaded_size(
    complete: bool,
    natural_width: u32,
    natural_height: u32,
) -> Option<(f64, f64)> {
    if !complete || natural_width == 0 || natural_height == 0 {
        return None;
    }
    Some((natural_width as f64, natural_height as f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bubbled_events_are_not_from_the_listening_node() {
        let (carousel, image) = ("carousel", "image");
        assert!(is_event_from(Some(carousel), Some(carousel)));
        assert!(!is_event_from(Some(image), Some(carousel)));
        // the delegation root is neither
        assert!(!is_event_from(Some("root"), Some(image)));
    }

    #[test]
    fn unmounted_node_never_matches() {
        assert!(!is_event_from(Some("carousel"), None));
        assert!(!is_event_from::<&str>(None, None));
    }

    #[test]
    fn size_only_once_loaded() {
        assert_eq!(loaded_size(true, 800, 600), Some((800.0, 600.0)));
        assert_eq!(loaded_size(false, 800, 600), None);
        assert_eq!(loaded_size(true, 0, 0), None);
        assert_eq!(loaded_size(true, 800, 0), None);
    }
}
