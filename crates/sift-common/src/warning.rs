//! Deduplicated warnings.
//!
//! Repeated misuse (an unknown filter name inside a loop, say) should not
//! flood the log. Each unique message is forwarded to `log::warn!` once.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// Global set of warnings we've already emitted (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about questionable input (logs once per unique message).
///
/// # Example
/// ```ignore
/// warn_once("filter", "unknown filter type 'intger', treating as string");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let should_print = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if should_print {
        log::warn!(target: "sift", "[{component}] {message}");
    }
}

/// Clear all recorded warnings.
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
