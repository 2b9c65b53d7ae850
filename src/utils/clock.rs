//! Wall-clock access for time-dependent command output.

/// Current date and time formatted for display.
///
/// In the browser this uses the visitor's locale (`Date.toLocaleString`).
/// Elsewhere it falls back to a UTC `YYYY-MM-DD HH:MM:SS` rendering.
#[cfg(target_arch = "wasm32")]
pub fn now_locale() -> String {
    js_sys::Date::new_0()
        .to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED)
        .into()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_locale() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    super::format::format_datetime(secs)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_now_locale_shape() {
        let now = now_locale();
        assert_eq!(now.len(), "YYYY-MM-DD HH:MM:SS".len());
        assert_eq!(&now[4..5], "-");
        assert_eq!(&now[10..11], " ");
    }
}
