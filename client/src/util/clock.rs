//! Wall-clock helpers: message ids and their time labels.

/// Current time in epoch milliseconds.
#[must_use]
pub fn now_ms() -> i64 {
    #[cfg(feature = "csr")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let ms = js_sys::Date::now() as i64;
        ms
    }
    #[cfg(not(feature = "csr"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |dur| i64::try_from(dur.as_millis()).unwrap_or(0))
    }
}

/// Human-readable "now", used for transcript headers.
#[must_use]
pub fn now_label() -> String {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::new_0()
            .to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED)
            .into()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}

/// Format a message id (epoch milliseconds as a decimal string) as an
/// `HH:MM` label. In the browser this uses local time; elsewhere it falls
/// back to UTC integer math. Unparseable or non-positive ids render a
/// placeholder instead of a bogus time.
#[must_use]
pub fn format_hhmm(epoch_ms_text: &str) -> String {
    let Ok(ms) = epoch_ms_text.parse::<i64>() else {
        return "--:--".to_owned();
    };
    if ms <= 0 {
        return "--:--".to_owned();
    }

    #[cfg(feature = "csr")]
    {
        #[allow(clippy::cast_precision_loss)]
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(ms as f64));
        format!("{:02}:{:02}", date.get_hours(), date.get_minutes())
    }
    #[cfg(not(feature = "csr"))]
    {
        let total_secs = ms / 1000;
        let hours = (total_secs / 3600) % 24;
        let mins = (total_secs / 60) % 60;
        format!("{hours:02}:{mins:02}")
    }
}

#[cfg(test)]
#[path = "clock_test.rs"]
mod tests;
