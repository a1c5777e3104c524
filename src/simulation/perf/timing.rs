//! Time sources. `Date.now()` in the browser, the std clocks elsewhere.

/// Wall-clock seconds, the time base frames are measured in
pub(crate) fn now_secs() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() / 1000.0
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs_f64())
            .unwrap_or(0.0)
    }
}

/// Milliseconds since `started` (a `now_secs()` reading), never negative.
pub(crate) fn elapsed_ms(started: f64) -> f64 {
    ((now_secs() - started) * 1000.0).max(0.0)
}
