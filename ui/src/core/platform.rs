//! Thin browser glue. Native builds (desktop shells, SSR, tests) get inert stand-ins.

/// Warm the image cache for every source. Fire-and-forget: no completion tracking,
/// load failures are left to the browser.
#[cfg(target_arch = "wasm32")]
pub fn preload_images<'a>(sources: impl IntoIterator<Item = &'a str>) {
    for src in sources {
        if let Ok(img) = web_sys::HtmlImageElement::new() {
            img.set_src(src);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn preload_images<'a>(sources: impl IntoIterator<Item = &'a str>) {
    let count = sources.into_iter().count();
    tracing::debug!(count, "image preload skipped outside the browser");
}

/// Blocking user-facing alert.
#[cfg(target_arch = "wasm32")]
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn alert(message: &str) {
    tracing::error!("{message}");
}

/// Current vertical scroll offset of the page.
#[cfg(target_arch = "wasm32")]
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn scroll_y() -> f64 {
    0.0
}

#[cfg(target_arch = "wasm32")]
pub fn scroll_to_y(y: f64) {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, y);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn scroll_to_y(y: f64) {
    tracing::debug!(y, "scroll restore skipped outside the browser");
}
