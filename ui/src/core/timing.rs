//! Timer helpers shared by the sections (carousel fallback, banner, scroll restore).

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    let ms = u32::try_from(ms).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

/// Wait `ms`, then run `redeem` (typically handing a ticket back to its state).
pub async fn after_ms<R>(ms: u64, redeem: impl FnOnce() -> R) -> R {
    sleep_ms(ms).await;
    redeem()
}
