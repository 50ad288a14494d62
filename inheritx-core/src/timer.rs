//! Async sleep abstraction.
//!
//! The admin login stub waits a fixed artificial delay. Tokio timers do not
//! run in the browser, so the wait goes through [`Timer`]: [`TokioTimer`]
//! on native targets, `TimeoutTimer` (`setTimeout`) in `inheritx-web`.

use std::time::Duration;

use async_trait::async_trait;

/// Something that can wait.
#[async_trait(?Send)]
pub trait Timer {
    /// Complete after `duration`.
    async fn sleep(&self, duration: Duration);
}

/// Timer backed by `tokio::time::sleep`.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioTimer;

#[cfg(not(target_arch = "wasm32"))]
#[async_trait(?Send)]
impl Timer for TokioTimer {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Timer that completes immediately.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImmediateTimer;

#[async_trait(?Send)]
impl Timer for ImmediateTimer {
    async fn sleep(&self, _duration: Duration) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_tokio_timer_waits() {
        let start = std::time::Instant::now();
        TokioTimer.sleep(Duration::from_millis(20)).await;
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[tokio::test]
    async fn test_immediate_timer() {
        ImmediateTimer.sleep(Duration::from_secs(3600)).await;
    }
}
