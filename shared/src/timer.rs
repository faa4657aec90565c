//! Injectable delay used by the agent client.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::watch;

/// Source of asynchronous delays.
#[async_trait]
pub trait Timer: Send + Sync {
    /// Suspend the caller for `duration` without blocking the thread.
    async fn sleep(&self, duration: Duration);
}

/// Timer backed by the tokio clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioTimer;

#[async_trait]
impl Timer for TokioTimer {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Virtual clock that only moves when [`ManualTimer::advance`] is called.
///
/// Sleeps registered against it resolve once the accumulated advance reaches
/// their deadline, which makes delay-sensitive code deterministic in tests.
#[derive(Debug, Clone)]
pub struct ManualTimer {
    now: Arc<watch::Sender<Duration>>,
}

impl Default for ManualTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualTimer {
    pub fn new() -> Self {
        let (now, _) = watch::channel(Duration::ZERO);
        Self { now: Arc::new(now) }
    }

    /// Virtual time elapsed since creation.
    pub fn elapsed(&self) -> Duration {
        *self.now.borrow()
    }

    /// Move the virtual clock forward, waking any sleep whose deadline passed.
    pub fn advance(&self, by: Duration) {
        self.now.send_modify(|now| *now += by);
    }
}

#[async_trait]
impl Timer for ManualTimer {
    async fn sleep(&self, duration: Duration) {
        let mut now = self.now.subscribe();
        let deadline = *now.borrow_and_update() + duration;
        // The sender lives as long as `self`, so this only ends at the deadline.
        let _ = now.wait_for(|now| *now >= deadline).await;
    }
}
