use std::time::Duration;

use async_trait::async_trait;

/// Suspends the submitting flow, used to fake network latency when no
/// backend is reachable.
#[async_trait(?Send)]
pub trait Delay {
    async fn wait(&self, duration: Duration);
}

/// Browser timer: resolves once `set_timeout` fires.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutDelay;

#[async_trait(?Send)]
impl Delay for TimeoutDelay {
    async fn wait(&self, duration: Duration) {
        let (done, fired) = futures::channel::oneshot::channel::<()>();
        leptos::prelude::set_timeout(
            move || {
                let _ = done.send(());
            },
            duration,
        );
        let _ = fired.await;
    }
}
