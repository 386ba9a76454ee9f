use std::sync::Mutex;
use std::time::Duration;

use tokio::time::Instant;

use super::lock;

/// Leading-edge throttle
///
/// The first call runs immediately and closes the gate for `interval`.
/// Calls while the gate is closed are dropped, not queued.
pub struct Throttle<A> {
    callback: Box<dyn Fn(A) + Send + Sync>,
    interval: Duration,
    last_fired: Mutex<Option<Instant>>,
}

impl<A> Throttle<A> {
    pub fn new<F>(callback: F, interval: Duration) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            callback: Box::new(callback),
            interval,
            last_fired: Mutex::new(None),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Run the callback if the gate is open; returns whether it ran
    pub fn call(&self, args: A) -> bool {
        let now = Instant::now();
        {
            let mut last_fired = lock(&self.last_fired);
            if let Some(at) = *last_fired {
                if now.duration_since(at) < self.interval {
                    return false;
                }
            }
            *last_fired = Some(now);
        }
        (self.callback)(args);
        true
    }

    /// Reopen the gate immediately
    pub fn reset(&self) {
        *lock(&self.last_fired) = None;
    }
}

/// Wrap `callback` in a [`Throttle`] and return it as a plain closure
pub fn throttle<A, F>(callback: F, interval: Duration) -> impl Fn(A)
where
    F: Fn(A) + Send + Sync + 'static,
{
    let throttle = Throttle::new(callback, interval);
    move |args| {
        throttle.call(args);
    }
}
