use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;

use super::lock;

type Callback<A> = Arc<dyn Fn(A) + Send + Sync>;

/// Trailing-edge debouncer owning at most one pending timer
///
/// Every `call` cancels the pending timer and schedules a new one, so the
/// callback runs once `wait` has passed without further calls, with the
/// arguments of the last call. Dropping the debouncer leaves an already
/// scheduled timer to fire.
pub struct Debouncer<A> {
    callback: Callback<A>,
    wait: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<A: Send + 'static> Debouncer<A> {
    pub fn new<F>(callback: F, wait: Duration) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            callback: Arc::new(callback),
            wait,
            pending: Mutex::new(None),
        }
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }

    /// Restart the quiet period with `args` as the pending arguments
    ///
    /// Must be called from within a tokio runtime.
    pub fn call(&self, args: A) {
        let callback = Arc::clone(&self.callback);
        // The deadline is fixed here, not when the task is first polled
        let delay = tokio::time::sleep(self.wait);

        let mut pending = lock(&self.pending);
        if let Some(previous) = pending.take() {
            previous.abort();
        }
        *pending = Some(tokio::spawn(async move {
            delay.await;
            callback(args);
        }));
    }

    /// Whether a call is waiting for its quiet period to end
    pub fn is_pending(&self) -> bool {
        lock(&self.pending)
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Drop the pending call, if any, without running it
    pub fn cancel(&self) {
        if let Some(handle) = lock(&self.pending).take() {
            handle.abort();
        }
    }
}

/// Wrap `callback` in a [`Debouncer`] and return it as a plain closure
pub fn debounce<A, F>(callback: F, wait: Duration) -> impl Fn(A)
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    let debouncer = Debouncer::new(callback, wait);
    move |args| debouncer.call(args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    fn recorder() -> (Arc<Mutex<Vec<u32>>>, impl Fn(u32) + Send + Sync + 'static) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&calls);
        (calls, move |v| sink.lock().unwrap().push(v))
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_fires_once_with_last_args() {
        let (calls, cb) = recorder();
        let debouncer = Debouncer::new(cb, Duration::from_millis(100));

        for i in 1..=5 {
            debouncer.call(i);
            sleep(Duration::from_millis(50)).await;
        }
        assert!(calls.lock().unwrap().is_empty());
        assert!(debouncer.is_pending());

        sleep(Duration::from_millis(60)).await;
        assert_eq!(*calls.lock().unwrap(), vec![5]);
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_bursts_fire_separately() {
        let (calls, cb) = recorder();
        let debouncer = Debouncer::new(cb, Duration::from_millis(100));

        debouncer.call(1);
        sleep(Duration::from_millis(150)).await;
        debouncer.call(2);
        sleep(Duration::from_millis(150)).await;

        assert_eq!(*calls.lock().unwrap(), vec![1, 2]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_pending_call() {
        let (calls, cb) = recorder();
        let debouncer = Debouncer::new(cb, Duration::from_millis(100));

        debouncer.call(1);
        debouncer.cancel();
        assert!(!debouncer.is_pending());
        sleep(Duration::from_millis(200)).await;

        assert!(calls.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_debouncer_still_fires() {
        let (calls, cb) = recorder();
        {
            let debounced = debounce(cb, Duration::from_millis(100));
            debounced(7);
            debounced(8);
        }
        sleep(Duration::from_millis(150)).await;

        assert_eq!(*calls.lock().unwrap(), vec![8]);
    }
}
