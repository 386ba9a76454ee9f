//! Rate limiting for high-frequency input callbacks (pointer move, scroll,
//! resize)
//!
//! - [`Debouncer`] fires once, with the latest arguments, after the input
//!   has been quiet for the wait period. Needs a tokio runtime to schedule
//!   its timer.
//! - [`Throttle`] fires on the leading edge and drops calls until the
//!   interval has passed.

mod debounce;
mod throttle;

use std::sync::{Mutex, MutexGuard, PoisonError};

pub use debounce::{debounce, Debouncer};
pub use throttle::{throttle, Throttle};

/// A panicking callback must not wedge the limiter
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
