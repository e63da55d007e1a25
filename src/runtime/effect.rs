use std::future::Future;
use std::time::Duration;

use futures_util::future::BoxFuture;
use futures_util::FutureExt;

use super::handle::RequestHandle;

/// Timer-stage cancellation flag for a pending debounce delay.
///
/// Cancelling only suppresses the delayed trigger. A request that was already
/// issued when the timer elapsed keeps going.
#[derive(Clone, Debug, Default)]
pub struct Debouncer(RequestHandle);

impl Debouncer {
    pub fn cancel(&self) {
        self.0.cancel()
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.is_cancelled()
    }
}

/// What a reducer asks the store to do next. Futures resolve to `None` when
/// their completion was suppressed by cancellation.
pub enum Effect<Action> {
    Nothing,
    Action(Action),
    Future(BoxFuture<'static, Option<Action>>),
    Multiple(Vec<Effect<Action>>),
}

impl<Action: Send + 'static> Effect<Action> {
    pub const NONE: Self = Effect::Nothing;

    pub fn action(action: Action) -> Self {
        Effect::Action(action)
    }

    /// Run a future to completion and feed the mapped result back in. Only
    /// the owning store's teardown can stop the completion dispatch.
    pub fn future<T, F, M>(future: F, map: M) -> Self
    where
        T: Send + 'static,
        F: Future<Output = T> + Send + 'static,
        M: FnOnce(T) -> Action + Send + 'static,
    {
        Effect::Future(async move { Some(map(future.await)) }.boxed())
    }

    /// One cancellable request unit: like [`Effect::future`], but the given
    /// handle suppresses the completion action when cancelled before the
    /// future resolved.
    pub fn request<T, F, M>(future: F, map: M, handle: RequestHandle) -> Self
    where
        T: Send + 'static,
        F: Future<Output = T> + Send + 'static,
        M: FnOnce(T) -> Action + Send + 'static,
    {
        Effect::Future(
            async move {
                let value = future.await;
                if handle.is_cancelled() {
                    return None;
                }
                Some(map(value))
            }
            .boxed(),
        )
    }

    /// Trailing-edge debounce: dispatch `action` after `delay` unless the
    /// debouncer was cancelled in the meantime.
    pub fn debounce(delay: Duration, action: Action, debouncer: Debouncer) -> Self {
        Effect::Future(
            async move {
                tokio::time::sleep(delay).await;
                if debouncer.is_cancelled() {
                    return None;
                }
                Some(action)
            }
            .boxed(),
        )
    }

    pub fn merge2(a: Self, b: Self) -> Self {
        Effect::Multiple(vec![a, b])
    }

    pub fn merge3(a: Self, b: Self, c: Self) -> Self {
        Effect::Multiple(vec![a, b, c])
    }
}
