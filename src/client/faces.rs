//! Promise-style and reactive faces over one spawned call.
//!
//! Both types wrap a single spawned execution of the client engine. They are
//! mechanical adapters: no retries, no extra attempts, and dropping either
//! aborts the underlying task without emitting anything.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::task::JoinHandle;
use tokio_stream::Stream;

/// Promise face: resolves exactly once with the call's result.
///
/// Created by [`super::RestClient::call_future`] (and the DNS resolver's
/// future face). The underlying call starts immediately on the ambient tokio
/// runtime; awaiting the future observes its completion. Dropping the future
/// before completion aborts the call, and no value is ever produced.
#[derive(Debug)]
pub struct CallFuture<T, E> {
    handle: JoinHandle<Result<T, E>>,
    finished: bool,
}

impl<T, E> CallFuture<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Spawns `call` onto the ambient runtime.
    ///
    /// Must be called from within a tokio runtime.
    pub(crate) fn spawn<F>(call: F) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        Self {
            handle: tokio::spawn(call),
            finished: false,
        }
    }
}

impl<T, E> Future for CallFuture<T, E> {
    type Output = Result<T, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        match Pin::new(&mut this.handle).poll(cx) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(Ok(result)) => {
                this.finished = true;
                Poll::Ready(result)
            }
            Poll::Ready(Err(join_error)) => {
                this.finished = true;
                if join_error.is_panic() {
                    std::panic::resume_unwind(join_error.into_panic());
                }
                // Abort only happens in Drop, after which poll is unreachable
                unreachable!("call task cancelled while still owned")
            }
        }
    }
}

impl<T, E> Drop for CallFuture<T, E> {
    fn drop(&mut self) {
        if !self.finished {
            self.handle.abort();
        }
    }
}

/// Reactive face: emits the call's result once, then completes.
///
/// Created by [`super::RestClient::call_stream`]. The stream yields exactly
/// one `Result` item and then ends; errors travel as an item, not as a
/// stream failure. Dropping the stream before the item is yielded aborts the
/// call.
#[derive(Debug)]
pub struct CallStream<T, E> {
    handle: Option<JoinHandle<Result<T, E>>>,
}

impl<T, E> CallStream<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Spawns `call` onto the ambient runtime.
    ///
    /// Must be called from within a tokio runtime.
    pub(crate) fn spawn<F>(call: F) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        Self {
            handle: Some(tokio::spawn(call)),
        }
    }
}

impl<T, E> Stream for CallStream<T, E> {
    type Item = Result<T, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        let Some(handle) = this.handle.as_mut() else {
            return Poll::Ready(None);
        };

        match Pin::new(handle).poll(cx) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(Ok(result)) => {
                this.handle = None;
                Poll::Ready(Some(result))
            }
            Poll::Ready(Err(join_error)) => {
                this.handle = None;
                if join_error.is_panic() {
                    std::panic::resume_unwind(join_error.into_panic());
                }
                unreachable!("call task cancelled while still owned")
            }
        }
    }
}

impl<T, E> Drop for CallStream<T, E> {
    fn drop(&mut self) {
        if let Some(handle) = &self.handle {
            handle.abort();
        }
    }
}
