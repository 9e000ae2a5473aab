// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::Stream;
use pin_project::pin_project;
use std::pin::Pin;
use std::task::{Context, Poll};

/// A stream that returns `Pending` once before every item of its inner stream.
///
/// The waker is signalled immediately, so the stream makes progress under any
/// executor while still forcing every consumer through a suspension point.
#[pin_project]
#[derive(Debug)]
pub struct SuspendingStream<S> {
    #[pin]
    inner: S,
    suspended: bool,
}

impl<S> SuspendingStream<S> {
    pub const fn new(inner: S) -> Self {
        Self {
            inner,
            suspended: false,
        }
    }
}

impl<S: Stream> Stream for SuspendingStream<S> {
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<S::Item>> {
        let this = self.project();
        if !*this.suspended {
            *this.suspended = true;
            cx.waker().wake_by_ref();
            return Poll::Pending;
        }
        let polled = this.inner.poll_next(cx);
        if polled.is_ready() {
            *this.suspended = false;
        }
        polled
    }
}

/// Stream over `values` that suspends before each one.
pub fn suspending_iter<I: IntoIterator>(values: I) -> SuspendingStream<futures::stream::Iter<I::IntoIter>> {
    SuspendingStream::new(futures::stream::iter(values))
}
