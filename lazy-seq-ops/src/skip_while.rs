// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Skip-while operator that drops a leading run of accepted items.

use core::pin::Pin;
use core::task::{ready, Context, Poll};
use futures::Stream;
use pin_project::pin_project;

/// Sequence of the upstream items from the first one rejected by `predicate` on.
///
/// The predicate is only consulted until the first rejection; that item and
/// every later item are emitted unconditionally.
#[pin_project]
#[derive(Debug, Clone)]
#[must_use = "sequences do nothing unless consumed"]
pub struct SkipWhile<S, P> {
    #[pin]
    source: S,
    predicate: P,
    yielding: bool,
}

impl<S, P> SkipWhile<S, P> {
    pub(crate) const fn new(source: S, predicate: P) -> Self {
        Self {
            source,
            predicate,
            yielding: false,
        }
    }
}

/// Skips items while `predicate` holds, then emits everything.
///
/// # Examples
///
/// ```rust
/// use lazy_seq_ops::skip_while;
///
/// let rest: Vec<_> = skip_while([1, 2, 3, 4, 5, 0, 1].into_iter(), |n: &i32| *n <= 2).collect();
/// assert_eq!(rest, vec![3, 4, 5, 0, 1]);
/// ```
pub const fn skip_while<S, P>(source: S, predicate: P) -> SkipWhile<S, P> {
    SkipWhile::new(source, predicate)
}

impl<S, P> Iterator for SkipWhile<S, P>
where
    S: Iterator,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        if self.yielding {
            return self.source.next();
        }
        loop {
            let item = self.source.next()?;
            if !(self.predicate)(&item) {
                self.yielding = true;
                return Some(item);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.source.size_hint();
        if self.yielding {
            (lower, upper)
        } else {
            (0, upper)
        }
    }
}

impl<S, P> Stream for SkipWhile<S, P>
where
    S: Stream,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<S::Item>> {
        let mut this = self.project();
        if *this.yielding {
            return this.source.poll_next(cx);
        }
        loop {
            match ready!(this.source.as_mut().poll_next(cx)) {
                Some(item) if (this.predicate)(&item) => {}
                Some(item) => {
                    *this.yielding = true;
                    return Poll::Ready(Some(item));
                }
                None => return Poll::Ready(None),
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.source.size_hint();
        if self.yielding {
            (lower, upper)
        } else {
            (0, upper)
        }
    }
}
