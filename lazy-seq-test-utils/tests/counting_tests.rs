// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::{stream, StreamExt};
use lazy_seq_test_utils::{
    counted_mapper, counted_predicate, CountingIter, CountingStream, RestartingIter,
};

#[test]
fn test_counting_iter_counts_only_produced_items() {
    let (mut source, pulled) = CountingIter::new(vec![1, 2]);

    assert_eq!(source.next(), Some(1));
    assert_eq!(source.next(), Some(2));
    assert_eq!(source.next(), None);

    assert_eq!(pulled.get(), 2);
}

#[tokio::test]
async fn test_counting_stream_counts_polled_items() {
    let (mut source, pulled) = CountingStream::new(stream::iter(0..10));

    assert_eq!(source.next().await, Some(0));
    assert_eq!(source.next().await, Some(1));

    assert_eq!(pulled.get(), 2);
}

#[test]
fn test_restarting_iter_counts_every_call_and_starts_over() {
    let (mut source, calls) = RestartingIter::new(vec!['a', 'b']);

    assert_eq!(source.next(), Some('a'));
    assert_eq!(source.next(), Some('b'));
    assert_eq!(source.next(), None);
    assert_eq!(source.next(), Some('a'));

    assert_eq!(calls.get(), 4);
}

#[test]
fn test_counted_callbacks() {
    let (mut is_even, predicate_calls) = counted_predicate(|n: &i32| n % 2 == 0);
    let (mut double, mapper_calls) = counted_mapper(|n: i32| n * 2);

    assert!(!is_even(&1));
    assert!(is_even(&2));
    assert_eq!(double(4), 8);

    assert_eq!(predicate_calls.get(), 2);
    assert_eq!(mapper_calls.get(), 1);
}
