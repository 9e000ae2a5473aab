// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::StreamExt;
use lazy_seq_ops::take;
use lazy_seq_test_utils::{
    assert_stream_ended, suspending_iter, test_channel,
    test_data::{person_alice, person_bob, person_charlie},
    unwrap_stream, CountingIter, CountingStream, Person,
};

#[test]
fn test_take_limits_items() {
    let taken: Vec<_> = take(vec![1, 2, 3, 4, 5].into_iter(), 3).collect();
    assert_eq!(taken, vec![1, 2, 3]);
}

#[test]
fn test_take_more_than_available() {
    let taken: Vec<_> = take(vec![1, 2, 3].into_iter(), 5).collect();
    assert_eq!(taken, vec![1, 2, 3]);
}

#[test]
fn test_take_zero_never_pulls() {
    // Arrange
    let (source, pulled) = CountingIter::new(1..);

    // Act
    let taken: Vec<u32> = take(source, 0).collect();

    // Assert
    assert!(taken.is_empty());
    assert_eq!(pulled.get(), 0);
}

#[test]
fn test_take_from_empty() {
    let taken: Vec<i32> = take(Vec::new().into_iter(), 4).collect();
    assert!(taken.is_empty());
}

#[test]
fn test_take_releases_infinite_upstream_after_n_items() {
    // Arrange
    let (source, pulled) = CountingIter::new(1..);
    let mut taken = take(source, 3);

    // Act
    let values: Vec<u64> = taken.by_ref().collect();
    let after_end = taken.next();

    // Assert
    assert_eq!(values, vec![1, 2, 3]);
    assert_eq!(after_end, None);
    assert_eq!(pulled.get(), 3);
}

#[test]
fn test_take_size_hint_is_bounded() {
    assert_eq!(take(1..100, 3).size_hint(), (3, Some(3)));
    assert_eq!(take(1..3, 10).size_hint(), (2, Some(2)));
}

#[tokio::test]
async fn test_take_stream_limits_items() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<Person>();
    let mut result = take(stream, 2);

    // Act
    tx.send(person_alice())?;
    tx.send(person_bob())?;
    tx.send(person_charlie())?;

    // Assert
    assert_eq!(unwrap_stream(&mut result, 100).await, Some(person_alice()));
    assert_eq!(unwrap_stream(&mut result, 100).await, Some(person_bob()));
    assert_stream_ended(&mut result, 100).await;

    Ok(())
}

#[tokio::test]
async fn test_take_stream_zero_ends_without_input() {
    // Arrange
    let (_tx, stream) = test_channel::<Person>();
    let mut result = take(stream, 0);

    // Assert
    assert_stream_ended(&mut result, 100).await;
}

#[tokio::test]
async fn test_take_stream_stops_polling_upstream() {
    // Arrange
    let (source, pulled) = CountingStream::new(suspending_iter(1..));

    // Act
    let values: Vec<u32> = take(source, 2).collect().await;

    // Assert
    assert_eq!(values, vec![1, 2]);
    assert_eq!(pulled.get(), 2);
}
