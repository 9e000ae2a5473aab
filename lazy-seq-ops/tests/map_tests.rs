// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::{stream, StreamExt};
use lazy_seq_ops::map;
use lazy_seq_test_utils::{
    assert_no_element_emitted, assert_stream_ended, counted_mapper, suspending_iter,
    test_channel,
    test_data::{person_alice, person_bob},
    unwrap_stream, CountingIter, Person,
};

#[test]
fn test_map_transforms_each_element_in_order() {
    // Arrange
    let source = vec![1, 2, 3].into_iter();

    // Act
    let mapped: Vec<_> = map(source, |x: i32| x + 1).collect();

    // Assert
    assert_eq!(mapped, vec![2, 3, 4]);
}

#[test]
fn test_map_pulls_one_upstream_item_per_output() {
    // Arrange
    let (source, pulled) = CountingIter::new(1..);
    let (mapper, calls) = counted_mapper(|x: u64| x * 10);
    let mut mapped = map(source, mapper);

    // Act
    let first_two = (mapped.next(), mapped.next());

    // Assert
    assert_eq!(first_two, (Some(10), Some(20)));
    assert_eq!(pulled.get(), 2);
    assert_eq!(calls.get(), 2);
}

#[test]
fn test_map_over_empty_never_calls_mapper() {
    // Arrange
    let (mapper, calls) = counted_mapper(|p: Person| p.age);

    // Act
    let ages: Vec<_> = map(Vec::<Person>::new().into_iter(), mapper).collect();

    // Assert
    assert!(ages.is_empty());
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_map_size_hint_follows_upstream() {
    let mapped = map(vec![1, 2, 3].into_iter(), |x: i32| x);
    assert_eq!(mapped.size_hint(), (3, Some(3)));
}

#[tokio::test]
async fn test_map_stream_transforms_each_element() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<Person>();
    let mut names = map(stream, |p: Person| p.name);

    // Act
    tx.send(person_alice())?;
    tx.send(person_bob())?;

    // Assert
    assert_eq!(unwrap_stream(&mut names, 100).await, Some("Alice".to_string()));
    assert_eq!(unwrap_stream(&mut names, 100).await, Some("Bob".to_string()));

    drop(tx);
    assert_stream_ended(&mut names, 100).await;

    Ok(())
}

#[tokio::test]
async fn test_map_stream_stays_pending_while_upstream_is_pending() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<i32>();
    let (mapper, calls) = counted_mapper(|x: i32| x * 2);
    let mut doubled = map(stream, mapper);

    // Act & Assert
    assert_no_element_emitted(&mut doubled, 50).await;
    assert_eq!(calls.get(), 0);

    tx.send(21)?;
    assert_eq!(unwrap_stream(&mut doubled, 100).await, Some(42));
    assert_eq!(calls.get(), 1);

    Ok(())
}

#[tokio::test]
async fn test_map_is_transparent_to_suspension() {
    // Arrange
    let mapped = map(suspending_iter(vec![1, 2, 3]), |x: i32| x + 1);

    // Act
    let values: Vec<_> = mapped.collect().await;

    // Assert
    assert_eq!(values, vec![2, 3, 4]);
}

#[tokio::test]
async fn test_map_stream_over_empty_ends() {
    let mut mapped = map(stream::empty::<i32>(), |x: i32| x);
    assert_stream_ended(&mut mapped, 100).await;
}
