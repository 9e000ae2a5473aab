// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::{stream, StreamExt};
use lazy_seq_core::{Nested, NestedStream};
use lazy_seq_ops::{flat, flat_map, flat_map_stream, flat_stream, map};
use lazy_seq_test_utils::{counted_mapper, suspending_iter, test_channel, unwrap_stream};

fn sample() -> Vec<Nested<i32>> {
    // [[1], 2, [[3]]]
    vec![
        Nested::list(vec![Nested::item(1)]),
        Nested::item(2),
        Nested::list(vec![Nested::list(vec![Nested::item(3)])]),
    ]
}

fn items<I: Iterator<Item = Nested<i32>>>(values: I) -> Vec<Option<i32>> {
    values.map(Nested::into_item).collect()
}

#[test]
fn test_flat_depth_two_fully_expands() {
    let flattened = items(flat(sample().into_iter(), 2));
    assert_eq!(flattened, vec![Some(1), Some(2), Some(3)]);
}

#[test]
fn test_flat_depth_one_leaves_deeper_nesting() {
    // Act
    let flattened: Vec<_> = flat(sample().into_iter(), 1).collect();

    // Assert
    assert_eq!(flattened.len(), 3);
    assert_eq!(flattened[0].as_item(), Some(&1));
    assert_eq!(flattened[1].as_item(), Some(&2));
    assert!(flattened[2].is_seq());
}

#[test]
fn test_flat_depth_zero_is_identity() {
    let flattened: Vec<_> = flat(sample().into_iter(), 0).collect();
    assert_eq!(flattened.iter().filter(|value| value.is_seq()).count(), 2);
    assert_eq!(flattened.len(), 3);
}

#[test]
fn test_flat_expands_inner_sequences_lazily() {
    // Arrange
    let (mapper, calls) = counted_mapper(|n: i32| Nested::item(n * 10));
    let inner = Nested::seq(map(1..=100, mapper));
    let mut flattened = flat(vec![Nested::item(0), inner].into_iter(), 1);

    // Act
    let first_two = (flattened.next(), flattened.next());

    // Assert
    assert_eq!(first_two.0.and_then(Nested::into_item), Some(0));
    assert_eq!(first_two.1.and_then(Nested::into_item), Some(10));
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_flat_skips_empty_inner_sequences() {
    let source = vec![
        Nested::list(vec![]),
        Nested::item(1),
        Nested::list(vec![Nested::list(vec![])]),
    ];
    assert_eq!(items(flat(source.into_iter(), 3)), vec![Some(1)]);
}

#[test]
fn test_flat_map_equals_flat_of_map() {
    let expand = |n: i32| {
        if n % 2 == 0 {
            Nested::list(vec![Nested::item(n), Nested::item(n)])
        } else {
            Nested::item(n)
        }
    };

    let via_flat_map = items(flat_map(1..=5, expand));
    let via_flat_of_map = items(flat(map(1..=5, expand), 1));

    assert_eq!(via_flat_map, via_flat_of_map);
    assert_eq!(
        via_flat_map,
        vec![Some(1), Some(2), Some(2), Some(3), Some(4), Some(4), Some(5)]
    );
}

fn sample_stream() -> Vec<NestedStream<i32>> {
    vec![
        NestedStream::list(vec![NestedStream::item(1)]),
        NestedStream::item(2),
        NestedStream::list(vec![NestedStream::list(vec![NestedStream::item(3)])]),
    ]
}

#[tokio::test]
async fn test_flat_stream_depth_two_fully_expands() {
    // Act
    let flattened: Vec<_> = flat_stream(stream::iter(sample_stream()), 2)
        .map(NestedStream::into_item)
        .collect()
        .await;

    // Assert
    assert_eq!(flattened, vec![Some(1), Some(2), Some(3)]);
}

#[tokio::test]
async fn test_flat_stream_inner_suspending_sequences() {
    // Arrange
    let inner = NestedStream::seq(suspending_iter(vec![NestedStream::item(1), NestedStream::item(2)]));
    let outer = suspending_iter(vec![inner, NestedStream::item(3)]);

    // Act
    let flattened: Vec<_> = flat_stream(outer, 1)
        .map(NestedStream::into_item)
        .collect()
        .await;

    // Assert
    assert_eq!(flattened, vec![Some(1), Some(2), Some(3)]);
}

#[tokio::test]
async fn test_flat_map_stream_expands_one_level() -> anyhow::Result<()> {
    // Arrange
    let (tx, source) = test_channel::<u32>();
    let mut repeated = flat_map_stream(source, |n: u32| {
        NestedStream::list((0..n).map(|_| NestedStream::item(n)).collect())
    });

    // Act
    tx.send(0)?;
    tx.send(2)?;

    // Assert
    let first = unwrap_stream(&mut repeated, 100).await;
    let second = unwrap_stream(&mut repeated, 100).await;
    assert_eq!(first.and_then(NestedStream::into_item), Some(2));
    assert_eq!(second.and_then(NestedStream::into_item), Some(2));

    Ok(())
}
