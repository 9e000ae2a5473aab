// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::StreamExt;
use lazy_seq_ops::try_map;
use lazy_seq_test_utils::{suspending_iter, CountingIter, CountingStream};

fn parse(raw: &str) -> Result<i32, std::num::ParseIntError> {
    raw.parse()
}

#[test]
fn test_try_map_passes_successes_through() {
    let parsed: Result<Vec<_>, _> = try_map(vec!["1", "2", "3"].into_iter(), parse).collect();
    assert_eq!(parsed.ok(), Some(vec![1, 2, 3]));
}

#[test]
fn test_try_map_surfaces_first_failure_and_stops_pulling() {
    // Arrange
    let (source, pulled) = CountingIter::new(vec!["1", "x", "3", "y"]);
    let mut parsed = try_map(source, parse);

    // Act
    let first = parsed.next();
    let failure = parsed.next();
    let after_failure = parsed.next();

    // Assert
    assert!(matches!(first, Some(Ok(1))));
    assert!(matches!(failure, Some(Err(_))));
    assert!(after_failure.is_none());
    assert_eq!(pulled.get(), 2);
}

#[test]
fn test_try_map_collect_short_circuits() {
    // Arrange
    let (source, pulled) = CountingIter::new(vec!["7", "oops", "9"]);

    // Act
    let parsed: Result<Vec<i32>, _> = try_map(source, parse).collect();

    // Assert
    assert!(parsed.is_err());
    assert_eq!(pulled.get(), 2);
}

#[tokio::test]
async fn test_try_map_stream_ends_after_failure() {
    // Arrange
    let (source, pulled) = CountingStream::new(suspending_iter(vec!["4", "bad", "6"]));

    // Act
    let results: Vec<_> = try_map(source, parse).collect().await;

    // Assert
    assert_eq!(results.len(), 2);
    assert!(matches!(results[0], Ok(4)));
    assert!(results[1].is_err());
    assert_eq!(pulled.get(), 2);
}
