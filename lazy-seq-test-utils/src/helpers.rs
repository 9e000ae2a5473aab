// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream::StreamExt;
use futures::Stream;
use std::time::Duration;
use tokio::time::timeout;

/// Waits up to `timeout_ms` for the next item.
///
/// Returns `None` both when the stream ended and when it timed out.
pub async fn unwrap_stream<S>(stream: &mut S, timeout_ms: u64) -> Option<S::Item>
where
    S: Stream + Unpin,
{
    timeout(Duration::from_millis(timeout_ms), stream.next())
        .await
        .ok()
        .flatten()
}

/// Asserts that the stream reports completion within `timeout_ms`.
pub async fn assert_stream_ended<S>(stream: &mut S, timeout_ms: u64)
where
    S: Stream + Unpin,
{
    match timeout(Duration::from_millis(timeout_ms), stream.next()).await {
        Ok(None) => {}
        Ok(Some(_)) => panic!("Expected stream to end, but it emitted an item"),
        Err(_) => panic!("Expected stream to end, but it timed out"),
    }
}

/// Asserts that the stream neither emits nor ends within `timeout_ms`.
pub async fn assert_no_element_emitted<S>(stream: &mut S, timeout_ms: u64)
where
    S: Stream + Unpin,
{
    if let Ok(outcome) = timeout(Duration::from_millis(timeout_ms), stream.next()).await {
        panic!(
            "Expected a pending stream, but it {}",
            if outcome.is_some() { "emitted an item" } else { "ended" }
        );
    }
}
