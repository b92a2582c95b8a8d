use std::time::Duration;

use bytes::Bytes;
use http_body_util::BodyExt;
use mediacast::http::streams::{cancellable_body, StreamKind, StreamSlots};

#[test]
fn replacing_a_stream_closes_the_previous_one() {
    let slots = StreamSlots::new();
    let first = slots.replace(StreamKind::Audio);
    let second = slots.replace(StreamKind::Audio);
    assert!(first.is_cancelled());
    assert!(!second.is_cancelled());
}

#[test]
fn stream_kinds_are_independent() {
    let slots = StreamSlots::new();
    let audio = slots.replace(StreamKind::Audio);
    let image = slots.replace(StreamKind::Image);
    assert!(!audio.is_cancelled());
    assert!(!image.is_cancelled());
}

#[test]
fn close_all_closes_every_kind() {
    let slots = StreamSlots::new();
    let audio = slots.replace(StreamKind::Audio);
    let image = slots.replace(StreamKind::Image);
    slots.close_all();
    assert!(audio.is_cancelled());
    assert!(image.is_cancelled());
}

#[test]
fn close_all_on_empty_slots_is_harmless() {
    StreamSlots::new().close_all();
}

#[tokio::test]
async fn cancelled_body_ends_early() {
    let slots = StreamSlots::new();
    let token = slots.replace(StreamKind::Audio);
    let body = cancellable_body(
        token,
        futures_util::stream::pending::<std::io::Result<Bytes>>(),
    );

    // Opening the next audio stream ends the pending one
    slots.replace(StreamKind::Audio);

    let collected = tokio::time::timeout(Duration::from_secs(5), body.collect())
        .await
        .expect("body should end once its stream is replaced")
        .unwrap()
        .to_bytes();
    assert!(collected.is_empty());
}

#[tokio::test]
async fn live_body_yields_all_chunks() {
    let slots = StreamSlots::new();
    let token = slots.replace(StreamKind::Image);
    let chunks = vec![
        Ok(Bytes::from_static(b"abc")),
        Ok(Bytes::from_static(b"def")),
    ];
    let body = cancellable_body(token, futures_util::stream::iter(chunks));
    let collected = body.collect().await.unwrap().to_bytes();
    assert_eq!(collected.as_ref(), b"abcdef");
}
