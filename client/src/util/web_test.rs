use std::pin::pin;
use std::task::{Context, Poll, Waker};

use super::*;

#[test]
fn clipboard_write_outside_browser_is_refused() {
    let mut cx = Context::from_waker(Waker::noop());
    let write = pin!(write_clipboard("Agent: Hello.".to_owned()));
    match write.poll(&mut cx) {
        Poll::Ready(Err(ClipboardError(reason))) => assert_eq!(reason, "not available on server"),
        other => panic!("expected immediate refusal, got {other:?}"),
    }
}

#[test]
fn clock_is_zero_outside_browser() {
    assert_eq!(now_ms(), 0);
}
