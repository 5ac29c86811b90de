#![cfg(feature = "tracing")]

//! Integration tests for the `tracing` feature.
//!
//! Events are captured by a `tracing-subscriber` fmt layer writing into a
//! shared buffer.

use rstest::rstest;
use seqops::nested;
use seqops::sequence::{Depth, ReduceError, flat, reduce, try_map};
use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct CapturedOutput(Arc<Mutex<Vec<u8>>>);

impl CapturedOutput {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for CapturedOutput {
    fn write(&mut self, buffer: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buffer);
        Ok(buffer.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedOutput {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture<R>(operation: impl FnOnce() -> R) -> (R, String) {
    let output = CapturedOutput::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(output.clone())
        .finish();
    let result = tracing::subscriber::with_default(subscriber, operation);
    (result, output.contents())
}

#[rstest]
fn test_reduce_logs_empty_sequence() {
    let empty: Vec<i32> = Vec::new();
    let (result, logs) = capture(|| {
        reduce(&empty, |accumulator, element, _, _| accumulator + element, None)
    });
    assert_eq!(result, Err(ReduceError::EmptySequence));
    assert!(logs.contains("reduce called on an empty sequence without an initial value"));
}

#[rstest]
fn test_reduce_success_is_silent() {
    let (result, logs) = capture(|| {
        reduce(&[1, 2], |accumulator, element, _, _| accumulator + element, None)
    });
    assert_eq!(result, Ok(3));
    assert!(logs.is_empty());
}

#[rstest]
fn test_flat_traces_depth() {
    let tree = nested![1, [2]];
    let (flattened, logs) = capture(|| flat(&tree, Depth::Unbounded));
    assert_eq!(flattened, nested![1, 2]);
    assert!(logs.contains("flattening sequence"));
    assert!(logs.contains("Unbounded"));
}

#[rstest]
fn test_try_map_logs_failing_index() {
    let (result, logs) = capture(|| try_map(&["1", "x"], |text, _, _| text.parse::<i32>()));
    assert!(result.is_err());
    assert!(logs.contains("callback returned an error"));
    assert!(logs.contains("index=1"));
    assert!(logs.contains("try_map"));
}
