//! Smoke tests for the `tracing` feature.
//!
//! Runs mutations and rejected operations under a test subscriber so that
//! every event the list emits is formatted at least once.

#![cfg(feature = "tracing")]

use rstest::rstest;
use sequence_list::SequenceList;
use tracing_subscriber::EnvFilter;

fn with_subscriber<F: FnOnce()>(body: F) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("sequence_list=trace"))
        .with_test_writer()
        .finish();
    tracing::subscriber::with_default(subscriber, body);
}

#[rstest]
fn test_mutations_emit_events_without_changing_results() {
    with_subscriber(|| {
        let mut list = SequenceList::new();
        list.append(1).prepend(0);
        list.insert_after(1, 2).unwrap();
        assert_eq!(list.take_at(0), Ok(0));
        assert_eq!(list.pop_last(), Ok(2));
        assert_eq!(list.pop_first(), Ok(1));
        list.append(3).clear();
        assert!(list.is_empty());
    });
}

#[rstest]
fn test_rejections_emit_events_and_still_fail() {
    with_subscriber(|| {
        let mut list: SequenceList<i32> = SequenceList::new();
        assert!(list.pop_first().is_err());
        assert!(list.pop_last().is_err());
        assert!(list.at(0).is_err());
        assert!(list.remove_at(3).is_err());
        assert!(list.is_empty());
    });
}
