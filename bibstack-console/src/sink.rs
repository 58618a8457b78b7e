//! The application-wide log buffer.
//!
//! An explicit, owned, append-only sink passed by reference to producers
//! and consumers. One lock covers the records and the observer list, so
//! appends from background threads are neither lost nor torn and observer
//! registration cannot race an append. Observer callbacks run
//! synchronously on the appending thread, after the lock is released.

use crate::record::LogRecord;
use std::sync::{Arc, Mutex};

/// Observes appends to a [`LogSink`].
pub trait LogObserver: Send + Sync {
    /// Called once per appended record, in append order, on the appending
    /// thread.
    fn appended(&self, record: &LogRecord);
}

#[derive(Default)]
struct SinkState {
    records: Vec<LogRecord>,
    observers: Vec<Arc<dyn LogObserver>>,
}

/// Append-only buffer of log records with observer subscription.
///
/// Records are never removed or reordered; the buffer lives as long as the
/// application. Consumers either take a [`snapshot`](Self::snapshot) or
/// [`attach`](Self::attach) an observer for a live mirror.
#[derive(Default)]
pub struct LogSink {
    state: Mutex<SinkState>,
}

impl LogSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record and notifies every observer.
    pub fn append(&self, record: LogRecord) {
        let observers = {
            let mut state = self.state.lock().unwrap();
            state.records.push(record.clone());
            state.observers.clone()
        };
        for observer in observers {
            observer.appended(&record);
        }
    }

    /// Registers an observer and returns the records appended so far.
    ///
    /// Registration and snapshot happen under one lock: every record is
    /// either in the returned list or delivered through the observer,
    /// never both and never neither.
    pub fn attach(&self, observer: Arc<dyn LogObserver>) -> Vec<LogRecord> {
        let mut state = self.state.lock().unwrap();
        state.observers.push(observer);
        state.records.clone()
    }

    /// A copy of all records, in append order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<LogRecord> {
        self.state.lock().unwrap().records.clone()
    }

    /// Number of records appended so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.lock().unwrap().records.len()
    }

    /// True while nothing has been appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
