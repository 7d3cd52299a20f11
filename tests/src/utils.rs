#![cfg(test)]
use std::sync::{Arc, Mutex};

use ignite_common::logging::{PRINT_TARGET, RawMessage};
use tracing::{Event, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// One event seen by [`Captured`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Raw(String),
    Message(String),
}

/// Layer that keeps every event emitted while it is the default subscriber.
#[derive(Clone, Default)]
pub struct Captured(Arc<Mutex<Vec<Line>>>);

impl Captured {
    pub fn lines(&self) -> Vec<Line> {
        self.0.lock().unwrap().clone()
    }

    pub fn raw_lines(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter_map(|line| match line {
                Line::Raw(msg) => Some(msg),
                Line::Message(_) => None,
            })
            .collect()
    }

    pub fn messages(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter_map(|line| match line {
                Line::Message(msg) => Some(msg),
                Line::Raw(_) => None,
            })
            .collect()
    }
}

impl<S: Subscriber> Layer<S> for Captured {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = RawMessage::default();
        event.record(&mut visitor);

        let line = match (event.metadata().target() == PRINT_TARGET, visitor) {
            (true, RawMessage { raw_msg: Some(msg), .. }) => Line::Raw(msg),
            (_, RawMessage { message: Some(msg), .. }) => Line::Message(msg),
            _ => return,
        };
        self.0.lock().unwrap().push(line);
    }
}

/// Runs `f` with a capturing subscriber installed for the current thread.
pub fn capture<F: FnOnce()>(f: F) -> Captured {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::registry().with(captured.clone());
    tracing::subscriber::with_default(subscriber, f);
    captured
}

/// Like [`capture`], but only events passing `filter` reach the capture layer.
pub fn capture_filtered<F: FnOnce()>(filter: EnvFilter, f: F) -> Captured {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(captured.clone());
    tracing::subscriber::with_default(subscriber, f);
    captured
}
