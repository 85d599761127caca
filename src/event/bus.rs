use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use tracing::{debug, warn};

use super::events::{CommentaryEvent, EventKind, MatchEvent, MatchSummary, MinuteUpdate};
use super::handler::{EventError, MatchEventListener};

type Callback<T> = Box<dyn Fn(&T) -> Result<(), EventError> + Send>;

struct Registration<T> {
    name: &'static str,
    callback: Callback<T>,
}

/// Typed fan-out of match events to registered listeners
///
/// One listener list per event kind. Delivery is synchronous and follows
/// registration order; a failing or panicking listener is logged and skipped
/// so the rest still receive the event. There is no unregistration: the bus
/// lives as long as its engine.
#[derive(Default)]
pub struct MatchEventBus {
    minute_listeners: Vec<Registration<MinuteUpdate>>,
    commentary_listeners: Vec<Registration<CommentaryEvent>>,
    end_listeners: Vec<Registration<MatchSummary>>,
}

impl MatchEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_minute_update<F>(&mut self, callback: F)
    where
        F: Fn(&MinuteUpdate) -> Result<(), EventError> + Send + 'static,
    {
        self.minute_listeners.push(Registration {
            name: "minute_update_callback",
            callback: Box::new(callback),
        });
    }

    pub fn on_commentary<F>(&mut self, callback: F)
    where
        F: Fn(&CommentaryEvent) -> Result<(), EventError> + Send + 'static,
    {
        self.commentary_listeners.push(Registration {
            name: "commentary_callback",
            callback: Box::new(callback),
        });
    }

    pub fn on_match_end<F>(&mut self, callback: F)
    where
        F: Fn(&MatchSummary) -> Result<(), EventError> + Send + 'static,
    {
        self.end_listeners.push(Registration {
            name: "match_end_callback",
            callback: Box::new(callback),
        });
    }

    /// Registers one listener for all three event kinds
    pub fn subscribe(&mut self, listener: Arc<dyn MatchEventListener>) {
        let name = listener.name();
        debug!(listener = name, "Registering match event listener");

        let minute = Arc::clone(&listener);
        self.minute_listeners.push(Registration {
            name,
            callback: Box::new(move |update| minute.on_minute_update(update)),
        });

        let commentary = Arc::clone(&listener);
        self.commentary_listeners.push(Registration {
            name,
            callback: Box::new(move |event| commentary.on_commentary(event)),
        });

        self.end_listeners.push(Registration {
            name,
            callback: Box::new(move |summary| listener.on_match_end(summary)),
        });
    }

    pub fn listener_count(&self, kind: EventKind) -> usize {
        match kind {
            EventKind::MinuteUpdate => self.minute_listeners.len(),
            EventKind::Commentary => self.commentary_listeners.len(),
            EventKind::MatchEnd => self.end_listeners.len(),
        }
    }

    /// Delivers an event to every listener of its kind.
    ///
    /// Returns how many listeners handled it without error.
    pub fn emit(&self, event: &MatchEvent) -> usize {
        match event {
            MatchEvent::Minute(update) => deliver(&self.minute_listeners, update, event.kind()),
            MatchEvent::Commentary(commentary) => {
                deliver(&self.commentary_listeners, commentary, event.kind())
            }
            MatchEvent::End(summary) => deliver(&self.end_listeners, summary, event.kind()),
        }
    }
}

fn deliver<T>(listeners: &[Registration<T>], payload: &T, kind: EventKind) -> usize {
    let mut delivered = 0;

    for registration in listeners {
        let outcome = catch_unwind(AssertUnwindSafe(|| (registration.callback)(payload)))
            .unwrap_or_else(|panic| Err(EventError::Panicked(panic_message(panic))));

        match outcome {
            Ok(()) => delivered += 1,
            Err(e) => {
                warn!(
                    listener = registration.name,
                    event_kind = %kind,
                    error = %e,
                    "Match event listener failed"
                );
            }
        }
    }

    delivered
}

fn panic_message(panic: Box<dyn Any + Send>) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
