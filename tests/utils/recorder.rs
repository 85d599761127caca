use std::sync::{Arc, Mutex};

use matchday::event::{
    CommentaryEvent, CommentaryKind, EventError, MatchEventListener, MatchSummary, MinuteUpdate,
};

// ============================================================================
// Recording listener
// ============================================================================

/// Every event a listener saw, in delivery order
#[derive(Debug, Clone)]
pub enum Recorded {
    Minute(MinuteUpdate),
    Commentary(CommentaryEvent),
    End(MatchSummary),
}

#[derive(Default)]
pub struct RecordingListener {
    events: Mutex<Vec<Recorded>>,
}

#[allow(dead_code)]
impl RecordingListener {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<Recorded> {
        self.events.lock().unwrap().clone()
    }

    pub fn minute_updates(&self) -> Vec<MinuteUpdate> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Recorded::Minute(update) => Some(update),
                _ => None,
            })
            .collect()
    }

    pub fn commentary(&self) -> Vec<CommentaryEvent> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Recorded::Commentary(line) => Some(line),
                _ => None,
            })
            .collect()
    }

    pub fn commentary_of(&self, kind: CommentaryKind) -> Vec<CommentaryEvent> {
        self.commentary()
            .into_iter()
            .filter(|line| line.kind == kind)
            .collect()
    }

    pub fn summaries(&self) -> Vec<MatchSummary> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Recorded::End(summary) => Some(summary),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: Recorded) {
        self.events.lock().unwrap().push(event);
    }
}

impl MatchEventListener for RecordingListener {
    fn on_minute_update(&self, update: &MinuteUpdate) -> Result<(), EventError> {
        self.push(Recorded::Minute(update.clone()));
        Ok(())
    }

    fn on_commentary(&self, event: &CommentaryEvent) -> Result<(), EventError> {
        self.push(Recorded::Commentary(event.clone()));
        Ok(())
    }

    fn on_match_end(&self, summary: &MatchSummary) -> Result<(), EventError> {
        self.push(Recorded::End(summary.clone()));
        Ok(())
    }

    fn name(&self) -> &'static str {
        "RecordingListener"
    }
}
