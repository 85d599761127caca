use std::sync::{Arc, Weak};
use std::time::Duration;

use chrono::Utc;
use tokio::sync::Mutex;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info, instrument};

use super::clock::MatchClock;
use super::commentary::Commentator;
use super::errors::EngineError;
use super::players::random_player;
use super::random::{RandomSource, SeededRandom};
use super::simulator::EventSimulator;
use super::state::{MatchPhase, MatchState, Side};
use super::team::TeamDescriptor;
use crate::config::EngineConfig;
use crate::event::{
    CommentaryEvent, CommentaryKind, EventError, MatchEvent, MatchEventBus, MatchEventListener,
    MatchSummary, MinuteUpdate,
};

/// A single simulated match.
///
/// Cloning is cheap and every clone drives the same match. All mutation
/// (timer ticks, lifecycle calls, listener registration) is serialized behind
/// one lock, and listeners run synchronously while it is held, so a listener
/// must not wait on the engine it is attached to.
#[derive(Clone)]
pub struct MatchEngine {
    match_id: Arc<str>,
    shared: Arc<Mutex<EngineInner>>,
}

struct EngineInner {
    match_id: Arc<str>,
    home: TeamDescriptor,
    away: TeamDescriptor,
    config: EngineConfig,
    state: MatchState,
    phase: MatchPhase,
    /// Set when the match enters Paused, cleared when it leaves
    paused_at: Option<Instant>,
    rng: Box<dyn RandomSource>,
    bus: MatchEventBus,
    clock: MatchClock,
}

impl MatchEngine {
    /// Creates an engine drawing from a seeded (or entropy-seeded) source
    pub fn new(
        match_id: impl Into<String>,
        home: TeamDescriptor,
        away: TeamDescriptor,
        config: EngineConfig,
    ) -> Result<Self, EngineError> {
        let rng: Box<dyn RandomSource> = match config.seed {
            Some(seed) => Box::new(SeededRandom::from_seed(seed)),
            None => Box::new(SeededRandom::from_entropy()),
        };
        Self::with_random_source(match_id, home, away, config, rng)
    }

    /// Creates an engine with an explicit random source
    pub fn with_random_source(
        match_id: impl Into<String>,
        home: TeamDescriptor,
        away: TeamDescriptor,
        config: EngineConfig,
        mut rng: Box<dyn RandomSource>,
    ) -> Result<Self, EngineError> {
        let match_id: String = match_id.into();
        if match_id.trim().is_empty() {
            return Err(EngineError::InvalidConfig(
                "Match id cannot be empty".to_string(),
            ));
        }
        home.validate()?;
        away.validate()?;
        config.validate()?;

        let possession = if rng.pick_index(2) == 0 {
            Side::Home
        } else {
            Side::Away
        };

        let match_id: Arc<str> = Arc::from(match_id);
        info!(
            match_id = %match_id,
            home = %home.name,
            away = %away.name,
            "Match created"
        );

        let inner = EngineInner {
            match_id: Arc::clone(&match_id),
            home,
            away,
            config,
            state: MatchState::new(possession),
            phase: MatchPhase::Created,
            paused_at: None,
            rng,
            bus: MatchEventBus::new(),
            clock: MatchClock::new(),
        };

        Ok(Self {
            match_id,
            shared: Arc::new(Mutex::new(inner)),
        })
    }

    pub fn match_id(&self) -> &str {
        &self.match_id
    }

    pub async fn phase(&self) -> MatchPhase {
        self.shared.lock().await.phase
    }

    /// How long the match has been paused, or None when it is not paused
    pub async fn paused_for(&self) -> Option<Duration> {
        self.shared.lock().await.paused_at.map(|at| at.elapsed())
    }

    /// Copy of the current match state; mutating it does not affect the match
    pub async fn snapshot(&self) -> MatchState {
        self.shared.lock().await.state.clone()
    }

    pub async fn teams(&self) -> (TeamDescriptor, TeamDescriptor) {
        let inner = self.shared.lock().await;
        (inner.home.clone(), inner.away.clone())
    }

    pub async fn on_minute_update<F>(&self, callback: F)
    where
        F: Fn(&MinuteUpdate) -> Result<(), EventError> + Send + 'static,
    {
        self.shared.lock().await.bus.on_minute_update(callback);
    }

    pub async fn on_commentary<F>(&self, callback: F)
    where
        F: Fn(&CommentaryEvent) -> Result<(), EventError> + Send + 'static,
    {
        self.shared.lock().await.bus.on_commentary(callback);
    }

    pub async fn on_match_end<F>(&self, callback: F)
    where
        F: Fn(&MatchSummary) -> Result<(), EventError> + Send + 'static,
    {
        self.shared.lock().await.bus.on_match_end(callback);
    }

    pub async fn subscribe(&self, listener: Arc<dyn MatchEventListener>) {
        self.shared.lock().await.bus.subscribe(listener);
    }

    /// Kicks off the match. A no-op unless the match has not started yet.
    #[instrument(skip(self), fields(match_id = %self.match_id))]
    pub async fn start(&self) -> MatchPhase {
        let mut inner = self.shared.lock().await;
        if inner.phase != MatchPhase::Created {
            debug!(phase = %inner.phase, "Ignoring start");
            return inner.phase;
        }

        inner.phase = MatchPhase::Running;
        inner.state.is_running = true;
        info!("Match started");

        let kickoff = Commentator::new(&inner.home, &inner.away).kickoff();
        inner.emit(commentary(inner.state.minute, CommentaryKind::Kickoff, kickoff));
        self.arm(&mut inner);

        inner.phase
    }

    /// Halts both timers without touching the match state
    #[instrument(skip(self), fields(match_id = %self.match_id))]
    pub async fn pause(&self) -> MatchPhase {
        let mut inner = self.shared.lock().await;
        let phase = inner.phase;
        match phase {
            MatchPhase::Running => {
                inner.clock.cancel();
                inner.phase = MatchPhase::Paused;
                inner.paused_at = Some(Instant::now());
                inner.state.is_running = false;
                info!(minute = inner.state.minute, "Match paused");
            }
            MatchPhase::Paused => {
                inner.clock.cancel();
                debug!("Match already paused");
            }
            _ => debug!(phase = %phase, "Ignoring pause"),
        }
        inner.phase
    }

    /// Re-arms the timers from the paused minute
    #[instrument(skip(self), fields(match_id = %self.match_id))]
    pub async fn resume(&self) -> MatchPhase {
        let mut inner = self.shared.lock().await;
        if inner.phase != MatchPhase::Paused {
            debug!(phase = %inner.phase, "Ignoring resume");
            return inner.phase;
        }

        inner.phase = MatchPhase::Running;
        inner.paused_at = None;
        inner.state.is_running = true;
        info!(minute = inner.state.minute, "Match resumed");
        self.arm(&mut inner);

        inner.phase
    }

    /// Ends the match early. Idempotent once the match has ended.
    #[instrument(skip(self), fields(match_id = %self.match_id))]
    pub async fn stop(&self) -> MatchPhase {
        let mut inner = self.shared.lock().await;
        let phase = inner.phase;
        match phase {
            MatchPhase::Running | MatchPhase::Paused => inner.finish(),
            _ => debug!(phase = %phase, "Ignoring stop"),
        }
        inner.phase
    }

    fn arm(&self, inner: &mut EngineInner) {
        let generation = inner.clock.next_generation();
        let period = inner.config.minute_period;
        let first_delay = inner.next_commentary_delay();

        let minute_loop = run_minute_clock(Arc::downgrade(&self.shared), period, generation);
        let commentary_loop =
            run_commentary_clock(Arc::downgrade(&self.shared), first_delay, generation);
        inner.clock.arm(minute_loop, commentary_loop);
    }
}

impl EngineInner {
    fn emit(&self, event: MatchEvent) {
        self.bus.emit(&event);
    }

    /// Handles one minute tick; returns false once the timer should stop
    fn minute_tick(&mut self, generation: u64) -> bool {
        if self.phase != MatchPhase::Running || !self.clock.is_current(generation) {
            return false;
        }

        let simulator = EventSimulator::new(
            &self.home,
            &self.away,
            &self.config.policy,
            self.config.half_time_minute,
        );
        let events = simulator.simulate_minute(&mut self.state, self.rng.as_mut());
        debug!(
            match_id = %self.match_id,
            minute = self.state.minute,
            events = events.len(),
            "Minute simulated"
        );

        for event in events {
            self.emit(event);
        }

        if self.state.minute >= self.config.full_time_minute {
            self.finish();
            return false;
        }
        true
    }

    /// Emits one general commentary line; returns false once the timer should stop
    fn commentary_tick(&mut self, generation: u64) -> bool {
        if self.phase != MatchPhase::Running || !self.clock.is_current(generation) {
            return false;
        }

        let variant = self.rng.pick_index(3);
        let in_possession = match self.state.possession {
            Side::Home => &self.home,
            Side::Away => &self.away,
        };
        let player = random_player(in_possession, self.rng.as_mut());
        let with_score = self.rng.chance(self.config.policy.commentary_score_line);
        let text = Commentator::new(&self.home, &self.away).general(
            self.state.field_zone,
            self.state.possession,
            &player,
            variant,
            with_score.then_some(&self.state.score),
        );

        self.emit(commentary(self.state.minute, CommentaryKind::General, text));
        true
    }

    fn next_commentary_delay(&mut self) -> Duration {
        let min = self.config.commentary_delay_min.as_millis() as u64;
        let max = self.config.commentary_delay_max.as_millis() as u64;
        Duration::from_millis(self.rng.between(min, max))
    }

    /// Terminal transition: stop the clock, then announce full time and the summary
    fn finish(&mut self) {
        self.clock.cancel();
        self.phase = MatchPhase::Ended;
        self.paused_at = None;
        self.state.is_running = false;

        info!(
            match_id = %self.match_id,
            minute = self.state.minute,
            home_score = self.state.score.home,
            away_score = self.state.score.away,
            "Match ended"
        );

        let full_time = Commentator::new(&self.home, &self.away).full_time(&self.state.score);
        self.emit(commentary(self.state.minute, CommentaryKind::FullTime, full_time));
        self.emit(MatchEvent::End(MatchSummary {
            match_id: self.match_id.to_string(),
            home_team: self.home.name.clone(),
            away_team: self.away.name.clone(),
            final_minute: self.state.minute,
            score: self.state.score,
            statistics: self.state.statistics.clone(),
            completed_at: Utc::now(),
        }));
    }
}

fn commentary(minute: u32, kind: CommentaryKind, text: String) -> MatchEvent {
    MatchEvent::Commentary(CommentaryEvent::new(minute, kind, text))
}

async fn run_minute_clock(engine: Weak<Mutex<EngineInner>>, period: Duration, generation: u64) {
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        let Some(shared) = engine.upgrade() else {
            break;
        };
        let mut inner = shared.lock().await;
        if !inner.minute_tick(generation) {
            break;
        }
    }
}

async fn run_commentary_clock(
    engine: Weak<Mutex<EngineInner>>,
    first_delay: Duration,
    generation: u64,
) {
    let mut delay = first_delay;

    loop {
        tokio::time::sleep(delay).await;
        let Some(shared) = engine.upgrade() else {
            break;
        };
        let mut inner = shared.lock().await;
        if !inner.commentary_tick(generation) {
            break;
        }
        delay = inner.next_commentary_delay();
    }
}
