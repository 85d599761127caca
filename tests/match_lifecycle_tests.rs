mod utils;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use matchday::engine::{ScriptedRandom, Side};
use matchday::event::{CommentaryKind, EventError};
use matchday::{MatchEngine, MatchPhase, TeamDescriptor};
use rstest::rstest;
use tokio::time::sleep;
use utils::{fast_config, rostered_team, Recorded, RecordingListener, TeamBuilder};

async fn recorded_engine(seed: u64) -> (MatchEngine, Arc<RecordingListener>) {
    let engine = MatchEngine::new(
        format!("seeded-{}", seed),
        rostered_team("Rovers"),
        rostered_team("United"),
        fast_config(seed),
    )
    .unwrap();
    let recorder = RecordingListener::new();
    engine.subscribe(recorder.clone()).await;
    (engine, recorder)
}

// ============================================================================
// Full matches
// ============================================================================

#[rstest]
#[case(1)]
#[case(42)]
#[case(2024)]
#[tokio::test(start_paused = true)]
async fn test_full_match_reaches_full_time_with_consistent_events(#[case] seed: u64) {
    let (engine, recorder) = recorded_engine(seed).await;

    engine.start().await;
    sleep(Duration::from_secs(300)).await;

    assert_eq!(engine.phase().await, MatchPhase::Ended);

    // one update per minute, in order
    let updates = recorder.minute_updates();
    let minutes: Vec<u32> = updates.iter().map(|u| u.minute).collect();
    assert_eq!(minutes, (1..=90).collect::<Vec<u32>>());

    for update in &updates {
        let possession = update.statistics.possession;
        assert_eq!(possession.home + possession.away, 100);
    }

    let summaries = recorder.summaries();
    assert_eq!(summaries.len(), 1);
    let summary = &summaries[0];
    let last = updates.last().unwrap();
    assert_eq!(summary.final_minute, 90);
    assert_eq!(summary.score, last.score);
    assert_eq!(summary.statistics, last.statistics);

    // every goal was announced
    let goals = recorder.commentary_of(CommentaryKind::Goal).len() as u32;
    assert_eq!(summary.score.total(), goals);

    assert_eq!(recorder.commentary_of(CommentaryKind::Kickoff).len(), 1);
    assert_eq!(recorder.commentary_of(CommentaryKind::HalfTime).len(), 1);
    assert_eq!(recorder.commentary_of(CommentaryKind::FullTime).len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_nothing_is_emitted_after_match_end() {
    let (engine, recorder) = recorded_engine(7).await;

    engine.start().await;
    sleep(Duration::from_secs(300)).await;
    let count_at_end = recorder.events().len();

    sleep(Duration::from_secs(120)).await;

    let events = recorder.events();
    assert_eq!(events.len(), count_at_end);
    assert!(matches!(events.last(), Some(Recorded::End(_))));
    assert!(matches!(
        &events[events.len() - 2],
        Recorded::Commentary(line) if line.kind == CommentaryKind::FullTime
    ));
}

#[tokio::test(start_paused = true)]
async fn test_same_seed_produces_same_result() {
    let (first, first_recorder) = recorded_engine(99).await;
    let (second, second_recorder) = recorded_engine(99).await;

    first.start().await;
    second.start().await;
    sleep(Duration::from_secs(300)).await;

    let a = &first_recorder.summaries()[0];
    let b = &second_recorder.summaries()[0];
    assert_eq!(a.score, b.score);
    assert_eq!(a.statistics, b.statistics);
}

// ============================================================================
// Scripted outcomes
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_forced_goal_is_announced_before_the_minute_update() {
    let draws = vec![
        0.0,  // home kicks off
        0.5,  // first general commentary after 10s
        0.1,  // zone changes
        0.9,  // to attack
        0.1,  // shot taken
        0.0,  // shooter
        0.95, // quality above the goal threshold
    ];
    let engine = MatchEngine::with_random_source(
        "scripted",
        TeamBuilder::new("Rovers").ratings(70, 70).build(),
        TeamBuilder::new("United").ratings(70, 70).build(),
        fast_config(0),
        Box::new(ScriptedRandom::new(draws)),
    )
    .unwrap();
    let recorder = RecordingListener::new();
    engine.subscribe(recorder.clone()).await;

    engine.start().await;
    sleep(Duration::from_millis(3500)).await;

    let events = recorder.events();
    let goal_at = events
        .iter()
        .position(|e| matches!(e, Recorded::Commentary(line) if line.kind == CommentaryKind::Goal))
        .expect("goal commentary");
    let update_at = events
        .iter()
        .position(|e| matches!(e, Recorded::Minute(_)))
        .expect("minute update");
    assert!(goal_at < update_at);

    let snapshot = engine.snapshot().await;
    assert_eq!(snapshot.minute, 1);
    assert_eq!(snapshot.score.home, 1);
    assert_eq!(snapshot.score.away, 0);
    assert_eq!(snapshot.possession, Side::Away);

    engine.stop().await;
}

// ============================================================================
// Lifecycle
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_pause_right_after_start_freezes_the_clock() {
    let (engine, recorder) = recorded_engine(3).await;

    engine.start().await;
    assert_eq!(engine.pause().await, MatchPhase::Paused);

    sleep(Duration::from_secs(60)).await;
    assert_eq!(engine.snapshot().await.minute, 0);
    assert!(recorder.minute_updates().is_empty());
    assert!(recorder.commentary_of(CommentaryKind::General).is_empty());

    assert_eq!(engine.resume().await, MatchPhase::Running);
    assert_eq!(engine.snapshot().await.minute, 0);

    sleep(Duration::from_millis(3500)).await;
    let minutes: Vec<u32> = recorder.minute_updates().iter().map(|u| u.minute).collect();
    assert_eq!(minutes, vec![1]);

    engine.stop().await;
}

#[tokio::test(start_paused = true)]
async fn test_repeated_pause_and_resume_never_skips_a_minute() {
    let (engine, recorder) = recorded_engine(5).await;

    engine.start().await;
    for _ in 0..5 {
        sleep(Duration::from_millis(4000)).await;
        engine.pause().await;
        engine.pause().await;
        sleep(Duration::from_secs(10)).await;
        engine.resume().await;
        engine.resume().await;
    }
    engine.stop().await;

    let minutes: Vec<u32> = recorder.minute_updates().iter().map(|u| u.minute).collect();
    let expected: Vec<u32> = (1..=minutes.len() as u32).collect();
    assert_eq!(minutes, expected);
    assert_eq!(minutes.len(), 5);
}

#[tokio::test(start_paused = true)]
async fn test_double_start_does_not_double_the_clock() {
    let (engine, recorder) = recorded_engine(11).await;

    assert_eq!(engine.start().await, MatchPhase::Running);
    assert_eq!(engine.start().await, MatchPhase::Running);

    sleep(Duration::from_millis(9500)).await;

    assert_eq!(recorder.commentary_of(CommentaryKind::Kickoff).len(), 1);
    assert_eq!(engine.snapshot().await.minute, 3);

    engine.stop().await;
}

#[tokio::test(start_paused = true)]
async fn test_stop_mid_match_ends_once_at_the_current_minute() {
    let (engine, recorder) = recorded_engine(13).await;

    engine.start().await;
    sleep(Duration::from_millis(30_500)).await;

    assert_eq!(engine.stop().await, MatchPhase::Ended);
    assert_eq!(engine.stop().await, MatchPhase::Ended);
    assert_eq!(engine.resume().await, MatchPhase::Ended);

    sleep(Duration::from_secs(60)).await;

    let summaries = recorder.summaries();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].final_minute, 10);
    assert_eq!(recorder.minute_updates().len(), 10);
}

// ============================================================================
// Listener isolation
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_failing_listeners_do_not_disturb_the_match() {
    let engine = MatchEngine::new(
        "isolated",
        TeamDescriptor::named("Rovers"),
        TeamDescriptor::named("United"),
        fast_config(21),
    )
    .unwrap();

    let failures = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&failures);
    engine
        .on_minute_update(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            Err(EventError::listener("scoreboard offline"))
        })
        .await;
    engine
        .on_commentary(|_| panic!("ticker crashed"))
        .await;

    let recorder = RecordingListener::new();
    engine.subscribe(recorder.clone()).await;

    engine.start().await;
    sleep(Duration::from_secs(300)).await;

    assert_eq!(engine.phase().await, MatchPhase::Ended);
    assert_eq!(failures.load(Ordering::SeqCst), 90);
    assert!(!recorder.commentary().is_empty());

    let updates = recorder.minute_updates();
    let summaries = recorder.summaries();
    assert_eq!(updates.len(), 90);
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].statistics, updates[89].statistics);
}
