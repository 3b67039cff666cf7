//! Integration Tests for the Clap Control
//!
//! These tests drive the public crate API end-to-end, without a terminal:
//!
//! 1. **Counter Flow**: repeated claps, the cap, and the community total
//! 2. **Mount Flow**: element registration, one-shot timeline construction,
//!    and after-mount replay gating
//! 3. **Timeline Flow**: the five tracks with their offsets and samples

use std::time::Duration;

use pretty_assertions::assert_eq;

use ovation::accessibility::{parse_motion_preference, MotionPreference};
use ovation::config::Config;
use ovation::effects::TrackSample;
use ovation::orchestrator::{track_index, AnimationOrchestrator};
use ovation::registry::{ElementHandle, ElementRegistry, ElementRole};
use ovation::scheduler::AfterMountScheduler;
use ovation::state::{ClapState, ClapStateMachine, MAX_CLAPS};

fn full_registry() -> ElementRegistry {
    ElementRegistry::new()
        .with(ElementRole::Trigger, ElementHandle::new(1))
        .with(ElementRole::Counter, ElementHandle::new(2))
        .with(ElementRole::Total, ElementHandle::new(3))
}

#[test]
fn test_clap_sequence_caps_count_but_keeps_flag() {
    let mut machine = ClapStateMachine::new(ClapState::default());

    for _ in 0..30 {
        machine.clap();
    }

    let state = machine.state();
    assert_eq!(state.count, MAX_CLAPS);
    assert_eq!(state.count_total, 49 + MAX_CLAPS);
    assert!(state.has_clapped);

    // Once capped, further claps change nothing.
    let after = machine.clap();
    assert_eq!(after, state);
}

#[test]
fn test_derived_props_follow_the_counter() {
    let mut machine = ClapStateMachine::new(ClapState::default());
    assert!(!machine.toggler_props().pressed);

    machine.clap();
    machine.clap();

    assert!(machine.toggler_props().pressed);
    let counter = machine.counter_props();
    assert_eq!(counter.count, 2);
    assert_eq!(counter.current, 2);
    assert_eq!(counter.max, MAX_CLAPS);
}

#[test]
fn test_orchestrator_waits_for_all_three_elements() {
    let mut orchestrator = AnimationOrchestrator::new();
    let mut registry = ElementRegistry::new();

    assert!(!orchestrator.build(&registry));
    registry.register(ElementRole::Trigger, ElementHandle::new(1));
    registry.register(ElementRole::Counter, ElementHandle::new(2));
    assert!(!orchestrator.build(&registry));
    assert!(!orchestrator.is_built());

    // Replay before build is a silent no-op.
    orchestrator.replay();
    assert!(orchestrator.timeline().is_none());

    registry.register(ElementRole::Total, ElementHandle::new(3));
    assert!(orchestrator.build(&registry));
    assert!(orchestrator.is_built());

    // A second build never reconstructs.
    assert!(!orchestrator.build(&registry));
}

#[test]
fn test_after_mount_scheduler_gates_the_replay() {
    let mut orchestrator = AnimationOrchestrator::new();
    assert!(orchestrator.build(&full_registry()));

    let mut scheduler = AfterMountScheduler::new();

    // Mount render: the effect must be suppressed.
    let fired = scheduler.evaluate(0, || orchestrator.replay());
    assert!(!fired);
    assert!(!orchestrator.timeline().is_some_and(|t| t.is_playing()));

    // First clap: replay fires.
    assert!(scheduler.evaluate(1, || orchestrator.replay()));
    assert!(orchestrator.timeline().is_some_and(|t| t.is_playing()));

    // Unchanged count: no replay.
    assert!(!scheduler.evaluate(1, || orchestrator.replay()));
}

#[test]
fn test_full_timeline_shape() {
    let mut orchestrator = AnimationOrchestrator::new();
    assert!(orchestrator.build(&full_registry()));

    let timeline = orchestrator.timeline().unwrap();
    assert_eq!(timeline.len(), 5);
    // The chained counter fade runs longest: 300 + 300 + 150ms gap.
    assert_eq!(timeline.duration_ms(), 750);
    assert_eq!(orchestrator.trigger_scale_override(), Some(1.1));
}

#[test]
fn test_playback_samples_settle_at_rest_values() {
    let mut orchestrator = AnimationOrchestrator::new();
    orchestrator.build(&full_registry());
    orchestrator.replay();

    let timeline = orchestrator.timeline_mut().unwrap();
    // Advance well past every track's end.
    timeline.update(Duration::from_millis(2000));
    assert!(!timeline.is_playing());

    assert_eq!(
        timeline.sample(track_index::SCALE_PULSE),
        Some(TrackSample::Scale(1.0))
    );
    match timeline.sample(track_index::TOTAL_FADE) {
        Some(TrackSample::Fade { opacity, y }) => {
            assert!((opacity - 1.0).abs() < 1e-6);
            assert!((y - (-3.0)).abs() < 1e-6);
        }
        other => panic!("unexpected total sample: {other:?}"),
    }
    // The "+N" badge fades back out by the end.
    match timeline.sample(track_index::COUNTER_FADE) {
        Some(TrackSample::Fade { opacity, .. }) => assert!(opacity < 1e-6),
        other => panic!("unexpected counter sample: {other:?}"),
    }
}

#[test]
fn test_burst_tracks_expand_and_shrink_particles() {
    let mut orchestrator = AnimationOrchestrator::new();
    orchestrator.build(&full_registry());
    orchestrator.replay();

    let timeline = orchestrator.timeline_mut().unwrap();
    timeline.update(Duration::from_millis(150));

    let Some(TrackSample::Burst { radius, particles }) =
        timeline.sample(track_index::BURST_POLYGON)
    else {
        panic!("expected a burst sample");
    };
    // Mid-flight: ring has grown past its start, particles still visible.
    assert!(radius > 50.0);
    assert_eq!(particles.len(), 5);
    assert!(particles.iter().any(|p| p.radius > 0.1));
}

#[test]
fn test_registry_updates_are_immutable_and_last_write_wins() {
    let base = full_registry();
    let updated = base
        .clone()
        .with(ElementRole::Trigger, ElementHandle::new(9));

    assert_eq!(base.get(ElementRole::Trigger), Some(ElementHandle::new(1)));
    assert_eq!(
        updated.get(ElementRole::Trigger),
        Some(ElementHandle::new(9))
    );
    assert_eq!(updated.get(ElementRole::Total), Some(ElementHandle::new(3)));
}

#[test]
fn test_reduced_motion_parsing_and_gating() {
    assert_eq!(parse_motion_preference("reduced"), MotionPreference::Reduced);
    assert_eq!(parse_motion_preference("none"), MotionPreference::None);
    assert_eq!(parse_motion_preference("whatever"), MotionPreference::Full);

    assert!(MotionPreference::Full.allows_replay());
    assert!(MotionPreference::Reduced.allows_replay());
    assert!(!MotionPreference::None.allows_replay());
}

#[test]
fn test_config_defaults_match_the_shipped_control() {
    let config = Config::default();
    assert_eq!(config.initial.count, 0);
    assert_eq!(config.initial.count_total, 49);
    assert!(!config.initial.has_clapped);
    assert_eq!(config.base_duration_ms, 300);
    assert_eq!(config.motion, MotionPreference::Full);
}
