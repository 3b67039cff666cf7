//! Animation Orchestrator
//!
//! Builds the clap effect timeline from registered element handles and
//! replays it on demand. Construction is one-way: the orchestrator stays
//! `unbuilt` while any required handle is missing (a deferral, not an
//! error — elements may simply not have mounted yet) and builds exactly
//! once when all three are present. Replay before build is a no-op;
//! callers gate replay through the mount-aware scheduler.

use tracing::{debug, trace};

use crate::effects::{Easing, FadeStage, ParticleChildren, ParticleShape, Timeline, Track};
use crate::registry::ElementRegistry;

/// Base duration `D` for the effect choreography, in milliseconds.
pub const BASE_DURATION_MS: u64 = 300;

/// Fixed scale applied directly to the trigger at build time, outside the
/// timeline. The scale pulse track also drives trigger scale; both
/// effects are kept deliberately (see DESIGN.md).
pub const TRIGGER_SCALE_OVERRIDE: f32 = 1.1;

/// Delay before burst children start shrinking, relative to track start.
const BURST_CHILD_DELAY_MS: u64 = 30;

/// Stable indices of the five tracks within the built timeline, in the
/// order they are added.
pub mod track_index {
    pub const SCALE_PULSE: usize = 0;
    pub const TOTAL_FADE: usize = 1;
    pub const COUNTER_FADE: usize = 2;
    pub const BURST_POLYGON: usize = 3;
    pub const BURST_CIRCLE: usize = 4;
}

/// One-way `unbuilt -> built` owner of the clap timeline.
#[derive(Debug, Default)]
pub struct AnimationOrchestrator {
    timeline: Option<Timeline>,
    trigger_scale_override: Option<f32>,
    base_duration_ms: u64,
}

impl AnimationOrchestrator {
    pub fn new() -> Self {
        Self::with_base_duration(BASE_DURATION_MS)
    }

    pub fn with_base_duration(base_duration_ms: u64) -> Self {
        Self {
            timeline: None,
            trigger_scale_override: None,
            base_duration_ms,
        }
    }

    pub fn is_built(&self) -> bool {
        self.timeline.is_some()
    }

    /// Build the five-track timeline once all three handles are present.
    ///
    /// Returns whether a timeline was built on this call. Missing handles
    /// and repeat calls after a successful build are both silent no-ops.
    pub fn build(&mut self, registry: &ElementRegistry) -> bool {
        if self.timeline.is_some() {
            return false;
        }
        let Some(targets) = registry.targets() else {
            trace!(registered = registry.len(), "timeline build deferred");
            return false;
        };

        let d = self.base_duration_ms;

        let scale_pulse = Track::ScalePulse {
            target: targets.trigger,
            scale: (1.3, 1.0),
            duration_ms: d,
            easing: Easing::EaseOut,
        };

        let total_fade = Track::FadeTranslate {
            target: targets.total,
            stage: FadeStage {
                opacity: (0.0, 1.0),
                y: (0.0, -3.0),
                delay_ms: 3 * d / 2,
                duration_ms: d,
            },
            easing: Easing::Linear,
        };

        let counter_fade = Track::ChainedFade {
            target: targets.counter,
            first: FadeStage {
                opacity: (0.0, 1.0),
                y: (0.0, -30.0),
                delay_ms: 0,
                duration_ms: d,
            },
            second: FadeStage {
                opacity: (1.0, 0.0),
                y: (-30.0, -9.0),
                delay_ms: d / 2,
                duration_ms: d,
            },
            easing: Easing::Linear,
        };

        let burst_polygon = Track::ParticleBurst {
            parent: targets.trigger,
            radius: (50.0, 90.0),
            angle_deg: 45.0,
            count: 5,
            duration_ms: d,
            children: ParticleChildren {
                shape: ParticleShape::Polygon,
                radius: (6.0, 0.0),
                delay_ms: BURST_CHILD_DELAY_MS,
                duration_ms: d,
                easing: Easing::BURST,
            },
        };

        let burst_circle = Track::ParticleBurst {
            parent: targets.trigger,
            radius: (50.0, 76.0),
            angle_deg: 25.0,
            count: 5,
            duration_ms: d,
            children: ParticleChildren {
                shape: ParticleShape::Circle,
                radius: (3.0, 0.0),
                delay_ms: BURST_CHILD_DELAY_MS,
                duration_ms: d,
                easing: Easing::BURST,
            },
        };

        // Immediate out-of-band adjustment to the trigger, applied by the
        // rendering layer independently of the timeline tracks.
        self.trigger_scale_override = Some(TRIGGER_SCALE_OVERRIDE);

        let timeline = Timeline::new().add(vec![
            scale_pulse,
            total_fade,
            counter_fade,
            burst_polygon,
            burst_circle,
        ]);
        debug!(
            tracks = timeline.len(),
            duration_ms = timeline.duration_ms(),
            "clap timeline built"
        );
        self.timeline = Some(timeline);
        true
    }

    /// Restart all tracks from playhead zero. No effect while unbuilt.
    pub fn replay(&mut self) {
        if let Some(timeline) = &mut self.timeline {
            timeline.replay();
            trace!("clap timeline replayed");
        }
    }

    pub fn timeline(&self) -> Option<&Timeline> {
        self.timeline.as_ref()
    }

    pub fn timeline_mut(&mut self) -> Option<&mut Timeline> {
        self.timeline.as_mut()
    }

    /// The fixed scale applied directly to the trigger, present only once
    /// the timeline has been built.
    pub fn trigger_scale_override(&self) -> Option<f32> {
        self.trigger_scale_override
    }
}
