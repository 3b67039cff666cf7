//! Effect track descriptors.
//!
//! Each track is a tagged descriptor carrying only the fields its effect
//! kind needs, plus the sampling that turns a playhead position into
//! interpolated values. Tracks are value types; playback state lives in
//! the owning [`Timeline`](super::timeline::Timeline).

use serde::{Deserialize, Serialize};

use crate::registry::ElementHandle;

use super::easing::Easing;

/// Shape drawn for burst particles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleShape {
    Polygon,
    Circle,
}

/// Per-child particle spec for a burst.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParticleChildren {
    pub shape: ParticleShape,
    /// Each particle shrinks across this radius range.
    pub radius: (f32, f32),
    /// Delay before the children start animating, relative to track start.
    pub delay_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

/// One fade/translate stage: opacity and vertical offset over a window.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FadeStage {
    pub opacity: (f32, f32),
    /// Vertical offset in effect units (negative is up).
    pub y: (f32, f32),
    /// Delay before this stage begins.
    pub delay_ms: u64,
    pub duration_ms: u64,
}

impl FadeStage {
    fn end_ms(&self) -> u64 {
        self.delay_ms + self.duration_ms
    }
}

/// One independently-timed visual effect within a timeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Track {
    /// Scale the target across a range.
    ScalePulse {
        target: ElementHandle,
        scale: (f32, f32),
        duration_ms: u64,
        easing: Easing,
    },
    /// Ring of particles emitted from the parent element, the ring
    /// expanding while each particle shrinks.
    ParticleBurst {
        parent: ElementHandle,
        /// Ring radius range.
        radius: (f32, f32),
        /// Base angle of the first particle, degrees.
        angle_deg: f32,
        count: u32,
        duration_ms: u64,
        children: ParticleChildren,
    },
    /// Single fade/translate stage.
    FadeTranslate {
        target: ElementHandle,
        stage: FadeStage,
        easing: Easing,
    },
    /// Two fade/translate stages run back to back; the second begins
    /// after the first completes plus its own delay.
    ChainedFade {
        target: ElementHandle,
        first: FadeStage,
        second: FadeStage,
        easing: Easing,
    },
}

/// Interpolated values of one track at a playhead position.
#[derive(Clone, Debug, PartialEq)]
pub enum TrackSample {
    Scale(f32),
    Burst {
        radius: f32,
        particles: Vec<ParticleSample>,
    },
    Fade {
        opacity: f32,
        y: f32,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleSample {
    pub angle_deg: f32,
    pub radius: f32,
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Eased progress of a `[delay, delay + duration]` window at `at_ms`,
/// clamped to the window ends.
fn window_progress(at_ms: u64, delay_ms: u64, duration_ms: u64, easing: Easing) -> f32 {
    if at_ms <= delay_ms {
        return easing.apply(0.0);
    }
    if duration_ms == 0 {
        return easing.apply(1.0);
    }
    let t = (at_ms - delay_ms) as f32 / duration_ms as f32;
    easing.apply(t)
}

impl Track {
    /// The element this track animates.
    pub fn target(&self) -> ElementHandle {
        match self {
            Self::ScalePulse { target, .. }
            | Self::FadeTranslate { target, .. }
            | Self::ChainedFade { target, .. } => *target,
            Self::ParticleBurst { parent, .. } => *parent,
        }
    }

    /// Playhead position at which this track has fully settled.
    pub fn end_ms(&self) -> u64 {
        match self {
            Self::ScalePulse { duration_ms, .. } => *duration_ms,
            Self::ParticleBurst {
                duration_ms,
                children,
                ..
            } => (*duration_ms).max(children.delay_ms + children.duration_ms),
            Self::FadeTranslate { stage, .. } => stage.end_ms(),
            Self::ChainedFade { first, second, .. } => {
                first.end_ms() + second.delay_ms + second.duration_ms
            }
        }
    }

    /// Interpolated values at `at_ms` from track start. Positions past the
    /// end yield the settled values.
    pub fn sample(&self, at_ms: u64) -> TrackSample {
        match self {
            Self::ScalePulse {
                scale,
                duration_ms,
                easing,
                ..
            } => {
                let p = window_progress(at_ms, 0, *duration_ms, *easing);
                TrackSample::Scale(lerp(scale.0, scale.1, p))
            }

            Self::ParticleBurst {
                radius,
                angle_deg,
                count,
                duration_ms,
                children,
                ..
            } => {
                let ring = window_progress(at_ms, 0, *duration_ms, children.easing);
                let step = 360.0 / (*count).max(1) as f32;
                let child = window_progress(
                    at_ms,
                    children.delay_ms,
                    children.duration_ms,
                    children.easing,
                );
                let particles = (0..*count)
                    .map(|i| ParticleSample {
                        angle_deg: angle_deg + i as f32 * step,
                        radius: lerp(children.radius.0, children.radius.1, child),
                    })
                    .collect();
                TrackSample::Burst {
                    radius: lerp(radius.0, radius.1, ring),
                    particles,
                }
            }

            Self::FadeTranslate { stage, easing, .. } => {
                let p = window_progress(at_ms, stage.delay_ms, stage.duration_ms, *easing);
                TrackSample::Fade {
                    opacity: lerp(stage.opacity.0, stage.opacity.1, p),
                    y: lerp(stage.y.0, stage.y.1, p),
                }
            }

            Self::ChainedFade {
                first,
                second,
                easing,
                ..
            } => {
                let second_start = first.end_ms() + second.delay_ms;
                if at_ms < second_start {
                    let p = window_progress(at_ms, first.delay_ms, first.duration_ms, *easing);
                    TrackSample::Fade {
                        opacity: lerp(first.opacity.0, first.opacity.1, p),
                        y: lerp(first.y.0, first.y.1, p),
                    }
                } else {
                    let p = window_progress(at_ms, second_start, second.duration_ms, *easing);
                    TrackSample::Fade {
                        opacity: lerp(second.opacity.0, second.opacity.1, p),
                        y: lerp(second.y.0, second.y.1, p),
                    }
                }
            }
        }
    }
}
