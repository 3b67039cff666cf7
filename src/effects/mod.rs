//! Effect primitives: easing curves, track descriptors, and the
//! replayable timeline that groups them.

mod easing;
mod timeline;
mod track;

pub use easing::Easing;
pub use timeline::Timeline;
pub use track::{FadeStage, ParticleChildren, ParticleSample, ParticleShape, Track, TrackSample};
