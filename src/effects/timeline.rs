//! Timeline: an ordered group of tracks played together.
//!
//! The timeline owns playback state for its whole group: a single
//! playhead in milliseconds, advanced by the caller's frame loop. Tracks
//! without an explicit delay begin at playhead zero; concurrency is group
//! membership, nothing more. Playback is fire-and-forget: nothing waits
//! on completion.

use std::time::Duration;

use super::track::{Track, TrackSample};

/// Minimum playback speed accepted by [`Timeline::set_speed`].
const MIN_SPEED: f32 = 0.01;

/// Replayable group of effect tracks.
#[derive(Clone, Debug)]
pub struct Timeline {
    tracks: Vec<Track>,
    playhead_ms: f32,
    playing: bool,
    speed: f32,
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Timeline {
    pub fn new() -> Self {
        Self {
            tracks: Vec::new(),
            playhead_ms: 0.0,
            playing: false,
            speed: 1.0,
        }
    }

    /// Add a group of tracks, consuming and returning the timeline.
    #[must_use]
    pub fn add(mut self, tracks: Vec<Track>) -> Self {
        self.tracks.extend(tracks);
        self
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Playhead position where every track has settled.
    pub fn duration_ms(&self) -> u64 {
        self.tracks.iter().map(Track::end_ms).max().unwrap_or(0)
    }

    /// Restart all tracks from playhead zero.
    pub fn replay(&mut self) {
        self.playhead_ms = 0.0;
        self.playing = !self.tracks.is_empty();
    }

    /// Playback speed multiplier (1.0 = normal). Clamped away from zero;
    /// use the owning control to skip playback entirely.
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed.max(MIN_SPEED);
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Advance the playhead. Returns whether playback is still running.
    pub fn update(&mut self, delta: Duration) -> bool {
        if !self.playing {
            return false;
        }
        self.playhead_ms += delta.as_secs_f32() * 1000.0 * self.speed;
        if self.playhead_ms >= self.duration_ms() as f32 {
            self.playhead_ms = self.duration_ms() as f32;
            self.playing = false;
        }
        self.playing
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn playhead_ms(&self) -> u64 {
        self.playhead_ms as u64
    }

    /// Interpolated values of the track at `index` for the current
    /// playhead.
    pub fn sample(&self, index: usize) -> Option<TrackSample> {
        self.tracks.get(index).map(|t| t.sample(self.playhead_ms()))
    }
}
