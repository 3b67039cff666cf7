//! Reduced-Motion Support
//!
//! Users who prefer less motion can slow the effect sequence down or turn
//! it off entirely via the `REDUCE_MOTION` environment variable:
//!
//! - `1`, `true`, `yes`, `reduced` -> quarter-speed playback
//! - `none`, `static`, `off`, `2` -> no effect playback at all
//! - unset or anything else -> full motion
//!
//! With motion off, the counters still update; only the replay is
//! skipped.

use std::env;

/// User preference for motion and animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MotionPreference {
    /// Full playback at normal speed.
    #[default]
    Full,
    /// Playback at 0.25x speed.
    Reduced,
    /// No playback; state updates only.
    None,
}

impl MotionPreference {
    /// Speed multiplier applied to the timeline.
    #[must_use]
    pub fn speed_multiplier(&self) -> f32 {
        match self {
            MotionPreference::Full => 1.0,
            MotionPreference::Reduced => 0.25,
            MotionPreference::None => 0.0,
        }
    }

    /// Whether a state change should trigger a timeline replay.
    #[must_use]
    pub fn allows_replay(&self) -> bool {
        !matches!(self, MotionPreference::None)
    }
}

/// Detect the motion preference from the `REDUCE_MOTION` environment
/// variable.
#[must_use]
pub fn detect_motion_preference() -> MotionPreference {
    match env::var("REDUCE_MOTION") {
        Ok(value) => parse_motion_preference(&value),
        Err(_) => MotionPreference::Full,
    }
}

/// Parse a motion preference value string.
#[must_use]
pub fn parse_motion_preference(value: &str) -> MotionPreference {
    match value.to_lowercase().trim() {
        "1" | "true" | "yes" | "reduced" => MotionPreference::Reduced,
        "none" | "static" | "off" | "2" => MotionPreference::None,
        _ => MotionPreference::Full,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reduced_values() {
        for value in ["1", "true", "yes", "reduced", "REDUCED", " 1 "] {
            assert_eq!(
                parse_motion_preference(value),
                MotionPreference::Reduced,
                "value {value:?}"
            );
        }
    }

    #[test]
    fn test_parse_none_values() {
        for value in ["none", "static", "off", "2"] {
            assert_eq!(parse_motion_preference(value), MotionPreference::None);
        }
    }

    #[test]
    fn test_parse_defaults_to_full() {
        for value in ["", "0", "false", "whatever"] {
            assert_eq!(parse_motion_preference(value), MotionPreference::Full);
        }
    }

    #[test]
    fn test_speed_multipliers() {
        assert_eq!(MotionPreference::Full.speed_multiplier(), 1.0);
        assert_eq!(MotionPreference::Reduced.speed_multiplier(), 0.25);
        assert_eq!(MotionPreference::None.speed_multiplier(), 0.0);
    }

    #[test]
    fn test_replay_gating() {
        assert!(MotionPreference::Full.allows_replay());
        assert!(MotionPreference::Reduced.allows_replay());
        assert!(!MotionPreference::None.allows_replay());
    }
}
