//! Keyframed parameter tracks.
//!
//! A parameter track holds time-ordered keyframes local to the owning
//! event's start. Reading between keyframes interpolates linearly and clamps
//! outside the track, matching how the host evaluates animated parameters.
//! Writing at a time that already holds a keyframe overwrites it instead of
//! appending a duplicate.

use serde::{Deserialize, Serialize};
use tp_common::{NormPoint, TimeCode};

/// A single 2-D keyframe (time is local to the owning event).
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointKeyframe {
    pub time: TimeCode,
    pub value: NormPoint,
}

/// A keyframed 2-D point parameter, e.g. a mask location or a
/// picture-in-picture corner.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Point2dParam {
    /// Value reported while the track has no keyframes.
    default: NormPoint,
    /// Sorted by time; insertion order equals time order.
    keyframes: Vec<PointKeyframe>,
}

impl Point2dParam {
    pub fn new(default: NormPoint) -> Self {
        Self {
            default,
            keyframes: Vec::new(),
        }
    }

    /// Build a track from existing keyframes, sorting them by time.
    pub fn with_keyframes(default: NormPoint, mut keyframes: Vec<PointKeyframe>) -> Self {
        keyframes.sort_by(|a, b| a.time.as_secs().total_cmp(&b.time.as_secs()));
        Self { default, keyframes }
    }

    pub fn keyframes(&self) -> &[PointKeyframe] {
        &self.keyframes
    }

    /// Evaluate the track at a local time.
    ///
    /// Before the first keyframe returns the first value, after the last
    /// returns the last, in between interpolates linearly.
    pub fn value_at(&self, time: TimeCode) -> NormPoint {
        let Some(first) = self.keyframes.first() else {
            return self.default;
        };
        let t = time.as_secs();
        if self.keyframes.len() == 1 || t <= first.time.as_secs() {
            return first.value;
        }
        let last = &self.keyframes[self.keyframes.len() - 1];
        if t >= last.time.as_secs() {
            return last.value;
        }
        for pair in self.keyframes.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            if t >= a.time.as_secs() && t < b.time.as_secs() {
                let dt = b.time.as_secs() - a.time.as_secs();
                if dt <= 0.0 {
                    return a.value;
                }
                let frac = (t - a.time.as_secs()) / dt;
                return NormPoint {
                    x: lerp(a.value.x, b.value.x, frac),
                    y: lerp(a.value.y, b.value.y, frac),
                };
            }
        }
        last.value
    }

    /// Write a value at a local time: overwrite the keyframe already sitting
    /// there, or insert a new one at the sorted position.
    pub fn set_value_at(&mut self, time: TimeCode, value: NormPoint) {
        if let Some(kf) = self.keyframes.iter_mut().find(|kf| kf.time.approx_eq(time)) {
            kf.value = value;
            return;
        }
        let idx = self
            .keyframes
            .partition_point(|kf| kf.time.as_secs() < time.as_secs());
        self.keyframes.insert(idx, PointKeyframe { time, value });
    }
}

/// A scalar keyframe (time is local to the owning event).
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScalarKeyframe {
    pub time: TimeCode,
    pub value: f64,
}

/// A keyframed scalar parameter, e.g. a mask width or height.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScalarParam {
    default: f64,
    keyframes: Vec<ScalarKeyframe>,
}

impl ScalarParam {
    pub fn new(default: f64) -> Self {
        Self {
            default,
            keyframes: Vec::new(),
        }
    }

    pub fn with_keyframes(default: f64, mut keyframes: Vec<ScalarKeyframe>) -> Self {
        keyframes.sort_by(|a, b| a.time.as_secs().total_cmp(&b.time.as_secs()));
        Self { default, keyframes }
    }

    pub fn keyframes(&self) -> &[ScalarKeyframe] {
        &self.keyframes
    }

    /// Evaluate the track at a local time (clamped ends, linear in between).
    pub fn value_at(&self, time: TimeCode) -> f64 {
        let Some(first) = self.keyframes.first() else {
            return self.default;
        };
        let t = time.as_secs();
        if self.keyframes.len() == 1 || t <= first.time.as_secs() {
            return first.value;
        }
        let last = &self.keyframes[self.keyframes.len() - 1];
        if t >= last.time.as_secs() {
            return last.value;
        }
        for pair in self.keyframes.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            if t >= a.time.as_secs() && t < b.time.as_secs() {
                let dt = b.time.as_secs() - a.time.as_secs();
                if dt <= 0.0 {
                    return a.value;
                }
                let frac = (t - a.time.as_secs()) / dt;
                return lerp(a.value, b.value, frac);
            }
        }
        last.value
    }

    /// Write a value at a local time (overwrite-or-insert).
    pub fn set_value_at(&mut self, time: TimeCode, value: f64) {
        if let Some(kf) = self.keyframes.iter_mut().find(|kf| kf.time.approx_eq(time)) {
            kf.value = value;
            return;
        }
        let idx = self
            .keyframes
            .partition_point(|kf| kf.time.as_secs() < time.as_secs());
        self.keyframes.insert(idx, ScalarKeyframe { time, value });
    }
}

/// A static boolean parameter (not keyframed), e.g. a mask enable flag.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ToggleParam {
    pub value: bool,
}

/// A static choice parameter, e.g. a picture-in-picture mode selector.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChoiceParam {
    pub value: String,
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(times_values: &[(f64, f64, f64)]) -> Point2dParam {
        Point2dParam::with_keyframes(
            NormPoint::CENTER,
            times_values
                .iter()
                .map(|&(t, x, y)| PointKeyframe {
                    time: TimeCode::from_secs(t),
                    value: NormPoint::new(x, y),
                })
                .collect(),
        )
    }

    #[test]
    fn empty_track_reports_default() {
        let p = Point2dParam::new(NormPoint::new(0.1, 0.9));
        assert_eq!(p.value_at(TimeCode::from_secs(3.0)), NormPoint::new(0.1, 0.9));
    }

    #[test]
    fn value_clamps_outside_track() {
        let p = track(&[(1.0, 0.2, 0.2), (2.0, 0.8, 0.6)]);
        assert_eq!(p.value_at(TimeCode::ZERO), NormPoint::new(0.2, 0.2));
        assert_eq!(p.value_at(TimeCode::from_secs(5.0)), NormPoint::new(0.8, 0.6));
    }

    #[test]
    fn value_interpolates_linearly() {
        let p = track(&[(0.0, 0.0, 1.0), (2.0, 1.0, 0.0)]);
        let mid = p.value_at(TimeCode::from_secs(1.0));
        assert!((mid.x - 0.5).abs() < 1e-12);
        assert!((mid.y - 0.5).abs() < 1e-12);
    }

    #[test]
    fn set_value_overwrites_existing_keyframe() {
        let mut p = track(&[(0.0, 0.1, 0.1), (1.0, 0.2, 0.2)]);
        p.set_value_at(TimeCode::from_secs(1.0), NormPoint::new(0.9, 0.9));
        assert_eq!(p.keyframes().len(), 2);
        assert_eq!(p.keyframes()[1].value, NormPoint::new(0.9, 0.9));
    }

    #[test]
    fn set_value_inserts_in_time_order() {
        let mut p = track(&[(0.0, 0.1, 0.1), (2.0, 0.3, 0.3)]);
        p.set_value_at(TimeCode::from_secs(1.0), NormPoint::new(0.2, 0.2));
        let times: Vec<f64> = p.keyframes().iter().map(|kf| kf.time.as_secs()).collect();
        assert_eq!(times, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn with_keyframes_sorts_input() {
        let p = track(&[(2.0, 0.3, 0.3), (0.0, 0.1, 0.1)]);
        assert!((p.keyframes()[0].time.as_secs() - 0.0).abs() < 1e-12);
    }

    #[test]
    fn scalar_track_interpolates_and_overwrites() {
        let mut p = ScalarParam::with_keyframes(
            0.0,
            vec![
                ScalarKeyframe {
                    time: TimeCode::ZERO,
                    value: 10.0,
                },
                ScalarKeyframe {
                    time: TimeCode::from_secs(2.0),
                    value: 20.0,
                },
            ],
        );
        assert!((p.value_at(TimeCode::from_secs(1.0)) - 15.0).abs() < 1e-12);
        p.set_value_at(TimeCode::ZERO, 5.0);
        assert_eq!(p.keyframes().len(), 2);
        assert!((p.value_at(TimeCode::ZERO) - 5.0).abs() < 1e-12);
    }
}
