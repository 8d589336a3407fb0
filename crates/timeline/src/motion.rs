//! Pan/crop motion bounds: a keyframed quadrilateral in pixel space.
//!
//! The bounds quad supports rotation and skew elsewhere in the host, so the
//! engine only ever *translates* it. A keyframe inserted mid-track inherits
//! the bounds of the latest keyframe at or before it — a new keyframe starts
//! from the current state, never from the frame default.

use serde::{Deserialize, Serialize};
use tp_common::{PixelDelta, PixelPoint, Resolution, TimeCode, ViewCutout};

/// The pan/crop bounding quadrilateral. Vertices are in pixel space
/// (y grows downward); an axis-aligned full-frame quad has `top_left` at
/// the origin.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MotionBounds {
    pub top_left: PixelPoint,
    pub top_right: PixelPoint,
    pub bottom_right: PixelPoint,
    pub bottom_left: PixelPoint,
}

impl MotionBounds {
    /// Axis-aligned quad covering the whole canvas.
    pub fn full_frame(res: Resolution) -> Self {
        let (w, h) = (res.width as f64, res.height as f64);
        Self {
            top_left: PixelPoint::new(0.0, 0.0),
            top_right: PixelPoint::new(w, 0.0),
            bottom_right: PixelPoint::new(w, h),
            bottom_left: PixelPoint::new(0.0, h),
        }
    }

    /// Translate all four vertices.
    pub fn translate(&mut self, delta: PixelDelta) {
        self.top_left = self.top_left.translated(delta);
        self.top_right = self.top_right.translated(delta);
        self.bottom_right = self.bottom_right.translated(delta);
        self.bottom_left = self.bottom_left.translated(delta);
    }

    /// Geometric midpoint of the quad.
    pub fn midpoint(&self) -> PixelPoint {
        PixelPoint::new(
            (self.top_left.x + self.top_right.x + self.bottom_right.x + self.bottom_left.x) / 4.0,
            (self.top_left.y + self.top_right.y + self.bottom_right.y + self.bottom_left.y) / 4.0,
        )
    }

    /// Describe the quad as a zoomed-view cutout.
    ///
    /// Width spans the top edge, height the left edge; the cutout origin is
    /// the left/bottom corner pair ([`ViewCutout`] documents why the two
    /// axes anchor differently).
    pub fn cutout(&self) -> ViewCutout {
        ViewCutout {
            origin_x: self.top_left.x,
            origin_y: self.bottom_left.y,
            width: self.top_right.x - self.top_left.x,
            height: self.bottom_left.y - self.top_left.y,
        }
    }
}

/// One keyframe of the motion track: the quad plus its rotation center.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MotionKeyframe {
    /// Time local to the owning event's start.
    pub time: TimeCode,
    pub bounds: MotionBounds,
    pub center: PixelPoint,
}

impl MotionKeyframe {
    /// Translate the keyframe's bounds and center together.
    pub fn move_by(&mut self, delta: PixelDelta) {
        self.bounds.translate(delta);
        self.center = self.center.translated(delta);
    }
}

/// The keyframed pan/crop track of one video event.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MotionTrack {
    /// Sorted by time; always holds at least the initial keyframe at zero.
    keyframes: Vec<MotionKeyframe>,
}

impl MotionTrack {
    /// A track seeded with one keyframe at time zero holding `initial`.
    pub fn new(initial: MotionBounds) -> Self {
        Self {
            keyframes: vec![MotionKeyframe {
                time: TimeCode::ZERO,
                bounds: initial,
                center: initial.midpoint(),
            }],
        }
    }

    pub fn keyframes(&self) -> &[MotionKeyframe] {
        &self.keyframes
    }

    /// Latest keyframe at or before `time`, or the first keyframe when
    /// `time` precedes the whole track.
    pub fn state_at(&self, time: TimeCode) -> &MotionKeyframe {
        let idx = self
            .keyframes
            .partition_point(|kf| kf.time.as_secs() <= time.as_secs());
        if idx == 0 {
            &self.keyframes[0]
        } else {
            &self.keyframes[idx - 1]
        }
    }

    /// Insert a keyframe at `time`, inheriting bounds and center from
    /// [`state_at`](Self::state_at). If a keyframe already sits at `time`,
    /// it is returned unchanged.
    pub fn insert_at(&mut self, time: TimeCode) -> &mut MotionKeyframe {
        if let Some(idx) = self
            .keyframes
            .iter()
            .position(|kf| kf.time.approx_eq(time))
        {
            return &mut self.keyframes[idx];
        }
        let inherited = *self.state_at(time);
        let idx = self
            .keyframes
            .partition_point(|kf| kf.time.as_secs() < time.as_secs());
        self.keyframes.insert(
            idx,
            MotionKeyframe {
                time,
                bounds: inherited.bounds,
                center: inherited.center,
            },
        );
        &mut self.keyframes[idx]
    }
}
