//! The keyframe transfer engine.
//!
//! Both modes walk the source keyframes once, keep those whose global time
//! falls inside the resolved range (a filter, never a resample — output
//! density equals qualifying input density), and write onto the target with
//! its own local time origin:
//!
//! - **Absolute**: the value is copied as-is onto a normalized-space target
//!   parameter (picture-in-picture corner). Overwrite-or-insert makes the
//!   mode idempotent.
//! - **IncrementalDelta**: each sample becomes a relative translation of the
//!   previous motion keyframe's accumulated bounds (pan/crop). The bounds
//!   quad supports rotation and skew, so only translation is applied —
//!   manual bounds edits survive the transfer.

use tp_common::{to_pixel_delta, NormPoint, Resolution, TimeCode, TimeRegion};
use tp_timeline::{MotionTrack, Point2dParam, PointKeyframe};

use crate::range::EPSILON_MS;

/// How source samples land on the target.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TransferMode {
    /// Copy values directly (normalized-space target).
    Absolute,
    /// Apply pixel-space deltas on top of the previous target state.
    IncrementalDelta,
}

/// One resolved transfer: created per invocation, consumed once.
#[derive(Clone, Debug)]
pub struct TransferPlan {
    pub source: TimeRegion,
    pub target: TimeRegion,
    /// Resolved transfer range, expressed on the shared timeline.
    pub range: TimeRegion,
    pub mode: TransferMode,
}

/// What a transfer wrote, for driver-side messaging.
///
/// `written == 0` is the empty-transfer case: valid input, no qualifying
/// source samples, nothing changed.
#[derive(Clone, Debug)]
pub struct TransferReport {
    pub range: TimeRegion,
    pub written: usize,
}

/// Source keyframes whose global time falls inside the plan's range
/// (inclusive on both ends, tolerant at the boundaries), paired with that
/// global time.
fn qualifying<'a>(
    keys: &'a [PointKeyframe],
    source: TimeRegion,
    range: TimeRegion,
) -> impl Iterator<Item = (TimeCode, NormPoint)> + 'a {
    let start_ms = range.start.as_millis();
    let end_ms = range.end.as_millis();
    keys.iter().filter_map(move |kf| {
        let global = source.to_global(kf.time);
        let global_ms = global.as_millis();
        (global_ms >= start_ms - EPSILON_MS && global_ms <= end_ms + EPSILON_MS)
            .then_some((global, kf.value))
    })
}

/// Absolute-mode transfer onto a normalized-space 2-D parameter.
///
/// Returns the number of keyframes written.
pub fn transfer_absolute(
    keys: &[PointKeyframe],
    plan: &TransferPlan,
    target: &mut Point2dParam,
) -> usize {
    let mut written = 0;
    for (global, value) in qualifying(keys, plan.source, plan.range) {
        target.set_value_at(plan.target.to_local(global), value);
        written += 1;
    }
    tracing::debug!(written, range = %plan.range, "Absolute transfer complete");
    written
}

/// Incremental-delta transfer onto a pan/crop motion track.
///
/// An anchor keyframe is always written at the range start (local to the
/// target), freezing the bounds the deltas build on. The first qualifying
/// sample only primes the delta walk; every later sample writes one
/// translated keyframe. Returns the number of delta keyframes written
/// (excluding the anchor).
pub fn transfer_incremental(
    keys: &[PointKeyframe],
    plan: &TransferPlan,
    res: Resolution,
    motion: &mut MotionTrack,
) -> usize {
    motion.insert_at(plan.target.to_local(plan.range.start));

    let mut last: Option<NormPoint> = None;
    let mut written = 0;
    for (global, value) in qualifying(keys, plan.source, plan.range) {
        let Some(prev) = last else {
            last = Some(value);
            continue;
        };
        let delta = to_pixel_delta(prev, value, res);
        motion
            .insert_at(plan.target.to_local(global))
            .move_by(delta);
        last = Some(value);
        written += 1;
    }
    tracing::debug!(written, range = %plan.range, "Incremental transfer complete");
    written
}
