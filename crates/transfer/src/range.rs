//! Resolving the transferable time range between two timed regions.
//!
//! Intersection tests compare millisecond-converted bounds, but the
//! resolved range is assembled from the unconverted `TimeCode` values so
//! the offsets applied to produced keyframes never round-trip through
//! milliseconds.

use tp_common::{TimeCode, TimeRegion, TIME_EPSILON_SECS};

use crate::error::RangeError;

/// Tolerance for millisecond-converted comparisons.
///
/// The coverage checks below are equality checks on `max`/`min` of converted
/// doubles; a strict `==` would be fragile at sub-millisecond boundaries.
pub const EPSILON_MS: f64 = TIME_EPSILON_SECS * 1000.0;

/// How the caller picked the portion of the overlap to transfer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RangeStrategy {
    /// From this instant onwards, until one of the regions ends.
    Cursor(TimeCode),
    /// Exactly this range.
    ///
    /// An empty selection (`start == end`) resolves to a zero-length range
    /// and transfers at most the keyframe sitting on that instant; callers
    /// that forward a host selection verbatim should check for that case
    /// themselves.
    Selection(TimeRegion),
}

/// Compute the valid transfer range between two regions, or report why none
/// exists.
pub fn resolve_range(
    source: TimeRegion,
    target: TimeRegion,
    strategy: RangeStrategy,
) -> Result<TimeRegion, RangeError> {
    match strategy {
        RangeStrategy::Cursor(cursor) => {
            let cursor_ms = cursor.as_millis();
            let latest_start = source
                .start
                .as_millis()
                .max(target.start.as_millis())
                .max(cursor_ms);
            let earliest_end = source
                .end
                .as_millis()
                .min(target.end.as_millis())
                .min(cursor_ms);

            if (latest_start - cursor_ms).abs() > EPSILON_MS
                || (earliest_end - cursor_ms).abs() > EPSILON_MS
            {
                return Err(RangeError::CursorOutsideOverlap { cursor_ms });
            }

            let end = if source.end.as_millis() <= target.end.as_millis() {
                source.end
            } else {
                target.end
            };
            // The cursor may sit a hair past the earlier end and still pass
            // the tolerance check above.
            let end = if end.as_secs() < cursor.as_secs() {
                cursor
            } else {
                end
            };
            Ok(TimeRegion::new(cursor, end))
        }
        RangeStrategy::Selection(sel) => {
            let sel_start_ms = sel.start.as_millis();
            let sel_end_ms = sel.end.as_millis();
            let latest_start = source
                .start
                .as_millis()
                .max(target.start.as_millis())
                .max(sel_start_ms);
            let earliest_end = source
                .end
                .as_millis()
                .min(target.end.as_millis())
                .min(sel_end_ms);

            if (latest_start - sel_start_ms).abs() > EPSILON_MS
                || (earliest_end - sel_end_ms).abs() > EPSILON_MS
            {
                return Err(RangeError::SelectionOutsideOverlap {
                    start_ms: sel_start_ms,
                    end_ms: sel_end_ms,
                });
            }

            Ok(sel)
        }
    }
}
