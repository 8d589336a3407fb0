//! Conversions between normalized mask space, pixel motion-bounds space, and
//! a zoomed view cutout.
//!
//! Normalized Y grows upward (0 = bottom of frame) while pixel-space Y grows
//! downward, so every conversion between the two carries a sign flip. All
//! functions here are pure and total; callers guarantee a resolution with
//! `width > 0` and `height > 0`.

use crate::types::{NormPoint, PixelDelta, Resolution};

/// Pixel-space offset between two normalized positions.
///
/// `dx = (curr.x - prev.x) * width`, `dy = -(curr.y - prev.y) * height`.
/// The result is not clamped — a tracked point leaving the frame produces a
/// delta larger than the frame, and that is valid input for motion bounds.
pub fn to_pixel_delta(prev: NormPoint, curr: NormPoint, res: Resolution) -> PixelDelta {
    PixelDelta {
        dx: (curr.x - prev.x) * res.width as f64,
        dy: -((curr.y - prev.y) * res.height as f64),
    }
}

/// The visible cutout of a zoomed/panned view, in pixel space.
///
/// The horizontal origin is the cutout's left edge; the vertical origin is
/// its *bottom* edge. The asymmetry matters: [`view_to_normalized`] adds
/// along X but subtracts along Y, and that pairing is what keeps a tracked
/// point visually stationary when the zoom is removed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViewCutout {
    pub origin_x: f64,
    pub origin_y: f64,
    pub width: f64,
    pub height: f64,
}

/// Re-express a normalized position recorded inside a zoomed cutout as a
/// normalized position of the full frame.
pub fn view_to_normalized(cutout: ViewCutout, value: NormPoint, res: Resolution) -> NormPoint {
    let px = cutout.origin_x + cutout.width * value.x;
    let py = cutout.origin_y - cutout.height * value.y;
    NormPoint {
        x: px / res.width as f64,
        y: 1.0 - py / res.height as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_delta_for_identical_points() {
        let p = NormPoint::new(0.3, 0.7);
        assert_eq!(to_pixel_delta(p, p, Resolution::HD), PixelDelta::ZERO);
    }

    #[test]
    fn delta_scales_and_flips_y() {
        // (0.5, 0.5) -> (0.6, 0.4) on a 1920x1080 canvas:
        // dx = 0.1 * 1920 = 192, dy = -(-0.1) * 1080 = 108.
        let prev = NormPoint::new(0.5, 0.5);
        let curr = NormPoint::new(0.6, 0.4);
        let d = to_pixel_delta(prev, curr, Resolution::HD);
        assert!((d.dx - 192.0).abs() < 1e-9);
        assert!((d.dy - 108.0).abs() < 1e-9);
    }

    #[test]
    fn delta_may_exceed_frame_bounds() {
        let prev = NormPoint::new(0.0, 0.0);
        let curr = NormPoint::new(2.0, -1.0);
        let d = to_pixel_delta(prev, curr, Resolution::HD);
        assert!((d.dx - 3840.0).abs() < 1e-9);
        assert!((d.dy - 1080.0).abs() < 1e-9);
    }

    #[test]
    fn full_frame_cutout_is_identity() {
        let res = Resolution::HD;
        let cutout = ViewCutout {
            origin_x: 0.0,
            origin_y: res.height as f64,
            width: res.width as f64,
            height: res.height as f64,
        };
        let v = NormPoint::new(0.25, 0.8);
        let mapped = view_to_normalized(cutout, v, res);
        assert!((mapped.x - v.x).abs() < 1e-12);
        assert!((mapped.y - v.y).abs() < 1e-12);
    }

    #[test]
    fn half_frame_zoom_maps_into_cutout() {
        // Cutout covering the top-right quadrant of an HD frame.
        let res = Resolution::HD;
        let cutout = ViewCutout {
            origin_x: 960.0,
            origin_y: 540.0,
            width: 960.0,
            height: 540.0,
        };
        // The cutout center lands at the center of the quadrant.
        let mapped = view_to_normalized(cutout, NormPoint::CENTER, res);
        assert!((mapped.x - 0.75).abs() < 1e-12);
        assert!((mapped.y - 0.75).abs() < 1e-12);
    }
}
