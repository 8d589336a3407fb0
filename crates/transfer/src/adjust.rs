//! Re-anchoring a mask after a pan/crop zoom.
//!
//! With the event zoomed in, the tracked point's normalized value is
//! expressed relative to the visible cutout. Resetting the zoom without
//! touching the value would visually teleport the point; this transform
//! rewrites the value through the inverse view mapping first, so the point
//! keeps referencing the same on-screen pixel.

use tp_common::{view_to_normalized, NormPoint, Resolution, TimeCode};
use tp_timeline::{names, Effect, MotionBounds, MotionTrack};

use crate::error::TransferError;

/// Outcome of a precise adjust, for driver-side messaging.
#[derive(Clone, Debug)]
pub struct AdjustOutcome {
    /// The mask's re-anchored normalized position.
    pub value: NormPoint,
    /// Whether the mask's width/height were rescaled along with the reset.
    pub rescaled: bool,
}

fn missing(effect: &str, param: &str) -> TransferError {
    TransferError::ParamNotFound {
        effect: effect.to_string(),
        param: param.to_string(),
    }
}

/// Recompute mask channel `channel` of `fx` so it keeps referencing the same
/// on-screen pixel once the event's zoom is reset, then reset the zoom.
///
/// `local_time` is the cursor position relative to the event's start. With
/// `rescale_mask` the mask's width/height shrink proportionally to the
/// zoom-out. Applying the transform twice with `rescale_mask` set compounds
/// the reduction — it is a single-use operation per zoom state.
pub fn adjust_mask(
    fx: &mut Effect,
    motion: &mut MotionTrack,
    res: Resolution,
    local_time: TimeCode,
    channel: usize,
    rescale_mask: bool,
) -> Result<AdjustOutcome, TransferError> {
    let fx_name = fx.name.clone();
    let location = names::location(channel);
    let width = names::width(channel);
    let height = names::height(channel);

    // Every lookup happens before the first write.
    if fx.point2d(&location).is_none() {
        return Err(missing(&fx_name, &location));
    }
    if rescale_mask {
        if fx.scalar(&width).is_none() {
            return Err(missing(&fx_name, &width));
        }
        if fx.scalar(&height).is_none() {
            return Err(missing(&fx_name, &height));
        }
    }

    // The zoomed view at the cursor. The reset below must not happen before
    // this read.
    let cutout = motion.insert_at(local_time).bounds.cutout();

    let old = fx
        .point2d(&location)
        .ok_or_else(|| missing(&fx_name, &location))?
        .value_at(local_time);
    let new_value = view_to_normalized(cutout, old, res);
    fx.point2d_mut(&location)
        .ok_or_else(|| missing(&fx_name, &location))?
        .set_value_at(local_time, new_value);

    if rescale_mask {
        let width_relation = res.width as f64 / cutout.width;
        let height_relation = res.height as f64 / cutout.height;

        let mask_width = fx
            .scalar(&width)
            .ok_or_else(|| missing(&fx_name, &width))?
            .value_at(local_time);
        fx.scalar_mut(&width)
            .ok_or_else(|| missing(&fx_name, &width))?
            .set_value_at(local_time, mask_width / width_relation);

        let mask_height = fx
            .scalar(&height)
            .ok_or_else(|| missing(&fx_name, &height))?
            .value_at(local_time);
        fx.scalar_mut(&height)
            .ok_or_else(|| missing(&fx_name, &height))?
            .set_value_at(local_time, mask_height / height_relation);
    }

    // Zoom reset, strictly after the cutout read above.
    let kf = motion.insert_at(local_time);
    kf.bounds = MotionBounds::full_frame(res);
    kf.center = kf.bounds.midpoint();

    tracing::debug!(
        channel,
        value = %new_value,
        rescaled = rescale_mask,
        "Mask re-anchored after zoom reset"
    );
    Ok(AdjustOutcome {
        value: new_value,
        rescaled: rescale_mask,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tp_common::{PixelDelta, PixelPoint, ViewCutout};
    use tp_timeline::{Point2dParam, ScalarParam};

    fn masking_fx(value: NormPoint) -> Effect {
        Effect::new(names::MOTION_TRACKING_FX)
            .with_point2d(names::location(0), Point2dParam::new(value))
            .with_scalar(names::width(0), ScalarParam::new(0.4))
            .with_scalar(names::height(0), ScalarParam::new(0.4))
    }

    /// Pixel position a normalized value refers to inside a cutout.
    fn pixel_of(cutout: ViewCutout, v: NormPoint) -> (f64, f64) {
        (
            cutout.origin_x + cutout.width * v.x,
            cutout.origin_y - cutout.height * v.y,
        )
    }

    fn full_frame_cutout(res: Resolution) -> ViewCutout {
        MotionBounds::full_frame(res).cutout()
    }

    #[test]
    fn tracked_point_stays_on_the_same_pixel() {
        let res = Resolution::HD;
        let old = NormPoint::new(0.3, 0.6);
        let mut fx = masking_fx(old);
        let mut motion = MotionTrack::new(MotionBounds::full_frame(res));

        // Zoom into the top-right quadrant.
        let kf = motion.insert_at(TimeCode::ZERO);
        kf.bounds = MotionBounds {
            top_left: PixelPoint::new(960.0, 0.0),
            top_right: PixelPoint::new(1920.0, 0.0),
            bottom_right: PixelPoint::new(1920.0, 540.0),
            bottom_left: PixelPoint::new(960.0, 540.0),
        };
        let zoomed = kf.bounds.cutout();

        let outcome = adjust_mask(&mut fx, &mut motion, res, TimeCode::ZERO, 0, false).unwrap();

        let before = pixel_of(zoomed, old);
        let after = pixel_of(full_frame_cutout(res), outcome.value);
        assert!((before.0 - after.0).abs() < 1e-9);
        assert!((before.1 - after.1).abs() < 1e-9);

        // The zoom itself is gone.
        let kf = motion.state_at(TimeCode::ZERO);
        assert_eq!(kf.bounds, MotionBounds::full_frame(res));
        assert_eq!(kf.center, PixelPoint::new(960.0, 540.0));
    }

    #[test]
    fn rescale_shrinks_mask_by_zoom_relation() {
        let res = Resolution::HD;
        let mut fx = masking_fx(NormPoint::CENTER);
        let mut motion = MotionTrack::new(MotionBounds::full_frame(res));

        // Half-size cutout: relation is 2 on both axes.
        let kf = motion.insert_at(TimeCode::ZERO);
        kf.bounds = MotionBounds {
            top_left: PixelPoint::new(0.0, 0.0),
            top_right: PixelPoint::new(960.0, 0.0),
            bottom_right: PixelPoint::new(960.0, 540.0),
            bottom_left: PixelPoint::new(0.0, 540.0),
        };

        let outcome = adjust_mask(&mut fx, &mut motion, res, TimeCode::ZERO, 0, true).unwrap();
        assert!(outcome.rescaled);

        let w = fx.scalar(&names::width(0)).unwrap().value_at(TimeCode::ZERO);
        let h = fx.scalar(&names::height(0)).unwrap().value_at(TimeCode::ZERO);
        assert!((w - 0.2).abs() < 1e-12);
        assert!((h - 0.2).abs() < 1e-12);
    }

    #[test]
    fn unzoomed_event_is_a_fixed_point_without_rescale() {
        let res = Resolution::HD;
        let old = NormPoint::new(0.25, 0.75);
        let mut fx = masking_fx(old);
        let mut motion = MotionTrack::new(MotionBounds::full_frame(res));

        let outcome = adjust_mask(&mut fx, &mut motion, res, TimeCode::ZERO, 0, false).unwrap();
        assert!((outcome.value.x - old.x).abs() < 1e-12);
        assert!((outcome.value.y - old.y).abs() < 1e-12);
    }

    #[test]
    fn missing_location_param_fails_before_any_write() {
        let res = Resolution::HD;
        let mut fx = Effect::new(names::MOTION_TRACKING_FX);
        let mut motion = MotionTrack::new(MotionBounds::full_frame(res));
        motion.insert_at(TimeCode::from_secs(1.0)).move_by(PixelDelta::new(5.0, 5.0));
        let before = motion.keyframes().to_vec();

        let err =
            adjust_mask(&mut fx, &mut motion, res, TimeCode::from_secs(2.0), 0, false).unwrap_err();
        assert!(matches!(err, TransferError::ParamNotFound { .. }));
        assert_eq!(motion.keyframes(), &before[..]);
    }

    #[test]
    fn missing_scale_params_only_matter_when_rescaling() {
        let res = Resolution::HD;
        let mut fx = Effect::new(names::MOTION_TRACKING_FX)
            .with_point2d(names::location(2), Point2dParam::new(NormPoint::CENTER));
        let mut motion = MotionTrack::new(MotionBounds::full_frame(res));

        assert!(adjust_mask(&mut fx, &mut motion, res, TimeCode::ZERO, 2, false).is_ok());
        let err = adjust_mask(&mut fx, &mut motion, res, TimeCode::ZERO, 2, true).unwrap_err();
        assert!(matches!(err, TransferError::ParamNotFound { .. }));
    }
}
