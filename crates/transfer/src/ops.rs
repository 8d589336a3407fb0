//! Top-level transfer operations, one per host action.
//!
//! Each operation validates everything it can before the first write:
//! selection shape, effect presence and mode, channel/corner availability,
//! parameter lookups, and the time range. A validation failure leaves every
//! event untouched.

use tp_common::{Resolution, TimeCode};
use tp_timeline::names::{
    self, MASK_CHANNELS, MOTION_TRACKING_FX, PIP_FX, PIP_MODE_FREE_FORM, PIP_MODE_PARAM,
};
use tp_timeline::{Corner, Effect, PointKeyframe, VideoEvent};

use crate::adjust::{adjust_mask, AdjustOutcome};
use crate::engine::{
    transfer_absolute, transfer_incremental, TransferMode, TransferPlan, TransferReport,
};
use crate::error::TransferError;
use crate::range::{resolve_range, RangeStrategy};
use crate::registry::ChoiceRegistry;

fn effect_not_found(effect: &str) -> TransferError {
    TransferError::EffectNotFound {
        effect: effect.to_string(),
    }
}

fn param_not_found(effect: &str, param: impl Into<String>) -> TransferError {
    TransferError::ParamNotFound {
        effect: effect.to_string(),
        param: param.into(),
    }
}

fn expect_selection(events: &[VideoEvent], expected: usize) -> Result<(), TransferError> {
    if events.len() != expected {
        return Err(TransferError::SelectionCount {
            expected,
            got: events.len(),
        });
    }
    Ok(())
}

/// Index of the selected event carrying the motion-tracking effect.
fn source_index(events: &[VideoEvent]) -> Result<usize, TransferError> {
    events
        .iter()
        .position(|ev| ev.has_effect(MOTION_TRACKING_FX))
        .ok_or_else(|| effect_not_found(MOTION_TRACKING_FX))
}

/// Read the five `Enable_{i}` flags off the masking effect.
fn enable_flags(fx: &Effect) -> Result<[bool; MASK_CHANNELS], TransferError> {
    let mut flags = [false; MASK_CHANNELS];
    for (i, flag) in flags.iter_mut().enumerate() {
        let name = names::enable(i);
        *flag = fx
            .toggle(&name)
            .ok_or_else(|| param_not_found(&fx.name, name))?;
    }
    Ok(flags)
}

/// Copy the tracked motion of one mask channel onto the other selected
/// event's pan/crop center, as incremental translations.
///
/// The two events may come in either order; the one carrying the
/// motion-tracking effect is the source, the other is the target.
pub fn copy_to_crop_center(
    events: &mut [VideoEvent],
    res: Resolution,
    channel: usize,
    strategy: RangeStrategy,
) -> Result<TransferReport, TransferError> {
    expect_selection(events, 2)?;
    let src = source_index(events)?;
    let tgt = 1 - src;

    let source_region = events[src].region;
    let target_region = events[tgt].region;

    let keys: Vec<PointKeyframe> = {
        let fx = events[src]
            .find_effect(MOTION_TRACKING_FX)
            .ok_or_else(|| effect_not_found(MOTION_TRACKING_FX))?;
        let mut masks = ChoiceRegistry::masks(enable_flags(fx)?);
        masks
            .consume(channel)
            .map_err(|_| TransferError::ChannelNotAvailable { channel })?;

        let location = names::location(channel);
        fx.point2d(&location)
            .ok_or_else(|| param_not_found(&fx.name, location))?
            .keyframes()
            .to_vec()
    };

    let range = resolve_range(source_region, target_region, strategy)?;
    let plan = TransferPlan {
        source: source_region,
        target: target_region,
        range,
        mode: TransferMode::IncrementalDelta,
    };
    let written = transfer_incremental(&keys, &plan, res, &mut events[tgt].motion);

    if written == 0 {
        tracing::info!(channel, range = %range, "No qualifying source keyframes, transfer is a no-op");
    } else {
        tracing::info!(
            channel,
            written,
            range = %range,
            source = %events[src].id,
            target = %events[tgt].id,
            "Copied mask motion onto pan/crop center"
        );
    }
    Ok(TransferReport { range, written })
}

/// Copy the tracked motion of one or more mask channels onto corners of the
/// other selected event's picture-in-picture effect, as absolute values.
///
/// `pairs` is the outcome of a pairing session (see
/// [`pair_session`](crate::session::pair_session)); each mask channel and
/// each corner may appear at most once.
pub fn copy_to_pip_corners(
    events: &mut [VideoEvent],
    pairs: &[(usize, Corner)],
    strategy: RangeStrategy,
) -> Result<TransferReport, TransferError> {
    expect_selection(events, 2)?;
    let src = source_index(events)?;
    let tgt = 1 - src;

    let source_region = events[src].region;
    let target_region = events[tgt].region;

    // Target side: the picture-in-picture effect must exist, be in free-form
    // mode, and expose every requested corner parameter.
    {
        let pip = events[tgt]
            .find_effect(PIP_FX)
            .ok_or_else(|| effect_not_found(PIP_FX))?;
        let mode = pip
            .choice(PIP_MODE_PARAM)
            .ok_or_else(|| param_not_found(&pip.name, PIP_MODE_PARAM))?;
        if mode != PIP_MODE_FREE_FORM {
            return Err(TransferError::WrongEffectMode {
                effect: PIP_FX.to_string(),
                expected: PIP_MODE_FREE_FORM.to_string(),
                got: mode.to_string(),
            });
        }
        for &(_, corner) in pairs {
            if pip.point2d(corner.param_name()).is_none() {
                return Err(param_not_found(&pip.name, corner.param_name()));
            }
        }
    }

    // Source side: claim each mask/corner pair and pull its keyframes.
    let mut batches: Vec<(Corner, Vec<PointKeyframe>)> = Vec::with_capacity(pairs.len());
    {
        let fx = events[src]
            .find_effect(MOTION_TRACKING_FX)
            .ok_or_else(|| effect_not_found(MOTION_TRACKING_FX))?;
        let mut masks = ChoiceRegistry::masks(enable_flags(fx)?);
        let mut corners = ChoiceRegistry::corners();
        for &(channel, corner) in pairs {
            masks
                .consume(channel)
                .map_err(|_| TransferError::ChannelNotAvailable { channel })?;
            corners
                .consume(corner.index())
                .map_err(|_| TransferError::CornerNotAvailable {
                    corner: corner.label().to_string(),
                })?;

            let location = names::location(channel);
            let keys = fx
                .point2d(&location)
                .ok_or_else(|| param_not_found(&fx.name, location))?
                .keyframes()
                .to_vec();
            batches.push((corner, keys));
        }
    }

    let range = resolve_range(source_region, target_region, strategy)?;
    let plan = TransferPlan {
        source: source_region,
        target: target_region,
        range,
        mode: TransferMode::Absolute,
    };

    let pip = events[tgt]
        .find_effect_mut(PIP_FX)
        .ok_or_else(|| effect_not_found(PIP_FX))?;
    let mut written = 0;
    for (corner, keys) in &batches {
        let param = pip
            .point2d_mut(corner.param_name())
            .ok_or_else(|| param_not_found(PIP_FX, corner.param_name()))?;
        written += transfer_absolute(keys, &plan, param);
    }

    tracing::info!(
        pairs = pairs.len(),
        written,
        range = %range,
        "Copied mask motion onto picture-in-picture corners"
    );
    Ok(TransferReport { range, written })
}

/// Re-anchor a mask channel of the single selected event after a pan/crop
/// zoom, resetting the zoom in the process.
pub fn precise_adjust(
    events: &mut [VideoEvent],
    res: Resolution,
    channel: usize,
    cursor: TimeCode,
    rescale_mask: bool,
) -> Result<AdjustOutcome, TransferError> {
    expect_selection(events, 1)?;
    let event = &mut events[0];
    let region = event.region;

    {
        let fx = event
            .find_effect(MOTION_TRACKING_FX)
            .ok_or_else(|| effect_not_found(MOTION_TRACKING_FX))?;
        let mut masks = ChoiceRegistry::masks(enable_flags(fx)?);
        masks
            .consume(channel)
            .map_err(|_| TransferError::ChannelNotAvailable { channel })?;
    }

    // The cursor must sit inside the event; the resolver's cursor arithmetic
    // against the single region does the millisecond-tolerant check.
    resolve_range(region, region, RangeStrategy::Cursor(cursor))?;
    let local_time = region.to_local(cursor);

    let VideoEvent {
        effects, motion, ..
    } = event;
    let fx = effects
        .iter_mut()
        .find(|fx| fx.name == MOTION_TRACKING_FX)
        .ok_or_else(|| effect_not_found(MOTION_TRACKING_FX))?;

    let outcome = adjust_mask(fx, motion, res, local_time, channel, rescale_mask)?;
    tracing::info!(
        channel,
        value = %outcome.value,
        rescaled = outcome.rescaled,
        "Precise adjust complete"
    );
    Ok(outcome)
}

/// List the host names of every effect on the single selected event.
///
/// The naming contract only works when the host's effect names match the
/// constants in [`tp_timeline::names`] exactly; this is how a driver lets
/// the user read off what the host actually reports.
pub fn effect_names(events: &[VideoEvent]) -> Result<Vec<String>, TransferError> {
    expect_selection(events, 1)?;
    Ok(events[0].effects.iter().map(|fx| fx.name.clone()).collect())
}
