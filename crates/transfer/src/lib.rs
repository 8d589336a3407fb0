//! `tp-transfer` — Motion parameter transfer engine.
//!
//! This crate moves 2-D motion-tracking keyframes between timed events:
//!
//! - **Range resolution**: computing the valid overlapping interval of two
//!   regions from a cursor position or an explicit selection
//! - **Choice registries**: bitmask bookkeeping for mask channels and
//!   picture-in-picture corners across a multi-pair session
//! - **Transfer engine**: the keyframe walk, in absolute-copy mode (corner
//!   targets) or incremental-delta mode (pan/crop targets)
//! - **Precise adjust**: the single-keyframe inverse mapping that re-anchors
//!   a mask after a pan/crop zoom
//! - **Operations**: the driver-facing entry points combining the above,
//!   with fail-fast validation, plus a small effect-name diagnostic
//!
//! The engine runs synchronously to completion inside one invocation and
//! holds no state across invocations.
//!
//! # Usage
//!
//! ```rust
//! use tp_common::{Resolution, TimeCode};
//! use tp_transfer::{copy_to_crop_center, RangeStrategy};
//! # use tp_common::{NormPoint, TimeRegion};
//! # use tp_timeline::{names, Effect, Point2dParam, VideoEvent};
//! # let mut fx = Effect::new(names::MOTION_TRACKING_FX)
//! #     .with_point2d(names::location(0), Point2dParam::new(NormPoint::CENTER));
//! # for i in 0..5 {
//! #     fx = fx.with_toggle(names::enable(i), i == 0);
//! # }
//! # let mut events = vec![
//! #     VideoEvent::new("src", TimeRegion::from_secs(0.0, 5.0), Resolution::HD).with_effect(fx),
//! #     VideoEvent::new("tgt", TimeRegion::from_secs(2.0, 8.0), Resolution::HD),
//! # ];
//!
//! let report = copy_to_crop_center(
//!     &mut events,
//!     Resolution::HD,
//!     0,
//!     RangeStrategy::Cursor(TimeCode::from_secs(3.0)),
//! )?;
//! assert_eq!(report.written, 0); // no keyframes inside the range: a no-op
//! # Ok::<(), tp_transfer::TransferError>(())
//! ```

pub mod adjust;
pub mod engine;
pub mod error;
pub mod ops;
pub mod range;
pub mod registry;
pub mod session;

// Re-export primary API
pub use adjust::{adjust_mask, AdjustOutcome};
pub use engine::{
    transfer_absolute, transfer_incremental, TransferMode, TransferPlan, TransferReport,
};
pub use error::{RangeError, SlotUnavailable, TransferError};
pub use ops::{copy_to_crop_center, copy_to_pip_corners, effect_names, precise_adjust};
pub use range::{resolve_range, RangeStrategy, EPSILON_MS};
pub use registry::ChoiceRegistry;
pub use session::{choose_corner, choose_mask, pair_session, OptionPicker};
