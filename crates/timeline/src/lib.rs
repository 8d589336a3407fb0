//! `tp-timeline` — Host-side timeline model for the TrackPort engine.
//!
//! This crate holds the data the engine reads and writes: video events with
//! their timed placement, named effects with keyframed parameter tracks, the
//! pan/crop motion-bounds track, and the fixed parameter-name contract
//! shared with the host effect definitions. The driver builds these values
//! from its project; the engine in `tp-transfer` consumes and mutates them.
//!
//! # Usage
//!
//! ```rust
//! use tp_common::{NormPoint, Resolution, TimeRegion};
//! use tp_timeline::{names, Effect, Point2dParam, VideoEvent};
//!
//! let event = VideoEvent::new("clip_1", TimeRegion::from_secs(0.0, 5.0), Resolution::HD)
//!     .with_effect(
//!         Effect::new(names::MOTION_TRACKING_FX)
//!             .with_toggle(names::enable(0), true)
//!             .with_point2d(names::location(0), Point2dParam::new(NormPoint::CENTER)),
//!     );
//! assert!(event.has_effect(names::MOTION_TRACKING_FX));
//! ```

pub mod effect;
pub mod event;
pub mod motion;
pub mod names;
pub mod param;

// Re-export primary API
pub use effect::{Effect, Param, ParamKind};
pub use event::VideoEvent;
pub use motion::{MotionBounds, MotionKeyframe, MotionTrack};
pub use names::Corner;
pub use param::{
    ChoiceParam, Point2dParam, PointKeyframe, ScalarKeyframe, ScalarParam, ToggleParam,
};
