//! A selected video event: timed placement, effect chain, and motion track.

use serde::{Deserialize, Serialize};
use tp_common::{Resolution, TimeRegion};

use crate::effect::Effect;
use crate::motion::{MotionBounds, MotionTrack};

/// One video event as handed over by the host's selection query.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VideoEvent {
    /// Host-side identifier, used in error context and log output.
    pub id: String,
    /// Placement on the shared timeline.
    pub region: TimeRegion,
    /// Effects attached to this event, in chain order.
    pub effects: Vec<Effect>,
    /// The event's pan/crop track.
    pub motion: MotionTrack,
}

impl VideoEvent {
    /// An event whose motion track starts at the full-frame default.
    pub fn new(id: impl Into<String>, region: TimeRegion, res: Resolution) -> Self {
        Self {
            id: id.into(),
            region,
            effects: Vec::new(),
            motion: MotionTrack::new(MotionBounds::full_frame(res)),
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn find_effect(&self, name: &str) -> Option<&Effect> {
        self.effects.iter().find(|fx| fx.name == name)
    }

    pub fn find_effect_mut(&mut self, name: &str) -> Option<&mut Effect> {
        self.effects.iter_mut().find(|fx| fx.name == name)
    }

    pub fn has_effect(&self, name: &str) -> bool {
        self.find_effect(name).is_some()
    }
}
