//! Named effects and their parameter lists.

use serde::{Deserialize, Serialize};

use crate::param::{ChoiceParam, Point2dParam, ScalarParam, ToggleParam};

/// The kinds of parameter a host effect exposes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum ParamKind {
    Point2d(Point2dParam),
    Scalar(ScalarParam),
    Toggle(ToggleParam),
    Choice(ChoiceParam),
}

/// A named parameter on an effect.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    pub kind: ParamKind,
}

/// An effect attached to a video event, identified by its host name.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Effect {
    pub name: String,
    pub params: Vec<Param>,
}

impl Effect {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
        }
    }

    pub fn with_point2d(mut self, name: impl Into<String>, param: Point2dParam) -> Self {
        self.params.push(Param {
            name: name.into(),
            kind: ParamKind::Point2d(param),
        });
        self
    }

    pub fn with_scalar(mut self, name: impl Into<String>, param: ScalarParam) -> Self {
        self.params.push(Param {
            name: name.into(),
            kind: ParamKind::Scalar(param),
        });
        self
    }

    pub fn with_toggle(mut self, name: impl Into<String>, value: bool) -> Self {
        self.params.push(Param {
            name: name.into(),
            kind: ParamKind::Toggle(ToggleParam { value }),
        });
        self
    }

    pub fn with_choice(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push(Param {
            name: name.into(),
            kind: ParamKind::Choice(ChoiceParam {
                value: value.into(),
            }),
        });
        self
    }

    pub fn find_param(&self, name: &str) -> Option<&Param> {
        self.params.iter().find(|p| p.name == name)
    }

    pub fn find_param_mut(&mut self, name: &str) -> Option<&mut Param> {
        self.params.iter_mut().find(|p| p.name == name)
    }

    /// Typed lookup of a 2-D point parameter.
    pub fn point2d(&self, name: &str) -> Option<&Point2dParam> {
        match self.find_param(name) {
            Some(Param {
                kind: ParamKind::Point2d(p),
                ..
            }) => Some(p),
            _ => None,
        }
    }

    pub fn point2d_mut(&mut self, name: &str) -> Option<&mut Point2dParam> {
        match self.find_param_mut(name) {
            Some(Param {
                kind: ParamKind::Point2d(p),
                ..
            }) => Some(p),
            _ => None,
        }
    }

    pub fn scalar(&self, name: &str) -> Option<&ScalarParam> {
        match self.find_param(name) {
            Some(Param {
                kind: ParamKind::Scalar(p),
                ..
            }) => Some(p),
            _ => None,
        }
    }

    pub fn scalar_mut(&mut self, name: &str) -> Option<&mut ScalarParam> {
        match self.find_param_mut(name) {
            Some(Param {
                kind: ParamKind::Scalar(p),
                ..
            }) => Some(p),
            _ => None,
        }
    }

    pub fn toggle(&self, name: &str) -> Option<bool> {
        match self.find_param(name) {
            Some(Param {
                kind: ParamKind::Toggle(p),
                ..
            }) => Some(p.value),
            _ => None,
        }
    }

    pub fn choice(&self, name: &str) -> Option<&str> {
        match self.find_param(name) {
            Some(Param {
                kind: ParamKind::Choice(p),
                ..
            }) => Some(p.value.as_str()),
            _ => None,
        }
    }
}
