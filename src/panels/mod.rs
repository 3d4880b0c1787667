//! Engine-facing model of live authoring panels.
//!
//! Panels and their controls are owned by the external canvas editor; the
//! engine only reads and writes control values on panels that already exist.
//! The host hands the engine `Panel` views of its live instances and receives
//! redraw requests back through [`RedrawSink`].

pub mod classifier;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::profiles::FieldValue;

pub use classifier::{is_content_control, segment_for, segment_label, PROFILE_SELECTOR_CONTROL};

/// Distinguishes content-bearing controls from transient action triggers
/// (buttons, refresh handles). Only `Field` controls participate in
/// collect/apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlKind {
    Field,
    Action,
}

/// A named control on a panel, holding its current scalar value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Control {
    pub name: String,
    pub kind: ControlKind,
    pub value: FieldValue,
}

impl Control {
    /// A content field holding the given value.
    pub fn field(name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self {
            name: name.into(),
            kind: ControlKind::Field,
            value: value.into(),
        }
    }

    /// An action/trigger control; its value slot is never collected.
    pub fn action(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ControlKind::Action,
            value: FieldValue::Text(String::new()),
        }
    }
}

/// A live authoring-panel instance with a type identifier and its controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    /// Stable instance identity assigned when the host creates the panel.
    pub id: Uuid,
    /// Panel-type identifier resolved through the segment classifier.
    pub type_id: String,
    pub controls: Vec<Control>,
}

impl Panel {
    pub fn new(type_id: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            type_id: type_id.into(),
            controls: Vec::new(),
        }
    }

    pub fn with_controls(type_id: impl Into<String>, controls: Vec<Control>) -> Self {
        Self {
            id: Uuid::new_v4(),
            type_id: type_id.into(),
            controls,
        }
    }

    pub fn control(&self, name: &str) -> Option<&Control> {
        self.controls.iter().find(|control| control.name == name)
    }

    pub fn control_mut(&mut self, name: &str) -> Option<&mut Control> {
        self.controls
            .iter_mut()
            .find(|control| control.name == name)
    }
}

/// Redraw/invalidation seam into the host editor. The applier calls this for
/// every panel it touched so the host can refresh the visuals; the engine
/// treats it as an opaque callback.
pub trait RedrawSink {
    fn request_redraw(&mut self, panel: Uuid);
}

/// Sink that discards redraw requests, for headless use.
#[derive(Debug, Default)]
pub struct NullRedraw;

impl RedrawSink for NullRedraw {
    fn request_redraw(&mut self, _panel: Uuid) {}
}
