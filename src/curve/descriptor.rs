//! Payloads delivered by the graph extraction step
//!
//! These mirror the JSON the extraction service returns. Missing fields are
//! filled the way that service fills them: ids `curve-<n>`, names
//! `Curve <n>`, axes `x` and `y`.

use serde::{Deserialize, Serialize};

use super::curve::Curve;

fn default_x_axis() -> String {
    "x".to_string()
}

fn default_y_axis() -> String {
    "y".to_string()
}

fn default_success() -> bool {
    true
}

/// One curve as described by the extraction step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveDescriptor {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub equation: String,

    #[serde(default = "default_x_axis")]
    pub x_axis: String,

    #[serde(default = "default_y_axis")]
    pub y_axis: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_range: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CurveDescriptor {
    pub fn new(id: &str, name: &str, equation: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            equation: equation.to_string(),
            x_axis: default_x_axis(),
            y_axis: default_y_axis(),
            x_range: None,
            notes: None,
        }
    }

    /// Build the curve at position `index` (zero-based) of its batch
    pub fn into_curve(self, index: usize) -> Curve {
        let id = if self.id.trim().is_empty() {
            format!("curve-{}", index + 1)
        } else {
            self.id
        };
        let name = if self.name.trim().is_empty() {
            format!("Curve {}", index + 1)
        } else {
            self.name
        };

        let mut curve = Curve::new(&id, &name, &self.equation).with_axes(&self.x_axis, &self.y_axis);

        // The service sends "" rather than omitting these
        if let Some(range) = self.x_range.filter(|r| !r.trim().is_empty()) {
            curve = curve.with_domain_hint(&range);
        }
        if let Some(notes) = self.notes.filter(|n| !n.trim().is_empty()) {
            curve = curve.with_notes(&notes);
        }
        curve
    }
}

/// Full response of one graph analysis call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphAnalysis {
    #[serde(default = "default_success")]
    pub success: bool,

    #[serde(default)]
    pub curves: Vec<CurveDescriptor>,

    #[serde(default)]
    pub graph_description: String,

    /// Present when the call answered a free-form question instead of extracting curves
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_answer: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
