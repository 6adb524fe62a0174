//! Patch (face and edge) styling.

use serde::Deserialize;

use super::color::Color;
use super::line_style::DashPattern;

/// Face and edge of a filled shape. `None` on either side paints nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct FillStyle {
    pub face: Option<Color>,
    pub edge: Option<Color>,
    pub edge_width: f64,
    pub dash: DashPattern,
    /// Face opacity, 0.0-1.0
    pub opacity: f64,
}

impl FillStyle {
    /// Solid face, no edge.
    pub fn new(face: impl Into<Color>) -> Self {
        FillStyle {
            face: Some(face.into()),
            ..Default::default()
        }
    }

    /// Edge only, no face.
    pub fn outline(edge: impl Into<Color>, width: f64) -> Self {
        FillStyle {
            edge: Some(edge.into()),
            edge_width: width,
            ..Default::default()
        }
    }

    pub fn to_svg_style(&self) -> String {
        let mut attrs = Vec::new();
        match self.face {
            Some(ref face) if !face.is_none() => {
                attrs.push(format!("fill=\"{}\"", face.to_svg_string()));
                if self.opacity < 1.0 {
                    attrs.push(format!("fill-opacity=\"{}\"", self.opacity));
                }
            }
            _ => attrs.push("fill=\"none\"".to_string()),
        }
        match self.edge {
            Some(ref edge) if !edge.is_none() => {
                attrs.push(format!("stroke=\"{}\"", edge.to_svg_string()));
                attrs.push(format!("stroke-width=\"{}\"", self.edge_width));
                if let Some(dasharray) = self.dash.to_svg_dasharray() {
                    attrs.push(format!("stroke-dasharray=\"{}\"", dasharray));
                }
            }
            _ => attrs.push("stroke=\"none\"".to_string()),
        }
        attrs.join(" ")
    }
}

impl Default for FillStyle {
    fn default() -> Self {
        FillStyle {
            face: None,
            edge: None,
            edge_width: 1.0,
            dash: DashPattern::Solid,
            opacity: 1.0,
        }
    }
}

/// Per-call overrides for a patch, merged over a component's defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PatchOverrides {
    pub face: Option<Color>,
    pub edge: Option<Color>,
    pub edge_width: Option<f64>,
    pub dash: Option<DashPattern>,
    pub opacity: Option<f64>,
}

impl PatchOverrides {
    pub fn face(mut self, color: impl Into<Color>) -> Self {
        self.face = Some(color.into());
        self
    }

    pub fn edge(mut self, color: impl Into<Color>) -> Self {
        self.edge = Some(color.into());
        self
    }

    pub fn edge_width(mut self, width: f64) -> Self {
        self.edge_width = Some(width);
        self
    }

    pub fn dash(mut self, dash: DashPattern) -> Self {
        self.dash = Some(dash);
        self
    }

    pub fn apply(&self, mut base: FillStyle) -> FillStyle {
        if let Some(ref face) = self.face {
            base.face = Some(face.clone());
        }
        if let Some(ref edge) = self.edge {
            base.edge = Some(edge.clone());
        }
        if let Some(width) = self.edge_width {
            base.edge_width = width;
        }
        if let Some(ref dash) = self.dash {
            base.dash = dash.clone();
        }
        if let Some(opacity) = self.opacity {
            base.opacity = opacity.clamp(0.0, 1.0);
        }
        base
    }
}
