//! Stroke styling for lines and patch edges.

use serde::Deserialize;

use super::color::Color;

/// Stroke dash pattern. Deserializes from `"solid"`, `"dashed"`, `"dotted"`
/// or `{"custom": [on, off, ...]}`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashPattern {
    #[default]
    Solid,
    Dashed,
    Dotted,
    /// Alternating on/off lengths in pixels
    Custom(Vec<f64>),
}

impl DashPattern {
    pub fn to_svg_dasharray(&self) -> Option<String> {
        match self {
            DashPattern::Solid => None,
            DashPattern::Dashed => Some("6,3".to_string()),
            DashPattern::Dotted => Some("1.5,2".to_string()),
            DashPattern::Custom(lengths) if lengths.is_empty() => None,
            DashPattern::Custom(lengths) => Some(
                lengths
                    .iter()
                    .map(f64::to_string)
                    .collect::<Vec<_>>()
                    .join(","),
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    pub color: Color,
    /// Width in pixels
    pub width: f64,
    pub dash: DashPattern,
    /// Stroke opacity, 0.0-1.0
    pub opacity: f64,
}

impl LineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }

    pub fn width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    pub fn dash(mut self, dash: DashPattern) -> Self {
        self.dash = dash;
        self
    }

    pub fn to_svg_style(&self) -> String {
        let mut attrs = vec![
            format!("stroke=\"{}\"", self.color.to_svg_string()),
            format!("stroke-width=\"{}\"", self.width),
            "fill=\"none\"".to_string(),
        ];
        if self.opacity < 1.0 {
            attrs.push(format!("stroke-opacity=\"{}\"", self.opacity));
        }
        if let Some(dasharray) = self.dash.to_svg_dasharray() {
            attrs.push(format!("stroke-dasharray=\"{}\"", dasharray));
        }
        attrs.join(" ")
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        LineStyle {
            color: Color::BLACK,
            width: 1.0,
            dash: DashPattern::Solid,
            opacity: 1.0,
        }
    }
}

/// Per-call overrides for a line, merged over a component's defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LineOverrides {
    pub color: Option<Color>,
    pub width: Option<f64>,
    pub dash: Option<DashPattern>,
    pub opacity: Option<f64>,
}

impl LineOverrides {
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn dash(mut self, dash: DashPattern) -> Self {
        self.dash = Some(dash);
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// Apply the set fields on top of `base`.
    pub fn apply(&self, mut base: LineStyle) -> LineStyle {
        if let Some(ref color) = self.color {
            base.color = color.clone();
        }
        if let Some(width) = self.width {
            base.width = width;
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_take_precedence() {
        let base = LineStyle::new().color(Color::GRAY).width(1.0);
        let merged = LineOverrides::default().color("red").width(2.5).apply(base);
        assert_eq!(merged.color, Color::RED);
        assert_eq!(merged.width, 2.5);
        assert_eq!(merged.dash, DashPattern::Solid);
    }

    #[test]
    fn test_empty_overrides_keep_defaults() {
        let base = LineStyle::new().color(Color::GRAY).width(3.0);
        assert_eq!(LineOverrides::default().apply(base.clone()), base);
    }

    #[test]
    fn test_dash_and_opacity_svg() {
        let style = LineOverrides::default()
            .dash(DashPattern::Custom(vec![4.0, 1.5]))
            .opacity(1.7)
            .apply(LineStyle::new());
        let svg = style.to_svg_style();
        assert!(svg.contains("stroke-dasharray=\"4,1.5\""));
        assert!(!svg.contains("stroke-opacity"));
        assert_eq!(style.opacity, 1.0);
    }

    #[test]
    fn test_overrides_from_json() {
        let overrides: LineOverrides =
            serde_json::from_str(r#"{"color": "0.25", "dash": "dotted"}"#).unwrap();
        assert_eq!(overrides.color, Some(Color::gray(0.25)));
        assert_eq!(overrides.dash, Some(DashPattern::Dotted));
        assert_eq!(overrides.width, None);
    }
}
