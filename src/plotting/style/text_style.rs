//! Text styling and alignment.

use serde::Deserialize;

use super::color::Color;
use crate::plotting::element::escape_xml;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    pub fn to_svg_string(&self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
        }
    }
}

/// Horizontal alignment of text relative to its anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl HAlign {
    /// SVG `text-anchor` value.
    pub fn to_svg_string(&self) -> &'static str {
        match self {
            HAlign::Left => "start",
            HAlign::Center => "middle",
            HAlign::Right => "end",
        }
    }

    /// Fraction of the text width lying left of the anchor point.
    pub fn offset_fraction(&self) -> f64 {
        match self {
            HAlign::Left => 0.0,
            HAlign::Center => 0.5,
            HAlign::Right => 1.0,
        }
    }
}

/// Vertical alignment of text relative to its anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VAlign {
    /// Anchor on the text baseline
    #[default]
    Baseline,
    /// Anchor on the bottom of the text box
    Bottom,
    /// Anchor on the vertical center
    Center,
    /// Anchor on the top of the text box
    Top,
}

impl VAlign {
    /// SVG `dominant-baseline` value.
    pub fn to_svg_string(&self) -> &'static str {
        match self {
            VAlign::Baseline => "alphabetic",
            VAlign::Bottom => "text-after-edge",
            VAlign::Center => "central",
            VAlign::Top => "text-before-edge",
        }
    }

    /// Fraction of the text height lying above the anchor point.
    pub fn offset_fraction(&self) -> f64 {
        match self {
            VAlign::Baseline => 0.8,
            VAlign::Bottom => 1.0,
            VAlign::Center => 0.5,
            VAlign::Top => 0.0,
        }
    }
}

/// How a piece of text is drawn and anchored.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font_family: String,
    /// Size in pixels
    pub font_size: f64,
    pub weight: FontWeight,
    pub color: Color,
    pub ha: HAlign,
    pub va: VAlign,
    /// Counter-clockwise, in degrees
    pub rotation: f64,
    /// Color of a box painted behind the text
    pub background: Option<Color>,
    pub opacity: f64,
}

impl TextStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    pub fn bold(mut self) -> Self {
        self.weight = FontWeight::Bold;
        self
    }

    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }

    pub fn align(mut self, ha: HAlign, va: VAlign) -> Self {
        self.ha = ha;
        self.va = va;
        self
    }

    pub fn background(mut self, color: impl Into<Color>) -> Self {
        self.background = Some(color.into());
        self
    }

    pub fn rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    /// Approximate rendered extent `(width, height)` in pixels.
    ///
    /// No font metrics are available, so glyphs are assumed to be 0.6 em wide.
    pub fn approx_extent(&self, content: &str) -> (f64, f64) {
        let chars = content.chars().count() as f64;
        (chars * self.font_size * 0.6, self.font_size * 1.2)
    }

    pub fn to_svg_attrs(&self) -> String {
        let mut attrs = vec![
            format!("font-family=\"{}\"", escape_xml(&self.font_family)),
            format!("font-size=\"{}\"", self.font_size),
            format!("font-weight=\"{}\"", self.weight.to_svg_string()),
            format!("fill=\"{}\"", self.color.to_svg_string()),
            format!("text-anchor=\"{}\"", self.ha.to_svg_string()),
            format!("dominant-baseline=\"{}\"", self.va.to_svg_string()),
        ];

        if self.opacity < 1.0 {
            attrs.push(format!("fill-opacity=\"{}\"", self.opacity));
        }

        attrs.join(" ")
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        TextStyle {
            font_family: "sans-serif".to_string(),
            font_size: 12.0,
            weight: FontWeight::Normal,
            color: Color::BLACK,
            ha: HAlign::Left,
            va: VAlign::Baseline,
            rotation: 0.0,
            background: None,
            opacity: 1.0,
        }
    }
}

/// Per-call overrides for text, merged over a component's defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TextOverrides {
    pub font_family: Option<String>,
    pub font_size: Option<f64>,
    pub weight: Option<FontWeight>,
    pub color: Option<Color>,
    pub ha: Option<HAlign>,
    pub va: Option<VAlign>,
    pub rotation: Option<f64>,
    pub background: Option<Color>,
    /// Fill opacity, clamped to 0.0-1.0
    pub opacity: Option<f64>,
}

impl TextOverrides {
    pub fn font_size(mut self, size: f64) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn ha(mut self, ha: HAlign) -> Self {
        self.ha = Some(ha);
        self
    }

    pub fn va(mut self, va: VAlign) -> Self {
        self.va = Some(va);
        self
    }

    pub fn rotation(mut self, degrees: f64) -> Self {
        self.rotation = Some(degrees);
        self
    }

    pub fn background(mut self, color: impl Into<Color>) -> Self {
        self.background = Some(color.into());
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// Apply the set fields on top of `base`.
    pub fn apply(&self, mut base: TextStyle) -> TextStyle {
        if let Some(ref family) = self.font_family {
            base.font_family = family.clone();
        }
        if let Some(size) = self.font_size {
            base.font_size = size;
        }
        if let Some(weight) = self.weight {
            base.weight = weight;
        }
        if let Some(ref color) = self.color {
            base.color = color.clone();
        }
        if let Some(ha) = self.ha {
            base.ha = ha;
        }
        if let Some(va) = self.va {
            base.va = va;
        }
        if let Some(rotation) = self.rotation {
            base.rotation = rotation;
        }
        if let Some(ref background) = self.background {
            base.background = Some(background.clone());
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
    fn test_alignment_attrs() {
        let attrs = TextStyle::new()
            .align(HAlign::Left, VAlign::Bottom)
            .bold()
            .to_svg_attrs();
        assert!(attrs.contains("text-anchor=\"start\""));
        assert!(attrs.contains("dominant-baseline=\"text-after-edge\""));
        assert!(attrs.contains("font-weight=\"bold\""));
    }

    #[test]
    fn test_overrides_merge() {
        let base = TextStyle::new().font_size(12.0).align(HAlign::Center, VAlign::Center);
        let merged = TextOverrides::default()
            .font_size(20.0)
            .ha(HAlign::Right)
            .apply(base);
        assert_eq!(merged.font_size, 20.0);
        assert_eq!(merged.ha, HAlign::Right);
        assert_eq!(merged.va, VAlign::Center);
    }

    #[test]
    fn test_deserialize_overrides() {
        let o: TextOverrides =
            serde_json::from_str(r#"{"font_size": 9, "color": "0.4", "ha": "center"}"#).unwrap();
        assert_eq!(o.font_size, Some(9.0));
        assert_eq!(o.color, Some(Color::Rgb(102, 102, 102)));
        assert_eq!(o.ha, Some(HAlign::Center));
    }

    #[test]
    fn test_opacity_override() {
        let style = TextOverrides::default().opacity(0.4).apply(TextStyle::new());
        assert!(style.to_svg_attrs().contains("fill-opacity=\"0.4\""));

        let opaque = TextOverrides::default().opacity(3.0).apply(TextStyle::new());
        assert_eq!(opaque.opacity, 1.0);
        assert!(!opaque.to_svg_attrs().contains("fill-opacity"));
    }

    #[test]
    fn test_font_family_is_escaped() {
        let o: TextOverrides =
            serde_json::from_str(r#"{"font_family": "serif\" x=\"1"}"#).unwrap();
        let attrs = o.apply(TextStyle::new()).to_svg_attrs();
        assert!(attrs.contains("font-family=\"serif&quot; x=&quot;1\""));
    }
}
