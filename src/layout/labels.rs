//! Panel labels: letter sequences and figure-wide labeling of subplots.

use std::str::FromStr;

use log::{debug, warn};
use serde::Deserialize;

use crate::plotting::prelude::*;
use crate::plotting::style::TextStyle;

/// Case of the generated label alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelStyle {
    #[default]
    Uppercase,
    Lowercase,
}

impl LabelStyle {
    /// The 26 letters of the alphabet in this case.
    pub fn alphabet(&self) -> Vec<String> {
        let letters = match self {
            LabelStyle::Uppercase => 'A'..='Z',
            LabelStyle::Lowercase => 'a'..='z',
        };
        letters.map(String::from).collect()
    }
}

impl FromStr for LabelStyle {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uppercase" => Ok(LabelStyle::Uppercase),
            "lowercase" => Ok(LabelStyle::Lowercase),
            other => Err(PlotError::UnknownLabelStyle(other.to_string())),
        }
    }
}

/// The sequence of labels handed out to targets, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Labels {
    /// A generated alphabet
    Alphabet(LabelStyle),
    /// Caller-supplied labels
    Custom(Vec<String>),
}

impl Labels {
    /// Resolve from an optional style name and optional explicit labels.
    ///
    /// Explicit labels win; the style name is only parsed when they are absent,
    /// so an unknown style next to explicit labels is not an error. A missing
    /// style means uppercase.
    pub fn from_parts(style: Option<&str>, labels: Option<Vec<String>>) -> PlotResult<Self> {
        match labels {
            Some(labels) => Ok(Labels::Custom(labels)),
            None => {
                let style = style.map(str::parse::<LabelStyle>).transpose()?.unwrap_or_default();
                Ok(Labels::Alphabet(style))
            }
        }
    }

    /// The concrete label strings.
    pub fn sequence(&self) -> Vec<String> {
        match self {
            Labels::Alphabet(style) => style.alphabet(),
            Labels::Custom(labels) => labels.clone(),
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Labels::Alphabet(LabelStyle::Uppercase)
    }
}

impl From<LabelStyle> for Labels {
    fn from(style: LabelStyle) -> Self {
        Labels::Alphabet(style)
    }
}

impl From<Vec<String>> for Labels {
    fn from(labels: Vec<String>) -> Self {
        Labels::Custom(labels)
    }
}

impl From<&[&str]> for Labels {
    fn from(labels: &[&str]) -> Self {
        Labels::Custom(labels.iter().map(|s| s.to_string()).collect())
    }
}

/// A label coordinate: one value shared by every target, or one per target.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AxisCoords {
    Shared(f64),
    PerAxes(Vec<f64>),
}

impl AxisCoords {
    /// Coordinate for the `i`-th target, or `None` once a per-target list runs out.
    pub fn get(&self, i: usize) -> Option<f64> {
        match self {
            AxisCoords::Shared(v) => Some(*v),
            AxisCoords::PerAxes(values) => values.get(i).copied(),
        }
    }
}

impl From<f64> for AxisCoords {
    fn from(v: f64) -> Self {
        AxisCoords::Shared(v)
    }
}

impl From<Vec<f64>> for AxisCoords {
    fn from(values: Vec<f64>) -> Self {
        AxisCoords::PerAxes(values)
    }
}

impl From<&[f64]> for AxisCoords {
    fn from(values: &[f64]) -> Self {
        AxisCoords::PerAxes(values.to_vec())
    }
}

/// Text style of a panel label: bold, anchored at its lower-left corner.
pub fn panel_label_style(font_size: f64) -> TextStyle {
    TextStyle::new()
        .font_size(font_size)
        .bold()
        .align(HAlign::Left, VAlign::Bottom)
}

/// Options for [`add_panel_labels`].
#[derive(Debug, Clone, PartialEq)]
pub struct PanelLabelOptions {
    /// Axes to label; `None` labels every non-overlay axes of the figure
    pub axes: Option<Vec<AxesId>>,
    pub font_size: f64,
    /// Lower-left corner of each label, in the target's axes coordinates
    pub xs: AxisCoords,
    pub ys: AxisCoords,
    pub labels: Labels,
}

impl PanelLabelOptions {
    pub fn axes(mut self, axes: Vec<AxesId>) -> Self {
        self.axes = Some(axes);
        self
    }

    pub fn font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    pub fn position(mut self, xs: impl Into<AxisCoords>, ys: impl Into<AxisCoords>) -> Self {
        self.xs = xs.into();
        self.ys = ys.into();
        self
    }

    pub fn labels(mut self, labels: impl Into<Labels>) -> Self {
        self.labels = labels.into();
        self
    }
}

impl Default for PanelLabelOptions {
    fn default() -> Self {
        PanelLabelOptions {
            axes: None,
            font_size: 18.0,
            xs: AxisCoords::Shared(-0.05),
            ys: AxisCoords::Shared(1.05),
            labels: Labels::default(),
        }
    }
}

/// Label each target axes relative to its own frame.
///
/// Stops at the shortest of targets, per-target coordinates and labels;
/// surplus targets stay unlabeled. Fails before drawing anything if a target
/// handle does not belong to `fig`.
pub fn add_panel_labels(fig: &mut Figure, opts: &PanelLabelOptions) -> PlotResult<()> {
    let targets = match opts.axes {
        Some(ref axes) => axes.clone(),
        None => fig.subplot_ids(),
    };
    for &id in &targets {
        fig.axes(id)?;
    }

    let labels = opts.labels.sequence();
    let style = panel_label_style(opts.font_size);
    let mut placed = 0;
    for (i, (&id, label)) in targets.iter().zip(labels.iter()).enumerate() {
        let (Some(x), Some(y)) = (opts.xs.get(i), opts.ys.get(i)) else {
            break;
        };
        fig.axes_mut(id)?
            .text(x, y, label.as_str(), Coords::Axes, style.clone());
        placed += 1;
    }

    if placed < targets.len() {
        warn!(
            "Labeled {} of {} axes; labels or coordinates ran out",
            placed,
            targets.len()
        );
    }
    debug!("Placed {} panel labels", placed);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plotting::Text;

    fn texts(fig: &Figure, id: AxesId) -> Vec<Text> {
        fig.axes(id).unwrap().texts().cloned().collect()
    }

    #[test]
    fn test_alphabets() {
        let upper = LabelStyle::Uppercase.alphabet();
        assert_eq!(upper.len(), 26);
        assert_eq!(upper.concat(), "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
        assert_eq!(LabelStyle::Lowercase.alphabet().concat(), "abcdefghijklmnopqrstuvwxyz");
    }

    #[test]
    fn test_unknown_style_names_value() {
        let err = "Uppercase".parse::<LabelStyle>().unwrap_err();
        assert!(matches!(err, PlotError::UnknownLabelStyle(ref s) if s == "Uppercase"));
        assert!(Labels::from_parts(Some("roman"), None).is_err());
    }

    #[test]
    fn test_explicit_labels_override_style() {
        let labels = Labels::from_parts(Some("roman"), Some(vec!["i".into(), "ii".into()])).unwrap();
        assert_eq!(labels.sequence(), vec!["i", "ii"]);
        assert_eq!(
            Labels::from_parts(None, None).unwrap(),
            Labels::Alphabet(LabelStyle::Uppercase)
        );
    }

    #[test]
    fn test_panel_labels_on_every_subplot() {
        let mut fig = Figure::default();
        let ids = fig.subplots(2, 3).unwrap();
        let opts = PanelLabelOptions::default().position(0.0, 1.0);
        add_panel_labels(&mut fig, &opts).unwrap();

        for (id, expected) in ids.iter().zip(["A", "B", "C", "D", "E", "F"]) {
            let t = texts(&fig, *id);
            assert_eq!(t.len(), 1);
            assert_eq!(t[0].content, expected);
            assert_eq!((t[0].x, t[0].y), (0.0, 1.0));
            assert_eq!(t[0].coords, Coords::Axes);
            assert_eq!(t[0].style.ha, HAlign::Left);
            assert_eq!(t[0].style.va, VAlign::Bottom);
            assert_eq!(t[0].style.font_size, 18.0);
        }
    }

    #[test]
    fn test_panel_labels_stop_at_alphabet_end() {
        let mut fig = Figure::default();
        let ids = fig.subplots(3, 10).unwrap();
        add_panel_labels(&mut fig, &PanelLabelOptions::default()).unwrap();
        assert_eq!(texts(&fig, ids[25])[0].content, "Z");
        assert!(texts(&fig, ids[26]).is_empty());
    }

    #[test]
    fn test_per_axes_coords_truncate() {
        let mut fig = Figure::default();
        let ids = fig.subplots(1, 3).unwrap();
        let opts = PanelLabelOptions::default()
            .position(vec![-0.1, -0.2], 1.1)
            .labels(LabelStyle::Lowercase);
        add_panel_labels(&mut fig, &opts).unwrap();

        assert_eq!(texts(&fig, ids[0])[0].x, -0.1);
        assert_eq!(texts(&fig, ids[1])[0].content, "b");
        assert!(texts(&fig, ids[2]).is_empty());
    }

    #[test]
    fn test_explicit_axes_and_custom_labels() {
        let mut fig = Figure::default();
        let ids = fig.subplots(1, 3).unwrap();
        let custom: &[&str] = &["left", "right"];
        let opts = PanelLabelOptions::default()
            .axes(vec![ids[2], ids[0]])
            .labels(custom);
        add_panel_labels(&mut fig, &opts).unwrap();

        assert_eq!(texts(&fig, ids[2])[0].content, "left");
        assert_eq!(texts(&fig, ids[0])[0].content, "right");
        assert!(texts(&fig, ids[1]).is_empty());
    }

    #[test]
    fn test_foreign_axes_rejected_before_drawing() {
        let mut fig = Figure::default();
        let id = fig.add_subplot(1, 1, 1).unwrap();
        let mut other = Figure::default();
        other.subplots(1, 3).unwrap();
        let foreign = other.axes_ids()[2];

        let opts = PanelLabelOptions::default().axes(vec![id, foreign]);
        let err = add_panel_labels(&mut fig, &opts).unwrap_err();
        assert!(matches!(err, PlotError::UnknownAxes(2)));
        assert!(texts(&fig, id).is_empty());
    }
}
