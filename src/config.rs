//! JSON layout documents.
//!
//! A [`LayoutConfig`] describes a whole figure: its size, a subplot grid,
//! an optional overlay and everything drawn on it, panel labels, and
//! per-panel treatments. [`LayoutConfig::build`] replays the document
//! through the `layout` helpers in a fixed order.

use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::{debug, info};

use crate::layout::{
    add_panel_labels, axtext, bottomleft_spines, AxisCoords, BoxOptions, LabelOptions, Labels,
    Overlay, OverlayOptions, PanelLabelOptions,
};
use crate::plotting::prelude::*;

// ============================================================================
// Overlay and shapes
// ============================================================================

/// Overlay construction settings
#[derive(Deserialize, Debug, Clone)]
pub struct OverlayConfig {
    #[serde(default)]
    pub visible: bool,
    #[serde(default = "default_spacing")]
    pub spacing: f64,
    #[serde(default = "default_linecolor")]
    pub linecolor: Color,
    #[serde(default = "default_linewidth")]
    pub linewidth: f64,
}

fn default_spacing() -> f64 { 0.1 }
fn default_linecolor() -> Color { Color::gray(0.5) }
fn default_linewidth() -> f64 { 1.0 }

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            visible: false,
            spacing: default_spacing(),
            linecolor: default_linecolor(),
            linewidth: default_linewidth(),
        }
    }
}

impl OverlayConfig {
    fn options(&self) -> OverlayOptions {
        OverlayOptions::default()
            .visible(self.visible)
            .spacing(self.spacing)
            .linecolor(self.linecolor.clone())
            .linewidth(self.linewidth)
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// A straight overlay segment
#[derive(Deserialize, Debug, Clone)]
pub struct LineConfig {
    pub orientation: Orientation,
    /// x of a vertical line, y of a horizontal one
    pub at: f64,
    #[serde(default)]
    pub from: f64,
    #[serde(default = "default_span_end")]
    pub to: f64,
    #[serde(default)]
    pub color: Option<Color>,
    #[serde(default)]
    pub width: Option<f64>,
}

fn default_span_end() -> f64 { 1.0 }

impl LineConfig {
    fn overrides(&self) -> LineOverrides {
        LineOverrides {
            color: self.color.clone(),
            width: self.width,
            ..Default::default()
        }
    }
}

/// A rounded overlay box
#[derive(Deserialize, Debug, Clone)]
pub struct BoxConfig {
    /// `[left, right, bottom, top]`
    pub pos: (f64, f64, f64, f64),
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub pad: f64,
    #[serde(default)]
    pub color: Option<Color>,
    #[serde(default)]
    pub width: Option<f64>,
}

impl BoxConfig {
    fn options(&self) -> BoxOptions {
        let (left, right, bottom, top) = self.pos;
        let mut opts = BoxOptions::new(left, right, bottom, top).pad(self.pad);
        opts.title = self.title.clone();
        opts.style = PatchOverrides {
            edge: self.color.clone(),
            edge_width: self.width,
            ..Default::default()
        };
        // Titles follow the edge color
        if let Some(ref color) = self.color {
            opts.title_style = TextOverrides::default().color(color.clone());
        }
        opts
    }
}

// ============================================================================
// Labels
// ============================================================================

fn default_label_fontsize() -> f64 { 18.0 }
fn default_panel_xs() -> AxisCoords { AxisCoords::Shared(-0.05) }
fn default_panel_ys() -> AxisCoords { AxisCoords::Shared(1.05) }

/// Labels placed at explicit figure-fraction positions on the overlay
#[derive(Deserialize, Debug, Clone)]
pub struct LabelsConfig {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    #[serde(default = "default_label_fontsize")]
    pub fontsize: f64,
    /// "uppercase" or "lowercase"; ignored when `labels` is given
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub labels: Option<Vec<String>>,
}

/// Labels placed relative to each subplot
#[derive(Deserialize, Debug, Clone)]
pub struct PanelLabelsConfig {
    #[serde(default = "default_panel_xs")]
    pub xs: AxisCoords,
    #[serde(default = "default_panel_ys")]
    pub ys: AxisCoords,
    #[serde(default = "default_label_fontsize")]
    pub fontsize: f64,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub labels: Option<Vec<String>>,
    /// 1-based subplot indices; all subplots when absent
    #[serde(default)]
    pub axes: Option<Vec<usize>>,
}

// ============================================================================
// Panels
// ============================================================================

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SpineTreatment {
    Bottomleft,
}

/// Treatment of one subplot
#[derive(Deserialize, Debug, Clone)]
pub struct PanelConfig {
    /// 1-based subplot index, row-major
    pub index: usize,
    /// Replace the panel content with centered text
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub spines: Option<SpineTreatment>,
}

// ============================================================================
// Layout document
// ============================================================================

fn default_width() -> f64 { 800.0 }
fn default_height() -> f64 { 600.0 }
fn default_grid_dim() -> usize { 1 }

/// Largest accepted subplot row or column count
pub const MAX_GRID_DIM: usize = 100;

/// A complete figure description
#[derive(Deserialize, Debug, Clone)]
pub struct LayoutConfig {
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default = "default_grid_dim")]
    pub rows: usize,
    #[serde(default = "default_grid_dim")]
    pub cols: usize,
    #[serde(default)]
    pub overlay: Option<OverlayConfig>,
    #[serde(default)]
    pub lines: Vec<LineConfig>,
    #[serde(default)]
    pub boxes: Vec<BoxConfig>,
    #[serde(default)]
    pub labels: Option<LabelsConfig>,
    #[serde(default)]
    pub panel_labels: Option<PanelLabelsConfig>,
    #[serde(default)]
    pub panels: Vec<PanelConfig>,
}

impl LayoutConfig {
    /// Load a layout document from a JSON file
    pub fn load(path: impl AsRef<Path>) -> PlotResult<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config: LayoutConfig = serde_json::from_reader(reader)?;
        Ok(config)
    }

    /// Parse a layout document from a JSON string
    pub fn from_json(json: &str) -> PlotResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Make the overlay grid visible, creating the overlay if needed
    pub fn show_grid(&mut self) {
        self.overlay.get_or_insert_with(OverlayConfig::default).visible = true;
    }

    fn needs_overlay(&self) -> bool {
        self.overlay.is_some()
            || !self.lines.is_empty()
            || !self.boxes.is_empty()
            || self.labels.is_some()
    }

    fn validate(&self) -> PlotResult<()> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PlotError::InvalidConfig(format!(
                    "Figure {} must be positive, got {}",
                    name, value
                )));
            }
        }
        for (name, value) in [("rows", self.rows), ("cols", self.cols)] {
            if value == 0 || value > MAX_GRID_DIM {
                return Err(PlotError::InvalidConfig(format!(
                    "Subplot {} must be between 1 and {}, got {}",
                    name, MAX_GRID_DIM, value
                )));
            }
        }
        Ok(())
    }

    fn subplot(&self, ids: &[AxesId], index: usize) -> PlotResult<AxesId> {
        index
            .checked_sub(1)
            .and_then(|i| ids.get(i).copied())
            .ok_or_else(|| {
                PlotError::InvalidConfig(format!(
                    "Panel index {} out of range for a {}x{} grid",
                    index, self.rows, self.cols
                ))
            })
    }

    /// Build the figure described by this document
    pub fn build(&self) -> PlotResult<Figure> {
        self.validate()?;

        let mut fig = Figure::new(self.width, self.height);
        let subplots = fig.subplots(self.rows, self.cols)?;
        debug!("Created {} subplots", subplots.len());

        for panel in &self.panels {
            let id = self.subplot(&subplots, panel.index)?;
            let ax = fig.axes_mut(id)?;
            if let Some(ref text) = panel.text {
                axtext(ax, text, &TextOverrides::default());
            }
            if panel.spines == Some(SpineTreatment::Bottomleft) {
                bottomleft_spines(ax);
            }
        }

        if self.needs_overlay() {
            let opts = self.overlay.clone().unwrap_or_default().options();
            let overlay = Overlay::new(&mut fig, opts)?;

            for line in &self.lines {
                let span = (line.from, line.to);
                let style = line.overrides();
                match line.orientation {
                    Orientation::Vertical => overlay.vline(&mut fig, line.at, span, &style)?,
                    Orientation::Horizontal => overlay.hline(&mut fig, line.at, span, &style)?,
                }
            }

            for b in &self.boxes {
                overlay.draw_box(&mut fig, &b.options())?;
            }

            if let Some(ref labels) = self.labels {
                let opts = LabelOptions::default()
                    .font_size(labels.fontsize)
                    .labels(Labels::from_parts(labels.style.as_deref(), labels.labels.clone())?);
                overlay.add_labels(&mut fig, &labels.xs, &labels.ys, &opts)?;
            }
        }

        if let Some(ref panel_labels) = self.panel_labels {
            let mut opts = PanelLabelOptions::default()
                .font_size(panel_labels.fontsize)
                .position(panel_labels.xs.clone(), panel_labels.ys.clone())
                .labels(Labels::from_parts(
                    panel_labels.style.as_deref(),
                    panel_labels.labels.clone(),
                )?);
            if let Some(ref indices) = panel_labels.axes {
                let targets = indices
                    .iter()
                    .map(|&i| self.subplot(&subplots, i))
                    .collect::<PlotResult<Vec<_>>>()?;
                opts = opts.axes(targets);
            }
            add_panel_labels(&mut fig, &opts)?;
        }

        info!(
            "Built {}x{} figure with {} axes",
            self.width,
            self.height,
            fig.get_axes().len()
        );
        Ok(fig)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const FULL: &str = r#"{
        "width": 640,
        "height": 480,
        "rows": 2,
        "cols": 2,
        "overlay": {"spacing": 0.05, "linecolor": "k"},
        "lines": [
            {"orientation": "vertical", "at": 0.5},
            {"orientation": "horizontal", "at": 0.5, "from": 0.1, "to": 0.9, "color": "r", "width": 2}
        ],
        "boxes": [{"pos": [0.1, 0.9, 0.1, 0.9], "title": "Overview", "pad": 0.01}],
        "labels": {"xs": [0.1, 0.2], "ys": [0.95, 0.95], "style": "lowercase"},
        "panel_labels": {"xs": 0.0, "ys": [1.0, 1.1], "axes": [2, 3, 4]},
        "panels": [
            {"index": 1, "text": "Methods"},
            {"index": 2, "spines": "bottomleft"}
        ]
    }"#;

    #[test]
    fn test_defaults() {
        let config = LayoutConfig::from_json("{}").unwrap();
        assert_eq!((config.width, config.height), (800.0, 600.0));
        assert_eq!((config.rows, config.cols), (1, 1));
        assert!(config.overlay.is_none());

        let fig = config.build().unwrap();
        assert_eq!(fig.get_axes().len(), 1);
    }

    #[test]
    fn test_full_document() {
        let config = LayoutConfig::from_json(FULL).unwrap();
        let fig = config.build().unwrap();
        let subplots = fig.subplot_ids();
        assert_eq!(subplots.len(), 4);
        assert_eq!(fig.get_axes().len(), 5);

        let overlay = fig.get_axes().iter().find(|ax| ax.is_overlay()).unwrap();
        assert_eq!(overlay.lines().count(), 2);
        assert_eq!(overlay.patches().count(), 1);
        let contents: Vec<_> = overlay.texts().map(|t| t.content.as_str()).collect();
        assert_eq!(contents, vec!["Overview", "a", "b"]);
        assert_eq!(overlay.x_axis.tick_positions.as_ref().unwrap().len(), 21);

        let text_panel = fig.axes(subplots[0]).unwrap();
        assert!(!text_panel.is_axis_on());
        assert_eq!(text_panel.texts().count(), 1);

        let open_frame = fig.axes(subplots[1]).unwrap();
        assert!(!open_frame.spines.is_visible(Spine::Top));

        // Per-axes ys run out after two targets
        let labeled: Vec<_> = subplots[1..]
            .iter()
            .map(|&id| fig.axes(id).unwrap().texts().count())
            .collect();
        assert_eq!(labeled, vec![1, 1, 0]);
    }

    #[test]
    fn test_shapes_create_implicit_overlay() {
        let config =
            LayoutConfig::from_json(r#"{"lines": [{"orientation": "vertical", "at": 0.3}]}"#).unwrap();
        let fig = config.build().unwrap();
        let overlay = fig.get_axes().iter().find(|ax| ax.is_overlay()).unwrap();
        assert!(!overlay.is_axis_on());
        assert_eq!(overlay.lines().count(), 1);
    }

    #[test]
    fn test_show_grid() {
        let mut config = LayoutConfig::from_json("{}").unwrap();
        config.show_grid();
        let fig = config.build().unwrap();
        let overlay = fig.get_axes().iter().find(|ax| ax.is_overlay()).unwrap();
        assert!(overlay.is_axis_on());
    }

    #[test]
    fn test_unknown_label_style() {
        let config = LayoutConfig::from_json(r#"{"panel_labels": {"style": "greek"}}"#).unwrap();
        let err = config.build().unwrap_err();
        assert!(matches!(err, PlotError::UnknownLabelStyle(ref s) if s == "greek"));
    }

    #[test]
    fn test_unknown_overlay_label_style() {
        let config = LayoutConfig::from_json(
            r#"{"labels": {"xs": [0.1], "ys": [0.1], "style": "greek"}}"#,
        )
        .unwrap();
        let err = config.build().unwrap_err();
        assert!(matches!(err, PlotError::UnknownLabelStyle(ref s) if s == "greek"));
    }

    #[test]
    fn test_grid_dimensions_are_bounded() {
        for json in [
            r#"{"rows": 0}"#,
            r#"{"cols": 101}"#,
            r#"{"rows": 18446744073709551615, "cols": 2}"#,
        ] {
            let config = LayoutConfig::from_json(json).unwrap();
            assert!(matches!(config.build(), Err(PlotError::InvalidConfig(_))));
        }
        let config = LayoutConfig::from_json(r#"{"rows": 3, "cols": 4}"#).unwrap();
        assert_eq!(config.build().unwrap().subplot_ids().len(), 12);
    }

    #[test]
    fn test_panel_index_out_of_range() {
        let config = LayoutConfig::from_json(r#"{"panels": [{"index": 0, "text": "x"}]}"#).unwrap();
        assert!(matches!(config.build(), Err(PlotError::InvalidConfig(_))));
        let config = LayoutConfig::from_json(r#"{"panel_labels": {"axes": [2]}}"#).unwrap();
        assert!(matches!(config.build(), Err(PlotError::InvalidConfig(_))));
    }

    #[test]
    fn test_invalid_size() {
        let config = LayoutConfig::from_json(r#"{"width": 0}"#).unwrap();
        assert!(matches!(config.build(), Err(PlotError::InvalidConfig(_))));
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            LayoutConfig::from_json(r#"{"lines": [{"orientation": "diagonal", "at": 0}]}"#),
            Err(PlotError::Json(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FULL.as_bytes()).unwrap();
        let config = LayoutConfig::load(file.path()).unwrap();
        assert_eq!(config.boxes.len(), 1);
        assert!(matches!(
            LayoutConfig::load(file.path().with_extension("missing")),
            Err(PlotError::Io(_))
        ));
    }
}
