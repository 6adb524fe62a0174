//! Full-figure background layer for free-form layout.
//!
//! An [`Overlay`] owns one axes spanning the whole figure with both limits
//! pinned to `[0, 1]`, so every helper here works in figure-fraction
//! coordinates regardless of where subplots sit. With `visible` set, the
//! layer shows a labeled grid that helps pick those coordinates by eye.

use log::debug;

use crate::layout::labels::{panel_label_style, Labels};
use crate::plotting::element::{Line2D, RoundedBox};
use crate::plotting::prelude::*;
use crate::plotting::scale::arange;
use crate::plotting::style::{FillStyle, LineStyle, TextStyle};
use crate::plotting::TickSide;

/// Stacking order of the overlay axes; everything else draws on top of it.
pub const OVERLAY_ZORDER: i32 = -1000;

/// Most grid ticks the overlay will place along one axis.
pub const MAX_GRID_TICKS: usize = 10_000;

/// Segment extent used when a line should cross the whole figure.
pub const FULL_SPAN: (f64, f64) = (0.0, 1.0);

/// Construction options for [`Overlay::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayOptions {
    /// Show grid, ticks and frame of the layer
    pub visible: bool,
    /// Distance between grid lines
    pub spacing: f64,
    pub linecolor: Color,
    pub linewidth: f64,
}

impl OverlayOptions {
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn linecolor(mut self, color: impl Into<Color>) -> Self {
        self.linecolor = color.into();
        self
    }

    pub fn linewidth(mut self, width: f64) -> Self {
        self.linewidth = width;
        self
    }
}

impl Default for OverlayOptions {
    fn default() -> Self {
        OverlayOptions {
            visible: false,
            spacing: 0.1,
            linecolor: Color::gray(0.5),
            linewidth: 1.0,
        }
    }
}

/// Options for [`Overlay::draw_box`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoxOptions {
    /// `(left, right, bottom, top)` of the nominal rectangle
    pub pos: (f64, f64, f64, f64),
    pub title: Option<String>,
    pub title_style: TextOverrides,
    /// Corner radius, also added on every side of the rectangle
    pub pad: f64,
    pub style: PatchOverrides,
}

impl BoxOptions {
    pub fn new(left: f64, right: f64, bottom: f64, top: f64) -> Self {
        BoxOptions {
            pos: (left, right, bottom, top),
            ..Default::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn title_style(mut self, style: TextOverrides) -> Self {
        self.title_style = style;
        self
    }

    pub fn pad(mut self, pad: f64) -> Self {
        self.pad = pad;
        self
    }

    pub fn style(mut self, style: PatchOverrides) -> Self {
        self.style = style;
        self
    }
}

/// Options for [`Overlay::add_labels`].
#[derive(Debug, Clone, PartialEq)]
pub struct LabelOptions {
    pub font_size: f64,
    pub labels: Labels,
}

impl LabelOptions {
    pub fn font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    pub fn labels(mut self, labels: impl Into<Labels>) -> Self {
        self.labels = labels.into();
        self
    }
}

impl Default for LabelOptions {
    fn default() -> Self {
        LabelOptions {
            font_size: 18.0,
            labels: Labels::default(),
        }
    }
}

/// Background layer of a figure.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    axes: AxesId,
    /// Default color of lines and box edges
    pub linecolor: Color,
    /// Default width of lines and box edges
    pub linewidth: f64,
    visible: bool,
    spacing: f64,
}

impl Overlay {
    /// Add the overlay axes to `fig`.
    pub fn new(fig: &mut Figure, opts: OverlayOptions) -> PlotResult<Self> {
        if !opts.spacing.is_finite() || opts.spacing <= 0.0 {
            return Err(PlotError::InvalidConfig(format!(
                "Overlay grid spacing must be positive, got {}",
                opts.spacing
            )));
        }
        let stop = 1.0 + opts.spacing / 2.0;
        if stop / opts.spacing > MAX_GRID_TICKS as f64 {
            return Err(PlotError::InvalidConfig(format!(
                "Overlay grid spacing {} gives more than {} ticks",
                opts.spacing, MAX_GRID_TICKS
            )));
        }
        let ticks = arange(0.0, stop, opts.spacing)?;

        let id = fig.add_axes([0.0, 0.0, 1.0, 1.0]);
        let ax = fig.axes_mut(id)?;
        ax.zorder = OVERLAY_ZORDER;
        ax.facecolor = None;
        ax.set_overlay(true);

        ax.set_xticks(ticks.clone()).set_yticks(ticks).grid(true);
        ax.set_xlim(0.0, 1.0).set_ylim(0.0, 1.0).set_autoscale(false);

        // The frame sits on the canvas edge, so ticks and labels go inside
        ax.x_axis.inside = true;
        ax.y_axis.inside = true;
        ax.x_axis.tick_side = TickSide::Low;
        ax.y_axis.tick_side = TickSide::Low;

        if !opts.visible {
            ax.set_axis_on(false);
        }

        debug!(
            "Created overlay axes {} (visible: {}, spacing: {})",
            id.index(),
            opts.visible,
            opts.spacing
        );

        Ok(Overlay {
            axes: id,
            linecolor: opts.linecolor,
            linewidth: opts.linewidth,
            visible: opts.visible,
            spacing: opts.spacing,
        })
    }

    /// Handle of the overlay axes.
    pub fn axes(&self) -> AxesId {
        self.axes
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    fn line_style(&self, overrides: &LineOverrides) -> LineStyle {
        let base = LineStyle::new()
            .color(self.linecolor.clone())
            .width(self.linewidth);
        overrides.apply(base)
    }

    /// Vertical segment at `x` from `y0` to `y1`.
    pub fn vline(
        &self,
        fig: &mut Figure,
        x: f64,
        (y0, y1): (f64, f64),
        style: &LineOverrides,
    ) -> PlotResult<()> {
        let line = Line2D::segment(x, y0, x, y1).style(self.line_style(style));
        fig.axes_mut(self.axes)?.add_line(line);
        debug!("Overlay vline at x={} from {} to {}", x, y0, y1);
        Ok(())
    }

    /// Horizontal segment at `y` from `x0` to `x1`.
    pub fn hline(
        &self,
        fig: &mut Figure,
        y: f64,
        (x0, x1): (f64, f64),
        style: &LineOverrides,
    ) -> PlotResult<()> {
        let line = Line2D::segment(x0, y, x1, y).style(self.line_style(style));
        fig.axes_mut(self.axes)?.add_line(line);
        debug!("Overlay hline at y={} from {} to {}", y, x0, x1);
        Ok(())
    }

    /// Rounded outline box, with an optional title straddling its top edge.
    pub fn draw_box(&self, fig: &mut Figure, opts: &BoxOptions) -> PlotResult<()> {
        let (left, right, bottom, top) = opts.pos;
        let edge = FillStyle::outline(self.linecolor.clone(), self.linewidth);
        let patch = RoundedBox::new(left, bottom, right - left, top - bottom)
            .pad(opts.pad)
            .style(opts.style.apply(edge));

        let ax = fig.axes_mut(self.axes)?;
        ax.add_patch(patch);

        if let Some(ref title) = opts.title {
            let base = TextStyle::new()
                .font_size(12.0)
                .color(self.linecolor.clone())
                .align(HAlign::Left, VAlign::Center)
                .background(Color::WHITE);
            let style = opts.title_style.apply(base);
            ax.text(left + 0.02, top + opts.pad, title.as_str(), Coords::Data, style);
        }

        debug!("Overlay box at {:?} (pad {})", opts.pos, opts.pad);
        Ok(())
    }

    /// One label per `(xs[i], ys[i])`, in figure-fraction coordinates.
    ///
    /// `xs` and `ys` must have equal length. Labels run out silently when
    /// there are more positions than labels.
    pub fn add_labels(
        &self,
        fig: &mut Figure,
        xs: &[f64],
        ys: &[f64],
        opts: &LabelOptions,
    ) -> PlotResult<()> {
        if xs.len() != ys.len() {
            return Err(PlotError::LengthMismatch {
                xs: xs.len(),
                ys: ys.len(),
            });
        }

        let labels = opts.labels.sequence();
        let style = panel_label_style(opts.font_size);
        let ax = fig.axes_mut(self.axes)?;
        for ((&x, &y), label) in xs.iter().zip(ys).zip(&labels) {
            ax.text(x, y, label.as_str(), Coords::Axes, style.clone());
        }

        debug!("Overlay labels: {}", xs.len().min(labels.len()));
        Ok(())
    }
}
