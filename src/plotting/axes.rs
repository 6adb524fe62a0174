//! Axes (subplot) implementation.

use crate::plotting::backend::SvgBackend;
use crate::plotting::element::{
    Artist, AxisConfig, Bounds, Coords, GridConfig, Line2D, RenderContext, RoundedBox, Spine,
    Spines, Text, TickSide,
};
use crate::plotting::scale::{LinearScale, Scale};
use crate::plotting::style::{Color, FillStyle, HAlign, LineStyle, TextStyle, VAlign};

/// Fraction of the data range added on each side when autoscaling.
const AUTOSCALE_MARGIN: f64 = 0.05;

/// An axes object representing a single plot area.
#[derive(Debug)]
pub struct Axes {
    /// Position within figure (normalized coordinates)
    pub position: Bounds,
    /// Stacking order within the figure; lower draws first
    pub zorder: i32,
    /// Background of the plot area (None for transparent)
    pub facecolor: Option<Color>,
    /// X-axis scale
    x_scale: Box<dyn Scale>,
    /// Y-axis scale
    y_scale: Box<dyn Scale>,
    /// Lines, patches and text drawn inside this axes
    artists: Vec<Artist>,
    /// Title
    pub title: Option<Text>,
    /// X-axis label
    pub x_label: Option<Text>,
    /// Y-axis label
    pub y_label: Option<Text>,
    /// Grid configuration
    pub grid: GridConfig,
    /// X-axis configuration
    pub x_axis: AxisConfig,
    /// Y-axis configuration
    pub y_axis: AxisConfig,
    /// Frame lines
    pub spines: Spines,
    /// When false, no decoration (face, grid, spines, ticks, labels) is drawn
    axis_on: bool,
    /// Whether limits follow the data extent
    autoscale: bool,
    /// Data bounds (computed from artists)
    data_bounds: Option<Bounds>,
    /// Manual x-axis limits
    x_lim: Option<(f64, f64)>,
    /// Manual y-axis limits
    y_lim: Option<(f64, f64)>,
    /// Full-figure annotation layer rather than a data subplot
    overlay: bool,
}

impl Axes {
    /// Create a new axes with default settings.
    pub fn new() -> Self {
        Axes {
            position: Bounds::new(0.125, 0.9, 0.11, 0.88),
            zorder: 0,
            facecolor: Some(Color::WHITE),
            x_scale: Box::new(LinearScale::default()),
            y_scale: Box::new(LinearScale::default()),
            artists: Vec::new(),
            title: None,
            x_label: None,
            y_label: None,
            grid: GridConfig::default(),
            x_axis: AxisConfig::default(),
            y_axis: AxisConfig::default(),
            spines: Spines::default(),
            axis_on: true,
            autoscale: true,
            data_bounds: None,
            x_lim: None,
            y_lim: None,
            overlay: false,
        }
    }

    /// Set the position within the figure.
    pub fn position(mut self, left: f64, right: f64, bottom: f64, top: f64) -> Self {
        self.position = Bounds::new(left, right, bottom, top);
        self
    }

    /// Set the title.
    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(Text::new(title, 0.0, 0.0).style(TextStyle::new().font_size(14.0).bold()));
        self
    }

    /// Set the x-axis label.
    pub fn set_xlabel(&mut self, label: impl Into<String>) -> &mut Self {
        self.x_label = Some(Text::new(label, 0.0, 0.0));
        self
    }

    /// Set the y-axis label.
    pub fn set_ylabel(&mut self, label: impl Into<String>) -> &mut Self {
        self.y_label = Some(Text::new(label, 0.0, 0.0));
        self
    }

    /// Set the x-axis limits.
    pub fn set_xlim(&mut self, min: f64, max: f64) -> &mut Self {
        self.x_lim = Some((min, max));
        self
    }

    /// Set the y-axis limits.
    pub fn set_ylim(&mut self, min: f64, max: f64) -> &mut Self {
        self.y_lim = Some((min, max));
        self
    }

    /// Effective x range.
    pub fn xlim(&self) -> (f64, f64) {
        if let Some(lim) = self.x_lim {
            return lim;
        }
        match self.autoscaled_bounds() {
            Some(bounds) => (bounds.x_min, bounds.x_max),
            None => (0.0, 1.0),
        }
    }

    /// Effective y range.
    pub fn ylim(&self) -> (f64, f64) {
        if let Some(lim) = self.y_lim {
            return lim;
        }
        match self.autoscaled_bounds() {
            Some(bounds) => (bounds.y_min, bounds.y_max),
            None => (0.0, 1.0),
        }
    }

    fn autoscaled_bounds(&self) -> Option<Bounds> {
        if !self.autoscale {
            return None;
        }
        self.data_bounds.map(|b| b.pad(AUTOSCALE_MARGIN))
    }

    /// Enable or disable autoscaling. Disabling freezes the current range.
    pub fn set_autoscale(&mut self, enabled: bool) -> &mut Self {
        if !enabled {
            self.x_lim = Some(self.xlim());
            self.y_lim = Some(self.ylim());
        }
        self.autoscale = enabled;
        self
    }

    pub fn autoscale_enabled(&self) -> bool {
        self.autoscale
    }

    /// Set explicit x tick positions.
    pub fn set_xticks(&mut self, ticks: Vec<f64>) -> &mut Self {
        self.x_axis.tick_positions = Some(ticks);
        self
    }

    /// Set explicit y tick positions.
    pub fn set_yticks(&mut self, ticks: Vec<f64>) -> &mut Self {
        self.y_axis.tick_positions = Some(ticks);
        self
    }

    /// Enable or disable the grid.
    pub fn grid(&mut self, visible: bool) -> &mut Self {
        self.grid.visible = visible;
        self
    }

    /// Show or hide all decoration. Artists are drawn either way.
    pub fn set_axis_on(&mut self, on: bool) -> &mut Self {
        self.axis_on = on;
        self
    }

    pub fn is_axis_on(&self) -> bool {
        self.axis_on
    }

    /// Draw x tick marks (and labels) on the bottom side only.
    pub fn tick_bottom(&mut self) -> &mut Self {
        self.x_axis.tick_side = TickSide::Low;
        self
    }

    /// Draw y tick marks (and labels) on the left side only.
    pub fn tick_left(&mut self) -> &mut Self {
        self.y_axis.tick_side = TickSide::Low;
        self
    }

    /// Mark this axes as a figure-wide overlay.
    pub fn set_overlay(&mut self, overlay: bool) -> &mut Self {
        self.overlay = overlay;
        self
    }

    pub fn is_overlay(&self) -> bool {
        self.overlay
    }

    /// Add a line.
    pub fn add_line(&mut self, line: Line2D) -> &mut Self {
        self.add_artist(Artist::Line(line))
    }

    /// Add a patch.
    pub fn add_patch(&mut self, patch: RoundedBox) -> &mut Self {
        self.add_artist(Artist::Patch(patch))
    }

    /// Add a text element.
    pub fn add_text(&mut self, text: Text) -> &mut Self {
        self.add_artist(Artist::Text(text))
    }

    /// Add text at `(x, y)` in the given coordinate system.
    pub fn text(
        &mut self,
        x: f64,
        y: f64,
        content: impl Into<String>,
        coords: Coords,
        style: TextStyle,
    ) -> &mut Self {
        self.add_text(Text::new(content, x, y).coords(coords).style(style))
    }

    fn add_artist(&mut self, artist: Artist) -> &mut Self {
        if let Some(artist_bounds) = artist.data_bounds() {
            match self.data_bounds {
                Some(ref mut bounds) => bounds.include_bounds(&artist_bounds),
                None => self.data_bounds = Some(artist_bounds),
            }
        }
        self.artists.push(artist);
        self
    }

    /// Remove all artists and forget their data extent.
    pub fn clear_artists(&mut self) -> &mut Self {
        self.artists.clear();
        self.data_bounds = None;
        self
    }

    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    pub fn lines(&self) -> impl Iterator<Item = &Line2D> {
        self.artists.iter().filter_map(|a| match a {
            Artist::Line(line) => Some(line),
            _ => None,
        })
    }

    pub fn patches(&self) -> impl Iterator<Item = &RoundedBox> {
        self.artists.iter().filter_map(|a| match a {
            Artist::Patch(patch) => Some(patch),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &Text> {
        self.artists.iter().filter_map(|a| match a {
            Artist::Text(text) => Some(text),
            _ => None,
        })
    }

    /// Render the axes into the backend.
    pub fn render_svg(
        &mut self,
        backend: &mut SvgBackend,
        figure_width: f64,
        figure_height: f64,
        clip_id: &str,
    ) {
        // Calculate pixel bounds for the plot area
        let pixel_bounds = Bounds::new(
            self.position.x_min * figure_width,
            self.position.x_max * figure_width,
            (1.0 - self.position.y_max) * figure_height,
            (1.0 - self.position.y_min) * figure_height,
        );

        let (x_min, x_max) = self.xlim();
        let (y_min, y_max) = self.ylim();
        if self.x_scale.set_range(x_min, x_max).is_err()
            || self.y_scale.set_range(y_min, y_max).is_err()
        {
            log::warn!("Skipping axes with non-finite limits");
            return;
        }
        let (x_min, x_max) = self.x_scale.range();
        let (y_min, y_max) = self.y_scale.range();
        let ctx = RenderContext {
            data_bounds: Bounds::new(x_min, x_max, y_min, y_max),
            pixel_bounds,
        };

        if self.axis_on {
            if let Some(ref face) = self.facecolor {
                backend.draw_rect(
                    pixel_bounds.x_min,
                    pixel_bounds.y_min,
                    pixel_bounds.width(),
                    pixel_bounds.height(),
                    &FillStyle::new(face.clone()),
                );
            }
            if self.grid.visible {
                self.render_grid(backend, &pixel_bounds);
            }
        }

        let mut ordered: Vec<&Artist> = self.artists.iter().collect();
        ordered.sort_by_key(|a| a.zorder());

        // Shapes are clipped to the plot area, text is not
        backend.start_clip(
            clip_id,
            pixel_bounds.x_min,
            pixel_bounds.y_min,
            pixel_bounds.width(),
            pixel_bounds.height(),
        );
        for artist in ordered.iter().filter(|a| !matches!(a, Artist::Text(_))) {
            artist.render(&ctx, backend);
        }
        backend.end_clip();

        if self.axis_on {
            self.render_spines(backend, &pixel_bounds);
            self.render_ticks(backend, &pixel_bounds);
            self.render_labels(backend, &pixel_bounds);
        }

        for artist in ordered.iter().filter(|a| matches!(a, Artist::Text(_))) {
            artist.render(&ctx, backend);
        }
    }

    fn render_grid(&self, backend: &mut SvgBackend, pixel_bounds: &Bounds) {
        let style = &self.grid.style;

        if self.grid.show_x {
            for tick in self.x_axis.tick_values(self.x_scale.as_ref()) {
                let px = pixel_bounds.x_min + self.x_scale.transform(tick) * pixel_bounds.width();
                backend.draw_line(px, pixel_bounds.y_min, px, pixel_bounds.y_max, style);
            }
        }

        if self.grid.show_y {
            for tick in self.y_axis.tick_values(self.y_scale.as_ref()) {
                let py = pixel_bounds.y_max - self.y_scale.transform(tick) * pixel_bounds.height();
                backend.draw_line(pixel_bounds.x_min, py, pixel_bounds.x_max, py, style);
            }
        }
    }

    fn render_spines(&self, backend: &mut SvgBackend, pb: &Bounds) {
        let style = &self.spines.style;
        for spine in Spine::ALL {
            if !self.spines.is_visible(spine) {
                continue;
            }
            let (x1, y1, x2, y2) = match spine {
                Spine::Top => (pb.x_min, pb.y_min, pb.x_max, pb.y_min),
                Spine::Bottom => (pb.x_min, pb.y_max, pb.x_max, pb.y_max),
                Spine::Left => (pb.x_min, pb.y_min, pb.x_min, pb.y_max),
                Spine::Right => (pb.x_max, pb.y_min, pb.x_max, pb.y_max),
            };
            backend.draw_line(x1, y1, x2, y2, style);
        }
    }

    fn render_ticks(&self, backend: &mut SvgBackend, pb: &Bounds) {
        let mark = LineStyle::new().color(self.spines.style.color.clone()).width(1.0);

        // Outward is +y on the bottom edge and -y on the top edge (SVG space)
        let x_axis = &self.x_axis;
        let dir = if x_axis.inside { -1.0 } else { 1.0 };
        for tick in x_axis.tick_values(self.x_scale.as_ref()) {
            let px = pb.x_min + self.x_scale.transform(tick) * pb.width();
            if x_axis.tick_side.low() {
                backend.draw_line(px, pb.y_max, px, pb.y_max + dir * x_axis.tick_length, &mark);
            }
            if x_axis.tick_side.high() {
                backend.draw_line(px, pb.y_min, px, pb.y_min - dir * x_axis.tick_length, &mark);
            }
            if !x_axis.show_labels || x_axis.tick_side == TickSide::None {
                continue;
            }
            let offset = dir * (x_axis.tick_length + x_axis.tick_padding);
            let downward = if x_axis.inside { VAlign::Bottom } else { VAlign::Top };
            let upward = if x_axis.inside { VAlign::Top } else { VAlign::Bottom };
            let (py, va) = if x_axis.tick_side.low() {
                (pb.y_max + offset, downward)
            } else {
                (pb.y_min - offset, upward)
            };
            let style = x_axis.tick_label_style.clone().align(HAlign::Center, va);
            backend.draw_text(px, py, &x_axis.format_tick(tick), &style);
        }

        let y_axis = &self.y_axis;
        let dir = if y_axis.inside { -1.0 } else { 1.0 };
        for tick in y_axis.tick_values(self.y_scale.as_ref()) {
            let py = pb.y_max - self.y_scale.transform(tick) * pb.height();
            if y_axis.tick_side.low() {
                backend.draw_line(pb.x_min - dir * y_axis.tick_length, py, pb.x_min, py, &mark);
            }
            if y_axis.tick_side.high() {
                backend.draw_line(pb.x_max, py, pb.x_max + dir * y_axis.tick_length, py, &mark);
            }
            if !y_axis.show_labels || y_axis.tick_side == TickSide::None {
                continue;
            }
            let offset = dir * (y_axis.tick_length + y_axis.tick_padding);
            let (px, ha) = match (y_axis.tick_side.low(), y_axis.inside) {
                (true, false) => (pb.x_min - offset, HAlign::Right),
                (true, true) => (pb.x_min - offset, HAlign::Left),
                (false, false) => (pb.x_max + offset, HAlign::Left),
                (false, true) => (pb.x_max + offset, HAlign::Right),
            };
            let style = y_axis.tick_label_style.clone().align(ha, VAlign::Center);
            backend.draw_text(px, py, &y_axis.format_tick(tick), &style);
        }
    }

    fn render_labels(&self, backend: &mut SvgBackend, pb: &Bounds) {
        if let Some(ref title) = self.title {
            let style = title.style.clone().align(HAlign::Center, VAlign::Bottom);
            backend.draw_text((pb.x_min + pb.x_max) / 2.0, pb.y_min - 6.0, &title.content, &style);
        }

        if let Some(ref label) = self.x_label {
            let style = label.style.clone().align(HAlign::Center, VAlign::Top);
            backend.draw_text((pb.x_min + pb.x_max) / 2.0, pb.y_max + 24.0, &label.content, &style);
        }

        if let Some(ref label) = self.y_label {
            let style = label
                .style
                .clone()
                .align(HAlign::Center, VAlign::Bottom)
                .rotation(90.0);
            backend.draw_text(pb.x_min - 32.0, (pb.y_min + pb.y_max) / 2.0, &label.content, &style);
        }
    }
}

impl Default for Axes {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_autoscale_follows_data() {
        let mut ax = Axes::new();
        ax.add_line(Line2D::segment(0.0, 0.0, 10.0, 20.0));
        let (x_min, x_max) = ax.xlim();
        assert_relative_eq!(x_min, -0.5);
        assert_relative_eq!(x_max, 10.5);
    }

    #[test]
    fn test_disabling_autoscale_freezes_limits() {
        let mut ax = Axes::new();
        ax.set_xlim(0.0, 1.0).set_ylim(0.0, 1.0).set_autoscale(false);
        ax.add_line(Line2D::segment(-5.0, -5.0, 5.0, 5.0));
        assert_eq!(ax.xlim(), (0.0, 1.0));
        assert_eq!(ax.ylim(), (0.0, 1.0));
        assert!(!ax.autoscale_enabled());
    }

    #[test]
    fn test_axes_coords_do_not_autoscale() {
        let mut ax = Axes::new();
        ax.add_line(Line2D::segment(0.0, 0.0, 5.0, 5.0).coords(Coords::Axes));
        assert_eq!(ax.xlim(), (0.0, 1.0));
    }

    #[test]
    fn test_artist_accessors() {
        let mut ax = Axes::new();
        ax.add_line(Line2D::segment(0.0, 0.0, 1.0, 1.0))
            .add_patch(RoundedBox::new(0.1, 0.1, 0.2, 0.2))
            .text(0.5, 0.5, "hi", Coords::Axes, TextStyle::new());
        assert_eq!(ax.lines().count(), 1);
        assert_eq!(ax.patches().count(), 1);
        assert_eq!(ax.texts().count(), 1);

        ax.clear_artists();
        assert!(ax.artists().is_empty());
    }

    #[test]
    fn test_axis_off_hides_decoration_but_not_artists() {
        let mut ax = Axes::new();
        ax.set_title("Hidden");
        ax.set_xlabel("Hidden x").set_ylabel("Hidden y");
        ax.text(0.5, 0.5, "Shown", Coords::Axes, TextStyle::new());
        ax.set_axis_on(false);

        let mut backend = SvgBackend::new(100.0, 100.0);
        ax.render_svg(&mut backend, 100.0, 100.0, "clip-0");
        let svg = backend.content_preview();
        assert!(svg.contains(">Shown</text>"));
        assert!(!svg.contains("Hidden"));
        assert!(!svg.contains("<line"));
    }

    #[test]
    fn test_tick_bottom_removes_top_marks() {
        let mut ax = Axes::new().position(0.0, 1.0, 0.0, 1.0);
        ax.set_xticks(vec![0.5]).set_yticks(vec![]);
        for spine in Spine::ALL {
            ax.spines.set_visible(spine, false);
        }

        let mut both = SvgBackend::new(100.0, 100.0);
        ax.render_svg(&mut both, 100.0, 100.0, "c");
        let marks_both = both.content_preview().matches("<line").count();

        ax.tick_bottom();
        let mut bottom = SvgBackend::new(100.0, 100.0);
        ax.render_svg(&mut bottom, 100.0, 100.0, "c");
        let marks_bottom = bottom.content_preview().matches("<line").count();

        assert_eq!(marks_both, 2);
        assert_eq!(marks_bottom, 1);
    }
}
