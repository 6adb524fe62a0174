//! Figure (canvas) implementation.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::plotting::axes::Axes;
use crate::plotting::backend::SvgBackend;
use crate::plotting::error::{PlotError, PlotResult};
use crate::plotting::style::{Color, FillStyle, HAlign, TextStyle, VAlign};

/// Handle to an axes owned by a [`Figure`].
///
/// Handles are plain indices; they stay valid for the lifetime of the figure
/// that issued them because axes are never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AxesId(usize);

impl AxesId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A figure containing one or more axes (subplots).
#[derive(Debug)]
pub struct Figure {
    /// Figure width in pixels
    pub width: f64,
    /// Figure height in pixels
    pub height: f64,
    /// Background color
    pub background: Color,
    /// Axes in insertion order
    axes: Vec<Axes>,
    /// Figure title
    pub title: Option<String>,
}

impl Figure {
    /// Create a new figure with the given dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        Figure {
            width,
            height,
            background: Color::WHITE,
            axes: Vec::new(),
            title: None,
        }
    }

    /// Create a figure with default dimensions (800x600).
    pub fn default_size() -> Self {
        Self::new(800.0, 600.0)
    }

    /// Set the figure title.
    pub fn suptitle(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Add an axes at `[left, bottom, width, height]` in figure coordinates.
    pub fn add_axes(&mut self, rect: [f64; 4]) -> AxesId {
        let [left, bottom, width, height] = rect;
        self.push(Axes::new().position(left, left + width, bottom, bottom + height))
    }

    /// Add a subplot at the given position.
    /// Uses matplotlib-style indexing: (rows, cols, index) where index is 1-based.
    pub fn add_subplot(&mut self, rows: usize, cols: usize, index: usize) -> PlotResult<AxesId> {
        let count = grid_size(rows, cols)?;
        if index == 0 || index > count {
            return Err(PlotError::InvalidConfig(format!(
                "Subplot index {} out of range for a {}x{} grid",
                index, rows, cols
            )));
        }
        let index = index - 1;
        let row = index / cols;
        let col = index % cols;

        // Same subplot parameters matplotlib uses by default
        let (left, right, bottom, top) = (0.125, 0.9, 0.11, 0.88);
        let (wspace, hspace) = (0.2, 0.2);
        let cell_w = (right - left) / (cols as f64 + wspace * (cols as f64 - 1.0));
        let cell_h = (top - bottom) / (rows as f64 + hspace * (rows as f64 - 1.0));

        let x0 = left + col as f64 * cell_w * (1.0 + wspace);
        let y1 = top - row as f64 * cell_h * (1.0 + hspace);

        Ok(self.push(Axes::new().position(x0, x0 + cell_w, y1 - cell_h, y1)))
    }

    /// Create a grid of subplots in row-major order.
    pub fn subplots(&mut self, rows: usize, cols: usize) -> PlotResult<Vec<AxesId>> {
        (1..=grid_size(rows, cols)?)
            .map(|i| self.add_subplot(rows, cols, i))
            .collect()
    }

    fn push(&mut self, axes: Axes) -> AxesId {
        self.axes.push(axes);
        AxesId(self.axes.len() - 1)
    }

    /// Borrow an axes by handle.
    pub fn axes(&self, id: AxesId) -> PlotResult<&Axes> {
        self.axes.get(id.0).ok_or(PlotError::UnknownAxes(id.0))
    }

    /// Mutably borrow an axes by handle.
    pub fn axes_mut(&mut self, id: AxesId) -> PlotResult<&mut Axes> {
        self.axes.get_mut(id.0).ok_or(PlotError::UnknownAxes(id.0))
    }

    /// All axes, overlays included, in insertion order.
    pub fn get_axes(&self) -> &[Axes] {
        &self.axes
    }

    /// Handles of all axes, overlays included, in insertion order.
    pub fn axes_ids(&self) -> Vec<AxesId> {
        (0..self.axes.len()).map(AxesId).collect()
    }

    /// Handles of the data subplots, i.e. every axes that is not an overlay.
    pub fn subplot_ids(&self) -> Vec<AxesId> {
        self.axes
            .iter()
            .enumerate()
            .filter(|(_, ax)| !ax.is_overlay())
            .map(|(i, _)| AxesId(i))
            .collect()
    }

    /// Render the figure to an SVG string.
    pub fn render(&mut self) -> String {
        let mut backend = SvgBackend::new(self.width, self.height);

        backend.draw_rect(0.0, 0.0, self.width, self.height, &FillStyle::new(self.background.clone()));

        // Stable sort: equal z-order keeps insertion order
        let mut order: Vec<usize> = (0..self.axes.len()).collect();
        order.sort_by_key(|&i| self.axes[i].zorder);

        for i in order {
            let clip_id = format!("axes-clip-{}", i);
            self.axes[i].render_svg(&mut backend, self.width, self.height, &clip_id);
        }

        if let Some(ref title) = self.title {
            let style = TextStyle::new()
                .font_size(16.0)
                .bold()
                .align(HAlign::Center, VAlign::Baseline);
            backend.draw_text(self.width / 2.0, 30.0, title, &style);
        }

        backend.render()
    }

    /// Save the figure to a file.
    pub fn save(&mut self, path: impl AsRef<Path>) -> PlotResult<()> {
        let svg = self.render();
        let mut file = File::create(path)?;
        file.write_all(svg.as_bytes())?;
        Ok(())
    }
}

/// Number of cells in a `rows` x `cols` grid, both of which must be nonzero.
fn grid_size(rows: usize, cols: usize) -> PlotResult<usize> {
    rows.checked_mul(cols)
        .filter(|&n| n > 0)
        .ok_or_else(|| {
            PlotError::InvalidConfig(format!("Invalid subplot grid {}x{}", rows, cols))
        })
}

impl Default for Figure {
    fn default() -> Self {
        Self::default_size()
    }
}
