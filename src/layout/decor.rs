//! Single-axes treatments: text panels and open frames.

use log::debug;

use crate::plotting::prelude::*;
use crate::plotting::style::TextStyle;

/// Turn `ax` into a text panel with `text` centered in it.
///
/// Existing artists are removed, limits are pinned to the unit square and all
/// decoration is switched off. `style` is applied over the default 12px
/// centered text.
pub fn axtext(ax: &mut Axes, text: &str, style: &TextOverrides) {
    ax.clear_artists();
    ax.set_xlim(0.0, 1.0).set_ylim(0.0, 1.0).set_autoscale(false);

    let base = TextStyle::new()
        .font_size(12.0)
        .align(HAlign::Center, VAlign::Center);
    ax.text(0.5, 0.5, text, Coords::Data, style.apply(base));
    ax.set_axis_on(false);
    debug!("Axes turned into text panel ({} chars)", text.chars().count());
}

/// Keep only the bottom and left spines, with ticks on those sides.
pub fn bottomleft_spines(ax: &mut Axes) {
    ax.spines.set_visible(Spine::Top, false);
    ax.spines.set_visible(Spine::Right, false);
    ax.tick_bottom().tick_left();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plotting::element::Line2D;
    use crate::plotting::TickSide;

    #[test]
    fn test_axtext_replaces_content() {
        let mut ax = Axes::new();
        ax.add_line(Line2D::segment(0.0, 0.0, 10.0, 10.0));
        axtext(&mut ax, "Methods", &TextOverrides::default());

        assert_eq!(ax.lines().count(), 0);
        let texts: Vec<_> = ax.texts().collect();
        assert_eq!(texts.len(), 1);
        assert_eq!(texts[0].content, "Methods");
        assert_eq!((texts[0].x, texts[0].y), (0.5, 0.5));
        assert_eq!(texts[0].coords, Coords::Data);
        assert_eq!(texts[0].style.font_size, 12.0);
        assert_eq!(texts[0].style.ha, HAlign::Center);
        assert_eq!(texts[0].style.va, VAlign::Center);

        assert_eq!(ax.xlim(), (0.0, 1.0));
        assert_eq!(ax.ylim(), (0.0, 1.0));
        assert!(!ax.autoscale_enabled());
        assert!(!ax.is_axis_on());
    }

    #[test]
    fn test_axtext_overrides() {
        let mut ax = Axes::new();
        let style = TextOverrides::default()
            .font_size(20.0)
            .ha(HAlign::Left)
            .weight(FontWeight::Bold);
        axtext(&mut ax, "Note", &style);

        let text = ax.texts().next().unwrap();
        assert_eq!(text.style.font_size, 20.0);
        assert_eq!(text.style.ha, HAlign::Left);
        assert_eq!(text.style.va, VAlign::Center);
        assert_eq!(text.style.weight, FontWeight::Bold);
    }

    #[test]
    fn test_bottomleft_spines() {
        let mut ax = Axes::new();
        bottomleft_spines(&mut ax);

        assert!(!ax.spines.is_visible(Spine::Top));
        assert!(!ax.spines.is_visible(Spine::Right));
        assert!(ax.spines.is_visible(Spine::Bottom));
        assert!(ax.spines.is_visible(Spine::Left));
        assert_eq!(ax.x_axis.tick_side, TickSide::Low);
        assert_eq!(ax.y_axis.tick_side, TickSide::Low);
    }

    #[test]
    fn test_bottomleft_spines_idempotent() {
        let mut once = Axes::new();
        bottomleft_spines(&mut once);
        let mut twice = Axes::new();
        bottomleft_spines(&mut twice);
        bottomleft_spines(&mut twice);

        assert_eq!(once.spines, twice.spines);
        assert_eq!(once.x_axis, twice.x_axis);
        assert_eq!(once.y_axis, twice.y_axis);
    }
}
