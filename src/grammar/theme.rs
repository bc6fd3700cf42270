//! Theme directives for plot specifications.
//!
//! A theme bundles the non-data appearance of a plot: backgrounds, grid,
//! axis elements, typography, and panel spacing. Individual elements can be
//! overridden after picking a complete theme, and setting a line element to
//! a fully transparent color blanks it.

use crate::color::Rgba;

/// A styled line element (grid line, axis line, tick marks).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementLine {
    /// Line color.
    pub color: Rgba,
    /// Line width in pixels.
    pub width: f32,
}

impl ElementLine {
    /// Create a line element with the given color and width 1.
    #[must_use]
    pub fn new(color: Rgba) -> Self {
        Self { color, width: 1.0 }
    }

    /// Set the line width.
    #[must_use]
    pub fn width(mut self, width: f32) -> Self {
        self.width = width.max(0.0);
        self
    }
}

/// Theme specification.
///
/// `None` for an optional element means the element is not drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Figure background color.
    pub background: Rgba,
    /// Panel background color.
    pub panel_background: Rgba,
    /// Facet strip background color.
    pub strip_background: Rgba,
    /// Grid lines at break positions.
    pub grid: Option<ElementLine>,
    /// Axis lines along panel edges.
    pub axis_line: Option<ElementLine>,
    /// Tick marks at break positions.
    pub axis_ticks: Option<ElementLine>,
    /// Border drawn around each panel.
    pub panel_border: Option<ElementLine>,
    /// Whether axis titles are shown (blanked by [`Theme::axis_title_blank`]).
    pub show_axis_title: bool,
    /// Text color for titles and labels.
    pub text_color: Rgba,
    /// Base font family for text output.
    pub base_family: String,
    /// Base font size in points.
    pub base_size: f32,
    /// Margin around the figure in pixels.
    pub margin: u32,
    /// Spacing between facet panels, as a fraction of panel size.
    pub panel_spacing: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::grey()
    }
}

impl Theme {
    fn base() -> Self {
        Self {
            background: Rgba::WHITE,
            panel_background: Rgba::WHITE,
            strip_background: Rgba::rgb(217, 217, 217),
            grid: None,
            axis_line: None,
            axis_ticks: None,
            panel_border: None,
            show_axis_title: true,
            text_color: Rgba::rgb(50, 50, 50),
            base_family: "sans".to_string(),
            base_size: 11.0,
            margin: 40,
            panel_spacing: 0.025,
        }
    }

    /// Grey theme (the familiar grey-panel default).
    #[must_use]
    pub fn grey() -> Self {
        Self {
            panel_background: Rgba::rgb(235, 235, 235),
            grid: Some(ElementLine::new(Rgba::WHITE)),
            axis_ticks: Some(ElementLine::new(Rgba::rgb(51, 51, 51))),
            ..Self::base()
        }
    }

    /// Minimal theme: light grid on white, no axis furniture.
    #[must_use]
    pub fn minimal() -> Self {
        Self {
            grid: Some(ElementLine::new(Rgba::rgb(220, 220, 220)).width(0.5)),
            strip_background: Rgba::WHITE,
            ..Self::base()
        }
    }

    /// Black and white theme: white panels with black borders.
    #[must_use]
    pub fn bw() -> Self {
        Self {
            grid: Some(ElementLine::new(Rgba::rgb(200, 200, 200)).width(0.5)),
            axis_ticks: Some(ElementLine::new(Rgba::BLACK)),
            panel_border: Some(ElementLine::new(Rgba::BLACK)),
            text_color: Rgba::BLACK,
            ..Self::base()
        }
    }

    /// Classic theme: axis lines, no grid.
    #[must_use]
    pub fn classic() -> Self {
        Self {
            axis_line: Some(ElementLine::new(Rgba::BLACK)),
            axis_ticks: Some(ElementLine::new(Rgba::BLACK)),
            strip_background: Rgba::WHITE,
            text_color: Rgba::BLACK,
            ..Self::base()
        }
    }

    /// Dark theme.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            background: Rgba::rgb(30, 30, 30),
            panel_background: Rgba::rgb(40, 40, 40),
            strip_background: Rgba::rgb(55, 55, 55),
            grid: Some(ElementLine::new(Rgba::rgb(60, 60, 60)).width(0.5)),
            axis_ticks: Some(ElementLine::new(Rgba::rgb(180, 180, 180))),
            text_color: Rgba::rgb(220, 220, 220),
            ..Self::base()
        }
    }

    /// Void theme: nothing but data.
    #[must_use]
    pub fn void() -> Self {
        Self {
            strip_background: Rgba::WHITE,
            show_axis_title: false,
            margin: 10,
            ..Self::base()
        }
    }

    /// Tufte-style maximal-data theme: no grid, no panel decoration, ticks
    /// only, with the given typography.
    #[must_use]
    pub fn tufte(base_family: &str, base_size: f32) -> Self {
        Self {
            strip_background: Rgba::WHITE,
            axis_ticks: Some(ElementLine::new(Rgba::BLACK).width(0.5)),
            base_family: base_family.to_string(),
            base_size,
            panel_spacing: 0.05,
            ..Self::base()
        }
    }

    /// Set figure background color.
    #[must_use]
    pub fn background(mut self, color: Rgba) -> Self {
        self.background = color;
        self
    }

    /// Set panel background color.
    #[must_use]
    pub fn panel_background(mut self, color: Rgba) -> Self {
        self.panel_background = color;
        self
    }

    /// Set facet strip background color.
    #[must_use]
    pub fn strip_background(mut self, color: Rgba) -> Self {
        self.strip_background = color;
        self
    }

    /// Override the grid line element.
    #[must_use]
    pub fn grid_line(mut self, element: ElementLine) -> Self {
        self.grid = Some(element);
        self
    }

    /// Remove grid lines.
    #[must_use]
    pub fn grid_blank(mut self) -> Self {
        self.grid = None;
        self
    }

    /// Override the axis line element.
    #[must_use]
    pub fn axis_line(mut self, element: ElementLine) -> Self {
        self.axis_line = Some(element);
        self
    }

    /// Override the axis tick element.
    #[must_use]
    pub fn axis_ticks(mut self, element: ElementLine) -> Self {
        self.axis_ticks = Some(element);
        self
    }

    /// Blank the axis titles.
    #[must_use]
    pub fn axis_title_blank(mut self) -> Self {
        self.show_axis_title = false;
        self
    }

    /// Set spacing between facet panels as a fraction of panel size.
    #[must_use]
    pub fn panel_spacing(mut self, spacing: f32) -> Self {
        self.panel_spacing = spacing.clamp(0.0, 0.5);
        self
    }

    /// Set the figure margin in pixels.
    #[must_use]
    pub fn margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_grey_defaults() {
        let t = Theme::grey();
        assert_eq!(t.panel_background, Rgba::rgb(235, 235, 235));
        assert!(t.grid.is_some());
        assert!(t.axis_line.is_none());
    }

    #[test]
    fn test_theme_bw_has_border() {
        let t = Theme::bw();
        assert!(t.panel_border.is_some());
        assert_eq!(t.text_color, Rgba::BLACK);
    }

    #[test]
    fn test_theme_classic_axis_no_grid() {
        let t = Theme::classic();
        assert!(t.axis_line.is_some());
        assert!(t.grid.is_none());
    }

    #[test]
    fn test_theme_dark() {
        let t = Theme::dark();
        assert_eq!(t.background, Rgba::rgb(30, 30, 30));
    }

    #[test]
    fn test_theme_void_bare() {
        let t = Theme::void();
        assert!(t.grid.is_none());
        assert!(t.axis_line.is_none());
        assert!(t.axis_ticks.is_none());
        assert!(!t.show_axis_title);
        assert_eq!(t.margin, 10);
    }

    #[test]
    fn test_theme_tufte_typography() {
        let t = Theme::tufte("Futura", 16.0);
        assert_eq!(t.base_family, "Futura");
        assert!((t.base_size - 16.0).abs() < f32::EPSILON);
        assert!(t.grid.is_none());
        assert!(t.axis_line.is_none());
        assert!(t.axis_ticks.is_some());
    }

    #[test]
    fn test_theme_element_overrides() {
        let t = Theme::tufte("Futura", 16.0)
            .axis_line(ElementLine::new(Rgba::from_hex("#4d4d4d").unwrap()))
            .axis_ticks(ElementLine::new(Rgba::from_hex("#00000000").unwrap()))
            .axis_title_blank()
            .panel_spacing(0.09);

        assert_eq!(t.axis_line.unwrap().color, Rgba::rgb(77, 77, 77));
        assert!(t.axis_ticks.unwrap().color.is_transparent());
        assert!(!t.show_axis_title);
        assert!((t.panel_spacing - 0.09).abs() < f32::EPSILON);
    }

    #[test]
    fn test_element_line_width() {
        let e = ElementLine::new(Rgba::BLACK).width(2.0);
        assert!((e.width - 2.0).abs() < f32::EPSILON);
        assert!(ElementLine::new(Rgba::BLACK).width(-1.0).width.abs() < f32::EPSILON);
    }

    #[test]
    fn test_panel_spacing_clamped() {
        assert!((Theme::grey().panel_spacing(0.9).panel_spacing - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_theme_default_is_grey() {
        assert_eq!(Theme::default(), Theme::grey());
    }
}
