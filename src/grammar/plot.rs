//! Plot specification builder and renderer.
//!
//! A [`GGPlot`] is an ordered composition of directives: geometry layers,
//! a facet, scale overrides, a coordinate system, labels, and a theme.
//! Directives combine left-to-right with `+`; [`GGPlot::build`] validates
//! the composite and freezes it into a [`BuiltPlot`] ready for rendering.

use std::ops::Add;

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::geometry::Rect;
use crate::output::{PngEncoder, SvgEncoder, TextAnchor};
use crate::render::{
    draw_circle, draw_circle_outline, draw_line_aa, draw_rect, draw_rect_outline,
    draw_thick_line_aa,
};
use crate::scale::{pretty_breaks, LinearScale, Scale, DEFAULT_BREAK_COUNT};

use super::aes::Aes;
use super::coord::Coord;
use super::data::DataFrame;
use super::facet::Facet;
use super::geom::{Geom, GeomType, PointShape, SmoothMethod};
use super::labs::Labs;
use super::scales::{Axis, ScaleContinuous};
use super::stat::{critical_value, evaluation_grid, loess_fit, LinearFit};
use super::theme::Theme;

/// Default layer color when no fixed color is set.
const DEFAULT_COLOR: Rgba = Rgba::new(66, 133, 244, 255);

/// Alpha of the standard-error band relative to the fit color.
const SE_BAND_ALPHA: u8 = 50;

/// Tick mark length in pixels.
const TICK_LENGTH: f32 = 4.0;

/// Number of evaluation points for smooth curves.
const SMOOTH_GRID: usize = 80;

/// A layer in the plot.
#[derive(Debug, Clone)]
pub struct Layer {
    /// The geometry.
    pub geom: Geom,
    /// Layer-specific data (if different from plot data).
    pub data: Option<DataFrame>,
    /// Layer-specific aesthetics.
    pub aes: Aes,
}

impl Layer {
    /// Create a new layer from a geometry.
    #[must_use]
    pub fn new(geom: Geom) -> Self {
        Self { aes: geom.aes.clone().unwrap_or_default(), geom, data: None }
    }

    /// Set layer-specific data.
    #[must_use]
    pub fn data(mut self, data: DataFrame) -> Self {
        self.data = Some(data);
        self
    }

    /// Set layer aesthetics.
    #[must_use]
    pub fn aes(mut self, aes: Aes) -> Self {
        self.aes = aes;
        self
    }
}

/// Start a plot specification from data and aesthetic mappings.
///
/// The conventional entry point: directives are then added with `+`.
#[must_use]
pub fn ggplot(data: DataFrame, aes: Aes) -> GGPlot {
    GGPlot::new().data(data).aes(aes)
}

/// Plot specification builder.
#[derive(Debug, Clone)]
pub struct GGPlot {
    /// Plot data.
    data: DataFrame,
    /// Global aesthetic mappings.
    aes: Aes,
    /// Layers, in composition order.
    layers: Vec<Layer>,
    /// Coordinate system.
    coord: Coord,
    /// Faceting.
    facet: Facet,
    /// X scale override.
    x_scale: Option<ScaleContinuous>,
    /// Y scale override.
    y_scale: Option<ScaleContinuous>,
    /// Labels.
    labs: Labs,
    /// Theme.
    theme: Theme,
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
}

impl Default for GGPlot {
    fn default() -> Self {
        Self::new()
    }
}

impl GGPlot {
    /// Create a new plot builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: DataFrame::new(),
            aes: Aes::new(),
            layers: Vec::new(),
            coord: Coord::cartesian(),
            facet: Facet::None,
            x_scale: None,
            y_scale: None,
            labs: Labs::new(),
            theme: Theme::grey(),
            width: 800,
            height: 600,
        }
    }

    /// Set the data.
    #[must_use]
    pub fn data(mut self, data: DataFrame) -> Self {
        self.data = data;
        self
    }

    /// Convenience: set x and y data directly.
    #[must_use]
    pub fn data_xy(mut self, x: &[f32], y: &[f32]) -> Self {
        self.data = DataFrame::from_xy(x, y);
        self.aes = self.aes.x("x").y("y");
        self
    }

    /// Set global aesthetics.
    #[must_use]
    pub fn aes(mut self, aes: Aes) -> Self {
        self.aes = aes;
        self
    }

    /// Add a geometry layer.
    #[must_use]
    pub fn geom(mut self, geom: Geom) -> Self {
        self.layers.push(Layer::new(geom));
        self
    }

    /// Add a layer.
    #[must_use]
    pub fn layer(mut self, layer: Layer) -> Self {
        self.layers.push(layer);
        self
    }

    /// Set coordinate system.
    #[must_use]
    pub fn coord(mut self, coord: Coord) -> Self {
        self.coord = coord;
        self
    }

    /// Set faceting.
    #[must_use]
    pub fn facet(mut self, facet: Facet) -> Self {
        self.facet = facet;
        self
    }

    /// Apply a scale override to its axis.
    #[must_use]
    pub fn scale(mut self, scale: ScaleContinuous) -> Self {
        match scale.axis {
            Axis::X => self.x_scale = Some(scale),
            Axis::Y => self.y_scale = Some(scale),
        }
        self
    }

    /// Merge labels into the specification.
    #[must_use]
    pub fn labs(mut self, labs: Labs) -> Self {
        self.labs = self.labs.merge(&labs);
        self
    }

    /// Set theme.
    #[must_use]
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set dimensions.
    #[must_use]
    pub fn dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// The layers added so far, in composition order.
    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Build the plot.
    ///
    /// Validates that at least one geometry layer is present and that every
    /// mapped column exists in the layer's data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Spec`] or [`Error::MissingColumn`] on an invalid
    /// specification.
    pub fn build(self) -> Result<BuiltPlot> {
        if self.layers.is_empty() {
            return Err(Error::Spec("no geometry layers specified".into()));
        }

        for layer in &self.layers {
            let frame = layer.data.as_ref().unwrap_or(&self.data);
            if frame.ncol() == 0 {
                continue;
            }
            let aes = self.aes.merge(&layer.aes);
            for col in [aes.x.as_deref().unwrap_or("x"), aes.y.as_deref().unwrap_or("y")] {
                if !frame.has_column(col) {
                    return Err(Error::MissingColumn(col.to_string()));
                }
            }
        }

        match &self.facet {
            Facet::Wrap { var, .. } if !self.data.has_column(var) => {
                return Err(Error::MissingColumn(var.clone()));
            }
            Facet::Grid { row, col } => {
                for var in [row, col] {
                    if !self.data.has_column(var) {
                        return Err(Error::MissingColumn(var.clone()));
                    }
                }
            }
            _ => {}
        }

        Ok(BuiltPlot {
            data: self.data,
            aes: self.aes,
            layers: self.layers,
            coord: self.coord,
            facet: self.facet,
            x_scale: self.x_scale,
            y_scale: self.y_scale,
            labs: self.labs,
            theme: self.theme,
            width: self.width,
            height: self.height,
        })
    }
}

// ============================================================================
// Additive composition
// ============================================================================

impl Add<Geom> for GGPlot {
    type Output = GGPlot;

    fn add(self, rhs: Geom) -> GGPlot {
        self.geom(rhs)
    }
}

impl Add<Layer> for GGPlot {
    type Output = GGPlot;

    fn add(self, rhs: Layer) -> GGPlot {
        self.layer(rhs)
    }
}

impl Add<Facet> for GGPlot {
    type Output = GGPlot;

    fn add(self, rhs: Facet) -> GGPlot {
        self.facet(rhs)
    }
}

impl Add<Coord> for GGPlot {
    type Output = GGPlot;

    fn add(self, rhs: Coord) -> GGPlot {
        self.coord(rhs)
    }
}

impl Add<ScaleContinuous> for GGPlot {
    type Output = GGPlot;

    fn add(self, rhs: ScaleContinuous) -> GGPlot {
        self.scale(rhs)
    }
}

impl Add<Labs> for GGPlot {
    type Output = GGPlot;

    fn add(self, rhs: Labs) -> GGPlot {
        self.labs(rhs)
    }
}

impl Add<Theme> for GGPlot {
    type Output = GGPlot;

    fn add(self, rhs: Theme) -> GGPlot {
        self.theme(rhs)
    }
}

// ============================================================================
// Layout
// ============================================================================

/// One panel slot produced by the facet layout.
#[derive(Debug, Clone)]
struct PanelSlot {
    rect: Rect,
    strip: Option<Rect>,
    label: Option<String>,
    /// (column, value) filters selecting this panel's rows.
    filters: Vec<(String, String)>,
}

/// Resolved figure layout: panel rectangles plus shared domains and breaks.
#[derive(Debug, Clone)]
struct Layout {
    panels: Vec<PanelSlot>,
    x_domain: (f32, f32),
    y_domain: (f32, f32),
    x_breaks: Vec<f32>,
    y_breaks: Vec<f32>,
}

/// A built plot ready for rendering.
#[derive(Debug)]
pub struct BuiltPlot {
    data: DataFrame,
    aes: Aes,
    layers: Vec<Layer>,
    coord: Coord,
    facet: Facet,
    x_scale: Option<ScaleContinuous>,
    y_scale: Option<ScaleContinuous>,
    labs: Labs,
    theme: Theme,
    width: u32,
    height: u32,
}

impl BuiltPlot {
    /// Output width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Output height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The layers of the specification, in composition order.
    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Compute the shared x/y domains across all layers.
    fn data_domains(&self) -> ((f32, f32), (f32, f32)) {
        let mut x_min = f32::MAX;
        let mut x_max = f32::MIN;
        let mut y_min = f32::MAX;
        let mut y_max = f32::MIN;

        for layer in &self.layers {
            let frame = layer.data.as_ref().unwrap_or(&self.data);
            let aes = self.aes.merge(&layer.aes);

            if let Some(xs) = frame.get_f32(aes.x.as_deref().unwrap_or("x")) {
                for v in xs.into_iter().filter(|v| v.is_finite()) {
                    x_min = x_min.min(v);
                    x_max = x_max.max(v);
                }
            }
            if let Some(ys) = frame.get_f32(aes.y.as_deref().unwrap_or("y")) {
                for v in ys.into_iter().filter(|v| v.is_finite()) {
                    y_min = y_min.min(v);
                    y_max = y_max.max(v);
                }
            }
        }

        // Empty or single-valued data still yields a usable domain
        if x_min >= x_max {
            x_min -= 1.0;
            x_max += 1.0;
        }
        if y_min >= y_max {
            y_min -= 1.0;
            y_max += 1.0;
        }

        let x_pad = (x_max - x_min) * 0.05;
        let y_pad = (y_max - y_min) * 0.05;

        ((x_min - x_pad, x_max + x_pad), (y_min - y_pad, y_max + y_pad))
    }

    /// Facet keys for the layout: (label, filters) per panel.
    fn facet_slots(&self) -> Result<(Vec<(Option<String>, Vec<(String, String)>)>, usize)> {
        match &self.facet {
            Facet::None => Ok((vec![(None, vec![])], 1)),
            Facet::Wrap { var, .. } => {
                let values = self.data.distinct_text(var);
                if values.is_empty() {
                    return Err(Error::Rendering(format!(
                        "facet column '{var}' has no categorical values"
                    )));
                }
                let ncol = self.facet.wrap_columns(values.len());
                let slots = values
                    .into_iter()
                    .map(|v| (Some(v.clone()), vec![(var.clone(), v)]))
                    .collect();
                Ok((slots, ncol))
            }
            Facet::Grid { row, col } => {
                let row_vals = self.data.distinct_text(row);
                let col_vals = self.data.distinct_text(col);
                if row_vals.is_empty() || col_vals.is_empty() {
                    return Err(Error::Rendering(
                        "facet grid columns have no categorical values".into(),
                    ));
                }
                let ncol = col_vals.len();
                let mut slots = Vec::with_capacity(row_vals.len() * ncol);
                for r in &row_vals {
                    for c in &col_vals {
                        slots.push((
                            Some(format!("{r} / {c}")),
                            vec![(row.clone(), r.clone()), (col.clone(), c.clone())],
                        ));
                    }
                }
                Ok((slots, ncol))
            }
        }
    }

    /// Resolve the figure layout.
    fn layout(&self) -> Result<Layout> {
        let (dx, dy) = self.data_domains();

        let x_domain = self
            .coord
            .x_limits()
            .or(self.x_scale.as_ref().and_then(|s| s.limits))
            .unwrap_or(dx);
        let y_domain = self
            .coord
            .y_limits()
            .or(self.y_scale.as_ref().and_then(|s| s.limits))
            .unwrap_or(dy);

        if x_domain.0 >= x_domain.1 || y_domain.0 >= y_domain.1 {
            return Err(Error::ScaleDomain("plot domain is empty".into()));
        }

        let (slots, ncol) = self.facet_slots()?;
        let n = slots.len();
        let nrow = n.div_ceil(ncol);
        let faceted = n > 1;

        let margin = self.theme.margin as f32;
        let avail_w = self.width as f32 - 2.0 * margin;
        let avail_h = self.height as f32 - 2.0 * margin;
        if avail_w <= 0.0 || avail_h <= 0.0 {
            return Err(Error::InvalidDimensions { width: self.width, height: self.height });
        }

        let strip_h = if faceted { (self.theme.base_size * 1.6).ceil() } else { 0.0 };

        let cell_w = avail_w / ncol as f32;
        let cell_h = avail_h / nrow as f32;
        let sp_x = self.theme.panel_spacing * cell_w;
        let sp_y = self.theme.panel_spacing * cell_h;

        let panel_w = (avail_w - sp_x * (ncol as f32 - 1.0)) / ncol as f32;
        let panel_h = (avail_h - sp_y * (nrow as f32 - 1.0)) / nrow as f32 - strip_h;
        if panel_w <= 1.0 || panel_h <= 1.0 {
            return Err(Error::Rendering("panels do not fit in the figure".into()));
        }

        // Fixed aspect: one x unit spans ppu pixels, one y unit ratio * ppu
        let (panel_w, panel_h) = if let Some(ratio) = self.coord.aspect_ratio() {
            let x_span = x_domain.1 - x_domain.0;
            let y_span = y_domain.1 - y_domain.0;
            let ppu = (panel_w / x_span).min(panel_h / (ratio * y_span));
            (ppu * x_span, ratio * ppu * y_span)
        } else {
            (panel_w, panel_h)
        };

        let mut panels = Vec::with_capacity(n);
        for (i, (label, filters)) in slots.into_iter().enumerate() {
            let row = i / ncol;
            let col = i % ncol;

            let cell = Rect::new(
                margin + col as f32 * (panel_w + sp_x),
                margin + row as f32 * (panel_h + strip_h + sp_y) + strip_h,
                panel_w,
                panel_h,
            );

            let strip = faceted.then(|| Rect::new(cell.x, cell.y - strip_h, cell.width, strip_h));

            panels.push(PanelSlot { rect: cell, strip, label, filters });
        }

        let x_breaks = breaks_for(&self.x_scale, x_domain);
        let y_breaks = breaks_for(&self.y_scale, y_domain);

        Ok(Layout { panels, x_domain, y_domain, x_breaks, y_breaks })
    }

    // ------------------------------------------------------------------
    // Raster rendering
    // ------------------------------------------------------------------

    /// Render to framebuffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout or a scale cannot be constructed.
    pub fn to_framebuffer(&self) -> Result<Framebuffer> {
        let mut fb = Framebuffer::new(self.width, self.height)?;
        fb.clear(self.theme.background);

        let layout = self.layout()?;

        for panel in &layout.panels {
            self.render_panel(&mut fb, panel, &layout)?;
        }

        Ok(fb)
    }

    fn render_panel(&self, fb: &mut Framebuffer, panel: &PanelSlot, layout: &Layout) -> Result<()> {
        let rect = panel.rect;
        let x_scale = LinearScale::new(layout.x_domain, (rect.x, rect.right()))?;
        // Screen y runs top-down
        let y_scale = LinearScale::new(layout.y_domain, (rect.bottom(), rect.y))?;

        draw_rect(
            fb,
            rect.x as i32,
            rect.y as i32,
            rect.width as u32,
            rect.height as u32,
            self.theme.panel_background,
        );

        if let Some(grid) = &self.theme.grid {
            for &b in &layout.x_breaks {
                let px = x_scale.scale(b);
                draw_thick_line_aa(fb, px, rect.y, px, rect.bottom(), grid.width, grid.color);
            }
            for &b in &layout.y_breaks {
                let py = y_scale.scale(b);
                draw_thick_line_aa(fb, rect.x, py, rect.right(), py, grid.width, grid.color);
            }
        }

        for layer in &self.layers {
            self.render_layer(fb, layer, panel, &x_scale, &y_scale, layout)?;
        }

        if let Some(axis) = &self.theme.axis_line {
            draw_thick_line_aa(
                fb,
                rect.x,
                rect.bottom(),
                rect.right(),
                rect.bottom(),
                axis.width,
                axis.color,
            );
            draw_thick_line_aa(fb, rect.x, rect.y, rect.x, rect.bottom(), axis.width, axis.color);
        }

        if let Some(ticks) = &self.theme.axis_ticks {
            for &b in &layout.x_breaks {
                let px = x_scale.scale(b);
                draw_line_aa(
                    fb,
                    px,
                    rect.bottom(),
                    px,
                    rect.bottom() + TICK_LENGTH,
                    ticks.color,
                );
            }
            for &b in &layout.y_breaks {
                let py = y_scale.scale(b);
                draw_line_aa(fb, rect.x - TICK_LENGTH, py, rect.x, py, ticks.color);
            }
        }

        if let Some(border) = &self.theme.panel_border {
            draw_rect_outline(
                fb,
                rect.x as i32,
                rect.y as i32,
                rect.width as u32,
                rect.height as u32,
                border.color,
                border.width.max(1.0) as u32,
            );
        }

        if let Some(strip) = panel.strip {
            draw_rect(
                fb,
                strip.x as i32,
                strip.y as i32,
                strip.width as u32,
                strip.height as u32,
                self.theme.strip_background,
            );
        }

        Ok(())
    }

    /// Panel-filtered (x, y) pairs for a layer.
    fn layer_points(&self, layer: &Layer, panel: &PanelSlot) -> (Vec<f32>, Vec<f32>) {
        let base = layer.data.as_ref().unwrap_or(&self.data);
        let aes = self.aes.merge(&layer.aes);

        let mut frame = base.clone();
        for (col, value) in &panel.filters {
            // Layer-specific data without the facet column stays unfiltered
            if frame.has_column(col) {
                frame = frame.filter_text_eq(col, value);
            }
        }

        let xs = frame.get_f32(aes.x.as_deref().unwrap_or("x")).unwrap_or_default();
        let ys = frame.get_f32(aes.y.as_deref().unwrap_or("y")).unwrap_or_default();

        let n = xs.len().min(ys.len());
        let mut out_x = Vec::with_capacity(n);
        let mut out_y = Vec::with_capacity(n);
        for i in 0..n {
            if xs[i].is_finite() && ys[i].is_finite() {
                out_x.push(xs[i]);
                out_y.push(ys[i]);
            }
        }
        (out_x, out_y)
    }

    #[allow(clippy::too_many_arguments)]
    fn render_layer(
        &self,
        fb: &mut Framebuffer,
        layer: &Layer,
        panel: &PanelSlot,
        x_scale: &LinearScale,
        y_scale: &LinearScale,
        layout: &Layout,
    ) -> Result<()> {
        let (xs, ys) = self.layer_points(layer, panel);
        if xs.is_empty() {
            return Ok(());
        }

        let aes = self.aes.merge(&layer.aes);
        let alpha = aes.alpha_value.map(|a| (a * 255.0) as u8);
        let mut color = aes.color_value.unwrap_or(DEFAULT_COLOR);
        if let Some(a) = alpha {
            color = color.with_alpha(a);
        }

        match &layer.geom.geom_type {
            GeomType::Point { shape } => {
                let mut fill = aes.fill_value.unwrap_or(color);
                if let Some(a) = alpha {
                    fill = fill.with_alpha(a);
                }
                let size = aes.size_value.unwrap_or(2.0);
                self.render_points(fb, &xs, &ys, x_scale, y_scale, panel.rect, color, fill, size, *shape);
            }
            GeomType::Line { width } => {
                render_polyline(
                    fb,
                    &xs.iter().zip(&ys).map(|(&x, &y)| (x, y)).collect::<Vec<_>>(),
                    x_scale,
                    y_scale,
                    panel.rect,
                    *width,
                    color,
                );
            }
            GeomType::Smooth { method, se, fullrange, level, width } => {
                let eval_range = if *fullrange {
                    layout.x_domain
                } else {
                    let min = xs.iter().copied().fold(f32::INFINITY, f32::min);
                    let max = xs.iter().copied().fold(f32::NEG_INFINITY, f32::max);
                    (min, max)
                };
                let grid = evaluation_grid(eval_range.0, eval_range.1, SMOOTH_GRID);

                let fitted: Vec<(f32, f32)> = match method {
                    SmoothMethod::Lm => {
                        let Some(fit) = LinearFit::fit(&xs, &ys) else {
                            return Ok(());
                        };
                        if *se {
                            let z = critical_value(*level);
                            render_se_band(fb, &fit, z, &grid, x_scale, y_scale, panel.rect, color);
                        }
                        grid.iter().map(|&x| (x, fit.predict(x))).collect()
                    }
                    SmoothMethod::Loess => loess_fit(&xs, &ys, 0.75, &grid),
                };

                render_polyline(fb, &fitted, x_scale, y_scale, panel.rect, *width, color);
            }
        }

        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn render_points(
        &self,
        fb: &mut Framebuffer,
        xs: &[f32],
        ys: &[f32],
        x_scale: &LinearScale,
        y_scale: &LinearScale,
        rect: Rect,
        stroke: Rgba,
        fill: Rgba,
        size: f32,
        shape: PointShape,
    ) {
        let radius = size.round().max(1.0) as i32;

        for i in 0..xs.len().min(ys.len()) {
            let px = x_scale.scale(xs[i]);
            let py = y_scale.scale(ys[i]);

            // Clip to the panel
            if !rect.contains(crate::geometry::Point::new(px, py)) {
                continue;
            }

            match shape {
                PointShape::Circle => {
                    draw_circle(fb, px as i32, py as i32, radius, fill);
                    if stroke != fill {
                        draw_circle_outline(fb, px as i32, py as i32, radius, stroke);
                    }
                }
                PointShape::Square => {
                    draw_rect(
                        fb,
                        px as i32 - radius,
                        py as i32 - radius,
                        (radius * 2) as u32,
                        (radius * 2) as u32,
                        fill,
                    );
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Vector output
    // ------------------------------------------------------------------

    /// Render to an SVG document string.
    ///
    /// The raster panel area is embedded as a PNG image; title, facet strip
    /// labels, and axis titles are overlaid as vector text.
    ///
    /// # Errors
    ///
    /// Returns an error if rasterization or PNG encoding fails.
    pub fn to_svg(&self) -> Result<String> {
        let fb = self.to_framebuffer()?;
        let layout = self.layout()?;
        let theme = &self.theme;

        let title_band =
            if self.labs.title.is_some() { (theme.base_size * 2.2).ceil() } else { 0.0 };

        let mut svg = SvgEncoder::new(self.width, self.height + title_band as u32)
            .background(Some(theme.background))
            .font_family(&theme.base_family);

        svg.embed_framebuffer(&fb, 0.0, title_band)?;

        if let Some(title) = &self.labs.title {
            svg = svg.text_anchored(
                self.width as f32 / 2.0,
                theme.base_size * 1.5,
                title,
                theme.base_size * 1.4,
                theme.text_color,
                TextAnchor::Middle,
            );
        }

        for panel in &layout.panels {
            if let (Some(strip), Some(label)) = (panel.strip, panel.label.as_deref()) {
                let center = strip.center();
                svg = svg.text_anchored(
                    center.x,
                    center.y + title_band + theme.base_size * 0.35,
                    label,
                    theme.base_size,
                    theme.text_color,
                    TextAnchor::Middle,
                );
            }
        }

        if theme.show_axis_title {
            if let Some(xlab) = &self.labs.x {
                svg = svg.text_anchored(
                    self.width as f32 / 2.0,
                    self.height as f32 + title_band - theme.base_size * 0.5,
                    xlab,
                    theme.base_size,
                    theme.text_color,
                    TextAnchor::Middle,
                );
            }
            if let Some(ylab) = &self.labs.y {
                svg = svg.text_anchored(
                    theme.base_size,
                    (self.height as f32 + title_band) / 2.0,
                    ylab,
                    theme.base_size,
                    theme.text_color,
                    TextAnchor::Middle,
                );
            }
        }

        Ok(svg.render())
    }

    /// Encode to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or encoding fails.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let fb = self.to_framebuffer()?;
        PngEncoder::to_bytes(&fb)
    }

    /// Render and write a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or file writing fails.
    pub fn save_png<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let fb = self.to_framebuffer()?;
        PngEncoder::write_to_file(&fb, path)
    }

    /// Render and write an SVG file.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or file writing fails.
    pub fn save_svg<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let svg = self.to_svg()?;
        std::fs::write(path, svg)?;
        Ok(())
    }
}

/// Break positions for a scale: the explicit override clipped to the
/// domain, or pretty breaks.
fn breaks_for(scale: &Option<ScaleContinuous>, domain: (f32, f32)) -> Vec<f32> {
    match scale.as_ref().and_then(|s| s.breaks.clone()) {
        Some(breaks) => {
            breaks.into_iter().filter(|b| *b >= domain.0 && *b <= domain.1).collect()
        }
        None => pretty_breaks(domain.0, domain.1, DEFAULT_BREAK_COUNT),
    }
}

/// Draw a polyline through data points, clipped to the panel.
fn render_polyline(
    fb: &mut Framebuffer,
    points: &[(f32, f32)],
    x_scale: &LinearScale,
    y_scale: &LinearScale,
    rect: Rect,
    width: f32,
    color: Rgba,
) {
    for pair in points.windows(2) {
        let (x0, y0) = (x_scale.scale(pair[0].0), y_scale.scale(pair[0].1));
        let (x1, y1) = (x_scale.scale(pair[1].0), y_scale.scale(pair[1].1));

        if let Some((cx0, cy0, cx1, cy1)) = clip_segment(rect, x0, y0, x1, y1) {
            draw_thick_line_aa(fb, cx0, cy0, cx1, cy1, width, color);
        }
    }
}

/// Draw the standard-error band of a linear fit as blended pixel columns.
#[allow(clippy::too_many_arguments)]
fn render_se_band(
    fb: &mut Framebuffer,
    fit: &LinearFit,
    z: f32,
    grid: &[f32],
    x_scale: &LinearScale,
    y_scale: &LinearScale,
    rect: Rect,
    color: Rgba,
) {
    let band = color.with_alpha(SE_BAND_ALPHA);
    let (Some(&first), Some(&last)) = (grid.first(), grid.last()) else {
        return;
    };

    let px0 = x_scale.scale(first).max(rect.x) as i32;
    let px1 = x_scale.scale(last).min(rect.right()) as i32;

    for px in px0..=px1 {
        let x = x_scale.invert(px as f32 + 0.5);
        let half = z * fit.standard_error(x);
        let center = fit.predict(x);

        let top = y_scale.scale(center + half).max(rect.y) as i32;
        let bottom = y_scale.scale(center - half).min(rect.bottom()) as i32;

        for py in top..=bottom {
            if px >= 0 && py >= 0 {
                fb.blend_pixel(px as u32, py as u32, band);
            }
        }
    }
}

/// Liang-Barsky clipping of a segment against a rectangle.
fn clip_segment(rect: Rect, x0: f32, y0: f32, x1: f32, y1: f32) -> Option<(f32, f32, f32, f32)> {
    let dx = x1 - x0;
    let dy = y1 - y0;

    let mut t0 = 0.0f32;
    let mut t1 = 1.0f32;

    let checks = [
        (-dx, x0 - rect.x),
        (dx, rect.right() - x0),
        (-dy, y0 - rect.y),
        (dy, rect.bottom() - y0),
    ];

    for (p, q) in checks {
        if p.abs() < f32::EPSILON {
            if q < 0.0 {
                return None;
            }
        } else {
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return None;
                }
                t0 = t0.max(r);
            } else {
                if r < t0 {
                    return None;
                }
                t1 = t1.min(r);
            }
        }
    }

    Some((x0 + t0 * dx, y0 + t0 * dy, x0 + t1 * dx, y0 + t1 * dy))
}
