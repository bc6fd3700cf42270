//! Geometry layers for plot specifications.
//!
//! A [`Geom`] is one additive step in a specification: what to draw and the
//! literal visual attributes to draw it with.

use super::aes::Aes;
use crate::color::Rgba;

/// Shape types for point geometries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointShape {
    /// Filled circle with a stroked outline.
    #[default]
    Circle,
    /// Filled square.
    Square,
}

/// Smoothing method for [`Geom::smooth`] layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SmoothMethod {
    /// Local polynomial regression (LOESS).
    #[default]
    Loess,
    /// Ordinary least squares linear regression.
    Lm,
}

/// Geometry type specification.
#[derive(Debug, Clone, PartialEq)]
pub enum GeomType {
    /// Points.
    Point {
        /// Point shape.
        shape: PointShape,
    },
    /// Lines connecting points in data order.
    Line {
        /// Line width in pixels.
        width: f32,
    },
    /// Fitted smooth curve.
    Smooth {
        /// Fitting method.
        method: SmoothMethod,
        /// Draw the standard-error band around the fit.
        se: bool,
        /// Extend the fit across the full x scale rather than the data extent.
        fullrange: bool,
        /// Confidence level for the standard-error band.
        level: f32,
        /// Fit line width in pixels.
        width: f32,
    },
}

/// A geometry layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Geom {
    /// The geometry type.
    pub geom_type: GeomType,
    /// Layer-specific aesthetics.
    pub aes: Option<Aes>,
}

impl Geom {
    /// Create a point geometry.
    #[must_use]
    pub fn point() -> Self {
        Self { geom_type: GeomType::Point { shape: PointShape::Circle }, aes: None }
    }

    /// Create a line geometry.
    #[must_use]
    pub fn line() -> Self {
        Self { geom_type: GeomType::Line { width: 1.0 }, aes: None }
    }

    /// Create a smooth (fitted curve) geometry.
    ///
    /// Defaults to LOESS with a standard-error band over the data extent.
    #[must_use]
    pub fn smooth() -> Self {
        Self {
            geom_type: GeomType::Smooth {
                method: SmoothMethod::Loess,
                se: true,
                fullrange: false,
                level: 0.95,
                width: 1.0,
            },
            aes: None,
        }
    }

    /// Set the point shape.
    #[must_use]
    pub fn shape(mut self, shape: PointShape) -> Self {
        if let GeomType::Point { shape: ref mut s } = self.geom_type {
            *s = shape;
        }
        self
    }

    /// Set the line width.
    #[must_use]
    pub fn width(mut self, width: f32) -> Self {
        match &mut self.geom_type {
            GeomType::Line { width: ref mut w } | GeomType::Smooth { width: ref mut w, .. } => {
                *w = width;
            }
            GeomType::Point { .. } => {}
        }
        self
    }

    /// Set the smoothing method.
    #[must_use]
    pub fn method(mut self, method: SmoothMethod) -> Self {
        if let GeomType::Smooth { method: ref mut m, .. } = self.geom_type {
            *m = method;
        }
        self
    }

    /// Enable or disable the standard-error band.
    #[must_use]
    pub fn se(mut self, se: bool) -> Self {
        if let GeomType::Smooth { se: ref mut s, .. } = self.geom_type {
            *s = se;
        }
        self
    }

    /// Extend the fit across the full x scale instead of the data extent.
    #[must_use]
    pub fn fullrange(mut self, fullrange: bool) -> Self {
        if let GeomType::Smooth { fullrange: ref mut f, .. } = self.geom_type {
            *f = fullrange;
        }
        self
    }

    /// Set the confidence level of the standard-error band.
    #[must_use]
    pub fn level(mut self, level: f32) -> Self {
        if let GeomType::Smooth { level: ref mut l, .. } = self.geom_type {
            *l = level.clamp(0.5, 0.999);
        }
        self
    }

    /// Set the stroke color.
    #[must_use]
    pub fn color(mut self, color: Rgba) -> Self {
        self.aes = Some(self.aes.unwrap_or_default().color_value(color));
        self
    }

    /// Set the fill color.
    #[must_use]
    pub fn fill(mut self, color: Rgba) -> Self {
        self.aes = Some(self.aes.unwrap_or_default().fill_value(color));
        self
    }

    /// Set the point size.
    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.aes = Some(self.aes.unwrap_or_default().size_value(size));
        self
    }

    /// Set the alpha transparency (0.0 - 1.0).
    #[must_use]
    pub fn alpha(mut self, alpha: f32) -> Self {
        self.aes = Some(self.aes.unwrap_or_default().alpha_value(alpha));
        self
    }

    /// Replace layer-specific aesthetics wholesale.
    #[must_use]
    pub fn aes(mut self, aes: Aes) -> Self {
        self.aes = Some(aes);
        self
    }
}
