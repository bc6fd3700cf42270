//! Aesthetic mappings for plot specifications.
//!
//! Maps data columns to positions, and carries the fixed (literal-valued)
//! visual attributes a layer sets directly.

use crate::color::Rgba;

/// Aesthetic mapping specification.
///
/// `x`/`y`/`group` map columns; the `*_value` fields are fixed literals set
/// on a layer (e.g. a point layer's stroke color) rather than data-driven.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aes {
    /// X position mapping (column name).
    pub x: Option<String>,
    /// Y position mapping (column name).
    pub y: Option<String>,
    /// Group mapping (column name).
    pub group: Option<String>,

    // Fixed values (not data-mapped)
    /// Fixed stroke color.
    pub color_value: Option<Rgba>,
    /// Fixed fill color.
    pub fill_value: Option<Rgba>,
    /// Fixed size value.
    pub size_value: Option<f32>,
    /// Fixed alpha value.
    pub alpha_value: Option<f32>,
}

impl Aes {
    /// Create a new aesthetic mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Map x position to a column.
    #[must_use]
    pub fn x(mut self, column: &str) -> Self {
        self.x = Some(column.to_string());
        self
    }

    /// Map y position to a column.
    #[must_use]
    pub fn y(mut self, column: &str) -> Self {
        self.y = Some(column.to_string());
        self
    }

    /// Map group to a column.
    #[must_use]
    pub fn group(mut self, column: &str) -> Self {
        self.group = Some(column.to_string());
        self
    }

    /// Set a fixed stroke color.
    #[must_use]
    pub fn color_value(mut self, color: Rgba) -> Self {
        self.color_value = Some(color);
        self
    }

    /// Set a fixed fill color.
    #[must_use]
    pub fn fill_value(mut self, color: Rgba) -> Self {
        self.fill_value = Some(color);
        self
    }

    /// Set a fixed size value.
    #[must_use]
    pub fn size_value(mut self, size: f32) -> Self {
        self.size_value = Some(size);
        self
    }

    /// Set a fixed alpha value.
    #[must_use]
    pub fn alpha_value(mut self, alpha: f32) -> Self {
        self.alpha_value = Some(alpha.clamp(0.0, 1.0));
        self
    }

    /// Merge another Aes, with `other` taking precedence.
    #[must_use]
    pub fn merge(&self, other: &Aes) -> Aes {
        Aes {
            x: other.x.clone().or_else(|| self.x.clone()),
            y: other.y.clone().or_else(|| self.y.clone()),
            group: other.group.clone().or_else(|| self.group.clone()),
            color_value: other.color_value.or(self.color_value),
            fill_value: other.fill_value.or(self.fill_value),
            size_value: other.size_value.or(self.size_value),
            alpha_value: other.alpha_value.or(self.alpha_value),
        }
    }
}
