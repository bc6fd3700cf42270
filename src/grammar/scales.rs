//! Scale directives for plot specifications.
//!
//! Override the default continuous scale of one positional axis: explicit
//! break positions for grid lines and ticks, and optional limits.

/// Positional axis selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal axis.
    X,
    /// Vertical axis.
    Y,
}

/// A continuous scale override for one axis.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleContinuous {
    /// The axis this directive applies to.
    pub axis: Axis,
    /// Explicit break positions; computed when `None`.
    pub breaks: Option<Vec<f32>>,
    /// Axis limits; coordinate-directive limits take precedence.
    pub limits: Option<(f32, f32)>,
}

impl ScaleContinuous {
    /// Continuous scale override for the x axis.
    #[must_use]
    pub fn x() -> Self {
        Self { axis: Axis::X, breaks: None, limits: None }
    }

    /// Continuous scale override for the y axis.
    #[must_use]
    pub fn y() -> Self {
        Self { axis: Axis::Y, breaks: None, limits: None }
    }

    /// Set explicit break positions.
    #[must_use]
    pub fn breaks(mut self, breaks: &[f32]) -> Self {
        self.breaks = Some(breaks.to_vec());
        self
    }

    /// Set axis limits.
    #[must_use]
    pub fn limits(mut self, min: f32, max: f32) -> Self {
        self.limits = Some((min, max));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_y_breaks() {
        let s = ScaleContinuous::y().breaks(&[4.0, 8.0, 12.0]);
        assert_eq!(s.axis, Axis::Y);
        assert_eq!(s.breaks, Some(vec![4.0, 8.0, 12.0]));
        assert!(s.limits.is_none());
    }

    #[test]
    fn test_scale_x_limits() {
        let s = ScaleContinuous::x().limits(0.0, 100.0);
        assert_eq!(s.axis, Axis::X);
        assert_eq!(s.limits, Some((0.0, 100.0)));
    }

    #[test]
    fn test_scale_defaults_empty() {
        let s = ScaleContinuous::x();
        assert!(s.breaks.is_none());
        assert!(s.limits.is_none());
    }
}
