//! Coordinate systems for plot specifications.
//!
//! Determines how data positions map to the panel, including axis limits
//! and fixed aspect ratios.

/// Coordinate system type.
#[derive(Debug, Clone, PartialEq)]
pub enum Coord {
    /// Cartesian coordinates (x, y).
    Cartesian {
        /// X axis limits.
        xlim: Option<(f32, f32)>,
        /// Y axis limits.
        ylim: Option<(f32, f32)>,
    },
    /// Cartesian coordinates with a fixed y/x aspect ratio.
    ///
    /// A ratio of 1 makes one data unit span the same number of pixels on
    /// both axes.
    Fixed {
        /// Aspect ratio (y units per x unit).
        ratio: f32,
        /// X axis limits.
        xlim: Option<(f32, f32)>,
        /// Y axis limits.
        ylim: Option<(f32, f32)>,
    },
}

impl Default for Coord {
    fn default() -> Self {
        Coord::cartesian()
    }
}

impl Coord {
    /// Create a Cartesian coordinate system.
    #[must_use]
    pub fn cartesian() -> Self {
        Coord::Cartesian { xlim: None, ylim: None }
    }

    /// Create a fixed aspect ratio coordinate system.
    #[must_use]
    pub fn fixed(ratio: f32) -> Self {
        Coord::Fixed { ratio, xlim: None, ylim: None }
    }

    /// Set x-axis limits.
    #[must_use]
    pub fn xlim(mut self, min: f32, max: f32) -> Self {
        match self {
            Coord::Cartesian { ref mut xlim, .. } | Coord::Fixed { ref mut xlim, .. } => {
                *xlim = Some((min, max));
            }
        }
        self
    }

    /// Set y-axis limits.
    #[must_use]
    pub fn ylim(mut self, min: f32, max: f32) -> Self {
        match self {
            Coord::Cartesian { ref mut ylim, .. } | Coord::Fixed { ref mut ylim, .. } => {
                *ylim = Some((min, max));
            }
        }
        self
    }

    /// The configured x limits, if any.
    #[must_use]
    pub fn x_limits(&self) -> Option<(f32, f32)> {
        match self {
            Coord::Cartesian { xlim, .. } | Coord::Fixed { xlim, .. } => *xlim,
        }
    }

    /// The configured y limits, if any.
    #[must_use]
    pub fn y_limits(&self) -> Option<(f32, f32)> {
        match self {
            Coord::Cartesian { ylim, .. } | Coord::Fixed { ylim, .. } => *ylim,
        }
    }

    /// The fixed aspect ratio, if this is a fixed coordinate system.
    #[must_use]
    pub fn aspect_ratio(&self) -> Option<f32> {
        match self {
            Coord::Fixed { ratio, .. } => Some(*ratio),
            Coord::Cartesian { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coord_cartesian_limits() {
        let c = Coord::cartesian().xlim(0.0, 10.0).ylim(-5.0, 5.0);
        assert_eq!(c.x_limits(), Some((0.0, 10.0)));
        assert_eq!(c.y_limits(), Some((-5.0, 5.0)));
        assert_eq!(c.aspect_ratio(), None);
    }

    #[test]
    fn test_coord_fixed_limits() {
        let c = Coord::fixed(1.0).xlim(3.0, 22.0).ylim(2.0, 14.0);
        assert_eq!(c.x_limits(), Some((3.0, 22.0)));
        assert_eq!(c.y_limits(), Some((2.0, 14.0)));
        assert_eq!(c.aspect_ratio(), Some(1.0));
    }

    #[test]
    fn test_coord_default() {
        let c = Coord::default();
        assert_eq!(c, Coord::Cartesian { xlim: None, ylim: None });
    }

    #[test]
    fn test_coord_fixed_ratio_two() {
        let c = Coord::fixed(2.0);
        assert_eq!(c.aspect_ratio(), Some(2.0));
        assert_eq!(c.x_limits(), None);
    }
}
