//! Scale functions for data-to-visual mappings.
//!
//! Scales transform data values to visual positions. Break positions for
//! grid lines and axis ticks come from a "nice numbers" algorithm similar
//! to R's `pretty()`.

use crate::error::{Error, Result};

/// Trait for scale functions that map domain values to range values.
pub trait Scale<D, R> {
    /// Transform a domain value to a range value.
    fn scale(&self, value: D) -> R;

    /// Get the domain extent.
    fn domain(&self) -> (D, D);

    /// Get the range extent.
    fn range(&self) -> (R, R);
}

/// Linear scale for continuous-to-continuous mapping.
#[derive(Debug, Clone, Copy)]
pub struct LinearScale {
    domain_min: f32,
    domain_max: f32,
    range_min: f32,
    range_max: f32,
}

impl LinearScale {
    /// Create a new linear scale.
    ///
    /// # Errors
    ///
    /// Returns an error if domain min equals domain max.
    pub fn new(domain: (f32, f32), range: (f32, f32)) -> Result<Self> {
        if (domain.0 - domain.1).abs() < f32::EPSILON {
            return Err(Error::ScaleDomain("Domain min and max cannot be equal".to_string()));
        }

        Ok(Self {
            domain_min: domain.0,
            domain_max: domain.1,
            range_min: range.0,
            range_max: range.1,
        })
    }

    /// Create a scale from data extent.
    #[must_use]
    pub fn from_data(data: &[f32], range: (f32, f32)) -> Option<Self> {
        if data.is_empty() {
            return None;
        }

        let min = data.iter().copied().fold(f32::INFINITY, f32::min);
        let max = data.iter().copied().fold(f32::NEG_INFINITY, f32::max);

        Self::new((min, max), range).ok()
    }

    /// Invert the scale (range to domain).
    #[must_use]
    pub fn invert(&self, value: f32) -> f32 {
        let t = (value - self.range_min) / (self.range_max - self.range_min);
        self.domain_min + t * (self.domain_max - self.domain_min)
    }

    /// Pixels spanned by one domain unit (absolute value).
    #[must_use]
    pub fn pixels_per_unit(&self) -> f32 {
        (self.range_max - self.range_min).abs() / (self.domain_max - self.domain_min).abs()
    }
}

impl Scale<f32, f32> for LinearScale {
    fn scale(&self, value: f32) -> f32 {
        let t = (value - self.domain_min) / (self.domain_max - self.domain_min);
        self.range_min + t * (self.range_max - self.range_min)
    }

    fn domain(&self) -> (f32, f32) {
        (self.domain_min, self.domain_max)
    }

    fn range(&self) -> (f32, f32) {
        (self.range_min, self.range_max)
    }
}

/// Default number of breaks requested from [`pretty_breaks`].
pub const DEFAULT_BREAK_COUNT: usize = 5;

/// Calculate pretty break positions using a "nice numbers" step.
///
/// The step size snaps to the 1-2-5-10 pattern at the appropriate magnitude
/// and the returned breaks are clipped to `[min, max]`, so grid lines never
/// land outside the panel.
#[must_use]
pub fn pretty_breaks(min: f32, max: f32, n: usize) -> Vec<f32> {
    if n == 0 || min >= max {
        return vec![];
    }

    let range = max - min;
    let rough_step = range / (n as f32);

    let magnitude = 10f32.powf(rough_step.log10().floor());
    let residual = rough_step / magnitude;

    let nice_step = if residual <= 1.0 {
        magnitude
    } else if residual <= 2.0 {
        2.0 * magnitude
    } else if residual <= 5.0 {
        5.0 * magnitude
    } else {
        10.0 * magnitude
    };

    let mut breaks = vec![];
    let mut value = (min / nice_step).ceil() * nice_step;
    while value <= max + nice_step * 1e-3 {
        breaks.push(value);
        value += nice_step;
    }
    breaks
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_linear_scale_maps_endpoints() {
        let s = LinearScale::new((0.0, 10.0), (100.0, 200.0)).unwrap();
        assert_relative_eq!(s.scale(0.0), 100.0);
        assert_relative_eq!(s.scale(10.0), 200.0);
        assert_relative_eq!(s.scale(5.0), 150.0);
    }

    #[test]
    fn test_linear_scale_inverted_range() {
        // Screen y axes run top-down
        let s = LinearScale::new((0.0, 10.0), (200.0, 100.0)).unwrap();
        assert_relative_eq!(s.scale(0.0), 200.0);
        assert_relative_eq!(s.scale(10.0), 100.0);
    }

    #[test]
    fn test_linear_scale_degenerate_domain() {
        assert!(LinearScale::new((5.0, 5.0), (0.0, 1.0)).is_err());
    }

    #[test]
    fn test_from_data() {
        let s = LinearScale::from_data(&[2.0, 8.0, 4.0], (0.0, 100.0)).unwrap();
        assert_eq!(s.domain(), (2.0, 8.0));
    }

    #[test]
    fn test_from_data_empty() {
        assert!(LinearScale::from_data(&[], (0.0, 1.0)).is_none());
    }

    #[test]
    fn test_invert() {
        let s = LinearScale::new((3.0, 22.0), (40.0, 760.0)).unwrap();
        assert_relative_eq!(s.invert(s.scale(13.5)), 13.5, epsilon = 1e-3);
    }

    #[test]
    fn test_pixels_per_unit() {
        let s = LinearScale::new((0.0, 10.0), (0.0, 100.0)).unwrap();
        assert_relative_eq!(s.pixels_per_unit(), 10.0);

        let inverted = LinearScale::new((0.0, 10.0), (100.0, 0.0)).unwrap();
        assert_relative_eq!(inverted.pixels_per_unit(), 10.0);
    }

    #[test]
    fn test_pretty_breaks_basic() {
        let breaks = pretty_breaks(0.0, 10.0, 5);
        assert!(!breaks.is_empty());
        for b in &breaks {
            assert!(*b >= 0.0 && *b <= 10.0 + 1e-3);
        }
    }

    #[test]
    fn test_pretty_breaks_clipped_to_range() {
        let breaks = pretty_breaks(2.0, 14.0, 5);
        assert!(breaks.iter().all(|b| *b >= 2.0));
    }

    #[test]
    fn test_pretty_breaks_empty_on_degenerate() {
        assert!(pretty_breaks(5.0, 5.0, 5).is_empty());
        assert!(pretty_breaks(0.0, 10.0, 0).is_empty());
    }

    proptest! {
        #[test]
        fn prop_scale_invert_roundtrip(v in -1000.0f32..1000.0) {
            let s = LinearScale::new((-1000.0, 1000.0), (0.0, 800.0)).unwrap();
            let back = s.invert(s.scale(v));
            prop_assert!((back - v).abs() < 0.5);
        }

        #[test]
        fn prop_pretty_breaks_sorted(min in -100.0f32..0.0, span in 1.0f32..100.0) {
            let breaks = pretty_breaks(min, min + span, DEFAULT_BREAK_COUNT);
            for w in breaks.windows(2) {
                prop_assert!(w[0] < w[1]);
            }
        }
    }
}
