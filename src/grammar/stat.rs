//! Statistical fits backing smooth layers.
//!
//! Ordinary least squares for `method = lm` and a tricube-weighted local
//! linear regression for `method = loess`. Sums for the OLS normal
//! equations go through trueno's SIMD vector kernels.

use trueno::Vector;

/// An ordinary least squares fit of `y ~ x`.
#[derive(Debug, Clone, Copy)]
pub struct LinearFit {
    /// Fitted slope.
    pub slope: f32,
    /// Fitted intercept.
    pub intercept: f32,
    residual_sd: f32,
    x_mean: f32,
    sxx: f32,
    n: usize,
}

impl LinearFit {
    /// Fit `y ~ x` by least squares.
    ///
    /// Returns `None` for degenerate input: fewer than two pairs, or no
    /// variance in x.
    #[must_use]
    pub fn fit(x: &[f32], y: &[f32]) -> Option<Self> {
        let len = x.len().min(y.len());
        if len < 2 {
            return None;
        }

        let n = len as f32;
        let vx = Vector::from_vec(x[..len].to_vec());
        let vy = Vector::from_vec(y[..len].to_vec());

        let x_mean = vx.mean().unwrap_or(0.0);
        let y_mean = vy.mean().unwrap_or(0.0);
        let sum_xy = vx.mul(&vy).ok()?.mean().unwrap_or(0.0) * n;
        let sum_xx = vx.mul(&vx).ok()?.mean().unwrap_or(0.0) * n;

        let sxx = sum_xx - n * x_mean * x_mean;
        if sxx.abs() < 1e-6 {
            return None;
        }

        let slope = (sum_xy - n * x_mean * y_mean) / sxx;
        let intercept = y_mean - slope * x_mean;

        let sse: f32 = x[..len]
            .iter()
            .zip(&y[..len])
            .map(|(&xi, &yi)| {
                let r = yi - (intercept + slope * xi);
                r * r
            })
            .sum();
        let residual_sd = if len > 2 { (sse / (n - 2.0)).sqrt() } else { 0.0 };

        Some(Self { slope, intercept, residual_sd, x_mean, sxx, n: len })
    }

    /// Predicted value at `x`.
    #[must_use]
    pub fn predict(&self, x: f32) -> f32 {
        self.intercept + self.slope * x
    }

    /// Standard error of the fitted mean at `x`.
    #[must_use]
    pub fn standard_error(&self, x: f32) -> f32 {
        let dx = x - self.x_mean;
        self.residual_sd * (1.0 / self.n as f32 + dx * dx / self.sxx).sqrt()
    }
}

/// Two-sided normal critical value for the given confidence level.
#[must_use]
pub fn critical_value(level: f32) -> f32 {
    // Common levels; the band is cosmetic so interpolation is unnecessary
    if level >= 0.99 {
        2.576
    } else if level >= 0.95 {
        1.960
    } else if level >= 0.90 {
        1.645
    } else {
        1.282
    }
}

/// Tricube weight for a normalized distance in [0, 1].
fn tricube(u: f32) -> f32 {
    if u >= 1.0 {
        0.0
    } else {
        let t = 1.0 - u * u * u;
        t * t * t
    }
}

/// LOESS: local linear regression with tricube weights.
///
/// Evaluates the smooth at each grid position using the nearest
/// `span`-fraction of the data. Degenerate neighborhoods fall back to the
/// local weighted mean.
#[must_use]
pub fn loess_fit(x: &[f32], y: &[f32], span: f32, grid: &[f32]) -> Vec<(f32, f32)> {
    let len = x.len().min(y.len());
    if len < 2 {
        return vec![];
    }

    let span = span.clamp(0.1, 1.0);
    let k = ((span * len as f32).ceil() as usize).clamp(2, len);

    grid.iter()
        .map(|&x0| {
            // Bandwidth: distance to the k-th nearest point
            let mut distances: Vec<f32> = x[..len].iter().map(|&xi| (xi - x0).abs()).collect();
            distances.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
            let h = distances[k - 1].max(1e-6);

            let mut sw = 0.0f32;
            let mut swx = 0.0f32;
            let mut swy = 0.0f32;
            let mut swxx = 0.0f32;
            let mut swxy = 0.0f32;

            for i in 0..len {
                let w = tricube((x[i] - x0).abs() / h);
                sw += w;
                swx += w * x[i];
                swy += w * y[i];
                swxx += w * x[i] * x[i];
                swxy += w * x[i] * y[i];
            }

            if sw <= 0.0 {
                return (x0, 0.0);
            }

            let denom = sw * swxx - swx * swx;
            let fitted = if denom.abs() < 1e-6 {
                swy / sw
            } else {
                let slope = (sw * swxy - swx * swy) / denom;
                let intercept = (swy - slope * swx) / sw;
                intercept + slope * x0
            };

            (x0, fitted)
        })
        .collect()
}

/// Evenly spaced evaluation grid across `[min, max]`.
#[must_use]
pub fn evaluation_grid(min: f32, max: f32, n: usize) -> Vec<f32> {
    if n < 2 || min >= max {
        return vec![min];
    }
    let step = (max - min) / (n - 1) as f32;
    (0..n).map(|i| min + step * i as f32).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::data::anscombes_quartet;
    use approx::assert_relative_eq;

    #[test]
    fn test_lm_exact_line() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y: Vec<f32> = x.iter().map(|&v| 2.0 * v + 1.0).collect();

        let fit = LinearFit::fit(&x, &y).unwrap();
        assert_relative_eq!(fit.slope, 2.0, epsilon = 1e-4);
        assert_relative_eq!(fit.intercept, 1.0, epsilon = 1e-4);
        assert_relative_eq!(fit.predict(10.0), 21.0, epsilon = 1e-3);
    }

    #[test]
    fn test_lm_degenerate_input() {
        assert!(LinearFit::fit(&[1.0], &[2.0]).is_none());
        assert!(LinearFit::fit(&[3.0, 3.0, 3.0], &[1.0, 2.0, 3.0]).is_none());
        assert!(LinearFit::fit(&[], &[]).is_none());
    }

    #[test]
    fn test_lm_anscombe_lines_agree() {
        // All four sets famously fit to y = 3 + 0.5x
        let df = anscombes_quartet();
        for set in df.distinct_text("dataset") {
            let sub = df.filter_text_eq("dataset", &set);
            let xs = sub.get_f32("x").unwrap();
            let ys = sub.get_f32("y").unwrap();

            let fit = LinearFit::fit(&xs, &ys).unwrap();
            assert_relative_eq!(fit.slope, 0.5, epsilon = 0.01);
            assert_relative_eq!(fit.intercept, 3.0, epsilon = 0.05);
        }
    }

    #[test]
    fn test_lm_standard_error_grows_from_mean() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [1.1, 1.9, 3.2, 3.8, 5.1];
        let fit = LinearFit::fit(&x, &y).unwrap();

        let at_mean = fit.standard_error(3.0);
        let at_edge = fit.standard_error(5.0);
        assert!(at_edge > at_mean);
        assert!(at_mean > 0.0);
    }

    #[test]
    fn test_lm_zero_residual_zero_se() {
        let x = [1.0, 2.0, 3.0];
        let y = [2.0, 4.0, 6.0];
        let fit = LinearFit::fit(&x, &y).unwrap();
        assert_relative_eq!(fit.standard_error(2.0), 0.0, epsilon = 1e-4);
    }

    #[test]
    fn test_critical_values() {
        assert_relative_eq!(critical_value(0.95), 1.96, epsilon = 1e-3);
        assert!(critical_value(0.99) > critical_value(0.95));
    }

    #[test]
    fn test_loess_recovers_line() {
        let x: Vec<f32> = (0..20).map(|i| i as f32).collect();
        let y: Vec<f32> = x.iter().map(|&v| 0.5 * v + 3.0).collect();

        let grid = evaluation_grid(0.0, 19.0, 10);
        let smooth = loess_fit(&x, &y, 0.75, &grid);

        for (x0, fitted) in smooth {
            assert_relative_eq!(fitted, 0.5 * x0 + 3.0, epsilon = 0.05);
        }
    }

    #[test]
    fn test_loess_empty_on_degenerate() {
        assert!(loess_fit(&[1.0], &[2.0], 0.75, &[1.0]).is_empty());
    }

    #[test]
    fn test_loess_constant_x_falls_back_to_mean() {
        let x = [2.0, 2.0, 2.0, 2.0];
        let y = [1.0, 2.0, 3.0, 4.0];
        let smooth = loess_fit(&x, &y, 0.75, &[2.0]);
        assert_eq!(smooth.len(), 1);
        assert_relative_eq!(smooth[0].1, 2.5, epsilon = 1e-3);
    }

    #[test]
    fn test_evaluation_grid() {
        let grid = evaluation_grid(3.0, 22.0, 5);
        assert_eq!(grid.len(), 5);
        assert_relative_eq!(grid[0], 3.0);
        assert_relative_eq!(grid[4], 22.0);
    }

    #[test]
    fn test_evaluation_grid_degenerate() {
        assert_eq!(evaluation_grid(5.0, 5.0, 10), vec![5.0]);
        assert_eq!(evaluation_grid(1.0, 2.0, 1), vec![1.0]);
    }

    #[test]
    fn test_tricube_shape() {
        assert_relative_eq!(tricube(0.0), 1.0);
        assert_relative_eq!(tricube(1.0), 0.0);
        assert!(tricube(0.5) > 0.0 && tricube(0.5) < 1.0);
    }
}
