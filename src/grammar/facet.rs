//! Faceting for plot specifications.
//!
//! Splits one plot into a grid of sub-panels keyed by the distinct values
//! of categorical columns. Scales are shared across panels.

/// Faceting specification.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Facet {
    /// No faceting: a single panel.
    #[default]
    None,
    /// Facet into wrapped panels by one variable.
    Wrap {
        /// Column to facet by.
        var: String,
        /// Number of columns; computed from the panel count when `None`.
        ncol: Option<usize>,
    },
    /// Facet into a grid of panels.
    Grid {
        /// Row variable.
        row: String,
        /// Column variable.
        col: String,
    },
}

impl Facet {
    /// No faceting.
    #[must_use]
    pub fn none() -> Self {
        Facet::None
    }

    /// Facet into wrapped panels.
    #[must_use]
    pub fn wrap(var: &str) -> Self {
        Facet::Wrap { var: var.to_string(), ncol: None }
    }

    /// Facet into a grid.
    #[must_use]
    pub fn grid(row: &str, col: &str) -> Self {
        Facet::Grid { row: row.to_string(), col: col.to_string() }
    }

    /// Set the number of columns (wrap only).
    #[must_use]
    pub fn ncol(mut self, n: usize) -> Self {
        if let Facet::Wrap { ncol: ref mut c, .. } = self {
            *c = Some(n.max(1));
        }
        self
    }

    /// Number of wrap columns for `n` panels: the explicit setting, or the
    /// squarest grid that fits.
    #[must_use]
    pub fn wrap_columns(&self, n: usize) -> usize {
        match self {
            Facet::Wrap { ncol: Some(c), .. } => (*c).min(n.max(1)),
            _ => (n.max(1) as f32).sqrt().ceil() as usize,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facet_wrap() {
        let f = Facet::wrap("dataset");
        assert_eq!(f, Facet::Wrap { var: "dataset".to_string(), ncol: None });
    }

    #[test]
    fn test_facet_wrap_with_ncol() {
        let f = Facet::wrap("dataset").ncol(3);
        assert_eq!(f, Facet::Wrap { var: "dataset".to_string(), ncol: Some(3) });
    }

    #[test]
    fn test_facet_grid() {
        let f = Facet::grid("year", "category");
        match f {
            Facet::Grid { row, col } => {
                assert_eq!(row, "year");
                assert_eq!(col, "category");
            }
            _ => panic!("Expected Grid"),
        }
    }

    #[test]
    fn test_ncol_ignored_on_grid() {
        let f = Facet::grid("a", "b").ncol(5);
        assert!(matches!(f, Facet::Grid { .. }));
    }

    #[test]
    fn test_wrap_columns_square_default() {
        let f = Facet::wrap("v");
        assert_eq!(f.wrap_columns(4), 2);
        assert_eq!(f.wrap_columns(9), 3);
        assert_eq!(f.wrap_columns(5), 3);
        assert_eq!(f.wrap_columns(1), 1);
    }

    #[test]
    fn test_wrap_columns_explicit_clamped() {
        let f = Facet::wrap("v").ncol(10);
        assert_eq!(f.wrap_columns(4), 4);
    }

    #[test]
    fn test_facet_default_is_none() {
        assert_eq!(Facet::default(), Facet::None);
    }
}
