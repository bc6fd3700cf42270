//! Columnar data abstraction for plot specifications.
//!
//! A small in-memory data frame: named columns of numbers or text. Facets
//! slice it by the distinct values of a text column.

use std::collections::HashMap;

/// A value in a data frame.
#[derive(Debug, Clone, PartialEq)]
pub enum DataValue {
    /// A numeric value.
    Number(f32),
    /// A text value.
    Text(String),
    /// A missing value.
    Null,
}

impl DataValue {
    /// Get as f32, or None if not a number.
    #[must_use]
    pub fn as_f32(&self) -> Option<f32> {
        match self {
            DataValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            DataValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl From<f32> for DataValue {
    fn from(v: f32) -> Self {
        DataValue::Number(v)
    }
}

impl From<&str> for DataValue {
    fn from(s: &str) -> Self {
        DataValue::Text(s.to_string())
    }
}

impl From<String> for DataValue {
    fn from(s: String) -> Self {
        DataValue::Text(s)
    }
}

/// A simple columnar data frame.
#[derive(Debug, Clone, Default)]
pub struct DataFrame {
    /// Column data keyed by column name.
    columns: HashMap<String, Vec<DataValue>>,
    /// Number of rows.
    n_rows: usize,
}

impl DataFrame {
    /// Create a new empty data frame.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from x and y arrays.
    #[must_use]
    pub fn from_xy(x: &[f32], y: &[f32]) -> Self {
        let n = x.len().min(y.len());
        let mut df = Self::new();
        df.add_column_f32("x", &x[..n]);
        df.add_column_f32("y", &y[..n]);
        df
    }

    /// Add a numeric column.
    pub fn add_column_f32(&mut self, name: &str, data: &[f32]) {
        let values: Vec<DataValue> = data.iter().map(|&v| DataValue::Number(v)).collect();
        self.n_rows = self.n_rows.max(values.len());
        self.columns.insert(name.to_string(), values);
    }

    /// Add a text column.
    pub fn add_column_str(&mut self, name: &str, data: &[&str]) {
        let values: Vec<DataValue> = data.iter().map(|&s| DataValue::Text(s.to_string())).collect();
        self.n_rows = self.n_rows.max(values.len());
        self.columns.insert(name.to_string(), values);
    }

    /// Get a column as f32 values (non-numeric entries are skipped).
    #[must_use]
    pub fn get_f32(&self, name: &str) -> Option<Vec<f32>> {
        self.columns.get(name).map(|col| col.iter().filter_map(DataValue::as_f32).collect())
    }

    /// Get a column.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[DataValue]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    /// Get number of rows.
    #[must_use]
    pub fn nrow(&self) -> usize {
        self.n_rows
    }

    /// Get number of columns.
    #[must_use]
    pub fn ncol(&self) -> usize {
        self.columns.len()
    }

    /// Check if a column exists.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Get column names.
    #[must_use]
    pub fn columns(&self) -> Vec<&str> {
        self.columns.keys().map(String::as_str).collect()
    }

    /// Distinct text values of a column, sorted.
    ///
    /// This is the panel key order used by faceting, so panel layout is
    /// deterministic regardless of row order.
    #[must_use]
    pub fn distinct_text(&self, name: &str) -> Vec<String> {
        let mut values: Vec<String> = self
            .columns
            .get(name)
            .map(|col| col.iter().filter_map(|v| v.as_str().map(String::from)).collect())
            .unwrap_or_default();
        values.sort();
        values.dedup();
        values
    }

    /// Rows where text column `name` equals `value`, as a new frame.
    #[must_use]
    pub fn filter_text_eq(&self, name: &str, value: &str) -> DataFrame {
        let matching: Vec<usize> = self
            .columns
            .get(name)
            .map(|col| {
                col.iter()
                    .enumerate()
                    .filter(|(_, v)| v.as_str() == Some(value))
                    .map(|(i, _)| i)
                    .collect()
            })
            .unwrap_or_default();

        let mut out = DataFrame::new();
        for (col_name, col) in &self.columns {
            let values: Vec<DataValue> = matching
                .iter()
                .map(|&i| col.get(i).cloned().unwrap_or(DataValue::Null))
                .collect();
            out.n_rows = out.n_rows.max(values.len());
            out.columns.insert(col_name.clone(), values);
        }
        out
    }
}

/// Anscombe's Quartet (Anscombe, 1973): four x/y sets with near-identical
/// summary statistics and very different shapes.
///
/// Columns: `x`, `y`, and the set label `dataset` (`"I"` through `"IV"`).
#[must_use]
pub fn anscombes_quartet() -> DataFrame {
    let x123: [f32; 11] = [10.0, 8.0, 13.0, 9.0, 11.0, 14.0, 6.0, 4.0, 12.0, 7.0, 5.0];
    let y1: [f32; 11] = [8.04, 6.95, 7.58, 8.81, 8.33, 9.96, 7.24, 4.26, 10.84, 4.82, 5.68];
    let y2: [f32; 11] = [9.14, 8.14, 8.74, 8.77, 9.26, 8.10, 6.13, 3.10, 9.13, 7.26, 4.74];
    let y3: [f32; 11] = [7.46, 6.77, 12.74, 7.11, 7.81, 8.84, 6.08, 5.39, 8.15, 6.42, 5.73];
    let x4: [f32; 11] = [8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 19.0, 8.0, 8.0, 8.0];
    let y4: [f32; 11] = [6.58, 5.76, 7.71, 8.84, 8.47, 7.04, 5.25, 12.50, 5.56, 7.91, 6.89];

    let mut x = Vec::with_capacity(44);
    let mut y = Vec::with_capacity(44);
    let mut dataset: Vec<&str> = Vec::with_capacity(44);

    for (label, (xs, ys)) in
        [("I", (&x123, &y1)), ("II", (&x123, &y2)), ("III", (&x123, &y3)), ("IV", (&x4, &y4))]
    {
        x.extend_from_slice(xs);
        y.extend_from_slice(ys);
        dataset.extend(std::iter::repeat(label).take(xs.len()));
    }

    let mut df = DataFrame::new();
    df.add_column_f32("x", &x);
    df.add_column_f32("y", &y);
    df.add_column_str("dataset", &dataset);
    df
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataframe_from_xy() {
        let df = DataFrame::from_xy(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]);
        assert_eq!(df.nrow(), 3);
        assert_eq!(df.ncol(), 2);
        assert!(df.has_column("x"));
        assert!(df.has_column("y"));
    }

    #[test]
    fn test_dataframe_get_f32() {
        let df = DataFrame::from_xy(&[1.0, 2.0], &[3.0, 4.0]);
        assert_eq!(df.get_f32("x").unwrap(), vec![1.0, 2.0]);
    }

    #[test]
    fn test_dataframe_get_missing() {
        let df = DataFrame::new();
        assert!(df.get("missing").is_none());
        assert!(df.get_f32("missing").is_none());
    }

    #[test]
    fn test_dataframe_from_xy_unequal() {
        // Different length arrays take the minimum
        let df = DataFrame::from_xy(&[1.0, 2.0, 3.0], &[4.0, 5.0]);
        assert_eq!(df.get_f32("x").unwrap().len(), 2);
        assert_eq!(df.get_f32("y").unwrap().len(), 2);
    }

    #[test]
    fn test_data_value_conversions() {
        let num: DataValue = 42.0f32.into();
        assert_eq!(num.as_f32(), Some(42.0));

        let text: DataValue = "hello".into();
        assert_eq!(text.as_str(), Some("hello"));
        assert_eq!(text.as_f32(), None);

        assert_eq!(DataValue::Null.as_f32(), None);
        assert_eq!(DataValue::Null.as_str(), None);
    }

    #[test]
    fn test_distinct_text_sorted() {
        let mut df = DataFrame::new();
        df.add_column_str("set", &["b", "a", "b", "c", "a"]);
        assert_eq!(df.distinct_text("set"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_distinct_text_missing_column() {
        let df = DataFrame::new();
        assert!(df.distinct_text("nope").is_empty());
    }

    #[test]
    fn test_filter_text_eq() {
        let mut df = DataFrame::new();
        df.add_column_f32("v", &[1.0, 2.0, 3.0, 4.0]);
        df.add_column_str("set", &["a", "b", "a", "b"]);

        let a = df.filter_text_eq("set", "a");
        assert_eq!(a.nrow(), 2);
        assert_eq!(a.get_f32("v").unwrap(), vec![1.0, 3.0]);
    }

    #[test]
    fn test_filter_text_eq_no_match() {
        let mut df = DataFrame::new();
        df.add_column_str("set", &["a", "b"]);
        let out = df.filter_text_eq("set", "z");
        assert_eq!(out.nrow(), 0);
    }

    #[test]
    fn test_anscombe_shape() {
        let df = anscombes_quartet();
        assert_eq!(df.nrow(), 44);
        assert_eq!(df.distinct_text("dataset"), vec!["I", "II", "III", "IV"]);
        assert_eq!(df.filter_text_eq("dataset", "IV").nrow(), 11);
    }

    #[test]
    fn test_anscombe_means_match() {
        // The quartet's defining property: identical x/y means per set
        let df = anscombes_quartet();
        for set in df.distinct_text("dataset") {
            let sub = df.filter_text_eq("dataset", &set);
            let xs = sub.get_f32("x").unwrap();
            let ys = sub.get_f32("y").unwrap();
            let x_mean: f32 = xs.iter().sum::<f32>() / xs.len() as f32;
            let y_mean: f32 = ys.iter().sum::<f32>() / ys.len() as f32;
            assert!((x_mean - 9.0).abs() < 1e-3, "set {set}: x mean {x_mean}");
            assert!((y_mean - 7.5).abs() < 0.01, "set {set}: y mean {y_mean}");
        }
    }
}
