//! Label directives for plot specifications.

/// Plot and axis labels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Labs {
    /// Plot title.
    pub title: Option<String>,
    /// X-axis title.
    pub x: Option<String>,
    /// Y-axis title.
    pub y: Option<String>,
}

impl Labs {
    /// Create an empty label set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the plot title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the x-axis title.
    #[must_use]
    pub fn x(mut self, label: impl Into<String>) -> Self {
        self.x = Some(label.into());
        self
    }

    /// Set the y-axis title.
    #[must_use]
    pub fn y(mut self, label: impl Into<String>) -> Self {
        self.y = Some(label.into());
        self
    }

    /// Merge another label set, with `other` taking precedence.
    #[must_use]
    pub fn merge(&self, other: &Labs) -> Labs {
        Labs {
            title: other.title.clone().or_else(|| self.title.clone()),
            x: other.x.clone().or_else(|| self.x.clone()),
            y: other.y.clone().or_else(|| self.y.clone()),
        }
    }
}
