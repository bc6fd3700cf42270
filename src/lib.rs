//! # ggviz
//!
//! Layered, composable plot specifications with pure-Rust rendering.
//!
//! A plot is declared as an additive chain of directives — geometry layers,
//! facets, scale and coordinate overrides, labels, and a theme — combined
//! with `+` into one immutable specification, then rendered to PNG or SVG
//! with no JavaScript, HTML, or native-library dependencies.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ggviz::prelude::*;
//!
//! let plot = (ggplot(anscombes_quartet(), Aes::new().x("x").y("y"))
//!     + Geom::point().color(Rgba::parse("sienna")?).size(3.0)
//!     + Geom::smooth().method(SmoothMethod::Lm).se(false)
//!     + Facet::wrap("dataset")
//!     + Labs::new().title("Anscombe's Quartet"))
//! .build()?;
//!
//! plot.save_png("quartet.png")?;
//! ```
//!
//! ## Academic References
//!
//! - Wilkinson, L. (2005). *The Grammar of Graphics*. Springer.
//! - Anscombe, F. J. (1973). "Graphs in Statistical Analysis." *The American
//!   Statistician*, 27(1), 17-21.
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.
//! - Cleveland, W. S. (1979). "Robust Locally Weighted Regression and
//!   Smoothing Scatterplots." *JASA*, 74(368), 829-836.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics/visualization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types and color literal parsing.
pub mod color;

/// Core framebuffer for pixel rendering.
pub mod framebuffer;

/// Geometric primitives (points, lines, rectangles).
pub mod geometry;

/// Scale functions and break computation for data-to-visual mappings.
pub mod scale;

// ============================================================================
// Specification Modules
// ============================================================================

/// Layered plot specifications.
pub mod grammar;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Rasterization of geometric primitives.
pub mod render;

/// Output encoders (PNG, SVG).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for ggviz operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust,ignore
/// use ggviz::prelude::*;
/// ```
pub mod prelude {
    pub use batuta_common::display::WithDimensions;
    pub use crate::color::Rgba;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Line, Point, Rect};
    pub use crate::grammar::{
        anscombes_quartet, ggplot, Aes, BuiltPlot, Coord, DataFrame, ElementLine, Facet, GGPlot,
        Geom, Labs, Layer, PointShape, ScaleContinuous, SmoothMethod, Theme,
    };
    pub use crate::output::{PngEncoder, SvgEncoder};
    pub use crate::scale::{LinearScale, Scale};
}

// ============================================================================
// Re-exports
// ============================================================================

/// Re-export trueno for direct access to SIMD operations.
pub use trueno;

// ============================================================================
// Tests
// ============================================================================
