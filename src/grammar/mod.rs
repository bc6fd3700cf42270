//! Layered plot specifications.
//!
//! A plot is an ordered, additive composition of directives in the layered
//! grammar tradition [Wilkinson 2005]:
//!
//! - **Data**: a columnar [`DataFrame`]
//! - **Aesthetics**: mappings from columns to positions ([`Aes`])
//! - **Geometries**: point, line, and smooth layers ([`Geom`])
//! - **Facets**: small multiples keyed by a categorical column ([`Facet`])
//! - **Scales**: break and limit overrides ([`ScaleContinuous`])
//! - **Coordinates**: limits and fixed aspect ratios ([`Coord`])
//! - **Labels** and **Themes**: titles and the non-data look ([`Labs`], [`Theme`])
//!
//! Directives combine left-to-right with `+` into one immutable value,
//! which [`GGPlot::build`] validates and freezes for rendering.
//!
//! # Example
//!
//! ```rust
//! use ggviz::grammar::*;
//!
//! let plot = (ggplot(anscombes_quartet(), Aes::new().x("x").y("y"))
//!     + Geom::point().size(3.0)
//!     + Facet::wrap("dataset"))
//! .build()
//! .unwrap();
//! ```
//!
//! # References
//!
//! - Wilkinson, L. (2005). *The Grammar of Graphics*. Springer.
//! - Wickham, H. (2010). "A Layered Grammar of Graphics." Journal of
//!   Computational and Graphical Statistics.

mod aes;
mod coord;
mod data;
mod facet;
mod geom;
mod labs;
mod plot;
mod scales;
mod stat;
mod theme;

pub use aes::Aes;
pub use coord::Coord;
pub use data::{anscombes_quartet, DataFrame, DataValue};
pub use facet::Facet;
pub use geom::{Geom, GeomType, PointShape, SmoothMethod};
pub use labs::Labs;
pub use plot::{ggplot, BuiltPlot, GGPlot, Layer};
pub use scales::{Axis, ScaleContinuous};
pub use stat::{critical_value, evaluation_grid, loess_fit, LinearFit};
pub use theme::{ElementLine, Theme};
