#![allow(clippy::expect_used, clippy::unwrap_used)]
//! Anscombe's Quartet
//!
//! Four datasets with near-identical summary statistics that look nothing
//! alike: points with a full-range linear fit, faceted by set.
//!
//! Run with: `cargo run --example quartet_basic`

use ggviz::prelude::*;

fn main() {
    let sienna = Rgba::parse("sienna").expect("known color");
    let darkorange = Rgba::parse("darkorange").expect("known color");
    let steelblue = Rgba::parse("steelblue").expect("known color");

    let plot = (ggplot(anscombes_quartet(), Aes::new().x("x").y("y"))
        + Geom::point().color(sienna).fill(darkorange).size(3.0)
        + Geom::smooth()
            .method(SmoothMethod::Lm)
            .se(false)
            .fullrange(true)
            .color(steelblue)
            .width(1.0)
        + Facet::wrap("dataset")
        + ScaleContinuous::y().breaks(&[4.0, 8.0, 12.0])
        + Coord::fixed(1.0).xlim(3.0, 22.0).ylim(2.0, 14.0)
        + Labs::new().title("Anscombe's Quartet"))
    .build()
    .expect("valid plot specification");

    plot.save_png("quartet_basic.png").expect("PNG output");
    plot.save_svg("quartet_basic.svg").expect("SVG output");

    println!("Saved: quartet_basic.png, quartet_basic.svg");
}
