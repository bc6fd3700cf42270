#![allow(clippy::expect_used, clippy::unwrap_used)]
//! Anscombe's Quartet, Tufte-styled
//!
//! The same quartet chart with orange fills and a minimal Tufte theme:
//! no grid or panel decoration, muted axis lines, invisible ticks, blanked
//! axis titles, and wider panel spacing.
//!
//! Run with: `cargo run --example quartet_tufte`

use ggviz::prelude::*;

fn main() {
    let sienna = Rgba::parse("sienna").expect("known color");
    let orange = Rgba::parse("orange").expect("known color");
    let steelblue = Rgba::parse("steelblue").expect("known color");

    let plot = (ggplot(anscombes_quartet(), Aes::new().x("x").y("y"))
        + Geom::point().color(sienna).fill(orange).size(3.0)
        + Geom::smooth()
            .method(SmoothMethod::Lm)
            .se(false)
            .fullrange(true)
            .color(steelblue)
            .width(1.0)
        + Facet::wrap("dataset")
        + Labs::new().title("Anscombe's Quartet")
        + ScaleContinuous::y().breaks(&[4.0, 8.0, 12.0])
        + Coord::fixed(1.0).xlim(3.0, 22.0).ylim(2.0, 14.0)
        + Theme::tufte("Futura", 16.0)
            .axis_line(ElementLine::new(Rgba::parse("#4d4d4d").expect("hex color")))
            .axis_ticks(ElementLine::new(Rgba::parse("#00000000").expect("hex color")))
            .axis_title_blank()
            .panel_spacing(0.09))
    .build()
    .expect("valid plot specification");

    plot.save_png("quartet_tufte.png").expect("PNG output");
    plot.save_svg("quartet_tufte.svg").expect("SVG output");

    println!("Saved: quartet_tufte.png, quartet_tufte.svg");
}
