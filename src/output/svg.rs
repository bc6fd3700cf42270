//! SVG output encoder.
//!
//! Builds an SVG document from vector elements, optionally embedding a
//! rasterized framebuffer as a base64 PNG image. Text elements inherit the
//! document font family, so themed typography carries into vector output.

use crate::color::Rgba;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use base64::{engine::general_purpose::STANDARD, Engine};
use std::fmt::Write as FmtWrite;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// SVG encoder for framebuffer and vector output.
#[derive(Debug, Clone)]
pub struct SvgEncoder {
    /// SVG width.
    width: u32,
    /// SVG height.
    height: u32,
    /// Background color (None for transparent).
    background: Option<Rgba>,
    /// Document font family for text elements.
    font_family: Option<String>,
    /// SVG elements.
    elements: Vec<SvgElement>,
}

/// An SVG element.
///
/// Field names are self-documenting and match SVG attribute names.
#[derive(Debug, Clone)]
#[allow(missing_docs)]
pub enum SvgElement {
    /// Rectangle
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        fill: Rgba,
        stroke: Option<Rgba>,
        stroke_width: f32,
    },
    /// Circle
    Circle {
        cx: f32,
        cy: f32,
        r: f32,
        fill: Rgba,
        stroke: Option<Rgba>,
        stroke_width: f32,
    },
    /// Line
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        stroke: Rgba,
        stroke_width: f32,
    },
    /// Polyline (connected line segments)
    Polyline {
        points: Vec<(f32, f32)>,
        stroke: Rgba,
        stroke_width: f32,
        fill: Option<Rgba>,
    },
    /// Text
    Text {
        x: f32,
        y: f32,
        text: String,
        font_size: f32,
        fill: Rgba,
        anchor: TextAnchor,
    },
    /// Embedded raster image (base64 PNG)
    Image {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        data: String,
    },
}

/// Text anchor position for SVG text alignment.
#[derive(Debug, Clone, Copy, Default)]
pub enum TextAnchor {
    /// Align text start at position (left-aligned for LTR).
    #[default]
    Start,
    /// Center text at position.
    Middle,
    /// Align text end at position (right-aligned for LTR).
    End,
}

impl Default for SvgEncoder {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

impl SvgEncoder {
    /// Create a new SVG encoder with given dimensions.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            background: Some(Rgba::WHITE),
            font_family: None,
            elements: Vec::new(),
        }
    }

    /// Set background color (None for transparent).
    #[must_use]
    pub fn background(mut self, color: Option<Rgba>) -> Self {
        self.background = color;
        self
    }

    /// Set the document font family applied to text elements.
    #[must_use]
    pub fn font_family(mut self, family: &str) -> Self {
        self.font_family = Some(family.to_string());
        self
    }

    /// Create from a framebuffer (embeds as raster image).
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn from_framebuffer(fb: &Framebuffer) -> Result<Self> {
        let mut encoder = Self::new(fb.width(), fb.height());
        encoder.background = None; // Image provides background
        encoder.embed_framebuffer(fb, 0.0, 0.0)?;
        Ok(encoder)
    }

    /// Embed a framebuffer as a base64 PNG image at the given offset.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn embed_framebuffer(&mut self, fb: &Framebuffer, x: f32, y: f32) -> Result<()> {
        let png_bytes = super::PngEncoder::to_bytes(fb)?;
        let base64_data = STANDARD.encode(&png_bytes);
        let data_uri = format!("data:image/png;base64,{base64_data}");

        self.elements.push(SvgElement::Image {
            x,
            y,
            width: fb.width() as f32,
            height: fb.height() as f32,
            data: data_uri,
        });

        Ok(())
    }

    /// Add a rectangle.
    #[must_use]
    pub fn rect(mut self, x: f32, y: f32, width: f32, height: f32, fill: Rgba) -> Self {
        self.elements.push(SvgElement::Rect {
            x,
            y,
            width,
            height,
            fill,
            stroke: None,
            stroke_width: 1.0,
        });
        self
    }

    /// Add a circle with stroke.
    #[must_use]
    pub fn circle_outlined(
        mut self,
        cx: f32,
        cy: f32,
        r: f32,
        fill: Rgba,
        stroke: Rgba,
        stroke_width: f32,
    ) -> Self {
        self.elements.push(SvgElement::Circle {
            cx,
            cy,
            r,
            fill,
            stroke: Some(stroke),
            stroke_width,
        });
        self
    }

    /// Add a line.
    #[must_use]
    pub fn line(mut self, x1: f32, y1: f32, x2: f32, y2: f32, stroke: Rgba, stroke_width: f32) -> Self {
        self.elements.push(SvgElement::Line { x1, y1, x2, y2, stroke, stroke_width });
        self
    }

    /// Add a polyline.
    #[must_use]
    pub fn polyline(mut self, points: &[(f32, f32)], stroke: Rgba, stroke_width: f32) -> Self {
        self.elements.push(SvgElement::Polyline {
            points: points.to_vec(),
            stroke,
            stroke_width,
            fill: None,
        });
        self
    }

    /// Add text.
    #[must_use]
    pub fn text(mut self, x: f32, y: f32, text: &str, font_size: f32, fill: Rgba) -> Self {
        self.elements.push(SvgElement::Text {
            x,
            y,
            text: text.to_string(),
            font_size,
            fill,
            anchor: TextAnchor::Start,
        });
        self
    }

    /// Add text with anchor.
    #[must_use]
    pub fn text_anchored(
        mut self,
        x: f32,
        y: f32,
        text: &str,
        font_size: f32,
        fill: Rgba,
        anchor: TextAnchor,
    ) -> Self {
        self.elements.push(SvgElement::Text {
            x,
            y,
            text: text.to_string(),
            font_size,
            fill,
            anchor,
        });
        self
    }

    /// Add a raw element.
    pub fn add_element(&mut self, element: SvgElement) {
        self.elements.push(element);
    }

    /// Render to SVG string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut svg = String::with_capacity(4096);

        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            self.width, self.height, self.width, self.height
        );

        if let Some(bg) = self.background {
            let _ = writeln!(svg, r#"  <rect width="100%" height="100%" fill="{}"/>"#, rgba_to_css(bg));
        }

        for element in &self.elements {
            let _ = writeln!(svg, "  {}", self.element_to_svg(element));
        }

        svg.push_str("</svg>\n");
        svg
    }

    /// Write to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if file writing fails.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(self.render().as_bytes())?;
        Ok(())
    }

    /// Convert an SVG element to its string representation.
    fn element_to_svg(&self, element: &SvgElement) -> String {
        match element {
            SvgElement::Rect { x, y, width, height, fill, stroke, stroke_width } => {
                let stroke_attr = stroke
                    .map(|s| format!(r#" stroke="{}" stroke-width="{stroke_width}""#, rgba_to_css(s)))
                    .unwrap_or_default();
                format!(
                    r#"<rect x="{x}" y="{y}" width="{width}" height="{height}" fill="{}"{stroke_attr}/>"#,
                    rgba_to_css(*fill)
                )
            }
            SvgElement::Circle { cx, cy, r, fill, stroke, stroke_width } => {
                let stroke_attr = stroke
                    .map(|s| format!(r#" stroke="{}" stroke-width="{stroke_width}""#, rgba_to_css(s)))
                    .unwrap_or_default();
                format!(
                    r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="{}"{stroke_attr}/>"#,
                    rgba_to_css(*fill)
                )
            }
            SvgElement::Line { x1, y1, x2, y2, stroke, stroke_width } => {
                format!(
                    r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{}" stroke-width="{stroke_width}"/>"#,
                    rgba_to_css(*stroke)
                )
            }
            SvgElement::Polyline { points, stroke, stroke_width, fill } => {
                let points_str: String =
                    points.iter().map(|(x, y)| format!("{x},{y}")).collect::<Vec<_>>().join(" ");
                let fill_attr = fill.map(rgba_to_css).unwrap_or_else(|| "none".to_string());
                let tag = if fill.is_some() { "polygon" } else { "polyline" };
                format!(
                    r#"<{tag} points="{points_str}" fill="{fill_attr}" stroke="{}" stroke-width="{stroke_width}"/>"#,
                    rgba_to_css(*stroke)
                )
            }
            SvgElement::Text { x, y, text, font_size, fill, anchor } => {
                let anchor_str = match anchor {
                    TextAnchor::Start => "start",
                    TextAnchor::Middle => "middle",
                    TextAnchor::End => "end",
                };
                let family_attr = self
                    .font_family
                    .as_ref()
                    .map(|f| format!(r#" font-family="{f}""#))
                    .unwrap_or_default();
                format!(
                    r#"<text x="{x}" y="{y}" font-size="{font_size}"{family_attr} fill="{}" text-anchor="{anchor_str}">{}</text>"#,
                    rgba_to_css(*fill),
                    escape_xml(text)
                )
            }
            SvgElement::Image { x, y, width, height, data } => {
                format!(
                    r#"<image x="{x}" y="{y}" width="{width}" height="{height}" xlink:href="{data}"/>"#
                )
            }
        }
    }
}

/// Convert RGBA to CSS color string.
fn rgba_to_css(color: Rgba) -> String {
    if color.a == 255 {
        format!("rgb({},{},{})", color.r, color.g, color.b)
    } else {
        format!("rgba({},{},{},{:.3})", color.r, color.g, color.b, f32::from(color.a) / 255.0)
    }
}

/// Escape XML special characters in text content.
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svg_header_and_dimensions() {
        let svg = SvgEncoder::new(640, 480).render();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"width="640""#));
        assert!(svg.contains(r#"height="480""#));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn test_svg_background() {
        let svg = SvgEncoder::new(10, 10).background(Some(Rgba::WHITE)).render();
        assert!(svg.contains(r#"fill="rgb(255,255,255)""#));

        let transparent = SvgEncoder::new(10, 10).background(None).render();
        assert!(!transparent.contains("100%"));
    }

    #[test]
    fn test_svg_text_with_family() {
        let svg = SvgEncoder::new(100, 100)
            .font_family("Futura")
            .text_anchored(50.0, 20.0, "Anscombe's Quartet", 16.0, Rgba::BLACK, TextAnchor::Middle)
            .render();

        assert!(svg.contains(r#"font-family="Futura""#));
        assert!(svg.contains(r#"text-anchor="middle""#));
        assert!(svg.contains("Anscombe's Quartet"));
    }

    #[test]
    fn test_svg_text_escapes_markup() {
        let svg = SvgEncoder::new(100, 100).text(0.0, 0.0, "a < b & c", 10.0, Rgba::BLACK).render();
        assert!(svg.contains("a &lt; b &amp; c"));
    }

    #[test]
    fn test_svg_shapes() {
        let svg = SvgEncoder::new(100, 100)
            .rect(0.0, 0.0, 10.0, 10.0, Rgba::RED)
            .circle_outlined(50.0, 50.0, 5.0, Rgba::rgb(255, 140, 0), Rgba::rgb(160, 82, 45), 1.0)
            .line(0.0, 0.0, 10.0, 10.0, Rgba::BLACK, 1.0)
            .polyline(&[(0.0, 0.0), (5.0, 8.0), (10.0, 2.0)], Rgba::BLUE, 1.0)
            .render();

        assert!(svg.contains("<rect"));
        assert!(svg.contains("<circle"));
        assert!(svg.contains("<line"));
        assert!(svg.contains("<polyline"));
    }

    #[test]
    fn test_svg_rgba_css() {
        assert_eq!(rgba_to_css(Rgba::rgb(1, 2, 3)), "rgb(1,2,3)");
        assert!(rgba_to_css(Rgba::new(0, 0, 0, 128)).starts_with("rgba(0,0,0,0.50"));
    }

    #[test]
    fn test_svg_from_framebuffer_embeds_png() {
        let mut fb = Framebuffer::new(8, 8).unwrap();
        fb.clear(Rgba::WHITE);

        let svg = SvgEncoder::from_framebuffer(&fb).unwrap().render();
        assert!(svg.contains("data:image/png;base64,"));
        assert!(svg.contains("<image"));
    }

    #[test]
    fn test_svg_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.svg");
        SvgEncoder::new(10, 10).write_to_file(&path).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("<svg"));
    }
}
