use std::io::Cursor;
use std::ops::Range;

use image::{ImageFormat, RgbImage};
use palette::Srgb;
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::color::series_palette;
use crate::error::RenderError;

// ---------------------------------------------------------------------------
// Renderer seam
// ---------------------------------------------------------------------------

/// Input for the two-panel expansion figure.
pub struct ExpansionCharts<'a> {
    pub mineral_name: &'a str,
    pub temperatures: &'a [f64],
    pub volumes: &'a [f64],
    pub alphas: &'a [f64],
}

/// Rendering backend seam. The numeric core only depends on this trait, so
/// tests can run it against a stub without a graphics stack.
pub trait ChartRenderer {
    /// Render the Volume-vs-Temperature / Alpha-vs-Temperature pair as a
    /// PNG byte buffer.
    fn expansion_charts(&self, charts: &ExpansionCharts<'_>) -> Result<Vec<u8>, RenderError>;

    /// Render a filled color rectangle as a PNG byte buffer.
    fn color_swatch(&self, color: Srgb<u8>) -> Result<Vec<u8>, RenderError>;
}

// ---------------------------------------------------------------------------
// Bitmap renderer (plotters → RGB buffer → PNG)
// ---------------------------------------------------------------------------

/// Default renderer: draws with plotters into an in-memory RGB bitmap and
/// PNG-encodes it.
#[derive(Debug, Clone)]
pub struct BitmapRenderer {
    width: u32,
    height: u32,
    swatch_size: u32,
}

impl Default for BitmapRenderer {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 500,
            swatch_size: 240,
        }
    }
}

impl BitmapRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }
}

impl ChartRenderer for BitmapRenderer {
    fn expansion_charts(&self, charts: &ExpansionCharts<'_>) -> Result<Vec<u8>, RenderError> {
        let (width, height) = (self.width, self.height);
        let mut raw = vec![0u8; (width * height * 3) as usize];
        {
            let root = BitMapBackend::with_buffer(&mut raw, (width, height)).into_drawing_area();
            root.fill(&WHITE).map_err(backend)?;

            let panels = root.split_evenly((1, 2));
            let colors = series_palette(2);
            draw_line_panel(
                &panels[0],
                &format!("{}: Volume vs Temperature", charts.mineral_name),
                "Temperature (°C)",
                "Volume (cc)",
                charts.temperatures,
                charts.volumes,
                to_plotters(colors[0]),
            )?;
            draw_line_panel(
                &panels[1],
                &format!("{}: Alpha vs Temperature", charts.mineral_name),
                "Temperature (°C)",
                "Expansion coefficient (1/°C)",
                charts.temperatures,
                charts.alphas,
                to_plotters(colors[1]),
            )?;
            root.present().map_err(backend)?;
        }
        encode_png(width, height, raw)
    }

    fn color_swatch(&self, color: Srgb<u8>) -> Result<Vec<u8>, RenderError> {
        let size = self.swatch_size;
        let mut raw = vec![0u8; (size * size * 3) as usize];
        {
            let root = BitMapBackend::with_buffer(&mut raw, (size, size)).into_drawing_area();
            root.fill(&to_plotters(color)).map_err(backend)?;
            root.present().map_err(backend)?;
        }
        encode_png(size, size, raw)
    }
}

fn draw_line_panel(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    caption: &str,
    x_desc: &str,
    y_desc: &str,
    xs: &[f64],
    ys: &[f64],
    color: RGBColor,
) -> Result<(), RenderError> {
    let mut chart = ChartBuilder::on(area)
        .caption(caption, ("sans-serif", 18))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(padded_range(xs), padded_range(ys))
        .map_err(backend)?;

    chart
        .configure_mesh()
        .x_desc(x_desc)
        .y_desc(y_desc)
        .draw()
        .map_err(backend)?;

    chart
        .draw_series(LineSeries::new(
            xs.iter().zip(ys.iter()).map(|(&x, &y)| (x, y)),
            color.stroke_width(2),
        ))
        .map_err(backend)?;
    Ok(())
}

/// Axis range with a small pad; degenerate (flat) series get a unit pad so
/// the backend never sees an empty range.
fn padded_range(values: &[f64]) -> Range<f64> {
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    if span.abs() < f64::EPSILON {
        return (min - 1.0)..(max + 1.0);
    }
    let pad = 0.05 * span;
    (min - pad)..(max + pad)
}

fn to_plotters(color: Srgb<u8>) -> RGBColor {
    RGBColor(color.red, color.green, color.blue)
}

fn backend<E: std::fmt::Display>(e: E) -> RenderError {
    RenderError::Backend(e.to_string())
}

fn encode_png(width: u32, height: u32, raw: Vec<u8>) -> Result<Vec<u8>, RenderError> {
    let img = RgbImage::from_raw(width, height, raw)
        .ok_or_else(|| RenderError::Backend("bitmap buffer size mismatch".into()))?;
    let mut png = Vec::new();
    img.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
    Ok(png)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expansion_charts_produce_a_decodable_png() {
        let renderer = BitmapRenderer::default();
        let png = renderer
            .expansion_charts(&ExpansionCharts {
                mineral_name: "Quartz",
                temperatures: &[0.0, 10.0, 20.0],
                volumes: &[100.0, 110.0, 121.0],
                alphas: &[0.055, 0.009545, -0.045455],
            })
            .unwrap();
        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (1000, 500));
    }

    #[test]
    fn flat_series_still_renders() {
        let renderer = BitmapRenderer::new(400, 200);
        let png = renderer
            .expansion_charts(&ExpansionCharts {
                mineral_name: "Halite",
                temperatures: &[0.0, 10.0],
                volumes: &[100.0, 100.0],
                alphas: &[0.0, 0.0],
            })
            .unwrap();
        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (400, 200));
    }

    #[test]
    fn swatch_is_filled_with_the_requested_color() {
        let renderer = BitmapRenderer::default();
        let png = renderer.color_swatch(Srgb::new(218, 165, 32)).unwrap();
        let decoded = image::load_from_memory(&png).unwrap().to_rgb8();
        assert_eq!((decoded.width(), decoded.height()), (240, 240));
        let center = decoded.get_pixel(120, 120);
        assert_eq!(center.0, [218, 165, 32]);
    }
}
