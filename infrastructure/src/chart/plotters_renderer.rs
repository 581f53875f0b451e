//! Radial bar chart rendered to SVG with plotters.

use growth_index_application::{ChartImage, ChartRenderer, ImageFormat, RenderError};
use growth_index_domain::RadialChart;
use growth_index_domain::chart::radial::{BAR_COLOR, BAR_OPACITY};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use tracing::debug;

const ARC_STEPS: usize = 24;

/// Renders the score chart as an SVG document
#[derive(Debug, Clone)]
pub struct PlottersChartRenderer {
    size: u32,
    font_size: u32,
}

impl PlottersChartRenderer {
    pub fn new() -> Self {
        Self {
            size: 600,
            font_size: 14,
        }
    }

    fn draw(&self, chart: &RadialChart, svg: &mut String) -> Result<(), String> {
        let size = self.size;
        let root = SVGBackend::with_string(svg, (size, size)).into_drawing_area();
        root.fill(&WHITE).map_err(|e| e.to_string())?;

        let centre = f64::from(size) / 2.0;
        let scale = centre / chart.extent();
        // Score-unit cartesian (y up) to pixel coordinates (y down)
        let to_px = |(x, y): (f64, f64)| -> (i32, i32) {
            (
                (centre + x * scale).round() as i32,
                (centre - y * scale).round() as i32,
            )
        };

        let (r, g, b) = BAR_COLOR;
        let bar_style = RGBColor(r, g, b).mix(BAR_OPACITY).filled();
        for slice in chart.slices() {
            let outline = slice.outline(ARC_STEPS);
            if outline.is_empty() {
                continue;
            }
            let points: Vec<(i32, i32)> = outline.into_iter().map(to_px).collect();
            root.draw(&Polygon::new(points, bar_style))
                .map_err(|e| e.to_string())?;
        }

        for (from, to) in chart.guide_lines() {
            root.draw(&PathElement::new(
                vec![to_px(from), to_px(to)],
                BLACK.mix(0.6).stroke_width(1),
            ))
            .map_err(|e| e.to_string())?;
        }

        let line_height = f64::from(self.font_size) * 1.2;
        for slice in chart.slices() {
            let (x, y) = to_px(slice.label_position());
            let lines = &slice.label_lines;
            let first_offset = -(lines.len() as f64 - 1.0) * line_height / 2.0;
            for (i, line) in lines.iter().enumerate() {
                let dy = (first_offset + i as f64 * line_height).round() as i32;
                let style = ("sans-serif", self.font_size)
                    .into_font()
                    .color(&BLACK)
                    .pos(Pos::new(HPos::Center, VPos::Center));
                root.draw(&Text::new(line.as_str(), (x, y + dy), style))
                    .map_err(|e| e.to_string())?;
            }
        }

        root.present().map_err(|e| e.to_string())
    }
}

impl Default for PlottersChartRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartRenderer for PlottersChartRenderer {
    fn render(&self, labels: &[String], values: &[u8]) -> Result<ChartImage, RenderError> {
        if labels.len() != values.len() {
            return Err(RenderError::Chart(format!(
                "{} labels but {} values",
                labels.len(),
                values.len()
            )));
        }
        if labels.is_empty() {
            return Err(RenderError::Chart("nothing to plot".to_string()));
        }

        let chart = RadialChart::new(labels, values);
        let mut svg = String::new();
        self.draw(&chart, &mut svg).map_err(RenderError::Chart)?;
        debug!("Rendered radial chart ({} bytes of SVG)", svg.len());

        Ok(ChartImage {
            format: ImageFormat::Svg,
            width: self.size,
            height: self.size,
            data: svg.into_bytes(),
        })
    }
}
