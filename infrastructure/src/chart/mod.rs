//! Chart rendering adapters.

mod plotters_renderer;

pub use plotters_renderer::PlottersChartRenderer;
