//! PDF report adapters.

mod printpdf_writer;

pub use printpdf_writer::PrintPdfReportWriter;
