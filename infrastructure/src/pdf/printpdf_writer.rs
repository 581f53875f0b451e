//! A4 report layout with printpdf.
//!
//! Builtin Helvetica only, so no font files are needed at runtime. The chart
//! is drawn as native vector paths from the radial layout.

use growth_index_application::{RenderError, ReportDocument, ReportWriter};
use growth_index_domain::RadialChart;
use growth_index_domain::chart::radial::{BAR_COLOR, BAR_OPACITY};
use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, LineDashPattern, Mm, PdfDocument,
    PdfDocumentReference, PdfLayerReference, Point, Polygon, Rgb,
};
use tracing::debug;

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 15.0;
const CHART_WIDTH: f32 = 110.0;
const CHART_FONT_SIZE: f32 = 7.0;
const ARC_STEPS: usize = 24;
const LABEL_CELL_WIDTH: f32 = 100.0;
const SCORE_CELL_WIDTH: f32 = 50.0;
const ROW_HEIGHT: f32 = 8.0;
const PT_TO_MM: f32 = 0.3528;

const BLACK: (f32, f32, f32) = (0.0, 0.0, 0.0);
const GUIDE_GREY: (f32, f32, f32) = (0.4, 0.4, 0.4);
const ACCENT: (f32, f32, f32) = (234.0 / 255.0, 0.0, 0.0);

/// Writes the Growth Index report as a PDF
#[derive(Debug, Clone, Default)]
pub struct PrintPdfReportWriter;

impl PrintPdfReportWriter {
    pub fn new() -> Self {
        Self
    }
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

/// Tracks the vertical write position and adds pages as needed
struct PageCursor<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: f32,
}

impl<'a> PageCursor<'a> {
    fn new(doc: &'a PdfDocumentReference, layer: PdfLayerReference) -> Self {
        Self {
            doc,
            layer,
            y: PAGE_HEIGHT - MARGIN,
        }
    }

    /// Move down by `height`, starting a new page if it would not fit.
    fn reserve(&mut self, height: f32) -> f32 {
        if self.y - height < MARGIN {
            let (page, layer) = self.doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = PAGE_HEIGHT - MARGIN;
        }
        self.y -= height;
        self.y
    }

    fn text(&self, text: &str, size: f32, x: f32, y: f32, font: &IndirectFontRef) {
        self.layer.use_text(text, size, Mm(x), Mm(y), font);
    }

    fn set_color(&self, color: (f32, f32, f32)) {
        self.layer.set_fill_color(rgb(color));
    }

    fn rect(&self, x: f32, y: f32, width: f32, height: f32) {
        let points = vec![
            (Point::new(Mm(x), Mm(y)), false),
            (Point::new(Mm(x + width), Mm(y)), false),
            (Point::new(Mm(x + width), Mm(y + height)), false),
            (Point::new(Mm(x), Mm(y + height)), false),
        ];
        self.layer.add_line(Line {
            points,
            is_closed: true,
        });
    }

    /// Draw `chart` in a `width` mm square whose lower-left corner is `(x, y)`.
    fn radial_chart(
        &self,
        chart: &RadialChart,
        x: f32,
        y: f32,
        width: f32,
        font: &IndirectFontRef,
    ) {
        let centre = (x + width / 2.0, y + width / 2.0);
        let scale = (width / 2.0) / chart.extent() as f32;
        // Score-unit cartesian to page millimetres; both have y up
        let to_mm = |(px, py): (f64, f64)| {
            (
                centre.0 + px as f32 * scale,
                centre.1 + py as f32 * scale,
            )
        };
        let to_point = |p: (f64, f64)| {
            let (px, py) = to_mm(p);
            Point::new(Mm(px), Mm(py))
        };

        self.layer.set_fill_color(rgb(bar_fill()));
        for slice in chart.slices() {
            let outline = slice.outline(ARC_STEPS);
            if outline.is_empty() {
                continue;
            }
            self.layer.add_polygon(Polygon {
                rings: vec![outline.into_iter().map(|p| (to_point(p), false)).collect()],
                mode: PaintMode::Fill,
                winding_order: WindingOrder::NonZero,
            });
        }

        self.layer.set_outline_color(rgb(GUIDE_GREY));
        self.layer.set_outline_thickness(0.5);
        self.layer.set_line_dash_pattern(LineDashPattern {
            dash_1: Some(3),
            gap_1: Some(2),
            ..Default::default()
        });
        for (from, to) in chart.guide_lines() {
            self.layer.add_line(Line {
                points: vec![(to_point(from), false), (to_point(to), false)],
                is_closed: false,
            });
        }
        self.layer.set_line_dash_pattern(LineDashPattern::default());
        self.layer.set_outline_color(rgb(BLACK));
        self.layer.set_outline_thickness(1.0);

        self.set_color(BLACK);
        let line_height = CHART_FONT_SIZE * 1.2 * PT_TO_MM;
        for slice in chart.slices() {
            let (anchor_x, anchor_y) = to_mm(slice.label_position());
            let lines = &slice.label_lines;
            // Centre the block of lines on the anchor; cap height is ~0.7em
            let top = anchor_y + (lines.len() as f32 - 1.0) * line_height / 2.0
                - CHART_FONT_SIZE * 0.35 * PT_TO_MM;
            for (i, line) in lines.iter().enumerate() {
                let line_x = anchor_x - text_width(line, CHART_FONT_SIZE) / 2.0;
                self.text(line, CHART_FONT_SIZE, line_x, top - i as f32 * line_height, font);
            }
        }
    }
}

fn rgb((r, g, b): (f32, f32, f32)) -> Color {
    Color::Rgb(Rgb::new(r, g, b, None))
}

/// Bar colour composited over the white page at the bar opacity.
fn bar_fill() -> (f32, f32, f32) {
    let (r, g, b) = BAR_COLOR;
    let alpha = BAR_OPACITY as f32;
    let blend = |c: u8| f32::from(c) / 255.0 * alpha + (1.0 - alpha);
    (blend(r), blend(g), blend(b))
}

impl ReportWriter for PrintPdfReportWriter {
    fn write(&self, document: &ReportDocument<'_>) -> Result<Vec<u8>, RenderError> {
        if document.chart.slices().is_empty() {
            return Err(RenderError::Document("chart has no categories".to_string()));
        }

        let (doc, page, layer) =
            PdfDocument::new(document.title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        let fonts = Fonts {
            regular: doc
                .add_builtin_font(BuiltinFont::Helvetica)
                .map_err(|e| RenderError::Document(e.to_string()))?,
            bold: doc
                .add_builtin_font(BuiltinFont::HelveticaBold)
                .map_err(|e| RenderError::Document(e.to_string()))?,
        };

        let mut cursor = PageCursor::new(&doc, doc.get_page(page).get_layer(layer));

        // Title
        let y = cursor.reserve(8.0);
        cursor.set_color(ACCENT);
        cursor.text(
            document.title,
            14.0,
            centred_x(document.title, 14.0),
            y,
            &fonts.bold,
        );
        cursor.set_color((0.0, 0.0, 0.0));

        // Intro
        cursor.reserve(4.0);
        for line in wrap_text(document.intro, chars_per_line(10.0)) {
            let y = cursor.reserve(5.0);
            cursor.text(&line, 10.0, MARGIN, y, &fonts.regular);
        }

        // Respondent
        cursor.reserve(3.0);
        for (label, value) in respondent_lines(document) {
            let y = cursor.reserve(5.0);
            cursor.text(label, 10.0, MARGIN, y, &fonts.bold);
            cursor.text(&value, 10.0, MARGIN + 30.0, y, &fonts.regular);
        }

        // Chart, square
        cursor.reserve(5.0);
        let chart_bottom = cursor.reserve(CHART_WIDTH);
        cursor.radial_chart(
            document.chart,
            (PAGE_WIDTH - CHART_WIDTH) / 2.0,
            chart_bottom,
            CHART_WIDTH,
            &fonts.regular,
        );

        // Score table
        cursor.reserve(5.0);
        let y = cursor.reserve(8.0);
        cursor.text(document.table_heading, 12.0, MARGIN, y, &fonts.bold);
        cursor.reserve(2.0);
        for entry in document.scores.iter() {
            let y = cursor.reserve(ROW_HEIGHT);
            cursor.rect(MARGIN, y, LABEL_CELL_WIDTH, ROW_HEIGHT);
            cursor.rect(MARGIN + LABEL_CELL_WIDTH, y, SCORE_CELL_WIDTH, ROW_HEIGHT);
            let baseline = y + 2.6;
            cursor.text(&entry.category, 10.0, MARGIN + 2.0, baseline, &fonts.regular);
            let score = entry.display_score();
            let score_x =
                MARGIN + LABEL_CELL_WIDTH + (SCORE_CELL_WIDTH - text_width(&score, 10.0)) / 2.0;
            cursor.text(&score, 10.0, score_x, baseline, &fonts.regular);
        }

        drop(cursor);
        let bytes = doc
            .save_to_bytes()
            .map_err(|e| RenderError::Document(e.to_string()))?;
        debug!("PDF report written ({} bytes)", bytes.len());
        Ok(bytes)
    }
}

fn respondent_lines(document: &ReportDocument<'_>) -> Vec<(&'static str, String)> {
    let submission = document.submission;
    let mut lines = vec![("Company:", submission.company_name.trim().to_string())];
    let name = submission.full_name();
    if !name.is_empty() {
        lines.push(("Name:", name));
    }
    if !submission.position.trim().is_empty() {
        lines.push(("Position:", submission.position.trim().to_string()));
    }
    if let Some(email) = submission.respondent_email() {
        lines.push(("Email:", email.to_string()));
    }
    lines
}

/// Approximate Helvetica advance width; builtin fonts carry no metrics.
fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * 0.5 * PT_TO_MM
}

fn centred_x(text: &str, size: f32) -> f32 {
    ((PAGE_WIDTH - text_width(text, size)) / 2.0).max(MARGIN)
}

fn chars_per_line(size: f32) -> usize {
    ((PAGE_WIDTH - 2.0 * MARGIN) / (size * 0.5 * PT_TO_MM)) as usize
}

/// Greedy word wrap on character count.
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let needed = current.chars().count() + 1 + word.chars().count();
            if !current.is_empty() && needed > max_chars {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use growth_index_domain::{
        Answer, ResponseSet, ScoreTable, SubmissionRecord, Survey, calculate_scores,
    };
    use printpdf::lopdf::{self, Object};

    fn scores(answer: Answer) -> ScoreTable {
        let survey = Survey::growth_index();
        calculate_scores(&survey, &ResponseSet::uniform(&survey, answer)).unwrap()
    }

    fn render(scores: &ScoreTable) -> Result<Vec<u8>, RenderError> {
        let chart = RadialChart::new(&scores.labels(), &scores.values());
        let submission = SubmissionRecord::new("Acme")
            .with_name("Jane", "Doe")
            .with_position("CEO");
        PrintPdfReportWriter::new().write(&ReportDocument {
            title: "Growth Index Results",
            intro: "Congratulations - you've completed the assessment.",
            table_heading: "Assessment Results by Focus Area",
            submission: &submission,
            chart: &chart,
            scores,
        })
    }

    /// Every content-stream operation of every page, in order
    fn operations(bytes: &[u8]) -> Vec<lopdf::content::Operation> {
        let doc = lopdf::Document::load_mem(bytes).unwrap();
        doc.get_pages()
            .values()
            .flat_map(|page| doc.get_and_decode_page_content(*page).unwrap().operations)
            .collect()
    }

    fn shown_text(ops: &[lopdf::content::Operation]) -> Vec<String> {
        ops.iter()
            .filter(|op| op.operator == "Tj")
            .filter_map(|op| match op.operands.first() {
                Some(Object::String(bytes, _)) => {
                    Some(String::from_utf8_lossy(bytes).into_owned())
                }
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_chart_is_drawn_into_the_page() {
        let bytes = render(&scores(Answer::Yes)).unwrap();
        assert!(bytes.starts_with(b"%PDF"));

        let ops = operations(&bytes);

        // One filled wedge per category
        let fills = ops.iter().filter(|op| op.operator == "f").count();
        assert_eq!(fills, 10);
        // Dashed guide line per category
        assert!(ops.iter().any(|op| op.operator == "d"));
        assert!(ops.iter().filter(|op| op.operator == "S").count() >= 10);
        // No external objects to resolve
        assert!(!ops.iter().any(|op| op.operator == "Do"));

        let text = shown_text(&ops);
        for line in ["Business", "Development", "KPI's &", "Reporting", "Automation"] {
            assert!(text.iter().any(|t| t == line), "missing chart label {line:?}");
        }
        assert!(text.iter().any(|t| t == "Business Development"));
        assert!(text.iter().any(|t| t == "8/8"));
    }

    #[test]
    fn test_zero_scores_draw_no_wedges() {
        let ops = operations(&render(&scores(Answer::No)).unwrap());

        assert_eq!(ops.iter().filter(|op| op.operator == "f").count(), 0);
        let text = shown_text(&ops);
        assert!(text.iter().any(|t| t == "Forecasting"));
        assert!(text.iter().any(|t| t == "0/8"));
    }

    #[test]
    fn test_rejects_empty_chart() {
        let scores = scores(Answer::No);
        let submission = SubmissionRecord::new("Acme");
        let chart = RadialChart::new(&[], &[]);
        let result = PrintPdfReportWriter::new().write(&ReportDocument {
            title: "Growth Index Results",
            intro: "",
            table_heading: "Assessment Results by Focus Area",
            submission: &submission,
            chart: &chart,
            scores: &scores,
        });
        assert!(matches!(result, Err(RenderError::Document(_))));
    }

    #[test]
    fn test_bar_fill_is_lightened_accent() {
        let (r, g, b) = bar_fill();
        assert!((r - (234.0 / 255.0 * 0.6 + 0.4)).abs() < 1e-4);
        assert!((g - 0.4).abs() < 1e-4);
        assert_eq!(g, b);
    }

    #[test]
    fn test_wrap_text_respects_width() {
        let lines = wrap_text("one two three four five", 9);
        assert_eq!(lines, vec!["one two", "three", "four five"]);
        assert!(wrap_text("", 10).is_empty());
    }

    #[test]
    fn test_centred_title_stays_inside_margins() {
        let x = centred_x("Growth Index Results", 14.0);
        assert!(x > MARGIN && x < PAGE_WIDTH / 2.0);
    }
}
