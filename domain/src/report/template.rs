//! Fixed report and email wording

/// Attachment file name used for every generated report
pub const REPORT_FILE_NAME: &str = "survey_report.pdf";

/// Templates for the text that surrounds a Score Table
pub struct ReportTemplate;

impl ReportTemplate {
    /// Default report title and email subject
    pub fn title() -> &'static str {
        "Growth Index Results"
    }

    /// Default paragraph shown under the report title
    pub fn intro(organization: &str) -> String {
        format!(
            "Congratulations - you've completed {}'s Growth Assessment! \
             Below is a breakdown of your results by focus area.",
            organization
        )
    }

    /// Heading of the per-category table
    pub fn table_heading() -> &'static str {
        "Assessment Results by Focus Area"
    }

    /// HTML body sent along with the report.
    ///
    /// `first_name` is escaped; an empty name falls back to a generic greeting.
    pub fn email_html(first_name: &str, organization: &str) -> String {
        let first_name = first_name.trim();
        let greeting = if first_name.is_empty() {
            "Hello,".to_string()
        } else {
            format!("Hello {},", escape_html(first_name))
        };

        format!(
            r#"<p>{}</p>
<p>Thank you for completing the survey. Please find your results attached.</p>
<p>Best regards,<br>{}</p>"#,
            greeting,
            escape_html(organization)
        )
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
