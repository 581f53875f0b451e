//! Per-submission artifact directories.

use growth_index_application::ChartImage;
use growth_index_domain::REPORT_FILE_NAME;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

/// Paths of the files written for one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredArtifacts {
    pub dir: PathBuf,
    pub chart: PathBuf,
    pub report: PathBuf,
}

/// Writes chart and report into a fresh directory per submission so that
/// concurrent runs never share a file name.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create `<root>/<timestamp>-<id>-<company>/` and write both files.
    pub fn store(
        &self,
        company: &str,
        chart: &ChartImage,
        report: &[u8],
    ) -> io::Result<StoredArtifacts> {
        let dir = self.root.join(format!(
            "{}-{}-{}",
            chrono::Local::now().format("%Y%m%d-%H%M%S"),
            &uuid::Uuid::new_v4().simple().to_string()[..8],
            slug(company)
        ));
        std::fs::create_dir_all(&dir)?;

        let chart_path = dir.join(format!("radar_chart.{}", chart.format.extension()));
        std::fs::write(&chart_path, &chart.data)?;

        let report_path = dir.join(REPORT_FILE_NAME);
        std::fs::write(&report_path, report)?;

        info!("Artifacts written to {}", dir.display());
        Ok(StoredArtifacts {
            dir,
            chart: chart_path,
            report: report_path,
        })
    }
}

/// Lowercase ASCII slug, `-` separated, never empty.
fn slug(text: &str) -> String {
    let slug = text
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-");
    if slug.is_empty() {
        "submission".to_string()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use growth_index_application::ImageFormat;

    fn chart() -> ChartImage {
        ChartImage {
            format: ImageFormat::Svg,
            width: 1,
            height: 1,
            data: b"<svg/>".to_vec(),
        }
    }

    #[test]
    fn test_store_writes_both_files() {
        let root = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(root.path());

        let stored = store.store("Acme Corp.", &chart(), b"%PDF").unwrap();

        assert!(stored.dir.starts_with(root.path()));
        assert!(stored.dir.to_string_lossy().ends_with("acme-corp"));
        assert_eq!(stored.chart.file_name().unwrap(), "radar_chart.svg");
        assert_eq!(stored.report.file_name().unwrap(), "survey_report.pdf");
        assert_eq!(std::fs::read(&stored.report).unwrap(), b"%PDF");
    }

    #[test]
    fn test_each_submission_gets_unique_dir() {
        let root = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(root.path());

        let first = store.store("Acme", &chart(), b"1").unwrap();
        let second = store.store("Acme", &chart(), b"2").unwrap();

        assert_ne!(first.dir, second.dir);
        assert_eq!(std::fs::read(&first.report).unwrap(), b"1");
    }

    #[test]
    fn test_slug() {
        assert_eq!(slug("KPI's & Reporting"), "kpi-s-reporting");
        assert_eq!(slug("  "), "submission");
    }
}
