//! Radial bar chart geometry.
//!
//! Pure layout math for the score chart: one edge-aligned wedge per
//! category, evenly spaced around the circle starting at angle 0 (east) and
//! running counter-clockwise. Radii are in score units; renderers scale them
//! to pixels or millimetres.

use serde::Serialize;
use std::f64::consts::TAU;

/// Radius (score units) at which category labels are placed
pub const LABEL_RADIUS: f64 = 10.1;
/// Radius (score units) of the guide line drawn at each bar edge
pub const GUIDE_RADIUS: f64 = 9.1;
/// Angular offset (radians) applied to labels so they sit over their wedge
pub const LABEL_ANGLE_OFFSET: f64 = 0.3;
/// Bar fill colour, `#EA0000`
pub const BAR_COLOR: (u8, u8, u8) = (0xEA, 0x00, 0x00);
/// Bar fill opacity
pub const BAR_OPACITY: f64 = 0.6;

/// One wedge of the chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadialSlice {
    /// Label split for display; multi-word labels take two lines
    pub label_lines: Vec<String>,
    pub value: f64,
    /// Angle (radians) of the wedge's leading edge
    pub start_angle: f64,
    /// Angular width (radians)
    pub width: f64,
}

impl RadialSlice {
    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.width
    }

    pub fn label_angle(&self) -> f64 {
        self.start_angle + LABEL_ANGLE_OFFSET
    }

    /// Label anchor in score-unit cartesian coordinates (y up).
    pub fn label_position(&self) -> (f64, f64) {
        polar_to_cartesian(self.label_angle(), LABEL_RADIUS)
    }

    /// Closed outline of the wedge: centre followed by `arc_steps + 1`
    /// points along the outer arc. Empty when the value is zero.
    pub fn outline(&self, arc_steps: usize) -> Vec<(f64, f64)> {
        if self.value <= 0.0 {
            return Vec::new();
        }
        let steps = arc_steps.max(1);
        let mut points = Vec::with_capacity(steps + 2);
        points.push((0.0, 0.0));
        for i in 0..=steps {
            let angle = self.start_angle + self.width * i as f64 / steps as f64;
            points.push(polar_to_cartesian(angle, self.value));
        }
        points
    }
}

/// Layout of a complete radial bar chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadialChart {
    slices: Vec<RadialSlice>,
}

impl RadialChart {
    /// Lay out `labels` and their parallel `values`.
    ///
    /// Extra labels or values beyond the shorter of the two are ignored.
    pub fn new(labels: &[String], values: &[u8]) -> Self {
        let count = labels.len().min(values.len());
        let angles = evenly_spaced_angles(count);
        let width = if count == 0 { 0.0 } else { TAU / count as f64 };

        let slices = labels
            .iter()
            .zip(values)
            .zip(angles)
            .map(|((label, value), start_angle)| RadialSlice {
                label_lines: wrap_label(label),
                value: f64::from(*value),
                start_angle,
                width,
            })
            .collect();

        Self { slices }
    }

    pub fn slices(&self) -> &[RadialSlice] {
        &self.slices
    }

    /// Guide line endpoints (centre to [`GUIDE_RADIUS`]) for every wedge edge.
    pub fn guide_lines(&self) -> Vec<((f64, f64), (f64, f64))> {
        self.slices
            .iter()
            .map(|s| ((0.0, 0.0), polar_to_cartesian(s.start_angle, GUIDE_RADIUS)))
            .collect()
    }

    /// Radius the drawing must accommodate, including labels.
    pub fn extent(&self) -> f64 {
        LABEL_RADIUS + 1.5
    }
}

/// `count` angles evenly spaced over `[0, 2π)`, endpoint excluded.
pub fn evenly_spaced_angles(count: usize) -> Vec<f64> {
    (0..count).map(|i| TAU * i as f64 / count as f64).collect()
}

/// Move the last word of a multi-word label onto its own line.
pub fn wrap_label(label: &str) -> Vec<String> {
    let words: Vec<&str> = label.split_whitespace().collect();
    match words.split_last() {
        Some((last, rest)) if !rest.is_empty() => vec![rest.join(" "), (*last).to_string()],
        _ => vec![label.trim().to_string()],
    }
}

pub fn polar_to_cartesian(angle: f64, radius: f64) -> (f64, f64) {
    (radius * angle.cos(), radius * angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_angles_start_at_zero_and_exclude_endpoint() {
        let angles = evenly_spaced_angles(4);
        assert_eq!(angles.len(), 4);
        assert_eq!(angles[0], 0.0);
        assert!((angles[1] - TAU / 4.0).abs() < 1e-12);
        assert!(angles.iter().all(|a| *a < TAU));
    }

    #[test]
    fn test_ten_slices_cover_circle() {
        let names: Vec<String> = (0..10).map(|i| format!("C{i}")).collect();
        let chart = RadialChart::new(&names, &[8; 10]);
        let total: f64 = chart.slices().iter().map(|s| s.width).sum();
        assert!((total - TAU).abs() < 1e-9);
        let last = chart.slices().last().unwrap();
        assert!((last.end_angle() - TAU).abs() < 1e-9);
    }

    #[test]
    fn test_wrap_label_moves_last_word() {
        assert_eq!(
            wrap_label("KPI's & Reporting"),
            vec!["KPI's &".to_string(), "Reporting".to_string()]
        );
        assert_eq!(
            wrap_label("Business Development"),
            vec!["Business".to_string(), "Development".to_string()]
        );
        assert_eq!(wrap_label("Pipeline"), vec!["Pipeline".to_string()]);
    }

    #[test]
    fn test_zero_value_has_no_outline() {
        let chart = RadialChart::new(&labels(&["A", "B"]), &[0, 4]);
        assert!(chart.slices()[0].outline(8).is_empty());
        let outline = chart.slices()[1].outline(8);
        assert_eq!(outline.len(), 10);
        assert_eq!(outline[0], (0.0, 0.0));
        let (x, y) = outline[1];
        assert!(((x * x + y * y).sqrt() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_mismatched_lengths_use_shorter() {
        let chart = RadialChart::new(&labels(&["A", "B", "C"]), &[2, 4]);
        assert_eq!(chart.slices().len(), 2);
    }

    #[test]
    fn test_guide_lines_reach_guide_radius() {
        let chart = RadialChart::new(&labels(&["A", "B", "C"]), &[2, 4, 6]);
        for (start, (x, y)) in chart.guide_lines() {
            assert_eq!(start, (0.0, 0.0));
            assert!(((x * x + y * y).sqrt() - GUIDE_RADIUS).abs() < 1e-9);
        }
    }

    #[test]
    fn test_label_position_is_offset() {
        let chart = RadialChart::new(&labels(&["A"]), &[8]);
        let (x, y) = chart.slices()[0].label_position();
        assert!((x - LABEL_RADIUS * LABEL_ANGLE_OFFSET.cos()).abs() < 1e-9);
        assert!((y - LABEL_RADIUS * LABEL_ANGLE_OFFSET.sin()).abs() < 1e-9);
    }
}
