//! Detection report export.
//!
//! Builds a backend-neutral report from the currently filtered detections:
//! summary metrics when present, then a tabular listing (or a placeholder
//! page when the filter matches nothing). Actual page rendering lives
//! behind [`RenderReport`]; the crate ships a plain-text backend and a PDF
//! backend can implement the same trait externally.

use crate::model::{BoundingBox, Detection, RunMetrics};

pub const REPORT_TITLE: &str = "Edge-Ready Object Detection Report";
pub const NO_DETECTIONS_PLACEHOLDER: &str = "No detections for current filters.";

/// The tabular listing of the filtered detections.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportTable {
    pub columns: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

/// Report body: a data table, or the placeholder when the current filters
/// match nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportBody {
    Placeholder(String),
    Table(ReportTable),
}

/// A generated detection report.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub title: String,
    /// Summary lines from the run metrics; empty when none were loaded.
    pub summary: Vec<String>,
    pub body: ReportBody,
}

/// Rendering backend for a [`Report`].
pub trait RenderReport {
    /// Extension of the produced file, without the dot.
    fn file_extension(&self) -> &'static str;

    /// Render the report to its final byte form.
    fn render(&self, report: &Report) -> Vec<u8>;
}

/// Build a report over the currently filtered detections.
pub fn build_report(detections: &[&Detection], metrics: Option<&RunMetrics>) -> Report {
    let mut summary = Vec::new();
    if let Some(m) = metrics {
        summary.push(format!("Images: {}", m.num_images));
        summary.push(format!("Detections: {}", m.num_detections));
        summary.push(format!("Total time: {:.2} s", m.total_seconds));
        if let Some(avg) = m.avg_seconds_per_image {
            summary.push(format!("Avg / image: {:.2} s", avg));
        }
    }

    let body = if detections.is_empty() {
        ReportBody::Placeholder(NO_DETECTIONS_PLACEHOLDER.to_string())
    } else {
        ReportBody::Table(build_table(detections))
    };

    Report {
        title: REPORT_TITLE.to_string(),
        summary,
        body,
    }
}

fn build_table(detections: &[&Detection]) -> ReportTable {
    // Column headers follow the data's coordinate system. A document never
    // mixes the two; if one somehow does, geographic wins.
    let any_geo = detections
        .iter()
        .any(|d| matches!(d.bbox, BoundingBox::Geo(_)));

    let columns = if any_geo {
        vec!["Type", "Conf", "File", "Lon [min, max]", "Lat [min, max]"]
    } else {
        vec!["Type", "Conf", "File", "X [min, max]", "Y [min, max]"]
    };

    let rows = detections
        .iter()
        .map(|d| {
            let (h_range, v_range) = match &d.bbox {
                BoundingBox::Geo(b) => (
                    format!("{:.5}  –  {:.5}", b.min_lon, b.max_lon),
                    format!("{:.5}  –  {:.5}", b.min_lat, b.max_lat),
                ),
                BoundingBox::Pixel(b) => (
                    format!("{:.5}  –  {:.5}", b.x, b.x + b.w),
                    format!("{:.5}  –  {:.5}", b.y, b.y + b.h),
                ),
            };
            vec![
                d.label.clone(),
                format!("{:.1}%", d.confidence * 100.0),
                d.file.clone().unwrap_or_default(),
                h_range,
                v_range,
            ]
        })
        .collect();

    ReportTable { columns, rows }
}

/// Plain-text rendering backend, used by the CLI and as the reference
/// implementation for tests.
pub struct TextRenderer;

impl RenderReport for TextRenderer {
    fn file_extension(&self) -> &'static str {
        "txt"
    }

    fn render(&self, report: &Report) -> Vec<u8> {
        let mut out = String::new();
        out.push_str(&report.title);
        out.push('\n');

        if !report.summary.is_empty() {
            out.push('\n');
            for line in &report.summary {
                out.push_str(line);
                out.push('\n');
            }
        }

        out.push('\n');
        match &report.body {
            ReportBody::Placeholder(text) => {
                out.push_str(text);
                out.push('\n');
            }
            ReportBody::Table(table) => render_table(&mut out, table),
        }

        out.into_bytes()
    }
}

fn render_table(out: &mut String, table: &ReportTable) {
    let mut widths: Vec<usize> = table.columns.iter().map(|c| c.chars().count()).collect();
    for row in &table.rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let header: Vec<String> = table
        .columns
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{:<width$}", c, width = widths[i]))
        .collect();
    out.push_str(header.join("  ").trim_end());
    out.push('\n');

    for row in &table.rows {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
            .collect();
        out.push_str(cells.join("  ").trim_end());
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GeoBox, PixelBox};

    fn geo_det(id: &str, label: &str, confidence: f64) -> Detection {
        Detection::new(
            id,
            label,
            confidence,
            BoundingBox::Geo(GeoBox::new(4.30111, 51.88222, 4.31333, 51.89444)),
        )
        .with_file("scene_1.tif")
    }

    #[test]
    fn test_empty_filter_result_renders_placeholder() {
        let report = build_report(&[], None);

        assert_eq!(
            report.body,
            ReportBody::Placeholder(NO_DETECTIONS_PLACEHOLDER.to_string())
        );

        let text = String::from_utf8(TextRenderer.render(&report)).unwrap();
        assert!(text.contains(NO_DETECTIONS_PLACEHOLDER));
        assert!(!text.contains("Type"));
    }

    #[test]
    fn test_geo_table_columns_and_rows() {
        let det = geo_det("a-0", "ship", 0.914);
        let report = build_report(&[&det], None);

        let ReportBody::Table(table) = &report.body else {
            panic!("expected a table body");
        };
        assert_eq!(
            table.columns,
            ["Type", "Conf", "File", "Lon [min, max]", "Lat [min, max]"]
        );
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0][0], "ship");
        assert_eq!(table.rows[0][1], "91.4%");
        assert_eq!(table.rows[0][2], "scene_1.tif");
        assert_eq!(table.rows[0][3], "4.30111  –  4.31333");
        assert_eq!(table.rows[0][4], "51.88222  –  51.89444");
    }

    #[test]
    fn test_pixel_table_uses_pixel_columns() {
        let det = Detection::new(
            "d1",
            "car",
            0.5,
            BoundingBox::Pixel(PixelBox::new(10.0, 20.0, 5.0, 8.0)),
        );
        let report = build_report(&[&det], None);

        let ReportBody::Table(table) = &report.body else {
            panic!("expected a table body");
        };
        assert_eq!(
            table.columns,
            ["Type", "Conf", "File", "X [min, max]", "Y [min, max]"]
        );
        assert_eq!(table.rows[0][3], "10.00000  –  15.00000");
        assert_eq!(table.rows[0][4], "20.00000  –  28.00000");
    }

    #[test]
    fn test_metrics_summary_lines() {
        let metrics = RunMetrics {
            num_images: 15,
            num_detections: 342,
            total_seconds: 128.446,
            avg_seconds_per_image: Some(8.563),
        };
        let report = build_report(&[], Some(&metrics));

        assert_eq!(
            report.summary,
            [
                "Images: 15",
                "Detections: 342",
                "Total time: 128.45 s",
                "Avg / image: 8.56 s",
            ]
        );
    }

    #[test]
    fn test_null_average_is_omitted() {
        let metrics = RunMetrics {
            num_images: 0,
            num_detections: 0,
            total_seconds: 0.0,
            avg_seconds_per_image: None,
        };
        let report = build_report(&[], Some(&metrics));

        assert_eq!(report.summary.len(), 3);
        assert!(!report.summary.iter().any(|l| l.starts_with("Avg")));
    }

    #[test]
    fn test_text_renderer_includes_title_and_table() {
        let det = geo_det("a-0", "ship", 0.9);
        let report = build_report(&[&det], None);
        let text = String::from_utf8(TextRenderer.render(&report)).unwrap();

        assert!(text.starts_with(REPORT_TITLE));
        assert!(text.contains("Lon [min, max]"));
        assert!(text.contains("ship"));
    }
}
