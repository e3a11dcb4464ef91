//! Integration tests for the export pipeline with mock collaborators.

mod mocks;

use mocks::{FailingEncoder, FailingRasterizer, MockEncoder, MockRasterizer};
use resume_export::{
    ContactRecord, ExportError, Exporter, RasterOptions, ValidatedRecord, EXPORT_FAILURE_ALERT,
};
use std::sync::Arc;

fn validated_record(name: &str) -> ValidatedRecord {
    ValidatedRecord::new(ContactRecord {
        name: name.to_string(),
        email: "johndoe@gmail.com".to_string(),
        phone: "1234567890".to_string(),
        position: "Junior Front end Developer".to_string(),
        description: "First line\nSecond line".to_string(),
    })
    .unwrap()
}

#[tokio::test]
async fn export_produces_artifact_named_after_the_record() {
    let rasterizer = MockRasterizer::new(800, 1000);
    let encoder = MockEncoder::new();
    let exporter = Exporter::new(Arc::new(rasterizer), Arc::new(encoder));

    let artifact = exporter.export(&validated_record("John Doe")).await.unwrap();

    assert_eq!(artifact.filename, "John Doe.pdf");
    assert_eq!(artifact.bytes, b"%PDF-mock".to_vec());
    assert_eq!(artifact.page_count, 1);
}

#[tokio::test]
async fn rasterizer_receives_default_options() {
    let rasterizer = MockRasterizer::new(800, 1000);
    let encoder = MockEncoder::new();
    let exporter = Exporter::new(Arc::new(rasterizer.clone()), Arc::new(encoder));

    exporter.export(&validated_record("John Doe")).await.unwrap();

    let options = rasterizer.last_options().unwrap();
    assert_eq!(options.scale, 2);
    assert_eq!(options.background_color, "#ffffff");
    assert!(options.allow_cross_origin);
}

#[tokio::test]
async fn rasterizer_receives_the_composed_layout() {
    let rasterizer = MockRasterizer::new(800, 1000);
    let encoder = MockEncoder::new();
    let exporter = Exporter::new(Arc::new(rasterizer.clone()), Arc::new(encoder));

    exporter.export(&validated_record("John Doe")).await.unwrap();

    let layout = rasterizer.last_layout().unwrap();
    assert_eq!(layout.heading, "John Doe");
    // Phone row carries the normalized display form
    assert_eq!(layout.rows[2].value, "+123 456 7890");
    assert_eq!(layout.description, "First line\nSecond line");
}

#[tokio::test]
async fn encoder_receives_one_placement_per_page() {
    // 210 px wide keeps the scale at 1:1, so 740 px -> 740 units -> 3 pages
    let rasterizer = MockRasterizer::new(210, 740);
    let encoder = MockEncoder::new();
    let exporter = Exporter::new(Arc::new(rasterizer), Arc::new(encoder.clone()));

    let artifact = exporter.export(&validated_record("John Doe")).await.unwrap();
    assert_eq!(artifact.page_count, 3);

    let plan = encoder.last_plan().unwrap();
    assert_eq!(plan.page_count(), 3);
    let offsets: Vec<f64> = plan.placements.iter().map(|p| p.offset_y).collect();
    assert_eq!(offsets, vec![0.0, -295.0, -590.0]);
}

#[test]
fn blank_name_falls_back_to_the_default_filename() {
    // A validated record never has a blank name, so the fallback is only
    // reachable through the filename helper itself.
    assert_eq!(resume_export::export::export_filename(""), "resume.pdf");
    assert_eq!(resume_export::export::export_filename("  "), "resume.pdf");
    assert_eq!(
        resume_export::export::export_filename("John Doe"),
        "John Doe.pdf"
    );
}

#[tokio::test]
async fn rasterizer_failure_surfaces_as_export_error() {
    let encoder = MockEncoder::new();
    let exporter = Exporter::new(Arc::new(FailingRasterizer), Arc::new(encoder.clone()));

    let err = exporter
        .export(&validated_record("John Doe"))
        .await
        .unwrap_err();

    assert!(matches!(err, ExportError::Rasterize(_)));
    // The encoder is never reached and no artifact exists
    assert_eq!(encoder.call_count(), 0);
    assert_eq!(exporter.metrics().export_failures_total(), 1);
}

#[tokio::test]
async fn encoder_failure_surfaces_as_export_error() {
    let rasterizer = MockRasterizer::new(800, 1000);
    let exporter = Exporter::new(Arc::new(rasterizer), Arc::new(FailingEncoder));

    let err = exporter
        .export(&validated_record("John Doe"))
        .await
        .unwrap_err();

    assert!(matches!(err, ExportError::Encode(_)));
    assert_eq!(exporter.metrics().export_failures_total(), 1);
}

#[tokio::test]
async fn empty_bitmap_is_rejected_before_pagination() {
    let rasterizer = MockRasterizer::new(0, 1000);
    let encoder = MockEncoder::new();
    let exporter = Exporter::new(Arc::new(rasterizer), Arc::new(encoder.clone()));

    let err = exporter
        .export(&validated_record("John Doe"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ExportError::EmptyBitmap {
            width_px: 0,
            height_px: 1000
        }
    ));
    assert_eq!(encoder.call_count(), 0);
}

#[tokio::test]
async fn exports_are_serialized_over_the_shared_surface() {
    let rasterizer = MockRasterizer::new(800, 1000);
    let encoder = MockEncoder::new();
    let exporter = Arc::new(Exporter::new(
        Arc::new(rasterizer.clone()),
        Arc::new(encoder.clone()),
    ));

    let record = validated_record("John Doe");
    let mut handles = Vec::new();
    for _ in 0..4 {
        let exporter = exporter.clone();
        let record = record.clone();
        handles.push(tokio::spawn(async move {
            exporter.export(&record).await.unwrap()
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(rasterizer.call_count(), 4);
    assert_eq!(encoder.call_count(), 4);
    assert_eq!(exporter.metrics().exports_total(), 4);
    assert_eq!(exporter.metrics().export_failures_total(), 0);
}

#[tokio::test]
async fn custom_scale_is_passed_through() {
    let rasterizer = MockRasterizer::new(800, 1000);
    let encoder = MockEncoder::new();
    let exporter = Exporter::with_options(
        Arc::new(rasterizer.clone()),
        Arc::new(encoder),
        RasterOptions::with_scale(3),
    );

    exporter.export(&validated_record("John Doe")).await.unwrap();
    assert_eq!(rasterizer.last_options().unwrap().scale, 3);
}

#[tokio::test]
async fn successful_export_counts_pages_in_metrics() {
    let rasterizer = MockRasterizer::new(210, 740);
    let encoder = MockEncoder::new();
    let exporter = Exporter::new(Arc::new(rasterizer), Arc::new(encoder));

    exporter.export(&validated_record("John Doe")).await.unwrap();

    assert_eq!(exporter.metrics().exports_total(), 1);
    assert_eq!(exporter.metrics().pages_emitted_total(), 3);
}

#[test]
fn the_generic_alert_is_stable() {
    assert_eq!(EXPORT_FAILURE_ALERT, "Error generating PDF. Please try again.");
}
