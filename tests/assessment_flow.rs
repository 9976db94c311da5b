//! End-to-end assessment flow through the application handlers.
//!
//! Rates, scores, exports and saves assessments against the real CSV
//! history store in a temporary directory.

use std::collections::BTreeMap;
use std::sync::Arc;

use tempfile::TempDir;

use maturity_assessment::adapters::history::CsvHistoryStore;
use maturity_assessment::adapters::pdf::PdfReportExporter;
use maturity_assessment::application::{
    AssessRatingsCommand, AssessRatingsHandler, ExportHistoryHandler, ExportReportHandler,
    ListHistoryHandler, SaveHistoryCommand, SaveHistoryHandler,
};
use maturity_assessment::domain::questionnaire::Questionnaire;
use maturity_assessment::domain::scoring::Assessment;
use maturity_assessment::ports::HistoryStore;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn assess(levels: &[(&str, [i32; 6])]) -> Assessment {
    let ratings: BTreeMap<String, Vec<i32>> = levels
        .iter()
        .map(|(dimension, values)| (dimension.to_string(), values.to_vec()))
        .collect();
    AssessRatingsHandler::new(Arc::new(Questionnaire::standard().clone()))
        .handle(AssessRatingsCommand::new(ratings))
        .unwrap()
}

fn csv_store(temp_dir: &TempDir) -> Arc<CsvHistoryStore> {
    Arc::new(CsvHistoryStore::new(temp_dir.path().join("dma_history.csv")))
}

// =============================================================================
// Tests
// =============================================================================

#[test]
fn mixed_ratings_score_each_dimension() {
    let assessment = assess(&[
        ("People", [5, 5, 5, 5, 5, 1]),
        ("Process", [1, 1, 1, 1, 1, 1]),
        ("Technology", [5, 5, 5, 5, 5, 5]),
        ("Data", [2, 3, 2, 3, 2, 3]),
    ]);

    let scores: Vec<_> = assessment
        .dimensions
        .iter()
        .map(|d| (d.dimension.as_str(), d.score.to_string()))
        .collect();
    assert_eq!(
        scores,
        vec![
            ("People", "4.3 (Advanced)".to_string()),
            ("Process", "1.0 (Initial)".to_string()),
            ("Technology", "5.0 (Leading)".to_string()),
            ("Data", "2.5 (Established)".to_string()),
        ]
    );
    // (4.3 + 1.0 + 5.0 + 2.5) / 4 = 3.2
    assert_eq!(assessment.overall.to_string(), "3.2 (Established)");
}

#[test]
fn report_export_renders_pdf() {
    let assessment = assess(&[]);

    let exported = ExportReportHandler::new(Arc::new(PdfReportExporter::new()))
        .handle(&assessment)
        .unwrap();

    assert!(exported.content.starts_with(b"%PDF-"));
    assert_eq!(exported.filename, "digital_maturity_assessment_report.pdf");
}

#[tokio::test]
async fn saved_assessments_read_back_in_order() {
    let temp_dir = TempDir::new().unwrap();
    let store = csv_store(&temp_dir);
    let save = SaveHistoryHandler::new(store.clone());

    let mut saved = Vec::new();
    for (i, level) in (1..=5).enumerate() {
        let record = save
            .handle(SaveHistoryCommand {
                assessment: assess(&[("People", [level; 6])]),
                user: Some(format!("assessor-{}", i)),
            })
            .await
            .unwrap();
        saved.push(record);
    }

    let listed = ListHistoryHandler::new(store.clone()).handle().await.unwrap();
    assert_eq!(listed, saved);
    assert_eq!(listed[0].dimension_scores()[0].score.to_string(), "1.0");
    assert_eq!(listed[4].dimension_scores()[0].score.to_string(), "5.0");
}

#[tokio::test]
async fn earlier_records_are_never_modified() {
    let temp_dir = TempDir::new().unwrap();
    let store = csv_store(&temp_dir);
    let save = SaveHistoryHandler::new(store.clone());

    save.handle(SaveHistoryCommand {
        assessment: assess(&[]),
        user: None,
    })
    .await
    .unwrap();
    let first = store.read_all().await.unwrap();

    save.handle(SaveHistoryCommand {
        assessment: assess(&[("Data", [5; 6])]),
        user: Some("Lin".to_string()),
    })
    .await
    .unwrap();
    let both = store.read_all().await.unwrap();

    assert_eq!(both.len(), 2);
    assert_eq!(both[0], first[0]);
    assert_eq!(both[0].user(), "Anonymous");
}

#[tokio::test]
async fn exported_history_matches_file() {
    let temp_dir = TempDir::new().unwrap();
    let store = csv_store(&temp_dir);
    let export = ExportHistoryHandler::new(store.clone());

    assert!(export.handle().await.is_err());

    SaveHistoryHandler::new(store.clone())
        .handle(SaveHistoryCommand {
            assessment: assess(&[]),
            user: Some("Ada".to_string()),
        })
        .await
        .unwrap();

    let exported = export.handle().await.unwrap();
    assert_eq!(exported.content, std::fs::read(store.path()).unwrap());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_saves_keep_history_readable() {
    let temp_dir = TempDir::new().unwrap();
    let store = csv_store(&temp_dir);
    let save = Arc::new(SaveHistoryHandler::new(store.clone()));

    let tasks: Vec<_> = (0..8)
        .map(|i| {
            let save = save.clone();
            tokio::spawn(async move {
                save.handle(SaveHistoryCommand {
                    assessment: assess(&[]),
                    user: Some(format!("assessor-{}", i)),
                })
                .await
            })
        })
        .collect();
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    assert_eq!(store.read_all().await.unwrap().len(), 8);
}
