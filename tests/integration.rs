//! Integration tests for the categorical Naive Bayes crate.
//!
//! These tests verify end-to-end workflows combining multiple components.

use std::sync::Arc;
use std::thread;

use categorical_nb::datasets::buys_computer;
use categorical_nb::metrics::confusion;
use categorical_nb::prelude::*;

#[test]
fn test_buys_computer_workflow() {
    let data = buys_computer().expect("bundled data");

    let mut model = CategoricalNB::new().with_schema(data.schema.clone());
    let mut printed = Vec::new();
    model
        .fit_with_observer(&data.features, &data.labels, |entry| {
            printed.push(entry.to_string())
        })
        .expect("Failed to fit model");
    assert_eq!(printed.len(), 10);
    assert!(printed.iter().any(|line| line.starts_with("Class Income = High, ")));

    let predictions = model.predict(&data.features).expect("fitted");
    let cm = confusion(&predictions, &data.labels);
    assert_eq!(cm.true_positive, 9);
    assert_eq!(cm.true_negative, 4);
    assert_eq!(cm.false_positive, 1);
    assert_eq!(cm.false_negative, 0);
    assert!((cm.precision() - 0.9).abs() < 1e-12);
    assert!((cm.recall() - 1.0).abs() < 1e-12);
}

#[test]
fn test_reference_rows() {
    let data = buys_computer().expect("bundled data");
    let mut model = CategoricalNB::new();
    model.fit(&data.features, &data.labels).expect("fit");

    let query = FeatureMatrix::from_rows(&[[2, 1, 0, 1], [0, 2, 0, 1]]).expect("valid");
    assert_eq!(model.predict(&query).expect("fitted"), vec![true, false]);
}

#[test]
fn test_unseen_income_level() {
    let data = buys_computer().expect("bundled data");

    // Drop every row with Income = High.
    let (rows, labels): (Vec<Vec<FeatureCode>>, Vec<bool>) = data
        .features
        .rows()
        .zip(&data.labels)
        .filter(|(row, _)| row[1] != 2)
        .map(|(row, &label)| (row.to_vec(), label))
        .unzip();
    let x = FeatureMatrix::from_rows(&rows).expect("valid");

    let mut model = CategoricalNB::new();
    model.fit(&x, &labels).expect("both classes still present");
    assert!(model.table().expect("fitted").get(1, 2).is_none());

    let query = FeatureMatrix::from_rows(&[[1, 2, 1, 0]]).expect("valid");
    assert_eq!(
        model.predict(&query),
        Err(NbError::UnseenFeatureValue {
            feature: 1,
            value: 2
        })
    );
}

#[test]
fn test_single_class_training() {
    let data = buys_computer().expect("bundled data");
    let labels = vec![true; data.labels.len()];

    let mut model = CategoricalNB::new();
    let err = model.fit(&data.features, &labels).expect_err("no negatives");
    assert_eq!(err, NbError::ZeroClassCount { label: false });
    assert!(err.to_string().contains("Division by zero"));
    assert!(!model.is_fitted());
}

#[test]
fn test_ragged_input_rejected_at_boundary() {
    let rows = vec![vec![0, 1, 0, 1], vec![1, 1, 0]];
    assert!(matches!(
        FeatureMatrix::from_rows(&rows),
        Err(NbError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_smoothing_is_opt_in() {
    let data = buys_computer().expect("bundled data");
    let mut plain = CategoricalNB::new();
    plain.fit(&data.features, &data.labels).expect("fit");
    let plain_table = plain.table().expect("fitted");
    assert_eq!(plain_table.alpha(), 0.0);
    assert_eq!(plain_table.lookup(0, 1).expect("seen").negative_prob(), 0.0);

    let config = CategoricalNBConfig::from_json(r#"{"alpha": 1.0}"#).expect("valid");
    let mut smoothed = CategoricalNB::from_config(config).expect("valid");
    smoothed.fit(&data.features, &data.labels).expect("fit");
    let smoothed_table = smoothed.table().expect("fitted");
    // (0 + 1) / (5 + 1 * 3)
    assert!((smoothed_table.lookup(0, 1).expect("seen").negative_prob() - 0.125).abs() < 1e-12);
}

#[test]
fn test_concurrent_predictions_share_table() {
    let data = buys_computer().expect("bundled data");
    let mut model = CategoricalNB::new();
    model.fit(&data.features, &data.labels).expect("fit");

    let table: Arc<ProbabilityTable> = model.table().expect("fitted");
    let features = Arc::new(data.features.clone());
    let expected = model.predict(&data.features).expect("fitted");

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let table = Arc::clone(&table);
            let features = Arc::clone(&features);
            thread::spawn(move || table.predict(&features))
        })
        .collect();

    for handle in handles {
        let predictions = handle.join().expect("thread panicked").expect("fitted");
        assert_eq!(predictions, expected);
    }
}

#[test]
fn test_classifier_trait_object() {
    let data = buys_computer().expect("bundled data");
    let mut model: Box<dyn Classifier> = Box::new(CategoricalNB::new());
    model.fit(&data.features, &data.labels).expect("fit");
    let score = model.score(&data.features, &data.labels).expect("fitted");
    assert!((score - accuracy(&model.predict(&data.features).expect("fitted"), &data.labels)).abs() < 1e-12);
}
