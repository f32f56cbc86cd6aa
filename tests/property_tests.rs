//! Property-based tests using proptest.
//!
//! These tests verify invariants of table construction and scoring.

use categorical_nb::prelude::*;
use proptest::prelude::*;

// Rows of `n_features` codes in 0..4, each with a label; both labels present.
fn dataset_strategy() -> impl Strategy<Value = (FeatureMatrix, Vec<bool>)> {
    (1usize..5, 2usize..40).prop_flat_map(|(n_features, n_samples)| {
        (
            proptest::collection::vec(0u32..4, n_features * n_samples),
            proptest::collection::vec(any::<bool>(), n_samples - 2),
        )
            .prop_map(move |(codes, mut labels)| {
                labels.push(true);
                labels.push(false);
                let x = FeatureMatrix::from_vec(n_samples, n_features, codes)
                    .expect("Test data should be valid");
                (x, labels)
            })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn base_rates_sum_to_one((x, y) in dataset_strategy()) {
        let mut model = CategoricalNB::new().with_entry_logging(false);
        model.fit(&x, &y).expect("both classes present");
        let table = model.table().expect("fitted");

        prop_assert!((table.positive_prior() + table.negative_prior() - 1.0).abs() < 1e-12);
        prop_assert_eq!(table.positive_count() + table.negative_count(), table.count());
        prop_assert_eq!(table.count(), y.len());
    }

    #[test]
    fn per_feature_counts_partition_classes((x, y) in dataset_strategy()) {
        let mut model = CategoricalNB::new().with_entry_logging(false);
        model.fit(&x, &y).expect("both classes present");
        let table = model.table().expect("fitted");

        for feature in 0..x.n_features() {
            let mut pos = 0;
            let mut neg = 0;
            let mut pos_prob = 0.0;
            let mut neg_prob = 0.0;
            for entry in table.entries().filter(|e| e.feature() == feature) {
                pos += entry.positive_count();
                neg += entry.negative_count();
                pos_prob += entry.positive_prob();
                neg_prob += entry.negative_prob();
            }
            prop_assert_eq!(pos, table.positive_count());
            prop_assert_eq!(neg, table.negative_count());
            prop_assert!((pos_prob - 1.0).abs() < 1e-9);
            prop_assert!((neg_prob - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn one_entry_per_observed_level((x, y) in dataset_strategy()) {
        let mut model = CategoricalNB::new().with_entry_logging(false);
        model.fit(&x, &y).expect("both classes present");
        let table = model.table().expect("fitted");

        for feature in 0..x.n_features() {
            let mut observed = x.column(feature);
            observed.sort_unstable();
            observed.dedup();
            prop_assert_eq!(table.levels(feature), observed);
        }
    }

    #[test]
    fn refit_yields_identical_table((x, y) in dataset_strategy()) {
        let mut model = CategoricalNB::new().with_entry_logging(false);
        model.fit(&x, &y).expect("fit");
        let first = model.table().expect("fitted");
        model.fit(&x, &y).expect("refit");
        let second = model.table().expect("fitted");
        prop_assert_eq!(&*first, &*second);
    }

    #[test]
    fn predict_is_deterministic((x, y) in dataset_strategy()) {
        let mut model = CategoricalNB::new().with_entry_logging(false);
        model.fit(&x, &y).expect("fit");

        let first = model.predict(&x).expect("training rows are all seen");
        let second = model.predict(&x).expect("training rows are all seen");
        prop_assert_eq!(first.len(), x.n_rows());
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&first, &model.predict_par(&x).expect("fitted"));
    }

    #[test]
    fn label_is_strict_comparison((x, y) in dataset_strategy()) {
        let mut model = CategoricalNB::new().with_entry_logging(false);
        model.fit(&x, &y).expect("fit");
        let predictions = model.predict(&x).expect("fitted");

        for (row, predicted) in x.rows().zip(predictions) {
            let scores = model.posterior(row).expect("seen");
            prop_assert_eq!(predicted, scores.positive > scores.negative);
        }
    }

    #[test]
    fn smoothed_probabilities_are_positive((x, y) in dataset_strategy(), alpha in 0.01f64..5.0) {
        let mut model = CategoricalNB::new().with_alpha(alpha).with_entry_logging(false);
        model.fit(&x, &y).expect("fit");
        let table = model.table().expect("fitted");
        for entry in table.entries() {
            prop_assert!(entry.positive_prob() > 0.0 && entry.positive_prob() < 1.0 + 1e-12);
            prop_assert!(entry.negative_prob() > 0.0 && entry.negative_prob() < 1.0 + 1e-12);
        }
    }
}
