//! Categorical Naive Bayes on the 14-row "buys computer" table.
//!
//! Trains on every row, prints the learned probability entries, predicts the
//! same rows back and reports the confusion counts.
//!
//! Run with `RUST_LOG=categorical_nb=debug` to also see the per-entry events
//! emitted during training.

use categorical_nb::datasets::buys_computer;
use categorical_nb::metrics::confusion;
use categorical_nb::prelude::*;
use categorical_nb::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "categorical_nb=info,buys_computer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let data = buys_computer()?;
    info!(
        samples = data.features.n_rows(),
        features = data.features.n_features(),
        "loaded buys_computer dataset"
    );

    let mut model = CategoricalNB::new().with_schema(data.schema.clone());
    model.fit_with_observer(&data.features, &data.labels, |entry| {
        println!("{entry}");
    })?;

    let predictions = model.predict(&data.features)?;
    let cm = confusion(&predictions, &data.labels);

    println!("\nFinished Predictions");
    println!(
        "True Positive : {}, True Negative : {}, False Positive : {}, False Negative : {}",
        cm.true_positive, cm.true_negative, cm.false_positive, cm.false_negative
    );
    println!(
        "Accuracy : {:.6}, Precision : {:.6}, Recall : {:.6}",
        cm.accuracy(),
        cm.precision(),
        cm.recall()
    );

    Ok(())
}
