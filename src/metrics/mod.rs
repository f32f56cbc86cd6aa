//! Evaluation metrics for binary classifiers.

pub mod classification;

pub use classification::{accuracy, confusion, BinaryConfusion};
