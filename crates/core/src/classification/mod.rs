//! Classification module - fixed/variable expense partitioning.

mod classification_model;
mod classification_service;
mod classification_traits;

#[cfg(test)]
mod classification_service_tests;

pub use classification_model::{ClassificationResult, MatchTolerance};
pub use classification_service::ExpenseClassifier;
pub use classification_traits::ExpenseClassifierTrait;
