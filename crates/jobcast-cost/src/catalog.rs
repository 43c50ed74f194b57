//! Closed catalog of model families, partitioned into cost tiers.
//!
//! Tier membership drives a runtime multiplier in the cost model. Family
//! names not listed here are a validation failure everywhere, never a
//! silent simple-tier fallback.

use crate::types::ModelTier;

/// Heavy-tier families: large neural architectures.
pub const HEAVY: &[&str] = &[
    "resnet50",
    "resnet101",
    "vgg16",
    "vgg19",
    "efficientnet",
    "vit-base",
    "bert-base",
    "bert-large",
    "gpt2",
    "gpt2-medium",
    "lstm",
    "gru",
    "yolo",
];

/// Medium-tier families: mid-weight models.
pub const MEDIUM: &[&str] = &[
    "mobilenet",
    "xgboost",
    "lightgbm",
    "catboost",
    "random_forest",
];

/// Simple-tier families: classical models.
pub const SIMPLE: &[&str] = &[
    "linear_regression",
    "polynomial_regression",
    "logistic_regression",
    "support_vector_machine (svm)",
    "k-nearest_neighbors (k-nn)",
    "naive_bayes",
    "k-means",
    "principal_component_analysis (pca)",
];

/// Resolves a model family name to its tier.
///
/// Returns `None` for names outside the catalog.
pub fn tier_of(family: &str) -> Option<ModelTier> {
    if HEAVY.contains(&family) {
        Some(ModelTier::Heavy)
    } else if MEDIUM.contains(&family) {
        Some(ModelTier::Medium)
    } else if SIMPLE.contains(&family) {
        Some(ModelTier::Simple)
    } else {
        None
    }
}

/// All catalog families in tier order, for uniform sampling.
pub fn all_families() -> impl Iterator<Item = &'static str> {
    HEAVY
        .iter()
        .chain(MEDIUM.iter())
        .chain(SIMPLE.iter())
        .copied()
}

/// Number of families in the catalog.
pub fn len() -> usize {
    HEAVY.len() + MEDIUM.len() + SIMPLE.len()
}
