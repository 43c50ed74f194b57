//! Prediction service for ML job runtime estimates.
//!
//! Validates inbound job descriptors, assembles the feature row in the
//! exact column order the fitted predictor was trained on, delegates, and
//! returns a single scalar. The predictor itself is an injected
//! collaborator behind the [`Predictor`] trait; model fitting and artifact
//! persistence stay outside this crate.

pub mod error;
pub mod http;
pub mod predictor;
pub mod request;
pub mod service;

pub use error::{Result, ServiceError};
pub use http::router;
pub use predictor::{CostModelPredictor, FeatureRow, Predictor, PredictorError};
pub use request::PredictRequest;
pub use service::PredictionService;
