//! # symptom-service
//!
//! HTTP service for symptom diagnosis queries.
//!
//! Exposes the inference engine of the `symptom-kb` crate as a small JSON
//! API. Every request diagnoses on its own fact store, so the engine is
//! shared between connections without locking.
//!
//! ## Endpoints
//!
//! - `GET /health`
//! - `GET /symptoms?q=term` - vocabulary by display group
//! - `GET /conditions` - diagnosable conditions
//! - `POST /diagnose` - body `{"symptoms": ["fever", ...]}`

#![warn(missing_docs)]

pub mod config;
mod server;

pub use config::ServiceConfig;
pub use server::{
    ConditionInfo, ConditionsResponse, DiagnoseRequest, DiagnoseResponse, DiagnosisServer,
    HealthResponse, SymptomGroup, SymptomInfo, SymptomQuery, SymptomsResponse,
};
