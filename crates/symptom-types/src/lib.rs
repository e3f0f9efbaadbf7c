//! # symptom-types
//!
//! Type definitions for rule-based symptom diagnosis.
//!
//! This crate provides the leaf data model shared by the knowledge base,
//! the inference engine and anything presenting their results: symptom and
//! condition identifiers, conjunctive rules, and the diagnosis outcome.
//!
//! ## Features
//!
//! - `serde` (default): Enables serialization/deserialization support via serde.
//!   Disable this feature for zero-dependency usage.
//!
//! ## Usage
//!
//! ```rust
//! use symptom_types::{ConditionId, DiagnosisResult, Symptom};
//! use symptom_types::well_known;
//!
//! let fever = Symptom::new(well_known::FEVER).unwrap();
//! assert_eq!(fever.display_name(), "Fever");
//!
//! let result = DiagnosisResult::Match {
//!     condition: ConditionId::new(well_known::FLU).unwrap(),
//!     treatment: None,
//! };
//! assert!(result.is_match());
//! ```
//!
//! ## Without Serde
//!
//! ```toml
//! [dependencies]
//! symptom-types = { version = "0.1", default-features = false }
//! ```

#![warn(missing_docs)]

mod diagnosis;
mod identifier;
mod rule;
pub mod well_known;

// Re-export all public types at crate root
pub use diagnosis::DiagnosisResult;
pub use identifier::{ConditionId, InvalidIdentifier, Symptom};
pub use rule::Rule;
