//! # symptom-kb
//!
//! Knowledge base and first-match inference engine for symptom diagnosis.
//!
//! The knowledge base is loaded once and is immutable afterwards: a closed
//! [`Vocabulary`], an ordered [`RuleBase`] and a [`TreatmentCatalog`]. Each
//! request asserts its symptoms into its own [`FactStore`] and asks the
//! [`InferenceEngine`] for a diagnosis.
//!
//! ## Usage
//!
//! ```rust
//! use symptom_kb::{InferenceEngine, KnowledgeBase};
//!
//! let engine = InferenceEngine::new(KnowledgeBase::builtin()?);
//!
//! let diagnosis = engine.diagnose_symptoms(["fever", "body_ache", "fatigue", "chills"]);
//! assert_eq!(diagnosis.result.condition().map(|c| c.as_str()), Some("flu"));
//! assert!(diagnosis.result.treatment().is_some());
//! # Ok::<(), symptom_kb::KbError>(())
//! ```
//!
//! ## Loading from files
//!
//! A knowledge base directory holds three tab-delimited files with headers:
//! `vocabulary.tsv` (`symptomId`, `group`), `rules.tsv` (`conditionId`,
//! `requiredSymptoms`) and `treatments.tsv` (`conditionId`, `treatment`).
//! Row order in `rules.tsv` is the declaration order.
//!
//! ```ignore
//! let kb = KnowledgeBase::load_dir("data/kb")?;
//! ```
//!
//! ## Features
//!
//! - `parallel` (default): [`InferenceEngine::diagnose_batch`] uses rayon.

#![warn(missing_docs)]

mod builtin;
mod engine;
mod facts;
mod knowledge_base;
mod loader;
mod parser;
mod rule_base;
mod session;
mod treatment;
mod types;
mod vocabulary;

pub use engine::{Diagnosis, InferenceEngine};
pub use facts::FactStore;
pub use knowledge_base::KnowledgeBase;
pub use loader::discover_kb_files;
pub use parser::{parse, KbParser, KbRecord};
pub use rule_base::{RuleBase, RuleEntry};
pub use session::SharedSession;
pub use treatment::{TreatmentCatalog, TreatmentEntry};
pub use types::{KbError, KbFiles, KbResult, UnknownSymptom};
pub use vocabulary::{Vocabulary, VocabularyEntry};

// Re-export symptom-types for convenience
pub use symptom_types;
