//! Error and file-set types for knowledge base processing.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or assembling a knowledge base.
///
/// Every variant is fatal: a malformed knowledge base must stop start-up
/// rather than serve wrong diagnoses.
#[derive(Error, Debug)]
pub enum KbError {
    /// I/O error reading a knowledge base file.
    #[error("IO error reading knowledge base file: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error.
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// File not found.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Directory not found.
    #[error("Directory not found: {path}")]
    DirectoryNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Required file missing from the knowledge base directory.
    #[error("Required knowledge base file not found: {file_type} in {directory}")]
    RequiredFileMissing {
        /// The type of file that was missing.
        file_type: String,
        /// The directory that was searched.
        directory: String,
    },

    /// Invalid header - column count mismatch.
    #[error("Invalid header: expected {expected} columns, found {found}")]
    InvalidHeader {
        /// Expected column count.
        expected: usize,
        /// Found column count.
        found: usize,
    },

    /// Unexpected column name.
    #[error("Unexpected column '{found}' at position {position}, expected '{expected}'")]
    UnexpectedColumn {
        /// The column position.
        position: usize,
        /// Expected column name.
        expected: String,
        /// Found column name.
        found: String,
    },

    /// A data row has the wrong number of columns.
    #[error("Invalid record at line {line}: expected {expected} columns, found {found}")]
    InvalidRecord {
        /// 1-based line number in the file.
        line: u64,
        /// Expected column count.
        expected: usize,
        /// Found column count.
        found: usize,
    },

    /// A vocabulary entry is not a valid symptom identifier.
    #[error("Invalid symptom identifier in vocabulary: '{value}'")]
    InvalidSymptom {
        /// The rejected value.
        value: String,
    },

    /// A rule has an empty condition identifier.
    #[error("Rule #{position} has an empty condition identifier")]
    EmptyConditionId {
        /// Declaration position of the rule.
        position: usize,
    },

    /// A rule requires a symptom outside the vocabulary.
    #[error("Rule #{position} for '{condition}' requires unknown symptom '{symptom}'")]
    UnknownRuleSymptom {
        /// The rule's condition.
        condition: String,
        /// The symptom not found in the vocabulary.
        symptom: String,
        /// Declaration position of the rule.
        position: usize,
    },

    /// A rule requires no symptoms and would match an empty fact set.
    #[error("Rule #{position} for '{condition}' has no required symptoms")]
    EmptyRule {
        /// The rule's condition.
        condition: String,
        /// Declaration position of the rule.
        position: usize,
    },

    /// A treatment is registered for a condition no rule can diagnose.
    #[error("Treatment registered for '{condition}', which no rule diagnoses")]
    OrphanTreatment {
        /// The condition referenced by the treatment row.
        condition: String,
    },

    /// A treatment row has no text or no condition.
    #[error("Treatment #{position} for '{condition}' is empty")]
    EmptyTreatment {
        /// The condition referenced by the treatment row.
        condition: String,
        /// Position of the treatment row.
        position: usize,
    },
}

/// Result type for knowledge base operations.
pub type KbResult<T> = Result<T, KbError>;

/// A symptom that was asserted but is not in the vocabulary.
///
/// Non-fatal: the symptom is dropped and the request continues.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown symptom: '{symptom}'")]
pub struct UnknownSymptom {
    /// The identifier as supplied by the caller.
    pub symptom: String,
}

/// Discovered files in a knowledge base directory.
#[derive(Debug, Clone, Default)]
pub struct KbFiles {
    /// Path to the vocabulary file.
    pub vocabulary_file: Option<PathBuf>,
    /// Path to the rule file.
    pub rules_file: Option<PathBuf>,
    /// Path to the treatment file.
    pub treatments_file: Option<PathBuf>,
}

impl KbFiles {
    /// Creates a new empty KbFiles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if all required files are present.
    pub fn has_required_files(&self) -> bool {
        self.vocabulary_file.is_some() && self.rules_file.is_some() && self.treatments_file.is_some()
    }

    /// Returns a list of missing required files.
    pub fn missing_files(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.vocabulary_file.is_none() {
            missing.push("Vocabulary");
        }
        if self.rules_file.is_none() {
            missing.push("Rules");
        }
        if self.treatments_file.is_none() {
            missing.push("Treatments");
        }
        missing
    }
}
