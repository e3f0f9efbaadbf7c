//! Validated, immutable knowledge base.
//!
//! Bundles the vocabulary, rule base and treatment catalog. Loaded once at
//! start-up; any integrity failure is fatal.

use std::path::Path;
use std::sync::Arc;

use symptom_types::well_known;

use crate::builtin;
use crate::loader::discover_kb_files;
use crate::parser::KbParser;
use crate::rule_base::{RuleBase, RuleEntry};
use crate::treatment::{TreatmentCatalog, TreatmentEntry};
use crate::types::{KbError, KbFiles, KbResult};
use crate::vocabulary::{Vocabulary, VocabularyEntry};

/// The complete knowledge base.
///
/// # Example
///
/// ```
/// use symptom_kb::KnowledgeBase;
///
/// let kb = KnowledgeBase::builtin().unwrap();
/// assert!(kb.vocabulary().contains("fever"));
/// assert_eq!(kb.treatments().lookup("xyz"), None);
/// ```
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    vocabulary: Arc<Vocabulary>,
    rules: RuleBase,
    treatments: TreatmentCatalog,
}

impl KnowledgeBase {
    /// Assembles a knowledge base from a vocabulary and ordered entries.
    ///
    /// # Errors
    /// Fails on any rule error (see [`RuleBase::load`]), any empty treatment,
    /// or a treatment for a condition that no rule diagnoses.
    pub fn new(
        vocabulary: Vocabulary,
        rule_entries: Vec<RuleEntry>,
        treatment_entries: Vec<TreatmentEntry>,
    ) -> KbResult<Self> {
        let rules = RuleBase::load(rule_entries, &vocabulary)?;
        let treatments = TreatmentCatalog::new(treatment_entries)?;

        if let Some(orphan) = treatments
            .conditions()
            .find(|condition| !rules.contains_condition(condition))
        {
            return Err(KbError::OrphanTreatment {
                condition: orphan.to_string(),
            });
        }

        for condition in rules.conditions() {
            if treatments.lookup(condition.as_str()).is_none() {
                tracing::debug!(%condition, "condition has no treatment");
            }
        }

        tracing::info!(
            symptoms = vocabulary.len(),
            rules = rules.len(),
            treatments = treatments.treatment_count(),
            "knowledge base assembled"
        );

        Ok(Self {
            vocabulary: Arc::new(vocabulary),
            rules,
            treatments,
        })
    }

    /// Builds the shipped knowledge base.
    pub fn builtin() -> KbResult<Self> {
        let vocabulary = Vocabulary::from_entries(well_known::SYMPTOM_GROUPS.iter().flat_map(
            |(group, symptoms)| {
                symptoms.iter().map(move |symptom| VocabularyEntry {
                    symptom_id: symptom.to_string(),
                    group: Some(group.to_string()),
                })
            },
        ))?;

        let rules = builtin::RULES
            .iter()
            .map(|(condition, required)| RuleEntry::new(condition, required))
            .collect();

        let treatments = builtin::TREATMENTS
            .iter()
            .map(|(condition, text)| TreatmentEntry::new(condition, text))
            .collect();

        Self::new(vocabulary, rules, treatments)
    }

    /// Loads a knowledge base from discovered files.
    pub fn load(files: &KbFiles) -> KbResult<Self> {
        let missing = |file_type: &str| KbError::RequiredFileMissing {
            file_type: file_type.to_string(),
            directory: String::from("<unspecified>"),
        };

        let vocabulary_path = files.vocabulary_file.as_ref().ok_or_else(|| missing("Vocabulary"))?;
        let rules_path = files.rules_file.as_ref().ok_or_else(|| missing("Rules"))?;
        let treatments_path = files.treatments_file.as_ref().ok_or_else(|| missing("Treatments"))?;

        let vocabulary_entries =
            KbParser::<_, VocabularyEntry>::from_path(vocabulary_path)?.parse_all()?;
        let rule_entries = KbParser::<_, RuleEntry>::from_path(rules_path)?.parse_all()?;
        let treatment_entries =
            KbParser::<_, TreatmentEntry>::from_path(treatments_path)?.parse_all()?;

        tracing::info!(
            vocabulary = %vocabulary_path.display(),
            rules = %rules_path.display(),
            treatments = %treatments_path.display(),
            "parsed knowledge base files"
        );

        Self::new(
            Vocabulary::from_entries(vocabulary_entries)?,
            rule_entries,
            treatment_entries,
        )
    }

    /// Discovers and loads the knowledge base files in a directory.
    pub fn load_dir<P: AsRef<Path>>(path: P) -> KbResult<Self> {
        let files = discover_kb_files(path)?;
        Self::load(&files)
    }

    /// Returns the vocabulary.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Returns a shared handle to the vocabulary, for fact stores.
    pub fn shared_vocabulary(&self) -> Arc<Vocabulary> {
        Arc::clone(&self.vocabulary)
    }

    /// Returns the rule base.
    pub fn rules(&self) -> &RuleBase {
        &self.rules
    }

    /// Returns the treatment catalog.
    pub fn treatments(&self) -> &TreatmentCatalog {
        &self.treatments
    }
}
