//! Closed symptom vocabulary.
//!
//! Parses `vocabulary.tsv` files and answers membership queries.

use std::collections::BTreeMap;

use csv::StringRecord;
use symptom_types::Symptom;

use crate::parser::{parse, KbRecord};
use crate::types::{KbError, KbResult};

/// Expected columns in a vocabulary file.
const VOCABULARY_COLUMNS: &[&str] = &["symptomId", "group"];

/// A row from a vocabulary file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyEntry {
    /// Symptom identifier (normalized on load).
    pub symptom_id: String,
    /// Optional display group. Opaque to the engine.
    pub group: Option<String>,
}

impl KbRecord for VocabularyEntry {
    const EXPECTED_COLUMNS: &'static [&'static str] = VOCABULARY_COLUMNS;

    fn from_record(record: &StringRecord) -> KbResult<Self> {
        let group = parse::field(record, 1);
        Ok(VocabularyEntry {
            symptom_id: parse::field(record, 0),
            group: (!group.is_empty()).then_some(group),
        })
    }
}

/// The closed set of valid symptom identifiers.
///
/// Immutable once built; share it behind an `Arc`. Iteration follows
/// declaration order.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    symptoms: BTreeMap<Symptom, Option<String>>,
    order: Vec<Symptom>,
}

impl Vocabulary {
    /// Builds a vocabulary from symptom identifiers without groups.
    ///
    /// # Errors
    /// Returns [`KbError::InvalidSymptom`] for an empty identifier.
    pub fn new<I, S>(symptoms: I) -> KbResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_entries(symptoms.into_iter().map(|s| VocabularyEntry {
            symptom_id: s.as_ref().to_string(),
            group: None,
        }))
    }

    /// Builds a vocabulary from parsed entries.
    ///
    /// Duplicate symptoms collapse into one; the first group seen is kept.
    pub fn from_entries<I>(entries: I) -> KbResult<Self>
    where
        I: IntoIterator<Item = VocabularyEntry>,
    {
        let mut symptoms = BTreeMap::new();
        let mut order = Vec::new();
        for entry in entries {
            let symptom = Symptom::new(&entry.symptom_id).map_err(|e| KbError::InvalidSymptom {
                value: e.value,
            })?;
            if !symptoms.contains_key(&symptom) {
                order.push(symptom.clone());
                symptoms.insert(symptom, entry.group);
            }
        }
        Ok(Self { symptoms, order })
    }

    /// Returns true if the identifier (after normalization) is in the vocabulary.
    pub fn contains(&self, symptom: &str) -> bool {
        self.get(symptom).is_some()
    }

    /// Returns the normalized vocabulary symptom for an identifier, if known.
    pub fn get(&self, symptom: &str) -> Option<&Symptom> {
        let normalized = Symptom::new(symptom).ok()?;
        self.symptoms.get_key_value(&normalized).map(|(key, _)| key)
    }

    /// Returns the display group recorded for a symptom.
    pub fn group_of(&self, symptom: &str) -> Option<&str> {
        let normalized = Symptom::new(symptom).ok()?;
        self.symptoms.get(&normalized)?.as_deref()
    }

    /// Returns symptoms whose spaced form contains `term`, case-insensitively.
    ///
    /// An empty term matches everything. Results keep declaration order.
    pub fn search(&self, term: &str) -> Vec<&Symptom> {
        let term = term.trim().to_lowercase();
        self.order
            .iter()
            .filter(|symptom| symptom.as_str().replace('_', " ").contains(&term))
            .collect()
    }

    /// Iterates symptoms in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Symptom> {
        self.order.iter()
    }

    /// Returns the number of symptoms.
    pub fn len(&self) -> usize {
        self.symptoms.len()
    }

    /// Returns true if the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.symptoms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::KbParser;

    fn make_record(fields: &[&str]) -> StringRecord {
        let mut record = StringRecord::new();
        for field in fields {
            record.push_field(field);
        }
        record
    }

    #[test]
    fn test_parse_vocabulary_record() {
        let entry = VocabularyEntry::from_record(&make_record(&["fever", "General"])).unwrap();
        assert_eq!(entry.symptom_id, "fever");
        assert_eq!(entry.group.as_deref(), Some("General"));

        let entry = VocabularyEntry::from_record(&make_record(&["rash", ""])).unwrap();
        assert_eq!(entry.group, None);
    }

    #[test]
    fn test_contains_normalizes() {
        let vocabulary = Vocabulary::new(["fever", "cough"]).unwrap();
        assert!(vocabulary.contains("fever"));
        assert!(vocabulary.contains(" FEVER "));
        assert!(!vocabulary.contains("xyz"));
        assert!(!vocabulary.contains(""));
        assert_eq!(vocabulary.len(), 2);
    }

    #[test]
    fn test_duplicates_collapse() {
        let vocabulary = Vocabulary::new(["cough", "Cough", "cough"]).unwrap();
        assert_eq!(vocabulary.len(), 1);
    }

    #[test]
    fn test_iteration_keeps_declaration_order() {
        let vocabulary = Vocabulary::new(["fever", "chills", "Fever", "cough"]).unwrap();
        let order: Vec<&str> = vocabulary.iter().map(|s| s.as_str()).collect();
        assert_eq!(order, vec!["fever", "chills", "cough"]);
    }

    #[test]
    fn test_empty_identifier_rejected() {
        let result = Vocabulary::new(["fever", "  "]);
        assert!(matches!(result, Err(KbError::InvalidSymptom { .. })));
    }

    #[test]
    fn test_search() {
        let vocabulary =
            Vocabulary::new(["sore_throat", "severe_sore_throat", "runny_nose", "fever"]).unwrap();

        let hits: Vec<&str> = vocabulary.search("Sore Throat").iter().map(|s| s.as_str()).collect();
        assert_eq!(hits, vec!["sore_throat", "severe_sore_throat"]);
        assert_eq!(vocabulary.search("").len(), 4);
        assert!(vocabulary.search("xyz").is_empty());
    }

    #[test]
    fn test_load_with_groups() {
        let data = "symptomId\tgroup\nfever\tGeneral\ncough\tRespiratory\n";
        let entries = KbParser::<_, VocabularyEntry>::from_reader(data.as_bytes())
            .unwrap()
            .parse_all()
            .unwrap();
        let vocabulary = Vocabulary::from_entries(entries).unwrap();

        assert_eq!(vocabulary.group_of("cough"), Some("Respiratory"));
        assert_eq!(vocabulary.group_of("xyz"), None);
    }
}
