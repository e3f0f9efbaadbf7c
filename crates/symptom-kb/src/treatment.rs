//! Treatment catalog.
//!
//! Parses `treatments.tsv` files. A condition may carry several treatment
//! texts; the first one declared is authoritative.

use std::collections::HashMap;

use csv::StringRecord;
use symptom_types::ConditionId;

use crate::parser::{parse, KbRecord};
use crate::types::{KbError, KbResult};

/// Expected columns in a treatment file.
const TREATMENT_COLUMNS: &[&str] = &["conditionId", "treatment"];

/// A row from a treatment file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreatmentEntry {
    /// Condition identifier.
    pub condition_id: String,
    /// Treatment text; may span several lines.
    pub text: String,
}

impl TreatmentEntry {
    /// Creates an entry from borrowed strings.
    pub fn new(condition_id: &str, text: &str) -> Self {
        Self {
            condition_id: condition_id.to_string(),
            text: text.to_string(),
        }
    }
}

impl KbRecord for TreatmentEntry {
    const EXPECTED_COLUMNS: &'static [&'static str] = TREATMENT_COLUMNS;

    fn from_record(record: &StringRecord) -> KbResult<Self> {
        Ok(TreatmentEntry {
            condition_id: parse::field(record, 0),
            text: parse::multiline(&parse::field(record, 1)),
        })
    }
}

/// Lookup from condition to treatment texts.
#[derive(Debug, Clone, Default)]
pub struct TreatmentCatalog {
    by_condition: HashMap<ConditionId, Vec<String>>,
}

impl TreatmentCatalog {
    /// Builds a catalog, keeping texts in declaration order per condition.
    ///
    /// # Errors
    /// Returns [`KbError::EmptyTreatment`] for a row with no condition or no text.
    pub fn new<I>(entries: I) -> KbResult<Self>
    where
        I: IntoIterator<Item = TreatmentEntry>,
    {
        let mut by_condition: HashMap<ConditionId, Vec<String>> = HashMap::new();

        for (position, entry) in entries.into_iter().enumerate() {
            let text = entry.text.trim();
            let condition = match ConditionId::new(&entry.condition_id) {
                Ok(condition) if !text.is_empty() => condition,
                _ => {
                    return Err(KbError::EmptyTreatment {
                        condition: entry.condition_id,
                        position,
                    })
                }
            };
            by_condition.entry(condition).or_default().push(text.to_string());
        }

        Ok(Self { by_condition })
    }

    /// Returns the first treatment registered for `condition`.
    pub fn lookup(&self, condition: &str) -> Option<&str> {
        self.treatments_for(condition).first().map(String::as_str)
    }

    /// Returns the first treatment split into trimmed, non-empty lines.
    pub fn lookup_lines(&self, condition: &str) -> Vec<&str> {
        self.lookup(condition)
            .map(|text| {
                text.lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns every treatment registered for `condition`, in declaration order.
    pub fn treatments_for(&self, condition: &str) -> &[String] {
        ConditionId::new(condition)
            .ok()
            .and_then(|id| self.by_condition.get(&id))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Iterates conditions that have at least one treatment.
    pub fn conditions(&self) -> impl Iterator<Item = &ConditionId> {
        self.by_condition.keys()
    }

    /// Returns the number of conditions with treatments.
    pub fn condition_count(&self) -> usize {
        self.by_condition.len()
    }

    /// Returns the total number of treatment texts.
    pub fn treatment_count(&self) -> usize {
        self.by_condition.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::KbParser;

    #[test]
    fn test_first_declared_wins() {
        let catalog = TreatmentCatalog::new(vec![
            TreatmentEntry::new("flu", "Rest and fluids"),
            TreatmentEntry::new("common_cold", "Decongestants"),
            TreatmentEntry::new("flu", "Antiviral medication"),
        ])
        .unwrap();

        assert_eq!(catalog.lookup("flu"), Some("Rest and fluids"));
        assert_eq!(catalog.treatments_for("flu").len(), 2);
        assert_eq!(catalog.condition_count(), 2);
        assert_eq!(catalog.treatment_count(), 3);
    }

    #[test]
    fn test_missing_condition() {
        let catalog = TreatmentCatalog::new(vec![TreatmentEntry::new("flu", "Rest")]).unwrap();
        assert_eq!(catalog.lookup("mono"), None);
        assert_eq!(catalog.lookup(""), None);
        assert!(catalog.treatments_for("mono").is_empty());
        assert!(catalog.lookup_lines("mono").is_empty());
    }

    #[test]
    fn test_empty_text_rejected() {
        let result = TreatmentCatalog::new(vec![TreatmentEntry::new("flu", "   ")]);
        assert!(matches!(result, Err(KbError::EmptyTreatment { position: 0, .. })));

        let result = TreatmentCatalog::new(vec![TreatmentEntry::new("", "Rest")]);
        assert!(matches!(result, Err(KbError::EmptyTreatment { .. })));
    }

    #[test]
    fn test_multiline_treatment_from_file() {
        let data = "conditionId\ttreatment\nflu\tRest\\nFluids\\n\\nFever reducers\n";
        let entries = KbParser::<_, TreatmentEntry>::from_reader(data.as_bytes())
            .unwrap()
            .parse_all()
            .unwrap();
        let catalog = TreatmentCatalog::new(entries).unwrap();

        assert_eq!(catalog.lookup("FLU"), Some("Rest\nFluids\n\nFever reducers"));
        assert_eq!(catalog.lookup_lines("flu"), vec!["Rest", "Fluids", "Fever reducers"]);
    }
}
