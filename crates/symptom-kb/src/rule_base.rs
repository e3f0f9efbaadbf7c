//! Ordered, immutable rule base.
//!
//! Parses `rules.tsv` files and validates every rule against the vocabulary.

use std::collections::BTreeSet;

use csv::StringRecord;
use symptom_types::{ConditionId, Rule};

use crate::parser::{parse, KbRecord};
use crate::types::{KbError, KbResult};
use crate::vocabulary::Vocabulary;

/// Expected columns in a rule file.
const RULE_COLUMNS: &[&str] = &["conditionId", "requiredSymptoms"];

/// A row from a rule file: a condition and its required symptoms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleEntry {
    /// Condition identifier.
    pub condition_id: String,
    /// Required symptom identifiers.
    pub required_symptoms: Vec<String>,
}

impl RuleEntry {
    /// Creates an entry from borrowed identifiers.
    pub fn new(condition_id: &str, required_symptoms: &[&str]) -> Self {
        Self {
            condition_id: condition_id.to_string(),
            required_symptoms: required_symptoms.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl KbRecord for RuleEntry {
    const EXPECTED_COLUMNS: &'static [&'static str] = RULE_COLUMNS;

    fn from_record(record: &StringRecord) -> KbResult<Self> {
        Ok(RuleEntry {
            condition_id: parse::field(record, 0),
            required_symptoms: parse::list(record.get(1).unwrap_or("")),
        })
    }
}

/// The rule base: rules in declaration order.
///
/// Declaration order is semantically significant. When several rules are
/// satisfied, the earliest one wins.
#[derive(Debug, Clone, Default)]
pub struct RuleBase {
    rules: Vec<Rule>,
}

impl RuleBase {
    /// Loads and validates rules, assigning declaration order by position.
    ///
    /// # Errors
    /// - [`KbError::EmptyConditionId`] if a rule has no condition.
    /// - [`KbError::EmptyRule`] if a rule requires no symptoms.
    /// - [`KbError::UnknownRuleSymptom`] if a required symptom is not in `vocabulary`.
    pub fn load<I>(entries: I, vocabulary: &Vocabulary) -> KbResult<Self>
    where
        I: IntoIterator<Item = RuleEntry>,
    {
        let mut rules = Vec::new();

        for (position, entry) in entries.into_iter().enumerate() {
            let condition = ConditionId::new(&entry.condition_id)
                .map_err(|_| KbError::EmptyConditionId { position })?;

            let mut required = BTreeSet::new();
            for symptom in &entry.required_symptoms {
                let known = vocabulary.get(symptom).ok_or_else(|| KbError::UnknownRuleSymptom {
                    condition: condition.to_string(),
                    symptom: symptom.clone(),
                    position,
                })?;
                required.insert(known.clone());
            }

            if required.is_empty() {
                return Err(KbError::EmptyRule {
                    condition: condition.to_string(),
                    position,
                });
            }

            rules.push(Rule {
                condition,
                required,
                declaration_order: position,
            });
        }

        Ok(Self { rules })
    }

    /// Returns rules in declaration order.
    pub fn rules_in_order(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Returns distinct conditions in order of first declaration.
    pub fn conditions(&self) -> Vec<&ConditionId> {
        let mut seen = BTreeSet::new();
        self.rules
            .iter()
            .map(|rule| &rule.condition)
            .filter(|condition| seen.insert(*condition))
            .collect()
    }

    /// Returns true if some rule diagnoses `condition`.
    pub fn contains_condition(&self, condition: &ConditionId) -> bool {
        self.rules.iter().any(|rule| &rule.condition == condition)
    }

    /// Returns the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if there are no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
