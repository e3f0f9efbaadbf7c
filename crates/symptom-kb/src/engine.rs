//! First-match inference engine.
//!
//! Scans the rule base in declaration order and returns the condition of
//! the first rule whose required symptoms are all observed. This is a
//! first-match policy, not best-match: an earlier two-symptom rule beats a
//! later five-symptom rule when both are satisfied.

use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use symptom_types::DiagnosisResult;

use crate::facts::FactStore;
use crate::knowledge_base::KnowledgeBase;
use crate::types::UnknownSymptom;

/// Outcome of a complete request: the result plus any dropped symptoms.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Diagnosis {
    /// The diagnosis.
    pub result: DiagnosisResult,
    /// Symptoms that were not in the vocabulary and were ignored.
    pub unknown_symptoms: Vec<UnknownSymptom>,
}

/// Rule-based inference engine over an immutable knowledge base.
///
/// Cheap to clone and safe to share across threads; per-request state lives
/// in a [`FactStore`].
///
/// # Example
///
/// ```
/// use symptom_kb::{InferenceEngine, KnowledgeBase};
///
/// let engine = InferenceEngine::new(KnowledgeBase::builtin().unwrap());
///
/// let mut facts = engine.new_session();
/// facts.assert_all(["cough", "runny_nose", "sneezing", "fatigue"]);
///
/// let result = engine.diagnose(&facts);
/// assert_eq!(result.condition().map(|c| c.as_str()), Some("common_cold"));
/// ```
#[derive(Debug, Clone)]
pub struct InferenceEngine {
    kb: Arc<KnowledgeBase>,
}

impl InferenceEngine {
    /// Creates an engine owning `kb`.
    pub fn new(kb: KnowledgeBase) -> Self {
        Self { kb: Arc::new(kb) }
    }

    /// Returns the knowledge base.
    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    /// Creates an empty fact store for one request.
    pub fn new_session(&self) -> FactStore {
        FactStore::new(self.kb.shared_vocabulary())
    }

    /// Diagnoses the current facts.
    ///
    /// Returns the condition of the first satisfied rule with its first
    /// treatment, or [`DiagnosisResult::NoMatch`]. The treatment catalog is
    /// consulted only when a rule matched.
    pub fn diagnose(&self, facts: &FactStore) -> DiagnosisResult {
        let current = facts.current();

        for rule in self.kb.rules().rules_in_order() {
            if rule.is_satisfied_by(current) {
                tracing::debug!(
                    condition = %rule.condition,
                    declaration_order = rule.declaration_order,
                    "rule satisfied"
                );
                let treatment = self
                    .kb
                    .treatments()
                    .lookup(rule.condition.as_str())
                    .map(str::to_string);
                return DiagnosisResult::Match {
                    condition: rule.condition.clone(),
                    treatment,
                };
            }
        }

        tracing::debug!(facts = current.len(), "no rule satisfied");
        DiagnosisResult::NoMatch
    }

    /// Runs a complete request on a fresh fact store.
    ///
    /// Unknown symptoms are dropped and reported; they never fail the request.
    pub fn diagnose_symptoms<I, S>(&self, symptoms: I) -> Diagnosis
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut facts = self.new_session();
        let unknown_symptoms = facts.assert_all(symptoms);
        Diagnosis {
            result: self.diagnose(&facts),
            unknown_symptoms,
        }
    }

    /// Runs independent requests in parallel, each on its own fact store.
    ///
    /// Results are returned in request order.
    #[cfg(feature = "parallel")]
    pub fn diagnose_batch<S>(&self, requests: &[Vec<S>]) -> Vec<Diagnosis>
    where
        S: AsRef<str> + Sync,
    {
        requests
            .par_iter()
            .map(|symptoms| self.diagnose_symptoms(symptoms))
            .collect()
    }

    /// Runs independent requests, each on its own fact store.
    ///
    /// Results are returned in request order.
    #[cfg(not(feature = "parallel"))]
    pub fn diagnose_batch<S>(&self, requests: &[Vec<S>]) -> Vec<Diagnosis>
    where
        S: AsRef<str> + Sync,
    {
        requests
            .iter()
            .map(|symptoms| self.diagnose_symptoms(symptoms))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule_base::RuleEntry;
    use crate::treatment::TreatmentEntry;
    use crate::vocabulary::Vocabulary;
    use symptom_types::well_known;

    const SYMPTOMS: &[&str] = &[
        "fever", "body_ache", "fatigue", "chills", "cough", "runny_nose", "sneezing",
    ];

    fn engine(rules: Vec<RuleEntry>, treatments: Vec<TreatmentEntry>) -> InferenceEngine {
        let vocabulary = Vocabulary::new(SYMPTOMS).unwrap();
        InferenceEngine::new(KnowledgeBase::new(vocabulary, rules, treatments).unwrap())
    }

    fn flu_and_cold() -> InferenceEngine {
        engine(
            vec![
                RuleEntry::new("flu", &["fever", "body_ache", "fatigue", "chills"]),
                RuleEntry::new("common_cold", &["cough", "runny_nose", "sneezing"]),
            ],
            vec![
                TreatmentEntry::new("flu", "Rest and fluids"),
                TreatmentEntry::new("common_cold", "Decongestants"),
            ],
        )
    }

    fn condition_of(result: &DiagnosisResult) -> Option<&str> {
        result.condition().map(|c| c.as_str())
    }

    #[test]
    fn test_empty_facts_no_match() {
        let engine = flu_and_cold();
        let facts = engine.new_session();
        assert_eq!(engine.diagnose(&facts), DiagnosisResult::NoMatch);
    }

    #[test]
    fn test_exact_requirements_match() {
        let engine = flu_and_cold();
        let mut facts = engine.new_session();
        facts.assert_all(["cough", "runny_nose", "sneezing"]);

        let result = engine.diagnose(&facts);
        assert_eq!(condition_of(&result), Some("common_cold"));
        assert_eq!(result.treatment(), Some("Decongestants"));
    }

    #[test]
    fn test_partial_earlier_rule_skipped() {
        let engine = flu_and_cold();
        let mut facts = engine.new_session();
        facts.assert_all(["cough", "runny_nose", "sneezing", "fatigue"]);

        assert_eq!(condition_of(&engine.diagnose(&facts)), Some("common_cold"));
    }

    #[test]
    fn test_earlier_rule_wins_when_both_satisfied() {
        let engine = flu_and_cold();
        let mut facts = engine.new_session();
        facts.assert_all(["fever", "body_ache", "fatigue", "chills", "cough", "runny_nose", "sneezing"]);

        assert_eq!(condition_of(&engine.diagnose(&facts)), Some("flu"));
    }

    #[test]
    fn test_first_match_not_best_match() {
        let engine = engine(
            vec![
                RuleEntry::new("common_cold", &["cough", "runny_nose"]),
                RuleEntry::new(
                    "flu",
                    &["fever", "body_ache", "fatigue", "chills", "cough", "runny_nose"],
                ),
            ],
            vec![],
        );
        let mut facts = engine.new_session();
        facts.assert_all(["fever", "body_ache", "fatigue", "chills", "cough", "runny_nose"]);

        // Both rules are satisfied; the smaller, earlier one wins.
        assert_eq!(condition_of(&engine.diagnose(&facts)), Some("common_cold"));
    }

    #[test]
    fn test_match_without_treatment() {
        let engine = engine(vec![RuleEntry::new("flu", &["fever", "chills"])], vec![]);
        let mut facts = engine.new_session();
        facts.assert_all(["fever", "chills"]);

        let result = engine.diagnose(&facts);
        assert_eq!(condition_of(&result), Some("flu"));
        assert_eq!(result.treatment(), None);
    }

    #[test]
    fn test_diagnose_is_idempotent() {
        let engine = flu_and_cold();
        let mut facts = engine.new_session();
        facts.assert_all(["fever", "body_ache", "fatigue", "chills"]);

        let first = engine.diagnose(&facts);
        let second = engine.diagnose(&facts);
        assert_eq!(first, second);
    }

    #[test]
    fn test_reset_prevents_leakage() {
        let engine = flu_and_cold();
        let mut facts = engine.new_session();
        facts.assert_all(["fever", "body_ache", "fatigue", "chills"]);
        assert_eq!(condition_of(&engine.diagnose(&facts)), Some("flu"));

        facts.reset_with(["cough", "runny_nose"]);
        assert_eq!(engine.diagnose(&facts), DiagnosisResult::NoMatch);
    }

    #[test]
    fn test_unknown_symptom_does_not_abort() {
        let engine = flu_and_cold();
        let diagnosis = engine.diagnose_symptoms(["cough", "xyz", "runny_nose", "sneezing"]);

        assert_eq!(condition_of(&diagnosis.result), Some("common_cold"));
        assert_eq!(diagnosis.unknown_symptoms.len(), 1);
        assert_eq!(diagnosis.unknown_symptoms[0].symptom, "xyz");
    }

    #[test]
    fn test_diagnose_batch_preserves_order() {
        let engine = flu_and_cold();
        let requests = vec![
            vec!["fever", "body_ache", "fatigue", "chills"],
            vec![],
            vec!["cough", "runny_nose", "sneezing"],
        ];

        let results: Vec<Option<String>> = engine
            .diagnose_batch(&requests)
            .iter()
            .map(|d| condition_of(&d.result).map(str::to_string))
            .collect();
        assert_eq!(
            results,
            vec![Some("flu".to_string()), None, Some("common_cold".to_string())]
        );
    }

    #[test]
    fn test_builtin_scenarios() {
        let engine = InferenceEngine::new(KnowledgeBase::builtin().unwrap());

        let cold = engine.diagnose_symptoms([
            well_known::COUGH,
            well_known::RUNNY_NOSE,
            well_known::SNEEZING,
            well_known::FATIGUE,
        ]);
        assert_eq!(condition_of(&cold.result), Some(well_known::COMMON_COLD));

        let flu = engine.diagnose_symptoms([
            well_known::FEVER,
            well_known::BODY_ACHE,
            well_known::FATIGUE,
            well_known::CHILLS,
            well_known::COUGH,
        ]);
        assert_eq!(condition_of(&flu.result), Some(well_known::FLU));
        assert_eq!(
            flu.result.treatment().and_then(|t| t.lines().next()),
            Some("Rest and stay home until fever-free for 24 hours")
        );

        let allergies = engine.diagnose_symptoms([
            well_known::SNEEZING,
            well_known::ITCHY_EYES,
            well_known::RUNNY_NOSE,
            well_known::COUGH,
        ]);
        assert_eq!(condition_of(&allergies.result), Some(well_known::ALLERGIES));

        let none = engine.diagnose_symptoms(Vec::<String>::new());
        assert_eq!(none.result, DiagnosisResult::NoMatch);
    }
}
