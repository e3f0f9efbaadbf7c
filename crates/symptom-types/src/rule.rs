//! Condition rule type.

use std::collections::BTreeSet;

use crate::{ConditionId, Symptom};

/// A conjunctive rule: if every required symptom is observed, the rule
/// identifies its condition.
///
/// `declaration_order` is the rule's position in its rule base and is the
/// tie-break key when several rules are satisfied: the lowest wins.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use symptom_types::{ConditionId, Rule, Symptom};
///
/// let rule = Rule {
///     condition: ConditionId::new("common_cold").unwrap(),
///     required: ["cough", "runny_nose"]
///         .iter()
///         .map(|s| Symptom::new(s).unwrap())
///         .collect(),
///     declaration_order: 0,
/// };
///
/// let facts: BTreeSet<Symptom> = ["cough", "runny_nose", "fatigue"]
///     .iter()
///     .map(|s| Symptom::new(s).unwrap())
///     .collect();
///
/// assert!(rule.is_satisfied_by(&facts));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rule {
    /// The condition this rule identifies.
    pub condition: ConditionId,
    /// Symptoms that must all be observed.
    pub required: BTreeSet<Symptom>,
    /// Position in the rule base (0-based).
    pub declaration_order: usize,
}

impl Rule {
    /// Returns true if every required symptom is present in `facts`.
    pub fn is_satisfied_by(&self, facts: &BTreeSet<Symptom>) -> bool {
        self.required.is_subset(facts)
    }
}
