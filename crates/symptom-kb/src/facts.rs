//! Request-scoped fact store.
//!
//! Holds the symptoms observed in the current request. One store per
//! request; a store is never shared between concurrent requests except
//! through [`SharedSession`](crate::SharedSession).

use std::collections::BTreeSet;
use std::sync::Arc;

use symptom_types::Symptom;

use crate::types::UnknownSymptom;
use crate::vocabulary::Vocabulary;

/// The set of currently observed symptoms.
///
/// Only vocabulary symptoms are ever stored. Asserting the same symptom
/// twice is a no-op.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use symptom_kb::{FactStore, Vocabulary};
///
/// let vocabulary = Arc::new(Vocabulary::new(["fever", "cough"]).unwrap());
/// let mut facts = FactStore::new(vocabulary);
///
/// facts.assert("fever").unwrap();
/// facts.assert("fever").unwrap();
/// assert!(facts.assert("xyz").is_err());
/// assert_eq!(facts.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct FactStore {
    vocabulary: Arc<Vocabulary>,
    facts: BTreeSet<Symptom>,
}

impl FactStore {
    /// Creates an empty store validating against `vocabulary`.
    pub fn new(vocabulary: Arc<Vocabulary>) -> Self {
        Self {
            vocabulary,
            facts: BTreeSet::new(),
        }
    }

    /// Removes all facts.
    pub fn clear(&mut self) {
        self.facts.clear();
    }

    /// Marks a symptom as observed.
    ///
    /// # Errors
    /// Returns [`UnknownSymptom`] if the symptom is not in the vocabulary.
    /// The store is left unchanged.
    pub fn assert(&mut self, symptom: &str) -> Result<(), UnknownSymptom> {
        match self.vocabulary.get(symptom) {
            Some(known) => {
                self.facts.insert(known.clone());
                Ok(())
            }
            None => {
                tracing::warn!(symptom, "dropping unknown symptom");
                Err(UnknownSymptom {
                    symptom: symptom.to_string(),
                })
            }
        }
    }

    /// Asserts every symptom, returning the ones that were rejected.
    pub fn assert_all<I, S>(&mut self, symptoms: I) -> Vec<UnknownSymptom>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        symptoms
            .into_iter()
            .filter_map(|symptom| self.assert(symptom.as_ref()).err())
            .collect()
    }

    /// Starts a new generation: clears all facts, then asserts `symptoms`.
    pub fn reset_with<I, S>(&mut self, symptoms: I) -> Vec<UnknownSymptom>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.clear();
        self.assert_all(symptoms)
    }

    /// Returns true if the symptom is currently observed.
    pub fn contains(&self, symptom: &str) -> bool {
        self.vocabulary
            .get(symptom)
            .is_some_and(|known| self.facts.contains(known))
    }

    /// Returns the current fact set.
    pub fn current(&self) -> &BTreeSet<Symptom> {
        &self.facts
    }

    /// Returns the number of observed symptoms.
    pub fn len(&self) -> usize {
        self.facts.len()
    }

    /// Returns true if nothing is observed.
    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }
}
