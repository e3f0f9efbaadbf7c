//! Shared fact store behind an exclusive lock.
//!
//! Use this only when one fact store must serve concurrent callers. The
//! whole clear, assert, diagnose, read sequence runs under a single guard so
//! requests never observe each other's facts.

use std::sync::{Mutex, PoisonError};

use crate::engine::{Diagnosis, InferenceEngine};

/// A single fact store shared by concurrent requests.
#[derive(Debug)]
pub struct SharedSession {
    engine: InferenceEngine,
    facts: Mutex<crate::facts::FactStore>,
}

impl SharedSession {
    /// Creates a shared session over `engine`.
    pub fn new(engine: InferenceEngine) -> Self {
        let facts = Mutex::new(engine.new_session());
        Self { engine, facts }
    }

    /// Runs a complete request as one critical section.
    pub fn diagnose<I, S>(&self, symptoms: I) -> Diagnosis
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        // A poisoned store is still usable: the first step clears it.
        let mut facts = self.facts.lock().unwrap_or_else(PoisonError::into_inner);
        let unknown_symptoms = facts.reset_with(symptoms);
        let result = self.engine.diagnose(&facts);
        Diagnosis {
            result,
            unknown_symptoms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge_base::KnowledgeBase;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_sequential_requests_are_isolated() {
        let session = SharedSession::new(InferenceEngine::new(KnowledgeBase::builtin().unwrap()));

        let first = session.diagnose(["fever", "body_ache", "fatigue", "chills"]);
        assert_eq!(first.result.condition().map(|c| c.as_str()), Some("flu"));

        let second = session.diagnose(["cough"]);
        assert!(!second.result.is_match());
    }

    #[test]
    fn test_concurrent_requests_are_isolated() {
        let session = Arc::new(SharedSession::new(InferenceEngine::new(
            KnowledgeBase::builtin().unwrap(),
        )));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let session = Arc::clone(&session);
                thread::spawn(move || {
                    let (symptoms, expected): (&[&str], &str) = if i % 2 == 0 {
                        (&["fever", "body_ache", "fatigue", "chills"], "flu")
                    } else {
                        (&["nausea", "vomiting", "diarrhea", "abdominal_pain"], "gastroenteritis")
                    };
                    for _ in 0..50 {
                        let diagnosis = session.diagnose(symptoms);
                        assert_eq!(
                            diagnosis.result.condition().map(|c| c.as_str()),
                            Some(expected)
                        );
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
    }
}
