//! Diagnosis result type.

use crate::ConditionId;

/// Outcome of a diagnosis request.
///
/// `NoMatch` is an ordinary, frequent outcome and never an error. Callers
/// show their own fallback text for it, and likewise when a matched
/// condition has no treatment registered.
///
/// # Examples
///
/// ```
/// use symptom_types::{ConditionId, DiagnosisResult};
///
/// let result = DiagnosisResult::Match {
///     condition: ConditionId::new("flu").unwrap(),
///     treatment: Some("Rest and fluids".to_string()),
/// };
/// assert!(result.is_match());
/// assert_eq!(result.condition().map(|c| c.as_str()), Some("flu"));
///
/// assert_eq!(DiagnosisResult::NoMatch.treatment(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiagnosisResult {
    /// A rule was satisfied.
    Match {
        /// The diagnosed condition.
        condition: ConditionId,
        /// First treatment registered for the condition, if any.
        treatment: Option<String>,
    },
    /// No rule was satisfied.
    #[default]
    NoMatch,
}

impl DiagnosisResult {
    /// Returns true if a condition was diagnosed.
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Match { .. })
    }

    /// Returns the diagnosed condition, if any.
    pub fn condition(&self) -> Option<&ConditionId> {
        match self {
            Self::Match { condition, .. } => Some(condition),
            Self::NoMatch => None,
        }
    }

    /// Returns the treatment text, if a condition matched and has one.
    pub fn treatment(&self) -> Option<&str> {
        match self {
            Self::Match { treatment, .. } => treatment.as_deref(),
            Self::NoMatch => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_no_match() {
        let result = DiagnosisResult::default();
        assert!(!result.is_match());
        assert_eq!(result.condition(), None);
    }

    #[test]
    fn test_match_without_treatment() {
        let result = DiagnosisResult::Match {
            condition: ConditionId::new("mono").unwrap(),
            treatment: None,
        };
        assert!(result.is_match());
        assert_eq!(result.treatment(), None);
    }
}
