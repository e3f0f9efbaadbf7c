//! Symptom and condition identifiers.
//!
//! Both identifiers are drawn from closed, case-normalized vocabularies.
//! Construction trims surrounding whitespace and lowercases the input, so
//! `" Fever "` and `"fever"` name the same symptom.

use std::borrow::Borrow;
use std::fmt;

/// Error returned when an identifier is empty after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidIdentifier {
    /// The raw input that was rejected.
    pub value: String,
}

impl fmt::Display for InvalidIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid identifier: '{}' (must be non-empty)", self.value)
    }
}

impl std::error::Error for InvalidIdentifier {}

fn normalize(raw: &str) -> Result<String, InvalidIdentifier> {
    let normalized = raw.trim().to_lowercase();
    if normalized.is_empty() {
        return Err(InvalidIdentifier {
            value: raw.to_string(),
        });
    }
    Ok(normalized)
}

/// An observable sign, e.g. `fever` or `runny_nose`.
///
/// # Examples
///
/// ```
/// use symptom_types::Symptom;
///
/// let symptom = Symptom::new(" Runny_Nose ").unwrap();
/// assert_eq!(symptom.as_str(), "runny_nose");
/// assert_eq!(symptom.display_name(), "Runny Nose");
/// assert!(Symptom::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Symptom(String);

/// Identifier of a diagnosable condition, e.g. `common_cold`.
///
/// Conditions are opaque to the engine: descriptions, icons and self-care
/// advice belong to whatever presents the result.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct ConditionId(String);

macro_rules! identifier_impls {
    ($name:ident) => {
        impl $name {
            /// Creates a normalized identifier.
            ///
            /// Returns an error if the input is empty or whitespace only.
            pub fn new(raw: &str) -> Result<Self, InvalidIdentifier> {
                normalize(raw).map(Self)
            }

            /// Returns the normalized identifier.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Renders the identifier in title case with spaces, as shown to users.
            pub fn display_name(&self) -> String {
                self.0
                    .split('_')
                    .filter(|word| !word.is_empty())
                    .map(|word| {
                        let mut chars = word.chars();
                        match chars.next() {
                            Some(first) => first.to_uppercase().chain(chars).collect(),
                            None => String::new(),
                        }
                    })
                    .collect::<Vec<String>>()
                    .join(" ")
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = InvalidIdentifier;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(&value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = InvalidIdentifier;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

identifier_impls!(Symptom);
identifier_impls!(ConditionId);
