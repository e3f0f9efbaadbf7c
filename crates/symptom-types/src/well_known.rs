//! Well-known symptom and condition identifiers.
//!
//! This module provides constants for the symptoms and conditions of the
//! shipped knowledge base, grouped the way the symptom picker groups them.
//!
//! # Examples
//!
//! ```
//! use symptom_types::well_known;
//!
//! assert_eq!(well_known::FEVER, "fever");
//! assert_eq!(well_known::COMMON_COLD, "common_cold");
//! assert_eq!(well_known::ALL_SYMPTOMS.len(), 32);
//! ```

// =============================================================================
// General
// =============================================================================

/// Fever.
pub const FEVER: &str = "fever";
/// High fever.
pub const HIGH_FEVER: &str = "high_fever";
/// Mild fever.
pub const MILD_FEVER: &str = "mild_fever";
/// Chills.
pub const CHILLS: &str = "chills";
/// Fatigue.
pub const FATIGUE: &str = "fatigue";
/// Extreme fatigue.
pub const EXTREME_FATIGUE: &str = "extreme_fatigue";

// =============================================================================
// Respiratory
// =============================================================================

/// Cough.
pub const COUGH: &str = "cough";
/// Dry cough.
pub const DRY_COUGH: &str = "dry_cough";
/// Productive (mucus) cough.
pub const PRODUCTIVE_COUGH: &str = "productive_cough";
/// Shortness of breath.
pub const SHORTNESS_OF_BREATH: &str = "shortness_of_breath";
/// Sneezing.
pub const SNEEZING: &str = "sneezing";
/// Nasal congestion.
pub const CONGESTION: &str = "congestion";

// =============================================================================
// Head / Throat
// =============================================================================

/// Headache.
pub const HEADACHE: &str = "headache";
/// Severe headache.
pub const SEVERE_HEADACHE: &str = "severe_headache";
/// Sore throat.
pub const SORE_THROAT: &str = "sore_throat";
/// Severe sore throat.
pub const SEVERE_SORE_THROAT: &str = "severe_sore_throat";
/// Runny nose.
pub const RUNNY_NOSE: &str = "runny_nose";
/// Loss of smell.
pub const LOSS_OF_SMELL: &str = "loss_of_smell";

// =============================================================================
// Body
// =============================================================================

/// Body ache.
pub const BODY_ACHE: &str = "body_ache";
/// Severe body ache.
pub const SEVERE_BODY_ACHE: &str = "severe_body_ache";
/// Joint pain.
pub const JOINT_PAIN: &str = "joint_pain";
/// Chest pain.
pub const CHEST_PAIN: &str = "chest_pain";
/// Muscle weakness.
pub const MUSCLE_WEAKNESS: &str = "muscle_weakness";

// =============================================================================
// Digestive
// =============================================================================

/// Nausea.
pub const NAUSEA: &str = "nausea";
/// Vomiting.
pub const VOMITING: &str = "vomiting";
/// Diarrhea.
pub const DIARRHEA: &str = "diarrhea";
/// Abdominal pain.
pub const ABDOMINAL_PAIN: &str = "abdominal_pain";

// =============================================================================
// Other
// =============================================================================

/// Skin rash.
pub const RASH: &str = "rash";
/// Itchy eyes.
pub const ITCHY_EYES: &str = "itchy_eyes";
/// Dizziness.
pub const DIZZINESS: &str = "dizziness";
/// Loss of taste.
pub const LOSS_OF_TASTE: &str = "loss_of_taste";
/// Swollen lymph nodes.
pub const SWOLLEN_LYMPH_NODES: &str = "swollen_lymph_nodes";

/// Symptom groups in picker order: `(group label, symptoms)`.
pub const SYMPTOM_GROUPS: &[(&str, &[&str])] = &[
    ("General", &[FEVER, HIGH_FEVER, MILD_FEVER, CHILLS, FATIGUE, EXTREME_FATIGUE]),
    (
        "Respiratory",
        &[COUGH, DRY_COUGH, PRODUCTIVE_COUGH, SHORTNESS_OF_BREATH, SNEEZING, CONGESTION],
    ),
    (
        "Head/Throat",
        &[HEADACHE, SEVERE_HEADACHE, SORE_THROAT, SEVERE_SORE_THROAT, RUNNY_NOSE, LOSS_OF_SMELL],
    ),
    ("Body", &[BODY_ACHE, SEVERE_BODY_ACHE, JOINT_PAIN, CHEST_PAIN, MUSCLE_WEAKNESS]),
    ("Digestive", &[NAUSEA, VOMITING, DIARRHEA, ABDOMINAL_PAIN]),
    ("Other", &[RASH, ITCHY_EYES, DIZZINESS, LOSS_OF_TASTE, SWOLLEN_LYMPH_NODES]),
];

/// Every shipped symptom, in picker order.
pub const ALL_SYMPTOMS: &[&str] = &[
    FEVER, HIGH_FEVER, MILD_FEVER, CHILLS, FATIGUE, EXTREME_FATIGUE,
    COUGH, DRY_COUGH, PRODUCTIVE_COUGH, SHORTNESS_OF_BREATH, SNEEZING, CONGESTION,
    HEADACHE, SEVERE_HEADACHE, SORE_THROAT, SEVERE_SORE_THROAT, RUNNY_NOSE, LOSS_OF_SMELL,
    BODY_ACHE, SEVERE_BODY_ACHE, JOINT_PAIN, CHEST_PAIN, MUSCLE_WEAKNESS,
    NAUSEA, VOMITING, DIARRHEA, ABDOMINAL_PAIN,
    RASH, ITCHY_EYES, DIZZINESS, LOSS_OF_TASTE, SWOLLEN_LYMPH_NODES,
];

// =============================================================================
// Conditions
// =============================================================================

/// Common cold (viral upper respiratory infection).
pub const COMMON_COLD: &str = "common_cold";
/// Influenza.
pub const FLU: &str = "flu";
/// COVID-19.
pub const COVID_19: &str = "covid_19";
/// Allergic rhinitis.
pub const ALLERGIES: &str = "allergies";
/// Streptococcal pharyngitis.
pub const STREP_THROAT: &str = "strep_throat";
/// Gastroenteritis.
pub const GASTROENTERITIS: &str = "gastroenteritis";
/// Migraine.
pub const MIGRAINE: &str = "migraine";
/// Bronchitis.
pub const BRONCHITIS: &str = "bronchitis";
/// Pneumonia.
pub const PNEUMONIA: &str = "pneumonia";
/// Infectious mononucleosis.
pub const MONO: &str = "mono";
