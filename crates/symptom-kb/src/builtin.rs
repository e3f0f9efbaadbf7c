//! The shipped knowledge base.
//!
//! Rule order is significant: earlier rules win when several are
//! satisfied, so more specific patterns are declared first.

use symptom_types::well_known::*;

/// Rules in declaration order: `(condition, required symptoms)`.
pub(crate) const RULES: &[(&str, &[&str])] = &[
    (PNEUMONIA, &[HIGH_FEVER, PRODUCTIVE_COUGH, SHORTNESS_OF_BREATH, CHEST_PAIN]),
    (COVID_19, &[FEVER, DRY_COUGH, LOSS_OF_TASTE, LOSS_OF_SMELL]),
    (COVID_19, &[FEVER, DRY_COUGH, SHORTNESS_OF_BREATH, FATIGUE]),
    (FLU, &[HIGH_FEVER, SEVERE_BODY_ACHE, CHILLS, EXTREME_FATIGUE]),
    (FLU, &[FEVER, BODY_ACHE, FATIGUE, CHILLS]),
    (MONO, &[FEVER, EXTREME_FATIGUE, SORE_THROAT, SWOLLEN_LYMPH_NODES]),
    (STREP_THROAT, &[FEVER, SEVERE_SORE_THROAT, SWOLLEN_LYMPH_NODES]),
    (BRONCHITIS, &[PRODUCTIVE_COUGH, SHORTNESS_OF_BREATH, FATIGUE]),
    (GASTROENTERITIS, &[NAUSEA, VOMITING, DIARRHEA, ABDOMINAL_PAIN]),
    (GASTROENTERITIS, &[DIARRHEA, ABDOMINAL_PAIN, MILD_FEVER]),
    (MIGRAINE, &[SEVERE_HEADACHE, NAUSEA, DIZZINESS]),
    (ALLERGIES, &[SNEEZING, ITCHY_EYES, RUNNY_NOSE]),
    (COMMON_COLD, &[COUGH, RUNNY_NOSE, SNEEZING]),
    (COMMON_COLD, &[SORE_THROAT, RUNNY_NOSE, CONGESTION]),
];

/// Treatments in declaration order: `(condition, text)`. Lines are separate
/// recommendations.
pub(crate) const TREATMENTS: &[(&str, &str)] = &[
    (
        COMMON_COLD,
        "Rest and drink plenty of fluids\nOver-the-counter decongestants or throat lozenges\nSaline nasal spray for congestion",
    ),
    (
        FLU,
        "Rest and stay home until fever-free for 24 hours\nFever reducers such as paracetamol or ibuprofen\nAsk a doctor about antivirals within 48 hours of onset",
    ),
    (FLU, "Antiviral medication as prescribed"),
    (
        COVID_19,
        "Isolate and take a test\nRest, fluids and fever reducers\nSeek urgent care if breathing becomes difficult",
    ),
    (
        ALLERGIES,
        "Antihistamines\nAvoid known allergens\nNasal corticosteroid spray",
    ),
    (
        STREP_THROAT,
        "See a doctor for a throat swab\nAntibiotics if strep is confirmed\nWarm salt-water gargles",
    ),
    (
        GASTROENTERITIS,
        "Oral rehydration solution\nBland foods once vomiting stops\nSeek care if unable to keep fluids down",
    ),
    (
        MIGRAINE,
        "Rest in a dark, quiet room\nPain relievers taken early in the attack\nTrack and avoid triggers",
    ),
    (
        BRONCHITIS,
        "Rest and fluids\nHumidifier or steam inhalation\nSee a doctor if the cough lasts more than three weeks",
    ),
    (
        PNEUMONIA,
        "Seek medical evaluation promptly\nAntibiotics if bacterial pneumonia is diagnosed\nRest and fluids",
    ),
    (
        MONO,
        "Rest for several weeks\nFluids and pain relievers for sore throat\nAvoid contact sports while the spleen may be enlarged",
    ),
];
