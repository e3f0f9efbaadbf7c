//! HTTP routes for diagnosis queries.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use symptom_kb::{Diagnosis, InferenceEngine};
use tower_http::trace::TraceLayer;

/// Group label for vocabulary symptoms loaded without one.
const UNGROUPED: &str = "Ungrouped";

/// Diagnosis HTTP server state.
#[derive(Clone)]
pub struct DiagnosisServer {
    engine: InferenceEngine,
}

impl DiagnosisServer {
    /// Creates a new server over `engine`.
    pub fn new(engine: InferenceEngine) -> Self {
        Self { engine }
    }

    /// Returns the engine.
    pub fn engine(&self) -> &InferenceEngine {
        &self.engine
    }

    /// Builds the router with all endpoints.
    pub fn router(self) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route("/symptoms", get(symptoms_handler))
            .route("/conditions", get(conditions_handler))
            .route("/diagnose", post(diagnose_handler))
            .layer(TraceLayer::new_for_http())
            .with_state(self)
    }
}

// ==================
// Request/Response Types
// ==================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "ok".
    pub status: String,
    /// Crate version.
    pub version: String,
}

/// Diagnosis request body.
#[derive(Debug, Default, Deserialize)]
pub struct DiagnoseRequest {
    /// Observed symptom identifiers. Order and duplicates do not matter.
    #[serde(default)]
    pub symptoms: Vec<String>,
}

/// Diagnosis response body.
///
/// A `null` condition means no rule matched; that is a normal outcome.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnoseResponse {
    /// Diagnosed condition identifier.
    pub condition_id: Option<String>,
    /// Title-case rendering of the condition.
    pub display_name: Option<String>,
    /// First treatment registered for the condition.
    pub treatment_text: Option<String>,
    /// Submitted symptoms that were not in the vocabulary.
    pub unknown_symptoms: Vec<String>,
}

impl From<Diagnosis> for DiagnoseResponse {
    fn from(diagnosis: Diagnosis) -> Self {
        let condition = diagnosis.result.condition();
        Self {
            condition_id: condition.map(|c| c.to_string()),
            display_name: condition.map(|c| c.display_name()),
            treatment_text: diagnosis.result.treatment().map(str::to_string),
            unknown_symptoms: diagnosis
                .unknown_symptoms
                .into_iter()
                .map(|u| u.symptom)
                .collect(),
        }
    }
}

/// Symptom search parameters.
#[derive(Debug, Default, Deserialize)]
pub struct SymptomQuery {
    /// Substring filter over the spaced symptom name.
    #[serde(default)]
    pub q: String,
}

/// A vocabulary symptom.
#[derive(Debug, Serialize)]
pub struct SymptomInfo {
    /// Symptom identifier.
    pub id: String,
    /// Title-case rendering.
    pub display_name: String,
}

/// Symptoms sharing a display group.
#[derive(Debug, Serialize)]
pub struct SymptomGroup {
    /// Group label.
    pub name: String,
    /// Symptoms in the group.
    pub symptoms: Vec<SymptomInfo>,
}

/// Symptom listing response.
#[derive(Debug, Serialize)]
pub struct SymptomsResponse {
    /// Matching symptoms by group.
    pub groups: Vec<SymptomGroup>,
    /// Total matching symptoms.
    pub total: usize,
}

/// A diagnosable condition.
#[derive(Debug, Serialize)]
pub struct ConditionInfo {
    /// Condition identifier.
    pub id: String,
    /// Title-case rendering.
    pub display_name: String,
    /// Whether a treatment is registered.
    pub has_treatment: bool,
}

/// Condition listing response.
#[derive(Debug, Serialize)]
pub struct ConditionsResponse {
    /// Conditions in order of first declaration.
    pub conditions: Vec<ConditionInfo>,
}

// ==================
// Handlers
// ==================

async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}

/// Runs one diagnosis on a fresh fact store.
pub async fn diagnose_handler(
    State(server): State<DiagnosisServer>,
    Json(request): Json<DiagnoseRequest>,
) -> Json<DiagnoseResponse> {
    let diagnosis = server.engine.diagnose_symptoms(&request.symptoms);

    match diagnosis.result.condition() {
        Some(condition) => tracing::info!(
            %condition,
            symptoms = request.symptoms.len(),
            "diagnosis complete"
        ),
        None => tracing::info!(symptoms = request.symptoms.len(), "no diagnosis"),
    }

    Json(diagnosis.into())
}

/// Lists vocabulary symptoms, optionally filtered by `q`.
pub async fn symptoms_handler(
    State(server): State<DiagnosisServer>,
    Query(query): Query<SymptomQuery>,
) -> Json<SymptomsResponse> {
    let vocabulary = server.engine.knowledge_base().vocabulary();
    let matches = vocabulary.search(&query.q);
    let total = matches.len();

    // Groups appear in the order their first symptom was declared
    let mut groups: Vec<SymptomGroup> = Vec::new();
    for symptom in matches {
        let name = vocabulary.group_of(symptom.as_str()).unwrap_or(UNGROUPED);
        let info = SymptomInfo {
            id: symptom.to_string(),
            display_name: symptom.display_name(),
        };
        match groups.iter_mut().find(|group| group.name == name) {
            Some(group) => group.symptoms.push(info),
            None => groups.push(SymptomGroup {
                name: name.to_string(),
                symptoms: vec![info],
            }),
        }
    }

    Json(SymptomsResponse { groups, total })
}

/// Lists the conditions the rule base can diagnose.
pub async fn conditions_handler(State(server): State<DiagnosisServer>) -> Json<ConditionsResponse> {
    let kb = server.engine.knowledge_base();
    let conditions = kb
        .rules()
        .conditions()
        .into_iter()
        .map(|condition| ConditionInfo {
            id: condition.to_string(),
            display_name: condition.display_name(),
            has_treatment: kb.treatments().lookup(condition.as_str()).is_some(),
        })
        .collect();

    Json(ConditionsResponse { conditions })
}

#[cfg(test)]
mod tests {
    use super::*;
    use symptom_kb::KnowledgeBase;

    fn server() -> DiagnosisServer {
        DiagnosisServer::new(InferenceEngine::new(KnowledgeBase::builtin().unwrap()))
    }

    fn request(symptoms: &[&str]) -> Json<DiagnoseRequest> {
        Json(DiagnoseRequest {
            symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
        })
    }

    #[tokio::test]
    async fn test_diagnose_match() {
        let Json(response) = diagnose_handler(
            State(server()),
            request(&["cough", "runny_nose", "sneezing", "fatigue"]),
        )
        .await;

        assert_eq!(response.condition_id.as_deref(), Some("common_cold"));
        assert_eq!(response.display_name.as_deref(), Some("Common Cold"));
        assert!(response.treatment_text.is_some());
        assert!(response.unknown_symptoms.is_empty());
    }

    #[tokio::test]
    async fn test_diagnose_empty_is_no_match() {
        let Json(response) = diagnose_handler(State(server()), request(&[])).await;
        assert_eq!(
            response,
            DiagnoseResponse {
                condition_id: None,
                display_name: None,
                treatment_text: None,
                unknown_symptoms: vec![],
            }
        );
    }

    #[tokio::test]
    async fn test_diagnose_reports_unknown_symptoms() {
        let Json(response) =
            diagnose_handler(State(server()), request(&["xyz", "fever", "chills"])).await;
        assert_eq!(response.condition_id, None);
        assert_eq!(response.unknown_symptoms, vec!["xyz".to_string()]);
    }

    #[tokio::test]
    async fn test_symptoms_search() {
        let Json(response) = symptoms_handler(
            State(server()),
            Query(SymptomQuery {
                q: "throat".to_string(),
            }),
        )
        .await;

        assert_eq!(response.total, 2);
        assert_eq!(response.groups.len(), 1);
        assert_eq!(response.groups[0].name, "Head/Throat");
    }

    #[tokio::test]
    async fn test_symptoms_follow_picker_order() {
        let Json(response) =
            symptoms_handler(State(server()), Query(SymptomQuery::default())).await;

        let names: Vec<&str> = response.groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["General", "Respiratory", "Head/Throat", "Body", "Digestive", "Other"]
        );
        let general: Vec<&str> = response.groups[0]
            .symptoms
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(general, vec!["fever", "high_fever", "mild_fever", "chills", "fatigue", "extreme_fatigue"]);
        assert_eq!(response.total, 32);
    }

    #[tokio::test]
    async fn test_conditions_listing() {
        let Json(response) = conditions_handler(State(server())).await;
        assert_eq!(response.conditions.len(), 10);
        assert_eq!(response.conditions[0].id, "pneumonia");
        assert!(response.conditions.iter().all(|c| c.has_treatment));
    }

    #[test]
    fn test_response_serialization() {
        let response = DiagnoseResponse {
            condition_id: Some("flu".to_string()),
            display_name: Some("Flu".to_string()),
            treatment_text: None,
            unknown_symptoms: vec![],
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["condition_id"], "flu");
        assert!(json["treatment_text"].is_null());
    }

    #[test]
    fn test_router_builds() {
        let _router = server().router();
    }
}
